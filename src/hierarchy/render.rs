//! Indented text rendering of a dendrogram.
//!
//! One line per node in pre-order, two spaces of indentation per level.
//! Internal nodes print their merge distance with four decimals, leaves
//! print their identifier:
//!
//! ```text
//! Distance: 10.0000
//!   Distance: 1.0000
//!     A
//!     B
//!   Distance: 2.0000
//!     C
//!     D
//! ```

use core::fmt;
use std::io;

use super::dendrogram::Dendrogram;
use crate::error::Result;

const INDENT: &str = "  ";

impl fmt::Display for Dendrogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree();
        for (node, depth) in tree.preorder(self.root()) {
            let Some(content) = tree.data(node) else {
                continue;
            };
            for _ in 0..depth {
                f.write_str(INDENT)?;
            }
            writeln!(f, "{content}")?;
        }
        Ok(())
    }
}

impl Dendrogram {
    /// Write the indented rendering to `out`.
    pub fn render<W: io::Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{self}")?;
        out.flush()?;
        Ok(())
    }
}
