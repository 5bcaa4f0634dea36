//! Readers for the two object sources: feature tables and DNA records.
//!
//! Both readers return names in file order (the clustering input) plus a
//! keyed distance ready to hand to the engine.

use std::collections::HashMap;
use std::io::BufRead;

use crate::distance::{FeatureDistance, SequenceDistance};
use crate::error::{Error, Result};

/// Named feature vectors read from CSV.
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    /// Object names, in file order.
    pub names: Vec<String>,
    /// Number of features per object.
    pub n_features: usize,
    /// Feature vector of each object.
    pub features: HashMap<String, Vec<f64>>,
}

impl FeatureTable {
    /// Euclidean distance over this table.
    pub fn into_distance(self) -> (Vec<String>, FeatureDistance) {
        (self.names, FeatureDistance::new(self.features))
    }
}

/// Named DNA sequences read from FASTA-like records.
#[derive(Debug, Clone, Default)]
pub struct SequenceTable {
    /// Record names, in file order.
    pub names: Vec<String>,
    /// Sequence of each record.
    pub sequences: HashMap<String, String>,
}

impl SequenceTable {
    /// Nucleotide distance over this table.
    pub fn into_distance(self) -> (Vec<String>, SequenceDistance) {
        (self.names, SequenceDistance::new(self.sequences))
    }
}

fn parse_err(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

/// Read a feature table.
///
/// The first line is a header; the number of commas in it is the number of
/// features. Every other non-blank line is `name,f1,...,fk`. Fields beyond
/// the `k`-th are ignored.
pub fn read_features<R: BufRead>(reader: R) -> Result<FeatureTable> {
    let mut lines = reader.lines();
    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(parse_err(1, "the file is empty")),
    };
    let n_features = header.matches(',').count();

    let mut table = FeatureTable {
        n_features,
        ..FeatureTable::default()
    };
    for (idx, line) in lines.enumerate() {
        let line_no = idx + 2;
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }

        let (name, rest) = line
            .split_once(',')
            .ok_or_else(|| parse_err(line_no, "missing ',' after object name"))?;
        let values = rest
            .split(',')
            .take(n_features)
            .map(|field| {
                field.trim().parse::<f64>().map_err(|_| {
                    parse_err(line_no, format!("invalid feature value '{}'", field.trim()))
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        if values.len() != n_features {
            return Err(parse_err(
                line_no,
                format!("not enough features for object {name}"),
            ));
        }

        if table.features.insert(name.to_owned(), values).is_some() {
            return Err(Error::DuplicateObject(name.to_owned()));
        }
        table.names.push(name.to_owned());
    }

    Ok(table)
}

/// Read DNA records.
///
/// A line starting with `>` opens a record named by its first word. The
/// following lines, up to the next `>`, are concatenated (whitespace removed,
/// upper-cased) into the record's sequence.
pub fn read_sequences<R: BufRead>(reader: R) -> Result<SequenceTable> {
    let mut table = SequenceTable::default();
    let mut current: Option<(String, String)> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            let name = header
                .split_whitespace()
                .next()
                .ok_or_else(|| parse_err(line_no, "record without a name"))?;
            if let Some(done) = current.take() {
                push_record(&mut table, done)?;
            }
            current = Some((name.to_owned(), String::new()));
        } else {
            let (_, seq) = current
                .as_mut()
                .ok_or_else(|| parse_err(line_no, "sequence data before the first '>' header"))?;
            seq.extend(
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| c.to_ascii_uppercase()),
            );
        }
    }
    if let Some(done) = current {
        push_record(&mut table, done)?;
    }

    Ok(table)
}

fn push_record(table: &mut SequenceTable, (name, seq): (String, String)) -> Result<()> {
    if table.sequences.contains_key(&name) {
        return Err(Error::DuplicateObject(name));
    }
    table.names.push(name.clone());
    table.sequences.insert(name, seq);
    Ok(())
}
