//! Build a phylogenetic tree from DNA records.
//!
//! ```text
//! cargo run --example hcphylo -- <input.fasta> [<output>]
//! ```

use std::fs::File;
use std::io::{self, BufReader};

use dendro::input::read_sequences;
use dendro::HierarchicalClustering;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(input) = args.first() else {
        eprintln!("No file names provided.\nUsage: hcphylo <input_file> [<output_file>]");
        return Ok(());
    };

    let (names, distance) = read_sequences(BufReader::new(File::open(input)?))?.into_distance();
    let dendro = HierarchicalClustering::new().fit_dendrogram(&names, &distance)?;

    match args.get(1) {
        Some(path) => {
            println!("Outputting the tree in file {path}.");
            dendro.render(&mut File::create(path)?)?;
        }
        None => {
            println!("Tree:");
            dendro.render(&mut io::stdout().lock())?;
        }
    }
    Ok(())
}
