//! Cluster objects described by numeric features.
//!
//! ```text
//! cargo run --example hcfeatures -- (-th <threshold> | -k <num_clusters>) <input.csv> [<output>]
//! ```

use std::fs::File;
use std::io::{self, BufReader};

use dendro::input::read_features;
use dendro::{Cluster, HierarchicalClustering};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: hcfeatures (-th <threshold> | -k <num_clusters>) <input_file> [<output_file>]";

enum Cut {
    Threshold(f64),
    Count(usize),
}

fn parse_args(args: &[String]) -> Option<(Cut, &str, Option<&str>)> {
    let [flag, value, input, rest @ ..] = args else {
        return None;
    };
    let cut = match flag.as_str() {
        "-th" => Cut::Threshold(value.parse().ok()?),
        "-k" => Cut::Count(value.parse().ok()?),
        _ => return None,
    };
    Some((cut, input.as_str(), rest.first().map(String::as_str)))
}

fn print_clusters(clusters: &[Cluster]) {
    for (i, cluster) in clusters.iter().enumerate() {
        println!(
            "- Cluster {} (size={}): {}",
            i + 1,
            cluster.len(),
            cluster.join(", ")
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((cut, input, output)) = parse_args(&args) else {
        eprintln!("Not enough or invalid arguments.\n{USAGE}");
        return Ok(());
    };

    let table = read_features(BufReader::new(File::open(input)?))?;
    println!(
        "{} objects read, with {} features",
        table.names.len(),
        table.n_features
    );
    let (names, distance) = table.into_distance();

    println!("Construction of the tree");
    let dendro = HierarchicalClustering::new().fit_dendrogram(&names, &distance)?;

    let clusters = match cut {
        Cut::Threshold(th) => {
            let clusters = dendro.cut_at_distance(th)?;
            println!(
                "Clusters ({}) with a distance threshold of {th:.6}:",
                clusters.len()
            );
            clusters
        }
        Cut::Count(k) => {
            println!("Clusters for k={k}:");
            dendro.cut_to_k(k)?
        }
    };
    print_clusters(&clusters);

    match output {
        Some(path) => {
            println!("Outputting the tree in file {path}.");
            dendro.render(&mut File::create(path)?)?;
        }
        None => {
            println!("The tree:");
            dendro.render(&mut io::stdout().lock())?;
        }
    }
    Ok(())
}
