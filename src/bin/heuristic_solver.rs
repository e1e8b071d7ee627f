use std::path::PathBuf;

use log::{LevelFilter, info};
use prp::{log::build_logger_for_verbosity, prelude::*};
use structopt::StructOpt;

#[derive(StructOpt, Default)]
struct Opts {
    /// Instance file; reads stdin when absent
    #[structopt(short = "i")]
    input: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn load_matrix(path: &Option<PathBuf>) -> anyhow::Result<DistanceMatrix> {
    if let Some(path) = path {
        Ok(DistanceMatrix::try_read_file(path)?)
    } else {
        let stdin = std::io::stdin().lock();
        Ok(DistanceMatrix::try_read(stdin)?)
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let matrix = load_matrix(&opts.input)?;
    info!("loaded instance with {} nodes", matrix.number_of_nodes());

    let weight = min_path(&matrix)?;
    println!("{weight}");

    Ok(())
}
