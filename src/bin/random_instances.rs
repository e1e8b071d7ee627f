use itertools::Itertools;
use log::{LevelFilter, info, warn};
use prp::{log::build_logger_for_verbosity, prelude::*};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use structopt::StructOpt;

/// Cross-validates the two solvers on a stream of random instances:
/// the exact optimum must never exceed the greedy weight, and the exact
/// path must pick one representative per pair without repeats.
#[derive(StructOpt)]
struct Opts {
    #[structopt(short, long, default_value = "1000")]
    repeats: u32,

    #[structopt(short, long, default_value = "123")]
    seed: u64,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn random_matrix(rng: &mut impl Rng, n: NumNodes) -> DistanceMatrix {
    let mut matrix = DistanceMatrix::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            matrix.set_weight(u, v, rng.gen_range(0.0..10.0));
        }
    }
    matrix
}

fn check_instance(matrix: &DistanceMatrix) -> anyhow::Result<bool> {
    matrix.is_correct()?;

    let greedy = min_path(matrix)?;
    let (exact, path) = optimal_min(matrix)?;

    if exact > greedy + 1e-9 {
        warn!(
            "exact weight {exact} exceeds greedy weight {greedy} on {} nodes",
            matrix.number_of_nodes()
        );
        return Ok(false);
    }

    let pairing = PairingIndex::try_new(matrix.number_of_nodes())?;
    let feasible = path.len() as NumNodes == pairing.number_of_pairs()
        && path.iter().map(|&u| u / 2).all_unique();
    if !feasible {
        warn!("infeasible exact path {path:?}");
    }

    Ok(feasible)
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Info, opts.verbose);

    let nodes = [4u32, 6, 8, 10, 12];
    let mut rng = Pcg64Mcg::seed_from_u64(opts.seed);

    let mut violations = 0u32;
    for round in 0..opts.repeats {
        for &n in &nodes {
            let matrix = random_matrix(&mut rng, n);
            violations += !check_instance(&matrix)? as u32;
        }

        if round % 100 == 0 && round > 0 {
            info!("completed {:>6} of {:>6} rounds", round, opts.repeats);
        }
    }

    if violations > 0 {
        anyhow::bail!("{violations} instances violated solver invariants");
    }

    info!(
        "all {} instances consistent",
        opts.repeats as usize * nodes.len()
    );
    Ok(())
}
