use clap::Parser;

/// Generate a seeded fleet, rotate ships between bases and report.
#[derive(Debug, Parser)]
#[command(name = "spacefleet")]
#[command(version, about = "Space fleet docking simulation", long_about = None)]
pub struct Args {
    /// Seed for the random number generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of bases, including the home station
    #[arg(short, long, default_value_t = 3)]
    pub bases: usize,

    /// Ships built at each base
    #[arg(long, default_value_t = 2)]
    pub ships: usize,

    /// Relocation rounds to run
    #[arg(short, long, default_value_t = 1)]
    pub rounds: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
