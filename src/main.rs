use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use spacefleet::cli::args;
use spacefleet::io::{OutputWriter, TerminalOutput};
use spacefleet::services::scenario;
use spacefleet::ui::presenters::FleetPresenter;

fn main() -> Result<()> {
    let args = args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    let seed = args.seed.unwrap_or(0);
    info!(seed, bases = args.bases, ships = args.ships, "generating fleet");

    let mut fleet = scenario::generate_fleet(seed, args.bases, args.ships)
        .context("failed to generate fleet")?;
    let mut output = TerminalOutput;

    output.writeln("*** FLEET ***");
    FleetPresenter::show_fleet(&fleet, &mut output)?;

    for round in 1..=args.rounds {
        output.writeln("");
        output.writeln(&format!("*** ROUND {} ***", round));
        for outcome in scenario::rotate_ships(&mut fleet) {
            FleetPresenter::show_relocation(&outcome, &mut output);
        }
        output.writeln("");
        FleetPresenter::show_fleet(&fleet, &mut output)?;
    }

    Ok(())
}
