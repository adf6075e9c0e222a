//! Seeded fleet generation
//!
//! Builds a reproducible demo fleet: the home station at the origin plus
//! named bases scattered over the sector, each with freshly built ships.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::models::base::Base;
use crate::models::constants::SECTOR_EXTENT;
use crate::models::errors::FleetResult;
use crate::models::fleet::{Fleet, Relocation};
use crate::models::ids::BaseId;
use crate::models::validation::require_true;

const STATION_NAMES: [&str; 8] = [
    "Mir",
    "Tiangong",
    "Skylab",
    "Salyut",
    "Gateway",
    "Deep Space Nine",
    "Babylon 5",
    "Citadel",
];

fn station_name(index: usize) -> String {
    let name = STATION_NAMES[index % STATION_NAMES.len()];
    match index / STATION_NAMES.len() {
        0 => name.to_string(),
        round => format!("{name} {}", round + 1),
    }
}

/// Generate a fleet with `bases` bases (the first is the home station)
/// and `ships_per_base` ships built at each. Same seed, same fleet.
pub fn generate_fleet(seed: u64, bases: usize, ships_per_base: usize) -> FleetResult<Fleet> {
    require_true(bases >= 1, || {
        String::from("generate_fleet: at least one base is required")
    })?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut fleet = Fleet::new();
    fleet.add_home_station();

    for index in 0..bases - 1 {
        let x = rng.gen_range(0..SECTOR_EXTENT);
        let y = rng.gen_range(0..SECTOR_EXTENT);
        fleet.add_base(Base::new(&station_name(index), x, y)?);
    }

    let ids: Vec<BaseId> = fleet.bases().map(|(id, _)| id).collect();
    for base in ids {
        for _ in 0..ships_per_base {
            fleet.build_ship(base)?;
        }
    }

    info!(
        seed,
        bases = fleet.base_count(),
        ships = fleet.ship_count(),
        "fleet generated"
    );
    Ok(fleet)
}

/// Send the lowest-id ship of every base to the next base in
/// registration order (the last base sends to the first).
pub fn rotate_ships(fleet: &mut Fleet) -> Vec<Relocation> {
    let ids: Vec<BaseId> = fleet.bases().map(|(id, _)| id).collect();
    if ids.len() < 2 {
        return Vec::new();
    }

    // Pick all travellers first so a ship is not moved twice in one round.
    let moves: Vec<_> = ids
        .iter()
        .enumerate()
        .filter_map(|(i, &from)| {
            let to = ids[(i + 1) % ids.len()];
            let ship = fleet.base(from).ok()?.docked_ships().iter().min().copied()?;
            Some((from, ship, to))
        })
        .collect();

    moves
        .into_iter()
        .map(|(from, ship, to)| fleet.move_ship_to(from, ship, to))
        .collect()
}
