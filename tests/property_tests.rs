use proptest::prelude::*;
use spacefleet::models::constants::MAX_FUEL;
use spacefleet::services::navigation::{calculate_distance, fuel_consumption};
use spacefleet::services::scenario::{generate_fleet, rotate_ships};
use spacefleet::{Base, Fleet, Position};

proptest! {
    /// Property: a valid base keeps exactly the name and position it was given
    #[test]
    fn base_preserves_construction_values(
        name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
        x in 0i32..100_000,
        y in 0i32..100_000
    ) {
        let base = Base::new(&name, x, y).unwrap();
        prop_assert_eq!(base.name(), name.as_str());
        prop_assert_eq!(base.position(), Position { x, y });
    }

    /// Property: a negative coordinate always fails base construction
    #[test]
    fn base_rejects_negative_coordinates(
        x in -100_000i32..100_000,
        y in -100_000i32..0
    ) {
        prop_assert!(Base::new("Mir", x, y).is_err());
        prop_assert!(Base::new("Mir", y, x.abs()).is_err());
    }

    /// Property: refuel within capacity adds exactly, past capacity changes nothing
    #[test]
    fn refuel_respects_capacity(
        start in 0.0f64..=2000.0,
        amount in 0.0f64..4000.0
    ) {
        let mut fleet = Fleet::new();
        let home = fleet.add_home_station();
        let id = fleet.commission_ship(home, 0, 0, start).unwrap();
        let ship = fleet.ship_mut(id).unwrap();

        let result = ship.refuel(amount);
        if start + amount <= MAX_FUEL {
            prop_assert!(result.is_ok());
            prop_assert_eq!(ship.fuel(), (start + amount).min(MAX_FUEL));
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(ship.fuel(), start);
        }
    }

    /// Property: a move to a negative target never mutates the ship
    #[test]
    fn negative_target_never_mutates(
        x in -1000i32..1000,
        y in -1000i32..-1
    ) {
        let mut fleet = Fleet::new();
        let home = fleet.add_home_station();
        let id = fleet.commission_ship(home, 5, 5, 1000.0).unwrap();
        let ship = fleet.ship_mut(id).unwrap();

        prop_assert!(ship.move_to(x, y).is_err());
        prop_assert!(ship.move_to(y, x.abs()).is_err());
        prop_assert_eq!(ship.position(), Position { x: 5, y: 5 });
        prop_assert_eq!(ship.fuel(), 1000.0);
    }

    /// Property: fuel never goes negative; failed moves change nothing
    #[test]
    fn fuel_never_goes_negative(
        fuel in 0.0f64..=2000.0,
        x in 0i32..1000,
        y in 0i32..1000
    ) {
        let mut fleet = Fleet::new();
        let home = fleet.add_home_station();
        let id = fleet.commission_ship(home, 0, 0, fuel).unwrap();
        let ship = fleet.ship_mut(id).unwrap();

        let cost = fuel_consumption(calculate_distance(Position::ORIGIN, Position { x, y }));
        match ship.move_to(x, y) {
            Ok(()) => {
                prop_assert!(ship.fuel() >= 0.0);
                prop_assert!((ship.fuel() - (fuel - cost)).abs() < 1e-9);
                prop_assert_eq!(ship.position(), Position { x, y });
            }
            Err(_) => {
                prop_assert!(fuel - cost < 0.0);
                prop_assert_eq!(ship.fuel(), fuel);
                prop_assert_eq!(ship.position(), Position::ORIGIN);
            }
        }
    }

    /// Property: distance is symmetric and non-negative
    #[test]
    fn distance_is_symmetric(
        x1 in 0i32..10_000, y1 in 0i32..10_000,
        x2 in 0i32..10_000, y2 in 0i32..10_000
    ) {
        let a = Position { x: x1, y: y1 };
        let b = Position { x: x2, y: y2 };
        let d1 = calculate_distance(a, b);
        let d2 = calculate_distance(b, a);
        prop_assert!(d1 >= 0.0);
        prop_assert!((d1 - d2).abs() < 1e-9);
    }

    /// Property: arrange_ships yields ascending ids, arrange_ships_by_fuel ascending fuel
    #[test]
    fn arrangements_are_sorted(fuels in prop::collection::vec(0.0f64..=2000.0, 0..12)) {
        let mut fleet = Fleet::new();
        let home = fleet.add_home_station();
        let depot = fleet.add_home_station();
        let mut ids = Vec::new();
        for fuel in &fuels {
            ids.push(fleet.commission_ship(home, 0, 0, *fuel).unwrap());
        }
        for id in ids.iter().rev() {
            fleet.dock(depot, *id).unwrap();
        }

        let by_id: Vec<_> = fleet.arrange_ships(depot).unwrap().iter().map(|s| s.id()).collect();
        prop_assert!(by_id.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(by_id.len(), fuels.len());

        let by_fuel: Vec<_> = fleet.arrange_ships_by_fuel(depot).unwrap().iter().map(|s| s.fuel()).collect();
        prop_assert!(by_fuel.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Property: built ships sit at their base, full, docked at home
    #[test]
    fn built_ship_matches_base(x in 0i32..10_000, y in 0i32..10_000) {
        let mut fleet = Fleet::new();
        let base = fleet.add_base(Base::new("Forge", x, y).unwrap());
        let id = fleet.build_ship(base).unwrap();
        let ship = fleet.ship(id).unwrap();
        prop_assert_eq!(ship.home_base(), base);
        prop_assert_eq!(ship.docking_base(), Some(base));
        prop_assert_eq!(ship.fuel(), MAX_FUEL);
        prop_assert_eq!(ship.position(), Position { x, y });
    }

    /// Property: every ship is listed at no more than one base, and the
    /// base listing it is its docking base
    #[test]
    fn ship_listed_at_most_once(seed in any::<u64>(), bases in 1usize..6, rounds in 0usize..4) {
        let mut fleet = generate_fleet(seed, bases, 2).unwrap();
        for _ in 0..rounds {
            let _ = rotate_ships(&mut fleet);
        }

        for ship in fleet.ships() {
            let holders: Vec<_> = fleet
                .bases()
                .filter(|(_, b)| b.is_docked(ship.id()))
                .map(|(id, _)| id)
                .collect();
            prop_assert!(holders.len() <= 1);
            if let Some(holder) = holders.first() {
                prop_assert_eq!(ship.docking_base(), Some(*holder));
            }
        }
    }

    /// Property: same seed, same fleet
    #[test]
    fn generation_is_deterministic(seed in any::<u64>()) {
        let a = generate_fleet(seed, 4, 1).unwrap();
        let b = generate_fleet(seed, 4, 1).unwrap();
        let positions = |f: &Fleet| f.bases().map(|(_, b)| b.position()).collect::<Vec<_>>();
        prop_assert_eq!(positions(&a), positions(&b));
    }
}
