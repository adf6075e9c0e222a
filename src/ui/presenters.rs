use crate::io::OutputWriter;
use crate::models::errors::FleetResult;
use crate::models::fleet::{Fleet, Relocation};
use crate::models::ids::BaseId;
use crate::models::ship::Ship;

pub struct FleetPresenter;

impl FleetPresenter {
    /// Write a base followed by every ship docked there.
    pub fn show_base(fleet: &Fleet, id: BaseId, output: &mut dyn OutputWriter) -> FleetResult<()> {
        let base = fleet.base(id)?;
        output.write(&format!("Base '{}', position {}", base.name(), base.position()));

        let ships = fleet.docked_ships(id)?;
        if ships.is_empty() {
            output.writeln(", no ships");
            return Ok(());
        }

        let noun = if ships.len() > 1 { "ships" } else { "ship" };
        output.writeln(&format!(", {} {} in docks", ships.len(), noun));
        for ship in ships {
            Self::show_ship(fleet, ship, output);
        }
        Ok(())
    }

    pub fn show_ship(fleet: &Fleet, ship: &Ship, output: &mut dyn OutputWriter) {
        let base_name = |id: BaseId| {
            fleet
                .base(id)
                .map(|b| b.name().to_string())
                .unwrap_or_else(|_| String::from("unknown"))
        };

        output.writeln(&format!(
            "Ship id {}, position {}, fuel {}",
            ship.id(),
            ship.position(),
            ship.fuel()
        ));
        output.writeln(&format!("  home base: {}", base_name(ship.home_base())));
        let docking = match ship.docking_base() {
            Some(id) if ship.is_home_base(id) => String::from("at home"),
            Some(id) => base_name(id),
            None => String::from("none"),
        };
        output.writeln(&format!("  docking base: {}", docking));
    }

    pub fn show_fleet(fleet: &Fleet, output: &mut dyn OutputWriter) -> FleetResult<()> {
        for (id, _) in fleet.bases() {
            Self::show_base(fleet, id, output)?;
        }
        Ok(())
    }

    pub fn show_relocation(outcome: &Relocation, output: &mut dyn OutputWriter) {
        let line = match outcome {
            Relocation::Moved(id) => format!("ship {} relocated", id),
            Relocation::NotFound => String::from("relocation skipped: ship or base not found"),
            Relocation::MoveRejected(err) => format!("relocation refused: {}", err),
            Relocation::NotRedocked(err) => format!("moved but not redocked: {}", err),
        };
        output.writeln(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::BufferedOutput;
    use crate::models::base::Base;

    #[test]
    fn empty_base_reports_no_ships() {
        let mut fleet = Fleet::new();
        let station = fleet.add_home_station();
        let mut out = BufferedOutput::new();

        FleetPresenter::show_base(&fleet, station, &mut out).unwrap();
        assert_eq!(
            out.as_str(),
            "Base 'International Space Station', position 0/0, no ships\n"
        );
    }

    #[test]
    fn docked_ship_at_home_is_reported() {
        let mut fleet = Fleet::new();
        let station = fleet.add_home_station();
        fleet.build_ship(station).unwrap();
        let mut out = BufferedOutput::new();

        FleetPresenter::show_base(&fleet, station, &mut out).unwrap();
        assert_eq!(
            out.lines(),
            vec![
                "Base 'International Space Station', position 0/0, 1 ship in docks",
                "Ship id 100, position 0/0, fuel 2000",
                "  home base: International Space Station",
                "  docking base: at home",
            ]
        );
    }

    #[test]
    fn visiting_ship_names_its_docking_base() {
        let mut fleet = Fleet::new();
        let station = fleet.add_home_station();
        let mir = fleet.add_base(Base::new("Mir", 0, 0).unwrap());
        let first = fleet.build_ship(station).unwrap();
        fleet.build_ship(station).unwrap();
        fleet.dock(mir, first).unwrap();
        fleet.build_ship(mir).unwrap();
        let mut out = BufferedOutput::new();

        FleetPresenter::show_base(&fleet, mir, &mut out).unwrap();
        let text = out.as_str();
        assert!(text.starts_with("Base 'Mir', position 0/0, 2 ships in docks"));
        assert!(text.contains("  docking base: Mir"));
        assert!(text.contains("  docking base: at home"));
    }

    #[test]
    fn relocation_outcomes_are_described() {
        let mut out = BufferedOutput::new();
        FleetPresenter::show_relocation(&Relocation::NotFound, &mut out);
        assert!(out.as_str().contains("not found"));
    }
}
