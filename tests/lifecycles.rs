use std::path::PathBuf;

use exodus::buildings::Terrain;
use exodus::engine::{Engine, EngineBuilder, EngineSettings};
use exodus::world::{Colony, ColonistPool, Disaster, Grid, MissionKind, ResourceStock};

fn settings(event_chance: f64, disaster_chance: f64) -> EngineSettings {
    EngineSettings {
        scenario_name: "test_colony".into(),
        seed: 11,
        snapshot_interval_turns: 0,
        snapshot_dir: PathBuf::from("snapshots_test"),
        event_chance,
        disaster_chance,
    }
}

fn crewed_colony() -> Colony {
    Colony::new(
        Grid::all(Terrain::Empty),
        ResourceStock {
            oxygen: 100,
            food: 100,
            energy: 100,
            research: 0,
            materials: 50,
        },
        ColonistPool {
            total: 5,
            scientists: 0,
            engineers: 0,
            medics: 0,
        },
    )
}

/// No colonists, comfortable stocks: morale and health tick up by one each
/// turn, which makes disaster arithmetic exact.
fn unmanned_colony() -> Colony {
    Colony::new(
        Grid::all(Terrain::Empty),
        ResourceStock {
            oxygen: 100,
            food: 100,
            energy: 100,
            research: 100,
            materials: 100,
        },
        ColonistPool {
            total: 0,
            scientists: 0,
            engineers: 0,
            medics: 0,
        },
    )
}

fn quiet_engine(colony: Colony) -> Engine {
    EngineBuilder::new(settings(0.0, 0.0))
        .with_default_systems()
        .build(colony)
}

#[test]
fn mission_completes_exactly_on_the_fifth_turn() {
    let mut engine = quiet_engine(crewed_colony());
    engine.start_mission(MissionKind::Exploration);

    engine.run(4).unwrap();
    assert_eq!(engine.colony().missions().len(), 1);
    assert_eq!(engine.colony().missions()[0].turns_left, 1);
    assert_eq!(engine.colony().resources().research, 0);
    assert_eq!(engine.colony().resources().materials, 30);

    engine.advance_turn().unwrap();
    assert!(engine.colony().missions().is_empty());
    assert_eq!(engine.colony().resources().research, 20);
    assert_eq!(engine.colony().resources().materials, 40);
    assert_eq!(
        engine.colony().message(),
        "Exploration mission completed! Gained resources."
    );

    // The reward is credited once; the next turn only consumes.
    engine.advance_turn().unwrap();
    assert_eq!(engine.colony().resources().research, 20);
    assert_eq!(engine.colony().resources().materials, 35);
}

#[test]
fn missions_tick_independently() {
    let mut engine = quiet_engine(crewed_colony());
    engine.start_mission(MissionKind::Exploration);
    engine.run(2).unwrap();
    engine.start_mission(MissionKind::Research);
    engine.run(3).unwrap();

    assert_eq!(engine.colony().resources().research, 20);
    let remaining = engine.colony().missions();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].kind, MissionKind::Research);
    assert_eq!(remaining[0].turns_left, 2);
}

#[test]
fn disaster_applies_exactly_ten_times() {
    let mut engine = quiet_engine(unmanned_colony());
    engine
        .colony_mut()
        .disasters_mut()
        .push(Disaster::alien_invasion());

    engine.run(9).unwrap();
    assert_eq!(engine.colony().disasters().len(), 1);
    assert_eq!(engine.colony().disasters()[0].turns_left, 1);

    engine.advance_turn().unwrap();
    assert!(engine.colony().disasters().is_empty());
    // First hit lands on a full gauge, the other nine tick down net −1.
    assert_eq!(engine.colony().health(), 89);
    assert_eq!(engine.colony().happiness(), 89);
    assert_eq!(engine.colony().message(), "Alien Invasion has been resolved!");

    // With the disaster gone, the gauges recover.
    engine.advance_turn().unwrap();
    assert_eq!(engine.colony().health(), 90);
    assert_eq!(engine.colony().happiness(), 90);
}

#[test]
fn at_most_three_disasters_accumulate() {
    let mut engine = EngineBuilder::new(settings(0.0, 1.0))
        .with_default_systems()
        .build(unmanned_colony());

    engine.advance_turn().unwrap();
    assert_eq!(engine.colony().disasters().len(), 1);
    assert_eq!(
        engine.colony().message(),
        "New disaster: Alien Invasion! Defend the colony!"
    );

    engine.run(4).unwrap();
    assert_eq!(engine.colony().disasters().len(), 3);
    // The oldest has ticked five times.
    assert_eq!(engine.colony().disasters()[0].turns_left, 5);
}
