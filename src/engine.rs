use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use crate::buildings::Building;
use crate::rng::{RngManager, StreamRng};
use crate::scenario::Scenario;
use crate::snapshot::SnapshotWriter;
use crate::systems::{
    DisasterSystem, EventSystem, HealthSystem, MissionSystem, MoraleSystem, PhaseSystem,
    ResourceSystem,
};
use crate::world::{Colony, ColonySnapshot, MissionKind, Role};

pub struct EngineSettings {
    pub scenario_name: String,
    pub seed: u64,
    pub snapshot_interval_turns: u64,
    pub snapshot_dir: PathBuf,
    pub event_chance: f64,
    pub disaster_chance: f64,
}

impl EngineSettings {
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self {
            scenario_name: scenario.name.clone(),
            seed: scenario.seed,
            snapshot_interval_turns: scenario.snapshot_interval_turns,
            snapshot_dir: PathBuf::from("snapshots"),
            event_chance: scenario.tuning.event_chance,
            disaster_chance: scenario.tuning.disaster_chance,
        }
    }

    pub fn with_snapshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.snapshot_dir = dir.into();
        self
    }
}

pub struct EngineBuilder {
    settings: EngineSettings,
    systems: Vec<Box<dyn System>>,
}

impl EngineBuilder {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            systems: Vec::new(),
        }
    }

    pub fn with_system(mut self, system: impl System + 'static) -> Self {
        self.systems.push(Box::new(system));
        self
    }

    /// Wires the canonical turn pipeline in its fixed order.
    pub fn with_default_systems(self) -> Self {
        self.with_system(ResourceSystem::new())
            .with_system(EventSystem::new())
            .with_system(PhaseSystem::new())
            .with_system(MoraleSystem::new())
            .with_system(HealthSystem::new())
            .with_system(MissionSystem::new())
            .with_system(DisasterSystem::new())
    }

    pub fn build(self, colony: Colony) -> Engine {
        let rng = RngManager::new(self.settings.seed);
        self.into_engine(colony, rng)
    }

    /// Builds the starting colony from the scenario, drawing its terrain
    /// from the session seed so identical scenarios yield identical maps.
    pub fn build_from_scenario(self, scenario: &Scenario) -> Engine {
        let mut rng = RngManager::new(self.settings.seed);
        let colony = scenario.build_colony(&mut rng.stream("terrain"));
        self.into_engine(colony, rng)
    }

    fn into_engine(self, colony: Colony, rng: RngManager) -> Engine {
        Engine {
            colony,
            rng,
            snapshot_writer: SnapshotWriter::new(
                &self.settings.snapshot_dir,
                self.settings.snapshot_interval_turns,
            ),
            systems: self.systems,
            selected: None,
            settings: self.settings,
        }
    }
}

pub struct Engine {
    colony: Colony,
    systems: Vec<Box<dyn System>>,
    rng: RngManager,
    snapshot_writer: SnapshotWriter,
    selected: Option<Building>,
    settings: EngineSettings,
}

impl Engine {
    pub fn colony(&self) -> &Colony {
        &self.colony
    }

    pub fn colony_mut(&mut self) -> &mut Colony {
        &mut self.colony
    }

    pub fn scenario_name(&self) -> &str {
        &self.settings.scenario_name
    }

    pub fn snapshot(&self) -> ColonySnapshot {
        self.colony.snapshot()
    }

    /// UI selection state, held alongside the simulation and absent from
    /// snapshots.
    pub fn select_building(&mut self, kind: Building) {
        self.selected = Some(kind);
    }

    pub fn selected_building(&self) -> Option<Building> {
        self.selected
    }

    pub fn place_building(&mut self, row: usize, col: usize, kind: Building) {
        self.colony.place_building(row, col, kind);
    }

    pub fn research_tech(&mut self, id: &str) {
        self.colony.research_tech(id);
    }

    pub fn add_colonist(&mut self, role: Role) {
        self.colony.add_colonist(role);
    }

    pub fn start_mission(&mut self, kind: MissionKind) {
        self.colony.start_mission(kind);
    }

    /// Runs the full turn pipeline once. Systems execute in wiring order,
    /// each on its own named RNG stream.
    pub fn advance_turn(&mut self) -> Result<TurnSummary> {
        self.colony.turn += 1;
        let mut reports = Vec::with_capacity(self.systems.len());
        for system in &mut self.systems {
            let ctx = SystemContext {
                turn: self.colony.turn,
                scenario_name: &self.settings.scenario_name,
                event_chance: self.settings.event_chance,
                disaster_chance: self.settings.disaster_chance,
            };
            let mut stream = self.rng.stream(system.name());
            let started = Instant::now();
            system.run(&ctx, &mut self.colony, &mut stream)?;
            reports.push(SystemRunReport {
                name: system.name(),
                duration_ms: started.elapsed().as_secs_f64() * 1_000.0,
            });
        }
        let snapshot_path = self
            .snapshot_writer
            .maybe_write(&self.colony, &self.settings.scenario_name)?;
        Ok(TurnSummary {
            turn: self.colony.turn,
            reports,
            snapshot_path,
        })
    }

    pub fn run(&mut self, turns: u64) -> Result<()> {
        for _ in 0..turns {
            self.advance_turn()?;
        }
        Ok(())
    }

    pub fn run_with_hook(
        &mut self,
        turns: u64,
        mut hook: impl FnMut(ColonySnapshot),
    ) -> Result<()> {
        for _ in 0..turns {
            self.advance_turn()?;
            hook(self.colony.snapshot());
        }
        Ok(())
    }
}

pub struct SystemContext<'a> {
    pub turn: u64,
    pub scenario_name: &'a str,
    pub event_chance: f64,
    pub disaster_chance: f64,
}

pub trait System: Send + Sync {
    fn name(&self) -> &'static str;
    fn run(
        &mut self,
        ctx: &SystemContext,
        colony: &mut Colony,
        rng: &mut StreamRng<'_>,
    ) -> Result<()>;
}

#[derive(Clone, Debug)]
pub struct SystemRunReport {
    pub name: &'static str,
    pub duration_ms: f64,
}

#[derive(Clone, Debug)]
pub struct TurnSummary {
    pub turn: u64,
    pub reports: Vec<SystemRunReport>,
    pub snapshot_path: Option<PathBuf>,
}
