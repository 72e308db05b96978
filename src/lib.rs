pub mod buildings;
pub mod engine;
pub mod events;
pub mod rng;
pub mod scenario;
pub mod snapshot;
pub mod systems;
pub mod tech;
pub mod web;
pub mod world;

pub use engine::{Engine, EngineBuilder, EngineSettings, TurnSummary};
pub use scenario::{Scenario, ScenarioLoader};
pub use world::{Colony, ColonySnapshot};
