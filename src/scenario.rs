use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rand::Rng;
use serde::Deserialize;

use crate::world::{Colony, ColonistPool, Grid, ResourceStock};

fn default_snapshot_interval_turns() -> u64 {
    10
}

fn default_event_chance() -> f64 {
    0.15
}

fn default_disaster_chance() -> f64 {
    0.01
}

fn default_gauge() -> i32 {
    100
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub seed: u64,
    #[serde(default)]
    pub turns: Option<u64>,
    #[serde(default = "default_snapshot_interval_turns")]
    pub snapshot_interval_turns: u64,
    pub resources: ResourceInit,
    pub colonists: ColonistInit,
    #[serde(default)]
    pub tuning: Tuning,
    #[serde(default = "default_gauge")]
    pub happiness: i32,
    #[serde(default = "default_gauge")]
    pub health: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceInit {
    pub oxygen: u32,
    pub food: u32,
    pub energy: u32,
    #[serde(default)]
    pub research: u32,
    pub materials: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColonistInit {
    pub total: u32,
    #[serde(default)]
    pub scientists: u32,
    #[serde(default)]
    pub engineers: u32,
    #[serde(default)]
    pub medics: u32,
}

/// Probability knobs for the random subsystems. Pinning these to 0 or 1
/// makes a run single-path.
#[derive(Debug, Clone, Deserialize)]
pub struct Tuning {
    #[serde(default = "default_event_chance")]
    pub event_chance: f64,
    #[serde(default = "default_disaster_chance")]
    pub disaster_chance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            event_chance: default_event_chance(),
            disaster_chance: default_disaster_chance(),
        }
    }
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(scenario)
    }
}

impl Scenario {
    /// Builds the starting state. Terrain comes from `rng` cell by cell, so
    /// the same seed always lays out the same map.
    pub fn build_colony(&self, rng: &mut impl Rng) -> Colony {
        let grid = Grid::generate(rng);
        let stock = ResourceStock {
            oxygen: self.resources.oxygen,
            food: self.resources.food,
            energy: self.resources.energy,
            research: self.resources.research,
            materials: self.resources.materials,
        };
        let specialists =
            self.colonists.scientists + self.colonists.engineers + self.colonists.medics;
        let colonists = ColonistPool {
            total: self.colonists.total.max(specialists),
            scientists: self.colonists.scientists,
            engineers: self.colonists.engineers,
            medics: self.colonists.medics,
        };
        let mut colony = Colony::new(grid, stock, colonists);
        colony.happiness = self.happiness.clamp(0, 100);
        colony.health = self.health.clamp(0, 100);
        colony
    }

    pub fn turns(&self, override_turns: Option<u64>) -> u64 {
        override_turns.or(self.turns).unwrap_or(50)
    }
}
