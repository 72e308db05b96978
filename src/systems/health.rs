use anyhow::Result;

use crate::{
    buildings::Building,
    engine::{System, SystemContext},
    rng::StreamRng,
    world::Colony,
};

pub struct HealthSystem;

impl HealthSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HealthSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for HealthSystem {
    fn name(&self) -> &'static str {
        "health"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        colony: &mut Colony,
        _rng: &mut StreamRng<'_>,
    ) -> Result<()> {
        let capacity = colony.grid().count(Building::Medical) * 10;
        let delta = if capacity >= colony.colonists().total {
            1
        } else {
            -1
        };
        colony.adjust_health(delta);
        Ok(())
    }
}
