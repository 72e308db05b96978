use anyhow::Result;

use crate::{
    engine::{System, SystemContext},
    rng::StreamRng,
    world::{Colony, Resource},
};

pub struct ResourceSystem;

impl ResourceSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ResourceSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for ResourceSystem {
    fn name(&self) -> &'static str {
        "resources"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        colony: &mut Colony,
        _rng: &mut StreamRng<'_>,
    ) -> Result<()> {
        for resource in Resource::ALL {
            let production = i64::from(colony.production(resource));
            let consumption = i64::from(colony.consumption(resource));
            colony
                .resources_mut()
                .apply(resource, production - consumption);
        }
        Ok(())
    }
}
