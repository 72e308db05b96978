use anyhow::Result;

use crate::{
    buildings::Building,
    engine::{System, SystemContext},
    rng::StreamRng,
    world::Colony,
};

pub struct MoraleSystem;

impl MoraleSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MoraleSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for MoraleSystem {
    fn name(&self) -> &'static str {
        "morale"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        colony: &mut Colony,
        _rng: &mut StreamRng<'_>,
    ) -> Result<()> {
        let scarcity = colony.resources().any_below(20);
        let housing = colony.grid().count(Building::Habitat);
        let overcrowded = colony.colonists().total > housing * 5;
        let entertainment = colony.grid().count(Building::Entertainment) as i32;

        let mut change = 0;
        if scarcity {
            change -= 5;
        }
        if overcrowded {
            change -= 5;
        }
        change += entertainment;
        if !scarcity && !overcrowded {
            change += 1;
        }
        colony.adjust_happiness(change);
        Ok(())
    }
}
