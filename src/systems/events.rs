use anyhow::Result;
use rand::Rng;

use crate::{
    engine::{System, SystemContext},
    events,
    rng::StreamRng,
    world::Colony,
};

pub struct EventSystem;

impl EventSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EventSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for EventSystem {
    fn name(&self) -> &'static str {
        "events"
    }

    fn run(
        &mut self,
        ctx: &SystemContext,
        colony: &mut Colony,
        rng: &mut StreamRng<'_>,
    ) -> Result<()> {
        if rng.gen::<f64>() >= ctx.event_chance {
            return Ok(());
        }
        let event = &events::CATALOG[rng.gen_range(0..events::CATALOG.len())];
        for &(resource, delta) in event.deltas {
            colony.resources_mut().apply(resource, delta);
        }
        if event.destroys_building {
            let occupied = colony.grid().occupied_positions();
            if !occupied.is_empty() {
                let (row, col) = occupied[rng.gen_range(0..occupied.len())];
                colony.grid_mut().clear(row, col);
            }
        }
        if event.health != 0 {
            colony.adjust_health(event.health);
        }
        if event.happiness != 0 {
            colony.adjust_happiness(event.happiness);
        }
        colony.log(format!("Event: {}", event.name));
        Ok(())
    }
}
