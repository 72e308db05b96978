use anyhow::Result;
use rand::Rng;

use crate::{
    engine::{System, SystemContext},
    rng::StreamRng,
    world::{Colony, Disaster},
};

pub struct DisasterSystem;

impl DisasterSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DisasterSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for DisasterSystem {
    fn name(&self) -> &'static str {
        "disasters"
    }

    fn run(
        &mut self,
        ctx: &SystemContext,
        colony: &mut Colony,
        rng: &mut StreamRng<'_>,
    ) -> Result<()> {
        if rng.gen::<f64>() < ctx.disaster_chance && colony.disaster_capacity_left() {
            let disaster = Disaster::alien_invasion();
            colony.log(format!("New disaster: {}! Defend the colony!", disaster.kind));
            colony.disasters.push(disaster);
        }

        // A disaster spawned this turn takes effect immediately.
        for index in 0..colony.disasters.len() {
            let (health, happiness) = {
                let disaster = &colony.disasters[index];
                (disaster.health_per_turn, disaster.happiness_per_turn)
            };
            colony.adjust_health(health);
            colony.adjust_happiness(happiness);
            colony.disasters[index].turns_left =
                colony.disasters[index].turns_left.saturating_sub(1);
        }

        let (resolved, active): (Vec<Disaster>, Vec<Disaster>) = colony
            .disasters
            .drain(..)
            .partition(|disaster| disaster.turns_left == 0);
        colony.disasters = active;
        for disaster in resolved {
            colony.log(format!("{} has been resolved!", disaster.kind));
        }
        Ok(())
    }
}
