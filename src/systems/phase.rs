use anyhow::Result;

use crate::{
    engine::{System, SystemContext},
    rng::StreamRng,
    world::{Colony, Phase},
};

pub struct PhaseSystem;

impl PhaseSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhaseSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for PhaseSystem {
    fn name(&self) -> &'static str {
        "phase"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        colony: &mut Colony,
        _rng: &mut StreamRng<'_>,
    ) -> Result<()> {
        let Some(next) = colony.phase().next() else {
            return Ok(());
        };
        // Only the current phase's threshold is tested, so the colony can
        // climb at most one phase per turn.
        let threshold_met = match colony.phase() {
            Phase::Establishment => colony.colonists().total >= 20,
            Phase::Expansion => colony.resources().research >= 100,
            Phase::Crisis => colony.techs().count() >= 5,
            Phase::Preparation => colony.colonists().total >= 50,
            Phase::FinalStand => false,
        };
        if threshold_met {
            colony.set_phase(next);
            colony.log(format!("Entering new phase: {}", next.name()));
        }
        Ok(())
    }
}
