use anyhow::Result;

use crate::{
    engine::{System, SystemContext},
    rng::StreamRng,
    world::{Colony, Mission, Resource},
};

pub struct MissionSystem;

impl MissionSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MissionSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for MissionSystem {
    fn name(&self) -> &'static str {
        "missions"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        colony: &mut Colony,
        _rng: &mut StreamRng<'_>,
    ) -> Result<()> {
        for mission in &mut colony.missions {
            mission.turns_left = mission.turns_left.saturating_sub(1);
        }
        let (completed, active): (Vec<Mission>, Vec<Mission>) = colony
            .missions
            .drain(..)
            .partition(|mission| mission.turns_left == 0);
        colony.missions = active;
        for mission in completed {
            colony
                .resources
                .apply(Resource::Research, i64::from(mission.reward.research));
            colony
                .resources
                .apply(Resource::Materials, i64::from(mission.reward.materials));
            colony.log(format!(
                "{} mission completed! Gained resources.",
                mission.kind.display()
            ));
        }
        Ok(())
    }
}
