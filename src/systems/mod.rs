mod disasters;
mod events;
mod health;
mod missions;
mod morale;
mod phase;
mod resources;

pub use disasters::DisasterSystem;
pub use events::EventSystem;
pub use health::HealthSystem;
pub use missions::MissionSystem;
pub use morale::MoraleSystem;
pub use phase::PhaseSystem;
pub use resources::ResourceSystem;
