//! Random event catalog. One roll per turn; a hit picks uniformly from this
//! table.

use crate::world::Resource;

#[derive(Debug, Clone, Copy)]
pub struct EventDefinition {
    pub name: &'static str,
    /// Stock deltas, floored at zero when applied.
    pub deltas: &'static [(Resource, i64)],
    /// Clears one uniformly random occupied cell back to empty terrain.
    pub destroys_building: bool,
    pub health: i32,
    pub happiness: i32,
}

pub const CATALOG: &[EventDefinition] = &[
    EventDefinition {
        name: "Meteor Shower",
        deltas: &[(Resource::Oxygen, -20), (Resource::Energy, -15)],
        destroys_building: true,
        health: 0,
        happiness: 0,
    },
    EventDefinition {
        name: "Solar Flare",
        deltas: &[(Resource::Energy, 30)],
        destroys_building: false,
        health: 0,
        happiness: 0,
    },
    EventDefinition {
        name: "Alien Microbes",
        deltas: &[(Resource::Food, -25)],
        destroys_building: false,
        health: -10,
        happiness: 0,
    },
    EventDefinition {
        name: "Resource Cache",
        deltas: &[
            (Resource::Oxygen, 15),
            (Resource::Food, 15),
            (Resource::Energy, 15),
        ],
        destroys_building: false,
        health: 0,
        happiness: 0,
    },
    EventDefinition {
        name: "Cosmic Storm",
        deltas: &[(Resource::Oxygen, -10), (Resource::Energy, -10)],
        destroys_building: false,
        health: 0,
        happiness: -5,
    },
    EventDefinition {
        name: "Alien Artifact Discovery",
        deltas: &[(Resource::Research, 50)],
        destroys_building: false,
        health: 0,
        happiness: 10,
    },
];
