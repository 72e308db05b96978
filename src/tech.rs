//! Technology catalog: one-way, permanent modifiers to the colony's rules.

use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct TechDefinition {
    pub id: &'static str,
    pub display: &'static str,
    pub effect: &'static str,
    pub cost: u32,
}

pub const ADVANCED_FARMING: &str = "advanced_farming";
pub const IMPROVED_OXYGENATION: &str = "improved_oxygenation";
pub const EFFICIENT_ENERGY: &str = "efficient_energy";
pub const RAPID_CONSTRUCTION: &str = "rapid_construction";
pub const ADVANCED_RECYCLING: &str = "advanced_recycling";
pub const MEDICAL_BREAKTHROUGH: &str = "medical_breakthrough";
pub const AI_ASSISTANTS: &str = "ai_assistants";
pub const QUANTUM_COMPUTING: &str = "quantum_computing";

pub const CATALOG: &[TechDefinition] = &[
    TechDefinition {
        id: ADVANCED_FARMING,
        display: "Advanced Farming",
        effect: "Increases food production by 50%",
        cost: 50,
    },
    TechDefinition {
        id: IMPROVED_OXYGENATION,
        display: "Improved Oxygenation",
        effect: "Increases oxygen production by 50%",
        cost: 50,
    },
    TechDefinition {
        id: EFFICIENT_ENERGY,
        display: "Efficient Energy",
        effect: "Increases energy production by 50%",
        cost: 50,
    },
    TechDefinition {
        id: RAPID_CONSTRUCTION,
        display: "Rapid Construction",
        effect: "Reduces building cost by 25%",
        cost: 75,
    },
    TechDefinition {
        id: ADVANCED_RECYCLING,
        display: "Advanced Recycling",
        effect: "Reduces resource consumption by 20%",
        cost: 100,
    },
    TechDefinition {
        id: MEDICAL_BREAKTHROUGH,
        display: "Medical Breakthrough",
        effect: "Improves colonist health and lifespan",
        cost: 150,
    },
    TechDefinition {
        id: AI_ASSISTANTS,
        display: "AI Assistants",
        effect: "Increases overall efficiency by 10%",
        cost: 200,
    },
    TechDefinition {
        id: QUANTUM_COMPUTING,
        display: "Quantum Computing",
        effect: "Doubles research output",
        cost: 250,
    },
];

pub fn definition(id: &str) -> Option<&'static TechDefinition> {
    CATALOG.iter().find(|def| def.id == id)
}

/// Researched flags over the catalog. Research is one-way: ids are only ever
/// added, never removed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TechSet {
    researched: Vec<&'static str>,
}

impl TechSet {
    pub fn is_researched(&self, id: &str) -> bool {
        self.researched.iter().any(|known| *known == id)
    }

    pub fn count(&self) -> usize {
        self.researched.len()
    }

    pub fn researched(&self) -> &[&'static str] {
        &self.researched
    }

    pub(crate) fn mark(&mut self, id: &'static str) {
        if !self.is_researched(id) {
            self.researched.push(id);
        }
    }
}
