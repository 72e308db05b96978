use serde::Serialize;

use crate::tech::{self, TechSet};

/// Structures a colony can place on the map. Each occupied cell holds
/// exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Building {
    Oxygen,
    Food,
    Energy,
    Habitat,
    Research,
    Defense,
    Medical,
    Entertainment,
}

impl Building {
    pub const ALL: [Building; 8] = [
        Building::Oxygen,
        Building::Food,
        Building::Energy,
        Building::Habitat,
        Building::Research,
        Building::Defense,
        Building::Medical,
        Building::Entertainment,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Building::Oxygen => "oxygen",
            Building::Food => "food",
            Building::Energy => "energy",
            Building::Habitat => "habitat",
            Building::Research => "research",
            Building::Defense => "defense",
            Building::Medical => "medical",
            Building::Entertainment => "entertainment",
        }
    }

    pub fn display(self) -> &'static str {
        match self {
            Building::Oxygen => "Oxygen",
            Building::Food => "Food",
            Building::Energy => "Energy",
            Building::Habitat => "Habitat",
            Building::Research => "Research",
            Building::Defense => "Defense",
            Building::Medical => "Medical",
            Building::Entertainment => "Entertainment",
        }
    }

    pub fn from_id(id: &str) -> Option<Building> {
        Building::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Price in materials before any discount.
    pub fn base_cost(self) -> u32 {
        match self {
            Building::Oxygen | Building::Food | Building::Energy => 20,
            Building::Habitat => 30,
            Building::Research | Building::Medical => 50,
            Building::Defense => 40,
            Building::Entertainment => 60,
        }
    }

    /// Price after the rapid-construction discount (25% off, floored).
    pub fn cost(self, techs: &TechSet) -> u32 {
        let base = self.base_cost();
        if techs.is_researched(tech::RAPID_CONSTRUCTION) {
            base * 3 / 4
        } else {
            base
        }
    }
}

/// Ground left by the planet. Buildings may be placed on any terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Empty,
    Rocky,
    Water,
}

impl Terrain {
    pub fn id(self) -> &'static str {
        match self {
            Terrain::Empty => "empty",
            Terrain::Rocky => "rocky",
            Terrain::Water => "water",
        }
    }
}

/// One map cell: bare terrain or a single building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Terrain(Terrain),
    Building(Building),
}

impl Cell {
    pub fn id(self) -> &'static str {
        match self {
            Cell::Terrain(terrain) => terrain.id(),
            Cell::Building(building) => building.id(),
        }
    }

    pub fn building(self) -> Option<Building> {
        match self {
            Cell::Building(building) => Some(building),
            Cell::Terrain(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tech;

    #[test]
    fn base_costs_match_catalog() {
        assert_eq!(Building::Oxygen.base_cost(), 20);
        assert_eq!(Building::Habitat.base_cost(), 30);
        assert_eq!(Building::Research.base_cost(), 50);
        assert_eq!(Building::Defense.base_cost(), 40);
        assert_eq!(Building::Medical.base_cost(), 50);
        assert_eq!(Building::Entertainment.base_cost(), 60);
    }

    #[test]
    fn rapid_construction_discount_floors() {
        let mut techs = TechSet::default();
        techs.mark(tech::RAPID_CONSTRUCTION);
        assert_eq!(Building::Oxygen.cost(&techs), 15);
        assert_eq!(Building::Habitat.cost(&techs), 22);
        assert_eq!(Building::Entertainment.cost(&techs), 45);
    }

    #[test]
    fn ids_round_trip() {
        for kind in Building::ALL {
            assert_eq!(Building::from_id(kind.id()), Some(kind));
        }
        assert_eq!(Building::from_id("volcano"), None);
    }
}
