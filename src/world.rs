use rand::Rng;
use serde::Serialize;

use crate::buildings::{Building, Cell, Terrain};
use crate::tech::{self, TechSet};

pub const GRID_SIZE: usize = 10;

const MISSION_DURATION: u32 = 5;
const DISASTER_CAP: usize = 3;

/// The five stockpiled resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Oxygen,
    Food,
    Energy,
    Research,
    Materials,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Oxygen,
        Resource::Food,
        Resource::Energy,
        Resource::Research,
        Resource::Materials,
    ];

    /// The building type whose cells produce this resource, if any. Nothing
    /// produces materials; they arrive through mission rewards only.
    fn produced_by(self) -> Option<Building> {
        match self {
            Resource::Oxygen => Some(Building::Oxygen),
            Resource::Food => Some(Building::Food),
            Resource::Energy => Some(Building::Energy),
            Resource::Research => Some(Building::Research),
            Resource::Materials => None,
        }
    }
}

/// Non-negative stock levels. Research accumulates without bound; the other
/// four floor at zero.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceStock {
    pub oxygen: u32,
    pub food: u32,
    pub energy: u32,
    pub research: u32,
    pub materials: u32,
}

impl ResourceStock {
    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Oxygen => self.oxygen,
            Resource::Food => self.food,
            Resource::Energy => self.energy,
            Resource::Research => self.research,
            Resource::Materials => self.materials,
        }
    }

    pub(crate) fn set(&mut self, resource: Resource, amount: u32) {
        match resource {
            Resource::Oxygen => self.oxygen = amount,
            Resource::Food => self.food = amount,
            Resource::Energy => self.energy = amount,
            Resource::Research => self.research = amount,
            Resource::Materials => self.materials = amount,
        }
    }

    pub(crate) fn apply(&mut self, resource: Resource, delta: i64) {
        let next = (i64::from(self.get(resource)) + delta).max(0);
        self.set(resource, next as u32);
    }

    pub fn any_below(&self, threshold: u32) -> bool {
        Resource::ALL
            .into_iter()
            .any(|resource| self.get(resource) < threshold)
    }
}

/// Colonist specializations. Recruits without a specialization stay general.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    General,
    Scientist,
    Engineer,
    Medic,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::General, Role::Scientist, Role::Engineer, Role::Medic];

    pub fn id(self) -> &'static str {
        match self {
            Role::General => "general",
            Role::Scientist => "scientist",
            Role::Engineer => "engineer",
            Role::Medic => "medic",
        }
    }

    pub fn from_id(id: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.id() == id)
    }

    /// Food and oxygen each cost this much to recruit.
    pub fn recruit_cost(self) -> u32 {
        match self {
            Role::General => 10,
            Role::Scientist | Role::Engineer | Role::Medic => 15,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColonistPool {
    pub total: u32,
    pub scientists: u32,
    pub engineers: u32,
    pub medics: u32,
}

impl ColonistPool {
    /// Colonists without a specialization.
    pub fn general(&self) -> u32 {
        self.total
            .saturating_sub(self.scientists + self.engineers + self.medics)
    }
}

/// Fixed-size square map. Placing a building overwrites whatever the cell
/// held; destruction reverts the cell to empty terrain.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    pub fn all(terrain: Terrain) -> Self {
        Self {
            cells: vec![Cell::Terrain(terrain); GRID_SIZE * GRID_SIZE],
        }
    }

    /// Rolls uniform terrain for every cell.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let cells = (0..GRID_SIZE * GRID_SIZE)
            .map(|_| {
                Cell::Terrain(match rng.gen_range(0..3) {
                    0 => Terrain::Empty,
                    1 => Terrain::Rocky,
                    _ => Terrain::Water,
                })
            })
            .collect();
        Self { cells }
    }

    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < GRID_SIZE && col < GRID_SIZE
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if Grid::in_bounds(row, col) {
            Some(self.cells[row * GRID_SIZE + col])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * GRID_SIZE + col] = cell;
    }

    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        self.set(row, col, Cell::Terrain(Terrain::Empty));
    }

    pub fn count(&self, kind: Building) -> u32 {
        self.cells
            .iter()
            .filter(|cell| cell.building() == Some(kind))
            .count() as u32
    }

    /// Number of cells holding a building. Terrain does not count.
    pub fn occupied(&self) -> u32 {
        self.cells
            .iter()
            .filter(|cell| cell.building().is_some())
            .count() as u32
    }

    pub(crate) fn occupied_positions(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.building().is_some())
            .map(|(index, _)| (index / GRID_SIZE, index % GRID_SIZE))
            .collect()
    }

    fn rows(&self) -> Vec<Vec<&'static str>> {
        self.cells
            .chunks(GRID_SIZE)
            .map(|row| row.iter().map(|cell| cell.id()).collect())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionKind {
    Exploration,
    Research,
}

impl MissionKind {
    pub fn display(self) -> &'static str {
        match self {
            MissionKind::Exploration => "Exploration",
            MissionKind::Research => "Research",
        }
    }

    pub fn from_id(id: &str) -> Option<MissionKind> {
        match id {
            "exploration" => Some(MissionKind::Exploration),
            "research" => Some(MissionKind::Research),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MissionReward {
    pub research: u32,
    pub materials: u32,
}

/// A timed pending reward with no failure mode.
#[derive(Debug, Clone, Serialize)]
pub struct Mission {
    pub kind: MissionKind,
    pub turns_left: u32,
    pub reward: MissionReward,
}

impl Mission {
    pub(crate) fn new(kind: MissionKind) -> Self {
        Self {
            kind,
            turns_left: MISSION_DURATION,
            reward: MissionReward {
                research: 20,
                materials: 15,
            },
        }
    }
}

/// A timed recurring drain on the vital gauges.
#[derive(Debug, Clone, Serialize)]
pub struct Disaster {
    pub kind: &'static str,
    pub turns_left: u32,
    pub health_per_turn: i32,
    pub happiness_per_turn: i32,
}

impl Disaster {
    pub fn alien_invasion() -> Self {
        Self {
            kind: "Alien Invasion",
            turns_left: 10,
            health_per_turn: -2,
            happiness_per_turn: -2,
        }
    }
}

/// Narrative stages, advanced one step at most per turn and never reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Establishment,
    Expansion,
    Crisis,
    Preparation,
    FinalStand,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Establishment => "Establishment",
            Phase::Expansion => "Expansion",
            Phase::Crisis => "Crisis",
            Phase::Preparation => "Preparation",
            Phase::FinalStand => "Final Stand",
        }
    }

    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Establishment => Some(Phase::Expansion),
            Phase::Expansion => Some(Phase::Crisis),
            Phase::Crisis => Some(Phase::Preparation),
            Phase::Preparation => Some(Phase::FinalStand),
            Phase::FinalStand => None,
        }
    }
}

/// Per-turn totals for every resource, as shown to the player.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResourceFlows {
    pub oxygen: u32,
    pub food: u32,
    pub energy: u32,
    pub research: u32,
    pub materials: u32,
}

/// Read-only projection of the whole session, consumed by rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ColonySnapshot {
    pub turn: u64,
    pub phase: &'static str,
    pub resources: ResourceStock,
    pub colonists: ColonistPool,
    pub grid: Vec<Vec<&'static str>>,
    pub techs: TechSet,
    pub happiness: i32,
    pub health: i32,
    pub missions: Vec<Mission>,
    pub disasters: Vec<Disaster>,
    pub production: ResourceFlows,
    pub consumption: ResourceFlows,
    pub message: String,
}

/// All mutable session state. Intent operations either apply fully or leave
/// the state untouched and overwrite the message with a rejection notice.
#[derive(Debug, Clone)]
pub struct Colony {
    pub(crate) resources: ResourceStock,
    pub(crate) colonists: ColonistPool,
    pub(crate) grid: Grid,
    pub(crate) techs: TechSet,
    pub(crate) missions: Vec<Mission>,
    pub(crate) disasters: Vec<Disaster>,
    pub(crate) phase: Phase,
    pub(crate) happiness: i32,
    pub(crate) health: i32,
    pub(crate) turn: u64,
    pub(crate) message: String,
}

impl Colony {
    pub fn new(grid: Grid, resources: ResourceStock, colonists: ColonistPool) -> Self {
        Self {
            resources,
            colonists,
            grid,
            techs: TechSet::default(),
            missions: Vec::new(),
            disasters: Vec::new(),
            phase: Phase::Establishment,
            happiness: 100,
            health: 100,
            turn: 1,
            message: "Welcome to Exodus: The Last Colony".to_string(),
        }
    }

    pub fn resources(&self) -> &ResourceStock {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut ResourceStock {
        &mut self.resources
    }

    pub fn colonists(&self) -> &ColonistPool {
        &self.colonists
    }

    pub fn colonists_mut(&mut self) -> &mut ColonistPool {
        &mut self.colonists
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn techs(&self) -> &TechSet {
        &self.techs
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn disasters(&self) -> &[Disaster] {
        &self.disasters
    }

    pub fn disasters_mut(&mut self) -> &mut Vec<Disaster> {
        &mut self.disasters
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn happiness(&self) -> i32 {
        self.happiness
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn log(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn adjust_happiness(&mut self, delta: i32) {
        self.happiness = (self.happiness + delta).clamp(0, 100);
    }

    pub(crate) fn adjust_health(&mut self, delta: i32) {
        self.health = (self.health + delta).clamp(0, 100);
    }

    /// Places `kind` at (row, col), overwriting the cell. Rejected without
    /// mutation when the coordinate is off the map or materials fall short.
    pub fn place_building(&mut self, row: usize, col: usize, kind: Building) {
        if !Grid::in_bounds(row, col) {
            self.log("Build site out of bounds!");
            return;
        }
        let cost = kind.cost(&self.techs);
        if self.resources.materials < cost {
            self.log("Not enough materials to build!");
            return;
        }
        self.resources.materials -= cost;
        self.grid.set(row, col, Cell::Building(kind));
        self.log(format!("{} building placed!", kind.display()));
    }

    /// Marks a catalog technology researched, deducting its cost exactly
    /// once. Re-researching and underfunded attempts are rejected without
    /// mutation.
    pub fn research_tech(&mut self, id: &str) {
        let rejected = "Not enough research points or technology already researched!";
        let Some(def) = tech::definition(id) else {
            self.log(rejected);
            return;
        };
        if self.techs.is_researched(def.id) || self.resources.research < def.cost {
            self.log(rejected);
            return;
        }
        self.resources.research -= def.cost;
        self.techs.mark(def.id);
        self.log(format!("Researched: {}", def.display));
    }

    /// Recruits one colonist, spending food and oxygen per the role's rate.
    pub fn add_colonist(&mut self, role: Role) {
        let cost = role.recruit_cost();
        if self.resources.food < cost || self.resources.oxygen < cost {
            self.log("Not enough resources to add a colonist!");
            return;
        }
        self.resources.food -= cost;
        self.resources.oxygen -= cost;
        self.colonists.total += 1;
        match role {
            Role::Scientist => self.colonists.scientists += 1,
            Role::Engineer => self.colonists.engineers += 1,
            Role::Medic => self.colonists.medics += 1,
            Role::General => {}
        }
        self.log(format!("New {} colonist added!", role.id()));
    }

    /// Missions always launch; there is no precondition and no failure mode.
    pub fn start_mission(&mut self, kind: MissionKind) {
        self.missions.push(Mission::new(kind));
        self.log(format!("Started new {} mission!", kind.display()));
    }

    /// Per-turn output of `resource` under current buildings, crew, and
    /// techs. Two units per producing cell, multiplied up by the matching
    /// efficiency techs, floored to whole units.
    pub fn production(&self, resource: Resource) -> u32 {
        let cells = resource
            .produced_by()
            .map(|kind| self.grid.count(kind))
            .unwrap_or(0);
        let mut production = f64::from(cells * 2);
        match resource {
            Resource::Food if self.techs.is_researched(tech::ADVANCED_FARMING) => {
                production *= 1.5;
            }
            Resource::Oxygen if self.techs.is_researched(tech::IMPROVED_OXYGENATION) => {
                production *= 1.5;
            }
            Resource::Energy if self.techs.is_researched(tech::EFFICIENT_ENERGY) => {
                production *= 1.5;
            }
            _ => {}
        }
        if resource == Resource::Research {
            production += f64::from(self.colonists.scientists * 2);
        }
        if self.techs.is_researched(tech::AI_ASSISTANTS) {
            production *= 1.1;
        }
        if resource == Resource::Research && self.techs.is_researched(tech::QUANTUM_COMPUTING) {
            production *= 2.0;
        }
        production.floor() as u32
    }

    /// Per-turn draw on `resource`. Every colonist draws one unit; buildings
    /// additionally draw energy. Research is never consumed.
    pub fn consumption(&self, resource: Resource) -> u32 {
        if resource == Resource::Research {
            return 0;
        }
        let mut consumption = f64::from(self.colonists.total);
        if resource == Resource::Energy {
            consumption += f64::from(self.grid.occupied());
        }
        if self.techs.is_researched(tech::ADVANCED_RECYCLING) {
            consumption *= 0.8;
        }
        consumption.floor() as u32
    }

    pub(crate) fn disaster_capacity_left(&self) -> bool {
        self.disasters.len() < DISASTER_CAP
    }

    pub fn snapshot(&self) -> ColonySnapshot {
        let flows = |figure: &dyn Fn(Resource) -> u32| ResourceFlows {
            oxygen: figure(Resource::Oxygen),
            food: figure(Resource::Food),
            energy: figure(Resource::Energy),
            research: figure(Resource::Research),
            materials: figure(Resource::Materials),
        };
        ColonySnapshot {
            turn: self.turn,
            phase: self.phase.name(),
            resources: self.resources.clone(),
            colonists: self.colonists.clone(),
            grid: self.grid.rows(),
            techs: self.techs.clone(),
            happiness: self.happiness,
            health: self.health,
            missions: self.missions.clone(),
            disasters: self.disasters.clone(),
            production: flows(&|resource| self.production(resource)),
            consumption: flows(&|resource| self.consumption(resource)),
            message: self.message.clone(),
        }
    }
}
