use exodus::buildings::{Building, Cell, Terrain};
use exodus::tech;
use exodus::world::{Colony, ColonistPool, Grid, MissionKind, ResourceStock, Role};

fn starting_colony() -> Colony {
    Colony::new(
        Grid::all(Terrain::Empty),
        ResourceStock {
            oxygen: 100,
            food: 100,
            energy: 100,
            research: 0,
            materials: 50,
        },
        ColonistPool {
            total: 5,
            scientists: 0,
            engineers: 0,
            medics: 0,
        },
    )
}

#[test]
fn recruiting_general_costs_ten_food_and_oxygen() {
    let mut colony = starting_colony();
    colony.add_colonist(Role::General);

    assert_eq!(colony.resources().food, 90);
    assert_eq!(colony.resources().oxygen, 90);
    assert_eq!(colony.colonists().total, 6);
    assert_eq!(colony.colonists().general(), 6);
    assert_eq!(colony.message(), "New general colonist added!");
}

#[test]
fn recruiting_specialists_costs_fifteen() {
    let mut colony = starting_colony();
    colony.add_colonist(Role::Scientist);

    assert_eq!(colony.resources().food, 85);
    assert_eq!(colony.resources().oxygen, 85);
    assert_eq!(colony.colonists().total, 6);
    assert_eq!(colony.colonists().scientists, 1);
    assert_eq!(colony.colonists().general(), 5);
}

#[test]
fn recruiting_rejected_when_stocks_fall_short() {
    let mut colony = starting_colony();
    colony.resources_mut().food = 14;

    colony.add_colonist(Role::Medic);

    assert_eq!(colony.colonists().total, 5);
    assert_eq!(colony.colonists().medics, 0);
    assert_eq!(colony.resources().food, 14);
    assert_eq!(colony.resources().oxygen, 100);
    assert_eq!(colony.message(), "Not enough resources to add a colonist!");

    // A general recruit is cheaper and still goes through.
    colony.add_colonist(Role::General);
    assert_eq!(colony.colonists().total, 6);
    assert_eq!(colony.resources().food, 4);
}

#[test]
fn placing_a_building_overwrites_the_cell_and_charges_materials() {
    let mut colony = starting_colony();
    colony.place_building(0, 0, Building::Oxygen);

    assert_eq!(colony.resources().materials, 30);
    assert_eq!(
        colony.grid().get(0, 0),
        Some(Cell::Building(Building::Oxygen))
    );
    assert_eq!(colony.message(), "Oxygen building placed!");
}

#[test]
fn placement_rejected_without_materials() {
    let mut colony = starting_colony();
    colony.resources_mut().materials = 10;

    colony.place_building(3, 3, Building::Energy);

    assert_eq!(colony.resources().materials, 10);
    assert_eq!(colony.grid().get(3, 3), Some(Cell::Terrain(Terrain::Empty)));
    assert_eq!(colony.message(), "Not enough materials to build!");
}

#[test]
fn placement_rejected_off_the_map() {
    let mut colony = starting_colony();
    colony.place_building(10, 0, Building::Habitat);

    assert_eq!(colony.resources().materials, 50);
    assert_eq!(colony.message(), "Build site out of bounds!");
}

#[test]
fn rapid_construction_discounts_placement() {
    let mut colony = starting_colony();
    colony.resources_mut().research = 75;
    colony.research_tech(tech::RAPID_CONSTRUCTION);
    assert_eq!(colony.resources().research, 0);

    // Habitat drops from 30 to 22 with the discount.
    colony.place_building(2, 2, Building::Habitat);
    assert_eq!(colony.resources().materials, 28);
}

#[test]
fn research_deducts_exactly_once() {
    let mut colony = starting_colony();
    colony.resources_mut().research = 120;

    colony.research_tech(tech::ADVANCED_FARMING);
    assert_eq!(colony.resources().research, 70);
    assert!(colony.techs().is_researched(tech::ADVANCED_FARMING));

    colony.research_tech(tech::ADVANCED_FARMING);
    assert_eq!(colony.resources().research, 70);
    assert_eq!(
        colony.message(),
        "Not enough research points or technology already researched!"
    );
}

#[test]
fn research_rejected_when_points_fall_short() {
    let mut colony = starting_colony();
    colony.resources_mut().research = 40;

    colony.research_tech(tech::EFFICIENT_ENERGY);

    assert_eq!(colony.resources().research, 40);
    assert!(!colony.techs().is_researched(tech::EFFICIENT_ENERGY));
}

#[test]
fn unknown_tech_id_is_rejected() {
    let mut colony = starting_colony();
    colony.resources_mut().research = 500;

    colony.research_tech("warp_drive");

    assert_eq!(colony.resources().research, 500);
    assert_eq!(colony.techs().count(), 0);
    assert_eq!(
        colony.message(),
        "Not enough research points or technology already researched!"
    );
}

#[test]
fn missions_always_launch() {
    let mut colony = starting_colony();
    colony.start_mission(MissionKind::Exploration);
    colony.start_mission(MissionKind::Research);

    assert_eq!(colony.missions().len(), 2);
    let first = &colony.missions()[0];
    assert_eq!(first.kind, MissionKind::Exploration);
    assert_eq!(first.turns_left, 5);
    assert_eq!(first.reward.research, 20);
    assert_eq!(first.reward.materials, 15);
    assert_eq!(colony.message(), "Started new Research mission!");
}
