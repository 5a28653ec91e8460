//! End-to-end runs through the public API only.

use particles_engine::grid::Particle;
use particles_engine::{Material, Simulation, SimulationConfig};

#[test]
fn config_json_round_trips_through_the_engine() {
    let world = Simulation::from_config_json(r#"{"width": 64, "height": 48, "seed": 9}"#).unwrap();
    assert_eq!((world.width(), world.height()), (64, 48));
    assert_eq!(world.brush_size(), 2);
    assert_eq!(world.config().ignition_one_in, 70);
}

#[test]
fn bad_config_is_rejected() {
    assert!(Simulation::from_config_json(r#"{"width": 0}"#).is_err());
    assert!(Simulation::from_config_json("not json").is_err());
    let config = SimulationConfig { brush_default: 30, ..SimulationConfig::default() };
    assert!(Simulation::from_config(config).is_err());
}

#[test]
fn painted_sand_piles_up_on_the_floor() {
    let mut world = Simulation::new(32, 32, 4);
    world.set_cursor(16, 28);
    world.select_material_key(1);
    world.set_paint_held(true);
    world.process_input();
    world.set_paint_held(false);
    let grains = world.particle_count();
    assert_eq!(grains, 25);

    for _ in 0..120 {
        world.tick();
    }

    assert_eq!(world.particle_count(), grains);
    // Everything came to rest in the lower part of the grid
    for y in 10..32 {
        for x in 0..32 {
            assert!(world.grid().is_empty(x, y), "grain left floating at ({}, {})", x, y);
        }
    }
}

#[test]
fn water_spreads_across_a_floor() {
    let mut world = Simulation::new(40, 20, 8);
    world.paint(20, 10, 2, Material::Water);
    for _ in 0..200 {
        world.update();
    }
    assert_eq!(world.grid().count(Material::Water), 25);
    let row_one = (1..40).filter(|&x| world.grid().material(x, 1) == Material::Water).count();
    assert!(row_one > 5, "water should flatten out, got {} cells on row 1", row_one);
}

#[test]
fn gases_disappear_over_time() {
    let mut world = Simulation::new(30, 30, 2);
    world.paint(15, 5, 3, Material::Smoke);
    world.paint(5, 5, 2, Material::Steam);
    for _ in 0..151 {
        world.update();
    }
    assert_eq!(world.particle_count(), 0);
}

#[test]
fn placed_particle_keeps_its_exact_lifetime() {
    let mut world = Simulation::new(8, 8, 1);
    assert!(world.set_particle(4, 4, Particle::new(Material::Smoke, 3)));
    world.update();
    world.update();
    world.update();
    assert_eq!(world.particle_count(), 0);
    assert!(!world.set_particle(8, 0, Particle::new(Material::Sand, 0)));
}

#[test]
fn legend_serializes_for_the_overlay() {
    let world = Simulation::new(16, 16, 1);
    let json = world.legend().to_json();
    assert!(json.contains("\"name\":\"Sand\""));
    assert!(json.contains("\"brush_size\":2"));
}
