use particles_engine::{Material, Simulation};

#[test]
fn perf_smoke_step() {
    let mut world = Simulation::new(240, 160, 12345);
    for x in 0..240 {
        for y in 80..120 {
            world.add_particle(x, y, Material::Sand);
        }
    }
    world.update();
    let stats = world.stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.particles_processed(), 240 * 40);
}

#[test]
fn perf_smoke_full_frames() {
    let mut world = Simulation::new(240, 160, 1);
    world.paint(60, 100, 20, Material::Water);
    world.paint(180, 40, 20, Material::Wood);
    world.paint(180, 62, 3, Material::Fire);
    world.set_cursor(120, 80);
    for _ in 0..60 {
        world.tick();
    }
    assert_eq!(world.frame(), 60);
    assert_eq!(world.pixels().len(), 240 * 160);
}
