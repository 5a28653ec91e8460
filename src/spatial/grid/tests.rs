use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn put(grid: &mut Grid, x: u32, y: u32, material: Material, lifetime: u16) {
    grid.set(x, y, Particle::new(material, lifetime));
}

#[test]
fn new_grid_is_empty() {
    let grid = Grid::new(8, 4);
    assert_eq!(grid.size(), 32);
    assert_eq!(grid.count_non_empty(), 0);
    assert_eq!(grid.at(7, 3), Particle::EMPTY);
}

#[test]
fn index_is_row_major_from_the_bottom() {
    let grid = Grid::new(10, 5);
    assert_eq!(grid.index(0, 0), 0);
    assert_eq!(grid.index(3, 0), 3);
    assert_eq!(grid.index(3, 2), 23);
    assert_eq!(grid.coords(23), (3, 2));
}

#[test]
#[should_panic(expected = "outside")]
fn at_panics_past_the_right_edge() {
    let grid = Grid::new(4, 4);
    let _ = grid.at(4, 0);
}

#[test]
#[should_panic(expected = "outside")]
fn at_panics_past_the_top_edge() {
    let grid = Grid::new(4, 4);
    let _ = grid.at(0, 4);
}

#[test]
fn only_decaying_materials_keep_a_lifetime() {
    let mut grid = Grid::new(3, 3);
    for material in [Material::None, Material::Sand, Material::Water, Material::Wood] {
        grid.set(1, 1, Particle { material, lifetime: 9, processed: false });
        assert_eq!(grid.lifetime(1, 1), 0, "{:?}", material);
        assert_eq!(Particle::new(material, 9).lifetime, 0, "{:?}", material);
    }
    for material in [Material::Fire, Material::Smoke, Material::Steam] {
        grid.set(1, 1, Particle { material, lifetime: 9, processed: false });
        assert_eq!(grid.lifetime(1, 1), 9, "{:?}", material);
        assert_eq!(Particle::new(material, 9).lifetime, 9, "{:?}", material);
    }
}

#[test]
fn try_move_into_empty_cell_relocates_full_state() {
    let mut grid = Grid::new(5, 5);
    put(&mut grid, 2, 3, Material::Fire, 210);

    assert!(grid.try_move(2, 3, 2, 2));

    let moved = grid.at(2, 2);
    assert_eq!(moved.material, Material::Fire);
    assert_eq!(moved.lifetime, 210);
    assert!(moved.processed);

    let vacated = grid.at(2, 3);
    assert_eq!(vacated.material, Material::None);
    assert_eq!(vacated.lifetime, 0);
    assert!(vacated.processed);
}

#[test]
fn try_move_into_occupied_cell_changes_nothing() {
    let mut grid = Grid::new(5, 5);
    put(&mut grid, 2, 3, Material::Sand, 0);
    put(&mut grid, 2, 2, Material::Wood, 0);

    assert!(!grid.try_move(2, 3, 2, 2));
    assert_eq!(grid.at(2, 3), Particle::new(Material::Sand, 0));
    assert_eq!(grid.at(2, 2), Particle::new(Material::Wood, 0));
}

#[test]
fn try_move_rejects_low_edges_and_outside_destinations() {
    let mut grid = Grid::new(5, 5);
    put(&mut grid, 1, 1, Material::Water, 0);
    let before = grid.at(1, 1);

    for (x, y) in [(0, 1), (1, 0), (0, 0), (-1, 1), (1, -1), (5, 1), (1, 5), (9, 9)] {
        assert!(!grid.try_move(1, 1, x, y), "move to ({}, {}) should fail", x, y);
    }
    assert_eq!(grid.at(1, 1), before);
    assert_eq!(grid.count_non_empty(), 1);
    assert_eq!(grid.at(0, 1), Particle::EMPTY);
    assert_eq!(grid.at(1, 0), Particle::EMPTY);
}

#[test]
fn try_move_keeps_particle_count() {
    let mut grid = Grid::new(6, 6);
    put(&mut grid, 3, 3, Material::Sand, 0);
    put(&mut grid, 4, 4, Material::Smoke, 120);
    assert!(grid.try_move(3, 3, 3, 2));
    assert!(grid.try_move(4, 4, 5, 5));
    assert_eq!(grid.count_non_empty(), 2);
}

#[test]
fn clamp_region_clamps_every_side() {
    let grid = Grid::new(20, 10);
    assert_eq!(
        grid.clamp_region(10, 5, 2, 1),
        Region { x_min: 8, y_min: 4, x_max: 12, y_max: 6 }
    );
    assert_eq!(
        grid.clamp_region(1, 0, 3, 2),
        Region { x_min: 0, y_min: 0, x_max: 4, y_max: 2 }
    );
    assert_eq!(
        grid.clamp_region(19, 9, 3, 3),
        Region { x_min: 16, y_min: 6, x_max: 19, y_max: 9 }
    );
}

#[test]
fn clamp_region_far_outside_is_empty() {
    let grid = Grid::new(20, 10);
    let region = grid.clamp_region(5, 30, 3, 2);
    assert!(region.is_empty());
    assert_eq!(region.cells().count(), 0);
}

#[test]
fn fill_region_where_empty_skips_occupied_cells() {
    let mut grid = Grid::new(20, 20);
    put(&mut grid, 11, 9, Material::Wood, 0);

    let filled = grid.fill_region_where_empty(Material::Sand, 10, 10, 2, 2, &mut rng());

    assert_eq!(filled, 24);
    assert_eq!(grid.material(11, 9), Material::Wood);
    let region = grid.clamp_region(10, 10, 2, 2);
    for (x, y) in region.cells() {
        if (x, y) != (11, 9) {
            assert_eq!(grid.material(x, y), Material::Sand, "({}, {})", x, y);
        }
    }
    assert_eq!(grid.material(7, 10), Material::None);
    assert_eq!(grid.material(10, 13), Material::None);
}

#[test]
fn fill_region_never_overwrites_matter() {
    let mut grid = Grid::new(12, 12);
    let mut r = rng();
    grid.fill_region_where_empty(Material::Water, 6, 6, 3, 3, &mut r);
    let snapshot: Vec<Particle> = (0..12)
        .flat_map(|y| (0..12).map(move |x| (x, y)))
        .map(|(x, y)| grid.at(x, y))
        .collect();

    grid.fill_region_where_empty(Material::Fire, 6, 6, 5, 5, &mut r);

    for (i, before) in snapshot.iter().enumerate() {
        let (x, y) = grid.coords(i);
        if !before.is_none() {
            assert_eq!(grid.at(x, y).material, before.material);
        }
    }
}

#[test]
fn fill_region_rolls_fresh_lifetimes() {
    let mut grid = Grid::new(16, 16);
    grid.fill_region_where_empty(Material::Smoke, 8, 8, 4, 4, &mut rng());
    let region = grid.clamp_region(8, 8, 4, 4);
    let lifetimes: Vec<u16> = region.cells().map(|(x, y)| grid.lifetime(x, y)).collect();
    assert!(lifetimes.iter().all(|l| (100..150).contains(l)));
    assert!(lifetimes.iter().any(|&l| l != lifetimes[0]));
}

#[test]
fn reset_processed_clears_markers() {
    let mut grid = Grid::new(4, 4);
    grid.set_processed(1, 2, true);
    grid.set_processed(3, 3, true);
    grid.reset_processed();
    assert!(!grid.is_processed(1, 2));
    assert!(!grid.is_processed(3, 3));
}
