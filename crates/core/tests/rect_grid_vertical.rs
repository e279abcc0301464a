//! X-Y plane grid: floor-based resolution and bounds policy
mod common;

use approx::assert_relative_eq;
use grids_core::{CellCoord, GridConfig, RectGridVertical, Vec3};

fn five_by_five() -> RectGridVertical<Option<&'static str>> {
    RectGridVertical::with_default(GridConfig::new(5, 5, 1.0, Vec3::zeros()))
        .expect("valid configuration")
}

#[test]
fn test_example_scenario() {
    let mut grid = five_by_five();

    grid.set(2, 3, Some("A"));

    assert_eq!(grid.get(2, 3), Some(&Some("A")));
    assert_relative_eq!(grid.world_position(2, 3), Vec3::new(2.0, 3.0, 0.0));
    assert_eq!(
        grid.resolve_cell(Vec3::new(2.4, 3.9, 0.0)),
        CellCoord::new(2, 3)
    );
}

#[test]
fn test_round_trip_every_cell() {
    let grid: RectGridVertical<u8> = RectGridVertical::with_default(GridConfig::new(
        7,
        4,
        0.5,
        Vec3::new(-3.0, 2.0, 1.0),
    ))
    .unwrap();

    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let world = grid.world_position(x, y);
            assert_eq!(grid.resolve_cell(world), CellCoord::new(x, y));
        }
    }
}

#[test]
fn test_lower_left_corner_resolves_to_its_cell() {
    let grid: RectGridVertical<u8> =
        RectGridVertical::with_default(GridConfig::new(4, 4, 2.0, Vec3::new(1.0, 1.0, 0.0)))
            .unwrap();

    // Corner of (1, 2) is (3, 5); just below/left of it belongs to (0, 1)
    assert_eq!(grid.resolve_cell(Vec3::new(3.0, 5.0, 0.0)), CellCoord::new(1, 2));
    assert_eq!(grid.resolve_cell(Vec3::new(2.99, 4.99, 0.0)), CellCoord::new(0, 1));
}

#[test]
fn test_points_below_origin_fail_bounds() {
    let mut grid = five_by_five();

    let cell = grid.resolve_cell(Vec3::new(-0.25, 1.5, 0.0));
    assert_eq!(cell, CellCoord::new(-1, 1));
    assert!(!grid.is_valid_coord(cell));

    grid.set_at(Vec3::new(-0.25, 1.5, 0.0), Some("lost"));
    assert!(grid.iter().all(|(_, payload)| payload.is_none()));
}

#[test]
fn test_out_of_bounds_get_returns_empty() {
    let mut grid = five_by_five();
    for x in 0..5 {
        for y in 0..5 {
            grid.set(x, y, Some("filled"));
        }
    }

    for (x, y) in [(-1, 0), (0, -1), (5, 0), (0, 5), (i32::MIN, i32::MAX)] {
        assert_eq!(grid.get(x, y), None, "({x}, {y}) should be empty");
        assert_eq!(grid.get_or_default(x, y), None);
    }
}

#[test]
fn test_world_position_overloads() {
    let mut grid = five_by_five();

    grid.set_at(Vec3::new(4.9, 0.1, 12.0), Some("corner"));
    assert_eq!(grid.get(4, 0), Some(&Some("corner")));
    assert_eq!(grid.get_at(Vec3::new(4.5, 0.5, -3.0)), Some(&Some("corner")));
    assert_eq!(grid.get_at(Vec3::new(5.0, 0.5, 0.0)), None);
}

#[test]
fn test_accessors() {
    let grid: RectGridVertical<u8> =
        RectGridVertical::with_default(GridConfig::new(3, 8, 0.25, Vec3::new(1.0, 2.0, 3.0)))
            .unwrap();
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 8);
    assert_eq!(grid.cell_size(), 0.25);
    assert_eq!(grid.origin(), Vec3::new(1.0, 2.0, 3.0));
    assert!(grid.is_valid(2, 7));
    assert!(!grid.is_valid(3, 7));
}
