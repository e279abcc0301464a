//! Loading grid geometry from host configuration and fail-fast validation
mod common;

use grids_core::{Axis, GridConfig, GridError, HexGridHorizontal, RectGridVertical, Vec3};

#[test]
fn test_deserialize_full_config() {
    let json = r#"{ "width": 16, "height": 8, "cell_size": 2.5, "origin": [1.0, 0.0, -4.0] }"#;
    let config: GridConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config, GridConfig::new(16, 8, 2.5, Vec3::new(1.0, 0.0, -4.0)));

    let grid: HexGridHorizontal<u8> = HexGridHorizontal::with_default(config).unwrap();
    assert_eq!(grid.width(), 16);
    assert_eq!(grid.height(), 8);
    assert_eq!(grid.origin(), Vec3::new(1.0, 0.0, -4.0));
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let config: GridConfig = serde_json::from_str(r#"{ "width": 3 }"#).unwrap();
    let defaults = GridConfig::default();

    assert_eq!(config.width, 3);
    assert_eq!(config.height, defaults.height);
    assert_eq!(config.cell_size, defaults.cell_size);
    assert_eq!(config.origin, defaults.origin);
}

#[test]
fn test_serialize_round_trip() {
    let config = GridConfig::new(4, 5, 0.5, Vec3::new(0.0, 2.0, 0.0));
    let json = serde_json::to_string(&config).unwrap();
    let back: GridConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_construction_fails_fast_on_bad_geometry() {
    let cases = [
        (
            GridConfig::new(0, 5, 1.0, Vec3::zeros()),
            GridError::ZeroDimension { axis: Axis::Width },
        ),
        (
            GridConfig::new(5, 0, 1.0, Vec3::zeros()),
            GridError::ZeroDimension { axis: Axis::Height },
        ),
        (
            GridConfig::new(5, 5, -2.0, Vec3::zeros()),
            GridError::InvalidCellSize(-2.0),
        ),
        (
            GridConfig::new(5, 5, 1.0, Vec3::new(f32::INFINITY, 0.0, 0.0)),
            GridError::NonFiniteOrigin,
        ),
    ];

    for (config, expected) in cases {
        let mut factory_calls = 0;
        let result: Result<RectGridVertical<u8>, _> = RectGridVertical::new(config, |_, _, _| {
            factory_calls += 1;
            0
        });
        assert_eq!(result.err(), Some(expected));
        assert_eq!(factory_calls, 0, "factory ran for invalid {config:?}");
    }
}
