//! Grid tests - loading, bounds and the rotation rule

use tui_circuit::core::{Grid, GridError, LevelData, LevelError};
use tui_circuit::types::{Rotation, TileKind};

#[test]
fn test_load_decodes_every_cell() {
    let grid = Grid::from_level(&LevelData::new(1, 4, vec![11, 13, 6, 32])).unwrap();
    assert_eq!(grid.len(), 4);
    assert_eq!(grid.tile_at(0, 0).unwrap().kind, TileKind::Source);
    assert_eq!(grid.tile_at(0, 2).unwrap().kind, TileKind::Cross);
    assert_eq!(grid.tile_at(0, 3).unwrap().rotation, Rotation::R270);
}

#[test]
fn test_load_rejects_zero_dimensions() {
    let err = Grid::from_level(&LevelData::new(0, 3, vec![])).unwrap_err();
    assert_eq!(err, LevelError::BadDimensions { rows: 0, cols: 3 });
    assert_eq!(err.code(), "bad_dimensions");
}

#[test]
fn test_load_rejects_wrong_cell_count() {
    let err = Grid::from_level(&LevelData::new(2, 3, vec![0; 7])).unwrap_err();
    assert_eq!(
        err,
        LevelError::CellCountMismatch {
            expected: 6,
            actual: 7
        }
    );
}

#[test]
fn test_load_names_the_bad_cell() {
    let err = Grid::from_level(&LevelData::new(1, 3, vec![11, 47, 32])).unwrap_err();
    assert_eq!(err, LevelError::UnknownTile { index: 1, value: 47 });
}

#[test]
fn test_reads_outside_the_grid_fail_cleanly() {
    let grid = Grid::from_level(&LevelData::new(2, 2, vec![0; 4])).unwrap();
    assert_eq!(grid.tile_at(2, 0).unwrap_err(), GridError::OutOfRange);
    assert_eq!(grid.tile_at(0, 2).unwrap_err(), GridError::OutOfRange);
    assert_eq!(grid.tile_at(usize::MAX, usize::MAX).unwrap_err(), GridError::OutOfRange);
}

#[test]
fn test_rotation_steps_clockwise_and_cycles() {
    let mut grid = Grid::from_level(&LevelData::new(1, 1, vec![4])).unwrap();
    assert_eq!(grid.rotate_tile(0, 0), Ok(Rotation::R90));
    assert_eq!(grid.rotate_tile(0, 0), Ok(Rotation::R180));
    assert_eq!(grid.rotate_tile(0, 0), Ok(Rotation::R270));
    assert_eq!(grid.rotate_tile(0, 0), Ok(Rotation::R0));
}

#[test]
fn test_sources_and_empties_refuse_to_turn() {
    let mut grid = Grid::from_level(&LevelData::new(1, 2, vec![1, 0])).unwrap();
    assert_eq!(grid.rotate_tile(0, 0).unwrap_err(), GridError::NotRotatable);
    assert_eq!(grid.rotate_tile(0, 1).unwrap_err(), GridError::NotRotatable);

    let err = grid.rotate_tile(5, 5).unwrap_err();
    assert_eq!(err, GridError::OutOfRange);
    assert!(!err.message().is_empty());
}

#[test]
fn test_grid_state_survives_a_save_round_trip() {
    let level = LevelData::new(2, 2, vec![11, 24, 12, 34]);
    let mut grid = Grid::from_level(&level).unwrap();
    grid.rotate_tile(0, 1).unwrap();
    grid.rotate_tile(1, 0).unwrap();

    let saved = grid.to_level_data();
    let restored = Grid::from_level(&saved).unwrap();
    assert_eq!(restored.tile_at(0, 1).unwrap().rotation, Rotation::R270);
    assert_eq!(restored.tile_at(1, 0).unwrap().rotation, Rotation::R180);

    // Power is derived state and never part of the save.
    assert_eq!(restored.powered_count(), 0);
}
