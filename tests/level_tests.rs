//! Level tests - the built-in ramp, JSON packs and scrambling

use tui_circuit::core::{GameState, LevelData};
use tui_circuit::levels;
use tui_circuit::types::TileKind;

#[test]
fn test_builtin_ramp_is_playable_in_order() {
    let set = levels::builtin();
    assert!(set.len() >= 3);

    for index in 0..set.len() {
        let level = set.get(index).unwrap();
        assert!(level.validate().is_ok(), "level {}", index + 1);

        // Authored solved, so the win condition is reachable by prior art.
        let game = GameState::from_level(level).unwrap();
        assert!(game.completed(), "level {} not solved as authored", index + 1);
    }
}

#[test]
fn test_builtin_levels_grow_rather_than_shrink() {
    let set = levels::builtin();
    let mut last_area = 0;
    for index in 0..set.len() {
        let level = set.get(index).unwrap();
        let area = level.rows * level.cols;
        assert!(area >= last_area, "level {} smaller than its predecessor", index + 1);
        last_area = area;
    }
}

#[test]
fn test_scramble_only_moves_rotatable_tiles() {
    let set = levels::builtin();
    let level = set.get(2).unwrap();
    let plain = GameState::from_level(level).unwrap();
    let shuffled = GameState::from_level_scrambled(level, 9001).unwrap();

    for row in 0..level.rows {
        for col in 0..level.cols {
            let a = plain.grid().tile_at(row, col).unwrap();
            let b = shuffled.grid().tile_at(row, col).unwrap();
            assert_eq!(a.kind, b.kind);
            if a.kind == TileKind::Source {
                assert_eq!(a.rotation, b.rotation, "source moved at ({}, {})", row, col);
            }
        }
    }
}

#[test]
fn test_scramble_is_reproducible_per_seed() {
    let set = levels::builtin();
    let level = set.get(3).unwrap();
    let a = GameState::from_level_scrambled(level, 7).unwrap();
    let b = GameState::from_level_scrambled(level, 7).unwrap();
    let c = GameState::from_level_scrambled(level, 8).unwrap();
    assert_eq!(a.grid(), b.grid());
    assert_ne!(a.grid(), c.grid());
}

#[test]
fn test_json_pack_round_trip() {
    let set = levels::from_json(
        r#"{
            "levels": [
                { "rows": 1, "cols": 3, "cells": [11, 13, 32] },
                { "rows": 2, "cols": 2, "cells": [11, 24, 12, 34] }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(set.len(), 2);

    let game = GameState::from_level(set.get(1).unwrap()).unwrap();
    assert!(game.completed());
}

#[test]
fn test_json_pack_rejects_bad_levels_with_position() {
    let err = levels::from_json(
        r#"{ "levels": [ { "rows": 2, "cols": 2, "cells": [11, 24, 12] } ] }"#,
    )
    .unwrap_err();
    let text = err.to_string();
    assert!(text.contains("level 1"), "unexpected error: {}", text);
}

#[test]
fn test_normalization_makes_levels_loadable() {
    let ragged = LevelData::new(0, 3, vec![11, 32]);
    assert!(ragged.validate().is_err());

    let fixed = ragged.normalized();
    assert!(fixed.validate().is_ok());
    assert!(GameState::from_level(&fixed).is_ok());
    assert_eq!(fixed.rows, 1);
    assert_eq!(fixed.cells.len(), 3);
}
