// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON shape of boards as exchanged with the session layer.

use arbor_board::{BoardSlotMap, Color, Placement, SlotIndex};

#[test]
fn board_serializes_as_object_keyed_by_slot() {
    let mut board = BoardSlotMap::new();
    board.place_colored(SlotIndex::ROOT, 50, Color::Black);
    board.place(SlotIndex::new(2).unwrap(), 30);
    let json = serde_json::to_value(&board).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "1": { "value": 50, "color": "black" },
            "2": { "value": 30 }
        })
    );
}

#[test]
fn board_parses_colors() {
    let board: BoardSlotMap =
        serde_json::from_str(r#"{ "1": { "value": 7, "color": "red" } }"#).unwrap();
    assert_eq!(
        board.get(SlotIndex::ROOT),
        Some(&Placement::colored(7, Color::Red))
    );
}

#[test]
fn slot_zero_is_rejected() {
    let err = serde_json::from_str::<BoardSlotMap>(r#"{ "0": { "value": 7 } }"#).unwrap_err();
    assert!(
        err.to_string().contains("slot 0 does not exist"),
        "unexpected error: {err}"
    );
}

#[test]
fn unknown_color_is_rejected() {
    assert!(serde_json::from_str::<BoardSlotMap>(r#"{ "1": { "value": 7, "color": "green" } }"#).is_err());
}

#[test]
fn color_names_ignore_case_on_the_wire() {
    for (name, color) in [("Red", Color::Red), ("BLACK", Color::Black), ("rEd", Color::Red)] {
        let json = format!(r#"{{ "value": 1, "color": "{name}" }}"#);
        let placement: Placement = serde_json::from_str(&json).unwrap();
        assert_eq!(placement.color, Some(color));
        assert_eq!(Some(name.parse::<Color>().unwrap()), placement.color);
    }
    assert_eq!(serde_json::to_value(Color::Red).unwrap(), "red");
}
