//! Property-based tests for board descriptor invariants.
//!
//! Uses proptest with 500 cases to verify invariants on:
//! - Raw id classification is total and round-trips for known ids
//! - Flash is positive everywhere; EEPROM is zero exactly on Horus boards
//! - Switch lookups return the sentinel exactly past each panel
//! - Capability arithmetic (trim switches, switch positions, factory counts)
//! - Family predicate consistency and serde round-trips

use openradio_boards::{BoardSelection, BoardType, Capability, SwitchInfo, stick_axis_name};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

/// Concrete board for a strategy index. One past the end of
/// [`BoardType::ALL`] is the unknown fallback, so inclusive ranges cover it.
fn board_at(idx: usize) -> BoardType {
    BoardType::ALL
        .get(idx)
        .copied()
        .unwrap_or(BoardType::Unknown)
}

fn capability_at(idx: usize) -> Capability {
    Capability::ALL
        .get(idx)
        .copied()
        .unwrap_or(Capability::Sticks)
}

/// Switch count of the panel table backing `board`, before sentinel padding.
fn panel_len(board: BoardType) -> usize {
    if board.is_taranis_x7() {
        6
    } else if board.is_horus_or_taranis() {
        18
    } else {
        7
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Known ids round-trip through classification; everything else clamps
    /// to Unknown.
    #[test]
    fn prop_from_repr_total(raw: i32) {
        let board = BoardType::from_repr(raw);
        if (-1..=13).contains(&raw) {
            prop_assert_eq!(board.repr(), raw,
                "known id {} must round-trip", raw);
        } else {
            prop_assert_eq!(board, BoardType::Unknown,
                "out-of-range id {} must clamp to Unknown", raw);
        }
    }

    /// Every concrete board survives a repr round-trip.
    #[test]
    fn prop_repr_round_trip(idx in 0usize..BoardType::COUNT) {
        let board = board_at(idx);
        prop_assert_eq!(BoardType::from_repr(board.repr()), board);
    }

    /// Flash is positive for every board; EEPROM is zero exactly on the
    /// SD-card Horus boards.
    #[test]
    fn prop_memory_sizes(idx in 0usize..=BoardType::COUNT) {
        let board = board_at(idx);
        prop_assert!(board.flash_size() > 0,
            "{board:?} must have flash");
        prop_assert_eq!(board.eeprom_size() == 0, board.is_horus(),
            "{:?} EEPROM presence must follow the family", board);
    }

    /// Unknown reports the largest sizes so buffers sized from it fit any
    /// board.
    #[test]
    fn prop_unknown_sizes_are_maxima(idx in 0usize..BoardType::COUNT) {
        let board = board_at(idx);
        prop_assert!(board.eeprom_size() <= BoardType::Unknown.eeprom_size());
        prop_assert!(board.flash_size() <= BoardType::Unknown.flash_size());
    }

    /// The sentinel appears exactly past the panel, never inside it.
    #[test]
    fn prop_switch_sentinel_past_panel(
        idx in 0usize..=BoardType::COUNT,
        switch in 0usize..32usize,
    ) {
        let board = board_at(idx);
        let info = board.switch_info(switch);
        prop_assert_eq!(
            info == SwitchInfo::NOT_AVAILABLE,
            switch >= panel_len(board),
            "{:?} switch {}", board, switch);
    }

    /// Trim switches are always two per trim.
    #[test]
    fn prop_trim_switch_arithmetic(idx in 0usize..=BoardType::COUNT) {
        let board = board_at(idx);
        prop_assert_eq!(
            board.capability(Capability::NumTrimSwitches),
            2 * board.capability(Capability::NumTrims)
        );
    }

    /// Every board except the X9E ships with its full switch complement.
    #[test]
    fn prop_factory_switches_match_panel(idx in 0usize..=BoardType::COUNT) {
        let board = board_at(idx);
        prop_assume!(!board.is_taranis_x9e());
        prop_assert_eq!(
            board.capability(Capability::FactoryInstalledSwitches),
            board.capability(Capability::Switches)
        );
    }

    /// Switch positions are three per switch on Horus and Taranis panels
    /// and a fixed nine elsewhere.
    #[test]
    fn prop_switch_positions(idx in 0usize..=BoardType::COUNT) {
        let board = board_at(idx);
        let expected = if board.is_horus_or_taranis() {
            3 * board.capability(Capability::Switches)
        } else {
            9
        };
        prop_assert_eq!(board.capability(Capability::SwitchPositions), expected);
    }

    /// Family predicates partition cleanly.
    #[test]
    fn prop_family_predicates_consistent(idx in 0usize..=BoardType::COUNT) {
        let board = board_at(idx);
        if board.is_taranis_x7() || board.is_taranis_x9e() {
            prop_assert!(board.is_taranis());
        }
        prop_assert!(!(board.is_horus() && board.is_taranis()),
            "{board:?} cannot be both Horus and Taranis");
        prop_assert_eq!(
            board.is_horus_or_taranis(),
            board.is_horus() || board.is_taranis()
        );
    }

    /// Capability lookups are deterministic.
    #[test]
    fn prop_capability_deterministic(
        idx in 0usize..=BoardType::COUNT,
        cap_idx in 0usize..Capability::ALL.len(),
    ) {
        let board = board_at(idx);
        let capability = capability_at(cap_idx);
        prop_assert_eq!(board.capability(capability), board.capability(capability));
    }

    /// Selecting by raw id always lands on the classified board.
    #[test]
    fn prop_selection_tracks_classification(raw: i32) {
        let mut selection = BoardSelection::default();
        selection.set_repr(raw);
        prop_assert_eq!(selection.current(), BoardType::from_repr(raw));
    }

    /// Axis labels exist exactly for the six supported axes.
    #[test]
    fn prop_axis_labels(index in 0usize..64usize) {
        let label = stick_axis_name(index);
        prop_assert_eq!(label == "Unknown", index >= 6,
            "axis {} label {:?}", index, label);
    }

    /// Every board renders a non-empty display name and Display agrees
    /// with it.
    #[test]
    fn prop_display_names_non_empty(idx in 0usize..=BoardType::COUNT) {
        let board = board_at(idx);
        prop_assert!(!board.name().is_empty());
        prop_assert_eq!(board.to_string(), board.name());
    }

    /// Display names parse back to the same board, except Flamenco whose
    /// label collides with the unknown fallback.
    #[test]
    fn prop_names_parse_back(idx in 0usize..BoardType::COUNT) {
        let board = board_at(idx);
        prop_assume!(board != BoardType::Flamenco);
        prop_assert_eq!(board.name().parse::<BoardType>(), Ok(board));
    }

    /// JSON serialization round-trips every board.
    #[test]
    fn prop_board_serde_round_trip(idx in 0usize..=BoardType::COUNT) {
        let board = board_at(idx);
        let json = serde_json::to_string(&board)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let back: BoardType = serde_json::from_str(&json)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(back, board);
    }
}
