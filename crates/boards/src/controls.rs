//! Physical input surface: switches, sticks, pots, sliders, trims.

#![deny(static_mut_refs)]

use crate::types::{BoardType, Capability, SwitchInfo, SwitchType};

/// Taranis X7 panel, reduced to six switches.
const TARANIS_X7_SWITCHES: &[SwitchInfo] = &[
    SwitchInfo::new(SwitchType::ThreePos, "SA"),
    SwitchInfo::new(SwitchType::ThreePos, "SB"),
    SwitchInfo::new(SwitchType::ThreePos, "SC"),
    SwitchInfo::new(SwitchType::ThreePos, "SD"),
    SwitchInfo::new(SwitchType::TwoPos, "SF"),
    SwitchInfo::new(SwitchType::Toggle, "SH"),
];

/// Full Horus and Taranis panel. Entries past the factory-installed eight
/// describe the optional expansion switches of the X9E.
const HORUS_TARANIS_SWITCHES: &[SwitchInfo] = &[
    SwitchInfo::new(SwitchType::ThreePos, "SA"),
    SwitchInfo::new(SwitchType::ThreePos, "SB"),
    SwitchInfo::new(SwitchType::ThreePos, "SC"),
    SwitchInfo::new(SwitchType::ThreePos, "SD"),
    SwitchInfo::new(SwitchType::ThreePos, "SE"),
    SwitchInfo::new(SwitchType::TwoPos, "SF"),
    SwitchInfo::new(SwitchType::ThreePos, "SG"),
    SwitchInfo::new(SwitchType::Toggle, "SH"),
    SwitchInfo::new(SwitchType::ThreePos, "SI"),
    SwitchInfo::new(SwitchType::ThreePos, "SJ"),
    SwitchInfo::new(SwitchType::ThreePos, "SK"),
    SwitchInfo::new(SwitchType::ThreePos, "SL"),
    SwitchInfo::new(SwitchType::ThreePos, "SM"),
    SwitchInfo::new(SwitchType::ThreePos, "SN"),
    SwitchInfo::new(SwitchType::ThreePos, "SO"),
    SwitchInfo::new(SwitchType::ThreePos, "SP"),
    SwitchInfo::new(SwitchType::ThreePos, "SQ"),
    SwitchInfo::new(SwitchType::ThreePos, "SR"),
];

/// Legacy 9X-era panel with function-named switches.
const LEGACY_SWITCHES: &[SwitchInfo] = &[
    SwitchInfo::new(SwitchType::ThreePos, "3POS"),
    SwitchInfo::new(SwitchType::TwoPos, "THR"),
    SwitchInfo::new(SwitchType::TwoPos, "RUD"),
    SwitchInfo::new(SwitchType::TwoPos, "ELE"),
    SwitchInfo::new(SwitchType::TwoPos, "AIL"),
    SwitchInfo::new(SwitchType::TwoPos, "GEA"),
    SwitchInfo::new(SwitchType::Toggle, "TRN"),
];

/// Stick axis labels in channel order.
const STICK_AXIS_NAMES: &[&str] = &[
    "Left Horizontal",
    "Left Vertical",
    "Right Vertical",
    "Right Horizontal",
    "Aux. 1",
    "Aux. 2",
];

/// Human-readable label for a stick axis; `"Unknown"` past the last axis.
pub fn stick_axis_name(index: usize) -> &'static str {
    STICK_AXIS_NAMES.get(index).copied().unwrap_or("Unknown")
}

impl BoardType {
    /// Describe the switch at `index` on this board's panel.
    ///
    /// Indices past the panel return [`SwitchInfo::NOT_AVAILABLE`] rather
    /// than panicking, so callers can probe a fixed-width switch grid.
    pub fn switch_info(self, index: usize) -> SwitchInfo {
        // The X7 check must come before the wider family check: the X7 is
        // part of the Taranis family but carries the reduced panel.
        let switches = if self.is_taranis_x7() {
            TARANIS_X7_SWITCHES
        } else if self.is_horus_or_taranis() {
            HORUS_TARANIS_SWITCHES
        } else {
            LEGACY_SWITCHES
        };
        switches
            .get(index)
            .copied()
            .unwrap_or(SwitchInfo::NOT_AVAILABLE)
    }

    /// Numeric hardware attribute lookup.
    pub fn capability(self, capability: Capability) -> u8 {
        match capability {
            Capability::Sticks => 4,
            Capability::Pots => self.pot_count(),
            Capability::Sliders => self.slider_count(),
            Capability::MouseAnalogs => {
                if self.is_horus() {
                    2
                } else {
                    0
                }
            }
            Capability::Switches => self.switch_count(),
            Capability::FactoryInstalledSwitches => self.factory_switch_count(),
            Capability::SwitchPositions => self.switch_position_count(),
            Capability::NumTrims => self.trim_count(),
            Capability::NumTrimSwitches => 2 * self.trim_count(),
        }
    }

    fn switch_count(self) -> u8 {
        if self.is_taranis_x9e() {
            18
        } else if self.is_taranis_x7() {
            6
        } else if self.is_horus_or_taranis() {
            8
        } else {
            7
        }
    }

    /// Only the X9E ships with fewer switches installed than its panel
    /// supports; every other board reports its full switch count here.
    fn factory_switch_count(self) -> u8 {
        if self.is_taranis_x9e() {
            8
        } else {
            self.switch_count()
        }
    }

    fn switch_position_count(self) -> u8 {
        if self.is_horus_or_taranis() {
            3 * self.switch_count()
        } else {
            9
        }
    }

    fn pot_count(self) -> u8 {
        if self.is_horus() {
            3
        } else if self.is_taranis_x7() {
            2
        } else if self.is_taranis_x9e() {
            4
        } else {
            3
        }
    }

    fn slider_count(self) -> u8 {
        if self.is_horus() {
            4
        } else if self.is_taranis_x7() {
            0
        } else if self.is_taranis_x9e() {
            4
        } else if self.is_taranis() {
            2
        } else {
            0
        }
    }

    fn trim_count(self) -> u8 {
        if self.is_horus() { 6 } else { 4 }
    }
}
