//! Transmitter mainboard classification.

#![deny(static_mut_refs)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transmitter mainboard model classification.
///
/// Discriminants match the board ids stored in configurator profiles, with
/// `-1` reserved for unrecognized hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoardType {
    /// Unrecognized or not-yet-detected hardware.
    #[default]
    Unknown = -1,
    /// 9X with the stock AVR mainboard.
    Stock = 0,
    /// 9X rebuilt with an ATmega128.
    M128 = 1,
    /// MEGA2560 DIY mainboard.
    Mega2560 = 2,
    /// Gruvin9x motherboard.
    Gruvin9x = 3,
    /// Sky9x ARM conversion board.
    Sky9x = 4,
    /// 9XR-PRO (ARM).
    NineXrPro = 5,
    /// AR9X ARM conversion board.
    Ar9x = 6,
    /// FrSky Taranis X7.
    TaranisX7 = 7,
    /// FrSky Taranis X9D.
    TaranisX9D = 8,
    /// FrSky Taranis X9D+.
    TaranisX9Dp = 9,
    /// FrSky Taranis X9E.
    TaranisX9E = 10,
    /// Flamenco prototype.
    Flamenco = 11,
    /// FrSky Horus X12S.
    X12s = 12,
    /// FrSky Horus X10.
    X10 = 13,
}

impl BoardType {
    /// Every concrete board in discriminant order, for populating the
    /// configurator's board picker.
    pub const ALL: [BoardType; 14] = [
        Self::Stock,
        Self::M128,
        Self::Mega2560,
        Self::Gruvin9x,
        Self::Sky9x,
        Self::NineXrPro,
        Self::Ar9x,
        Self::TaranisX7,
        Self::TaranisX9D,
        Self::TaranisX9Dp,
        Self::TaranisX9E,
        Self::Flamenco,
        Self::X12s,
        Self::X10,
    ];

    /// Number of concrete boards (excludes [`BoardType::Unknown`]).
    pub const COUNT: usize = Self::ALL.len();

    /// Classify a raw board id as stored in profile files.
    ///
    /// Anything outside the known range coerces to [`BoardType::Unknown`].
    pub fn from_repr(raw: i32) -> Self {
        match raw {
            0 => Self::Stock,
            1 => Self::M128,
            2 => Self::Mega2560,
            3 => Self::Gruvin9x,
            4 => Self::Sky9x,
            5 => Self::NineXrPro,
            6 => Self::Ar9x,
            7 => Self::TaranisX7,
            8 => Self::TaranisX9D,
            9 => Self::TaranisX9Dp,
            10 => Self::TaranisX9E,
            11 => Self::Flamenco,
            12 => Self::X12s,
            13 => Self::X10,
            _ => Self::Unknown,
        }
    }

    /// The raw board id written to profile files.
    pub fn repr(self) -> i32 {
        self as i32
    }

    /// Both Horus-class boards (X12S and X10).
    pub fn is_horus(self) -> bool {
        matches!(self, Self::X12s | Self::X10)
    }

    pub fn is_taranis_x7(self) -> bool {
        self == Self::TaranisX7
    }

    pub fn is_taranis_x9e(self) -> bool {
        self == Self::TaranisX9E
    }

    /// The Taranis family proper. Flamenco shares the Taranis memory sizes
    /// but is not part of the family.
    pub fn is_taranis(self) -> bool {
        matches!(
            self,
            Self::TaranisX7 | Self::TaranisX9D | Self::TaranisX9Dp | Self::TaranisX9E
        )
    }

    pub fn is_horus_or_taranis(self) -> bool {
        self.is_horus() || self.is_taranis()
    }

    /// Short display name, as shown in the board picker.
    ///
    /// Flamenco never shipped and has no marketing name; it reports
    /// `"Unknown"` like unrecognized hardware.
    pub fn name(self) -> &'static str {
        match self {
            Self::Stock => "9X",
            Self::M128 => "9X128",
            Self::Mega2560 => "MEGA2560",
            Self::Gruvin9x => "Gruvin9x",
            Self::Sky9x => "Sky9x",
            Self::NineXrPro => "9XR-PRO",
            Self::Ar9x => "AR9X",
            Self::TaranisX7 => "Taranis X7",
            Self::TaranisX9D => "Taranis X9D",
            Self::TaranisX9Dp => "Taranis X9D+",
            Self::TaranisX9E => "Taranis X9E",
            Self::X12s => "Horus",
            Self::X10 => "X10",
            Self::Flamenco | Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a board name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown board type: {0}")]
pub struct ParseBoardTypeError(String);

impl FromStr for BoardType {
    type Err = ParseBoardTypeError;

    /// Parse a board from its display name or a short alias, matched
    /// case-insensitively. `"unknown"` parses to [`BoardType::Unknown`];
    /// Flamenco is only reachable via `"flamenco"` since its display name
    /// collides with the unknown label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "9x" | "stock" => Ok(Self::Stock),
            "9x128" | "m128" => Ok(Self::M128),
            "mega2560" => Ok(Self::Mega2560),
            "gruvin9x" => Ok(Self::Gruvin9x),
            "sky9x" => Ok(Self::Sky9x),
            "9xr-pro" | "9xrpro" => Ok(Self::NineXrPro),
            "ar9x" => Ok(Self::Ar9x),
            "taranis x7" | "x7" => Ok(Self::TaranisX7),
            "taranis x9d" | "x9d" => Ok(Self::TaranisX9D),
            "taranis x9d+" | "x9d+" => Ok(Self::TaranisX9Dp),
            "taranis x9e" | "x9e" => Ok(Self::TaranisX9E),
            "flamenco" => Ok(Self::Flamenco),
            "horus" | "x12s" => Ok(Self::X12s),
            "x10" => Ok(Self::X10),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseBoardTypeError(s.to_string())),
        }
    }
}

/// Physical switch hardware classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwitchType {
    /// No switch at this panel position.
    NotAvailable,
    /// Momentary switch, springs back when released.
    Toggle,
    TwoPos,
    ThreePos,
}

/// One physical switch: its hardware type and panel label.
///
/// Produced fresh by [`BoardType::switch_info`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchInfo {
    pub config: SwitchType,
    pub name: &'static str,
}

impl SwitchInfo {
    /// Sentinel returned for switch indices past a board's panel.
    pub const NOT_AVAILABLE: SwitchInfo = SwitchInfo::new(SwitchType::NotAvailable, "???");

    pub const fn new(config: SwitchType, name: &'static str) -> Self {
        Self { config, name }
    }
}

/// Queryable numeric hardware attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    Sticks,
    Pots,
    Sliders,
    MouseAnalogs,
    Switches,
    FactoryInstalledSwitches,
    SwitchPositions,
    NumTrims,
    NumTrimSwitches,
}

impl Capability {
    /// Every capability tag, for exhaustive sweeps in diagnostics and tests.
    pub const ALL: [Capability; 9] = [
        Self::Sticks,
        Self::Pots,
        Self::Sliders,
        Self::MouseAnalogs,
        Self::Switches,
        Self::FactoryInstalledSwitches,
        Self::SwitchPositions,
        Self::NumTrims,
        Self::NumTrimSwitches,
    ];
}
