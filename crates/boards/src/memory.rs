//! EEPROM and flash geometry per board.
//!
//! Sizes are in bytes. The configurator uses these to size backup buffers
//! and to refuse firmware images that cannot fit the target.

#![deny(static_mut_refs)]

use crate::types::BoardType;

/// Settings EEPROM sizes in bytes.
pub mod eeprom_sizes {
    /// Stock 9X mainboard.
    pub const STOCK: u32 = 2 * 1024;
    /// ATmega128 rebuild.
    pub const M128: u32 = 4 * 1024;
    /// MEGA2560 and Gruvin9x motherboards.
    pub const GRUVIN9X: u32 = 4 * 1024;
    /// Taranis family and Flamenco.
    pub const TARANIS: u32 = 32 * 1024;
    /// Sky9x serial EEPROM, 128 pages of 4 KiB.
    pub const SKY9X: u32 = 128 * 4096;
    /// 9XR-PRO and AR9X serial EEPROM.
    pub const NINE_XR_PRO: u32 = 128 * 4096;
    /// Largest EEPROM across all boards.
    pub const MAX: u32 = NINE_XR_PRO;
}

/// Firmware flash sizes in bytes.
pub mod flash_sizes {
    /// Stock 9X mainboard.
    pub const STOCK: u32 = 64 * 1024;
    /// ATmega128 rebuild.
    pub const M128: u32 = 128 * 1024;
    /// MEGA2560 and Gruvin9x motherboards.
    pub const GRUVIN9X: u32 = 256 * 1024;
    /// Sky9x conversion board.
    pub const SKY9X: u32 = 256 * 1024;
    /// 9XR-PRO and AR9X.
    pub const NINE_XR_PRO: u32 = 512 * 1024;
    /// Taranis family and Flamenco.
    pub const TARANIS: u32 = 512 * 1024;
    /// Horus-class boards.
    pub const HORUS: u32 = 2048 * 1024;
    /// Largest flash across all boards.
    pub const MAX: u32 = HORUS;
}

impl BoardType {
    /// Settings EEPROM size in bytes.
    ///
    /// Horus-class boards keep settings on the SD card and report `0`.
    /// [`BoardType::Unknown`] reports the largest size of any board so
    /// buffers sized from it hold a backup from whatever the radio turns
    /// out to be.
    pub fn eeprom_size(self) -> u32 {
        match self {
            Self::Stock => eeprom_sizes::STOCK,
            Self::M128 => eeprom_sizes::M128,
            Self::Mega2560 | Self::Gruvin9x => eeprom_sizes::GRUVIN9X,
            Self::Sky9x => eeprom_sizes::SKY9X,
            Self::NineXrPro | Self::Ar9x => eeprom_sizes::NINE_XR_PRO,
            Self::TaranisX7
            | Self::TaranisX9D
            | Self::TaranisX9Dp
            | Self::TaranisX9E
            | Self::Flamenco => eeprom_sizes::TARANIS,
            Self::X12s | Self::X10 => 0,
            Self::Unknown => eeprom_sizes::MAX,
        }
    }

    /// Firmware flash size in bytes.
    ///
    /// [`BoardType::Unknown`] reports the largest size of any board.
    pub fn flash_size(self) -> u32 {
        match self {
            Self::Stock => flash_sizes::STOCK,
            Self::M128 => flash_sizes::M128,
            Self::Mega2560 | Self::Gruvin9x => flash_sizes::GRUVIN9X,
            Self::Sky9x => flash_sizes::SKY9X,
            Self::NineXrPro | Self::Ar9x => flash_sizes::NINE_XR_PRO,
            Self::TaranisX7
            | Self::TaranisX9D
            | Self::TaranisX9Dp
            | Self::TaranisX9E
            | Self::Flamenco => flash_sizes::TARANIS,
            Self::X12s | Self::X10 => flash_sizes::HORUS,
            Self::Unknown => flash_sizes::MAX,
        }
    }
}
