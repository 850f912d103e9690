//! Transmitter mainboard descriptors for OpenRadio.
//!
//! Answers the hardware questions the configurator asks before it touches a
//! radio: how large are the settings EEPROM and firmware flash, which
//! switches sit on the panel, how many pots, sliders, and trims the board
//! carries. Everything is keyed on [`BoardType`]; lookups are total and
//! never panic, with [`BoardType::Unknown`] absorbing unrecognized ids.
//!
//! Supported mainboards:
//! - 9X (stock AVR and ATmega128 rebuilds)
//! - MEGA2560 and Gruvin9x DIY motherboards
//! - Sky9x, 9XR-PRO, and AR9X ARM conversion boards
//! - FrSky Taranis X7 / X9D / X9D+ / X9E
//! - FrSky Horus X12S and X10
//!
//! This crate is intentionally I/O-free: all descriptors are compiled-in
//! tables, so callers can query them without a radio attached. The board a
//! session operates on is carried explicitly in a [`BoardSelection`] rather
//! than a process-wide mutable.

#![deny(static_mut_refs)]

pub mod controls;
pub mod memory;
pub mod selection;
pub mod types;

pub use controls::stick_axis_name;
pub use memory::{eeprom_sizes, flash_sizes};
pub use selection::BoardSelection;
pub use types::{BoardType, Capability, ParseBoardTypeError, SwitchInfo, SwitchType};
