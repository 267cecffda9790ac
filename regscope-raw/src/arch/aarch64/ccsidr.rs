//! CCSIDR_EL1 (Current Cache Size ID Register)
//!
//! Describes the geometry of the cache currently selected by CSSELR_EL1.
//! This is the 32-bit format used when FEAT_CCIDX is not implemented.
//!
//! ## Register Format
//!
//! | Bits   | Field         | Description                              |
//! |--------|---------------|------------------------------------------|
//! | 0-2    | LineSize      | log2(bytes per line) - 4                 |
//! | 3-12   | Associativity | Associativity - 1                        |
//! | 13-27  | NumSets       | Number of sets - 1                       |
//! | 28-31  | reserved      |                                          |

use derive_more::{Deref, DerefMut};

use crate::field::RegisterField;
use crate::layout::RegisterLayout;
use crate::register::{Register, SystemRegister};

/// Bytes per cache line
pub fn line_size_from_field(raw: u64) -> u64 {
    1u64 << (raw + 4)
}

pub fn associativity_from_field(raw: u64) -> u64 {
    raw + 1
}

pub fn num_sets_from_field(raw: u64) -> u64 {
    raw + 1
}

pub static LAYOUT: RegisterLayout = RegisterLayout::new(
    "CCSIDR_EL1",
    32,
    &[
        (
            "LineSize",
            RegisterField::new("Cache Line Size", 3, 0).with_conversion(line_size_from_field),
        ),
        (
            "Associativity",
            RegisterField::new("Associativity of cache - 1", 10, 3)
                .with_conversion(associativity_from_field),
        ),
        (
            "NumSets",
            RegisterField::new("Number of sets - 1", 15, 13).with_conversion(num_sets_from_field),
        ),
    ],
);

const _: () = assert!(LAYOUT.validate().is_ok());

#[derive(Debug, Clone, Deref, DerefMut)]
pub struct CcsidrEl1(Register);

impl SystemRegister for CcsidrEl1 {
    const LAYOUT: &'static RegisterLayout = &LAYOUT;

    fn from_register(register: Register) -> Self {
        Self(register)
    }

    fn register(&self) -> &Register {
        &self.0
    }

    fn register_mut(&mut self) -> &mut Register {
        &mut self.0
    }
}

impl Default for CcsidrEl1 {
    fn default() -> Self {
        Self::new()
    }
}

impl CcsidrEl1 {
    /// Cache line size in bytes
    pub fn line_size(&self) -> u64 {
        self.converted("LineSize")
    }

    /// Number of ways
    pub fn associativity(&self) -> u64 {
        self.converted("Associativity")
    }

    pub fn num_sets(&self) -> u64 {
        self.converted("NumSets")
    }

    /// Total cache size in bytes: line size * ways * sets
    pub fn cache_size(&self) -> u64 {
        self.line_size() * self.associativity() * self.num_sets()
    }

    // Ids come from LAYOUT, so the lookup cannot miss
    fn converted(&self, id: &str) -> u64 {
        self.get_field(id).unwrap_or_default()
    }
}
