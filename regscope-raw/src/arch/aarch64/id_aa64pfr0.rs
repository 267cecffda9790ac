//! ID_AA64PFR0_EL1 (AArch64 Processor Feature Register 0)
//!
//! Reports which exception levels are implemented and in which execution
//! states, plus floating-point, Advanced SIMD and GIC system register support.
//!
//! ## Register Format
//!
//! | Bits   | Field   | Description                              |
//! |--------|---------|------------------------------------------|
//! | 0-3    | EL0     | EL0 exception level handling             |
//! | 4-7    | EL1     | EL1 exception level handling             |
//! | 8-11   | EL2     | EL2 exception level handling             |
//! | 12-15  | EL3     | EL3 exception level handling             |
//! | 16-19  | FP      | Floating-point support                   |
//! | 20-23  | AdvSIMD | Advanced SIMD support                    |
//! | 24-27  | GIC     | GIC system register interface            |
//! | 28-63  | (newer feature fields, not modelled)                |

use derive_more::{Deref, DerefMut};

use crate::enumeration::Enumeration;
use crate::field::RegisterField;
use crate::layout::RegisterLayout;
use crate::register::{Register, SystemRegister};

/// Shared by EL0 to EL3
pub static EXCEPTION_LEVEL: Enumeration = Enumeration::new(&[
    (0, "Not implemented"),
    (1, "Can be executed in AArch64 state only"),
    (2, "Can be executed in either AArch64 or AArch32 state"),
]);

pub static FP: Enumeration = Enumeration::new(&[
    (0x0, "Floating-point implemented"),
    (0x1, "Floating-point with half-precision support implemented"),
    (0xF, "Floating-point not implemented"),
]);

pub static ADV_SIMD: Enumeration = Enumeration::new(&[
    (0x0, "Advanced SIMD implemented"),
    (0x1, "Advanced SIMD with half-precision support implemented"),
    (0xF, "Advanced SIMD not implemented"),
]);

pub static GIC: Enumeration = Enumeration::new(&[
    (0x0, "GIC CPU interface system registers not implemented"),
    (0x1, "System register interface to GICv3 and GICv4 implemented"),
    (0x3, "System register interface to GICv4.1 implemented"),
]);

pub static LAYOUT: RegisterLayout = RegisterLayout::new(
    "ID_AA64PFR0_EL1",
    64,
    &[
        (
            "EL0",
            RegisterField::new("EL0 Exception level handling", 4, 0)
                .with_enumeration(&EXCEPTION_LEVEL),
        ),
        (
            "EL1",
            RegisterField::new("EL1 Exception level handling", 4, 4)
                .with_enumeration(&EXCEPTION_LEVEL),
        ),
        (
            "EL2",
            RegisterField::new("EL2 Exception level handling", 4, 8)
                .with_enumeration(&EXCEPTION_LEVEL),
        ),
        (
            "EL3",
            RegisterField::new("EL3 Exception level handling", 4, 12)
                .with_enumeration(&EXCEPTION_LEVEL),
        ),
        (
            "FP",
            RegisterField::new("Floating-point", 4, 16).with_enumeration(&FP),
        ),
        (
            "AdvSIMD",
            RegisterField::new("Advanced SIMD", 4, 20).with_enumeration(&ADV_SIMD),
        ),
        (
            "GIC",
            RegisterField::new("GIC system register interface", 4, 24).with_enumeration(&GIC),
        ),
    ],
);

const _: () = assert!(LAYOUT.validate().is_ok());

const EXCEPTION_LEVEL_FIELDS: [&str; 4] = ["EL0", "EL1", "EL2", "EL3"];

#[derive(Debug, Clone, Deref, DerefMut)]
pub struct IdAa64Pfr0El1(Register);

impl SystemRegister for IdAa64Pfr0El1 {
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

impl Default for IdAa64Pfr0El1 {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAa64Pfr0El1 {
    pub fn implements_exception_level(&self, level: usize) -> bool {
        EXCEPTION_LEVEL_FIELDS
            .get(level)
            .and_then(|id| self.get_field(id).ok())
            .is_some_and(|value| value != 0)
    }

    pub fn implements_all_exception_levels(&self) -> bool {
        (0..EXCEPTION_LEVEL_FIELDS.len()).all(|level| self.implements_exception_level(level))
    }
}
