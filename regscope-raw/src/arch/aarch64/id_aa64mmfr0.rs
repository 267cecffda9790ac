//! ID_AA64MMFR0_EL1 (AArch64 Memory Model Feature Register 0)
//!
//! Reports the memory model and memory management features implemented in
//! AArch64 state.
//!
//! ## Register Format
//!
//! | Bits   | Field     | Description                                   |
//! |--------|-----------|-----------------------------------------------|
//! | 0-3    | PARange   | Physical address range supported              |
//! | 4-7    | ASIDBits  | Number of ASID bits                           |
//! | 8-11   | BigEnd    | Mixed-endian configuration support            |
//! | 12-15  | SNSMem    | Secure versus Non-secure memory distinction   |
//! | 16-19  | BigEndEL0 | Mixed-endian support at EL0 only              |
//! | 20-23  | TGran16   | 16KB translation granule support              |
//! | 24-27  | TGran64   | 64KB translation granule support              |
//! | 28-31  | TGran4    | 4KB translation granule support               |
//! | 32-63  | (newer feature fields, not modelled)                      |

use derive_more::{Deref, DerefMut};

use crate::enumeration::Enumeration;
use crate::field::RegisterField;
use crate::layout::RegisterLayout;
use crate::register::{Register, SystemRegister};

pub static PA_RANGE: Enumeration = Enumeration::new(&[
    (0, "4GB"),
    (1, "64GB"),
    (2, "1TB"),
    (3, "4TB"),
    (4, "16TB"),
    (5, "256TB"),
    (6, "4PB"),
]);

pub static ASID_BITS: Enumeration = Enumeration::new(&[(0, "8 bits"), (2, "16 bits")]);

pub static BIG_END: Enumeration = Enumeration::new(&[
    (0, "No Mixed-endian support"),
    (1, "Mixed-endian support"),
]);

pub static SNS_MEM: Enumeration = Enumeration::new(&[
    (
        0,
        "Does not support a distinction between Secure and Non-secure memory",
    ),
    (
        1,
        "Does support a distinction between Secure and Non-secure memory",
    ),
]);

pub static BIG_END_EL0: Enumeration = Enumeration::new(&[
    (0, "No mixed-endian support at EL0"),
    (1, "Mixed-endian support at EL0"),
]);

pub static TGRAN16: Enumeration = Enumeration::new(&[
    (0, "16KB granule not supported"),
    (1, "16KB granule supported"),
]);

pub static TGRAN64: Enumeration = Enumeration::new(&[
    (0x0, "64KB granule supported"),
    (0xF, "64KB granule not supported"),
]);

pub static TGRAN4: Enumeration = Enumeration::new(&[
    (0x0, "4KB granule supported"),
    (0xF, "4KB granule not supported"),
]);

pub static LAYOUT: RegisterLayout = RegisterLayout::new(
    "ID_AA64MMFR0_EL1",
    64,
    &[
        (
            "PARange",
            RegisterField::new("Physical Address range supported", 4, 0)
                .with_enumeration(&PA_RANGE),
        ),
        (
            "ASIDBits",
            RegisterField::new("Number of ASID bits", 4, 4).with_enumeration(&ASID_BITS),
        ),
        (
            "BigEnd",
            RegisterField::new("Mixed-endian configuration support", 4, 8)
                .with_enumeration(&BIG_END),
        ),
        (
            "SNSMem",
            RegisterField::new("Secure versus Non-secure Memory distinction", 4, 12)
                .with_enumeration(&SNS_MEM),
        ),
        (
            "BigEndEL0",
            RegisterField::new("Mixed-endian support at EL0 only", 4, 16)
                .with_enumeration(&BIG_END_EL0),
        ),
        (
            "TGran16",
            RegisterField::new("Support for 16KB memory translation granule size", 4, 20)
                .with_enumeration(&TGRAN16),
        ),
        (
            "TGran64",
            RegisterField::new("Support for 64KB memory translation granule size", 4, 24)
                .with_enumeration(&TGRAN64),
        ),
        (
            "TGran4",
            RegisterField::new("Support for 4KB memory translation granule size", 4, 28)
                .with_enumeration(&TGRAN4),
        ),
    ],
);

const _: () = assert!(LAYOUT.validate().is_ok());

#[derive(Debug, Clone, Deref, DerefMut)]
pub struct IdAa64Mmfr0El1(Register);

impl SystemRegister for IdAa64Mmfr0El1 {
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

impl Default for IdAa64Mmfr0El1 {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAa64Mmfr0El1 {
    /// Physical address width in bits, `None` for reserved encodings
    pub fn physical_address_bits(&self) -> Option<u32> {
        match self.get_field("PARange").ok()? {
            0 => Some(32),
            1 => Some(36),
            2 => Some(40),
            3 => Some(42),
            4 => Some(44),
            5 => Some(48),
            6 => Some(52),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegisterError;

    // Cortex-A53 reset value: 40-bit PA, 16-bit ASID, 4KB and 64KB granules
    const CORTEX_A53: u64 = 0x0000_0000_0000_1122;

    #[test]
    fn test_decode_cortex_a53() {
        let mmfr0 = IdAa64Mmfr0El1::from_raw(CORTEX_A53);

        assert_eq!(mmfr0.get_field_value_name("PARange").unwrap(), Some("1TB"));
        assert_eq!(mmfr0.physical_address_bits(), Some(40));
        assert_eq!(
            mmfr0.get_field_value_name("ASIDBits").unwrap(),
            Some("16 bits")
        );
        assert_eq!(
            mmfr0.get_field_value_name("BigEnd").unwrap(),
            Some("Mixed-endian support")
        );
        assert_eq!(
            mmfr0.get_field_value_name("TGran4").unwrap(),
            Some("4KB granule supported")
        );
        assert_eq!(
            mmfr0.get_field_value_name("TGran64").unwrap(),
            Some("64KB granule supported")
        );
        assert_eq!(
            mmfr0.get_field_value_name("TGran16").unwrap(),
            Some("16KB granule not supported")
        );
    }

    #[test]
    fn test_granule_fields_are_independent() {
        let mmfr0 = IdAa64Mmfr0El1::from_raw(0x0010_0000);
        assert_eq!(mmfr0.get_field("TGran16").unwrap(), 1);
        assert_eq!(mmfr0.get_field("BigEndEL0").unwrap(), 0);
    }

    #[test]
    fn test_granule_not_supported() {
        let mmfr0 = IdAa64Mmfr0El1::from_raw(0xFF00_0000);
        assert_eq!(
            mmfr0.get_field_value_name("TGran4").unwrap(),
            Some("4KB granule not supported")
        );
        assert_eq!(
            mmfr0.get_field_value_name("TGran64").unwrap(),
            Some("64KB granule not supported")
        );
    }

    #[test]
    fn test_reserved_encoding_is_an_error() {
        let mmfr0 = IdAa64Mmfr0El1::from_raw(0x1 << 4);
        assert_eq!(
            mmfr0.get_field_value_name("ASIDBits"),
            Err(RegisterError::UnknownValue {
                field: "Number of ASID bits",
                value: 1
            })
        );

        let mmfr0 = IdAa64Mmfr0El1::from_raw(0x7);
        assert_eq!(mmfr0.physical_address_bits(), None);
        assert!(mmfr0.get_field_value_name("PARange").is_err());
    }
}
