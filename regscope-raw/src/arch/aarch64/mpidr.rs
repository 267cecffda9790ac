//! MPIDR_EL1 (Multiprocessor Affinity Register)
//!
//! Identifies the core within the system through up to four affinity levels.
//!
//! ## Register Format
//!
//! | Bits   | Field | Description                                  |
//! |--------|-------|----------------------------------------------|
//! | 0-7    | Aff0  | Affinity level 0                             |
//! | 8-15   | Aff1  | Affinity level 1                             |
//! | 16-23  | Aff2  | Affinity level 2                             |
//! | 24     | MT    | Lowest affinity level is multithreaded       |
//! | 25-29  | reserved |                                           |
//! | 30     | U     | Uniprocessor system                          |
//! | 31     | RES1  |                                              |
//! | 32-39  | Aff3  | Affinity level 3                             |
//! | 40-63  | reserved |                                           |

use derive_more::{Deref, DerefMut};

use crate::enumeration::Enumeration;
use crate::field::RegisterField;
use crate::layout::RegisterLayout;
use crate::register::{Register, SystemRegister};

pub static MULTITHREADING: Enumeration = Enumeration::new(&[
    (0, "Cores at the lowest affinity level are largely independent"),
    (1, "Cores at the lowest affinity level are very interdependent"),
]);

pub static UNIPROCESSOR: Enumeration = Enumeration::new(&[
    (0, "Processor is part of a multiprocessor system"),
    (1, "Processor is part of a uniprocessor system"),
]);

pub static LAYOUT: RegisterLayout = RegisterLayout::new(
    "MPIDR_EL1",
    64,
    &[
        ("Aff0", RegisterField::new("Affinity level 0", 8, 0)),
        ("Aff1", RegisterField::new("Affinity level 1", 8, 8)),
        ("Aff2", RegisterField::new("Affinity level 2", 8, 16)),
        (
            "MT",
            RegisterField::new("Multithreading type approach", 1, 24)
                .with_enumeration(&MULTITHREADING),
        ),
        (
            "U",
            RegisterField::new("Uniprocessor system", 1, 30).with_enumeration(&UNIPROCESSOR),
        ),
        ("Aff3", RegisterField::new("Affinity level 3", 8, 32)),
    ],
);

const _: () = assert!(LAYOUT.validate().is_ok());

const AFFINITY_FIELDS: [&str; 4] = ["Aff0", "Aff1", "Aff2", "Aff3"];

#[derive(Debug, Clone, Deref, DerefMut)]
pub struct MpidrEl1(Register);

impl SystemRegister for MpidrEl1 {
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

impl Default for MpidrEl1 {
    fn default() -> Self {
        Self::new()
    }
}

impl MpidrEl1 {
    /// Affinity value at `level` (0..=3)
    pub fn affinity_level(&self, level: usize) -> Option<u64> {
        let id = AFFINITY_FIELDS.get(level)?;
        self.get_field(id).ok()
    }

    /// Aff3..Aff0 packed into 32 bits, Aff3 in the top byte
    pub fn affinity(&self) -> u32 {
        AFFINITY_FIELDS
            .iter()
            .enumerate()
            .map(|(level, id)| (self.get_field(id).unwrap_or_default() as u32) << (8 * level))
            .fold(0, |acc, aff| acc | aff)
    }

    /// True for the core whose Aff1 and Aff0 are both zero
    ///
    /// Bare-metal boot code parks every other core, see the `and x0, x0,
    /// #0xFFFF; cbz x0, boot` idiom.
    pub fn is_boot_core(&self) -> bool {
        self.encode() & 0xFFFF == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affinity_levels() {
        let mpidr = MpidrEl1::from_raw(0x0000_0004_8103_0201);

        assert_eq!(mpidr.affinity_level(0), Some(0x01));
        assert_eq!(mpidr.affinity_level(1), Some(0x02));
        assert_eq!(mpidr.affinity_level(2), Some(0x03));
        assert_eq!(mpidr.affinity_level(3), Some(0x04));
        assert_eq!(mpidr.affinity_level(4), None);
        assert_eq!(mpidr.affinity(), 0x0403_0201);

        assert_eq!(mpidr.get_field("MT").unwrap(), 1);
        assert_eq!(mpidr.get_field("U").unwrap(), 0);
        assert_eq!(
            mpidr.get_field_value_name("U").unwrap(),
            Some("Processor is part of a multiprocessor system")
        );
    }

    #[test]
    fn test_boot_core() {
        // Cortex-A53 core 0 in a cluster reads 0x80000000 (RES1 bit set)
        assert!(MpidrEl1::from_raw(0x8000_0000).is_boot_core());
        assert!(!MpidrEl1::from_raw(0x8000_0001).is_boot_core());
        assert!(!MpidrEl1::from_raw(0x8000_0100).is_boot_core());
        assert!(MpidrEl1::from_raw(0x8001_0000).is_boot_core());
    }
}
