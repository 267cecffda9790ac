//! CLIDR_EL1 (Cache Level ID Register)
//!
//! Identifies the type of cache implemented at each level, up to seven
//! levels, and the levels of coherence and unification.
//!
//! ## Register Format
//!
//! | Bits   | Field   | Description                                  |
//! |--------|---------|----------------------------------------------|
//! | 0-2    | Ctype1  | Cache type at level 1                        |
//! | 3-5    | Ctype2  | Cache type at level 2                        |
//! | 6-8    | Ctype3  | Cache type at level 3                        |
//! | 9-11   | Ctype4  | Cache type at level 4                        |
//! | 12-14  | Ctype5  | Cache type at level 5                        |
//! | 15-17  | Ctype6  | Cache type at level 6                        |
//! | 18-20  | Ctype7  | Cache type at level 7                        |
//! | 21-23  | LoUIS   | Level of Unification Inner Shareable         |
//! | 24-26  | LoC     | Level of Coherence                           |
//! | 27-29  | LoUU    | Level of Unification Uniprocessor            |
//! | 30-32  | ICB     | Inner Cache Boundary                         |
//! | 33-63  | reserved|                                              |

use derive_more::{Deref, DerefMut};

use crate::enumeration::Enumeration;
use crate::error::Result;
use crate::field::RegisterField;
use crate::layout::RegisterLayout;
use crate::register::{Register, SystemRegister};

/// Cache type encoding shared by `Ctype1` to `Ctype7`
pub static CACHE_TYPE: Enumeration = Enumeration::new(&[
    (0, "No cache"),
    (1, "Instruction cache only"),
    (2, "Data cache only"),
    (3, "Separate instruction and data caches"),
    (4, "Unified cache"),
]);

pub static INNER_CACHE_BOUNDARY: Enumeration = Enumeration::new(&[
    (0, "Not disclosed by this mechanism"),
    (1, "L1 cache is the highest Inner Cacheable level"),
    (2, "L2 cache is the highest Inner Cacheable level"),
    (3, "L3 cache is the highest Inner Cacheable level"),
    (4, "L4 cache is the highest Inner Cacheable level"),
    (5, "L5 cache is the highest Inner Cacheable level"),
    (6, "L6 cache is the highest Inner Cacheable level"),
    (7, "L7 cache is the highest Inner Cacheable level"),
]);

/// Field ids of the per-level cache types, level 1 first
pub const CTYPE_FIELDS: [&str; 7] = [
    "Ctype1", "Ctype2", "Ctype3", "Ctype4", "Ctype5", "Ctype6", "Ctype7",
];

pub static LAYOUT: RegisterLayout = RegisterLayout::new(
    "CLIDR_EL1",
    64,
    &[
        (
            "ICB",
            RegisterField::new("Inner Cache Boundary", 3, 30)
                .with_enumeration(&INNER_CACHE_BOUNDARY),
        ),
        (
            "LoUU",
            RegisterField::new("Level of Unification Uniprocessor", 3, 27),
        ),
        ("LoC", RegisterField::new("Level of Coherence", 3, 24)),
        (
            "LoUIS",
            RegisterField::new("Level of Unification Inner Shareable", 3, 21),
        ),
        (
            "Ctype7",
            RegisterField::new("Cache Type 7", 3, 18).with_enumeration(&CACHE_TYPE),
        ),
        (
            "Ctype6",
            RegisterField::new("Cache Type 6", 3, 15).with_enumeration(&CACHE_TYPE),
        ),
        (
            "Ctype5",
            RegisterField::new("Cache Type 5", 3, 12).with_enumeration(&CACHE_TYPE),
        ),
        (
            "Ctype4",
            RegisterField::new("Cache Type 4", 3, 9).with_enumeration(&CACHE_TYPE),
        ),
        (
            "Ctype3",
            RegisterField::new("Cache Type 3", 3, 6).with_enumeration(&CACHE_TYPE),
        ),
        (
            "Ctype2",
            RegisterField::new("Cache Type 2", 3, 3).with_enumeration(&CACHE_TYPE),
        ),
        (
            "Ctype1",
            RegisterField::new("Cache Type 1", 3, 0).with_enumeration(&CACHE_TYPE),
        ),
    ],
);

const _: () = assert!(LAYOUT.validate().is_ok());

/// A cache level reported as implemented by CLIDR_EL1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLevel {
    /// 1-based cache level
    pub level: u32,
    /// Raw `Ctype<n>` encoding
    pub cache_type: u64,
    pub description: &'static str,
}

#[derive(Debug, Clone, Deref, DerefMut)]
pub struct ClidrEl1(Register);

impl SystemRegister for ClidrEl1 {
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

impl Default for ClidrEl1 {
    fn default() -> Self {
        Self::new()
    }
}

impl ClidrEl1 {
    /// Implemented cache levels, from level 1 up to the first "No cache"
    ///
    /// Fails with [`UnknownValue`](crate::RegisterError::UnknownValue) when a
    /// level before that uses a reserved encoding.
    pub fn cache_levels(&self) -> Result<Vec<CacheLevel>> {
        let mut levels = Vec::new();

        for (index, id) in CTYPE_FIELDS.iter().enumerate() {
            let cache_type = self.get_field_raw(id)?;
            if cache_type == 0 {
                break;
            }

            levels.push(CacheLevel {
                level: index as u32 + 1,
                cache_type,
                description: self.get_field_value_name(id)?.unwrap_or_default(),
            });
        }

        Ok(levels)
    }
}
