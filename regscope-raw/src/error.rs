//! Error types shared by fields, registers and layouts

pub type Result<T> = std::result::Result<T, RegisterError>;

/// Errors that can occur while reading or writing register fields
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("Value 0x{value:X} does not fit in {width}-bit field '{field}'")]
    FieldOutOfBound {
        field: &'static str,
        value: u64,
        width: u32,
    },

    #[error("Register has no field '{0}'")]
    UnknownField(String),

    #[error("Field '{field}' has no description for value 0x{value:X}")]
    UnknownValue { field: &'static str, value: u64 },

    #[error("Invalid register layout: {0}")]
    Layout(#[from] LayoutError),

    #[error("Expected 4 or 8 captured bytes, got {0}")]
    InvalidRawLength(usize),
}

/// Reasons a register layout is rejected
///
/// Produced both by the compile-time checks on built-in layouts and by
/// [`Register::new`](crate::Register::new) for caller-provided ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("register width {0} is outside 1..=64")]
    RegisterWidth(u32),

    #[error("field '{0}' has zero width")]
    ZeroWidth(&'static str),

    #[error("field '{field}' spans bits {shift}..{end} beyond the {register_width}-bit register")]
    OutsideRegister {
        field: &'static str,
        shift: u32,
        end: u32,
        register_width: u32,
    },

    #[error("fields '{first}' and '{second}' overlap")]
    Overlap {
        first: &'static str,
        second: &'static str,
    },

    #[error("field id '{0}' is defined more than once")]
    DuplicateField(&'static str),
}
