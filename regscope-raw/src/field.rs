//! Bounded bitfields

use crate::enumeration::Enumeration;
use crate::error::{RegisterError, Result};

/// Derives an application-level quantity from a field's raw bits
pub type Conversion = fn(u64) -> u64;

/// Mask covering the low `width` bits
pub const fn field_mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// One named, fixed-width, fixed-offset slice of a register
///
/// The stored value always satisfies `value <= 2^width - 1`. Writes that
/// would break this are rejected and leave the previous value in place.
///
/// # Example
///
/// ```
/// use regscope_raw::RegisterField;
///
/// let mut field = RegisterField::new("Cache Line Size", 3, 0)
///     .with_conversion(|raw| 1u64 << (raw + 4));
///
/// field.set_value(2).unwrap();
/// assert_eq!(field.raw_value(), 2);
/// assert_eq!(field.get_value(), 64);
/// assert!(field.set_value(8).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RegisterField {
    name: &'static str,
    width: u32,
    shift: u32,
    value: u64,
    enumeration: Option<&'static Enumeration>,
    conversion: Option<Conversion>,
}

impl RegisterField {
    /// Create a field with an initial value of 0
    pub const fn new(name: &'static str, width: u32, shift: u32) -> Self {
        Self {
            name,
            width,
            shift,
            value: 0,
            enumeration: None,
            conversion: None,
        }
    }

    /// Attach a shared value-to-description table
    pub const fn with_enumeration(mut self, enumeration: &'static Enumeration) -> Self {
        self.enumeration = Some(enumeration);
        self
    }

    /// Attach a conversion applied by [`get_value`](Self::get_value)
    pub const fn with_conversion(mut self, conversion: Conversion) -> Self {
        self.conversion = Some(conversion);
        self
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn shift(&self) -> u32 {
        self.shift
    }

    pub const fn mask(&self) -> u64 {
        field_mask(self.width)
    }

    pub fn enumeration(&self) -> Option<&'static Enumeration> {
        self.enumeration
    }

    pub fn has_conversion(&self) -> bool {
        self.conversion.is_some()
    }

    /// Store `value`, rejecting anything wider than the field
    pub fn set_value(&mut self, value: u64) -> Result<()> {
        if value > self.mask() {
            return Err(RegisterError::FieldOutOfBound {
                field: self.name,
                value,
                width: self.width,
            });
        }
        self.value = value;
        Ok(())
    }

    /// Current value after the optional conversion
    pub fn get_value(&self) -> u64 {
        match self.conversion {
            Some(convert) => convert(self.value),
            None => self.value,
        }
    }

    /// Current value exactly as stored in the register bits
    pub fn raw_value(&self) -> u64 {
        self.value
    }

    pub fn get_name(&self) -> &'static str {
        self.name
    }

    /// Description of the current value
    ///
    /// Returns `Ok(None)` when the field carries no enumeration and
    /// [`RegisterError::UnknownValue`] when it does but has no entry for the
    /// current value.
    pub fn get_value_name(&self) -> Result<Option<&'static str>> {
        let Some(enumeration) = self.enumeration else {
            return Ok(None);
        };

        enumeration
            .lookup(self.value)
            .map(Some)
            .ok_or(RegisterError::UnknownValue {
                field: self.name,
                value: self.value,
            })
    }

    /// This field's bits of `raw`, shifted down to bit 0
    pub fn extract(&self, raw: u64) -> u64 {
        raw.checked_shr(self.shift).unwrap_or(0) & self.mask()
    }

    /// The stored value positioned at the field's offset
    pub fn placed(&self) -> u64 {
        self.value.checked_shl(self.shift).unwrap_or(0)
    }

    /// Load this field from a whole-register value
    ///
    /// Cannot fail: the extracted bits are masked to the field width.
    pub(crate) fn load(&mut self, raw: u64) {
        self.value = self.extract(raw);
    }
}
