//! Static register layout descriptors and their validation
//!
//! Every built-in register is described by a `static` [`RegisterLayout`]
//! whose validity is asserted at compile time:
//!
//! ```ignore
//! pub static LAYOUT: RegisterLayout = RegisterLayout::new("MPIDR_EL1", 64, &[...]);
//! const _: () = assert!(LAYOUT.validate().is_ok());
//! ```

use crate::error::LayoutError;
use crate::field::RegisterField;

/// Field id paired with its descriptor
pub type FieldEntry = (&'static str, RegisterField);

/// Fixed field layout of one architecture register
#[derive(Debug)]
pub struct RegisterLayout {
    name: &'static str,
    width: u32,
    fields: &'static [FieldEntry],
}

impl RegisterLayout {
    pub const fn new(name: &'static str, width: u32, fields: &'static [FieldEntry]) -> Self {
        Self {
            name,
            width,
            fields,
        }
    }

    /// Architectural register name, e.g. `CLIDR_EL1`
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Total register width in bits
    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn fields(&self) -> &'static [FieldEntry] {
        self.fields
    }

    pub const fn validate(&self) -> Result<(), LayoutError> {
        validate_fields(self.width, self.fields)
    }
}

/// Check that every field fits the register and no two fields collide
///
/// Rejects a register width outside `1..=64`, zero-width fields, fields
/// reaching past the register's top bit, overlapping bit ranges and
/// repeated field ids.
pub const fn validate_fields(width: u32, fields: &[FieldEntry]) -> Result<(), LayoutError> {
    if width == 0 || width > u64::BITS {
        return Err(LayoutError::RegisterWidth(width));
    }

    let mut i = 0;
    while i < fields.len() {
        let (id, field) = fields[i];
        let (start, end) = bit_range(&field);

        if field.width() == 0 {
            return Err(LayoutError::ZeroWidth(id));
        }
        if end > width as u64 {
            return Err(LayoutError::OutsideRegister {
                field: id,
                shift: field.shift(),
                end: if end > u32::MAX as u64 {
                    u32::MAX
                } else {
                    end as u32
                },
                register_width: width,
            });
        }

        let mut j = 0;
        while j < i {
            let (other_id, other) = fields[j];
            if str_eq(id, other_id) {
                return Err(LayoutError::DuplicateField(id));
            }

            let (other_start, other_end) = bit_range(&other);
            if start < other_end && other_start < end {
                return Err(LayoutError::Overlap {
                    first: other_id,
                    second: id,
                });
            }
            j += 1;
        }
        i += 1;
    }

    Ok(())
}

const fn bit_range(field: &RegisterField) -> (u64, u64) {
    let start = field.shift() as u64;
    (start, start + field.width() as u64)
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_layout() {
        static FIELDS: [FieldEntry; 2] = [
            ("Low", RegisterField::new("Low", 4, 0)),
            ("High", RegisterField::new("High", 4, 28)),
        ];
        let layout = RegisterLayout::new("TEST", 32, &FIELDS);
        assert_eq!(layout.validate(), Ok(()));
    }

    #[test]
    fn test_register_width_bounds() {
        assert_eq!(validate_fields(0, &[]), Err(LayoutError::RegisterWidth(0)));
        assert_eq!(validate_fields(65, &[]), Err(LayoutError::RegisterWidth(65)));
        assert_eq!(validate_fields(64, &[]), Ok(()));
    }

    #[test]
    fn test_zero_width_field() {
        let fields = [("Empty", RegisterField::new("Empty", 0, 3))];
        assert_eq!(
            validate_fields(32, &fields),
            Err(LayoutError::ZeroWidth("Empty"))
        );
    }

    #[test]
    fn test_field_outside_register() {
        // ICB sits at bits [32:30], which only fits a 64-bit register
        let fields = [("ICB", RegisterField::new("Inner Cache Boundary", 3, 30))];
        assert_eq!(
            validate_fields(32, &fields),
            Err(LayoutError::OutsideRegister {
                field: "ICB",
                shift: 30,
                end: 33,
                register_width: 32,
            })
        );
        assert_eq!(validate_fields(64, &fields), Ok(()));
    }

    #[test]
    fn test_overlapping_fields() {
        let fields = [
            ("BigEndEL0", RegisterField::new("BigEndEL0", 4, 16)),
            ("TGran16", RegisterField::new("TGran16", 4, 18)),
        ];
        assert_eq!(
            validate_fields(64, &fields),
            Err(LayoutError::Overlap {
                first: "BigEndEL0",
                second: "TGran16",
            })
        );
    }

    #[test]
    fn test_adjacent_fields_do_not_overlap() {
        let fields = [
            ("A", RegisterField::new("A", 4, 16)),
            ("B", RegisterField::new("B", 4, 20)),
        ];
        assert_eq!(validate_fields(64, &fields), Ok(()));
    }

    #[test]
    fn test_duplicate_field_id() {
        let fields = [
            ("Ctype1", RegisterField::new("Cache Type 1", 3, 0)),
            ("Ctype1", RegisterField::new("Cache Type 1", 3, 3)),
        ];
        assert_eq!(
            validate_fields(32, &fields),
            Err(LayoutError::DuplicateField("Ctype1"))
        );
    }
}
