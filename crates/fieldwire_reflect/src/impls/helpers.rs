use alloc::borrow::Cow;
use core::fmt;

use crate::Reflect;
use crate::ops::{ApplyError, ReflectRef};
use crate::ops::{Array, BitField, Enum, Struct};

/// A function use for implementing [`Reflect::try_apply`]
///
/// # Rules
///
/// 1. If `other` is not `Array`, return Err.
/// 2. If `self.len` != `other.len`, return Err.
/// 3. Try to apply all items, return Err if apply item failed.
/// 4. return Ok.
///
/// # Example
///
/// ```ignore
/// impl Reflect for Foo {
///     // ...
///     fn try_apply(&mut self, other: &dyn Reflect) -> Result<(), ApplyError> {
///         array_try_apply(self, other)
///     }
///     // ...
/// }
/// ```
#[inline(never)]
pub fn array_try_apply(x: &mut dyn Array, y: &dyn Reflect) -> Result<(), ApplyError> {
    let y = y.reflect_ref().as_array()?;

    if x.len() != y.len() {
        return Err(ApplyError::DifferentSize {
            from_size: y.len(),
            to_size: x.len(),
        });
    }

    for (idx, y_item) in y.iter_items().enumerate() {
        let item = x.item_mut(idx).expect("valid index");
        item.try_apply(y_item)?;
    }
    Ok(())
}

/// A function use for implementing [`Reflect::reflect_partial_eq`].
///
/// # Rules
///
/// 1. If `other` is not `Array`, return `Some(false)`.
/// 2. If `self.len` != `other.len`, return `Some(false)`.
/// 3. Call `reflect_partial_eq` for each item,
///    return `None` or `Some(false)` if items return `None` or `Some(false)`.
/// 4. return `Some(true)`.
#[inline(never)]
pub fn array_partial_eq(x: &dyn Array, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Array(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for (item, y_item) in x.iter_items().zip(y.iter_items()) {
        let result = item.reflect_partial_eq(y_item);
        if result != Some(true) {
            return Some(false);
        }
    }

    Some(true)
}

/// A function use for implementing [`Reflect::reflect_debug`] .
#[inline(never)]
pub fn array_debug(dyn_array: &dyn Array, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // Non Inline: only be compiled once -> reduce compilation times
    let mut debug = f.debug_list();
    for item in dyn_array.iter_items() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::try_apply`] .
///
/// # Rules
///
/// 1. If `other` is not `Struct`, return Err.
/// 2. Call `try_apply` for common fields between `Self` and `Other`.
///    return `Err` if some fields `try_apply` failed.
/// 3. return `Ok`
///
/// Therefore, this function enables `try_apply` between different structs.
#[inline(never)]
pub fn struct_try_apply(x: &mut dyn Struct, y: &dyn Reflect) -> Result<(), ApplyError> {
    let y = y.reflect_ref().as_struct()?;

    for (idx, y_field) in y.iter_fields().enumerate() {
        let name = y.name_at(idx).unwrap();
        if let Some(field) = x.field_mut(name) {
            field.try_apply(y_field)?;
        }
    }
    Ok(())
}

/// A function use for implementing [`Reflect::reflect_partial_eq`] .
///
/// # Rules
///
/// 1. If `other` is not `Struct`, return `Some(false)`.
/// 2. If `self.field_len` != `other.field_len`, return `Some(false)`.
/// 3. Compare all same-named fields.
///    Return `Some(false)` if some field names do not match.
/// 4. return `Some(true)`
#[inline(never)]
pub fn struct_partial_eq(x: &dyn Struct, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Struct(y) = y.reflect_ref() else {
        return struct_bits_partial_eq(x, y);
    };

    if x.field_len() != y.field_len() {
        return Some(false);
    }

    for (idx, y_field) in y.iter_fields().enumerate() {
        let name = y.name_at(idx).unwrap();
        if let Some(x_field) = x.field(name) {
            let result = x_field.reflect_partial_eq(y_field);
            if result != Some(true) {
                return result;
            }
        } else {
            return Some(false);
        }
    }
    Some(true)
}

// Bit-fields containers dispatch as `ReflectRef::BitFields`, but they are
// structs too. Recheck so `struct_partial_eq` works across both kinds.
fn struct_bits_partial_eq(x: &dyn Struct, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::BitFields(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.field_len() != y.field_len() {
        return Some(false);
    }

    for (idx, y_field) in y.iter_fields().enumerate() {
        let name = y.name_at(idx).unwrap();
        if let Some(x_field) = x.field(name) {
            let result = x_field.reflect_partial_eq(y_field);
            if result != Some(true) {
                return result;
            }
        } else {
            return Some(false);
        }
    }
    Some(true)
}

/// A function use for implementing [`Reflect::reflect_debug`] .
#[inline(never)]
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_path());

    for (index, field) in dyn_struct.iter_fields().enumerate() {
        debug.field(
            dyn_struct.name_at(index).unwrap(),
            &field as &dyn fmt::Debug,
        );
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::try_apply`] .
///
/// # Rules
///
/// 1. If `other` is not `Enum`, return Err.
/// 2. If `self` has no variant with `other`'s discriminant, return Err.
/// 3. Replace `self` with that variant and return `Ok`.
///
/// Therefore, this function enables `try_apply` between different fieldless
/// enums sharing a discriminant set.
#[inline(never)]
pub fn enum_try_apply(x: &mut dyn Enum, y: &dyn Reflect) -> Result<(), ApplyError> {
    let y = y.reflect_ref().as_enum()?;

    let discriminant = y.discriminant();
    if x.set_by_discriminant(discriminant) {
        Ok(())
    } else {
        Err(ApplyError::UnknownDiscriminant {
            type_path: Cow::Borrowed(x.reflect_type_path()),
            discriminant,
        })
    }
}

/// A function use for implementing [`Reflect::reflect_partial_eq`] .
///
/// # Rules
///
/// 1. If `other` is not `Enum`, return `Some(false)`.
/// 2. Compare by discriminant.
#[inline(never)]
pub fn enum_partial_eq(x: &dyn Enum, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Enum(y) = y.reflect_ref() else {
        return Some(false);
    };

    Some(x.discriminant() == y.discriminant())
}

/// A function use for implementing [`Reflect::reflect_debug`] .
#[inline(never)]
pub fn enum_debug(dyn_enum: &dyn Enum, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(dyn_enum.variant_name())
}

/// A function use for implementing [`Reflect::try_apply`] .
///
/// # Rules
///
/// 1. If `other` is not a bit-fields container, return Err.
/// 2. Call `try_apply` for common fields between `Self` and `Other`.
///    return `Err` if some fields `try_apply` failed.
/// 3. return `Ok`
#[inline(never)]
pub fn bit_fields_try_apply(x: &mut dyn Struct, y: &dyn Reflect) -> Result<(), ApplyError> {
    let y = y.reflect_ref().as_bit_fields()?;

    for (idx, y_field) in y.iter_fields().enumerate() {
        let name = y.name_at(idx).unwrap();
        if let Some(field) = x.field_mut(name) {
            field.try_apply(y_field)?;
        }
    }
    Ok(())
}

/// A function use for implementing [`Reflect::try_apply`] .
///
/// # Rules
///
/// 1. If `other` is not `BitField`, return Err.
/// 2. If the bit widths differ, return Err.
/// 3. Copy the raw bit pattern and return `Ok`.
///
/// Signedness is deliberately not compared; a raw pattern is a raw pattern.
#[inline(never)]
pub fn bit_field_try_apply(x: &mut dyn BitField, y: &dyn Reflect) -> Result<(), ApplyError> {
    let y = y.reflect_ref().as_bit_field()?;

    if x.bit_len() != y.bit_len() {
        return Err(ApplyError::DifferentSize {
            from_size: y.bit_len() as usize,
            to_size: x.bit_len() as usize,
        });
    }

    x.set_raw_bits(y.raw_bits());
    Ok(())
}

/// A function use for implementing [`Reflect::reflect_partial_eq`] .
///
/// Compares the raw bit pattern and width; two fields with the same pattern
/// but different signedness compare unequal through their types, not here.
#[inline(never)]
pub fn bit_field_partial_eq(x: &dyn BitField, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::BitField(y) = y.reflect_ref() else {
        return Some(false);
    };

    Some(x.bit_len() == y.bit_len() && x.raw_bits() == y.raw_bits())
}

/// A function use for implementing [`Reflect::reflect_debug`] .
///
/// Writes the logical value, so a signed field prints its negative form.
#[inline(never)]
pub fn bit_field_debug(dyn_field: &dyn BitField, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if dyn_field.is_signed() {
        write!(f, "{}", dyn_field.signed_value())
    } else {
        write!(f, "{}", dyn_field.raw_bits())
    }
}
