//! The value coercion cascade
//!
//! When a cell's native value kind does not match the bound field's
//! declared type, a fixed fallback chain is tried in order, first success
//! wins:
//!
//! 1. the native value as-is;
//! 2. for numbers: the value rounded half-away-from-zero to the nearest
//!    integer;
//! 3. for numbers: the rounded integer's decimal-string representation;
//! 4. for booleans: the `"true"`/`"false"` string form;
//! 5. nothing left: a coercion error naming the cell, field, and kinds.
//!
//! A [`Rejection::Refused`] at any step ends the cascade with the field
//! left unset; the read continues. That leniency is observable through a
//! debug log rather than silently absorbed.

use crate::bind::{Rejection, Setter};
use crate::error::{ImportError, ImportResult};
use sheetbind_core::{CellAddress, CellValue};

/// What happened to the field for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The setter accepted a value (native or coerced)
    Set,
    /// The value shape was refused; the field keeps its previous state
    Unset,
}

/// Drive one cell's value through the cascade into a bound field
pub(crate) fn apply_cell<T>(
    setter: &Setter<T>,
    record: &mut T,
    field: &str,
    value: &CellValue,
    row: u32,
    col: u16,
) -> ImportResult<Outcome> {
    let native = value.effective_value();

    match setter(record, native) {
        Ok(()) => return Ok(Outcome::Set),
        Err(Rejection::Refused) => return Ok(leave_unset(field, native, row, col)),
        Err(Rejection::Mismatch) => {}
    }

    match native {
        CellValue::Number(n) => {
            let rounded = n.round();
            match setter(record, &CellValue::Number(rounded)) {
                Ok(()) => return Ok(Outcome::Set),
                Err(Rejection::Refused) => return Ok(leave_unset(field, native, row, col)),
                Err(Rejection::Mismatch) => {}
            }
            match setter(record, &CellValue::string(decimal_string(rounded))) {
                Ok(()) => return Ok(Outcome::Set),
                Err(Rejection::Refused) => return Ok(leave_unset(field, native, row, col)),
                Err(Rejection::Mismatch) => {}
            }
        }
        CellValue::Boolean(b) => {
            let text = if *b { "true" } else { "false" };
            match setter(record, &CellValue::string(text)) {
                Ok(()) => return Ok(Outcome::Set),
                Err(Rejection::Refused) => return Ok(leave_unset(field, native, row, col)),
                Err(Rejection::Mismatch) => {}
            }
        }
        _ => {}
    }

    Err(ImportError::Coercion {
        address: CellAddress::new(row, col).to_a1_string(),
        field: field.to_owned(),
        kind: native.kind_name(),
    })
}

/// Decimal-string form of an already-rounded number
fn decimal_string(rounded: f64) -> String {
    if rounded >= i64::MIN as f64 && rounded <= i64::MAX as f64 {
        (rounded as i64).to_string()
    } else {
        format!("{:.0}", rounded)
    }
}

fn leave_unset(field: &str, value: &CellValue, row: u32, col: u16) -> Outcome {
    log::debug!(
        "leaving field '{}' unset: {} value at {} refused",
        field,
        value.kind_name(),
        CellAddress::new(row, col)
    );
    Outcome::Unset
}
