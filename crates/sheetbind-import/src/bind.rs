//! Field binding tables for typed records
//!
//! A [`RecordBindings`] maps field names to typed setter closures,
//! supplied once at configuration time. This replaces any notion of
//! looking setters up by name at read time: the table is the only
//! dispatch, and each setter knows exactly which value kinds it accepts.

use ahash::AHashMap;
use chrono::NaiveDateTime;
use sheetbind_core::CellValue;

/// Why a setter did not accept a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The value kind does not match the field's declared type; the
    /// coercion cascade may retry with an adapted value
    Mismatch,
    /// The value shape is fundamentally unacceptable for this field
    /// (blank where a scalar is required); the field is left unset
    Refused,
}

/// Conversion from a native cell value into a field's declared type
pub trait FieldValue: Sized {
    /// Convert, or reject with the reason
    fn from_cell(value: &CellValue) -> Result<Self, Rejection>;
}

impl FieldValue for bool {
    fn from_cell(value: &CellValue) -> Result<Self, Rejection> {
        match value {
            CellValue::Boolean(b) => Ok(*b),
            CellValue::Empty => Err(Rejection::Refused),
            _ => Err(Rejection::Mismatch),
        }
    }
}

impl FieldValue for i64 {
    fn from_cell(value: &CellValue) -> Result<Self, Rejection> {
        match value {
            CellValue::Number(n)
                if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64 =>
            {
                Ok(*n as i64)
            }
            CellValue::Empty => Err(Rejection::Refused),
            _ => Err(Rejection::Mismatch),
        }
    }
}

impl FieldValue for f64 {
    fn from_cell(value: &CellValue) -> Result<Self, Rejection> {
        match value {
            CellValue::Number(n) => Ok(*n),
            CellValue::Empty => Err(Rejection::Refused),
            _ => Err(Rejection::Mismatch),
        }
    }
}

impl FieldValue for String {
    fn from_cell(value: &CellValue) -> Result<Self, Rejection> {
        match value {
            CellValue::String(s) => Ok(s.as_str().to_owned()),
            CellValue::Empty => Err(Rejection::Refused),
            _ => Err(Rejection::Mismatch),
        }
    }
}

impl FieldValue for NaiveDateTime {
    fn from_cell(value: &CellValue) -> Result<Self, Rejection> {
        match value {
            CellValue::Date(d) => Ok(*d),
            CellValue::Empty => Err(Rejection::Refused),
            _ => Err(Rejection::Mismatch),
        }
    }
}

impl<V: FieldValue> FieldValue for Option<V> {
    fn from_cell(value: &CellValue) -> Result<Self, Rejection> {
        match value {
            CellValue::Empty => Ok(None),
            _ => V::from_cell(value).map(Some),
        }
    }
}

/// A setter adapted to take the native cell value
pub(crate) type Setter<T> = Box<dyn Fn(&mut T, &CellValue) -> Result<(), Rejection>>;

/// Field-binding table for a record type
///
/// Built once at configuration time:
///
/// ```
/// use sheetbind_import::RecordBindings;
///
/// #[derive(Default)]
/// struct Person {
///     id: i64,
///     name: String,
/// }
///
/// let bindings = RecordBindings::<Person>::new()
///     .bind("id", |p, v: i64| p.id = v)
///     .bind("name", |p, v: String| p.name = v);
/// assert!(bindings.is_bound("id"));
/// ```
pub struct RecordBindings<T> {
    factory: Box<dyn Fn() -> T>,
    setters: AHashMap<String, Setter<T>>,
}

impl<T: Default + 'static> RecordBindings<T> {
    /// Create a binding table for a type constructible with `Default`
    pub fn new() -> Self {
        Self::with_factory(T::default)
    }
}

impl<T: Default + 'static> Default for RecordBindings<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordBindings<T> {
    /// Create a binding table with an explicit record factory
    pub fn with_factory<F: Fn() -> T + 'static>(factory: F) -> Self {
        Self {
            factory: Box::new(factory),
            setters: AHashMap::new(),
        }
    }

    /// Bind a field name to a typed setter
    pub fn bind<V, F>(mut self, field: &str, apply: F) -> Self
    where
        V: FieldValue,
        F: Fn(&mut T, V) + 'static,
    {
        self.setters.insert(
            field.to_owned(),
            Box::new(move |record, cell| {
                let value = V::from_cell(cell)?;
                apply(record, value);
                Ok(())
            }),
        );
        self
    }

    /// Construct a fresh record
    pub fn new_record(&self) -> T {
        (self.factory)()
    }

    /// Check whether a field has a binding
    pub fn is_bound(&self, field: &str) -> bool {
        self.setters.contains_key(field)
    }

    /// Number of bound fields
    pub fn len(&self) -> usize {
        self.setters.len()
    }

    /// Check whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.setters.is_empty()
    }

    pub(crate) fn setter(&self, field: &str) -> Option<&Setter<T>> {
        self.setters.get(field)
    }
}

impl<T> std::fmt::Debug for RecordBindings<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields: Vec<_> = self.setters.keys().collect();
        fields.sort();
        f.debug_struct("RecordBindings")
            .field("fields", &fields)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_scalars() {
        assert_eq!(bool::from_cell(&CellValue::Boolean(true)), Ok(true));
        assert_eq!(i64::from_cell(&CellValue::Number(3.0)), Ok(3));
        assert_eq!(
            i64::from_cell(&CellValue::Number(3.7)),
            Err(Rejection::Mismatch)
        );
        assert_eq!(f64::from_cell(&CellValue::Number(3.7)), Ok(3.7));
        assert_eq!(
            String::from_cell(&CellValue::string("hi")),
            Ok("hi".to_owned())
        );
        // Numbers do not silently become strings; the cascade decides
        assert_eq!(
            String::from_cell(&CellValue::Number(3.0)),
            Err(Rejection::Mismatch)
        );
    }

    #[test]
    fn test_blank_refused_for_scalars_none_for_options() {
        assert_eq!(i64::from_cell(&CellValue::Empty), Err(Rejection::Refused));
        assert_eq!(
            String::from_cell(&CellValue::Empty),
            Err(Rejection::Refused)
        );
        assert_eq!(Option::<i64>::from_cell(&CellValue::Empty), Ok(None));
        assert_eq!(
            Option::<i64>::from_cell(&CellValue::Number(4.0)),
            Ok(Some(4))
        );
    }

    #[test]
    fn test_bindings_apply() {
        #[derive(Default)]
        struct Person {
            id: i64,
            name: String,
        }

        let bindings = RecordBindings::<Person>::new()
            .bind("id", |p, v: i64| p.id = v)
            .bind("name", |p, v: String| p.name = v);

        let mut person = bindings.new_record();
        let setter = bindings.setter("id").unwrap();
        setter(&mut person, &CellValue::Number(7.0)).unwrap();
        assert_eq!(person.id, 7);

        assert!(bindings.setter("missing").is_none());
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn test_factory_for_non_default_types() {
        struct Tagged {
            tag: &'static str,
            id: i64,
        }

        let bindings = RecordBindings::with_factory(|| Tagged { tag: "row", id: 0 })
            .bind("id", |t: &mut Tagged, v: i64| t.id = v);

        let record = bindings.new_record();
        assert_eq!(record.tag, "row");
        assert_eq!(record.id, 0);
    }
}
