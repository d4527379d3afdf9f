// crates/geoplaces-core/src/schema.rs

//! # Schema Decoder
//!
//! Turns one row of tab-separated cells into a typed record.
//!
//! Each record type declares an ordered table of [`Field`]s. A field pairs the
//! upstream column name with a setter that coerces the raw cell and stores it.
//! Coercion never fails: a cell that does not parse becomes the zero value of
//! its type (`0`, `0.0`, `""`), so a single bad column cannot drop a row.

/// Writes one raw cell into its slot on the record.
pub type FieldSetter<T> = fn(&mut T, &str);

/// One column of an upstream table, in declared order.
pub struct Field<T> {
    pub name: &'static str,
    pub set: FieldSetter<T>,
}

/// A record that can be decoded from a positional row of cells.
pub trait Schema: Default + 'static {
    /// Column table, in the order the upstream file lists them.
    const FIELDS: &'static [Field<Self>];

    fn from_cells<S: AsRef<str>>(cells: &[S]) -> Self {
        decode_row(Self::FIELDS, cells)
    }

    fn field_names() -> Vec<&'static str> {
        Self::FIELDS.iter().map(|f| f.name).collect()
    }
}

/// Applies `fields` to `cells` position by position.
///
/// Missing trailing cells decode as empty strings; surplus cells are ignored.
pub fn decode_row<T: Default, S: AsRef<str>>(fields: &[Field<T>], cells: &[S]) -> T {
    let mut record = T::default();
    for (i, field) in fields.iter().enumerate() {
        let raw = cells.get(i).map(AsRef::as_ref).unwrap_or("");
        (field.set)(&mut record, raw);
    }
    record
}

// -----------------------------------------------------------------------------
// Scalar coercions
// -----------------------------------------------------------------------------

#[inline]
pub fn int(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or_default()
}

#[inline]
pub fn float(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or_default()
}

#[inline]
pub fn text(raw: &str) -> String {
    raw.to_owned()
}

/// Comma-separated list of scalars.
///
/// An empty cell yields an empty list rather than one empty element.
pub fn list<T>(raw: &str, scalar: fn(&str) -> T) -> Vec<T> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(scalar).collect()
}
