//! Ordered field container for one record/line.
//!
//! This module provides [`FieldLine`], the in-memory representation of a
//! single delimited line: an ordered, mutable sequence of string fields.
//! Insertion order is significant and preserved by every operation, and
//! every slot always holds a `String` (possibly empty when built by hand;
//! parsing never produces empty fields).
//!
//! ## Ownership
//!
//! A `FieldLine` exclusively owns its fields. In-place editing of one field
//! is exposed as a short-lived exclusive borrow via [`FieldLine::get_mut`];
//! there is no persistent aliasing of field storage.
//!
//! ## Examples
//!
//! ```rust
//! use fieldline::FieldLine;
//!
//! let mut line = FieldLine::from(vec!["id".to_string(), "name".to_string()]);
//! line.push("active");
//! line.replace(1, "full_name").unwrap();
//!
//! assert_eq!(line.len(), 3);
//! assert_eq!(line.get(1), Some("full_name"));
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// An ordered, mutable sequence of string fields representing one line.
///
/// All indexed mutations are bounds-checked against the current field count
/// and fail with [`Error::IndexOutOfRange`] without touching the line.
/// Appending ([`push`](FieldLine::push), [`append_all`](FieldLine::append_all))
/// never fails.
///
/// # Examples
///
/// ```rust
/// use fieldline::{fields, FieldLine};
///
/// let mut line = fields!["alpha", "beta"];
/// line.insert(1, "between").unwrap();
/// assert_eq!(line.as_slice(), ["alpha", "between", "beta"]);
///
/// let removed = line.remove(0).unwrap();
/// assert_eq!(removed, "alpha");
/// assert_eq!(line.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldLine {
    fields: Vec<String>,
}

impl FieldLine {
    /// Creates an empty line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::FieldLine;
    ///
    /// let line = FieldLine::new();
    /// assert!(line.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        FieldLine { fields: Vec::new() }
    }

    /// Creates an empty line with room for `capacity` fields.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FieldLine {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of fields in the line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::fields;
    ///
    /// let line = fields!["a", "b", "c"];
    /// assert_eq!(line.len(), 3);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the line has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the field at `index`, or `None` if `index` is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::fields;
    ///
    /// let line = fields!["a", "b"];
    /// assert_eq!(line.get(1), Some("b"));
    /// assert_eq!(line.get(2), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Returns an exclusive borrow of the field at `index`, or `None` if
    /// `index` is out of range.
    ///
    /// The borrow is scoped to the caller; edits through it are visible in
    /// the line once the borrow ends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::fields;
    ///
    /// let mut line = fields!["name", "value"];
    /// if let Some(field) = line.get_mut(0) {
    ///     field.make_ascii_uppercase();
    /// }
    /// assert_eq!(line.get(0), Some("NAME"));
    /// ```
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut String> {
        self.fields.get_mut(index)
    }

    /// Overwrites the field at `index` with `field`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`; the line is
    /// left unmodified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::fields;
    ///
    /// let mut line = fields!["a", "b"];
    /// line.replace(0, "z").unwrap();
    /// assert_eq!(line.get(0), Some("z"));
    /// assert!(line.replace(2, "oops").is_err());
    /// ```
    pub fn replace(&mut self, index: usize, field: impl Into<String>) -> Result<()> {
        self.check_index(index)?;
        self.fields[index] = field.into();
        Ok(())
    }

    /// Inserts `field` before the field currently at `index`, shifting the
    /// rest to the right.
    ///
    /// Inserting at the tail position (`index == len()`) is rejected; use
    /// [`push`](FieldLine::push) to add at the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`; the line is
    /// left unmodified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::fields;
    ///
    /// let mut line = fields!["a", "c"];
    /// line.insert(1, "b").unwrap();
    /// assert_eq!(line.as_slice(), ["a", "b", "c"]);
    /// ```
    pub fn insert(&mut self, index: usize, field: impl Into<String>) -> Result<()> {
        self.check_index(index)?;
        self.fields.insert(index, field.into());
        Ok(())
    }

    /// Appends `field` at the end of the line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::FieldLine;
    ///
    /// let mut line = FieldLine::new();
    /// line.push("first");
    /// assert_eq!(line.get(0), Some("first"));
    /// ```
    pub fn push(&mut self, field: impl Into<String>) {
        self.fields.push(field.into());
    }

    /// Appends all fields of `other` at the end of the line, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::fields;
    ///
    /// let mut line = fields!["a", "b"];
    /// line.append_all(&fields!["c", "d"]);
    /// assert_eq!(line.as_slice(), ["a", "b", "c", "d"]);
    /// ```
    pub fn append_all(&mut self, other: &FieldLine) {
        self.fields.reserve(other.len());
        self.fields.extend(other.fields.iter().cloned());
    }

    /// Removes the field at `index` and returns it, shifting subsequent
    /// fields to the left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`; the line is
    /// left unmodified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::fields;
    ///
    /// let mut line = fields!["a", "b", "c"];
    /// assert_eq!(line.remove(1).unwrap(), "b");
    /// assert_eq!(line.as_slice(), ["a", "c"]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<String> {
        self.check_index(index)?;
        Ok(self.fields.remove(index))
    }

    /// Inserts all fields of `other` starting at `index`, preserving their
    /// relative order and shifting the rest to the right.
    ///
    /// Like [`insert`](FieldLine::insert), the tail position
    /// (`index == len()`) is rejected; use
    /// [`append_all`](FieldLine::append_all) to join at the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`; the line is
    /// left unmodified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::fields;
    ///
    /// let mut line = fields!["a", "d"];
    /// line.insert_all(1, &fields!["b", "c"]).unwrap();
    /// assert_eq!(line.as_slice(), ["a", "b", "c", "d"]);
    /// ```
    pub fn insert_all(&mut self, index: usize, other: &FieldLine) -> Result<()> {
        self.check_index(index)?;
        self.fields
            .splice(index..index, other.fields.iter().cloned());
        Ok(())
    }

    /// Returns an iterator over the fields, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.fields.iter()
    }

    /// Returns the fields as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.fields
    }

    /// Consumes the line, returning its fields.
    #[must_use]
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.fields.len() {
            return Err(Error::index_out_of_range(index, self.fields.len()));
        }
        Ok(())
    }
}

impl From<Vec<String>> for FieldLine {
    fn from(fields: Vec<String>) -> Self {
        FieldLine { fields }
    }
}

impl From<FieldLine> for Vec<String> {
    fn from(line: FieldLine) -> Self {
        line.fields
    }
}

impl FromIterator<String> for FieldLine {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        FieldLine {
            fields: Vec::from_iter(iter),
        }
    }
}

impl<'a> FromIterator<&'a str> for FieldLine {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        iter.into_iter().map(String::from).collect::<Vec<_>>().into()
    }
}

impl Extend<String> for FieldLine {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.fields.extend(iter);
    }
}

impl IntoIterator for FieldLine {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldLine {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Panicking positional access, for callers that have already checked
/// bounds. The checked equivalents are [`FieldLine::get`] and the `Result`
/// returning mutators.
impl Index<usize> for FieldLine {
    type Output = String;

    fn index(&self, index: usize) -> &String {
        &self.fields[index]
    }
}

impl IndexMut<usize> for FieldLine {
    fn index_mut(&mut self, index: usize) -> &mut String {
        &mut self.fields[index]
    }
}
