/// Builds a [`FieldLine`](crate::FieldLine) from a list of field literals.
///
/// Accepts anything convertible to `String` and preserves the given order.
///
/// # Examples
///
/// ```rust
/// use fieldline::fields;
///
/// let empty = fields![];
/// assert!(empty.is_empty());
///
/// let line = fields!["id", "name", "active"];
/// assert_eq!(line.len(), 3);
/// assert_eq!(line.get(1), Some("name"));
/// ```
#[macro_export]
macro_rules! fields {
    // Handle empty line
    () => {
        $crate::FieldLine::new()
    };

    // Handle non-empty line
    ($($field:expr),+ $(,)?) => {
        $crate::FieldLine::from(::std::vec![
            $(::std::string::String::from($field)),+
        ])
    };
}
