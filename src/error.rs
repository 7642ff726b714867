//! Error types for field-line parsing, editing, and serialization.
//!
//! The crate has a deliberately small error surface:
//!
//! - **Index errors**: an indexed mutation (`replace`, `insert`, `remove`,
//!   `insert_all`) was given an index at or past the end of the line. This
//!   signals a caller bug; the line is left unmodified.
//! - **I/O errors**: reading from or writing to the underlying stream failed.
//!
//! Parsing itself never fails: malformed input degrades to fewer fields, and
//! an exhausted input stream yields an empty line rather than an error.
//!
//! ## Examples
//!
//! ```rust
//! use fieldline::{fields, Error};
//!
//! let mut line = fields!["a", "b"];
//! let err = line.replace(5, "x").unwrap_err();
//! assert!(matches!(err, Error::IndexOutOfRange { index: 5, len: 2 }));
//! ```

use thiserror::Error;

/// Represents all possible errors raised by field-line operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// An indexed mutation was given an index at or past the end of the line
    #[error("field index {index} is out of range for a line of {len} fields")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Creates an index-out-of-range error for a line of `len` fields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::Error;
    ///
    /// let err = Error::index_out_of_range(3, 2);
    /// assert!(err.to_string().contains("index 3"));
    /// ```
    #[must_use]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Creates an I/O error for stream reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
