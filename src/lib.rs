//! # fieldline
//!
//! A minimal library for parsing delimiter-separated text lines into ordered
//! string-field records, editing those records in place, and serializing them
//! back to delimited text.
//!
//! ## What is fieldline?
//!
//! `fieldline` targets simple record-editing use cases: TSV-like line
//! manipulation where each line of text is an ordered sequence of fields
//! separated by a single configurable character. It deliberately does **not**
//! implement quoting or escaping, multi-character delimiters, or streaming
//! beyond line granularity; for RFC 4180 CSV use a CSV crate instead.
//!
//! ## Key Features
//!
//! - **Ordered field records**: [`FieldLine`] preserves insertion order
//!   across every operation and owns its fields exclusively
//! - **Bounds-checked editing**: replace, insert, remove, and splice fields
//!   with `Result`-returning mutators that leave the record untouched on a
//!   bad index
//! - **Line-oriented I/O**: [`LineIo`] reads records from any
//!   [`BufRead`](std::io::BufRead) and writes them to any
//!   [`Write`](std::io::Write), one line per record
//! - **Collapsing split rule**: zero-length fields are dropped while
//!   parsing, so consecutive, leading, and trailing delimiters never produce
//!   empty fields
//! - **Serde Compatible**: `FieldLine` serializes as a plain sequence of
//!   strings in any serde format
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! fieldline = "0.1"
//! ```
//!
//! ### Parse, edit, serialize
//!
//! ```rust
//! use fieldline::LineIo;
//!
//! let io = LineIo::tab();
//!
//! let mut record = io.parse_line("ada\tlovelace\t1815");
//! record.replace(2, "1852").unwrap();
//! record.push("london");
//!
//! assert_eq!(io.format_line(&record), "ada\tlovelace\t1852\tlondon");
//! ```
//!
//! ### Reading and writing streams
//!
//! ```rust
//! use fieldline::LineIo;
//! use std::io::Cursor;
//!
//! let io = LineIo::comma();
//! let mut input = Cursor::new("a,b\nc,d\ne\n");
//!
//! let records = io.read_many(&mut input, 5).unwrap();
//! assert_eq!(records.len(), 3);
//!
//! let mut output = Vec::new();
//! io.write_many(&mut output, &records).unwrap();
//! assert_eq!(output, b"a,b\nc,d\ne");
//! ```
//!
//! ## The collapsing split rule
//!
//! Splitting drops zero-length fields rather than preserving them:
//!
//! ```rust
//! use fieldline::parse_line;
//!
//! let record = parse_line("\t\ta\t\tb\t", '\t');
//! assert_eq!(record.as_slice(), ["a", "b"]);
//! ```
//!
//! As a consequence, `format_line(parse_line(text))` reproduces `text`
//! exactly when `text` has no leading, trailing, or consecutive delimiters.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`edit_line.rs`** - parse a line, edit fields, serialize it back
//! - **`join_lines.rs`** - join two records into one
//! - **`read_write.rs`** - stream records in and out
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod io;
pub mod line;
pub mod macros;

pub use error::{Error, Result};
pub use io::LineIo;
pub use line::FieldLine;

/// Splits `text` on every occurrence of `delimiter`, dropping zero-length
/// fields.
///
/// Convenience wrapper over [`LineIo::parse_line`] for one-off calls; never
/// fails.
///
/// # Examples
///
/// ```rust
/// use fieldline::parse_line;
///
/// let record = parse_line("a,b,,c", ',');
/// assert_eq!(record.as_slice(), ["a", "b", "c"]);
/// ```
#[must_use]
pub fn parse_line(text: &str, delimiter: char) -> FieldLine {
    LineIo::new(delimiter).parse_line(text)
}

/// Renders `line` as delimited text with no trailing delimiter or line
/// terminator.
///
/// Convenience wrapper over [`LineIo::format_line`] for one-off calls. An
/// empty record renders as the empty string.
///
/// # Examples
///
/// ```rust
/// use fieldline::{fields, format_line};
///
/// let record = fields!["a", "b", "c"];
/// assert_eq!(format_line(&record, ','), "a,b,c");
/// ```
#[must_use]
pub fn format_line(line: &FieldLine, delimiter: char) -> String {
    LineIo::new(delimiter).format_line(line)
}
