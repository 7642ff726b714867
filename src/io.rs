//! Reading and writing delimited lines.
//!
//! This module provides [`LineIo`], the codec between raw text and
//! [`FieldLine`] records. A `LineIo` is configured with a single delimiter
//! character at construction and is otherwise stateless: it never retains a
//! reference to any line it parses or writes, so one instance can be reused
//! across any number of sequential calls.
//!
//! ## Splitting rule
//!
//! [`LineIo::parse_line`] splits on every occurrence of the delimiter and
//! **drops zero-length fields**: consecutive delimiters, and delimiters at
//! the start or end of the line, collapse instead of producing empty-string
//! fields. This differs from naive `str::split` semantics and is what makes
//! `parse_line` / [`format_line`](LineIo::format_line) round-trip on text
//! with no empty fields.
//!
//! ## Usage
//!
//! ```rust
//! use fieldline::LineIo;
//! use std::io::Cursor;
//!
//! let io = LineIo::tab();
//! let mut input = Cursor::new("ada\tlovelace\t1815\n");
//!
//! let mut line = io.read_one(&mut input).unwrap();
//! line.replace(2, "1852").unwrap();
//!
//! assert_eq!(io.format_line(&line), "ada\tlovelace\t1852");
//! ```

use crate::{Error, FieldLine, Result};
use std::io::{BufRead, Write};

/// Codec between raw delimited text and [`FieldLine`] records.
///
/// The delimiter is fixed at construction; there is no other configuration.
/// Reading is line-oriented (`\n` terminated, with a trailing `\r` also
/// stripped) and writing emits no trailing delimiter or line terminator.
///
/// # Examples
///
/// ```rust
/// use fieldline::LineIo;
///
/// let io = LineIo::new(',');
/// let line = io.parse_line("a,b,,c");
/// assert_eq!(line.as_slice(), ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineIo {
    delimiter: char,
}

impl LineIo {
    /// Creates a codec for the given delimiter character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::LineIo;
    ///
    /// let io = LineIo::new(';');
    /// assert_eq!(io.delimiter(), ';');
    /// ```
    #[must_use]
    pub fn new(delimiter: char) -> Self {
        LineIo { delimiter }
    }

    /// Creates a tab-delimited codec, for TSV-like lines.
    #[must_use]
    pub fn tab() -> Self {
        LineIo::new('\t')
    }

    /// Creates a comma-delimited codec.
    ///
    /// Note that this crate does no quoting or escaping; a comma inside a
    /// field is indistinguishable from a field boundary.
    #[must_use]
    pub fn comma() -> Self {
        LineIo::new(',')
    }

    /// Creates a pipe-delimited codec.
    #[must_use]
    pub fn pipe() -> Self {
        LineIo::new('|')
    }

    /// Returns the configured delimiter character.
    #[must_use]
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Splits `text` on every occurrence of the delimiter, dropping
    /// zero-length fields.
    ///
    /// Never fails; the worst case is an empty line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::LineIo;
    ///
    /// let io = LineIo::tab();
    /// let line = io.parse_line("\t\ta\t\tb\t");
    /// assert_eq!(line.as_slice(), ["a", "b"]);
    /// ```
    #[must_use]
    pub fn parse_line(&self, text: &str) -> FieldLine {
        text.split(self.delimiter)
            .filter(|field| !field.is_empty())
            .collect()
    }

    /// Reads one line from `reader` and parses it.
    ///
    /// The line terminator is `\n`; a trailing `\r` before it is stripped
    /// as well. An exhausted reader yields an empty line, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading from `reader` fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::LineIo;
    /// use std::io::Cursor;
    ///
    /// let io = LineIo::comma();
    /// let mut input = Cursor::new("a,b\nc,d\n");
    ///
    /// assert_eq!(io.read_one(&mut input).unwrap().as_slice(), ["a", "b"]);
    /// assert_eq!(io.read_one(&mut input).unwrap().as_slice(), ["c", "d"]);
    /// assert!(io.read_one(&mut input).unwrap().is_empty());
    /// ```
    pub fn read_one<R: BufRead>(&self, reader: &mut R) -> Result<FieldLine> {
        let mut buffer = String::new();
        self.read_into(reader, &mut buffer)?;
        Ok(self.parse_line(&buffer))
    }

    /// Reads up to `count` lines from `reader`, stopping early when the
    /// input is exhausted.
    ///
    /// The result length is `min(count, lines available)`. Blank lines in
    /// the input are kept as empty records; only end of input shortens the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading from `reader` fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::LineIo;
    /// use std::io::Cursor;
    ///
    /// let io = LineIo::tab();
    /// let mut input = Cursor::new("a\tb\nc\nd\te\tf\n");
    ///
    /// let lines = io.read_many(&mut input, 5).unwrap();
    /// assert_eq!(lines.len(), 3);
    /// ```
    pub fn read_many<R: BufRead>(&self, reader: &mut R, count: usize) -> Result<Vec<FieldLine>> {
        let mut lines = Vec::with_capacity(count.min(64));
        let mut buffer = String::new();
        for _ in 0..count {
            if self.read_into(reader, &mut buffer)? == 0 {
                break;
            }
            lines.push(self.parse_line(&buffer));
        }
        Ok(lines)
    }

    /// Renders `line` as delimited text: fields joined by the delimiter,
    /// with no trailing delimiter and no line terminator.
    ///
    /// An empty line renders as the empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::{fields, LineIo};
    ///
    /// let io = LineIo::comma();
    /// assert_eq!(io.format_line(&fields!["a", "b", "c"]), "a,b,c");
    /// assert_eq!(io.format_line(&fields![]), "");
    /// ```
    #[must_use]
    pub fn format_line(&self, line: &FieldLine) -> String {
        let mut output = String::with_capacity(line.iter().map(|f| f.len() + 1).sum());
        for (i, field) in line.iter().enumerate() {
            if i > 0 {
                output.push(self.delimiter);
            }
            output.push_str(field);
        }
        output
    }

    /// Writes `line` to `writer` as delimited text.
    ///
    /// Same rendering as [`format_line`](LineIo::format_line): no trailing
    /// delimiter, no trailing line terminator, and an empty line writes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `writer` fails.
    pub fn write_one<W: Write>(&self, writer: &mut W, line: &FieldLine) -> Result<()> {
        if line.is_empty() {
            return Ok(());
        }
        writer
            .write_all(self.format_line(line).as_bytes())
            .map_err(|e| Error::io(&e.to_string()))
    }

    /// Writes each line in `lines` via [`write_one`](LineIo::write_one),
    /// separating lines with `\n` and emitting no trailing `\n`.
    ///
    /// An empty slice writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `writer` fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldline::{fields, LineIo};
    ///
    /// let io = LineIo::comma();
    /// let lines = [fields!["a", "b"], fields!["c"]];
    ///
    /// let mut output = Vec::new();
    /// io.write_many(&mut output, &lines).unwrap();
    /// assert_eq!(output, b"a,b\nc");
    /// ```
    pub fn write_many<W: Write>(&self, writer: &mut W, lines: &[FieldLine]) -> Result<()> {
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                writer
                    .write_all(b"\n")
                    .map_err(|e| Error::io(&e.to_string()))?;
            }
            self.write_one(writer, line)?;
        }
        Ok(())
    }

    /// Reads one `\n`-terminated line into `buffer`, stripping the
    /// terminator and a trailing `\r`. Returns the number of bytes read
    /// from the reader, with 0 meaning end of input.
    fn read_into<R: BufRead>(&self, reader: &mut R, buffer: &mut String) -> Result<usize> {
        buffer.clear();
        let read = reader
            .read_line(buffer)
            .map_err(|e| Error::io(&e.to_string()))?;
        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }
        Ok(read)
    }
}
