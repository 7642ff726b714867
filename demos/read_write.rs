//! Streaming records in from a reader and back out to a writer.
//!
//! Run with: cargo run --example read_write

use fieldline::LineIo;
use std::io::Cursor;

fn main() -> Result<(), fieldline::Error> {
    let io = LineIo::tab();

    // Any BufRead works here; stdin().lock() is the interactive equivalent.
    let mut input = Cursor::new("id\tname\tactive\n1\talice\ttrue\n2\tbob\tfalse\n");

    // Ask for more lines than the stream holds; the result stops at EOF.
    let mut records = io.read_many(&mut input, 10)?;
    println!("read {} records", records.len());

    for record in &mut records {
        record.push("imported");
    }

    let mut output = Vec::new();
    io.write_many(&mut output, &records)?;
    println!("{}", String::from_utf8_lossy(&output));

    Ok(())
}
