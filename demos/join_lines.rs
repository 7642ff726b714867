//! Joining two records into one, and splicing one into the middle of
//! another.
//!
//! Run with: cargo run --example join_lines

use fieldline::{fields, LineIo};

fn main() -> Result<(), fieldline::Error> {
    let io = LineIo::comma();

    let mut first = io.parse_line("a,b");
    let second = io.parse_line("c,d");

    first.append_all(&second);
    println!("joined:  {}", io.format_line(&first));

    let mut spliced = fields!["start", "end"];
    spliced.insert_all(1, &fields!["mid1", "mid2"])?;
    println!("spliced: {}", io.format_line(&spliced));

    Ok(())
}
