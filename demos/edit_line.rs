//! Parsing a line, editing its fields, and serializing it back.
//!
//! Run with: cargo run --example edit_line

use fieldline::LineIo;

fn main() -> Result<(), fieldline::Error> {
    let io = LineIo::tab();

    let mut record = io.parse_line("ada\tlovelace\t1815\tmathematics");
    println!("parsed:   {:?}", record.as_slice());

    // Overwrite one field in place through an exclusive borrow.
    if let Some(field) = record.get_mut(0) {
        field.make_ascii_uppercase();
    }

    // Copy-edit-replace, for when the new value is computed elsewhere.
    let year = record.get(2).unwrap_or("unknown").to_string();
    record.replace(2, format!("b. {year}"))?;

    record.insert(1, "augusta")?;
    record.remove(record.len() - 1)?;
    record.push("london");

    println!("edited:   {:?}", record.as_slice());
    println!("rendered: {}", io.format_line(&record));

    Ok(())
}
