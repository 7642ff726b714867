use fieldline::{fields, FieldLine, LineIo};
use std::io::Cursor;

#[test]
fn test_read_and_dump() {
    let io = LineIo::tab();
    let mut input = Cursor::new("alpha\tbeta\tgamma\n");

    let record = io.read_one(&mut input).unwrap();
    assert_eq!(record.as_slice(), ["alpha", "beta", "gamma"]);

    let mut output = Vec::new();
    io.write_one(&mut output, &record).unwrap();
    assert_eq!(output, b"alpha\tbeta\tgamma");
}

#[test]
fn test_read_five_lines_from_three_line_stream() {
    let io = LineIo::tab();
    let mut input = Cursor::new("a\tb\nc\td\ne\tf\n");

    let records = io.read_many(&mut input, 5).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].as_slice(), ["a", "b"]);
    assert_eq!(records[2].as_slice(), ["e", "f"]);
}

#[test]
fn test_read_many_keeps_blank_lines_as_empty_records() {
    let io = LineIo::tab();
    let mut input = Cursor::new("a\n\nb\n");

    let records = io.read_many(&mut input, 5).unwrap();
    assert_eq!(records.len(), 3);
    assert!(records[1].is_empty());
}

#[test]
fn test_edit_first_field_in_place() {
    let io = LineIo::tab();
    let mut record = io.parse_line("xenon\thelium");

    let first = record.get_mut(0).unwrap();
    first.replace_range(0..1, "a");

    assert_eq!(io.format_line(&record), "aenon\thelium");
}

#[test]
fn test_edit_first_field_with_copy_and_replace() {
    let io = LineIo::tab();
    let mut record = io.parse_line("xenon\thelium");

    let mut copy = record.get(0).unwrap().to_string();
    copy.replace_range(0..1, "a");
    record.replace(0, copy).unwrap();

    assert_eq!(io.format_line(&record), "aenon\thelium");
}

#[test]
fn test_remove_first_field_and_dump() {
    let io = LineIo::tab();
    let mut record = io.parse_line("drop\tkeep\tkeep2");

    assert_eq!(record.remove(0).unwrap(), "drop");
    assert_eq!(io.format_line(&record), "keep\tkeep2");
}

#[test]
fn test_insert_field_at_second_position() {
    let mut record = fields!["first", "third"];
    record.insert(1, "second").unwrap();
    assert_eq!(record.as_slice(), ["first", "second", "third"]);
}

#[test]
fn test_add_new_field_at_end() {
    let mut record = fields!["a"];
    record.push("new_field");
    assert_eq!(record.get(record.len() - 1), Some("new_field"));
    assert_eq!(record.len(), 2);
}

#[test]
fn test_join_two_lines() {
    let io = LineIo::tab();
    let mut input = Cursor::new("a\tb\nc\td\n");

    let mut first = io.read_one(&mut input).unwrap();
    let second = io.read_one(&mut input).unwrap();
    first.append_all(&second);

    assert_eq!(first.as_slice(), ["a", "b", "c", "d"]);
    assert_eq!(io.format_line(&first), "a\tb\tc\td");
}

#[test]
fn test_collapsing_rule() {
    let io = LineIo::tab();
    let record = io.parse_line("\t\ta\t\tb\t");
    assert_eq!(record.as_slice(), ["a", "b"]);
}

#[test]
fn test_crlf_line_endings() {
    let io = LineIo::comma();
    let mut input = Cursor::new("a,b\r\nc,d\r\n");

    let records = io.read_many(&mut input, 2).unwrap();
    assert_eq!(records[0].as_slice(), ["a", "b"]);
    assert_eq!(records[1].as_slice(), ["c", "d"]);
}

#[test]
fn test_last_line_without_terminator() {
    let io = LineIo::comma();
    let mut input = Cursor::new("a,b\nc,d");

    let records = io.read_many(&mut input, 5).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].as_slice(), ["c", "d"]);
}

#[test]
fn test_write_many_separates_with_newline() {
    let io = LineIo::comma();
    let records = [fields!["a", "b"], fields!["c"]];

    let mut output = Vec::new();
    io.write_many(&mut output, &records).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "a,b\nc");
}

#[test]
fn test_write_many_empty_slice_writes_nothing() {
    let io = LineIo::comma();
    let mut output = Vec::new();
    io.write_many(&mut output, &[]).unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_write_one_empty_record_writes_nothing() {
    let io = LineIo::comma();
    let mut output = Vec::new();
    io.write_one(&mut output, &FieldLine::new()).unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_replace_out_of_range_leaves_record_unchanged() {
    let mut record = fields!["a", "b"];
    let before = record.clone();

    assert!(record.replace(2, "x").is_err());
    assert_eq!(record, before);
}

#[test]
fn test_remove_out_of_range_leaves_record_unchanged() {
    let mut record = fields!["a", "b"];
    let before = record.clone();

    assert!(record.remove(5).is_err());
    assert_eq!(record, before);
}

#[test]
fn test_insert_rejects_tail_position() {
    // Inserting at index == len is rejected; push is the way to append.
    let mut record = fields!["a", "b"];
    let before = record.clone();

    assert!(record.insert(2, "x").is_err());
    assert_eq!(record, before);

    record.push("x");
    assert_eq!(record.as_slice(), ["a", "b", "x"]);
}

#[test]
fn test_insert_all_splices_in_order() {
    let mut record = fields!["a", "d"];
    record.insert_all(1, &fields!["b", "c"]).unwrap();
    assert_eq!(record.as_slice(), ["a", "b", "c", "d"]);
}

#[test]
fn test_insert_all_rejects_tail_position() {
    let mut record = fields!["a"];
    assert!(record.insert_all(1, &fields!["b"]).is_err());
    assert_eq!(record.as_slice(), ["a"]);
}

#[test]
fn test_insert_all_into_empty_record_fails() {
    let mut record = FieldLine::new();
    assert!(record.insert_all(0, &fields!["a"]).is_err());
    assert!(record.is_empty());
}

#[test]
fn test_append_all_from_empty_other() {
    let mut record = fields!["a"];
    record.append_all(&FieldLine::new());
    assert_eq!(record.as_slice(), ["a"]);
}

#[test]
fn test_reuse_one_codec_across_streams() {
    let io = LineIo::pipe();

    let mut first = Cursor::new("a|b\n");
    let mut second = Cursor::new("c|d\n");

    assert_eq!(io.read_one(&mut first).unwrap().as_slice(), ["a", "b"]);
    assert_eq!(io.read_one(&mut second).unwrap().as_slice(), ["c", "d"]);
}

#[test]
fn test_iteration_and_conversions() {
    let record = fields!["a", "b", "c"];

    let collected: Vec<&String> = record.iter().collect();
    assert_eq!(collected.len(), 3);

    let fields: Vec<String> = record.clone().into_fields();
    assert_eq!(fields, ["a", "b", "c"]);

    let rebuilt: FieldLine = fields.into_iter().collect();
    assert_eq!(rebuilt, record);
}

#[test]
fn test_index_sugar() {
    let mut record = fields!["a", "b"];
    assert_eq!(&record[1], "b");

    record[1].push('!');
    assert_eq!(record.get(1), Some("b!"));
}

#[test]
fn test_serde_json_interop() {
    let record = fields!["a", "b", "c"];

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"["a","b","c"]"#);

    let back: FieldLine = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
