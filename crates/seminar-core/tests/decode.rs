use seminar_core::decode::{decode_csv, sniff_delimiter};
use seminar_core::error::DecodeError;

#[test]
fn comma_separated_rows_keep_submission_order() {
    let csv = "Name,Q1 [Importance]\nalice,4: Good\nbob,2: Meh\n";
    let rows = decode_csv(csv.as_bytes()).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("Name"), Some("alice"));
    assert_eq!(rows[1].get("Q1 [Importance]"), Some("2: Meh"));
}

#[test]
fn byte_order_mark_is_stripped_from_first_header() {
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice(b"Timestamp,Score\n2024-01-01,5\n");

    let rows = decode_csv(&bytes).unwrap();
    assert_eq!(rows[0].get("Timestamp"), Some("2024-01-01"));
}

#[test]
fn semicolon_and_tab_delimiters_are_detected() {
    let semi = "a;b;c\n1;2;3\n";
    let tab = "a\tb\tc\n1\t2\t3\n";

    assert_eq!(decode_csv(semi.as_bytes()).unwrap()[0].get("c"), Some("3"));
    assert_eq!(decode_csv(tab.as_bytes()).unwrap()[0].get("b"), Some("2"));
}

#[test]
fn delimiters_inside_quotes_are_ignored_when_sniffing() {
    assert_eq!(sniff_delimiter("\"x;y;z\",b\n"), b',');
    assert_eq!(sniff_delimiter("only one column\n"), b',');
    assert_eq!(sniff_delimiter("a,b;c\n"), b',');
}

#[test]
fn short_rows_are_padded_and_blank_rows_skipped() {
    let csv = "a,b,c\n1\n,,\n4,5,6\n";
    let rows = decode_csv(csv.as_bytes()).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].headers().count(), 3);
    assert_eq!(rows[0].get("c"), Some(""));
    assert_eq!(rows[1].get("c"), Some("6"));
}

#[test]
fn quoted_multiline_answers_survive() {
    let csv = "Key Takeaways,Strengths\n\"line one\nline two\",\"said \"\"hi\"\"\"\n";
    let rows = decode_csv(csv.as_bytes()).unwrap();

    assert_eq!(rows[0].get("Key Takeaways"), Some("line one\nline two"));
    assert_eq!(rows[0].get("Strengths"), Some("said \"hi\""));
}

#[test]
fn empty_upload_has_no_header() {
    let err = decode_csv(b"").unwrap_err();
    assert!(matches!(err, DecodeError::MissingHeader));
}

#[test]
fn header_only_upload_decodes_to_no_rows() {
    let rows = decode_csv(b"a,b,c\n").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn invalid_utf8_is_replaced_not_rejected() {
    let rows = decode_csv(b"name\ncaf\xE9\n").unwrap();
    assert_eq!(rows[0].get("name"), Some("caf\u{FFFD}"));
}
