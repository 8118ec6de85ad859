//! Record Decoding Tests
//!
//! Field-by-field decoding where one rejected member must not take its
//! siblings down with it.

use crate::test_utils::*;
use generic::{decode_record, Error, Field, Float, Int, Record, Text, Time, TimestampMillis, Url};
use serde::Serialize;

/// Six integer fields fed a mix of shapes
#[derive(Debug, Default, Serialize)]
struct IntRow {
    int: Int,
    float: Int,
    bool: Int,
    string: Int,
    null_value: Int,
    empty: Int,
}

impl Record for IntRow {
    fn visit_fields(&mut self, visit: &mut dyn FnMut(&'static str, &mut dyn Field)) {
        visit("int", &mut self.int);
        visit("float", &mut self.float);
        visit("bool", &mut self.bool);
        visit("string", &mut self.string);
        visit("null_value", &mut self.null_value);
        visit("empty", &mut self.empty);
    }
}

#[test]
fn rd_invalid_string_in_record() {
    let mut row = IntRow::default();
    let text = r#"{"int":10,"float":1.0,"bool":true,"string":"あ","null_value":null}"#;

    let err = decode_record(text.as_bytes(), &mut row).unwrap_err();
    assert_eq!(err.to_string(), "invalid value: (string)");

    assert_eq!(
        serde_json::to_string(&row).unwrap(),
        r#"{"int":10,"float":1,"bool":1,"string":null,"null_value":null,"empty":null}"#
    );
}

#[derive(Debug, Default)]
struct Profile {
    name: Text,
    score: Float,
    born: Time,
    last_seen: TimestampMillis,
    home: Url,
}

impl Record for Profile {
    fn visit_fields(&mut self, visit: &mut dyn FnMut(&'static str, &mut dyn Field)) {
        visit("name", &mut self.name);
        visit("score", &mut self.score);
        visit("born", &mut self.born);
        visit("lastSeen", &mut self.last_seen);
        visit("home", &mut self.home);
    }
}

#[test]
fn rd_mixed_types_all_valid() {
    let mut p = Profile::default();
    decode_record(
        br#"{
            "name": "ann",
            "score": "9.5",
            "born": "2020-07-24T20:00:00+09:00",
            "lastSeen": 1367059792,
            "home": "https://example.com/ann"
        }"#,
        &mut p,
    )
    .unwrap();

    assert_eq!(p.name.as_str(), Some("ann"));
    assert_eq!(p.score.get(), Some(&9.5));
    assert_eq!(p.born.get(), Some(&tokyo_evening()));
    assert_eq!(p.last_seen.unix(), 1367059792);
    assert_eq!(p.home.to_string(), "https://example.com/ann");
}

#[test]
fn rd_first_error_is_reported_all_fields_visited() {
    let mut p = Profile {
        name: Text::new("old".into()),
        ..Profile::default()
    };
    let err = decode_record(
        br#"{"score": [], "born": 12, "lastSeen": -1, "home": "//bad host", "name": "new"}"#,
        &mut p,
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "invalid value: (array)");
    assert!(!p.score.is_valid());
    assert!(!p.born.is_valid());
    assert!(!p.last_seen.is_valid());
    assert!(!p.home.is_valid());
    assert_eq!(p.name.as_str(), Some("new"));
}

#[test]
fn rd_non_object_document() {
    let mut p = Profile::default();
    assert_eq!(
        decode_record(b"\"text\"", &mut p).unwrap_err().to_string(),
        "invalid value: (string)"
    );
    assert_eq!(
        decode_record(b"null", &mut p).unwrap_err().to_string(),
        "invalid value: (nil)"
    );
    assert!(matches!(decode_record(b"{\"name\":", &mut p), Err(Error::Json(_))));
}

#[test]
fn rd_record_as_trait_object() {
    let mut row = IntRow::default();
    let record: &mut dyn Record = &mut row;
    decode_record(br#"{"empty": "5"}"#, record).unwrap();
    assert_eq!(row.empty.get(), Some(&5));
}
