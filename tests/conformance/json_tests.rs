//! JSON Tests
//!
//! Token shapes produced by `to_json`/serde, and decoding through
//! `from_json`/serde back into wrappers.
//!
//! Test ID Conventions:
//! - je_*: encoding
//! - jd_*: decoding
//! - js_*: wrappers embedded in derived structs

use crate::test_utils::*;
use chrono::{DateTime, Duration, Utc};
use generic::{
    Bool, Epoch, Error, Float, Int, Text, Time, Timestamp, TimestampMillis, TimestampNanos, Uint,
    Url,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// Encoding
// =============================================================================

#[test]
fn je_invalid_wrappers_encode_null() {
    assert_eq!(Bool::null().to_json().unwrap(), "null");
    assert_eq!(Int::null().to_json().unwrap(), "null");
    assert_eq!(Uint::null().to_json().unwrap(), "null");
    assert_eq!(Float::null().to_json().unwrap(), "null");
    assert_eq!(Text::null().to_json().unwrap(), "null");
    assert_eq!(Time::null().to_json().unwrap(), "null");
    assert_eq!(Timestamp::null().to_json().unwrap(), "null");
    assert_eq!(TimestampMillis::null().to_json().unwrap(), "null");
    assert_eq!(TimestampNanos::null().to_json().unwrap(), "null");
    assert_eq!(Url::null().to_json().unwrap(), "null");
}

#[test]
fn je_scalar_tokens() {
    assert_eq!(Bool::new(false).to_json().unwrap(), "false");
    assert_eq!(Int::new(i64::MIN).to_json().unwrap(), "-9223372036854775808");
    assert_eq!(Uint::new(u64::MAX).to_json().unwrap(), "18446744073709551615");
    assert_eq!(Text::new("a\"b".into()).to_json().unwrap(), r#""a\"b""#);
}

#[test]
fn je_float_tokens() {
    assert_eq!(Float::new(1.0).to_json().unwrap(), "1");
    assert_eq!(Float::new(-3.0).to_json().unwrap(), "-3");
    assert_eq!(Float::new(0.25).to_json().unwrap(), "0.25");
    assert_eq!(Float::new(1000.000001).to_json().unwrap(), "1000.000001");
    assert_eq!(Float::new(1e20).to_json().unwrap(), "100000000000000000000");
    assert_eq!(Float::new(1e16).to_json().unwrap(), "10000000000000000");
    assert_eq!(Float::new(1e-7).to_json().unwrap(), "0.0000001");
    assert_eq!(
        Float::new(123456789012345678.0).to_json().unwrap(),
        "123456789012345680"
    );
}

#[test]
fn je_float_fixed_point_inside_structs() {
    let m = Mixed {
        float: Float::new(1e-7),
        ..Mixed::default()
    };
    let text = serde_json::to_string(&m).unwrap();
    assert!(text.contains(r#""float":0.0000001,"#), "{}", text);

    let tree = serde_json::to_value(&m).unwrap();
    assert_eq!(tree["float"].as_f64(), Some(1e-7));
}

#[test]
fn je_float_non_finite_is_encode_error() {
    for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = Float::new(f).to_json().unwrap_err();
        assert!(matches!(err, Error::Encode { .. }), "{:?}", err);
    }
}

#[test]
fn je_time_tokens() {
    assert_eq!(
        Time::new(tokyo_evening()).to_json().unwrap(),
        r#""2020-07-24T20:00:00+09:00""#
    );
    let utc = (DateTime::UNIX_EPOCH + Duration::microseconds(1_500_250)).fixed_offset();
    assert_eq!(Time::new(utc).to_json().unwrap(), r#""1970-01-01T00:00:01.500250Z""#);
}

#[test]
fn je_timestamp_tokens() {
    let instant = Utc::now();
    assert_eq!(
        Timestamp::new(Epoch::new(instant)).to_json().unwrap(),
        instant.timestamp().to_string()
    );
    assert_eq!(
        TimestampMillis::new(Epoch::new(instant)).to_json().unwrap(),
        instant.timestamp_millis().to_string()
    );
    assert_eq!(
        TimestampNanos::new(Epoch::new(instant)).to_json().unwrap(),
        instant.timestamp_nanos_opt().unwrap().to_string()
    );
}

#[test]
fn je_url_token() {
    let u = Url::from_value("HTTPS://Example.COM/a b").unwrap();
    assert_eq!(u.to_json().unwrap(), r#""https://example.com/a%20b""#);

    let relative = Url::from_value("//user@foo/path?a=b").unwrap();
    assert_eq!(relative.to_json().unwrap(), r#""//user@foo/path?a=b""#);
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn jd_empty_input_is_noop() {
    let mut v = Text::new("kept".into());
    v.from_json(b"").unwrap();
    assert_eq!(v.as_str(), Some("kept"));
}

#[test]
fn jd_null_invalidates() {
    let mut v = Float::new(2.0);
    v.from_json(b"null").unwrap();
    assert!(!v.is_valid());
}

#[test]
fn jd_malformed_text() {
    let mut v = Int::new(1);
    let err = v.from_json(b"\"1").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert_eq!(v, Int::new(1));
}

#[test]
fn jd_rejected_node_invalidates() {
    let mut v = Int::new(1);
    let err = v.from_json(b"[1]").unwrap_err();
    assert_eq!(err.to_string(), "invalid value: (array)");
    assert!(!v.is_valid());
}

#[test]
fn jd_round_trips() {
    let values = [
        Int::new(-5).to_json().unwrap(),
        Uint::new(u64::MAX).to_json().unwrap(),
        Float::new(56.0001).to_json().unwrap(),
    ];
    let mut i = Int::default();
    i.from_json(values[0].as_bytes()).unwrap();
    assert_eq!(i, Int::new(-5));

    let mut u = Uint::default();
    u.from_json(values[1].as_bytes()).unwrap();
    assert_eq!(u, Uint::new(u64::MAX));

    let mut f = Float::default();
    f.from_json(values[2].as_bytes()).unwrap();
    assert_eq!(f, Float::new(56.0001));

    for big in [1e20, 1e16, 1e-7] {
        let mut f = Float::default();
        f.from_json(Float::new(big).to_json().unwrap().as_bytes()).unwrap();
        assert_eq!(f, Float::new(big));
    }

    let t = Time::new(tokyo_evening());
    let mut back = Time::default();
    back.from_json(t.to_json().unwrap().as_bytes()).unwrap();
    assert_eq!(back, t);
}

#[test]
fn jd_timestamp_nanos_round_trip() {
    let ts = TimestampNanos::from_value(1_595_588_400_123_456_789i64).unwrap();
    let mut back = TimestampNanos::default();
    back.from_json(ts.to_json().unwrap().as_bytes()).unwrap();
    assert_eq!(back, ts);
}

#[test]
fn jd_text_accepts_numbers() {
    let mut s = Text::default();
    s.from_json(b"1.5").unwrap();
    assert_eq!(s.as_str(), Some("1.5"));
    s.from_json(b"true").unwrap();
    assert_eq!(s.as_str(), Some("true"));
}

// =============================================================================
// Derived structs
// =============================================================================

#[derive(Debug, Default, Serialize, Deserialize)]
struct Mixed {
    int: Int,
    float: Float,
    bool: Bool,
    string: Text,
    time: Time,
    ts: TimestampMillis,
}

#[test]
fn js_struct_mix() {
    let text = r#"{
        "int": "10",
        "float": 1,
        "bool": "t",
        "string": 2.5,
        "time": "2020-07-24T20:00:00+09:00",
        "ts": 1367059792
    }"#;
    let m: Mixed = serde_json::from_str(text).unwrap();
    assert_eq!(m.int.get(), Some(&10));
    assert_eq!(m.float.get(), Some(&1.0));
    assert_eq!(m.bool.get(), Some(&true));
    assert_eq!(m.string.as_str(), Some("2.5"));
    assert_eq!(m.time.get(), Some(&tokyo_evening()));
    assert_eq!(m.ts.unix(), 1367059792);

    assert_eq!(
        serde_json::to_string(&m).unwrap(),
        r#"{"int":10,"float":1,"bool":true,"string":"2.5","time":"2020-07-24T20:00:00+09:00","ts":1367059792}"#
    );
}

#[test]
fn js_struct_nulls() {
    let m: Mixed = serde_json::from_str(
        r#"{"int":null,"float":null,"bool":null,"string":null,"time":null,"ts":null}"#,
    )
    .unwrap();
    assert!(!m.int.is_valid());
    assert!(!m.ts.is_valid());
    assert_eq!(
        serde_json::to_string(&Mixed::default()).unwrap(),
        r#"{"int":null,"float":null,"bool":null,"string":null,"time":null,"ts":null}"#
    );
}

#[test]
fn js_struct_rejects_whole_document_on_bad_field() {
    let err = serde_json::from_str::<Mixed>(
        r#"{"int":"x","float":1,"bool":true,"string":"a","time":null,"ts":null}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("invalid value: (string)"));
}
