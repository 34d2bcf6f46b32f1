//! Integration tests for the compact codec and the shortcode pipeline.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use od_rota::compact::{decode, encode};
use od_rota::shortcode::{parse_shortcode_with, Compressor, Decompressor, ZlibCodec};
use od_rota::{
    encode_shortcode, parse_shortcode, parse_shortcode_value, PatternType, ScheduleData,
    Selections, ShortcodeStage,
};
use od_time::{ClockTime, Date};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn today() -> Date {
    date(2024, 2, 14)
}

/// Show pipeline logs with `RUST_LOG=od_rota=debug cargo test`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn ab_schedule() -> ScheduleData {
    let mut s = ScheduleData::with_defaults("Alternating", today());
    s.pattern_type = PatternType::Ab;
    s.selections = Selections::from_weeks([vec![1, 2], vec![4, 5], vec![1, 2], vec![4, 5]]);
    s.pattern_anchor_date = Some(date(2024, 1, 1));
    s.summer_hours.enabled = true;
    s.summer_hours.finish_time = ClockTime::parse("14:00").unwrap();
    s.summer_hours.affected_days = vec![5];
    s.refresh_description();
    s
}

#[test]
fn compact_round_trip_keeps_summer_hours() {
    let s = ab_schedule();
    let back = decode(&encode(&s), today());
    assert_eq!(back.name, s.name);
    assert_eq!(back.pattern_type, PatternType::Ab);
    assert_eq!(back.selections.week1, vec![1, 2]);
    assert_eq!(back.selections.week2, vec![4, 5]);
    assert_eq!(back.pattern_anchor_date, Some(date(2024, 1, 1)));
    assert_eq!(back.summer_hours, s.summer_hours);
    assert_eq!(back.pattern_description, s.pattern_description);
}

#[test]
fn shortcode_round_trip() {
    let s = ab_schedule();
    let code = encode_shortcode(&s).unwrap();
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || "+/=".contains(c)));

    let back = parse_shortcode(&code, today()).unwrap();
    assert!(back.loaded_from_share_link);
    assert_eq!(back.summer_hours.finish_time.to_string(), "14:00");
    assert!(!back.festive_break.enabled);
}

#[test]
fn value_input_accepts_strings_only() {
    let code = encode_shortcode(&ab_schedule()).unwrap();
    assert!(parse_shortcode_value(&serde_json::Value::String(code), today()).is_ok());

    let err = parse_shortcode_value(&serde_json::json!({ "n": "x" }), today()).unwrap_err();
    assert_eq!(err.stage, ShortcodeStage::InputValidation);
}

#[test]
fn malformed_base64_is_a_decoding_failure() {
    init_tracing();
    let err = parse_shortcode("%%%", today()).unwrap_err();
    assert_eq!(err.stage, ShortcodeStage::Decoding);
    assert_eq!(err.message, "Link data is not correctly encoded.");
    assert_eq!(err.to_string(), "decoding: Link data is not correctly encoded.");
}

#[test]
fn unpadded_codes_are_accepted() {
    let code = encode_shortcode(&ab_schedule()).unwrap();
    let trimmed = code.trim_end_matches('=');
    assert!(parse_shortcode(trimmed, today()).is_ok());
}

/// A decompressor that loses everything.
struct Swallow;

impl Decompressor for Swallow {
    fn decompress(&self, _data: &[u8]) -> std::io::Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

/// A decompressor that always fails.
struct Broken;

impl Decompressor for Broken {
    fn decompress(&self, _data: &[u8]) -> std::io::Result<Vec<u8>> {
        Err(std::io::Error::new(std::io::ErrorKind::InvalidData, "bad stream"))
    }
}

#[test]
fn decompressor_failures_map_to_their_stages() {
    init_tracing();
    let code = encode_shortcode(&ab_schedule()).unwrap();

    let err = parse_shortcode_with(&code, today(), &Swallow).unwrap_err();
    assert_eq!(err.stage, ShortcodeStage::DecompressionBytes);

    let err = parse_shortcode_with(&code, today(), &Broken).unwrap_err();
    assert_eq!(err.stage, ShortcodeStage::DecompressionManualDecode);
}

// Links issued by the browser app (pako deflate, then btoa).
const GB_JVU_LINK: &str =
    "eNqrVspTslJyd1LIKitV0lEqKFGyMgZSiS5AUSMDI1MDIASKF/sA+cYmNUBkZAxESrUAoFsONw==";
const ASDADS_LINK: &str =
    "eNqrVspTslLyrVQITs5ITSnNSU0sTklMKVbSUSooUbIyBlKJLkAFRgZGpgZmBkZA8WIfEN+4BoiMTYBIqRYArlQSug==";
const ASD_LINK: &str = "eNqrVspTslJKLE5R0lEqKFGyMgVSiS5AISMDI1MDMwMjoHixD5BvWGNUU6NUCwAq+gw8";
const BAD_CHECKSUM_LINK: &str =
    "eNqrVspTslJKLE6BICUdpYISJStjIJXoApQwMjAyNTAzMAKKF/sA+MamNSBsaGQCwkq1ADq6EKk=";
const GIGI_LINK: &str = "eNqrVspTslJyz0zPVNJRKihRsjIFUokuQDEjAyNTAzMDI6B4sQ+Ib1wDRMYmNcZKtQB3JA2F";

fn issued_today() -> Date {
    date(2025, 6, 1)
}

#[test]
fn issued_aa_bb_links_decode() {
    let s = parse_shortcode(GB_JVU_LINK, issued_today()).unwrap();
    assert_eq!(s.name, "GB jvu");
    assert_eq!(s.pattern_type, PatternType::AaBb);
    assert_eq!(s.pattern_anchor_date, Some(date(2025, 5, 5)));
    assert_eq!(s.selections.week1, vec![3, 4]);
    assert_eq!(s.selections.week3, vec![2, 3]);

    let s = parse_shortcode(ASDADS_LINK, issued_today()).unwrap();
    assert_eq!(s.name, "My Scheduleasdads");
    assert_eq!(s.pattern_type, PatternType::AaBb);
    assert_eq!(s.selections.week1, vec![2, 3]);
    assert_eq!(s.selections.week2, vec![2, 3]);
    assert_eq!(s.selections.week3, vec![3, 4]);
    assert_eq!(s.selections.week4, vec![3, 4]);
    assert!(!s.summer_hours.enabled);
    assert!(!s.festive_break.enabled);
}

#[test]
fn issued_custom_links_decode() {
    let s = parse_shortcode(ASD_LINK, issued_today()).unwrap();
    assert_eq!(s.name, "asd");
    assert_eq!(s.pattern_type, PatternType::Custom4Week);
    assert_eq!(s.pattern_anchor_date, Some(date(2025, 6, 2)));
    assert_eq!(s.selections.week1, vec![1]);
    assert_eq!(s.selections.week2, vec![2]);
    assert!(s.selections.week3.is_empty());
    assert!(s.selections.week4.is_empty());

    let s = parse_shortcode(GIGI_LINK, issued_today()).unwrap();
    assert_eq!(s.name, "Gigi");
    assert_eq!(s.pattern_type, PatternType::Custom4Week);
    assert_eq!(s.selections.week1, vec![2, 3]);
    assert_eq!(s.selections.week2, vec![2, 3]);
    assert_eq!(s.selections.week3, vec![3, 4]);
    assert_eq!(s.selections.week4, vec![3]);
    assert!(!s.summer_hours.enabled);
    assert!(!s.festive_break.enabled);
}

#[test]
fn issued_link_with_bad_checksum_is_rejected() {
    init_tracing();
    let err = parse_shortcode(BAD_CHECKSUM_LINK, issued_today()).unwrap_err();
    assert_eq!(err.stage, ShortcodeStage::DecompressionManualDecode);
    assert_eq!(err.message, "Decompression or string decoding failed.");
}

#[test]
fn null_name_falls_back_to_shared_schedule() {
    let json = serde_json::json!({ "n": null, "pt": 1, "paD": "20240101", "sL": "123|||" });
    let compressed = ZlibCodec::default().compress(json.to_string().as_bytes()).unwrap();
    let code = STANDARD.encode(compressed);

    let s = parse_shortcode(&code, today()).unwrap();
    assert_eq!(s.name, "Shared Schedule");
    assert_eq!(s.pattern_type, PatternType::Constant);
    assert_eq!(s.selections.week1, vec![1, 2, 3]);
}

#[test]
fn non_canonical_trailing_bits_get_past_decoding() {
    // "QR==" carries set bits after its only byte
    let err = parse_shortcode("QR==", today()).unwrap_err();
    assert_ne!(err.stage, ShortcodeStage::Decoding);
}

#[test]
fn lower_compression_levels_still_decode() {
    let json = serde_json::to_vec(&encode(&ab_schedule())).unwrap();
    let fast = ZlibCodec::new(1).compress(&json).unwrap();
    let restored = ZlibCodec::default().decompress(&fast).unwrap();
    assert_eq!(restored, json);
}

fn any_schedule() -> impl Strategy<Value = ScheduleData> {
    (
        prop::sample::select(PatternType::ALL.to_vec()),
        prop::collection::vec(prop::collection::btree_set(1u8..=5, 0..=5), 4),
        (2020u16..2030, 1u8..=12, 1u8..=28),
        any::<bool>(),
        any::<bool>(),
        "[A-Za-z0-9 ]{1,20}",
    )
        .prop_map(|(pattern_type, weeks, (y, m, d), summer, festive, name)| {
            let mut s = ScheduleData::with_defaults(name, today());
            let weeks: Vec<Vec<u8>> = weeks.into_iter().map(|w| w.into_iter().collect()).collect();
            let [w1, w2, w3, w4]: [Vec<u8>; 4] = weeks.try_into().unwrap();
            s.pattern_type = pattern_type;
            s.selections = Selections::from_weeks([w1, w2, w3, w4]);
            s.set_anchor(date(y, m, d));
            s.summer_hours.enabled = summer;
            s.festive_break.enabled = festive;
            s.refresh_description();
            s
        })
}

proptest! {
    #[test]
    fn shortcodes_round_trip(s in any_schedule()) {
        let code = encode_shortcode(&s).unwrap();
        let mut back = parse_shortcode(&code, today()).unwrap();
        prop_assert!(back.loaded_from_share_link);
        back.loaded_from_share_link = false;
        prop_assert_eq!(back, s);
    }
}
