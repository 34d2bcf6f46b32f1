//! Share-link shortcodes.
//!
//! A shortcode is the compact schedule serialized to JSON, zlib-compressed
//! and base64-encoded. [`parse_shortcode`] runs the inverse as a linear
//! pipeline; each stage fails with its own [`ShortcodeStage`] so a caller
//! can tell a truncated link from a corrupted one.

use crate::compact::{self, CompactSchedule};
use crate::schedule::ScheduleData;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use od_core::errors::{Error, Result};
use od_time::Date;
use serde_json::Value;
use std::io::{Read, Write};
use thiserror::Error;
use tracing::debug;

/// Standard alphabet, padded on encode. Decoding accepts missing padding and
/// non-zero trailing bits, as browser `atob` does.
const SHARE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

// ── Errors ──────────────────────────────────────────────────────────────────

/// The pipeline stage at which a shortcode was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcodeStage {
    /// The input was not a string.
    InputValidation,
    /// Base64 decoding failed.
    Decoding,
    /// Decompression produced nothing.
    DecompressionBytes,
    /// Decompression failed, or the output was not UTF-8.
    DecompressionManualDecode,
    /// The text was not JSON.
    Parsing,
    /// The decoded schedule is structurally unusable.
    Validation,
}

impl ShortcodeStage {
    /// Stable snake_case tag (`"decoding"`, `"validation"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ShortcodeStage::InputValidation => "input_validation",
            ShortcodeStage::Decoding => "decoding",
            ShortcodeStage::DecompressionBytes => "decompression_bytes",
            ShortcodeStage::DecompressionManualDecode => "decompression_manual_decode",
            ShortcodeStage::Parsing => "parsing",
            ShortcodeStage::Validation => "validation",
        }
    }
}

impl std::fmt::Display for ShortcodeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected shortcode: the failing stage and a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{stage}: {message}")]
pub struct ShortcodeError {
    /// Where the pipeline stopped.
    pub stage: ShortcodeStage,
    /// Message suitable for showing to the person who opened the link.
    pub message: String,
}

impl ShortcodeError {
    fn new(stage: ShortcodeStage, message: &str) -> Self {
        debug!(stage = stage.as_str(), message, "shortcode rejected");
        Self {
            stage,
            message: message.to_string(),
        }
    }
}

// ── Compression ─────────────────────────────────────────────────────────────

/// Byte compressor used when creating shortcodes.
pub trait Compressor {
    /// Compress `data`.
    fn compress(&self, data: &[u8]) -> std::io::Result<Vec<u8>>;
}

/// Byte decompressor used when reading shortcodes.
pub trait Decompressor {
    /// Decompress `data`.
    fn decompress(&self, data: &[u8]) -> std::io::Result<Vec<u8>>;
}

/// zlib (RFC 1950) codec, the format share links are written in.
#[derive(Debug, Clone, Copy)]
pub struct ZlibCodec {
    level: Compression,
}

impl ZlibCodec {
    /// A codec compressing at `level` (0–9).
    pub fn new(level: u32) -> Self {
        Self {
            level: Compression::new(level.min(9)),
        }
    }
}

impl Default for ZlibCodec {
    fn default() -> Self {
        Self {
            level: Compression::best(),
        }
    }
}

impl Compressor for ZlibCodec {
    fn compress(&self, data: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::new(), self.level);
        encoder.write_all(data)?;
        encoder.finish()
    }
}

impl Decompressor for ZlibCodec {
    fn decompress(&self, data: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut out = Vec::new();
        ZlibDecoder::new(data).read_to_end(&mut out)?;
        Ok(out)
    }
}

// ── Encoding ────────────────────────────────────────────────────────────────

/// Create the shortcode for `schedule`.
pub fn encode_shortcode(schedule: &ScheduleData) -> Result<String> {
    encode_shortcode_with(schedule, &ZlibCodec::default())
}

/// Create the shortcode for `schedule` with a custom compressor.
pub fn encode_shortcode_with(schedule: &ScheduleData, compressor: &dyn Compressor) -> Result<String> {
    let json = serde_json::to_vec(&compact::encode(schedule))
        .map_err(|e| Error::Runtime(format!("cannot serialize compact schedule: {e}")))?;
    let compressed = compressor
        .compress(&json)
        .map_err(|e| Error::Runtime(format!("compression failed: {e}")))?;
    Ok(SHARE_ENGINE.encode(compressed))
}

// ── Decoding ────────────────────────────────────────────────────────────────

/// Parse an arbitrary JSON value as a shortcode. Only strings are accepted.
pub fn parse_shortcode_value(
    value: &Value,
    today: Date,
) -> std::result::Result<ScheduleData, ShortcodeError> {
    match value {
        Value::String(code) => parse_shortcode(code, today),
        _ => Err(ShortcodeError::new(
            ShortcodeStage::InputValidation,
            "Input shortcode is not a string.",
        )),
    }
}

/// Decode a shortcode into a full schedule. `today` seeds the defaults of
/// anything the link leaves out.
pub fn parse_shortcode(code: &str, today: Date) -> std::result::Result<ScheduleData, ShortcodeError> {
    parse_shortcode_with(code, today, &ZlibCodec::default())
}

/// [`parse_shortcode`] with a custom decompressor.
pub fn parse_shortcode_with(
    code: &str,
    today: Date,
    decompressor: &dyn Decompressor,
) -> std::result::Result<ScheduleData, ShortcodeError> {
    let code: String = code.chars().filter(|c| !c.is_whitespace()).collect();

    let compressed = SHARE_ENGINE.decode(code.as_bytes()).map_err(|_| {
        ShortcodeError::new(ShortcodeStage::Decoding, "Link data is not correctly encoded.")
    })?;

    let nothing = || {
        ShortcodeError::new(
            ShortcodeStage::DecompressionBytes,
            "Decompression to bytes failed or yielded empty/undefined result.",
        )
    };
    if compressed.is_empty() {
        return Err(nothing());
    }
    let bytes = decompressor.decompress(&compressed).map_err(|_| {
        ShortcodeError::new(
            ShortcodeStage::DecompressionManualDecode,
            "Decompression or string decoding failed.",
        )
    })?;
    if bytes.is_empty() {
        return Err(nothing());
    }

    let text = String::from_utf8(bytes).map_err(|_| {
        ShortcodeError::new(
            ShortcodeStage::DecompressionManualDecode,
            "Failed to decode link data (UTF-8 decoding error).",
        )
    })?;

    let value: Value = serde_json::from_str(&text).map_err(|_| {
        ShortcodeError::new(ShortcodeStage::Parsing, "Link data format is invalid.")
    })?;

    let compact = into_compact(value)?;
    let schedule = compact::decode(&compact, today);
    if schedule.validate().is_err() {
        return Err(ShortcodeError::new(
            ShortcodeStage::Validation,
            "Link data has an unexpected structure.",
        ));
    }
    debug!(name = %schedule.name, pattern_type = %schedule.pattern_type, "shortcode accepted");
    Ok(schedule)
}

fn into_compact(value: Value) -> std::result::Result<CompactSchedule, ShortcodeError> {
    let unexpected = || {
        ShortcodeError::new(
            ShortcodeStage::Validation,
            "Link data has an unexpected structure.",
        )
    };
    match value {
        Value::Null | Value::Bool(false) => Err(ShortcodeError::new(
            ShortcodeStage::Validation,
            "Failed to process shared link data.",
        )),
        Value::Object(_) => serde_json::from_value(value).map_err(|_| unexpected()),
        _ => Err(unexpected()),
    }
}
