//! CSV upload decoding.
//!
//! Form exports arrive with a byte-order mark, a locale-dependent
//! delimiter, and rows that stop early when trailing questions were
//! skipped. All of that is normalised here so the extractor only sees
//! complete rows.

use csv::{ReaderBuilder, Trim};

use crate::error::DecodeError;
use crate::models::raw::RawRow;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const CANDIDATE_DELIMITERS: [u8; 3] = [b',', b';', b'\t'];

/// Decode CSV bytes into rows keyed by the header line.
///
/// Invalid UTF-8 is replaced rather than rejected. Rows shorter than the
/// header are padded with empty cells; rows that are entirely blank are
/// skipped.
pub fn decode_csv(bytes: &[u8]) -> Result<Vec<RawRow>, DecodeError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let text = String::from_utf8_lossy(bytes);
    let delimiter = sniff_delimiter(&text);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(DecodeError::MissingHeader);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let row = RawRow::from_pairs(
            headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.as_str(), record.get(i).unwrap_or_default())),
        );
        rows.push(row);
    }

    Ok(rows)
}

/// Pick the delimiter that occurs most often, outside quotes, in the
/// header line. Falls back to a comma.
pub fn sniff_delimiter(text: &str) -> u8 {
    let mut counts = [0usize; CANDIDATE_DELIMITERS.len()];
    let mut in_quotes = false;

    for byte in text.bytes() {
        match byte {
            b'"' => in_quotes = !in_quotes,
            b'\n' | b'\r' if !in_quotes => break,
            _ if !in_quotes => {
                if let Some(i) = CANDIDATE_DELIMITERS.iter().position(|d| *d == byte) {
                    counts[i] += 1;
                }
            }
            _ => {}
        }
    }

    CANDIDATE_DELIMITERS
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .rev()
        .max_by_key(|(_, count)| *count)
        .map(|(d, _)| *d)
        .unwrap_or(b',')
}
