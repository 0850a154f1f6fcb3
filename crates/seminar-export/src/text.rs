//! Helvetica text metrics, word wrapping, and WinAnsi encoding.
//!
//! The report only uses the standard Helvetica faces, so glyph widths come
//! from the built-in AFM table rather than an embedded font.

/// Advance widths (1/1000 em) of Helvetica for ASCII 0x20..=0x7E.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Advance widths (1/1000 em) of Helvetica-Bold for ASCII 0x20..=0x7E.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

const DEFAULT_WIDTH: u16 = 556;

pub const BULLET: char = '\u{2022}';

/// Standard font face a run of text is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
}

impl Face {
    fn char_width(self, c: char) -> u16 {
        let (ascii, single_quote, double_quote) = match self {
            Face::Regular => (&HELVETICA_WIDTHS, 222, 333),
            Face::Bold => (&HELVETICA_BOLD_WIDTHS, 278, 500),
        };
        match c {
            ' '..='~' => ascii[c as usize - 0x20],
            BULLET => 350,
            '\u{2018}' | '\u{2019}' => single_quote,
            '\u{201C}' | '\u{201D}' => double_quote,
            '\u{2013}' => 556,
            '\u{2014}' => 1000,
            _ => DEFAULT_WIDTH,
        }
    }
}

/// Rendered width of `text` at `size` points in `face`.
pub fn text_width(face: Face, text: &str, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(face.char_width(c))).sum();
    units as f32 * size / 1000.0
}

/// Greedy word wrap to `max_width` points, measured in the regular face.
///
/// Embedded newlines start a new line. Words wider than the line are
/// broken between characters. Always returns at least one line.
pub fn wrap_text(text: &str, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if text_width(Face::Regular, &candidate, size) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if text_width(Face::Regular, word, size) <= max_width {
                current = word.to_string();
            } else {
                let mut pieces = break_word(word, size, max_width);
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn break_word(word: &str, size: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for c in word.chars() {
        current.push(c);
        if text_width(Face::Regular, &current, size) > max_width && current.chars().count() > 1 {
            current.pop();
            pieces.push(std::mem::take(&mut current));
            current.push(c);
        }
    }
    pieces.push(current);
    pieces
}

/// Split a column heading on its first space into at most two lines.
pub fn split_heading(label: &str) -> (&str, Option<&str>) {
    match label.split_once(' ') {
        Some((first, rest)) => (first, Some(rest)),
        None => (label, None),
    }
}

/// Encode text for a standard font using WinAnsiEncoding.
///
/// Latin-1 characters map directly; common typographic punctuation maps
/// to its WinAnsi slot; anything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '\t' | '\n' | '\r' => b' ',
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            BULLET => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            _ => b'?',
        })
        .collect()
}
