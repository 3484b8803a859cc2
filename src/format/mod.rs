//! # PDBx Value Formatting
//!
//! The serialization contract for single values. [`format_value`] turns a
//! [`CifValue`] into the exact text a PDBx writer must emit, and reports the
//! detected kind; [`data_kind_of`] classifies without rendering, for bulk
//! type-width inference over a column.
//!
//! ## Precedence
//!
//! Classification is evaluated in a fixed order (first match wins):
//!
//! 1. Machine null -> `?`
//! 2. Machine integer, or text matching `^[0-9]+$`
//! 3. Machine float, or text matching the PDBx float pattern
//!    (`1.5`, `-3.`, `.25`, `1.23(4)`, `1.5e10`, ...)
//! 4. The explicit markers `.` and `?`, returned unchanged
//! 5. Empty text, rendered as `.`
//! 6. Text free of whitespace and quotes: double-quoted if it starts with
//!    the `_` sigil (it would otherwise read as an item name), else unquoted
//! 7. Everything else: semicolon multi-line block if it contains a newline,
//!    otherwise the quote style chosen per [`QuotingMode`]
//!
//! ## Quote-style selection
//!
//! | Mode | double-quote when | else single-quote when | else |
//! |------|-------------------|------------------------|------|
//! | `Normal` | no `"` in text | no `'` in text | multi-line block |
//! | `AvoidEmbedded` | no `"` and no `'` adjacent to whitespace | no `'` and no `"` adjacent to whitespace | multi-line block |
//!
//! `AvoidEmbedded` refuses strings where the surviving quote character sits
//! next to whitespace, which simple parsers would misread as a closing quote.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::value::{CifValue, NULL_INAPPLICABLE, NULL_UNKNOWN};


/// Integer-text pattern.
static INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("hard-coded pattern"));

/// Float-text pattern, including esd parentheses and exponent forms.
static FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(([0-9]+)\.?|([0-9]*\.[0-9]+))(\([0-9]+\))?([eE][+-]?[0-9]+)?$")
        .expect("hard-coded pattern")
});

/// Any whitespace or quote character.
static WS_AND_QUOTES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\s'"]"#).expect("hard-coded pattern"));

/// Single quote adjacent to whitespace.
static SQ_WS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"('\s)|(\s')").expect("hard-coded pattern"));

/// Double quote adjacent to whitespace.
static DQ_WS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"("\s)|(\s")"#).expect("hard-coded pattern"));

/// Detected kind of a single value.
///
/// The derived `Ord` is the type-width total order used when folding a
/// column to its most general kind: `NullValue < Integer < Float <
/// UnquotedString < ItemName < DoubleQuotedString < SingleQuotedString <
/// MultiLineString`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum DataKind {
    /// Null, or one of the `?` / `.` / empty markers.
    #[default]
    NullValue,
    /// Integer number.
    Integer,
    /// Floating-point number.
    Float,
    /// Text emitted bare, without quoting.
    UnquotedString,
    /// Text starting with `_`, emitted double-quoted to avoid reading as an
    /// item name.
    ItemName,
    /// Text emitted in double quotes.
    DoubleQuotedString,
    /// Text emitted in single quotes.
    SingleQuotedString,
    /// Text emitted as a semicolon-delimited multi-line block.
    MultiLineString,
}

/// Coarse format category a [`DataKind`] maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatKind {
    /// Null markers.
    NullValue,
    /// Integers and floats.
    Number,
    /// Bare text.
    UnquotedString,
    /// Quoted text of any quote style, including item names.
    QuotedString,
    /// Semicolon-delimited blocks.
    MultiLineString,
}

impl DataKind {
    /// The coarse format category for this kind.
    pub fn format_kind(self) -> FormatKind {
        match self {
            DataKind::NullValue => FormatKind::NullValue,
            DataKind::Integer | DataKind::Float => FormatKind::Number,
            DataKind::UnquotedString => FormatKind::UnquotedString,
            DataKind::ItemName | DataKind::DoubleQuotedString | DataKind::SingleQuotedString => {
                FormatKind::QuotedString
            }
            DataKind::MultiLineString => FormatKind::MultiLineString,
        }
    }
}

/// Quote-style selection policy for values that need quoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuotingMode {
    /// Prefer double quotes, fall back to single quotes, then to a
    /// multi-line block.
    #[default]
    Normal,
    /// Additionally reject a quote style when the other quote character
    /// appears adjacent to whitespace inside the text.
    AvoidEmbedded,
}

/// Classify a value without rendering it.
pub fn data_kind_of(value: &CifValue, mode: QuotingMode) -> DataKind {
    match value {
        CifValue::Null => DataKind::NullValue,
        CifValue::Int(_) => DataKind::Integer,
        CifValue::Float(_) => DataKind::Float,
        CifValue::Text(text) => classify_text(text, mode),
    }
}

/// Render a value to its exact serialized text and report its kind.
pub fn format_value(value: &CifValue, mode: QuotingMode) -> (String, DataKind) {
    match value {
        CifValue::Null => (NULL_UNKNOWN.to_string(), DataKind::NullValue),
        CifValue::Int(i) => (i.to_string(), DataKind::Integer),
        CifValue::Float(x) => (x.to_string(), DataKind::Float),
        CifValue::Text(text) => {
            let kind = classify_text(text, mode);
            (render_text(text, kind), kind)
        }
    }
}

fn classify_text(text: &str, mode: QuotingMode) -> DataKind {
    // Numeric inference outranks the marker checks: "007" is an integer,
    // while "." fails the float pattern and falls through to NullValue.
    if INT_RE.is_match(text) {
        return DataKind::Integer;
    }
    if FLOAT_RE.is_match(text) {
        return DataKind::Float;
    }
    if text == NULL_INAPPLICABLE || text == NULL_UNKNOWN || text.is_empty() {
        return DataKind::NullValue;
    }
    if !WS_AND_QUOTES_RE.is_match(text) {
        if text.starts_with('_') {
            return DataKind::ItemName;
        }
        return DataKind::UnquotedString;
    }
    if text.contains('\n') || text.contains('\r') {
        return DataKind::MultiLineString;
    }
    let (double_ok, single_ok) = match mode {
        QuotingMode::Normal => (!text.contains('"'), !text.contains('\'')),
        QuotingMode::AvoidEmbedded => (
            !text.contains('"') && !SQ_WS_RE.is_match(text),
            !text.contains('\'') && !DQ_WS_RE.is_match(text),
        ),
    };
    if double_ok {
        DataKind::DoubleQuotedString
    } else if single_ok {
        DataKind::SingleQuotedString
    } else {
        DataKind::MultiLineString
    }
}

fn render_text(text: &str, kind: DataKind) -> String {
    match kind {
        DataKind::NullValue => {
            if text.is_empty() {
                NULL_INAPPLICABLE.to_string()
            } else {
                text.to_string()
            }
        }
        DataKind::Integer | DataKind::Float | DataKind::UnquotedString => text.to_string(),
        DataKind::ItemName | DataKind::DoubleQuotedString => format!("\"{text}\""),
        DataKind::SingleQuotedString => format!("'{text}'"),
        DataKind::MultiLineString => semicolon_block(text),
    }
}

/// Wrap text in a semicolon-delimited block: a leading newline, `;`, the raw
/// text, and a closing `;` followed by a newline. If the text already ends
/// with a newline the closing `;` follows it immediately.
fn semicolon_block(text: &str) -> String {
    if text.ends_with('\n') {
        format!("\n;{text};\n")
    } else {
        format!("\n;{text}\n;\n")
    }
}
