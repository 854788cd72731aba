//! Typed extraction of text fragments.
//!
//! A missing fragment yields the zero value of the requested kind. A fragment
//! that fails numeric conversion is not an error: it is re-read as text, so a
//! score column showing `爆` comes back as `FieldValue::Text("爆")`.

use crate::types::FieldValue;
use scraper::ElementRef;

/// Output kind requested from [`coerce`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Trimmed text
    Text,
    /// Signed integer
    Integer,
    /// Floating-point number
    Float,
}

/// Convert an optional text fragment into a value of `kind`
pub fn coerce(fragment: Option<&str>, kind: FieldKind) -> FieldValue {
    let Some(raw) = fragment else {
        return match kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Integer => FieldValue::Integer(0),
            FieldKind::Float => FieldValue::Float(0.0),
        };
    };

    let text = raw.trim();
    match kind {
        FieldKind::Text => FieldValue::Text(text.to_string()),
        FieldKind::Integer => text
            .parse::<i64>()
            .map(FieldValue::Integer)
            .unwrap_or_else(|_| coerce(fragment, FieldKind::Text)),
        FieldKind::Float => text
            .parse::<f64>()
            .map(FieldValue::Float)
            .unwrap_or_else(|_| coerce(fragment, FieldKind::Text)),
    }
}

/// Concatenated text of an element and all its descendants
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// [`coerce`] applied to a parsed element
pub fn coerce_element(element: Option<ElementRef<'_>>, kind: FieldKind) -> FieldValue {
    let text = element.map(element_text);
    coerce(text.as_deref(), kind)
}

/// Text of an optional element, trimmed; empty when absent
pub fn text_of(element: Option<ElementRef<'_>>) -> String {
    match coerce_element(element, FieldKind::Text) {
        FieldValue::Text(s) => s,
        other => other.to_string(),
    }
}
