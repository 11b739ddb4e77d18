//! Per-element style storage.
//!
//! Styles are stored exactly as written (`"-100px"`, `"0.5"`, `"hidden"`),
//! the way a browser engine's inline style object holds them. Reading a
//! property that was never written yields `None`; writing always assigns,
//! whether or not the property existed before.

use std::collections::BTreeMap;

/// An element's inline style: property name → written value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    properties: BTreeMap<String, String>,
}

impl Style {
    /// Create an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a property value, creating the property if it did not exist.
    pub fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    /// Read a property's written value.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Read the numeric part of a property value.
    ///
    /// `"-100px"` reads as `-100.0`, `"0.5"` as `0.5`. Unset, empty, and
    /// non-numeric values (`"hidden"`) read as `None`.
    pub fn numeric_value(&self, name: &str) -> Option<f64> {
        self.property(name).and_then(leading_float)
    }

    /// Number of properties that have been written.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True if no property has ever been written.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over (property, value) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parse the leading float of a written style value, ignoring any unit
/// suffix.
fn leading_float(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    for (i, c) in value.char_indices() {
        match c {
            '+' | '-' if i == 0 => end = i + 1,
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            '.' if !value[..i].contains('.') => end = i + 1,
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    value[..end].parse().ok()
}
