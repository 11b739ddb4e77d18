//! Default unit resolution for animated style properties.
//!
//! When a request does not name a unit for a property, the animating
//! update hook falls back to this table; properties not listed here are
//! written without a unit (opacity and friends).

/// Per-property default units.
const DEFAULT_UNITS: &[(&str, &str)] = &[
    ("top", "px"),
    ("left", "px"),
    ("bottom", "px"),
    ("right", "px"),
    ("width", "px"),
    ("height", "px"),
];

/// Default unit for a style property, if it has one.
pub fn default_unit(property: &str) -> Option<&'static str> {
    DEFAULT_UNITS
        .iter()
        .find(|(name, _)| *name == property)
        .map(|&(_, unit)| unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_and_size_properties_default_to_px() {
        for property in ["top", "left", "bottom", "right", "width", "height"] {
            assert_eq!(default_unit(property), Some("px"), "{property}");
        }
    }

    #[test]
    fn test_unitless_properties_have_no_default() {
        assert_eq!(default_unit("opacity"), None);
        assert_eq!(default_unit("visibility"), None);
        assert_eq!(default_unit(""), None);
    }
}
