//! Animation requests.
//!
//! Every public animation operation takes an [`AnimationRequest`]: the
//! target element, the ending style values, and whatever optional knobs
//! the caller wants (starting values, units, duration, easing, a class
//! to toggle for the animation's duration, lifecycle callbacks, or the
//! `skip_anim` escape hatch that applies the end state synchronously).
//!
//! Ending values must cover every property being animated; that is a
//! caller contract, not something defended here. Starting values are
//! optional — the element's current style is read as the implicit start.

use std::collections::BTreeMap;
use std::fmt;

use lark_device::Element;

/// One-shot lifecycle callback.
pub type Callback = Box<dyn FnOnce()>;

/// Style-property name → numeric value.
pub type StyleValues = BTreeMap<String, f64>;

/// Style-property name → unit suffix.
pub type UnitMap = BTreeMap<String, String>;

/// Input to every animation operation.
pub struct AnimationRequest {
    /// Target element handle.
    pub el: Element,
    /// Optional explicit starting values.
    pub from: Option<StyleValues>,
    /// Ending values; required for every animated property.
    pub to: StyleValues,
    /// Per-property unit overrides.
    pub units: UnitMap,
    /// Animation duration in milliseconds.
    pub duration_ms: Option<f32>,
    /// Public easing-curve name; absent or unrecognised means linear.
    pub easing: Option<String>,
    /// Class toggled on the element for the animation's duration.
    pub class_name: Option<String>,
    /// Apply the end state synchronously instead of animating.
    pub skip_anim: bool,
    /// Invoked when the animation starts.
    pub on_start: Option<Callback>,
    /// Invoked exactly once when the end state has been applied.
    pub on_complete: Option<Callback>,
}

impl AnimationRequest {
    /// Create a request targeting `el`, with no ending values yet.
    pub fn new(el: &Element) -> Self {
        Self {
            el: el.clone(),
            from: None,
            to: StyleValues::new(),
            units: UnitMap::new(),
            duration_ms: None,
            easing: None,
            class_name: None,
            skip_anim: false,
            on_start: None,
            on_complete: None,
        }
    }

    /// Set an ending value for a property.
    pub fn to(mut self, property: &str, value: f64) -> Self {
        self.to.insert(property.to_string(), value);
        self
    }

    /// Set an explicit starting value for a property.
    pub fn from(mut self, property: &str, value: f64) -> Self {
        self.from
            .get_or_insert_with(StyleValues::new)
            .insert(property.to_string(), value);
        self
    }

    /// Set the unit written after a property's value.
    pub fn unit(mut self, property: &str, unit: &str) -> Self {
        self.units.insert(property.to_string(), unit.to_string());
        self
    }

    pub fn duration_ms(mut self, ms: f32) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    pub fn easing(mut self, name: &str) -> Self {
        self.easing = Some(name.to_string());
        self
    }

    pub fn class_name(mut self, class: &str) -> Self {
        self.class_name = Some(class.to_string());
        self
    }

    pub fn skip_anim(mut self, skip: bool) -> Self {
        self.skip_anim = skip;
        self
    }

    pub fn on_start(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_start = Some(Box::new(callback));
        self
    }

    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for AnimationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationRequest")
            .field("el", &self.el.id())
            .field("from", &self.from)
            .field("to", &self.to)
            .field("units", &self.units)
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .field("class_name", &self.class_name)
            .field("skip_anim", &self.skip_anim)
            .field("on_start", &self.on_start.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}
