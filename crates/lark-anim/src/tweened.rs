//! The tween-backed animation modifier.
//!
//! Operations return immediately and the requested end state is reached
//! asynchronously, one scheduler tick at a time. Each operation builds a
//! tween task around the request and registers it with the scheduler's
//! engine; the task's lifecycle hooks carry the side effects:
//!
//! - start: toggle the request's class on (`"not" + class` comes off,
//!   the class goes on) and flip the top-level element from
//!   `notanimating` to `animating`, then invoke the start callback.
//! - update: write each interpolated value into the element style with
//!   its unit (request unit, else the property's default, else none).
//! - complete: reverse the class toggles and invoke the completion
//!   callback, exactly once.
//!
//! A request with `skip_anim` set bypasses the engine entirely and gets
//! the no-op modifier's synchronous behaviour.

use lark_device::Element;

use crate::easing;
use crate::modifier::AnimationModifier;
use crate::noop;
use crate::request::{AnimationRequest, StyleValues};
use crate::scheduler::SchedulerHandle;
use crate::tween::Tween;
use crate::types::AnimationId;
use crate::units;

/// Duration used when a request does not carry one.
pub const DEFAULT_DURATION_MS: f32 = 840.0;

/// Class flipped on the top-level element while any animation runs.
const ANIMATING_CLASS: &str = "animating";
const NOT_ANIMATING_CLASS: &str = "notanimating";

/// Modifier that interpolates towards end states over time.
pub struct TweenedModifier {
    top_level: Element,
    scheduler: SchedulerHandle,
}

impl TweenedModifier {
    /// Create a modifier animating against the process-wide scheduler.
    ///
    /// `top_level` is the application root element whose class list
    /// reflects global "any animation active" state.
    pub fn new(top_level: Element) -> Self {
        Self::with_scheduler(top_level, SchedulerHandle::global())
    }

    /// Create a modifier against a specific scheduler (tests, embedders).
    pub fn with_scheduler(top_level: Element, scheduler: SchedulerHandle) -> Self {
        Self {
            top_level,
            scheduler,
        }
    }

    /// Shared tween primitive behind every animating operation.
    ///
    /// Resolves easing and duration, wires the lifecycle hooks, and
    /// registers the task. The caller has already filled `from`.
    fn tween(&mut self, mut request: AnimationRequest) -> AnimationId {
        log::debug!("tweening {request:?}");
        let from = request.from.take().unwrap_or_default();
        let duration_ms = request.duration_ms.unwrap_or(DEFAULT_DURATION_MS);
        let curve = easing::resolve_optional(request.easing.as_deref());

        let el = request.el.clone();
        let top_level = self.top_level.clone();
        let class_name = request.class_name.clone();
        let on_start = request.on_start.take();
        let on_complete = request.on_complete.take();
        let units = std::mem::take(&mut request.units);

        let start_el = el.clone();
        let start_top = top_level.clone();
        let start_class = class_name.clone();
        let update_el = el.clone();

        let tween = Tween::new(from, request.to, duration_ms)
            .with_easing(curve)
            .on_start(move || {
                if let Some(class) = &start_class {
                    start_el.remove_class(&format!("not{class}"));
                    start_el.add_class(class);
                }
                start_top.remove_class(NOT_ANIMATING_CLASS);
                start_top.add_class(ANIMATING_CLASS);
                if let Some(callback) = on_start {
                    callback();
                }
            })
            .on_update(move |values| {
                for (property, value) in values {
                    let unit = units
                        .get(property)
                        .map(String::as_str)
                        .or_else(|| units::default_unit(property))
                        .unwrap_or("");
                    update_el.set_style_property(property, &format!("{value}{unit}"));
                }
            })
            .on_complete(move || {
                if let Some(class) = &class_name {
                    el.remove_class(class);
                    el.add_class(&format!("not{class}"));
                }
                top_level.remove_class(ANIMATING_CLASS);
                top_level.add_class(NOT_ANIMATING_CLASS);
                if let Some(callback) = on_complete {
                    callback();
                }
            });

        self.scheduler.register(tween)
    }

    /// Starting values for each animated property: explicit request
    /// values first, then the element's current style, then `fallback`.
    fn implicit_from(request: &AnimationRequest, fallback: f64) -> StyleValues {
        let explicit = request.from.clone().unwrap_or_default();
        request
            .to
            .keys()
            .map(|property| {
                let value = explicit
                    .get(property)
                    .copied()
                    .or_else(|| request.el.style_numeric(property))
                    .unwrap_or(fallback);
                (property.clone(), value)
            })
            .collect()
    }
}

impl AnimationModifier for TweenedModifier {
    fn scroll_element_to(&mut self, mut request: AnimationRequest) -> Option<AnimationId> {
        if request.skip_anim {
            noop::apply_scroll_end_state(request);
            return None;
        }
        // Requested offsets and explicit starts are in content
        // coordinates; stored positions are their negation.
        request.to = negate(&request.to);
        request.from = request.from.as_ref().map(negate);
        request.from = Some(Self::implicit_from(&request, 0.0));
        Some(self.tween(request))
    }

    fn move_element_to(&mut self, mut request: AnimationRequest) -> Option<AnimationId> {
        if request.skip_anim {
            noop::apply_move_end_state(request);
            return None;
        }
        request.from = Some(Self::implicit_from(&request, 0.0));
        Some(self.tween(request))
    }

    fn hide_element(&mut self, mut request: AnimationRequest) -> Option<AnimationId> {
        if request.skip_anim {
            noop::apply_hide_end_state(request);
            return None;
        }
        request.to = single("opacity", 0.0);
        request.from = Some(single(
            "opacity",
            Self::implicit_from(&request, 1.0)["opacity"],
        ));
        let el = request.el.clone();
        let caller_complete = request.on_complete.take();
        request.on_complete = Some(Box::new(move || {
            el.set_style_property("visibility", "hidden");
            if let Some(callback) = caller_complete {
                callback();
            }
        }));
        Some(self.tween(request))
    }

    fn show_element(&mut self, mut request: AnimationRequest) -> Option<AnimationId> {
        if request.skip_anim {
            noop::apply_show_end_state(request);
            return None;
        }
        request.el.set_style_property("visibility", "visible");
        request.to = single("opacity", 1.0);
        request.from = Some(single(
            "opacity",
            Self::implicit_from(&request, 0.0)["opacity"],
        ));
        Some(self.tween(request))
    }

    fn tween_element_style(&mut self, mut request: AnimationRequest) -> Option<AnimationId> {
        if request.skip_anim {
            noop::apply_tween_end_state(request);
            return None;
        }
        request.from = Some(Self::implicit_from(&request, 0.0));
        Some(self.tween(request))
    }

    fn is_animation_disabled(&self) -> bool {
        false
    }
}

/// Negate every value in a map, folding `-0` into `0`.
fn negate(values: &StyleValues) -> StyleValues {
    values
        .iter()
        .map(|(property, value)| {
            let negated = if *value == 0.0 { 0.0 } else { -value };
            (property.clone(), negated)
        })
        .collect()
}

fn single(property: &str, value: f64) -> StyleValues {
    let mut values = StyleValues::new();
    values.insert(property.to_string(), value);
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualTicker;
    use std::cell::Cell;
    use std::rc::Rc;

    fn modifier_under_test() -> (TweenedModifier, ManualTicker, Element) {
        let ticker = ManualTicker::new();
        let top_level = Element::new("app");
        let modifier =
            TweenedModifier::with_scheduler(top_level.clone(), ticker.scheduler());
        (modifier, ticker, top_level)
    }

    fn completion_counter() -> (Rc<Cell<u32>>, impl FnOnce()) {
        let counter = Rc::new(Cell::new(0));
        let handle = counter.clone();
        (counter, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn test_move_element_to_interpolates_position() {
        let (mut modifier, ticker, _) = modifier_under_test();
        let div = Element::new("panel");

        let id = modifier.move_element_to(
            AnimationRequest::new(&div)
                .from("left", 0.0)
                .to("left", 100.0)
                .duration_ms(100.0)
                .easing("linear"),
        );
        assert!(id.is_some());

        ticker.step_ms(50.0);
        assert_eq!(div.style_property("left").as_deref(), Some("50px"));

        ticker.step_ms(50.0);
        assert_eq!(div.style_property("left").as_deref(), Some("100px"));
    }

    #[test]
    fn test_move_reads_current_style_as_implicit_start() {
        let (mut modifier, ticker, _) = modifier_under_test();
        let div = Element::new("panel");
        div.set_style_property("left", "40px");

        modifier.move_element_to(
            AnimationRequest::new(&div)
                .to("left", 140.0)
                .duration_ms(100.0),
        );
        ticker.step_ms(50.0);
        assert_eq!(div.style_property("left").as_deref(), Some("90px"));
    }

    #[test]
    fn test_scroll_element_to_negates_offsets_at_completion() {
        let (mut modifier, ticker, _) = modifier_under_test();
        let div = Element::new("content");

        let (completions, on_complete) = completion_counter();
        modifier.scroll_element_to(
            AnimationRequest::new(&div)
                .to("left", 100.0)
                .to("top", 200.0)
                .duration_ms(60.0)
                .on_complete(on_complete),
        );

        ticker.step_frames(4, 20.0);
        assert_eq!(div.style_property("left").as_deref(), Some("-100px"));
        assert_eq!(div.style_property("top").as_deref(), Some("-200px"));
        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn test_class_lifecycle() {
        let (mut modifier, ticker, top_level) = modifier_under_test();
        let div = Element::new("carousel");

        modifier.move_element_to(
            AnimationRequest::new(&div)
                .to("left", 10.0)
                .duration_ms(100.0)
                .class_name("sliding"),
        );

        // Nothing toggles until the first tick.
        assert!(!div.has_class("sliding"));
        assert!(!top_level.has_class(ANIMATING_CLASS));

        ticker.step_ms(50.0);
        assert!(div.has_class("sliding"));
        assert!(!div.has_class("notsliding"));
        assert!(top_level.has_class(ANIMATING_CLASS));
        assert!(!top_level.has_class(NOT_ANIMATING_CLASS));

        ticker.step_ms(50.0);
        assert!(!div.has_class("sliding"));
        assert!(div.has_class("notsliding"));
        assert!(!top_level.has_class(ANIMATING_CLASS));
        assert!(top_level.has_class(NOT_ANIMATING_CLASS));
    }

    #[test]
    fn test_start_callback_fires_before_completion() {
        let (mut modifier, ticker, _) = modifier_under_test();
        let div = Element::new("panel");

        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let (starts, completes) = (order.clone(), order.clone());
        modifier.move_element_to(
            AnimationRequest::new(&div)
                .to("left", 10.0)
                .duration_ms(40.0)
                .on_start(move || starts.borrow_mut().push("start"))
                .on_complete(move || completes.borrow_mut().push("complete")),
        );

        ticker.step_frames(3, 20.0);
        assert_eq!(*order.borrow(), vec!["start", "complete"]);
    }

    #[test]
    fn test_hide_element_sets_visibility_at_completion() {
        let (mut modifier, ticker, _) = modifier_under_test();
        let div = Element::new("panel");
        div.set_style_property("opacity", "1");

        let (completions, on_complete) = completion_counter();
        modifier.hide_element(
            AnimationRequest::new(&div)
                .duration_ms(100.0)
                .easing("linear")
                .on_complete(on_complete),
        );

        ticker.step_ms(50.0);
        // Mid-fade the element is still visible.
        assert_eq!(div.style_property("visibility"), None);
        assert_eq!(div.style_numeric("opacity"), Some(0.5));

        ticker.step_ms(50.0);
        assert_eq!(div.style_numeric("opacity"), Some(0.0));
        assert_eq!(div.style_property("visibility").as_deref(), Some("hidden"));
        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn test_show_element_sets_visibility_up_front() {
        let (mut modifier, ticker, _) = modifier_under_test();
        let div = Element::new("panel");
        div.set_style_property("opacity", "0");

        modifier.show_element(AnimationRequest::new(&div).duration_ms(100.0));
        assert_eq!(div.style_property("visibility").as_deref(), Some("visible"));

        ticker.step_frames(6, 20.0);
        assert_eq!(div.style_numeric("opacity"), Some(1.0));
    }

    #[test]
    fn test_tween_element_style_uses_default_units() {
        let (mut modifier, ticker, _) = modifier_under_test();
        let div = Element::new("panel");

        modifier.tween_element_style(
            AnimationRequest::new(&div)
                .from("width", 60.0)
                .to("width", 100.0)
                .duration_ms(40.0),
        );
        ticker.step_frames(2, 20.0);
        assert_eq!(div.style_property("width").as_deref(), Some("100px"));
    }

    #[test]
    fn test_tween_element_style_request_units_win() {
        let (mut modifier, ticker, _) = modifier_under_test();
        let div = Element::new("panel");

        modifier.tween_element_style(
            AnimationRequest::new(&div)
                .from("width", 60.0)
                .to("width", 100.0)
                .unit("width", "%")
                .duration_ms(40.0),
        );
        ticker.step_frames(2, 20.0);
        assert_eq!(div.style_property("width").as_deref(), Some("100%"));
    }

    #[test]
    fn test_skip_anim_applies_end_state_synchronously() {
        let (mut modifier, ticker, top_level) = modifier_under_test();
        let div = Element::new("panel");

        let (completions, on_complete) = completion_counter();
        let id = modifier.scroll_element_to(
            AnimationRequest::new(&div)
                .to("left", 100.0)
                .skip_anim(true)
                .on_complete(on_complete),
        );

        assert!(id.is_none());
        assert_eq!(completions.get(), 1);
        assert_eq!(div.style_property("left").as_deref(), Some("-100px"));
        // No task registered, no class toggled.
        assert_eq!(ticker.scheduler().active_count(), 0);
        assert!(!top_level.has_class(ANIMATING_CLASS));
    }

    #[test]
    fn test_unknown_easing_falls_back_to_linear() {
        let (mut modifier, ticker, _) = modifier_under_test();
        let div = Element::new("panel");

        modifier.move_element_to(
            AnimationRequest::new(&div)
                .from("left", 0.0)
                .to("left", 100.0)
                .duration_ms(100.0)
                .easing("easeInOutWobble"),
        );
        ticker.step_ms(50.0);
        assert_eq!(div.style_numeric("left"), Some(50.0));
    }

    #[test]
    fn test_default_duration_applies_when_absent() {
        let (mut modifier, ticker, _) = modifier_under_test();
        let div = Element::new("panel");

        let (completions, on_complete) = completion_counter();
        modifier.move_element_to(
            AnimationRequest::new(&div)
                .to("left", 10.0)
                .on_complete(on_complete),
        );

        ticker.step_ms(f64::from(DEFAULT_DURATION_MS) / 2.0);
        assert_eq!(completions.get(), 0);
        ticker.step_ms(f64::from(DEFAULT_DURATION_MS));
        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let (mut modifier, ticker, _) = modifier_under_test();
        let div = Element::new("panel");

        let (completions, on_complete) = completion_counter();
        modifier.move_element_to(
            AnimationRequest::new(&div)
                .to("left", 10.0)
                .duration_ms(0.0)
                .on_complete(on_complete),
        );
        assert_eq!(completions.get(), 0);
        ticker.step_ms(1.0);
        assert_eq!(completions.get(), 1);
        assert_eq!(div.style_property("left").as_deref(), Some("10px"));
    }

    #[test]
    fn test_is_animation_disabled() {
        let (modifier, _, _) = modifier_under_test();
        assert!(!modifier.is_animation_disabled());
    }
}
