//! The no-op animation modifier.
//!
//! Installed on devices whose engines animate badly (or not at all):
//! every operation applies its end state synchronously within the call
//! and invokes the completion callback before returning. There is no
//! scheduler interaction and no background task.
//!
//! The end-state appliers live here and are shared with the tweened
//! modifier's `skip_anim` path, which has the same contract.

use crate::modifier::AnimationModifier;
use crate::request::{AnimationRequest, Callback};
use crate::types::AnimationId;

/// Modifier that applies end states instantly.
#[derive(Debug, Default)]
pub struct NoopModifier;

impl NoopModifier {
    pub fn new() -> Self {
        Self
    }
}

impl AnimationModifier for NoopModifier {
    fn scroll_element_to(&mut self, request: AnimationRequest) -> Option<AnimationId> {
        apply_scroll_end_state(request);
        None
    }

    fn move_element_to(&mut self, request: AnimationRequest) -> Option<AnimationId> {
        apply_move_end_state(request);
        None
    }

    fn hide_element(&mut self, request: AnimationRequest) -> Option<AnimationId> {
        apply_hide_end_state(request);
        None
    }

    fn show_element(&mut self, request: AnimationRequest) -> Option<AnimationId> {
        apply_show_end_state(request);
        None
    }

    fn tween_element_style(&mut self, request: AnimationRequest) -> Option<AnimationId> {
        apply_tween_end_state(request);
        None
    }

    fn is_animation_disabled(&self) -> bool {
        true
    }
}

/// Format a pixel value, folding `-0` into `0`.
fn px(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}px")
}

pub(crate) fn apply_scroll_end_state(mut request: AnimationRequest) {
    for (property, value) in &request.to {
        request.el.set_style_property(property, &px(-value));
    }
    fire_completion(request.on_complete.take());
}

pub(crate) fn apply_move_end_state(mut request: AnimationRequest) {
    for (property, value) in &request.to {
        request.el.set_style_property(property, &px(*value));
    }
    fire_completion(request.on_complete.take());
}

pub(crate) fn apply_hide_end_state(mut request: AnimationRequest) {
    request.el.set_style_property("opacity", "0");
    request.el.set_style_property("visibility", "hidden");
    fire_completion(request.on_complete.take());
}

pub(crate) fn apply_show_end_state(mut request: AnimationRequest) {
    request.el.set_style_property("opacity", "1");
    request.el.set_style_property("visibility", "visible");
    fire_completion(request.on_complete.take());
}

pub(crate) fn apply_tween_end_state(mut request: AnimationRequest) {
    for (property, value) in &request.to {
        let unit = request.units.get(property).map(String::as_str).unwrap_or("");
        request
            .el
            .set_style_property(property, &format!("{value}{unit}"));
    }
    fire_completion(request.on_complete.take());
}

fn fire_completion(callback: Option<Callback>) {
    if let Some(callback) = callback {
        callback();
    }
}
