//! The animation-modifier contract.
//!
//! A modifier is the pluggable implementation of the device's animation
//! surface, chosen at device construction. Two implementations ship:
//! [`crate::noop::NoopModifier`] applies requested end states
//! immediately, [`crate::tweened::TweenedModifier`] interpolates towards
//! them over time. Application code holds a `Box<dyn AnimationModifier>`
//! and never knows which it got.

use crate::request::AnimationRequest;
use crate::types::AnimationId;

/// Pluggable animation behaviour installed on a device.
///
/// Operations return `Some(id)` when an interpolation task was started
/// and `None` when the end state was applied synchronously. Whatever the
/// implementation, a request's completion callback is invoked exactly
/// once per operation.
///
/// Starting a new animation on an element already mid-animation does
/// not cancel the one in flight; the two race tick by tick and the last
/// write per property wins. Callers who care should wait for completion
/// before re-animating.
pub trait AnimationModifier {
    /// Scroll an element's content to the requested offsets.
    ///
    /// Offsets follow the "scroll content, not viewport" convention:
    /// scrolling to `{left: 100}` moves the element to `left: -100px`.
    fn scroll_element_to(&mut self, request: AnimationRequest) -> Option<AnimationId>;

    /// Move an element to the requested position values, as given.
    fn move_element_to(&mut self, request: AnimationRequest) -> Option<AnimationId>;

    /// Fade an element out and mark it `visibility: hidden`.
    fn hide_element(&mut self, request: AnimationRequest) -> Option<AnimationId>;

    /// Mark an element `visibility: visible` and fade it in.
    fn show_element(&mut self, request: AnimationRequest) -> Option<AnimationId>;

    /// Animate arbitrary numeric style properties towards the request's
    /// ending values.
    fn tween_element_style(&mut self, request: AnimationRequest) -> Option<AnimationId>;

    /// True when operations apply instantly with no visible transition.
    ///
    /// UI code branches on this where behaviour depends on transitions
    /// being perceptible (e.g. skipping a scroll chase).
    fn is_animation_disabled(&self) -> bool;
}
