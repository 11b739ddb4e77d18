//! Tween tasks and the interpolation engine.
//!
//! A [`Tween`] interpolates a map of numeric style values from a start
//! map to an end map over a duration, shaping progress with an easing
//! curve and firing its lifecycle hooks as it goes: start on the first
//! tick, update on every tick (including the completion tick, so the
//! final values are applied before completion is reported), complete
//! exactly once when the duration has elapsed.
//!
//! The [`TweenEngine`] owns every registered task and advances them all
//! by elapsed time on each scheduler tick, in registration order.
//! Finished tasks are dropped after their completion hook runs.

use std::fmt;

use crate::easing::EasingCurve;
use crate::interpolate::Interpolate;
use crate::request::{Callback, StyleValues};
use crate::types::{AnimationId, AnimationState};

/// Per-tick update hook; receives the tween's current value map.
pub type UpdateHook = Box<dyn FnMut(&StyleValues)>;

/// An interpolation task.
pub struct Tween {
    id: AnimationId,
    /// Current value per property; what the update hook observes.
    values: StyleValues,
    start: StyleValues,
    end: StyleValues,
    duration_ms: f32,
    easing: EasingCurve,
    elapsed_ms: f32,
    state: AnimationState,
    on_start: Option<Callback>,
    on_update: Option<UpdateHook>,
    on_complete: Option<Callback>,
}

impl Tween {
    /// Create a tween from `from` to `to` over `duration_ms`, linear.
    ///
    /// Every key of `to` is animated. A key with no starting value
    /// interpolates from zero; extra keys in `from` ride along unchanged
    /// on the value map.
    pub fn new(from: StyleValues, to: StyleValues, duration_ms: f32) -> Self {
        let mut values = from.clone();
        for property in to.keys() {
            let start = from.get(property).copied().unwrap_or(0.0);
            values.insert(property.clone(), start);
        }
        Self {
            id: AnimationId::new(),
            values,
            start: from,
            end: to,
            duration_ms,
            easing: EasingCurve::LINEAR,
            elapsed_ms: 0.0,
            state: AnimationState::Pending,
            on_start: None,
            on_update: None,
            on_complete: None,
        }
    }

    pub fn with_easing(mut self, easing: EasingCurve) -> Self {
        self.easing = easing;
        self
    }

    pub fn on_start(mut self, hook: impl FnOnce() + 'static) -> Self {
        self.on_start = Some(Box::new(hook));
        self
    }

    pub fn on_update(mut self, hook: impl FnMut(&StyleValues) + 'static) -> Self {
        self.on_update = Some(Box::new(hook));
        self
    }

    pub fn on_complete(mut self, hook: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }

    pub fn id(&self) -> AnimationId {
        self.id
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Linear progress through the duration, 0..1.
    ///
    /// A non-positive duration is complete as soon as it is ticked.
    pub fn progress(&self) -> f64 {
        if self.duration_ms > 0.0 {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0) as f64
        } else {
            1.0
        }
    }

    /// Advance by `delta_ms`, firing due hooks.
    ///
    /// Returns `true` while the tween is still active, `false` once it
    /// has finished (the completion hook has then already run).
    pub(crate) fn advance(&mut self, delta_ms: f32) -> bool {
        match self.state {
            AnimationState::Finished => return false,
            AnimationState::Pending => {
                self.state = AnimationState::Running;
                if let Some(hook) = self.on_start.take() {
                    hook();
                }
            }
            AnimationState::Running => {}
        }

        self.elapsed_ms += delta_ms;
        let eased = self.easing.evaluate(self.progress());
        for (property, end) in &self.end {
            let start = self.start.get(property).copied().unwrap_or(0.0);
            self.values
                .insert(property.clone(), start.interpolate(end, eased));
        }
        if let Some(hook) = self.on_update.as_mut() {
            hook(&self.values);
        }

        if self.progress() >= 1.0 {
            self.state = AnimationState::Finished;
            if let Some(hook) = self.on_complete.take() {
                hook();
            }
            return false;
        }
        true
    }
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("progress", &self.progress())
            .field("properties", &self.end.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// The interpolation engine's task set.
#[derive(Debug, Default)]
pub struct TweenEngine {
    tasks: Vec<Tween>,
}

impl TweenEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task; it starts advancing on the next tick.
    pub fn register(&mut self, tween: Tween) -> AnimationId {
        let id = tween.id();
        log::debug!("registered {tween:?}");
        self.tasks.push(tween);
        id
    }

    /// Advance every active task by `delta_ms`, in registration order.
    pub fn update(&mut self, delta_ms: f32) {
        self.tasks.retain_mut(|tween| tween.advance(delta_ms));
    }

    pub fn active_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }
}
