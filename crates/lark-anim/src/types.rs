//! Core animation types.

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for an in-flight animation.
///
/// Returned from the animating operations so callers can correlate an
/// animation with later work (chaining). There is no cancellation surface
/// behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(pub u64);

impl AnimationId {
    /// Generate a new process-unique animation ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AnimationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle state of a tween task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    /// Registered with the engine, not yet ticked.
    #[default]
    Pending,
    /// Ticked at least once; interpolating.
    Running,
    /// Reached the end of its duration; hooks all fired.
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_id_uniqueness() {
        let a = AnimationId::new();
        let b = AnimationId::new();
        let c = AnimationId::default();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_animation_state_default() {
        assert_eq!(AnimationState::default(), AnimationState::Pending);
    }
}
