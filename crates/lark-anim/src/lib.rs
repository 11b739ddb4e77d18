//! Animation layer for the Lark TV application framework.
//!
//! This crate provides:
//! - **The modifier contract**: one [`AnimationModifier`] trait with two
//!   implementations, chosen at device construction — [`NoopModifier`]
//!   applies end states instantly, [`TweenedModifier`] interpolates over
//!   time.
//! - **The tween engine**: interpolation tasks with start/update/complete
//!   lifecycle hooks.
//! - **The frame scheduler**: a single lazily-started process-wide loop
//!   that ticks the engine once per frame.
//! - **Easing curves**: the (family, direction) curve set and the route
//!   table from public easing names.
//!
//! # Architecture
//!
//! ```text
//! AnimationModifier (noop | tweened)
//!   └── Tween (from → to, easing, lifecycle hooks)
//!         └── TweenEngine (task set, advanced per tick)
//!               └── FrameScheduler (one per process, lazily started)
//! ```

pub mod easing;
pub mod interpolate;
pub mod modifier;
pub mod noop;
pub mod request;
pub mod scheduler;
pub mod tween;
pub mod tweened;
pub mod types;
pub mod units;

pub use easing::{CurveDirection, CurveFamily, EasingCurve};
pub use interpolate::Interpolate;
pub use modifier::AnimationModifier;
pub use noop::NoopModifier;
pub use request::{AnimationRequest, Callback, StyleValues, UnitMap};
pub use scheduler::{
    Clock, FALLBACK_FPS, IntervalTicker, ManualClock, ManualTicker, SchedulerHandle,
};
pub use tween::{Tween, TweenEngine};
pub use tweened::{DEFAULT_DURATION_MS, TweenedModifier};
pub use types::{AnimationId, AnimationState};
