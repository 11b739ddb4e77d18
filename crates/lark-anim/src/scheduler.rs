//! The frame scheduler.
//!
//! One process-wide loop ticks the interpolation engine, however many
//! animations are in flight. The scheduler is created lazily the first
//! time an animation registers and then lives for the life of the
//! process; nothing ever stops it. Ticks advance the engine by elapsed
//! wall time, so a late tick covers the gap it missed — ticks are
//! dropped, never queued.
//!
//! Hosts with a per-refresh callback facility call
//! [`SchedulerHandle::tick`] from that callback and re-arm it after each
//! tick. Hosts without one run an [`IntervalTicker`] at a fixed rate.
//! Tests drive a private scheduler through a [`ManualTicker`] and never
//! touch real time.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::tween::{Tween, TweenEngine};
use crate::types::AnimationId;

/// Frame rate used when the host has no refresh callback facility.
pub const FALLBACK_FPS: u32 = 50;

/// Monotonic time source, in milliseconds.
pub trait Clock {
    fn elapsed_ms(&self) -> f64;
}

/// Real wall-clock time since construction.
struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn elapsed_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-cranked clock for tests.
#[derive(Clone, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_ms(&self, ms: f64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

impl Clock for ManualClock {
    fn elapsed_ms(&self) -> f64 {
        self.now_ms.get()
    }
}

/// The scheduler itself: the engine plus tick bookkeeping.
struct FrameScheduler {
    engine: TweenEngine,
    clock: Box<dyn Clock>,
    last_tick_ms: f64,
    started: bool,
}

impl FrameScheduler {
    fn with_clock(clock: Box<dyn Clock>) -> Self {
        let last_tick_ms = clock.elapsed_ms();
        Self {
            engine: TweenEngine::new(),
            clock,
            last_tick_ms,
            started: false,
        }
    }

    fn register(&mut self, tween: Tween) -> AnimationId {
        if !self.started {
            self.started = true;
            log::debug!("frame scheduler started");
        }
        self.engine.register(tween)
    }

    fn tick(&mut self) {
        let now = self.clock.elapsed_ms();
        let delta = (now - self.last_tick_ms).max(0.0);
        self.last_tick_ms = now;
        self.engine.update(delta as f32);
    }
}

/// Cloneable handle to a scheduler; clones share the same loop.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Rc<RefCell<FrameScheduler>>,
}

impl SchedulerHandle {
    /// The process-wide scheduler, created on first access.
    ///
    /// Every device on the thread shares this loop; at most one loop is
    /// ever active no matter how many animations are started.
    pub fn global() -> Self {
        thread_local! {
            static GLOBAL: SchedulerHandle =
                SchedulerHandle::with_clock(Box::new(MonotonicClock::new()));
        }
        GLOBAL.with(|handle| handle.clone())
    }

    /// A private scheduler over an injected clock. Intended for tests
    /// and embedders with their own notion of time.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(FrameScheduler::with_clock(clock))),
        }
    }

    /// Register a tween; lazily starts the loop on first use.
    pub fn register(&self, tween: Tween) -> AnimationId {
        self.inner.borrow_mut().register(tween)
    }

    /// Advance the engine by the wall time elapsed since the last tick.
    pub fn tick(&self) {
        self.inner.borrow_mut().tick();
    }

    pub fn active_count(&self) -> usize {
        self.inner.borrow().engine.active_count()
    }

    /// True once the first animation has registered.
    pub fn is_started(&self) -> bool {
        self.inner.borrow().started
    }
}

/// Fixed-rate fallback driver for hosts without a refresh callback.
pub struct IntervalTicker {
    period: Duration,
}

impl IntervalTicker {
    pub fn new() -> Self {
        Self::with_fps(FALLBACK_FPS)
    }

    pub fn with_fps(fps: u32) -> Self {
        Self {
            period: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Tick once immediately, then once per interval, for the life of
    /// the process. Never returns; call it from the host's dedicated
    /// animation loop.
    pub fn run(&self, scheduler: &SchedulerHandle) -> ! {
        scheduler.tick();
        loop {
            std::thread::sleep(self.period);
            scheduler.tick();
        }
    }
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Manually-steppable driver: a private scheduler over a [`ManualClock`].
pub struct ManualTicker {
    clock: ManualClock,
    scheduler: SchedulerHandle,
}

impl ManualTicker {
    pub fn new() -> Self {
        let clock = ManualClock::new();
        let scheduler = SchedulerHandle::with_clock(Box::new(clock.clone()));
        Self { clock, scheduler }
    }

    pub fn scheduler(&self) -> SchedulerHandle {
        self.scheduler.clone()
    }

    /// Advance time by `ms` and deliver one tick.
    pub fn step_ms(&self, ms: f64) {
        self.clock.advance_ms(ms);
        self.scheduler.tick();
    }

    /// Deliver `frames` ticks of `frame_ms` each.
    pub fn step_frames(&self, frames: u32, frame_ms: f64) {
        for _ in 0..frames {
            self.step_ms(frame_ms);
        }
    }
}

impl Default for ManualTicker {
    fn default() -> Self {
        Self::new()
    }
}
