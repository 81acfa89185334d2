use std::time::{Duration, Instant};

use crate::{Rect, Transform};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(250),
            easing: Easing::EaseOut,
            delay: Duration::ZERO,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    pub fn ease_out(duration: Duration) -> Self {
        Self::tween(duration, Easing::EaseOut)
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Rect {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Rect {
            x: self.x.interpolate(&other.x, t),
            y: self.y.interpolate(&other.y, t),
            w: self.w.interpolate(&other.w, t),
            h: self.h.interpolate(&other.h, t),
        }
    }
}

impl Interpolate for Transform {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Transform {
            translate_x: self.translate_x.interpolate(&other.translate_x, t),
            translate_y: self.translate_y.interpolate(&other.translate_y, t),
            scale_x: self.scale_x.interpolate(&other.scale_x, t),
            scale_y: self.scale_y.interpolate(&other.scale_y, t),
        }
    }
}

/// Identifies one running animation on a [`Timeline`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationHandle(u64);

struct Active {
    id: u64,
    started: Instant,
    spec: AnimationSpec,
    apply: Box<dyn FnMut(f32)>,
    on_complete: Option<Box<dyn FnOnce(bool)>>,
}

/// Callback-driven animation driver.
///
/// Every animation is a two-phase operation: [`Timeline::animate`] starts it
/// and returns a handle; completion is delivered asynchronously through the
/// `on_complete` callback with `completed == true` when the animation ran to
/// its full duration, or `completed == false` when it was cancelled mid-way.
///
/// The driver is advanced explicitly with [`Timeline::tick`], which takes the
/// current instant. Tests pass synthetic instants; a platform loop passes
/// `Instant::now()` each frame.
///
/// Completion callbacks must not call back into the same `Timeline`; callers
/// that need follow-up scheduling do it after `tick` returns.
pub struct Timeline {
    running: Vec<Active>,
    next_id: u64,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            running: Vec::new(),
            next_id: 1,
        }
    }

    /// Start an animation at `now`. The starting visual state is the caller's
    /// responsibility; `apply` receives eased progress in `0.0..=1.0` on every
    /// tick, including exactly `1.0` on the final one.
    pub fn animate(
        &mut self,
        now: Instant,
        spec: AnimationSpec,
        apply: impl FnMut(f32) + 'static,
        on_complete: impl FnOnce(bool) + 'static,
    ) -> AnimationHandle {
        let id = self.next_id;
        self.next_id += 1;
        log::trace!("timeline: start animation {id} ({:?})", spec.duration);
        self.running.push(Active {
            id,
            started: now,
            spec,
            apply: Box::new(apply),
            on_complete: Some(Box::new(on_complete)),
        });
        AnimationHandle(id)
    }

    /// Advance all running animations to `now`. Returns the number still
    /// running afterwards.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut finished: Vec<Box<dyn FnOnce(bool)>> = Vec::new();
        let mut i = 0;
        while i < self.running.len() {
            let active = &mut self.running[i];
            let elapsed = now.saturating_duration_since(active.started);
            if elapsed < active.spec.delay {
                i += 1;
                continue;
            }
            let animating_for = elapsed - active.spec.delay;
            let t = if active.spec.duration.is_zero() {
                1.0
            } else {
                (animating_for.as_secs_f32() / active.spec.duration.as_secs_f32()).min(1.0)
            };
            (active.apply)(active.spec.easing.interpolate(t));
            if t >= 1.0 {
                let mut done = self.running.remove(i);
                if let Some(f) = done.on_complete.take() {
                    finished.push(f);
                }
            } else {
                i += 1;
            }
        }
        for f in finished {
            f(true);
        }
        self.running.len()
    }

    /// Cancel one animation. Its applied state is left wherever the last tick
    /// put it; `on_complete(false)` fires so the owner can roll back.
    pub fn cancel(&mut self, handle: AnimationHandle) -> bool {
        let Some(idx) = self.running.iter().position(|a| a.id == handle.0) else {
            return false;
        };
        log::trace!("timeline: cancel animation {}", handle.0);
        let mut active = self.running.remove(idx);
        if let Some(f) = active.on_complete.take() {
            f(false);
        }
        true
    }

    /// Cancel everything, delivering `completed == false` to each owner.
    pub fn cancel_all(&mut self) {
        let cancelled = std::mem::take(&mut self.running);
        for mut active in cancelled {
            log::trace!("timeline: cancel animation {}", active.id);
            if let Some(f) = active.on_complete.take() {
                f(false);
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    pub fn running_count(&self) -> usize {
        self.running.len()
    }
}
