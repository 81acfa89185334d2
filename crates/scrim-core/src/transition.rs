use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::{AnimationHandle, AnimationSpec, Easing, Layer, Rect, Timeline};

/// Everything one transition event needs: the container, the layers moving in
/// or out, the destination frame, and the channel used to signal completion
/// back to whoever is driving the transition.
///
/// Contexts are cheap to clone; animation callbacks capture a clone and call
/// [`TransitionContext::complete_transition`] from there. The first completion
/// signal wins — later ones are ignored, which keeps interrupted transitions
/// from double-finalizing.
#[derive(Clone)]
pub struct TransitionContext {
    container: Layer,
    from: Option<Layer>,
    to: Option<Layer>,
    final_frame: Rect,
    animated: bool,
    duration: Rc<Cell<Duration>>,
    now: Instant,
    timeline: Rc<RefCell<Timeline>>,
    state: Rc<Cell<Option<bool>>>,
}

impl TransitionContext {
    pub fn new(
        container: Layer,
        timeline: Rc<RefCell<Timeline>>,
        now: Instant,
        animated: bool,
    ) -> Self {
        Self {
            container,
            from: None,
            to: None,
            final_frame: Rect::default(),
            animated,
            duration: Rc::new(Cell::new(Duration::ZERO)),
            now,
            timeline,
            state: Rc::new(Cell::new(None)),
        }
    }

    pub fn with_from(mut self, layer: Layer) -> Self {
        self.from = Some(layer);
        self
    }

    pub fn with_to(mut self, layer: Layer) -> Self {
        self.to = Some(layer);
        self
    }

    pub fn with_final_frame(mut self, frame: Rect) -> Self {
        self.final_frame = frame;
        self
    }

    pub fn container(&self) -> &Layer {
        &self.container
    }

    /// The layer being removed (the presented/visible one during dismissal).
    pub fn from_layer(&self) -> Option<&Layer> {
        self.from.as_ref()
    }

    /// The layer being shown (the presented one during presentation).
    pub fn to_layer(&self) -> Option<&Layer> {
        self.to.as_ref()
    }

    /// Destination frame for the layer being shown, as computed by the
    /// presentation controller.
    pub fn final_frame(&self) -> Rect {
        self.final_frame
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Reference instant at which the transition's animations start.
    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn timeline(&self) -> &Rc<RefCell<Timeline>> {
        &self.timeline
    }

    /// Overall duration of the transition, as reported by its animator. Set
    /// by the driver before lifecycle callbacks run; alongside animations
    /// (the dimming fade) run for exactly this long.
    pub fn set_transition_duration(&self, duration: Duration) {
        self.duration.set(duration);
    }

    pub fn transition_duration(&self) -> Duration {
        self.duration.get()
    }

    /// Signal that the transition finished (`completed == true`) or was
    /// interrupted (`completed == false`). Idempotent: only the first call
    /// records a value.
    pub fn complete_transition(&self, completed: bool) {
        if self.state.get().is_none() {
            self.state.set(Some(completed));
        }
    }

    pub fn transition_state(&self) -> Option<bool> {
        self.state.get()
    }

    /// Run `apply` in lock-step with the transition: scheduled on the
    /// timeline when the transition is animated, applied at `1.0`
    /// synchronously when it is not (no concurrent animation context exists,
    /// and the caller must not block waiting for one).
    pub fn animate_alongside(&self, mut apply: impl FnMut(f32) + 'static) -> Option<AnimationHandle> {
        let duration = self.transition_duration();
        if !self.animated || duration.is_zero() {
            apply(1.0);
            return None;
        }
        Some(self.timeline.borrow_mut().animate(
            self.now,
            AnimationSpec::tween(duration, Easing::EaseOut),
            apply,
            |_| {},
        ))
    }
}

/// Performs the geometric animation for one transition event.
///
/// One instance per event, discarded after [`TransitionAnimator::animation_ended`]
/// fires. The duration reported by `transition_duration` must be exactly the
/// duration used inside `animate_transition`.
pub trait TransitionAnimator {
    fn transition_duration(&self, ctx: &TransitionContext) -> Duration;

    fn animate_transition(&mut self, ctx: &TransitionContext);

    fn animation_ended(&mut self, _completed: bool) {}
}
