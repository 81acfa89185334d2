use std::time::Duration;

use scrim_core::{
    AnimationSpec, Color, Interpolate, Layer, Rect, Transform, TransitionAnimator,
    TransitionContext,
};

/// Both push and pop run at the stock navigation timing.
pub const NAVIGATION_TRANSITION_DURATION: Duration = Duration::from_millis(250);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOperation {
    Push,
    Pop,
}

/// Animates navigation transitions with a sliding reveal: the incoming page
/// slides in at full speed while the outgoing page slides at half speed
/// underneath, clipped by a mask that keeps the two edges in lockstep.
///
/// On push the mask sits on the outgoing page and shrinks from full width to
/// half; on pop it sits on the revealed page and grows back. The mask is
/// removed in the completion before the transition is reported finished,
/// whether it completed or was interrupted.
pub struct MaskedTransitionAnimator {
    operation: NavOperation,
    duration: Duration,
}

impl MaskedTransitionAnimator {
    pub fn new(operation: NavOperation) -> Self {
        Self {
            operation,
            duration: NAVIGATION_TRANSITION_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn operation(&self) -> NavOperation {
        self.operation
    }

    fn animate_push(&self, ctx: &TransitionContext) {
        let (Some(from), Some(to)) = (ctx.from_layer().cloned(), ctx.to_layer().cloned()) else {
            return;
        };
        let bounds = ctx.container().bounds();
        let width = bounds.w;

        // Incoming page starts fully off-screen to the right, above the
        // outgoing page.
        to.set_frame(bounds);
        to.set_transform(Transform::translate(width, 0.0));
        ctx.container().add_child(&to);

        let mask = Layer::with_frame("push-mask", bounds);
        mask.set_background(Color::WHITE);
        from.set_mask(Some(mask.clone()));

        if !ctx.is_animated() {
            from.set_mask(None);
            from.set_transform(Transform::identity());
            from.remove_from_parent();
            to.set_transform(Transform::identity());
            ctx.complete_transition(true);
            return;
        }

        let mask_end = Rect::new(0.0, 0.0, width / 2.0, bounds.h);
        let from_end = Transform::translate(-width / 2.0, 0.0);
        let to_start = Transform::translate(width, 0.0);
        let (f, t_layer, m) = (from.clone(), to.clone(), mask);
        let completion_ctx = ctx.clone();
        ctx.timeline().borrow_mut().animate(
            ctx.now(),
            AnimationSpec::ease_out(self.duration),
            move |t| {
                m.set_frame(bounds.interpolate(&mask_end, t));
                f.set_transform(Transform::identity().interpolate(&from_end, t));
                t_layer.set_transform(to_start.interpolate(&Transform::identity(), t));
            },
            move |completed| {
                from.set_mask(None);
                from.set_transform(Transform::identity());
                if completed {
                    from.remove_from_parent();
                } else {
                    to.remove_from_parent();
                    to.set_transform(Transform::identity());
                }
                completion_ctx.complete_transition(completed);
            },
        );
    }

    fn animate_pop(&self, ctx: &TransitionContext) {
        let (Some(from), Some(to)) = (ctx.from_layer().cloned(), ctx.to_layer().cloned()) else {
            return;
        };
        let bounds = ctx.container().bounds();
        let width = bounds.w;

        // Revealed page re-enters from its half-width parking spot, behind
        // the departing page.
        to.set_frame(bounds);
        to.set_transform(Transform::translate(-width / 2.0, 0.0));
        ctx.container().insert_child(0, &to);

        let mask = Layer::with_frame("pop-mask", Rect::new(0.0, 0.0, width / 2.0, bounds.h));
        mask.set_background(Color::WHITE);
        to.set_mask(Some(mask.clone()));

        if !ctx.is_animated() {
            to.set_mask(None);
            to.set_transform(Transform::identity());
            from.set_transform(Transform::identity());
            from.remove_from_parent();
            ctx.complete_transition(true);
            return;
        }

        let mask_start = mask.frame();
        let from_end = Transform::translate(width, 0.0);
        let to_start = Transform::translate(-width / 2.0, 0.0);
        let (f, t_layer, m) = (from.clone(), to.clone(), mask);
        let completion_ctx = ctx.clone();
        ctx.timeline().borrow_mut().animate(
            ctx.now(),
            AnimationSpec::ease_out(self.duration),
            move |t| {
                m.set_frame(mask_start.interpolate(&bounds, t));
                f.set_transform(Transform::identity().interpolate(&from_end, t));
                t_layer.set_transform(to_start.interpolate(&Transform::identity(), t));
            },
            move |completed| {
                to.set_mask(None);
                if completed {
                    from.set_transform(Transform::identity());
                    from.remove_from_parent();
                } else {
                    to.remove_from_parent();
                    to.set_transform(Transform::identity());
                    from.set_transform(Transform::identity());
                }
                completion_ctx.complete_transition(completed);
            },
        );
    }
}

impl TransitionAnimator for MaskedTransitionAnimator {
    fn transition_duration(&self, _ctx: &TransitionContext) -> Duration {
        self.duration
    }

    fn animate_transition(&mut self, ctx: &TransitionContext) {
        match self.operation {
            NavOperation::Push => self.animate_push(ctx),
            NavOperation::Pop => self.animate_pop(ctx),
        }
    }
}
