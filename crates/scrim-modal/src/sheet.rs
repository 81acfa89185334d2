use std::rc::Rc;
use std::time::Duration;

use scrim_core::{
    AnimationSpec, Autoresizing, Color, Interpolate, Layer, Rect, Shadow, Size, Transform,
    TransitionAnimator, TransitionContext,
};

use crate::transitionable::defaults;
use crate::{ModalSurface, PresentationController, TransitionDelegate, TransitionPhase};

/// Presents surfaces sheet-style: vertically compact, pinned to the bottom
/// edge, dimming the presenting context slightly. Tapping the backdrop
/// requests dismissal.
pub struct SheetPresentationController {
    dimming: Layer,
    opacity: f32,
}

impl SheetPresentationController {
    pub fn new(dimming_opacity: f32, on_background_tap: Rc<dyn Fn()>) -> Self {
        let dimming = Layer::new("sheet-dimming");
        dimming.set_background(Color::black_with_opacity(dimming_opacity));
        dimming.set_on_tap(Some(on_background_tap));
        Self {
            dimming,
            opacity: dimming_opacity,
        }
    }
}

impl PresentationController for SheetPresentationController {
    fn frame_of_presented_view(&self, container_bounds: Rect, preferred: Size) -> Rect {
        if container_bounds.size().is_empty() {
            return Rect::default();
        }
        // Whatever the preferred size is: centered horizontally, at the bottom.
        Rect::new(
            (container_bounds.w - preferred.width) / 2.0,
            container_bounds.h - preferred.height,
            preferred.width,
            preferred.height,
        )
    }

    fn dimming_opacity(&self) -> f32 {
        self.opacity
    }

    fn presentation_transition_will_begin(&mut self, ctx: &TransitionContext) {
        if let Some(content) = ctx.to_layer() {
            content.set_shadow(Some(Shadow {
                color: Color::BLACK,
                radius: 20.0,
                opacity: 0.3,
            }));
        }

        let container = ctx.container();
        self.dimming.set_frame(container.bounds());
        self.dimming.set_alpha(0.0);
        self.dimming
            .set_autoresizing(Autoresizing::FLEXIBLE_WIDTH | Autoresizing::FLEXIBLE_HEIGHT);
        container.insert_child(0, &self.dimming);

        let dimming = self.dimming.clone();
        ctx.animate_alongside(move |t| dimming.set_alpha(t));
    }

    fn presentation_transition_did_end(&mut self, completed: bool) {
        if !completed {
            self.dimming.remove_from_parent();
        }
    }

    fn dismissal_transition_will_begin(&mut self, ctx: &TransitionContext) {
        let dimming = self.dimming.clone();
        ctx.animate_alongside(move |t| dimming.set_alpha(1.0 - t));
    }

    fn dismissal_transition_did_end(&mut self, completed: bool) {
        if completed {
            self.dimming.remove_from_parent();
        } else {
            self.dimming.set_alpha(1.0);
        }
    }

    fn container_size_will_change(
        &mut self,
        new_bounds: Rect,
        _preferred: Size,
        ctx: &TransitionContext,
    ) {
        let Some(presented) = ctx.to_layer().cloned() else {
            return;
        };
        // Width matches the new container; height and bottom anchor are
        // preserved.
        let current = presented.frame();
        let target = Rect::new(0.0, new_bounds.h - current.h, new_bounds.w, current.h);
        ctx.animate_alongside(move |t| {
            presented.set_frame(current.interpolate(&target, t));
        });
    }

    fn dimming_layer(&self) -> &Layer {
        &self.dimming
    }
}

/// Animates sheet-style transitions: slide up from below the container edge
/// on presentation, slide back out on dismissal.
pub struct SheetTransitionAnimator {
    phase: TransitionPhase,
    duration: Duration,
    dismiss_handler: Option<Box<dyn FnOnce()>>,
}

impl SheetTransitionAnimator {
    pub fn new(phase: TransitionPhase, duration: Duration) -> Self {
        Self {
            phase,
            duration,
            dismiss_handler: None,
        }
    }

    pub fn with_dismiss_handler(mut self, handler: Option<Box<dyn FnOnce()>>) -> Self {
        self.dismiss_handler = handler;
        self
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    fn animate_presentation(&self, ctx: &TransitionContext) {
        let Some(to) = ctx.to_layer().cloned() else {
            return;
        };

        // Final frame, translated fully off-screen below.
        let final_frame = ctx.final_frame();
        to.set_frame(final_frame);
        let start = Transform::translate(0.0, final_frame.h);
        to.set_transform(start);
        ctx.container().add_child(&to);

        if !ctx.is_animated() {
            to.set_transform(Transform::identity());
            ctx.complete_transition(true);
            return;
        }

        let duration = self.transition_duration(ctx);
        let layer = to.clone();
        let completion_ctx = ctx.clone();
        ctx.timeline().borrow_mut().animate(
            ctx.now(),
            AnimationSpec::ease_out(duration),
            move |t| {
                layer.set_transform(start.interpolate(&Transform::identity(), t));
            },
            move |completed| {
                if !completed {
                    to.remove_from_parent();
                }
                completion_ctx.complete_transition(completed);
            },
        );
    }

    fn animate_dismissal(&mut self, ctx: &TransitionContext) {
        let Some(from) = ctx.from_layer().cloned() else {
            return;
        };

        // The one-shot dismiss handler fires right before the animation
        // plays, not after it.
        if let Some(handler) = self.dismiss_handler.take() {
            handler();
        }

        if !ctx.is_animated() {
            from.remove_from_parent();
            ctx.complete_transition(true);
            return;
        }

        let duration = self.transition_duration(ctx);
        let end = Transform::translate(0.0, from.frame().h);
        let layer = from.clone();
        let completion_ctx = ctx.clone();
        ctx.timeline().borrow_mut().animate(
            ctx.now(),
            AnimationSpec::ease_out(duration),
            move |t| {
                layer.set_transform(Transform::identity().interpolate(&end, t));
            },
            move |completed| {
                if completed {
                    from.remove_from_parent();
                } else {
                    from.set_transform(Transform::identity());
                }
                completion_ctx.complete_transition(completed);
            },
        );
    }
}

impl TransitionAnimator for SheetTransitionAnimator {
    fn transition_duration(&self, _ctx: &TransitionContext) -> Duration {
        self.duration
    }

    fn animate_transition(&mut self, ctx: &TransitionContext) {
        match self.phase {
            TransitionPhase::Presenting => self.animate_presentation(ctx),
            TransitionPhase::Dismissing => self.animate_dismissal(ctx),
        }
    }
}

/// Supplies sheet-style animators and presentation controllers, one fresh
/// instance per transition event.
#[derive(Default)]
pub struct SheetTransitionDelegate;

impl TransitionDelegate for SheetTransitionDelegate {
    fn animation_controller(
        &self,
        phase: TransitionPhase,
        surface: &dyn ModalSurface,
    ) -> Box<dyn TransitionAnimator> {
        let duration = surface
            .transitionable()
            .map(|t| t.transition_duration(phase))
            .unwrap_or(match phase {
                TransitionPhase::Presenting => defaults::SHEET_PRESENTATION_DURATION,
                TransitionPhase::Dismissing => defaults::SHEET_DISMISSAL_DURATION,
            });
        let animator = SheetTransitionAnimator::new(phase, duration);
        let animator = match phase {
            TransitionPhase::Dismissing => {
                animator.with_dismiss_handler(surface.take_dismiss_handler())
            }
            TransitionPhase::Presenting => animator,
        };
        Box::new(animator)
    }

    fn presentation_controller(
        &self,
        surface: &dyn ModalSurface,
        on_background_tap: Rc<dyn Fn()>,
    ) -> Box<dyn PresentationController> {
        let opacity = surface
            .transitionable()
            .map(|t| t.dimming_opacity())
            .unwrap_or(defaults::SHEET_DIMMING_FALLBACK);
        Box::new(SheetPresentationController::new(opacity, on_background_tap))
    }
}
