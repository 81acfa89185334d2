use std::rc::Rc;
use std::time::Duration;

use scrim_core::{
    AnimationSpec, Autoresizing, Color, Interpolate, Layer, Rect, Shadow, Size, Transform,
    TransitionAnimator, TransitionContext,
};

use crate::transitionable::defaults;
use crate::{ModalSurface, PresentationController, TransitionDelegate, TransitionPhase};

/// Presents arbitrary surfaces in a manner similar to a stock alert:
/// smaller than full-screen, centered, corners rounded, over a dimmed
/// backdrop.
pub struct AlertPresentationController {
    dimming: Layer,
    opacity: f32,
}

impl AlertPresentationController {
    pub fn new(dimming_opacity: f32) -> Self {
        let dimming = Layer::new("alert-dimming");
        dimming.set_background(Color::black_with_opacity(dimming_opacity));
        Self {
            dimming,
            opacity: dimming_opacity,
        }
    }
}

impl PresentationController for AlertPresentationController {
    fn frame_of_presented_view(&self, container_bounds: Rect, preferred: Size) -> Rect {
        if container_bounds.size().is_empty() {
            return Rect::default();
        }
        Rect::new(
            (container_bounds.w - preferred.width) / 2.0,
            (container_bounds.h - preferred.height) / 2.0,
            preferred.width,
            preferred.height,
        )
    }

    fn dimming_opacity(&self) -> f32 {
        self.opacity
    }

    fn presentation_transition_will_begin(&mut self, ctx: &TransitionContext) {
        // Style the content layer:
        if let Some(content) = ctx.to_layer() {
            content.set_corner_radius(9.0);
            content.set_shadow(Some(Shadow {
                color: Color::BLACK,
                radius: 20.0,
                opacity: 0.3,
            }));
        }

        // Configure the dimming backdrop: container-sized, behind everything,
        // tracking the container through resizes.
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
            // Interrupted dismissal: the presentation stays up, fully dimmed.
            self.dimming.set_alpha(1.0);
        }
    }

    fn container_size_will_change(
        &mut self,
        new_bounds: Rect,
        preferred: Size,
        ctx: &TransitionContext,
    ) {
        // Re-center at the preferred size. Dimming reflows via autoresizing.
        if let Some(content) = ctx.to_layer() {
            content.set_frame(self.frame_of_presented_view(new_bounds, preferred));
        }
    }

    fn dimming_layer(&self) -> &Layer {
        &self.dimming
    }
}

/// Animates alert-style transitions: scale-up-and-fade-in on presentation,
/// the reverse on dismissal.
pub struct AlertTransitionAnimator {
    phase: TransitionPhase,
    duration: Duration,
    scale_factor: f32,
}

impl AlertTransitionAnimator {
    pub fn new(phase: TransitionPhase, duration: Duration) -> Self {
        Self {
            phase,
            duration,
            scale_factor: 0.85,
        }
    }

    /// Scale applied at the off-screen end of the transition (start of
    /// presentation, end of dismissal). Not restricted to less than 1.
    pub fn with_scale_factor(mut self, factor: f32) -> Self {
        self.scale_factor = factor;
        self
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    fn animate_presentation(&self, ctx: &TransitionContext) {
        let Some(to) = ctx.to_layer().cloned() else {
            return;
        };

        // Starting state: final frame, scaled down and fully transparent.
        to.set_frame(ctx.final_frame());
        to.set_alpha(0.0);
        let start = Transform::scale(self.scale_factor);
        to.set_transform(start);
        ctx.container().add_child(&to);

        if !ctx.is_animated() {
            to.set_transform(Transform::identity());
            to.set_alpha(1.0);
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
                layer.set_alpha(t);
            },
            move |completed| {
                if !completed {
                    // Rollback: the half-presented layer must not linger.
                    to.remove_from_parent();
                }
                completion_ctx.complete_transition(completed);
            },
        );
    }

    fn animate_dismissal(&self, ctx: &TransitionContext) {
        let Some(from) = ctx.from_layer().cloned() else {
            return;
        };

        if !ctx.is_animated() {
            from.remove_from_parent();
            ctx.complete_transition(true);
            return;
        }

        let duration = self.transition_duration(ctx);
        let end = Transform::scale(self.scale_factor);
        let layer = from.clone();
        let completion_ctx = ctx.clone();
        ctx.timeline().borrow_mut().animate(
            ctx.now(),
            AnimationSpec::ease_out(duration),
            move |t| {
                layer.set_transform(Transform::identity().interpolate(&end, t));
                layer.set_alpha(1.0 - t);
            },
            move |completed| {
                if completed {
                    from.remove_from_parent();
                } else {
                    // Interrupted: restore the presented appearance.
                    from.set_transform(Transform::identity());
                    from.set_alpha(1.0);
                }
                completion_ctx.complete_transition(completed);
            },
        );
    }
}

impl TransitionAnimator for AlertTransitionAnimator {
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

/// Supplies alert-style animators and presentation controllers, one fresh
/// instance per transition event.
pub struct AlertTransitionDelegate {
    pub scale_factor: f32,
}

impl Default for AlertTransitionDelegate {
    fn default() -> Self {
        Self { scale_factor: 0.85 }
    }
}

impl TransitionDelegate for AlertTransitionDelegate {
    fn animation_controller(
        &self,
        phase: TransitionPhase,
        surface: &dyn ModalSurface,
    ) -> Box<dyn TransitionAnimator> {
        let duration = surface
            .transitionable()
            .map(|t| t.transition_duration(phase))
            .unwrap_or(match phase {
                TransitionPhase::Presenting => defaults::PRESENTATION_DURATION,
                TransitionPhase::Dismissing => defaults::DISMISSAL_DURATION,
            });
        Box::new(AlertTransitionAnimator::new(phase, duration).with_scale_factor(self.scale_factor))
    }

    fn presentation_controller(
        &self,
        surface: &dyn ModalSurface,
        _on_background_tap: Rc<dyn Fn()>,
    ) -> Box<dyn PresentationController> {
        // Alerts don't dismiss on background taps.
        let opacity = surface
            .transitionable()
            .map(|t| t.dimming_opacity())
            .unwrap_or(defaults::ALERT_DIMMING_FALLBACK);
        Box::new(AlertPresentationController::new(opacity))
    }
}
