use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use scrim_core::{Layer, Size, Timeline, TransitionAnimator, TransitionContext, Vec2};

use crate::{
    ModalSurface, PresentError, PresentationController, TransitionDelegate, TransitionPhase,
};

/// Duration of the coordinator that accompanies container size changes
/// (rotation, window resize).
const RESIZE_DURATION: Duration = Duration::from_millis(250);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PresentationState {
    Presenting,
    Presented,
    Dismissing,
}

struct ActivePresentation {
    surface: Rc<dyn ModalSurface>,
    delegate: Rc<dyn TransitionDelegate>,
    presentation: Box<dyn PresentationController>,
    /// Present only while a transition is in flight; taken when it finalizes
    /// so the animator is discarded after `animation_ended`.
    transition: Option<(TransitionContext, Box<dyn TransitionAnimator>)>,
    state: PresentationState,
}

/// Drives modal presentations over one container layer — the stand-in for the
/// platform's presentation machinery.
///
/// All methods take the current instant explicitly; `tick` pumps the shared
/// timeline and then finalizes whichever transition signalled completion.
/// At most one presentation is active per presenter.
pub struct ModalPresenter {
    container: Layer,
    timeline: Rc<RefCell<Timeline>>,
    active: Option<ActivePresentation>,
    dismiss_requested: Rc<Cell<bool>>,
}

impl ModalPresenter {
    pub fn new(container: Layer) -> Self {
        Self {
            container,
            timeline: Rc::new(RefCell::new(Timeline::new())),
            active: None,
            dismiss_requested: Rc::new(Cell::new(false)),
        }
    }

    pub fn container(&self) -> &Layer {
        &self.container
    }

    pub fn timeline(&self) -> Rc<RefCell<Timeline>> {
        self.timeline.clone()
    }

    /// True from the moment a presentation begins until its dismissal (or
    /// rollback) finishes.
    pub fn is_presenting(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_transitioning(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.transition.is_some())
    }

    /// Present `surface` using the pieces `delegate` supplies. When
    /// `animated` is false the presentation completes within this call.
    pub fn present(
        &mut self,
        surface: Rc<dyn ModalSurface>,
        delegate: Rc<dyn TransitionDelegate>,
        animated: bool,
        now: Instant,
    ) -> Result<(), PresentError> {
        if self.active.is_some() {
            return Err(PresentError::AlreadyPresenting);
        }

        let on_background_tap: Rc<dyn Fn()> = {
            let requested = self.dismiss_requested.clone();
            Rc::new(move || requested.set(true))
        };
        let mut presentation = delegate.presentation_controller(surface.as_ref(), on_background_tap);
        let mut animator = delegate.animation_controller(TransitionPhase::Presenting, surface.as_ref());

        let container_bounds = self.container.bounds();
        let preferred = surface.preferred_content_size(container_bounds.size());
        let final_frame = presentation.frame_of_presented_view(container_bounds, preferred);

        let ctx = TransitionContext::new(self.container.clone(), self.timeline.clone(), now, animated)
            .with_to(surface.layer())
            .with_final_frame(final_frame);
        ctx.set_transition_duration(animator.transition_duration(&ctx));

        log::debug!("presenter: presentation begins (animated: {animated})");
        presentation.presentation_transition_will_begin(&ctx);
        animator.animate_transition(&ctx);

        self.active = Some(ActivePresentation {
            surface,
            delegate,
            presentation,
            transition: Some((ctx, animator)),
            state: PresentationState::Presenting,
        });
        self.finalize_if_complete();
        Ok(())
    }

    /// Dismiss the active presentation. Dismissing while the presentation
    /// transition is still running interrupts it: the in-flight animations
    /// are cancelled and their `completed == false` paths roll everything
    /// back.
    pub fn dismiss(&mut self, animated: bool, now: Instant) -> Result<(), PresentError> {
        let Some(active) = self.active.as_mut() else {
            return Err(PresentError::NothingToDismiss);
        };

        match active.state {
            PresentationState::Dismissing => {
                log::warn!("presenter: dismiss requested during an active dismissal");
                Err(PresentError::DismissalInProgress)
            }
            PresentationState::Presenting => {
                log::debug!("presenter: presentation interrupted by dismissal");
                self.timeline.borrow_mut().cancel_all();
                self.finalize_if_complete();
                Ok(())
            }
            PresentationState::Presented => {
                let surface = active.surface.clone();
                let mut animator = active
                    .delegate
                    .animation_controller(TransitionPhase::Dismissing, surface.as_ref());

                let ctx = TransitionContext::new(
                    self.container.clone(),
                    self.timeline.clone(),
                    now,
                    animated,
                )
                .with_from(surface.layer());
                ctx.set_transition_duration(animator.transition_duration(&ctx));

                log::debug!("presenter: dismissal begins (animated: {animated})");
                active.presentation.dismissal_transition_will_begin(&ctx);
                animator.animate_transition(&ctx);

                active.state = PresentationState::Dismissing;
                active.transition = Some((ctx, animator));
                self.finalize_if_complete();
                Ok(())
            }
        }
    }

    /// Advance the timeline to `now` and finalize any transition that
    /// completed, then service a pending background-tap dismissal.
    pub fn tick(&mut self, now: Instant) {
        self.timeline.borrow_mut().tick(now);
        self.finalize_if_complete();
        if self.dismiss_requested.replace(false) {
            let _ = self.dismiss(true, now);
        }
    }

    /// Deliver a tap in container coordinates. Returns whether any layer
    /// handled it. A tap on a dimming layer that supports tap-to-dismiss
    /// starts the dismissal before this returns.
    pub fn handle_tap(&mut self, point: Vec2, now: Instant) -> bool {
        let handled = self.container.dispatch_tap(point);
        if self.dismiss_requested.replace(false) {
            let _ = self.dismiss(true, now);
        }
        handled
    }

    /// The container is changing size (rotation, window resize). The dimming
    /// layer reflows via autoresizing; the presented content's frame is
    /// recomputed by its presentation controller, alongside the resize
    /// coordinator when `animated` is true.
    pub fn set_container_size(&mut self, new_size: Size, animated: bool, now: Instant) {
        let mut frame = self.container.frame();
        frame.w = new_size.width;
        frame.h = new_size.height;
        self.container.set_frame(frame);

        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.state != PresentationState::Presented {
            log::debug!("presenter: container resized mid-transition; frame settles on completion");
            return;
        }

        let container_bounds = self.container.bounds();
        let preferred = active
            .surface
            .preferred_content_size(container_bounds.size());
        let ctx =
            TransitionContext::new(self.container.clone(), self.timeline.clone(), now, animated)
                .with_to(active.surface.layer());
        ctx.set_transition_duration(RESIZE_DURATION);
        active
            .presentation
            .container_size_will_change(container_bounds, preferred, &ctx);
    }

    fn finalize_if_complete(&mut self) {
        let mut clear = false;
        if let Some(active) = self.active.as_mut() {
            let signalled = active
                .transition
                .as_ref()
                .and_then(|(ctx, _)| ctx.transition_state());
            if let Some(completed) = signalled {
                if let Some((_ctx, mut animator)) = active.transition.take() {
                    match active.state {
                        PresentationState::Presenting => {
                            active.presentation.presentation_transition_did_end(completed);
                            animator.animation_ended(completed);
                            if completed {
                                log::debug!("presenter: presentation finished");
                                active.state = PresentationState::Presented;
                            } else {
                                log::debug!("presenter: presentation rolled back");
                                clear = true;
                            }
                        }
                        PresentationState::Dismissing => {
                            active.presentation.dismissal_transition_did_end(completed);
                            animator.animation_ended(completed);
                            if completed {
                                log::debug!("presenter: dismissal finished");
                                clear = true;
                            } else {
                                log::debug!("presenter: dismissal interrupted; presentation stays");
                                active.state = PresentationState::Presented;
                            }
                        }
                        PresentationState::Presented => {}
                    }
                }
            }
        }
        if clear {
            self.active = None;
        }
    }
}
