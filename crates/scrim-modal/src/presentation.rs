use std::rc::Rc;

use scrim_core::{Layer, Rect, Size, TransitionAnimator, TransitionContext};

use crate::{ModalSurface, TransitionPhase};

/// Owns the chrome around one modal presentation: the dimming backdrop and
/// the presented content's target geometry.
///
/// Lifecycle mirrors the transition it belongs to. `will_begin` hooks insert
/// views and start alongside animations; `did_end` hooks receive the final
/// `completed` flag and either commit or roll back. Both `did_end` hooks must
/// tolerate being reached with the dimming layer already detached.
pub trait PresentationController {
    /// Target frame for the presented layer, derived from container bounds
    /// and the surface's preferred size. Never stored; recomputed on demand.
    fn frame_of_presented_view(&self, container_bounds: Rect, preferred: Size) -> Rect;

    /// The backdrop opacity this presentation resolved at construction.
    fn dimming_opacity(&self) -> f32;

    fn presentation_transition_will_begin(&mut self, ctx: &TransitionContext);

    fn presentation_transition_did_end(&mut self, completed: bool);

    fn dismissal_transition_will_begin(&mut self, ctx: &TransitionContext);

    fn dismissal_transition_did_end(&mut self, completed: bool);

    /// Container bounds are changing (rotation, window resize). `ctx` carries
    /// the presented layer in its `to` slot and the resize coordinator's
    /// timing.
    fn container_size_will_change(
        &mut self,
        _new_bounds: Rect,
        _preferred: Size,
        _ctx: &TransitionContext,
    ) {
    }

    /// The dimming backdrop this controller owns.
    fn dimming_layer(&self) -> &Layer;
}

/// Factory for the pieces of one transition event. Stateless; owned by the
/// host surface and handed to the presenter at presentation time, so its
/// lifetime is tied to the host rather than to a weak reference or a global.
pub trait TransitionDelegate {
    /// A fresh animator for this event. Timing is resolved here: the
    /// surface's declared duration when it is [`Transitionable`], the
    /// per-style default otherwise.
    ///
    /// [`Transitionable`]: crate::Transitionable
    fn animation_controller(
        &self,
        phase: TransitionPhase,
        surface: &dyn ModalSurface,
    ) -> Box<dyn TransitionAnimator>;

    /// A fresh presentation controller for this event. `on_background_tap`
    /// is invoked when the user taps the dimming backdrop; styles that do not
    /// support tap-to-dismiss ignore it.
    fn presentation_controller(
        &self,
        surface: &dyn ModalSurface,
        on_background_tap: Rc<dyn Fn()>,
    ) -> Box<dyn PresentationController>;
}
