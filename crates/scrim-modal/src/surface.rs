use scrim_core::{Layer, Size};

use crate::Transitionable;

/// A surface that can be presented modally.
///
/// This is the composition seam that replaces platform subclassing: hosts
/// implement it, the presenter and the presentation controllers only ever see
/// the trait.
pub trait ModalSurface {
    /// The content layer the transition will move in and out.
    fn layer(&self) -> Layer;

    /// Desired content size given the available container size. Presentation
    /// controllers derive the target frame from this on every size change.
    fn preferred_content_size(&self, container: Size) -> Size;

    /// The timing/dimming capability, when the surface declares one.
    fn transitionable(&self) -> Option<&dyn Transitionable> {
        None
    }

    /// One-shot callback fired just before a dismissal animation plays
    /// (sheet style only). Taking it must leave the slot empty.
    fn take_dismiss_handler(&self) -> Option<Box<dyn FnOnce()>> {
        None
    }
}
