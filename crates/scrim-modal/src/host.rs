use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use scrim_core::{Layer, Size};

use crate::transitionable::defaults;
use crate::{
    AlertTransitionDelegate, ModalSurface, SheetTransitionDelegate, TransitionDelegate,
    Transitionable,
};

/// How an alert host derives its preferred content size from the space the
/// container offers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContentSizing {
    /// Height comes from the content's compressed (intrinsic) layout. Width
    /// expands to fill the available space minus horizontal margins, or
    /// `max_width`, whichever is smaller.
    Compact { max_width: Option<f32> },

    /// Fill all available space, minus horizontal and vertical margins.
    Expansive,

    /// Height comes from the compressed layout; width matches the height,
    /// within the limits allowed by the horizontal margin.
    Square,
}

/// Host for alert-style presentation. Owns its content layer, its sizing
/// policy, and its transition delegate — the delegate lives exactly as long
/// as the host, so there is no weak-reference dance to keep it alive.
pub struct AlertHost {
    content: Layer,
    compressed_size: Size,
    pub sizing: ContentSizing,
    /// In points. Default is 30.
    pub horizontal_margin: f32,
    /// In points. Default is 40.
    pub vertical_margin: f32,
    pub dimming_opacity: f32,
    pub presentation_duration: Duration,
    pub dismissal_duration: Duration,
    delegate: Rc<AlertTransitionDelegate>,
}

impl AlertHost {
    /// `compressed_size` is the content's most compact layout size, supplied
    /// by the collaborator that built the content layer.
    pub fn new(content: Layer, compressed_size: Size) -> Self {
        Self {
            content,
            compressed_size,
            sizing: ContentSizing::Compact {
                max_width: Some(320.0),
            },
            horizontal_margin: 30.0,
            vertical_margin: 40.0,
            dimming_opacity: defaults::DIMMING_OPACITY,
            presentation_duration: defaults::PRESENTATION_DURATION,
            dismissal_duration: defaults::DISMISSAL_DURATION,
            delegate: Rc::new(AlertTransitionDelegate::default()),
        }
    }

    pub fn delegate(&self) -> Rc<dyn TransitionDelegate> {
        self.delegate.clone()
    }
}

impl Transitionable for AlertHost {
    fn dimming_opacity(&self) -> f32 {
        self.dimming_opacity
    }

    fn presentation_duration(&self) -> Duration {
        self.presentation_duration
    }

    fn dismissal_duration(&self) -> Duration {
        self.dismissal_duration
    }
}

impl ModalSurface for AlertHost {
    fn layer(&self) -> Layer {
        self.content.clone()
    }

    fn preferred_content_size(&self, container: Size) -> Size {
        let available_width = container.width - 2.0 * self.horizontal_margin;
        match self.sizing {
            ContentSizing::Compact { max_width } => {
                let width = max_width.map_or(available_width, |m| available_width.min(m));
                Size::new(width, self.compressed_size.height)
            }
            ContentSizing::Expansive => Size::new(
                available_width,
                container.height - 2.0 * self.vertical_margin,
            ),
            ContentSizing::Square => {
                let width = available_width.min(self.compressed_size.height);
                Size::new(width, self.compressed_size.height)
            }
        }
    }

    fn transitionable(&self) -> Option<&dyn Transitionable> {
        Some(self)
    }
}

/// Host for sheet-style presentation: full container width, compressed
/// content height, bottom-anchored.
pub struct SheetHost {
    content: Layer,
    compressed_height: f32,
    pub dimming_opacity: f32,
    pub presentation_duration: Duration,
    pub dismissal_duration: Duration,
    dismiss_handler: RefCell<Option<Box<dyn FnOnce()>>>,
    delegate: Rc<SheetTransitionDelegate>,
}

impl SheetHost {
    pub fn new(content: Layer, compressed_height: f32) -> Self {
        Self {
            content,
            compressed_height,
            dimming_opacity: defaults::SHEET_DIMMING_FALLBACK,
            presentation_duration: defaults::SHEET_PRESENTATION_DURATION,
            dismissal_duration: defaults::SHEET_DISMISSAL_DURATION,
            dismiss_handler: RefCell::new(None),
            delegate: Rc::new(SheetTransitionDelegate),
        }
    }

    pub fn delegate(&self) -> Rc<dyn TransitionDelegate> {
        self.delegate.clone()
    }

    /// Executed once when a tap-to-dismiss is detected on the dimming layer,
    /// right before the dismissal transition plays.
    pub fn set_dismiss_handler(&self, handler: impl FnOnce() + 'static) {
        *self.dismiss_handler.borrow_mut() = Some(Box::new(handler));
    }
}

impl Transitionable for SheetHost {
    fn dimming_opacity(&self) -> f32 {
        self.dimming_opacity
    }

    fn presentation_duration(&self) -> Duration {
        self.presentation_duration
    }

    fn dismissal_duration(&self) -> Duration {
        self.dismissal_duration
    }
}

impl ModalSurface for SheetHost {
    fn layer(&self) -> Layer {
        self.content.clone()
    }

    fn preferred_content_size(&self, container: Size) -> Size {
        Size::new(container.width, self.compressed_height)
    }

    fn transitionable(&self) -> Option<&dyn Transitionable> {
        Some(self)
    }

    fn take_dismiss_handler(&self) -> Option<Box<dyn FnOnce()>> {
        self.dismiss_handler.borrow_mut().take()
    }
}
