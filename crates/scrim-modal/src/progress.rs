use std::rc::Rc;

use scrim_core::{Color, Layer, Size};

use crate::{AlertTransitionDelegate, ModalSurface, TransitionDelegate};

/// Arrangement of the activity indicator / progress bar relative to the
/// optional message label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressLayout {
    IndicatorAlone,
    IndicatorAboveLabel,
    IndicatorBesideLabel,
    BarAlone,
    BarAboveLabel,
    BarUnderLabel,
}

/// Overall appearance of a progress overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayStyle {
    /// Dark background, light gray text and icons.
    LightContent,
    /// Light background, dark gray text and icons.
    DarkContent,
    /// Match the presenting environment's interface style; behaves as
    /// `DarkContent` when that is unknown.
    Auto,
}

/// Backdrop treatment behind the indicator. A single configurable variant
/// rather than two competing overlay implementations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayEffect {
    #[default]
    Blur,
    VibrantBlur,
}

const INDICATOR_SIDE: f32 = 37.0;
const BAR_HEIGHT: f32 = 4.0;
const BAR_WIDTH: f32 = 160.0;
const LABEL_HEIGHT: f32 = 20.0;
const LABEL_CHAR_WIDTH: f32 = 7.0;
const MAX_LABEL_WIDTH: f32 = 240.0;

/// Modal "busy" overlay, presented alert-style (centered, dimmed backdrop,
/// stock timing). Present it like any other surface.
pub struct ProgressOverlay {
    message: Option<String>,
    layout: ProgressLayout,
    style: OverlayStyle,
    effect: OverlayEffect,
    margin: f32,
    content: Layer,
    delegate: Rc<AlertTransitionDelegate>,
}

impl ProgressOverlay {
    /// All arguments have sensible defaults via [`ProgressOverlay::plain`].
    /// Layouts that pair an indicator with a label fall back to the "alone"
    /// variants when there is no message to show.
    pub fn new(message: Option<String>, layout: ProgressLayout, style: OverlayStyle) -> Self {
        let layout = if message.is_none() {
            match layout {
                ProgressLayout::IndicatorAboveLabel | ProgressLayout::IndicatorBesideLabel => {
                    ProgressLayout::IndicatorAlone
                }
                ProgressLayout::BarAboveLabel | ProgressLayout::BarUnderLabel => {
                    ProgressLayout::BarAlone
                }
                other => other,
            }
        } else {
            layout
        };

        let content = Layer::new("progress-content");
        content.set_background(match style {
            OverlayStyle::LightContent => Color::BLACK,
            OverlayStyle::DarkContent | OverlayStyle::Auto => Color::WHITE,
        });

        Self {
            message,
            layout,
            style,
            effect: OverlayEffect::default(),
            margin: 16.0,
            content,
            delegate: Rc::new(AlertTransitionDelegate::default()),
        }
    }

    /// A bare activity indicator with no message.
    pub fn plain() -> Self {
        Self::new(None, ProgressLayout::IndicatorAlone, OverlayStyle::Auto)
    }

    pub fn with_effect(mut self, effect: OverlayEffect) -> Self {
        self.effect = effect;
        self
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn layout(&self) -> ProgressLayout {
        self.layout
    }

    pub fn style(&self) -> OverlayStyle {
        self.style
    }

    pub fn effect(&self) -> OverlayEffect {
        self.effect
    }

    pub fn delegate(&self) -> Rc<dyn TransitionDelegate> {
        self.delegate.clone()
    }

    fn label_width(&self) -> f32 {
        match &self.message {
            Some(m) => (m.chars().count() as f32 * LABEL_CHAR_WIDTH).min(MAX_LABEL_WIDTH),
            None => 0.0,
        }
    }

    fn content_size(&self) -> Size {
        let m = self.margin;
        match self.layout {
            ProgressLayout::IndicatorAlone => {
                Size::new(INDICATOR_SIDE + 2.0 * m, INDICATOR_SIDE + 2.0 * m)
            }
            ProgressLayout::IndicatorAboveLabel => Size::new(
                INDICATOR_SIDE.max(self.label_width()) + 2.0 * m,
                INDICATOR_SIDE + LABEL_HEIGHT + 3.0 * m,
            ),
            ProgressLayout::IndicatorBesideLabel => Size::new(
                INDICATOR_SIDE + self.label_width() + 3.0 * m,
                INDICATOR_SIDE + 2.0 * m,
            ),
            ProgressLayout::BarAlone => Size::new(BAR_WIDTH + 2.0 * m, BAR_HEIGHT + 2.0 * m),
            ProgressLayout::BarAboveLabel | ProgressLayout::BarUnderLabel => Size::new(
                BAR_WIDTH.max(self.label_width()) + 2.0 * m,
                BAR_HEIGHT + LABEL_HEIGHT + 3.0 * m,
            ),
        }
    }
}

impl ModalSurface for ProgressOverlay {
    fn layer(&self) -> Layer {
        self.content.clone()
    }

    fn preferred_content_size(&self, container: Size) -> Size {
        let size = self.content_size();
        // Never wider than the container allows.
        Size::new(size.width.min(container.width), size.height)
    }

    // No Transitionable impl: the overlay keeps the stock alert fallbacks
    // (0.25 dimming, 250 ms in, 125 ms out).
}
