//! # Alert- and Sheet-Style Modal Presentation
//!
//! Custom modal presentation replicating the stock alert/sheet interaction
//! patterns over a transparent layer hierarchy:
//!
//! - [`AlertPresentationController`] / [`AlertTransitionAnimator`] — content
//!   centered at its preferred size, rounded corners and drop shadow,
//!   scale-and-fade transition over a dimmed backdrop.
//! - [`SheetPresentationController`] / [`SheetTransitionAnimator`] — content
//!   pinned to the bottom edge at full width, slide-up transition, lighter
//!   dimming, tap-to-dismiss on the backdrop.
//! - [`ModalPresenter`] — drives the lifecycle: it asks the host's
//!   [`TransitionDelegate`] for a fresh animator and presentation controller
//!   per event, sequences the `will_begin`/`did_end` callbacks around the
//!   animation, and rolls everything back when a transition is interrupted.
//!
//! Hosts are plain structs implementing [`ModalSurface`] (and usually
//! [`Transitionable`]); see [`AlertHost`], [`SheetHost`] and
//! [`ProgressOverlay`].
//!
//! ```rust
//! use std::rc::Rc;
//! use std::time::{Duration, Instant};
//! use scrim_core::{Layer, Rect, Size};
//! use scrim_modal::*;
//!
//! let container = Layer::with_frame("root", Rect::new(0.0, 0.0, 320.0, 568.0));
//! let mut presenter = ModalPresenter::new(container);
//!
//! let host = Rc::new(AlertHost::new(Layer::new("content"), Size::new(280.0, 120.0)));
//! let delegate = host.delegate();
//! let t0 = Instant::now();
//!
//! presenter.present(host, delegate, true, t0).unwrap();
//! presenter.tick(t0 + Duration::from_millis(250));
//! assert!(presenter.is_presenting());
//! assert!(!presenter.is_transitioning());
//! ```

pub mod alert;
pub mod error;
pub mod host;
pub mod presentation;
pub mod presenter;
pub mod progress;
pub mod sheet;
pub mod surface;
pub mod transitionable;

pub use alert::*;
pub use error::*;
pub use host::*;
pub use presentation::*;
pub use presenter::*;
pub use progress::*;
pub use sheet::*;
pub use surface::*;
pub use transitionable::*;
