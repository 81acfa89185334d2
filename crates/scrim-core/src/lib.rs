//! # Layers, Timelines, and Transition Plumbing
//!
//! `scrim-core` is the leaf crate of the toolkit. It holds the pieces the
//! presentation styles are built from:
//!
//! - [`Layer`] — a retained, single-threaded layer tree (frames, alpha,
//!   transforms, masks, tap handlers). Cheap `Rc` handles so animation
//!   callbacks can mutate nodes they captured.
//! - [`Timeline`] — the callback-driven animation driver. Starting an
//!   animation returns a handle; completion arrives asynchronously with a
//!   `completed` flag, which is the only thing distinguishing a finished
//!   transition from an interrupted one.
//! - [`TransitionContext`] / [`TransitionAnimator`] — the contract between
//!   whoever drives a transition (modal presenter, navigator) and whoever
//!   animates it.
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use scrim_core::*;
//!
//! let layer = Layer::new("content");
//! let mut timeline = Timeline::new();
//! let t0 = Instant::now();
//!
//! let handle = timeline.animate(
//!     t0,
//!     AnimationSpec::ease_out(Duration::from_millis(250)),
//!     { let layer = layer.clone(); move |t| layer.set_alpha(t) },
//!     |completed| assert!(completed),
//! );
//!
//! timeline.tick(t0 + Duration::from_millis(250));
//! assert_eq!(layer.alpha(), 1.0);
//! # let _ = handle;
//! ```

pub mod animation;
pub mod color;
pub mod geometry;
pub mod layer;
pub mod tests;
pub mod transition;

pub use animation::*;
pub use color::*;
pub use geometry::*;
pub use layer::*;
pub use transition::*;
