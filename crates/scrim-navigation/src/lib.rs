//! # Masked Navigation Transitions
//!
//! Push/pop navigation between full-size pages, animated with a sliding
//! mask reveal: the incoming page slides in at full speed while the outgoing
//! page slides underneath at half speed, clipped so the seam between the two
//! stays coherent.
//!
//! [`MaskedNavigator`] owns the page stack and the timing; drive it with
//! explicit instants the same way as the modal presenter:
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use scrim_core::{Layer, Rect};
//! use scrim_navigation::MaskedNavigator;
//!
//! let container = Layer::with_frame("root", Rect::new(0.0, 0.0, 320.0, 568.0));
//! let mut nav = MaskedNavigator::new(container, Layer::new("home"));
//!
//! let t0 = Instant::now();
//! nav.push(Layer::new("detail"), true, t0);
//! nav.tick(t0 + Duration::from_millis(250));
//! assert_eq!(nav.depth(), 2);
//! ```

pub mod masked;
pub mod navigator;
pub mod tests;

pub use masked::*;
pub use navigator::*;
