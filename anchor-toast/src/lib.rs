//! Headless placement math for toasts anchored to a widget.
//!
//! For the runtime side (tracking, lifecycle, dismissal), see the `anchor-toast-adapter` crate.
//!
//! This crate answers one question: given where the anchor is, what the screen looks like, and
//! how the caller wants the toast placed, where does the toast go? It decides between showing
//! the toast above or below the anchor, keeps it inside the padded screen, and accounts for
//! safe-area padding and view insets such as an on-screen keyboard.
//!
//! It is UI-agnostic. A toolkit layer is expected to provide:
//! - the anchor's absolute position and size
//! - the screen size, safe-area padding and current view insets
//! - the actual rendering and animation of the toast content
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod geometry;
mod options;
mod status;
mod types;


pub use geometry::{available_above, available_below, resolve_placement};
pub use options::{
    DEFAULT_DURATION_MS, DEFAULT_HORIZONTAL_PADDING, DEFAULT_MIN_SPACE_BELOW, DEFAULT_OFFSET,
    DEFAULT_SCREEN_PADDING, PlacementConfig,
};
pub use status::{AnimationEvent, AnimationStatus};
pub use types::{
    AnchorGeometry, EdgeInsets, PlacementResult, ShowAbove, VerticalSide, ViewportContext,
};
