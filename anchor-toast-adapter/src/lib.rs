//! Framework-neutral runtime for the `anchor-toast` crate.
//!
//! The `anchor-toast` crate is UI-agnostic and only does the placement math. This crate owns
//! the moving parts around a toast anchored to a widget:
//!
//! - [`ToastController`]: shows at most one toast, replaces it on demand, dismisses it on a
//!   timer or on request, and cleans up on dispose
//! - [`ToastController::placement_stream`]: the placement of the current toast, kept fresh
//!   while the anchor scrolls or the keyboard comes and goes
//! - [`dismiss_all`]: hides the toasts of every live controller on the UI thread
//! - [`ToastAnchor`]: ties a widget's mount/rebuild/unmount cycle to a controller
//! - [`TweenOverlay`]: a headless overlay with a scale + opacity + slide effect, for hosts that
//!   don't bring their own animations
//!
//! The host toolkit plugs in through [`AnchorHost`], [`Overlay`] and [`Haptics`]. Time is
//! supplied by the host: pass `now_ms` to [`ToastController::show_toast`] and call
//! [`ToastController::tick`] every frame.
//!
//! This crate is intentionally framework-agnostic (no egui/iced/ratatui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod error;
mod host;
mod observable;
mod registry;
mod surface;
mod tracker;
mod tween;

#[cfg(test)]
mod tests;

pub use anchor::ToastAnchor;
pub use controller::ToastController;
pub use error::SurfaceError;
pub use host::{AnchorHost, AnchorId, Haptics, Overlay, OverlayEntry, ScrollNotifier};
pub use observable::{Observable, SubscriptionId};
pub use registry::{dismiss_all, live_count};
pub use surface::{Effect, ToastFrame, TweenEntry, TweenEntryOptions, TweenOverlay};
pub use tween::{Easing, Tween};

pub use anchor_toast::{
    AnchorGeometry, AnimationStatus, EdgeInsets, PlacementConfig, PlacementResult, ShowAbove,
    VerticalSide, ViewportContext,
};
