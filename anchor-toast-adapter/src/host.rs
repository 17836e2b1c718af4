use std::sync::atomic::{AtomicU64, Ordering};

use anchor_toast::{
    AnchorGeometry, AnimationStatus, PlacementConfig, PlacementResult, ViewportContext,
};

use crate::{Observable, SurfaceError};

/// Scroll offset of the scrollable container an anchor lives in.
///
/// Hosts publish the container's offset through it; trackers only care that it changed.
pub type ScrollNotifier = Observable<f32>;

/// Opaque identity of an anchor widget.
///
/// The controller holds the current anchor by id only. Whether the widget behind an id is still
/// laid out is answered by [`AnchorHost::measure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorId(pub u64);

impl AnchorId {
    /// Allocates a process-unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Queries answered by the host toolkit's render tree and window.
pub trait AnchorHost {
    /// Current absolute geometry of `anchor`, or `None` if it is not laid out (or gone).
    fn measure(&self, anchor: AnchorId) -> Option<AnchorGeometry>;

    /// Screen size, safe-area padding and view insets as of now.
    fn viewport(&self) -> ViewportContext;

    /// The scroll position of the nearest scrollable ancestor of `anchor`, if any.
    fn scroll_notifier(&self, _anchor: AnchorId) -> Option<ScrollNotifier> {
        None
    }
}

/// The host's overlay layer: mounts toast content above everything else.
pub trait Overlay<C> {
    /// Mounts `content`. The entry must follow `placement` as it changes and stays idle
    /// (status [`AnimationStatus::Dismissed`]) until [`OverlayEntry::forward`] is called.
    fn mount(
        &self,
        content: C,
        placement: Observable<PlacementResult>,
        config: &PlacementConfig,
    ) -> Box<dyn OverlayEntry>;
}

/// A mounted toast and its entrance/exit animation.
pub trait OverlayEntry {
    fn status(&self) -> AnimationStatus;

    /// Starts the entrance animation.
    fn forward(&mut self);

    /// Starts the exit animation. Once it finishes, [`OverlayEntry::status`] reports
    /// [`AnimationStatus::Dismissed`].
    fn reverse(&mut self) -> Result<(), SurfaceError>;

    /// Advances animations. Hosts whose animations run on their own clock can ignore this.
    fn tick(&mut self, _now_ms: u64) {}

    /// Removes the toast from the overlay immediately. Must tolerate repeated calls.
    fn unmount(&mut self);
}

/// Fire-and-forget tactile feedback.
pub trait Haptics {
    fn light_impact(&self);
}
