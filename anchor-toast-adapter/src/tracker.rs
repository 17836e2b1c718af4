use std::cell::RefCell;
use std::rc::{Rc, Weak};

use anchor_toast::{EdgeInsets, PlacementConfig, PlacementResult, resolve_placement};

use crate::{AnchorHost, AnchorId, Observable, ScrollNotifier, SubscriptionId};

struct TrackerState {
    host: Rc<dyn AnchorHost>,
    placement: Option<Observable<PlacementResult>>,
    anchor: Option<AnchorId>,
    config: PlacementConfig,
    scroll: Option<(ScrollNotifier, SubscriptionId)>,
    last_insets: Option<EdgeInsets>,
    active: bool,
}

/// Keeps a toast's [`PlacementResult`] fresh while the anchor scrolls or the viewport insets
/// change.
///
/// The placement observable is created on the first [`PositionTracker::start`] and reused by
/// later sessions, so a surface bound to it never has to rebind. It is only closed by
/// [`PositionTracker::close`].
#[derive(Clone)]
pub(crate) struct PositionTracker {
    inner: Rc<RefCell<TrackerState>>,
}

impl PositionTracker {
    pub(crate) fn new(host: Rc<dyn AnchorHost>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TrackerState {
                host,
                placement: None,
                anchor: None,
                config: PlacementConfig::default(),
                scroll: None,
                last_insets: None,
                active: false,
            })),
        }
    }

    /// Starts tracking `anchor` and publishes the initial placement.
    ///
    /// Returns `None` (and tracks nothing) if the anchor cannot be measured.
    pub(crate) fn start(
        &self,
        anchor: AnchorId,
        config: PlacementConfig,
    ) -> Option<Observable<PlacementResult>> {
        self.stop();

        let host = Rc::clone(&self.inner.borrow().host);
        let Some(geometry) = host.measure(anchor) else {
            tdebug!(anchor = anchor.0, "tracker start skipped: anchor not measurable");
            return None;
        };
        let viewport = host.viewport();
        let result = resolve_placement(geometry, viewport, &config);

        let placement = {
            let mut st = self.inner.borrow_mut();
            let placement = match st.placement.take() {
                Some(existing) if !existing.is_closed() => existing,
                _ => Observable::new(result),
            };
            st.placement = Some(placement.clone());
            st.anchor = Some(anchor);
            st.config = config;
            st.last_insets = Some(viewport.insets);
            st.active = true;
            placement
        };
        placement.set(result);

        self.subscribe_scroll(&host, anchor);
        Some(placement)
    }

    fn subscribe_scroll(&self, host: &Rc<dyn AnchorHost>, anchor: AnchorId) {
        let Some(notifier) = host.scroll_notifier(anchor) else {
            return;
        };
        let weak: Weak<RefCell<TrackerState>> = Rc::downgrade(&self.inner);
        let id = notifier.subscribe(move |_offset| {
            if let Some(inner) = weak.upgrade() {
                PositionTracker { inner }.refresh();
            }
        });
        self.inner.borrow_mut().scroll = Some((notifier, id));
    }

    fn unsubscribe_scroll(&self) {
        let scroll = self.inner.borrow_mut().scroll.take();
        if let Some((notifier, id)) = scroll {
            notifier.unsubscribe(id);
        }
    }

    /// Switches the tracked anchor mid-session and republishes.
    pub(crate) fn retarget(&self, anchor: AnchorId) {
        let host = {
            let mut st = self.inner.borrow_mut();
            if !st.active || st.anchor == Some(anchor) {
                return;
            }
            st.anchor = Some(anchor);
            Rc::clone(&st.host)
        };
        self.unsubscribe_scroll();
        self.subscribe_scroll(&host, anchor);
        self.refresh();
    }

    /// Re-measures the anchor and republishes the placement.
    ///
    /// Returns `false` when nothing was published: tracking is stopped or the anchor is not
    /// measurable right now.
    pub(crate) fn refresh(&self) -> bool {
        let (host, anchor, config, placement) = {
            let st = self.inner.borrow();
            let (true, Some(anchor), Some(placement)) = (st.active, st.anchor, &st.placement)
            else {
                return false;
            };
            (Rc::clone(&st.host), anchor, st.config, placement.clone())
        };

        let Some(geometry) = host.measure(anchor) else {
            tdebug!(anchor = anchor.0, "placement refresh skipped: anchor not measurable");
            return false;
        };
        let viewport = host.viewport();
        self.inner.borrow_mut().last_insets = Some(viewport.insets);

        let result = resolve_placement(geometry, viewport, &config);
        ttrace!(anchor = anchor.0, ?result, "placement refreshed");
        placement.set(result);
        true
    }

    /// Samples the viewport insets and refreshes if they changed since the last sample.
    ///
    /// Meant to be called once per frame while a toast is showing.
    pub(crate) fn poll_insets(&self) -> bool {
        let host = {
            let st = self.inner.borrow();
            if !st.active {
                return false;
            }
            Rc::clone(&st.host)
        };
        let insets = host.viewport().insets;
        {
            let mut st = self.inner.borrow_mut();
            if st.last_insets == Some(insets) {
                return false;
            }
            st.last_insets = Some(insets);
        }
        tdebug!(?insets, "viewport insets changed");
        self.refresh()
    }

    /// Stops tracking and drops the scroll subscription. The placement observable is kept.
    pub(crate) fn stop(&self) {
        {
            let mut st = self.inner.borrow_mut();
            st.active = false;
            st.last_insets = None;
        }
        self.unsubscribe_scroll();
    }

    /// Stops tracking and closes the placement observable for good.
    pub(crate) fn close(&self) {
        self.stop();
        let placement = {
            let mut st = self.inner.borrow_mut();
            st.anchor = None;
            st.placement.take()
        };
        if let Some(placement) = placement {
            placement.close();
        }
    }

    /// The shared placement observable, once a session has been started.
    pub(crate) fn placement(&self) -> Option<Observable<PlacementResult>> {
        self.inner.borrow().placement.clone()
    }

    /// The latest published placement while tracking.
    pub(crate) fn current(&self) -> Option<PlacementResult> {
        let st = self.inner.borrow();
        if !st.active {
            return None;
        }
        st.placement.as_ref().map(Observable::get)
    }
}

impl core::fmt::Debug for PositionTracker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let st = self.inner.borrow();
        f.debug_struct("PositionTracker")
            .field("anchor", &st.anchor)
            .field("active", &st.active)
            .field("last_insets", &st.last_insets)
            .finish_non_exhaustive()
    }
}
