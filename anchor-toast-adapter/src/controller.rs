use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use anchor_toast::{AnimationStatus, PlacementConfig, PlacementResult};

use crate::registry::{self, Dismiss};
use crate::tracker::PositionTracker;
use crate::{AnchorHost, AnchorId, Haptics, Observable, Overlay, OverlayEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SessionId(u64);

struct ToastSession {
    id: SessionId,
    entry: Box<dyn OverlayEntry>,
    /// The exit animation is running; unmount once the entry reports `Dismissed`.
    exiting: bool,
}

#[derive(Clone, Copy, Debug)]
struct DismissTimer {
    session: SessionId,
    deadline_ms: u64,
}

#[derive(Default)]
struct ControllerState {
    disposed: bool,
    anchor: Option<AnchorId>,
    session: Option<ToastSession>,
    timer: Option<DismissTimer>,
    next_session: u64,
}

struct ControllerInner<C> {
    id: u64,
    state: RefCell<ControllerState>,
    host: Rc<dyn AnchorHost>,
    overlay: Rc<dyn Overlay<C>>,
    haptics: RefCell<Option<Rc<dyn Haptics>>>,
    tracker: PositionTracker,
}

/// Shows at most one toast anchored to a widget and owns everything that toast needs: the
/// overlay entry, its animation, the auto-dismiss timer and the position tracking.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `register_anchor` / `unregister_anchor` from the anchor widget (see [`crate::ToastAnchor`])
/// - `show_toast` / `dismiss` in response to app events
/// - `tick(now_ms)` once per frame while [`ToastController::is_showing`] is `true`
///
/// Every operation is a silent no-op when its preconditions do not hold (disposed controller,
/// no anchor, anchor not laid out). Those are ordinary UI races, not errors.
///
/// The handle is cheap to clone; clones control the same toast. Dropping the last handle
/// disposes the controller.
pub struct ToastController<C: 'static> {
    inner: Rc<ControllerInner<C>>,
}

impl<C: 'static> Clone for ToastController<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C: 'static> ToastController<C> {
    pub fn new(host: Rc<dyn AnchorHost>, overlay: Rc<dyn Overlay<C>>) -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);

        let inner = Rc::new(ControllerInner {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            state: RefCell::new(ControllerState::default()),
            tracker: PositionTracker::new(Rc::clone(&host)),
            host,
            overlay,
            haptics: RefCell::new(None),
        });
        let weak = Rc::downgrade(&inner);
        let weak: Weak<dyn Dismiss> = weak;
        registry::register(inner.id, weak);
        tdebug!(controller = inner.id, "ToastController::new");
        Self { inner }
    }

    pub fn with_haptics(self, haptics: impl Haptics + 'static) -> Self {
        self.set_haptics(Some(Rc::new(haptics)));
        self
    }

    pub fn set_haptics(&self, haptics: Option<Rc<dyn Haptics>>) {
        *self.inner.haptics.borrow_mut() = haptics;
    }

    /// Makes `anchor` the widget toasts are positioned against.
    ///
    /// The most recent registration wins. If a toast is showing, it moves to the new anchor.
    pub fn register_anchor(&self, anchor: AnchorId) {
        let retarget = {
            let mut st = self.inner.state.borrow_mut();
            if st.disposed || st.anchor == Some(anchor) {
                return;
            }
            st.anchor = Some(anchor);
            st.session.is_some()
        };
        if retarget {
            self.inner.tracker.retarget(anchor);
        }
    }

    /// Forgets `anchor` if it is the current one. Registrations of other anchors are kept.
    pub fn unregister_anchor(&self, anchor: AnchorId) {
        let mut st = self.inner.state.borrow_mut();
        if st.anchor == Some(anchor) {
            st.anchor = None;
        }
    }

    pub fn anchor(&self) -> Option<AnchorId> {
        self.inner.state.borrow().anchor
    }

    /// Shows `content` next to the current anchor, replacing any toast already showing.
    ///
    /// The replaced toast is removed at once, without its exit animation, before the new one is
    /// mounted. The new toast dismisses itself `config.duration_ms` after `now_ms`.
    ///
    /// Returns `false` when nothing was shown (disposed, no anchor, anchor not measurable).
    pub fn show_toast(&self, content: C, config: PlacementConfig, now_ms: u64) -> bool {
        self.inner.show_toast(content, config, now_ms)
    }

    /// Hides the current toast, playing the exit animation when `animate` is `true` and the
    /// toast is entering or fully shown. Otherwise the toast is removed at once.
    pub fn dismiss(&self, animate: bool) {
        self.inner.dismiss(animate);
    }

    /// Advances timers and animations and follows viewport inset changes.
    ///
    /// Returns the current placement while a toast is showing.
    pub fn tick(&self, now_ms: u64) -> Option<PlacementResult> {
        self.inner.tick(now_ms)
    }

    /// Re-resolves the placement immediately.
    ///
    /// Hosts with a native "insets changed" event can call this instead of relying on
    /// per-frame polling in `tick`.
    pub fn notify_viewport_changed(&self) -> bool {
        if !self.is_showing() {
            return false;
        }
        self.inner.tracker.refresh()
    }

    /// Releases everything the controller holds. Idempotent.
    ///
    /// A showing toast is removed at once, without its exit animation.
    pub fn dispose(&self) {
        self.inner.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.state.borrow().disposed
    }

    /// `true` from `show_toast` until the toast is fully removed (including its exit animation).
    pub fn is_showing(&self) -> bool {
        self.inner.state.borrow().session.is_some()
    }

    /// Animation phase of the current toast; [`AnimationStatus::Dismissed`] when none.
    pub fn status(&self) -> AnimationStatus {
        self.inner
            .state
            .borrow()
            .session
            .as_ref()
            .map_or(AnimationStatus::Dismissed, |s| s.entry.status())
    }

    /// Current placement while a toast is showing.
    pub fn placement(&self) -> Option<PlacementResult> {
        if !self.is_showing() {
            return None;
        }
        self.inner.tracker.current()
    }

    /// The placement stream handed to the overlay, once a toast has been shown.
    ///
    /// The same stream is reused by later toasts and closed on dispose. Tracking itself is
    /// driven only by this controller.
    pub fn placement_stream(&self) -> Option<Observable<PlacementResult>> {
        self.inner.tracker.placement()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C: 'static> core::fmt::Debug for ToastController<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let st = self.inner.state.borrow();
        f.debug_struct("ToastController")
            .field("id", &self.inner.id)
            .field("disposed", &st.disposed)
            .field("anchor", &st.anchor)
            .field("session", &st.session.as_ref().map(|s| s.id))
            .field("timer", &st.timer)
            .finish_non_exhaustive()
    }
}

impl<C> ControllerInner<C> {
    fn show_toast(&self, content: C, config: PlacementConfig, now_ms: u64) -> bool {
        let anchor = {
            let st = self.state.borrow();
            if st.disposed {
                tdebug!(controller = self.id, "show_toast ignored: disposed");
                return false;
            }
            let Some(anchor) = st.anchor else {
                tdebug!(controller = self.id, "show_toast ignored: no anchor registered");
                return false;
            };
            anchor
        };
        if self.host.measure(anchor).is_none() {
            tdebug!(controller = self.id, "show_toast ignored: anchor not measurable");
            return false;
        }

        if config.enable_haptic_feedback {
            let haptics = self.haptics.borrow().clone();
            if let Some(haptics) = haptics {
                haptics.light_impact();
            }
        }

        self.teardown_session();

        let Some(placement) = self.tracker.start(anchor, config) else {
            return false;
        };
        let mut entry = self.overlay.mount(content, placement, &config);
        entry.forward();

        let mut st = self.state.borrow_mut();
        if st.disposed {
            drop(st);
            entry.unmount();
            return false;
        }
        let id = SessionId(st.next_session);
        st.next_session = st.next_session.wrapping_add(1);
        let displaced = st.session.replace(ToastSession {
            id,
            entry,
            exiting: false,
        });
        st.timer = Some(DismissTimer {
            session: id,
            deadline_ms: now_ms.saturating_add(config.duration_ms),
        });
        drop(st);

        if let Some(mut displaced) = displaced {
            displaced.entry.unmount();
        }
        tdebug!(
            controller = self.id,
            session = id.0,
            duration_ms = config.duration_ms,
            "toast shown"
        );
        true
    }

    /// Removes the current toast without animation and stops everything tied to it.
    fn teardown_session(&self) {
        let session = {
            let mut st = self.state.borrow_mut();
            st.timer = None;
            st.session.take()
        };
        self.tracker.stop();
        if let Some(mut session) = session {
            tdebug!(controller = self.id, session = session.id.0, "toast torn down");
            session.entry.unmount();
        }
    }

    fn dismiss(&self, animate: bool) {
        let session = {
            let mut st = self.state.borrow_mut();
            if st.disposed {
                return;
            }
            st.timer = None;
            st.session.take()
        };
        let Some(mut session) = session else {
            return;
        };

        let exiting = if animate && session.entry.status().can_reverse() {
            match session.entry.reverse() {
                Ok(()) => true,
                Err(err) => {
                    twarn!(controller = self.id, %err, "exit animation failed; unmounting");
                    false
                }
            }
        } else {
            false
        };

        if exiting {
            session.exiting = true;
            tdebug!(controller = self.id, session = session.id.0, "toast exiting");
            self.reattach(session);
        } else {
            self.tracker.stop();
            tdebug!(controller = self.id, session = session.id.0, "toast removed");
            session.entry.unmount();
        }
    }

    /// Puts a detached session back. If the controller was disposed or another session took
    /// its place meanwhile, the detached one is unmounted instead.
    fn reattach(&self, mut session: ToastSession) -> bool {
        let mut st = self.state.borrow_mut();
        if st.disposed || st.session.is_some() {
            drop(st);
            session.entry.unmount();
            return false;
        }
        st.session = Some(session);
        true
    }

    fn tick(&self, now_ms: u64) -> Option<PlacementResult> {
        let expired = {
            let mut st = self.state.borrow_mut();
            if st.disposed {
                return None;
            }
            match (st.timer, st.session.as_ref().map(|s| s.id)) {
                (Some(timer), current) if now_ms >= timer.deadline_ms => {
                    st.timer = None;
                    // A timer armed by an earlier session never touches a later one.
                    current == Some(timer.session)
                }
                _ => false,
            }
        };
        if expired {
            tdebug!(controller = self.id, now_ms, "auto-dismiss timer fired");
            self.dismiss(true);
        }

        if self.state.borrow().session.is_some() {
            self.tracker.poll_insets();
        }

        let mut session = self.state.borrow_mut().session.take()?;
        session.entry.tick(now_ms);

        if session.exiting && session.entry.status() == AnimationStatus::Dismissed {
            let superseded = self.state.borrow().session.is_some();
            if !superseded {
                self.tracker.stop();
            }
            tdebug!(controller = self.id, session = session.id.0, "exit animation finished");
            session.entry.unmount();
            return None;
        }

        if !self.reattach(session) {
            return None;
        }
        self.tracker.current()
    }

    fn dispose(&self) {
        let session = {
            let mut st = self.state.borrow_mut();
            if st.disposed {
                return;
            }
            st.disposed = true;
            st.timer = None;
            st.anchor = None;
            st.session.take()
        };
        registry::unregister(self.id);
        self.tracker.close();
        if let Some(mut session) = session {
            session.entry.unmount();
        }
        tdebug!(controller = self.id, "ToastController disposed");
    }
}

impl<C> Dismiss for ControllerInner<C> {
    fn dismiss_animated(&self) {
        self.dismiss(true);
    }

    fn is_disposed(&self) -> bool {
        self.state.borrow().disposed
    }
}

impl<C> Drop for ControllerInner<C> {
    fn drop(&mut self) {
        self.dispose();
    }
}
