use std::cell::RefCell;
use std::rc::{Rc, Weak};

use anchor_toast::{AnimationEvent, AnimationStatus, PlacementConfig, PlacementResult, VerticalSide};

use crate::{Easing, Observable, Overlay, OverlayEntry, SubscriptionId, SurfaceError, Tween};

/// Timing and shape of the entrance/exit effect played by [`TweenOverlay`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TweenEntryOptions {
    pub enter_ms: u64,
    pub exit_ms: u64,
    pub easing: Easing,
    /// Scale at progress 0.
    pub initial_scale: f32,
    /// Distance the toast travels toward its resting place while entering.
    pub slide_distance: f32,
}

impl Default for TweenEntryOptions {
    fn default() -> Self {
        Self {
            enter_ms: 250,
            exit_ms: 200,
            easing: Easing::EaseOutCubic,
            initial_scale: 0.8,
            slide_distance: 12.0,
        }
    }
}

impl TweenEntryOptions {
    pub fn with_durations(mut self, enter_ms: u64, exit_ms: u64) -> Self {
        self.enter_ms = enter_ms;
        self.exit_ms = exit_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// The combined scale + opacity + slide effect at a given animation progress.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub scale: f32,
    pub opacity: f32,
    /// Vertical displacement from the resting position. Toasts above the anchor start lower
    /// (toward the anchor), toasts below start higher.
    pub slide_y: f32,
}

impl Effect {
    pub fn at(progress: f32, side: VerticalSide, options: &TweenEntryOptions) -> Self {
        let p = progress.clamp(0.0, 1.0);
        let toward_anchor = match side {
            VerticalSide::Above => 1.0,
            VerticalSide::Below => -1.0,
        };
        Self {
            scale: options.initial_scale + (1.0 - options.initial_scale) * p,
            opacity: p,
            slide_y: (1.0 - p) * options.slide_distance * toward_anchor,
        }
    }
}

/// What a renderer needs to draw one mounted toast.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastFrame<C> {
    pub content: C,
    pub placement: PlacementResult,
    pub status: AnimationStatus,
    pub effect: Effect,
}

struct EntryState<C> {
    content: C,
    placement: PlacementResult,
    status: AnimationStatus,
    progress: f32,
    tween: Option<Tween>,
    /// Progress target requested by `forward`/`reverse`, started on the next tick.
    pending: Option<f32>,
    mounted: bool,
}

/// A headless [`Overlay`] that animates entries with [`Tween`]s.
///
/// Hosts without their own animation system can mount toasts here and draw
/// [`TweenOverlay::frames`] every frame.
pub struct TweenOverlay<C> {
    options: TweenEntryOptions,
    entries: RefCell<Vec<Weak<RefCell<EntryState<C>>>>>,
}

impl<C: Clone + 'static> TweenOverlay<C> {
    pub fn new(options: TweenEntryOptions) -> Self {
        Self {
            options,
            entries: RefCell::new(Vec::new()),
        }
    }

    pub fn options(&self) -> &TweenEntryOptions {
        &self.options
    }

    /// Snapshots every mounted entry, oldest first.
    pub fn frames(&self) -> Vec<ToastFrame<C>> {
        let mut entries = self.entries.borrow_mut();
        entries.retain(|e| e.upgrade().is_some_and(|e| e.borrow().mounted));
        entries
            .iter()
            .filter_map(Weak::upgrade)
            .map(|e| {
                let e = e.borrow();
                ToastFrame {
                    content: e.content.clone(),
                    placement: e.placement,
                    status: e.status,
                    effect: Effect::at(e.progress, e.placement.side, &self.options),
                }
            })
            .collect()
    }

    pub fn mounted_count(&self) -> usize {
        self.frames().len()
    }
}

impl<C: Clone + 'static> Default for TweenOverlay<C> {
    fn default() -> Self {
        Self::new(TweenEntryOptions::default())
    }
}

impl<C: Clone + 'static> Overlay<C> for TweenOverlay<C> {
    fn mount(
        &self,
        content: C,
        placement: Observable<PlacementResult>,
        _config: &PlacementConfig,
    ) -> Box<dyn OverlayEntry> {
        let state = Rc::new(RefCell::new(EntryState {
            content,
            placement: placement.get(),
            status: AnimationStatus::Dismissed,
            progress: 0.0,
            tween: None,
            pending: None,
            mounted: true,
        }));

        let weak = Rc::downgrade(&state);
        let subscription = placement.subscribe(move |next| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().placement = *next;
            }
        });

        self.entries.borrow_mut().push(Rc::downgrade(&state));
        Box::new(TweenEntry {
            state,
            options: self.options,
            placement,
            subscription: Some(subscription),
        })
    }
}

/// An entry mounted by [`TweenOverlay`].
pub struct TweenEntry<C> {
    state: Rc<RefCell<EntryState<C>>>,
    options: TweenEntryOptions,
    placement: Observable<PlacementResult>,
    subscription: Option<SubscriptionId>,
}

impl<C> OverlayEntry for TweenEntry<C> {
    fn status(&self) -> AnimationStatus {
        self.state.borrow().status
    }

    fn forward(&mut self) {
        let mut st = self.state.borrow_mut();
        if st.mounted && st.status.apply(AnimationEvent::Show) {
            st.pending = Some(1.0);
        }
    }

    fn reverse(&mut self) -> Result<(), SurfaceError> {
        let mut st = self.state.borrow_mut();
        if !st.mounted {
            return Err(SurfaceError::Detached);
        }
        let status = st.status;
        if !st.status.apply(AnimationEvent::Hide) {
            return Err(SurfaceError::InvalidPhase { status });
        }
        st.pending = Some(0.0);
        Ok(())
    }

    fn tick(&mut self, now_ms: u64) {
        let options = self.options;
        let mut st = self.state.borrow_mut();
        if !st.mounted {
            return;
        }

        if let Some(target) = st.pending.take() {
            let duration = if target > 0.5 {
                options.enter_ms
            } else {
                options.exit_ms
            };
            let running = st.tween;
            st.tween = Some(match running {
                Some(mut running) => {
                    running.retarget(now_ms, target, duration);
                    running
                }
                None => Tween::new(st.progress, target, now_ms, duration, options.easing),
            });
        }

        let Some(tween) = st.tween else {
            return;
        };
        st.progress = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            st.progress = tween.to;
            st.tween = None;
            st.status.apply(AnimationEvent::Finish);
        }
    }

    fn unmount(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.placement.unsubscribe(id);
        }
        let mut st = self.state.borrow_mut();
        st.mounted = false;
        st.tween = None;
        st.pending = None;
        st.status = AnimationStatus::Dismissed;
    }
}

impl<C> Drop for TweenEntry<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}
