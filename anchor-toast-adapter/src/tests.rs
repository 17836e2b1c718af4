use crate::*;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

struct FakeHost {
    anchors: RefCell<HashMap<AnchorId, AnchorGeometry>>,
    viewport: Cell<ViewportContext>,
    scroll: RefCell<HashMap<AnchorId, ScrollNotifier>>,
}

impl FakeHost {
    fn new(viewport: ViewportContext) -> Rc<Self> {
        Rc::new(Self {
            anchors: RefCell::new(HashMap::new()),
            viewport: Cell::new(viewport),
            scroll: RefCell::new(HashMap::new()),
        })
    }

    fn place(&self, anchor: AnchorId, geometry: AnchorGeometry) {
        self.anchors.borrow_mut().insert(anchor, geometry);
    }

    fn remove(&self, anchor: AnchorId) {
        self.anchors.borrow_mut().remove(&anchor);
    }

    fn set_insets(&self, insets: EdgeInsets) {
        self.viewport.set(self.viewport.get().with_insets(insets));
    }

    fn attach_scroll(&self, anchor: AnchorId) -> ScrollNotifier {
        let notifier = ScrollNotifier::new(0.0);
        self.scroll.borrow_mut().insert(anchor, notifier.clone());
        notifier
    }
}

impl AnchorHost for FakeHost {
    fn measure(&self, anchor: AnchorId) -> Option<AnchorGeometry> {
        self.anchors.borrow().get(&anchor).copied()
    }

    fn viewport(&self) -> ViewportContext {
        self.viewport.get()
    }

    fn scroll_notifier(&self, anchor: AnchorId) -> Option<ScrollNotifier> {
        self.scroll.borrow().get(&anchor).cloned()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    Mount(&'static str),
    Forward(&'static str),
    Reverse(&'static str),
    Unmount(&'static str),
}

#[derive(Default)]
struct OverlayShared {
    log: RefCell<Vec<Event>>,
    live: Cell<usize>,
    max_live: Cell<usize>,
    /// Entries ignore `forward` and stay `Dismissed`.
    inert: Cell<bool>,
    fail_reverse: Cell<bool>,
    on_reverse: RefCell<Option<Rc<dyn Fn()>>>,
}

impl OverlayShared {
    fn push(&self, event: Event) {
        self.log.borrow_mut().push(event);
    }
}

#[derive(Default)]
struct RecordingOverlay {
    shared: Rc<OverlayShared>,
}

impl RecordingOverlay {
    fn log(&self) -> Vec<Event> {
        self.shared.log.borrow().clone()
    }

    fn live(&self) -> usize {
        self.shared.live.get()
    }

    fn on_reverse(&self, f: impl Fn() + 'static) {
        *self.shared.on_reverse.borrow_mut() = Some(Rc::new(f));
    }
}

impl Overlay<&'static str> for RecordingOverlay {
    fn mount(
        &self,
        content: &'static str,
        _placement: Observable<PlacementResult>,
        _config: &PlacementConfig,
    ) -> Box<dyn OverlayEntry> {
        let shared = Rc::clone(&self.shared);
        shared.push(Event::Mount(content));
        shared.live.set(shared.live.get() + 1);
        shared
            .max_live
            .set(shared.max_live.get().max(shared.live.get()));
        Box::new(FakeEntry {
            label: content,
            status: AnimationStatus::Dismissed,
            shared,
            mounted: true,
        })
    }
}

struct FakeEntry {
    label: &'static str,
    status: AnimationStatus,
    shared: Rc<OverlayShared>,
    mounted: bool,
}

impl OverlayEntry for FakeEntry {
    fn status(&self) -> AnimationStatus {
        self.status
    }

    fn forward(&mut self) {
        self.shared.push(Event::Forward(self.label));
        if !self.shared.inert.get() {
            self.status = AnimationStatus::Forward;
        }
    }

    fn reverse(&mut self) -> Result<(), SurfaceError> {
        self.shared.push(Event::Reverse(self.label));
        let hook = self.shared.on_reverse.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
        if self.shared.fail_reverse.get() {
            return Err(SurfaceError::Host("animation controller released".into()));
        }
        self.status = AnimationStatus::Reverse;
        Ok(())
    }

    fn tick(&mut self, _now_ms: u64) {
        self.status = match self.status {
            AnimationStatus::Forward => AnimationStatus::Completed,
            AnimationStatus::Reverse => AnimationStatus::Dismissed,
            other => other,
        };
    }

    fn unmount(&mut self) {
        if self.mounted {
            self.mounted = false;
            self.shared.push(Event::Unmount(self.label));
            self.shared.live.set(self.shared.live.get() - 1);
        }
        self.status = AnimationStatus::Dismissed;
    }
}

struct CountingHaptics(Rc<Cell<usize>>);

impl Haptics for CountingHaptics {
    fn light_impact(&self) {
        self.0.set(self.0.get() + 1);
    }
}

fn screen() -> ViewportContext {
    ViewportContext::new(400.0, 800.0)
}

fn setup() -> (
    Rc<FakeHost>,
    Rc<RecordingOverlay>,
    ToastController<&'static str>,
    AnchorId,
) {
    let host = FakeHost::new(screen());
    let overlay = Rc::new(RecordingOverlay::default());
    let controller = ToastController::new(host.clone(), overlay.clone());
    let anchor = AnchorId::next();
    host.place(anchor, AnchorGeometry::new(100.0, 100.0, 80.0, 40.0));
    controller.register_anchor(anchor);
    (host, overlay, controller, anchor)
}

fn config(duration_ms: u64) -> PlacementConfig {
    PlacementConfig::new(duration_ms)
}

#[test]
fn show_requires_a_registered_measurable_anchor() {
    let host = FakeHost::new(screen());
    let overlay = Rc::new(RecordingOverlay::default());
    let controller: ToastController<&'static str> =
        ToastController::new(host.clone(), overlay.clone());

    assert!(!controller.show_toast("none", config(1000), 0));

    let anchor = AnchorId::next();
    controller.register_anchor(anchor);
    assert!(!controller.show_toast("unmeasured", config(1000), 0));
    assert!(overlay.log().is_empty());

    host.place(anchor, AnchorGeometry::new(100.0, 100.0, 80.0, 40.0));
    assert!(controller.show_toast("ok", config(1000), 0));
    assert!(controller.is_showing());
    assert_eq!(overlay.log(), vec![Event::Mount("ok"), Event::Forward("ok")]);

    let placement = controller.placement().unwrap();
    assert_eq!(placement.side, VerticalSide::Below);
    assert_eq!(placement.y, 148.0);
}

#[test]
fn haptics_follow_the_config_flag() {
    let (_host, _overlay, controller, _anchor) = setup();
    let pulses = Rc::new(Cell::new(0));
    let controller = controller.with_haptics(CountingHaptics(pulses.clone()));

    controller.show_toast("a", config(1000), 0);
    assert_eq!(pulses.get(), 1);

    controller.show_toast("b", config(1000).with_haptic_feedback(false), 0);
    assert_eq!(pulses.get(), 1);

    controller.dispose();
    controller.show_toast("c", config(1000), 0);
    assert_eq!(pulses.get(), 1);
}

#[test]
fn new_toast_replaces_the_old_one_before_mounting() {
    let (_host, overlay, controller, _anchor) = setup();

    controller.show_toast("a", config(1000), 0);
    controller.tick(0);
    assert_eq!(controller.status(), AnimationStatus::Completed);

    controller.show_toast("b", config(1000), 10);
    assert_eq!(
        overlay.log(),
        vec![
            Event::Mount("a"),
            Event::Forward("a"),
            Event::Unmount("a"),
            Event::Mount("b"),
            Event::Forward("b"),
        ]
    );
    assert_eq!(overlay.live(), 1);
    assert_eq!(overlay.shared.max_live.get(), 1);
}

#[test]
fn replacing_mid_exit_skips_the_old_exit_animation() {
    let (_host, overlay, controller, _anchor) = setup();

    controller.show_toast("a", config(1000), 0);
    controller.tick(0);
    controller.dismiss(true);
    assert_eq!(controller.status(), AnimationStatus::Reverse);

    controller.show_toast("b", config(1000), 5);
    assert_eq!(overlay.live(), 1);
    assert_eq!(overlay.shared.max_live.get(), 1);
    assert_eq!(controller.status(), AnimationStatus::Forward);

    // The next tick must not mistake b's entrance for a's finished exit.
    controller.tick(10);
    assert!(controller.is_showing());
    assert_eq!(controller.status(), AnimationStatus::Completed);
}

#[test]
fn toast_dismisses_itself_after_its_duration() {
    let host = FakeHost::new(screen());
    let overlay = Rc::new(TweenOverlay::<&'static str>::default());
    let controller = ToastController::new(host.clone(), overlay.clone());
    let anchor = AnchorId::next();
    host.place(anchor, AnchorGeometry::new(100.0, 100.0, 80.0, 40.0));
    controller.register_anchor(anchor);

    assert!(controller.show_toast("saved", config(1000), 0));

    let mut gone_at = None;
    let mut now = 0;
    while now <= 2000 {
        controller.tick(now);
        if now < 1000 {
            assert!(controller.is_showing(), "dismissed early at {now}");
            assert_eq!(overlay.mounted_count(), 1);
        }
        if !controller.is_showing() {
            gone_at = Some(now);
            break;
        }
        now += 16;
    }

    let gone_at = gone_at.expect("toast never dismissed");
    let exit_ms = overlay.options().exit_ms;
    assert!(gone_at >= 1000);
    assert!(gone_at <= 1000 + exit_ms + 2 * 16, "gone at {gone_at}");
    assert_eq!(overlay.mounted_count(), 0);
}

#[test]
fn superseded_timer_never_dismisses_the_new_toast() {
    let (_host, overlay, controller, _anchor) = setup();

    controller.show_toast("a", config(100), 0);
    controller.show_toast("b", config(5000), 0);

    for now in [0, 50, 100, 150, 500, 1000] {
        controller.tick(now);
        assert!(controller.is_showing());
    }
    assert_eq!(controller.status(), AnimationStatus::Completed);
    assert!(!overlay.log().contains(&Event::Reverse("b")));

    // Same thing with the replacement arriving later than the first tick.
    controller.show_toast("c", config(100), 2000);
    controller.tick(2050);
    controller.show_toast("d", config(1000), 2060);
    controller.tick(2120);
    controller.tick(2500);
    assert!(controller.is_showing());
    assert!(!overlay.log().contains(&Event::Reverse("d")));

    controller.tick(3060);
    assert!(overlay.log().contains(&Event::Reverse("d")));
}

#[test]
fn animated_dismiss_waits_for_the_exit_animation() {
    let (host, overlay, controller, anchor) = setup();
    let notifier = host.attach_scroll(anchor);

    controller.show_toast("a", config(1000), 0);
    controller.tick(0);
    controller.dismiss(true);

    assert!(controller.is_showing());
    assert_eq!(controller.status(), AnimationStatus::Reverse);
    assert_eq!(overlay.live(), 1);
    // Tracking continues while the exit plays.
    assert_eq!(notifier.listener_count(), 1);

    assert_eq!(controller.tick(16), None);
    assert!(!controller.is_showing());
    assert_eq!(overlay.live(), 0);
    assert_eq!(notifier.listener_count(), 0);
    assert_eq!(overlay.log()[2..], [Event::Reverse("a"), Event::Unmount("a")]);
}

#[test]
fn dismiss_while_entering_plays_the_exit() {
    let (_host, overlay, controller, _anchor) = setup();

    controller.show_toast("a", config(1000), 0);
    assert_eq!(controller.status(), AnimationStatus::Forward);
    controller.dismiss(true);
    assert_eq!(controller.status(), AnimationStatus::Reverse);
    assert_eq!(overlay.live(), 1);
}

#[test]
fn immediate_dismiss_skips_the_animation() {
    let (_host, overlay, controller, _anchor) = setup();

    controller.show_toast("a", config(1000), 0);
    controller.tick(0);
    controller.dismiss(false);

    assert!(!controller.is_showing());
    assert_eq!(overlay.live(), 0);
    assert!(!overlay.log().contains(&Event::Reverse("a")));

    // Nothing left to dismiss.
    controller.dismiss(true);
    controller.dismiss(false);
    assert_eq!(overlay.log().len(), 3);
}

#[test]
fn dismiss_without_running_animation_unmounts_at_once() {
    let (_host, overlay, controller, _anchor) = setup();
    overlay.shared.inert.set(true);

    controller.show_toast("a", config(1000), 0);
    assert_eq!(controller.status(), AnimationStatus::Dismissed);
    controller.dismiss(true);

    assert!(!controller.is_showing());
    assert!(!overlay.log().contains(&Event::Reverse("a")));
    assert_eq!(overlay.live(), 0);
}

#[test]
fn second_dismiss_during_exit_unmounts_at_once() {
    let (_host, overlay, controller, _anchor) = setup();

    controller.show_toast("a", config(1000), 0);
    controller.tick(0);
    controller.dismiss(true);
    controller.dismiss(true);

    assert!(!controller.is_showing());
    assert_eq!(overlay.live(), 0);
}

#[test]
fn failed_exit_animation_falls_back_to_unmount() {
    let (_host, overlay, controller, _anchor) = setup();
    overlay.shared.fail_reverse.set(true);

    controller.show_toast("a", config(1000), 0);
    controller.tick(0);
    controller.dismiss(true);

    assert!(!controller.is_showing());
    assert_eq!(overlay.live(), 0);
    assert_eq!(overlay.log()[2..], [Event::Reverse("a"), Event::Unmount("a")]);
}

#[test]
fn dispose_is_idempotent_and_final() {
    let before = live_count();
    let (host, overlay, controller, anchor) = setup();
    let notifier = host.attach_scroll(anchor);
    assert_eq!(live_count(), before + 1);

    controller.show_toast("a", config(1000), 0);
    controller.tick(0);
    let placement = controller.placement_stream().unwrap();
    assert_eq!(notifier.listener_count(), 1);

    controller.dispose();
    assert!(controller.is_disposed());
    assert!(!controller.is_showing());
    assert_eq!(overlay.live(), 0);
    assert!(!overlay.log().contains(&Event::Reverse("a")));
    assert_eq!(notifier.listener_count(), 0);
    assert!(placement.is_closed());
    assert_eq!(controller.anchor(), None);
    assert_eq!(live_count(), before);

    let log_len = overlay.log().len();
    controller.dispose();
    assert!(!controller.show_toast("b", config(1000), 10));
    controller.dismiss(true);
    controller.dismiss(false);
    controller.register_anchor(anchor);
    assert_eq!(controller.tick(20), None);
    assert_eq!(controller.anchor(), None);
    assert_eq!(overlay.log().len(), log_len);
    assert_eq!(live_count(), before);
}

#[test]
fn dispose_during_exit_animation_unmounts_at_once() {
    let (_host, overlay, controller, _anchor) = setup();

    controller.show_toast("a", config(1000), 0);
    controller.tick(0);
    controller.dismiss(true);
    controller.dispose();

    assert_eq!(overlay.live(), 0);
    assert_eq!(controller.tick(16), None);
}

#[test]
fn dropping_the_last_handle_disposes() {
    let before = live_count();
    let (host, overlay, controller, anchor) = setup();
    let notifier = host.attach_scroll(anchor);

    controller.show_toast("a", config(1000), 0);
    assert_eq!(notifier.listener_count(), 1);
    assert_eq!(live_count(), before + 1);

    drop(controller);
    assert_eq!(overlay.live(), 0);
    assert_eq!(notifier.listener_count(), 0);
    assert_eq!(live_count(), before);
}

#[test]
fn dismiss_all_hides_every_toast() {
    let host = FakeHost::new(screen());
    let overlay = Rc::new(RecordingOverlay::default());
    let mut controllers = Vec::new();
    for i in 0..3 {
        let controller: ToastController<&'static str> =
            ToastController::new(host.clone(), overlay.clone());
        let anchor = AnchorId::next();
        let y = 100.0 + 60.0 * i as f32;
        host.place(anchor, AnchorGeometry::new(100.0, y, 80.0, 40.0));
        controller.register_anchor(anchor);
        controller.show_toast("t", config(5000), 0);
        controller.tick(0);
        controllers.push(controller);
    }
    assert_eq!(overlay.live(), 3);

    // The first exit animation disposes the second controller mid-broadcast.
    let victim = controllers[1].clone();
    overlay.on_reverse(move || victim.dispose());

    assert!(dismiss_all() >= 2);
    assert!(controllers[1].is_disposed());
    for controller in &controllers {
        controller.tick(16);
    }
    assert_eq!(overlay.live(), 0);
    assert!(controllers.iter().all(|c| !c.is_showing()));
}

#[test]
fn dismiss_all_tolerates_self_disposal() {
    let (_host, overlay, controller, _anchor) = setup();
    controller.show_toast("a", config(5000), 0);
    controller.tick(0);

    let me = controller.clone();
    overlay.on_reverse(move || me.dispose());

    dismiss_all();
    assert!(controller.is_disposed());
    assert!(!controller.is_showing());
    assert_eq!(overlay.live(), 0);
}

#[test]
fn scrolling_moves_the_toast() {
    let (host, _overlay, controller, anchor) = setup();
    let notifier = host.attach_scroll(anchor);

    controller.show_toast("a", config(1000), 0);
    assert_eq!(controller.placement().unwrap().y, 148.0);

    host.place(anchor, AnchorGeometry::new(100.0, 60.0, 80.0, 40.0));
    notifier.set(40.0);
    assert_eq!(controller.placement().unwrap().y, 108.0);

    // Anchor scrolled out of the render tree: the last placement is kept.
    host.remove(anchor);
    notifier.set(400.0);
    assert_eq!(controller.placement().unwrap().y, 108.0);

    controller.dismiss(false);
    assert_eq!(notifier.listener_count(), 0);
}

#[test]
fn keyboard_insets_are_picked_up_on_tick() {
    let (host, _overlay, controller, anchor) = setup();
    host.place(anchor, AnchorGeometry::new(100.0, 330.0, 80.0, 40.0));

    controller.show_toast("a", config(5000), 0);
    assert_eq!(controller.placement().unwrap().side, VerticalSide::Below);

    host.set_insets(EdgeInsets::vertical(0.0, 300.0));
    let placement = controller.tick(16).unwrap();
    assert_eq!(placement.side, VerticalSide::Above);
    assert_eq!(placement.y, 330.0 - anchor_toast::DEFAULT_OFFSET);

    // Keyboard gone again.
    host.set_insets(EdgeInsets::ZERO);
    let placement = controller.tick(32).unwrap();
    assert_eq!(placement.side, VerticalSide::Below);
}

#[test]
fn viewport_change_event_refreshes_without_a_tick() {
    let (host, _overlay, controller, anchor) = setup();
    host.place(anchor, AnchorGeometry::new(100.0, 330.0, 80.0, 40.0));
    assert!(!controller.notify_viewport_changed());

    controller.show_toast("a", config(5000), 0);
    host.set_insets(EdgeInsets::vertical(0.0, 300.0));
    assert!(controller.notify_viewport_changed());
    assert_eq!(controller.placement().unwrap().side, VerticalSide::Above);
}

#[test]
fn placement_stream_is_reused_across_sessions() {
    let (_host, _overlay, controller, _anchor) = setup();

    controller.show_toast("a", config(1000), 0);
    let first = controller.placement_stream().unwrap();
    controller.show_toast("b", config(1000), 10);
    let second = controller.placement_stream().unwrap();
    assert!(first.ptr_eq(&second));

    controller.dismiss(false);
    assert!(!second.is_closed());
    controller.dispose();
    assert!(second.is_closed());
}

#[test]
fn placement_stream_only_moves_while_the_controller_tracks() {
    let (host, _overlay, controller, anchor) = setup();
    let notifier = host.attach_scroll(anchor);
    assert!(controller.placement_stream().is_none());

    controller.show_toast("a", config(1000), 0);
    let stream = controller.placement_stream().unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    stream.subscribe({
        let seen = seen.clone();
        move |p: &PlacementResult| seen.borrow_mut().push(p.y)
    });

    host.place(anchor, AnchorGeometry::new(100.0, 60.0, 80.0, 40.0));
    notifier.set(40.0);
    assert_eq!(*seen.borrow(), vec![108.0]);
    assert_eq!(controller.placement().unwrap().y, 108.0);

    controller.dismiss(false);
    host.place(anchor, AnchorGeometry::new(100.0, 20.0, 80.0, 40.0));
    notifier.set(80.0);
    assert_eq!(*seen.borrow(), vec![108.0]);
    assert_eq!(controller.placement(), None);
}

#[test]
fn toast_follows_a_newly_registered_anchor() {
    let (host, _overlay, controller, _anchor) = setup();
    controller.show_toast("a", config(1000), 0);
    assert_eq!(controller.placement().unwrap().y, 148.0);

    let other = AnchorId::next();
    host.place(other, AnchorGeometry::new(100.0, 200.0, 80.0, 40.0));
    controller.register_anchor(other);
    assert_eq!(controller.anchor(), Some(other));
    assert_eq!(controller.placement().unwrap().y, 248.0);
}

#[test]
fn anchor_wrapper_tracks_mount_rebuild_and_unmount() {
    let (host, _overlay, controller, _anchor) = setup();
    controller.unregister_anchor(controller.anchor().unwrap());
    assert_eq!(controller.anchor(), None);

    let mut a = ToastAnchor::new(controller.clone(), "button a");
    let mut b = ToastAnchor::new(controller.clone(), "button b");
    host.place(a.id(), AnchorGeometry::new(10.0, 100.0, 80.0, 40.0));
    host.place(b.id(), AnchorGeometry::new(10.0, 200.0, 80.0, 40.0));

    // Not mounted yet: rebuilds do nothing.
    a.rebuild();
    assert_eq!(controller.anchor(), None);

    a.mount();
    assert_eq!(controller.anchor(), Some(a.id()));
    b.mount();
    assert_eq!(controller.anchor(), Some(b.id()));
    a.rebuild();
    assert_eq!(controller.anchor(), Some(a.id()));

    // b is not the current anchor; unmounting it leaves a in place.
    b.unmount();
    assert_eq!(controller.anchor(), Some(a.id()));

    assert_eq!(*a.child(), "button a");
    drop(a);
    assert_eq!(controller.anchor(), None);
}

#[test]
fn anchor_wrapper_moves_to_a_new_controller() {
    let (host, overlay, first, _anchor) = setup();
    let second: ToastController<&'static str> =
        ToastController::new(host.clone(), overlay.clone());

    let mut anchor = ToastAnchor::new(first.clone(), ());
    anchor.mount();
    assert_eq!(first.anchor(), Some(anchor.id()));

    anchor.update_controller(second.clone());
    assert_eq!(first.anchor(), None);
    assert_eq!(second.anchor(), Some(anchor.id()));
    assert!(anchor.controller().ptr_eq(&second));
}

#[test]
fn tween_overlay_plays_scale_opacity_and_slide() {
    let host = FakeHost::new(screen());
    let overlay = Rc::new(TweenOverlay::<&'static str>::new(
        TweenEntryOptions::default()
            .with_durations(200, 100)
            .with_easing(Easing::Linear),
    ));
    let controller = ToastController::new(host.clone(), overlay.clone());
    let anchor = AnchorId::next();
    host.place(anchor, AnchorGeometry::new(100.0, 100.0, 80.0, 40.0));
    controller.register_anchor(anchor);

    controller.show_toast("hello", config(1000), 0);
    controller.tick(0);
    let frame = overlay.frames().pop().unwrap();
    assert_eq!(frame.content, "hello");
    assert_eq!(frame.status, AnimationStatus::Forward);
    assert_eq!(frame.effect.opacity, 0.0);
    assert_eq!(frame.effect.scale, 0.8);
    // Below the anchor: starts displaced upward, toward it.
    assert!(frame.effect.slide_y < 0.0);

    controller.tick(100);
    let frame = overlay.frames().pop().unwrap();
    assert!((frame.effect.opacity - 0.5).abs() < 1e-6);

    controller.tick(200);
    let frame = overlay.frames().pop().unwrap();
    assert_eq!(frame.status, AnimationStatus::Completed);
    assert_eq!(frame.effect.opacity, 1.0);
    assert_eq!(frame.effect.scale, 1.0);
    assert_eq!(frame.effect.slide_y, 0.0);
    assert_eq!(frame.placement, controller.placement().unwrap());

    controller.dismiss(true);
    controller.tick(250);
    controller.tick(300);
    let frame = overlay.frames().pop().unwrap();
    assert_eq!(frame.status, AnimationStatus::Reverse);
    assert!((frame.effect.opacity - 0.5).abs() < 1e-6);

    controller.tick(350);
    assert!(overlay.frames().is_empty());
    assert!(!controller.is_showing());
}

#[test]
fn tween_entry_follows_placement_updates() {
    let (host, _unused, _c, anchor) = setup();
    let notifier = host.attach_scroll(anchor);
    let overlay = Rc::new(TweenOverlay::<&'static str>::default());
    let controller = ToastController::new(host.clone(), overlay.clone());
    controller.register_anchor(anchor);

    controller.show_toast("a", config(1000), 0);
    host.place(anchor, AnchorGeometry::new(100.0, 150.0, 80.0, 40.0));
    notifier.set(-50.0);

    let frame = overlay.frames().pop().unwrap();
    assert_eq!(frame.placement.y, 198.0);

    controller.dismiss(false);
    let placement = controller.placement_stream().unwrap();
    assert_eq!(placement.listener_count(), 0);
}

#[test]
fn tween_entry_rejects_reverse_when_not_visible() {
    let overlay = TweenOverlay::<()>::default();
    let placement = Observable::new(anchor_toast::resolve_placement(
        AnchorGeometry::new(0.0, 0.0, 10.0, 10.0),
        screen(),
        &PlacementConfig::default(),
    ));
    let mut entry = overlay.mount((), placement, &PlacementConfig::default());
    assert_eq!(
        entry.reverse(),
        Err(SurfaceError::InvalidPhase {
            status: AnimationStatus::Dismissed
        })
    );
    entry.unmount();
    assert_eq!(entry.reverse(), Err(SurfaceError::Detached));
}

#[test]
fn observable_notifies_only_on_change() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let value = Observable::new(1);
    let id = value.subscribe({
        let seen = seen.clone();
        move |v: &i32| seen.borrow_mut().push(*v)
    });

    assert!(!value.set(1));
    assert!(value.set(2));
    assert_eq!(*seen.borrow(), vec![2]);

    assert!(value.unsubscribe(id));
    assert!(!value.unsubscribe(id));
    value.set(3);
    assert_eq!(*seen.borrow(), vec![2]);

    value.close();
    value.subscribe(|_| panic!("closed observables drop listeners"));
    assert_eq!(value.listener_count(), 0);
    value.set(4);
    assert_eq!(value.get(), 4);
}

#[test]
fn tween_samples_and_retargets() {
    let mut t = Tween::new(0.0, 1.0, 100, 100, Easing::Linear);
    assert_eq!(t.sample(100), 0.0);
    assert_eq!(t.sample(150), 0.5);
    assert!(!t.is_done(199));
    assert!(t.is_done(200));

    t.retarget(150, 0.0, 50);
    assert_eq!(t.from, 0.5);
    assert_eq!(t.sample(175), 0.25);
    assert_eq!(Easing::EaseOutCubic.sample(1.0), 1.0);
}
