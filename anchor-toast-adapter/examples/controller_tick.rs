use std::cell::Cell;
use std::rc::Rc;

use anchor_toast_adapter::{
    AnchorGeometry, AnchorHost, AnchorId, EdgeInsets, PlacementConfig, ToastAnchor,
    ToastController, TweenOverlay, ViewportContext,
};

// A fake toolkit: one button that scrolls, and a keyboard that can be toggled.
struct DemoHost {
    button: AnchorGeometry,
    scroll: Cell<f32>,
    keyboard: Cell<bool>,
}

impl AnchorHost for DemoHost {
    fn measure(&self, _anchor: AnchorId) -> Option<AnchorGeometry> {
        Some(self.button.translated(0.0, -self.scroll.get()))
    }

    fn viewport(&self) -> ViewportContext {
        let vp = ViewportContext::new(390.0, 844.0);
        if self.keyboard.get() {
            vp.with_insets(EdgeInsets::vertical(0.0, 336.0))
        } else {
            vp
        }
    }
}

fn main() {
    // Example: driving a toast controller from a frame loop without any UI objects.
    //
    // An adapter would:
    // - wrap the anchor widget in a ToastAnchor and forward its lifecycle
    // - call show_toast from an app event
    // - call tick(now_ms) every frame and draw TweenOverlay::frames()
    let host = Rc::new(DemoHost {
        button: AnchorGeometry::new(135.0, 400.0, 120.0, 44.0),
        scroll: Cell::new(0.0),
        keyboard: Cell::new(false),
    });
    let overlay = Rc::new(TweenOverlay::<&'static str>::default());
    let controller = ToastController::new(host.clone(), overlay.clone());

    let mut anchor = ToastAnchor::new(controller.clone(), "Copy link");
    anchor.mount();

    controller.show_toast("Link copied", PlacementConfig::new(1_000), 0);

    let mut now_ms = 0u64;
    while controller.is_showing() {
        if now_ms == 192 {
            // Scroll events would normally come through AnchorHost::scroll_notifier.
            host.scroll.set(48.0);
            controller.notify_viewport_changed();
        }
        if now_ms == 400 {
            host.keyboard.set(true);
        }
        controller.tick(now_ms);
        if now_ms % 96 == 0 {
            for frame in overlay.frames() {
                println!(
                    "t={now_ms} {:?} side={:?} y={:.1} opacity={:.2} scale={:.2}",
                    frame.status,
                    frame.placement.side,
                    frame.placement.y,
                    frame.effect.opacity,
                    frame.effect.scale
                );
            }
        }
        now_ms += 16;
    }
    println!("dismissed at t={now_ms}");

    anchor.unmount();
    controller.dispose();
}
