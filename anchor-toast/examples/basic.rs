// Example: resolving where a toast goes for a few anchors on a phone-sized screen.
use anchor_toast::{
    AnchorGeometry, EdgeInsets, PlacementConfig, ShowAbove, ViewportContext, resolve_placement,
};

fn main() {
    let viewport =
        ViewportContext::new(390.0, 844.0).with_padding(EdgeInsets::vertical(47.0, 34.0));
    let config = PlacementConfig::default();

    for (name, anchor) in [
        ("top button", AnchorGeometry::new(20.0, 80.0, 120.0, 44.0)),
        ("middle row", AnchorGeometry::new(0.0, 430.0, 390.0, 56.0)),
        ("tab bar", AnchorGeometry::new(150.0, 770.0, 90.0, 40.0)),
    ] {
        let p = resolve_placement(anchor, viewport, &config);
        println!("{name}: side={:?} origin=({}, {}) max_width={}", p.side, p.x, p.y, p.max_width);
    }

    // Keyboard up: the visible band shrinks and the middle row flips above.
    let keyboard = viewport.with_insets(EdgeInsets::vertical(0.0, 336.0));
    let p = resolve_placement(AnchorGeometry::new(0.0, 430.0, 390.0, 56.0), keyboard, &config);
    println!("middle row with keyboard: side={:?} y={}", p.side, p.y);

    let forced = config.with_show_above(ShowAbove::Above);
    let p = resolve_placement(AnchorGeometry::new(20.0, 80.0, 120.0, 44.0), viewport, &forced);
    println!("top button, forced above: side={:?} y={}", p.side, p.y);
}
