use crate::{AnchorGeometry, PlacementConfig, PlacementResult, VerticalSide, ViewportContext};

/// Computes where a toast anchored to `anchor` should appear.
///
/// This is a pure function: the same inputs always produce the same placement. It is called once
/// when a toast is shown and again every time the anchor or the viewport changes.
///
/// Degenerate inputs (a zero-sized anchor, a viewport narrower than twice the horizontal
/// padding, insets covering the whole screen) produce a collapsed but valid placement instead of
/// panicking.
pub fn resolve_placement(
    anchor: AnchorGeometry,
    viewport: ViewportContext,
    config: &PlacementConfig,
) -> PlacementResult {
    let side = config
        .show_above
        .forced()
        .unwrap_or_else(|| auto_side(&anchor, &viewport, config.min_space_below));

    let hp = config.horizontal_padding;
    let max_width = viewport.width - 2.0 * hp;
    let half_width = max_width / 2.0;
    let center_x = clamp_collapsed(
        anchor.center_x(),
        hp + half_width,
        viewport.width - hp - half_width,
    );
    let x = center_x - anchor.width / 2.0;

    let raw_y = match side {
        VerticalSide::Above => anchor.y - config.offset,
        VerticalSide::Below => anchor.bottom() + config.offset,
    };
    let y = clamp_collapsed(
        raw_y,
        viewport.padding.top + viewport.insets.top + config.screen_padding,
        viewport.height - viewport.padding.bottom - viewport.insets.bottom - config.screen_padding,
    );

    ttrace!(?side, x, y, max_width, "resolve_placement");

    PlacementResult {
        side,
        x,
        y,
        center_x,
        max_width,
    }
}

/// Free space between the anchor and the bottom of the safe, uncovered viewport.
pub fn available_below(anchor: &AnchorGeometry, viewport: &ViewportContext) -> f32 {
    viewport.height - anchor.bottom() - viewport.padding.bottom - viewport.insets.bottom
}

/// Free space between the top of the safe, uncovered viewport and the anchor.
pub fn available_above(anchor: &AnchorGeometry, viewport: &ViewportContext) -> f32 {
    anchor.y - viewport.padding.top - viewport.insets.top
}

fn auto_side(
    anchor: &AnchorGeometry,
    viewport: &ViewportContext,
    min_space_below: f32,
) -> VerticalSide {
    let below = available_below(anchor, viewport);
    let above = available_above(anchor, viewport);

    let (visible_top, visible_height) = viewport.visible_band();
    let visible_center = visible_top + visible_height / 2.0;

    let in_lower_half = anchor.center_y() > visible_center;
    let cramped_below = below < min_space_below && above > below;

    if in_lower_half || cramped_below {
        VerticalSide::Above
    } else {
        VerticalSide::Below
    }
}

/// Like `f32::clamp`, but an empty or inverted range collapses to `lo` instead of panicking.
pub(crate) fn clamp_collapsed(value: f32, lo: f32, hi: f32) -> f32 {
    match hi.partial_cmp(&lo) {
        Some(core::cmp::Ordering::Greater) => value.clamp(lo, hi),
        _ => lo,
    }
}
