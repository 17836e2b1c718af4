/// Per-edge distances, used both for safe-area padding and for view insets
/// (on-screen keyboard, system bars).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };

    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Insets with only the vertical edges set.
    pub fn vertical(top: f32, bottom: f32) -> Self {
        Self {
            top,
            bottom,
            ..Self::ZERO
        }
    }
}

/// A snapshot of the anchor's size and absolute screen position.
///
/// Re-taken from the host's render tree on every positioning pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl AnchorGeometry {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the same geometry shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// A snapshot of the screen the toast is placed on.
///
/// `padding` is the safe area; `insets` are the parts of the screen currently obscured by
/// transient system UI (typically the on-screen keyboard at the bottom).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportContext {
    pub width: f32,
    pub height: f32,
    pub padding: EdgeInsets,
    pub insets: EdgeInsets,
}

impl ViewportContext {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            padding: EdgeInsets::ZERO,
            insets: EdgeInsets::ZERO,
        }
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_insets(mut self, insets: EdgeInsets) -> Self {
        self.insets = insets;
        self
    }

    /// The vertical band not covered by view insets, as `(top, height)`.
    pub fn visible_band(&self) -> (f32, f32) {
        let top = self.insets.top;
        let height = self.height - self.insets.top - self.insets.bottom;
        (top, height)
    }
}

/// Placement preference for the vertical side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShowAbove {
    /// Pick the side from the anchor position and the available space.
    #[default]
    Auto,
    Above,
    Below,
}

impl ShowAbove {
    /// Returns the forced side, or `None` for [`ShowAbove::Auto`].
    pub fn forced(self) -> Option<VerticalSide> {
        match self {
            Self::Auto => None,
            Self::Above => Some(VerticalSide::Above),
            Self::Below => Some(VerticalSide::Below),
        }
    }
}

impl From<Option<bool>> for ShowAbove {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Self::Auto,
            Some(true) => Self::Above,
            Some(false) => Self::Below,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalSide {
    Above,
    Below,
}

impl VerticalSide {
    pub fn is_above(self) -> bool {
        matches!(self, Self::Above)
    }
}

/// The computed placement of a toast.
///
/// Every positioning pass produces a fresh value; observers receive whole values, never
/// partial updates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementResult {
    pub side: VerticalSide,
    /// Anchor-relative left edge. The surface centers the toast content around
    /// `x + anchor.width / 2`.
    pub x: f32,
    /// Absolute vertical reference point, clamped into the safe viewport.
    pub y: f32,
    /// Horizontal center after clamping into the padded viewport.
    pub center_x: f32,
    /// Maximum width available to the toast content.
    pub max_width: f32,
}

impl PlacementResult {
    /// Left edge of toast content of `toast_width` centered on this placement.
    pub fn content_left(&self, toast_width: f32) -> f32 {
        self.center_x - toast_width / 2.0
    }

    /// Right edge of toast content of `toast_width` centered on this placement.
    pub fn content_right(&self, toast_width: f32) -> f32 {
        self.center_x + toast_width / 2.0
    }
}
