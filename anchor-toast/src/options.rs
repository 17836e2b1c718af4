use crate::ShowAbove;

/// Default gap between the anchor and the toast.
pub const DEFAULT_OFFSET: f32 = 8.0;
/// Default minimum vertical margin kept between the toast reference point and the safe viewport.
pub const DEFAULT_SCREEN_PADDING: f32 = 16.0;
/// Default minimum horizontal margin between the toast and the screen edges.
pub const DEFAULT_HORIZONTAL_PADDING: f32 = 16.0;
/// Below this much free space under the anchor, automatic placement prefers the top side
/// (when the top side has more room).
pub const DEFAULT_MIN_SPACE_BELOW: f32 = 100.0;
/// Default auto-dismiss delay.
pub const DEFAULT_DURATION_MS: u64 = 2_000;

/// Per-call configuration for showing a toast.
///
/// All fields are public; the `with_*` builders exist so call sites can override a couple of
/// values and keep the rest at their defaults:
///
/// ```
/// use anchor_toast::{PlacementConfig, ShowAbove};
///
/// let config = PlacementConfig::new(1_500)
///     .with_show_above(ShowAbove::Below)
///     .with_haptic_feedback(false);
/// assert_eq!(config.offset, anchor_toast::DEFAULT_OFFSET);
/// ```
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlacementConfig {
    /// Gap between the anchor and the toast.
    pub offset: f32,
    /// Minimum vertical margin from the safe viewport edges.
    pub screen_padding: f32,
    /// Minimum horizontal margin from the screen edges.
    pub horizontal_padding: f32,
    pub show_above: ShowAbove,
    pub enable_haptic_feedback: bool,
    /// Auto-dismiss delay in milliseconds.
    pub duration_ms: u64,
    /// Free space below the anchor under which automatic placement considers flipping above.
    pub min_space_below: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            screen_padding: DEFAULT_SCREEN_PADDING,
            horizontal_padding: DEFAULT_HORIZONTAL_PADDING,
            show_above: ShowAbove::Auto,
            enable_haptic_feedback: true,
            duration_ms: DEFAULT_DURATION_MS,
            min_space_below: DEFAULT_MIN_SPACE_BELOW,
        }
    }
}

impl PlacementConfig {
    /// Creates a config with the given auto-dismiss delay and default placement.
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Sets both the vertical screen padding and the horizontal padding.
    pub fn with_screen_padding(mut self, screen_padding: f32) -> Self {
        self.screen_padding = screen_padding;
        self.horizontal_padding = screen_padding;
        self
    }

    pub fn with_horizontal_padding(mut self, horizontal_padding: f32) -> Self {
        self.horizontal_padding = horizontal_padding;
        self
    }

    pub fn with_show_above(mut self, show_above: impl Into<ShowAbove>) -> Self {
        self.show_above = show_above.into();
        self
    }

    pub fn with_haptic_feedback(mut self, enabled: bool) -> Self {
        self.enable_haptic_feedback = enabled;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_min_space_below(mut self, min_space_below: f32) -> Self {
        self.min_space_below = min_space_below;
        self
    }
}

impl core::fmt::Debug for PlacementConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PlacementConfig")
            .field("offset", &self.offset)
            .field("screen_padding", &self.screen_padding)
            .field("horizontal_padding", &self.horizontal_padding)
            .field("show_above", &self.show_above)
            .field("enable_haptic_feedback", &self.enable_haptic_feedback)
            .field("duration_ms", &self.duration_ms)
            .field("min_space_below", &self.min_space_below)
            .finish_non_exhaustive()
    }
}
