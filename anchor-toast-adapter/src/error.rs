use anchor_toast::AnimationStatus;

/// A failure reported by an [`crate::OverlayEntry`] while driving its animation.
///
/// The controller never propagates these: a failed exit animation is treated as "nothing left
/// to animate" and the entry is unmounted immediately.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("overlay entry is no longer mounted")]
    Detached,
    #[error("cannot start the exit animation from {status:?}")]
    InvalidPhase { status: AnimationStatus },
    #[error("host animation failure: {0}")]
    Host(String),
}
