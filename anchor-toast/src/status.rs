/// Phase of a toast's entrance/exit animation.
///
/// The only legal cycle is `Dismissed → Forward → Completed → Reverse → Dismissed`, with two
/// shortcuts: a running entrance may be reversed directly (`Forward → Reverse`), and an exit may
/// be interrupted by a new entrance (`Reverse → Forward`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationStatus {
    /// Not visible; either never shown or fully exited.
    #[default]
    Dismissed,
    /// Entrance animation running.
    Forward,
    /// Entrance finished; fully visible.
    Completed,
    /// Exit animation running.
    Reverse,
}

/// An event driving [`AnimationStatus`] transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationEvent {
    /// Start (or restart) the entrance animation.
    Show,
    /// Start the exit animation.
    Hide,
    /// The running animation reached its end.
    Finish,
}

impl AnimationStatus {
    /// `true` while the toast is on screen and an exit animation can be played.
    pub fn can_reverse(self) -> bool {
        matches!(self, Self::Forward | Self::Completed)
    }

    /// `true` while an animation is in flight.
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Forward | Self::Reverse)
    }

    /// `true` for every phase except [`AnimationStatus::Dismissed`].
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Dismissed)
    }

    /// Returns the phase reached by applying `event`, or `None` if the transition is not allowed.
    pub fn next(self, event: AnimationEvent) -> Option<Self> {
        use AnimationEvent::*;
        use AnimationStatus::*;

        match (self, event) {
            (Dismissed | Reverse, Show) => Some(Forward),
            (Forward | Completed, Hide) => Some(Reverse),
            (Forward, Finish) => Some(Completed),
            (Reverse, Finish) => Some(Dismissed),
            _ => None,
        }
    }

    /// Applies `event` in place. Returns `false` and leaves the phase untouched when the
    /// transition is not allowed.
    pub fn apply(&mut self, event: AnimationEvent) -> bool {
        match self.next(event) {
            Some(next) => {
                *self = next;
                true
            }
            None => {
                twarn!(from = ?*self, ?event, "rejected animation transition");
                false
            }
        }
    }
}
