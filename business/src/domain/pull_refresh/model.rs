/// Tuning for the pull gesture, in view units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullConfig {
    /// Distance at release that triggers a refresh.
    pub threshold: f64,
    /// Upper bound of the visual pull offset.
    pub max_pull: f64,
    /// Multiplier applied to raw finger travel.
    pub resistance: f64,
    /// Past this distance the platform's own scroll/bounce is suppressed.
    pub activation_floor: f64,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            threshold: 80.0,
            max_pull: 120.0,
            resistance: 0.5,
            activation_floor: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullPhase {
    Idle,
    Pulling,
    Refreshing,
}

impl std::fmt::Display for PullPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PullPhase::Idle => write!(f, "idle"),
            PullPhase::Pulling => write!(f, "pulling"),
            PullPhase::Refreshing => write!(f, "refreshing"),
        }
    }
}

/// Snapshot of the gesture as seen by the view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PullGestureState {
    pub is_pulling: bool,
    pub is_refreshing: bool,
    pub pull_distance: f64,
}

impl PullGestureState {
    pub fn phase(&self) -> PullPhase {
        if self.is_refreshing {
            PullPhase::Refreshing
        } else if self.is_pulling {
            PullPhase::Pulling
        } else {
            PullPhase::Idle
        }
    }

    /// `min(pull_distance / threshold, 1)`.
    pub fn progress(&self, threshold: f64) -> f64 {
        if threshold <= 0.0 {
            return 0.0;
        }
        (self.pull_distance / threshold).min(1.0)
    }
}

/// What the view should do with the platform's native scroll for a move event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Native,
    Suppress,
}
