use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::logger::Logger;
use crate::domain::pull_refresh::errors::RefreshError;
use crate::domain::pull_refresh::model::{PullConfig, PullGestureState, ScrollBehavior};
use crate::domain::pull_refresh::services::RefreshOperation;

#[derive(Debug, Default)]
struct Gesture {
    state: PullGestureState,
    anchor_y: f64,
}

/// Turns raw touch events on a scrollable surface into a pull distance and,
/// past the threshold, a single refresh.
///
/// Transitions take `&self` so touch events keep flowing while a refresh is
/// being awaited; the `is_refreshing` flag keeps those events from starting a
/// second refresh.
pub struct PullToRefreshHandler {
    config: PullConfig,
    gesture: Mutex<Gesture>,
    logger: Arc<dyn Logger>,
}

impl PullToRefreshHandler {
    pub fn new(config: PullConfig, logger: Arc<dyn Logger>) -> Self {
        Self {
            config,
            gesture: Mutex::new(Gesture::default()),
            logger,
        }
    }

    pub fn config(&self) -> &PullConfig {
        &self.config
    }

    pub fn state(&self) -> PullGestureState {
        self.lock().state
    }

    /// Ratio in `[0, 1]` for the pull indicator.
    pub fn progress(&self) -> f64 {
        self.state().progress(self.config.threshold)
    }

    /// Starts a gesture when the surface is scrolled to the very top.
    pub fn on_touch_start(&self, scroll_top: f64, y: f64) {
        if scroll_top != 0.0 {
            return;
        }

        let mut gesture = self.lock();
        gesture.anchor_y = y;
        gesture.state.is_pulling = true;
        if !gesture.state.is_refreshing {
            gesture.state.pull_distance = 0.0;
        }
    }

    pub fn on_touch_move(&self, scroll_top: f64, y: f64) -> ScrollBehavior {
        let mut gesture = self.lock();
        if !gesture.state.is_pulling || gesture.state.is_refreshing || scroll_top != 0.0 {
            return ScrollBehavior::Native;
        }

        let delta = y - gesture.anchor_y;
        if delta <= 0.0 {
            return ScrollBehavior::Native;
        }

        let distance = (delta * self.config.resistance).min(self.config.max_pull);
        gesture.state.pull_distance = distance;

        if distance > self.config.activation_floor {
            ScrollBehavior::Suppress
        } else {
            ScrollBehavior::Native
        }
    }

    /// Ends the gesture. Past the threshold this runs `operation` once and
    /// returns its outcome; the gesture is back to idle afterwards whether it
    /// succeeded, failed, or the returned future was dropped.
    pub async fn on_touch_end(&self, operation: &dyn RefreshOperation) -> Result<(), RefreshError> {
        {
            let mut gesture = self.lock();
            if !gesture.state.is_pulling {
                return Ok(());
            }
            gesture.state.is_pulling = false;

            if gesture.state.is_refreshing {
                return Ok(());
            }

            if gesture.state.pull_distance < self.config.threshold {
                gesture.state.pull_distance = 0.0;
                return Ok(());
            }

            gesture.state.is_refreshing = true;
            gesture.state.pull_distance = self.config.threshold;
        }

        self.logger.info("Pull released past threshold, refreshing");
        let _reset = ResetOnDrop { handler: self };

        let result = operation.refresh().await;
        if let Err(ref e) = result {
            self.logger.warn(&format!("Refresh failed: {}", e));
        }
        result
    }

    fn lock(&self) -> MutexGuard<'_, Gesture> {
        self.gesture.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct ResetOnDrop<'a> {
    handler: &'a PullToRefreshHandler,
}

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        self.handler.lock().state = PullGestureState::default();
    }
}
