//! Robot state tracking from the universal heartbeat.
//!
//! [`HeartbeatMonitor`] is fed every received heartbeat and polled once per
//! dispatcher step. It takes the current [`Instant`] as an argument instead of
//! reading a clock, so firmware passes `Instant::now()` and tests pass fixed
//! instants.
//!
//! State rules:
//!
//! * no heartbeat yet, or the last one is older than the timeout: [`RobotState::Lost`];
//! * last heartbeat has `system_watchdog` set: [`RobotState::Enabled`];
//! * otherwise: [`RobotState::Disabled`].
use embassy_time::{Duration, Instant};

use crate::protocol::messages::heartbeat::HeartbeatMsg;
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::DEFAULT_HEARTBEAT_TIMEOUT_MS;

/// Robot state as seen from the heartbeat stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RobotState {
    /// No heartbeat within the timeout window.
    Lost,
    /// Heartbeats arrive but actuators must stay off.
    Disabled,
    /// Heartbeats arrive with the system watchdog fed.
    Enabled,
}

/// Heartbeat-loss detector.
#[derive(Debug, Clone)]
pub struct HeartbeatMonitor {
    timeout: Duration,
    last_seen: Option<Instant>,
    last: Option<HeartbeatMsg>,
    state: RobotState,
}

impl HeartbeatMonitor {
    /// Monitor declaring the robot lost after `timeout_ms` without heartbeat.
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms as u64),
            last_seen: None,
            last: None,
            state: RobotState::Lost,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Current state, as of the last update or check.
    pub fn state(&self) -> RobotState {
        self.state
    }

    /// Most recent heartbeat, even if it has since expired.
    pub fn last_heartbeat(&self) -> Option<&HeartbeatMsg> {
        self.last.as_ref()
    }

    /// Record a heartbeat received at `now`.
    pub fn on_heartbeat(&mut self, heartbeat: &HeartbeatMsg, now: Instant) -> RobotState {
        let state = if heartbeat.system_watchdog() {
            RobotState::Enabled
        } else {
            RobotState::Disabled
        };
        self.last_seen = Some(now);
        self.last = Some(*heartbeat);
        self.transition(state)
    }

    /// Feed an arbitrary frame; anything but a valid heartbeat is ignored.
    ///
    /// Returns the new state when the frame was a heartbeat.
    pub fn on_frame(&mut self, frame: &CanFrame, now: Instant) -> Option<RobotState> {
        let heartbeat = HeartbeatMsg::from_frame(frame).ok()?;
        Some(self.on_heartbeat(&heartbeat, now))
    }

    /// Re-evaluate the timeout at `now`.
    ///
    /// The robot is lost once strictly more than the timeout has elapsed
    /// since the last heartbeat.
    pub fn check(&mut self, now: Instant) -> RobotState {
        let expired = match self.last_seen {
            Some(seen) => now.saturating_duration_since(seen) > self.timeout,
            None => true,
        };
        if expired {
            self.transition(RobotState::Lost)
        } else {
            self.state
        }
    }

    fn transition(&mut self, state: RobotState) -> RobotState {
        if state != self.state {
            #[cfg(feature = "defmt")]
            defmt::info!("Robot state {} -> {}", self.state, state);
            self.state = state;
        }
        state
    }
}

impl Default for HeartbeatMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_HEARTBEAT_TIMEOUT_MS)
    }
}
