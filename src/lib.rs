//! Core countdown logic for the pomodoro timer.
//!
//! Everything in this crate is pure and DOM-free so it can be unit tested on
//! the host target; the Yew view in `main.rs` owns the state handle and the
//! periodic tick.

use log::{debug, info};

/// Fixed interval lengths.
pub mod durations {
    /// Length of a work interval in seconds (40 minutes).
    pub const WORK_SECS: u32 = 40 * 60;
    /// Length of a break interval in seconds (8 minutes).
    pub const BREAK_SECS: u32 = 8 * 60;
}

use durations::{BREAK_SECS, WORK_SECS};

/// Full state of the countdown widget.
///
/// The four reachable states are idle/running crossed with work/break, each
/// parameterized by `time_left`. Invariant: `time_left` never exceeds the
/// current interval's duration and never goes below 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    /// Seconds remaining in the current interval.
    pub time_left: u32,
    /// Whether the countdown is actively decrementing.
    pub is_running: bool,
    /// Whether the current interval is a break (`true`) or work (`false`).
    pub is_break: bool,
}

impl Default for TimerState {
    /// Idle at the start of a full work interval.
    fn default() -> Self {
        TimerState {
            time_left: WORK_SECS,
            is_running: false,
            is_break: false,
        }
    }
}

impl TimerState {
    /// Duration of the interval the timer is currently in.
    pub fn interval_duration(&self) -> u32 {
        if self.is_break {
            BREAK_SECS
        } else {
            WORK_SECS
        }
    }

    /// Start or pause the countdown. Nothing but `is_running` changes.
    pub fn toggle(&mut self) {
        self.is_running = !self.is_running;
        debug!(
            "timer {} at {}",
            if self.is_running { "started" } else { "paused" },
            format_seconds(self.time_left)
        );
    }

    /// Advance the countdown by one second. A no-op unless the timer is
    /// running with time remaining, so stray ticks can never underflow.
    pub fn tick(&mut self) {
        if self.is_running && self.time_left > 0 {
            self.time_left -= 1;
        }
    }

    /// Swap work/break once the countdown has hit zero.
    ///
    /// The new interval starts idle: the user has to press start again at
    /// every boundary. That is intentional product behavior, not a bug.
    pub fn complete_interval(&mut self) {
        self.is_break = !self.is_break;
        self.time_left = self.interval_duration();
        self.is_running = false;
        info!(
            "interval complete, next up: {} ({})",
            if self.is_break { "break" } else { "work" },
            format_seconds(self.time_left)
        );
    }

    /// Back to an idle work interval from any state.
    pub fn reset(&mut self) {
        *self = TimerState::default();
        debug!("timer reset");
    }

    /// How far through the current interval we are, 0.0 (just started) to
    /// 100.0 (complete).
    pub fn progress_percent(&self) -> f64 {
        let duration = self.interval_duration();
        (duration - self.time_left) as f64 / duration as f64 * 100.0
    }

    /// Prompt shown above the ring.
    pub fn status_label(&self) -> &'static str {
        if self.is_break {
            "Take a break!"
        } else {
            "Stay focused!"
        }
    }

    /// `time_left` rendered as `MM:SS`.
    pub fn formatted_time(&self) -> String {
        format_seconds(self.time_left)
    }
}

/// Render a second count as `MM:SS`, both fields zero-padded to two digits.
/// Minutes are not clamped; 6000 seconds formats as `100:00`.
pub fn format_seconds(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::durations::{BREAK_SECS, WORK_SECS};
    use super::*;

    #[test]
    fn formats_seconds_as_zero_padded_min_sec() {
        assert_eq!(format_seconds(0), "00:00");
        assert_eq!(format_seconds(5), "00:05");
        assert_eq!(format_seconds(59), "00:59");
        assert_eq!(format_seconds(60), "01:00");
        assert_eq!(format_seconds(125), "02:05");
        assert_eq!(format_seconds(BREAK_SECS), "08:00");
        assert_eq!(format_seconds(WORK_SECS), "40:00");
    }

    #[test]
    fn minutes_are_not_clamped_to_two_digits() {
        assert_eq!(format_seconds(6000), "100:00");
    }

    #[test]
    fn starts_idle_at_full_work_interval() {
        let state = TimerState::default();
        assert!(!state.is_running);
        assert!(!state.is_break);
        assert_eq!(state.time_left, 2400);
        assert_eq!(state.formatted_time(), "40:00");
        assert_eq!(state.status_label(), "Stay focused!");
    }

    #[test]
    fn toggle_flips_running_and_nothing_else() {
        let mut state = TimerState::default();
        state.toggle();
        assert!(state.is_running);
        assert_eq!(state.time_left, WORK_SECS);
        assert!(!state.is_break);
        state.toggle();
        assert!(!state.is_running);
        assert_eq!(state.time_left, WORK_SECS);
    }

    #[test]
    fn tick_decrements_by_one_while_running() {
        let mut state = TimerState::default();
        state.toggle();
        state.tick();
        assert_eq!(state.time_left, WORK_SECS - 1);
        state.tick();
        state.tick();
        assert_eq!(state.time_left, WORK_SECS - 3);
    }

    #[test]
    fn tick_is_a_noop_while_paused() {
        let mut state = TimerState::default();
        state.tick();
        assert_eq!(state.time_left, WORK_SECS);
    }

    #[test]
    fn tick_floors_at_zero() {
        let mut state = TimerState {
            time_left: 1,
            is_running: true,
            is_break: false,
        };
        state.tick();
        assert_eq!(state.time_left, 0);
        state.tick();
        assert_eq!(state.time_left, 0);
    }

    #[test]
    fn work_interval_completes_into_idle_break() {
        let mut state = TimerState {
            time_left: 0,
            is_running: true,
            is_break: false,
        };
        state.complete_interval();
        assert!(!state.is_running);
        assert!(state.is_break);
        assert_eq!(state.time_left, 480);
        assert_eq!(state.status_label(), "Take a break!");
    }

    #[test]
    fn break_interval_completes_into_idle_work() {
        let mut state = TimerState {
            time_left: 0,
            is_running: true,
            is_break: true,
        };
        state.complete_interval();
        assert!(!state.is_running);
        assert!(!state.is_break);
        assert_eq!(state.time_left, 2400);
    }

    #[test]
    fn reset_returns_to_idle_work_from_any_state() {
        let mut mid_break = TimerState {
            time_left: 123,
            is_running: true,
            is_break: true,
        };
        mid_break.reset();
        assert_eq!(mid_break, TimerState::default());

        let mut paused_work = TimerState {
            time_left: 7,
            is_running: false,
            is_break: false,
        };
        paused_work.reset();
        assert_eq!(paused_work, TimerState::default());
    }

    #[test]
    fn progress_runs_from_zero_to_hundred() {
        let mut state = TimerState::default();
        assert_eq!(state.progress_percent(), 0.0);
        state.time_left = 0;
        assert_eq!(state.progress_percent(), 100.0);

        let half_break = TimerState {
            time_left: BREAK_SECS / 2,
            is_running: true,
            is_break: true,
        };
        assert_eq!(half_break.progress_percent(), 50.0);
    }

    #[test]
    fn full_cycle_walks_work_then_break() {
        let mut state = TimerState::default();
        state.toggle();
        for _ in 0..WORK_SECS {
            state.tick();
        }
        assert_eq!(state.time_left, 0);
        assert_eq!(state.progress_percent(), 100.0);

        state.complete_interval();
        assert_eq!((state.is_running, state.is_break, state.time_left), (false, true, BREAK_SECS));

        state.toggle();
        for _ in 0..BREAK_SECS {
            state.tick();
        }
        state.complete_interval();
        assert_eq!((state.is_running, state.is_break, state.time_left), (false, false, WORK_SECS));
    }
}
