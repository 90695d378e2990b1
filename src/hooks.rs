//! Custom hooks for the timer view.

use gloo_timers::callback::Interval;
use pomodoro_timer::TimerState;
use yew::prelude::*;

use crate::config::TICK_MS;

/// Drives the countdown for the lifetime of the owning component.
///
/// While the timer is running with time remaining, a one-second [`Interval`]
/// decrements it. The interval is dropped, so no further ticks fire, as soon
/// as that condition stops holding or the component unmounts. When the
/// countdown reaches zero the hook fires `on_complete` (the notification
/// sound) and swaps the work/break interval.
///
/// The effect re-runs on every change of `(is_running, time_left, is_break)`,
/// so each scheduled interval always closes over the current state.
#[hook]
pub fn use_countdown(timer: UseStateHandle<TimerState>, on_complete: Callback<()>) {
    use_effect_with(
        (timer.is_running, timer.time_left, timer.is_break),
        move |&(is_running, time_left, _)| {
            let interval = if is_running && time_left > 0 {
                let timer = timer.clone();
                Some(Interval::new(TICK_MS, move || {
                    let mut next = *timer;
                    next.tick();
                    timer.set(next);
                }))
            } else {
                if time_left == 0 {
                    on_complete.emit(());
                    let mut next = *timer;
                    next.complete_interval();
                    timer.set(next);
                }
                None
            };
            move || drop(interval)
        },
    );
}
