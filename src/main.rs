//! Pomodoro timer web app built with Yew.
//! Wires the countdown state machine to the view and the notification sound.

use pomodoro_timer::TimerState;
use yew::prelude::*;

mod audio;
mod components;
mod config;
mod hooks;

use components::{pause_icon, play_icon, reset_icon, IntervalLegend, ProgressRing};
use config::NOTIFICATION_SOUND_URL;
use hooks::use_countdown;

/// Primary application component owning the timer state.
#[function_component(Main)]
fn main_component() -> Html {
    let timer = use_state(TimerState::default);

    // Boundary side effect: best-effort sound, never blocks the swap.
    let on_complete = Callback::from(|_: ()| audio::play_notification(NOTIFICATION_SOUND_URL));
    use_countdown(timer.clone(), on_complete);

    let toggle_timer = {
        let timer = timer.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *timer;
            next.toggle();
            timer.set(next);
        })
    };

    let reset_timer = {
        let timer = timer.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *timer;
            next.reset();
            timer.set(next);
        })
    };

    html! {
        <div class="container">
            <div class="card">
                <div class="header">
                    <h1>{ "Pomodoro Timer" }</h1>
                    <p class="status-label">{ timer.status_label() }</p>
                </div>

                <ProgressRing progress={timer.progress_percent()} readout={timer.formatted_time()} />

                <div class="controls">
                    <button class="btn-primary"
                        aria-label={if timer.is_running { "Pause" } else { "Start" }}
                        onclick={toggle_timer}>
                        { if timer.is_running { pause_icon() } else { play_icon() } }
                    </button>
                    <button class="btn-secondary" aria-label="Reset" onclick={reset_timer}>
                        { reset_icon() }
                    </button>
                </div>

                <IntervalLegend />
            </div>
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the Yew renderer.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<Main>::new().render();
}
