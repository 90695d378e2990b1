//! Stateless view pieces for the timer UI.
//!
//! Components here render purely from props; the owning component in
//! `main.rs` holds all state.

use pomodoro_timer::durations::{BREAK_SECS, WORK_SECS};
use yew::prelude::*;

use crate::config::{RING_CIRCUMFERENCE, RING_RADIUS, RING_SIZE, RING_STROKE_WIDTH};

/// Stroke offset that fills the ring clockwise as progress rises from 0
/// (full offset, empty ring) to 100 (zero offset, closed ring).
pub fn ring_dashoffset(progress_percent: f64) -> f64 {
    RING_CIRCUMFERENCE - RING_CIRCUMFERENCE * progress_percent / 100.0
}

#[derive(Properties, PartialEq)]
pub struct ProgressRingProps {
    /// Elapsed share of the current interval, 0 to 100.
    pub progress: f64,
    /// Readout shown in the middle of the ring, already formatted as MM:SS.
    pub readout: String,
}

/// Circular countdown indicator with the numeric readout centered inside.
///
/// The track circle is static; the progress circle is the same circle drawn
/// with a dash the length of its circumference, shortened via
/// `stroke-dashoffset`. The ring is rotated -90deg in CSS so it fills from
/// twelve o'clock.
#[function_component(ProgressRing)]
pub fn progress_ring(props: &ProgressRingProps) -> Html {
    let center = (RING_SIZE / 2).to_string();
    html! {
        <div class="ring-wrapper">
            <div class="ring-readout">{ &props.readout }</div>
            <svg class="ring"
                width={RING_SIZE.to_string()}
                height={RING_SIZE.to_string()}>
                <circle class="ring-track"
                    cx={center.clone()}
                    cy={center.clone()}
                    r={RING_RADIUS.to_string()}
                    stroke-width={RING_STROKE_WIDTH.to_string()}
                    fill="transparent"
                />
                <circle class="ring-progress"
                    cx={center.clone()}
                    cy={center}
                    r={RING_RADIUS.to_string()}
                    stroke-width={RING_STROKE_WIDTH.to_string()}
                    fill="transparent"
                    stroke-dasharray={RING_CIRCUMFERENCE.to_string()}
                    stroke-dashoffset={ring_dashoffset(props.progress).to_string()}
                    stroke-linecap="round"
                />
            </svg>
        </div>
    }
}

/// Static labels showing the configured interval lengths.
#[function_component(IntervalLegend)]
pub fn interval_legend() -> Html {
    html! {
        <div class="legend">
            <div class="legend-item">
                { focus_icon() }
                <span>{ format!("Work: {}m", WORK_SECS / 60) }</span>
            </div>
            <div class="legend-item">
                { coffee_icon() }
                <span>{ format!("Break: {}m", BREAK_SECS / 60) }</span>
            </div>
        </div>
    }
}

pub fn play_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24"
            fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round">
            <polygon points="6 3 20 12 6 21 6 3" />
        </svg>
    }
}

pub fn pause_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24"
            fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round">
            <rect x="6" y="4" width="4" height="16" rx="1" />
            <rect x="14" y="4" width="4" height="16" rx="1" />
        </svg>
    }
}

pub fn reset_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24"
            fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round">
            <path d="M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8" />
            <path d="M3 3v5h5" />
        </svg>
    }
}

fn focus_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="20" height="20"
            fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round">
            <circle cx="12" cy="12" r="10" />
            <circle cx="12" cy="12" r="6" />
            <circle cx="12" cy="12" r="2" />
        </svg>
    }
}

fn coffee_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="20" height="20"
            fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round">
            <path d="M17 8h1a4 4 0 1 1 0 8h-1" />
            <path d="M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4Z" />
            <line x1="6" x2="6" y1="2" y2="4" />
            <line x1="10" x2="10" y1="2" y2="4" />
            <line x1="14" x2="14" y1="2" y2="4" />
        </svg>
    }
}
