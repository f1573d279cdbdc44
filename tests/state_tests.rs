// Host-side tests for the timer queue and the loading/playback state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod playback {
        include!("../src/core/playback.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
    pub mod timers {
        include!("../src/core/timers.rs");
    }
}

use crate::core::state::{AppState, Change};
use crate::core::timers::Timers;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Ev {
    A,
    B,
    Tick,
}

fn drain(t: &mut Timers<Ev>, now: f64) -> Vec<(f64, Ev)> {
    std::iter::from_fn(|| t.pop_due(now))
        .map(|f| (f.due_ms, f.event))
        .collect()
}

#[test]
fn once_fires_when_due_and_only_once() {
    let mut t = Timers::new(0.0);
    t.schedule_once(100.0, Ev::A);
    assert!(drain(&mut t, 99.9).is_empty());
    assert_eq!(drain(&mut t, 100.0), vec![(100.0, Ev::A)]);
    assert!(drain(&mut t, 1000.0).is_empty());
    assert!(t.is_empty());
}

#[test]
fn earliest_first_and_ties_in_insertion_order() {
    let mut t = Timers::new(0.0);
    t.schedule_once(50.0, Ev::B);
    t.schedule_once(20.0, Ev::A);
    t.schedule_once(50.0, Ev::A);
    assert_eq!(
        drain(&mut t, 60.0),
        vec![(20.0, Ev::A), (50.0, Ev::B), (50.0, Ev::A)]
    );
}

#[test]
fn repeating_timer_keeps_its_grid() {
    let mut t = Timers::new(0.0);
    let id = t.schedule_repeating(1000.0, Ev::Tick);
    assert!(drain(&mut t, 999.0).is_empty());
    assert_eq!(drain(&mut t, 1000.0), vec![(1000.0, Ev::Tick)]);
    assert_eq!(drain(&mut t, 2500.0), vec![(2000.0, Ev::Tick)]);
    assert_eq!(drain(&mut t, 3000.0), vec![(3000.0, Ev::Tick)]);
    // a long stall fires once, then resumes on the grid
    assert_eq!(drain(&mut t, 7200.0), vec![(4000.0, Ev::Tick)]);
    assert_eq!(drain(&mut t, 8000.0), vec![(8000.0, Ev::Tick)]);
    assert!(t.is_pending(id));
}

#[test]
fn cancel_by_handle() {
    let mut t = Timers::new(0.0);
    let a = t.schedule_once(10.0, Ev::A);
    let b = t.schedule_repeating(10.0, Ev::B);
    assert!(t.cancel(a));
    assert!(!t.cancel(a));
    assert_eq!(drain(&mut t, 10.0), vec![(10.0, Ev::B)]);
    assert!(t.cancel(b));
    assert!(drain(&mut t, 1000.0).is_empty());
    t.schedule_once(1.0, Ev::A);
    t.clear();
    assert!(t.is_empty());
}

#[test]
fn scheduling_from_a_handler_counts_from_the_deadline() {
    let mut t = Timers::new(0.0);
    t.schedule_once(100.0, Ev::A);
    let f = t.pop_due(250.0).unwrap();
    assert_eq!(f.event, Ev::A);
    assert_eq!(t.now_ms(), 100.0);
    t.schedule_once(50.0, Ev::B);
    assert_eq!(drain(&mut t, 250.0), vec![(150.0, Ev::B)]);
    assert_eq!(t.now_ms(), 250.0);
}

fn step(state: &mut AppState, now: f64) -> Vec<Change> {
    let mut out = vec![];
    state.advance(now, &mut out);
    out
}

fn without_ticks(changes: Vec<Change>) -> Vec<Change> {
    changes.into_iter().filter(|c| *c != Change::ClockTick).collect()
}

#[test]
fn starts_loading_and_stopped() {
    let s = AppState::new(0.0);
    assert!(s.is_loading());
    assert!(!s.is_playing());
    assert_eq!(s.playback().volume_percent(), 50);
    assert_eq!(s.pending_timers(), 2);
}

#[test]
fn loading_ends_at_2500_and_autoplay_follows_500_later() {
    let mut s = AppState::new(0.0);
    assert!(without_ticks(step(&mut s, 2499.0)).is_empty());
    assert!(s.is_loading());
    assert_eq!(without_ticks(step(&mut s, 2500.0)), vec![Change::LoadingFinished]);
    assert!(!s.is_loading());
    assert!(!s.is_playing());
    assert!(without_ticks(step(&mut s, 2999.0)).is_empty());
    assert_eq!(
        without_ticks(step(&mut s, 3000.0)),
        vec![Change::PlaybackChanged { playing: true }]
    );
    assert!(s.is_playing());
}

#[test]
fn late_frame_fires_loading_before_autoplay() {
    let mut s = AppState::new(0.0);
    assert_eq!(
        without_ticks(step(&mut s, 10_000.0)),
        vec![
            Change::LoadingFinished,
            Change::PlaybackChanged { playing: true }
        ]
    );
}

#[test]
fn clock_ticks_every_second() {
    let mut s = AppState::new(0.0);
    let mut ticks = 0;
    for ms in (0..=5000).step_by(100) {
        ticks += step(&mut s, ms as f64)
            .iter()
            .filter(|c| **c == Change::ClockTick)
            .count();
    }
    assert_eq!(ticks, 5);
}

#[test]
fn manual_toggle_before_autoplay_wins() {
    let mut s = AppState::new(0.0);
    step(&mut s, 2600.0);
    assert!(s.toggle_playback());
    assert!(!s.toggle_playback());
    assert!(without_ticks(step(&mut s, 5000.0)).is_empty());
    assert!(!s.is_playing());
}

#[test]
fn toggle_during_loading_suppresses_autoplay() {
    let mut s = AppState::new(0.0);
    assert!(s.toggle_playback());
    assert_eq!(without_ticks(step(&mut s, 4000.0)), vec![Change::LoadingFinished]);
    assert!(s.is_playing());
}

#[test]
fn toggle_after_autoplay_pauses() {
    let mut s = AppState::new(0.0);
    step(&mut s, 3000.0);
    assert!(s.is_playing());
    assert!(!s.toggle_playback());
    assert!(s.toggle_playback());
}

#[test]
fn volume_is_clamped() {
    let mut s = AppState::new(0.0);
    assert_eq!(s.set_volume(73), 73);
    assert_eq!(s.set_volume(140), 100);
    assert_eq!(s.set_volume(-4), 0);
    assert_eq!(s.playback().volume_percent(), 0);
    assert!(!s.is_playing());
}

#[test]
fn teardown_cancels_everything() {
    let mut s = AppState::new(0.0);
    step(&mut s, 2600.0);
    s.teardown();
    assert!(s.is_torn_down());
    assert_eq!(s.pending_timers(), 0);
    assert!(step(&mut s, 100_000.0).is_empty());
    assert!(!s.is_playing());
}
