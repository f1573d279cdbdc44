use super::constants::{AUTOPLAY_DELAY_MS, CLOCK_INTERVAL_MS, LOADING_DELAY_MS};
use super::playback::PlaybackState;
use super::timers::{TimerId, Timers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppTimer {
    LoadingDone,
    Autoplay,
    ClockTick,
}

/// Externally visible transition produced while advancing time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    LoadingFinished,
    PlaybackChanged { playing: bool },
    ClockTick,
}

/// Root state for the screen: loading gate, playback toggle/volume and the
/// timers that drive them.
///
/// Time is supplied by the caller in milliseconds since an arbitrary origin.
/// The loading timer is armed at construction; the autoplay timer is armed
/// only once loading has finished, so the two always fire in that order.
#[derive(Clone, Debug)]
pub struct AppState {
    loading: bool,
    playback: PlaybackState,
    timers: Timers<AppTimer>,
    loading_timer: Option<TimerId>,
    autoplay_timer: Option<TimerId>,
    clock_timer: Option<TimerId>,
    manual_toggle: bool,
    torn_down: bool,
}

impl AppState {
    pub fn new(now_ms: f64) -> Self {
        let mut timers = Timers::new(now_ms);
        let loading_timer = timers.schedule_once(LOADING_DELAY_MS, AppTimer::LoadingDone);
        let clock_timer = timers.schedule_repeating(CLOCK_INTERVAL_MS, AppTimer::ClockTick);
        Self {
            loading: true,
            playback: PlaybackState::default(),
            timers,
            loading_timer: Some(loading_timer),
            autoplay_timer: None,
            clock_timer: Some(clock_timer),
            manual_toggle: false,
            torn_down: false,
        }
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[inline]
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Fire every timer due by `now_ms`, appending the resulting transitions.
    pub fn advance(&mut self, now_ms: f64, changes: &mut Vec<Change>) {
        if self.torn_down {
            return;
        }
        while let Some(fired) = self.timers.pop_due(now_ms) {
            match fired.event {
                AppTimer::LoadingDone => {
                    self.loading_timer = None;
                    if !self.loading {
                        continue;
                    }
                    self.loading = false;
                    changes.push(Change::LoadingFinished);
                    if !self.manual_toggle {
                        self.autoplay_timer =
                            Some(self.timers.schedule_once(AUTOPLAY_DELAY_MS, AppTimer::Autoplay));
                    }
                }
                AppTimer::Autoplay => {
                    self.autoplay_timer = None;
                    if self.playback.play() {
                        changes.push(Change::PlaybackChanged { playing: true });
                    }
                }
                AppTimer::ClockTick => changes.push(Change::ClockTick),
            }
        }
    }

    /// User click on the play/pause button. A manual toggle pre-empts a
    /// pending or future autoplay.
    pub fn toggle_playback(&mut self) -> bool {
        self.manual_toggle = true;
        if let Some(id) = self.autoplay_timer.take() {
            self.timers.cancel(id);
        }
        self.playback.toggle();
        self.playback.is_playing()
    }

    pub fn set_volume(&mut self, percent: i32) -> u8 {
        self.playback.set_volume(percent)
    }

    /// Cancel every timer this state owns; later `advance` calls do nothing.
    pub fn teardown(&mut self) {
        for id in [
            self.loading_timer.take(),
            self.autoplay_timer.take(),
            self.clock_timer.take(),
        ]
        .into_iter()
        .flatten()
        {
            self.timers.cancel(id);
        }
        self.torn_down = true;
    }
}
