use super::enums::{PickerField, RunState};
use crate::notifications::{Notifier, TIMER_DONE_MESSAGE};
use crate::ticker::{tick_duration, Ticker};
use chrono::{DateTime, Local};
use std::rc::Rc;
use std::time::Instant;

/// Convert an hours/minutes/seconds triple to total seconds
pub fn total_seconds(hours: u32, minutes: u32, seconds: u32) -> u32 {
    hours * 3600 + minutes * 60 + seconds
}

/// Format seconds as zero-padded "HH:MM:SS"
pub fn format_hms(total: u32) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Result of a single internal tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was not running; nothing changed
    Skipped,
    /// One second was consumed, countdown continues
    Counted,
    /// Countdown reached zero on this tick
    Completed,
}

/// Countdown timer state machine.
///
/// Owns the remaining time, the run state and the tick subscription.
/// Completion is reported through the injected notifier exactly once per
/// countdown.
pub struct TimerEngine {
    remaining_seconds: u32,
    run_state: RunState,
    ticker: Option<Ticker>,
    finished_at: Option<DateTime<Local>>,
    notifier: Rc<dyn Notifier>,
}

impl TimerEngine {
    pub fn new(notifier: Rc<dyn Notifier>) -> Self {
        Self {
            remaining_seconds: 0,
            run_state: RunState::Idle,
            ticker: None,
            finished_at: None,
            notifier,
        }
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// When the last countdown completed, if any
    pub fn finished_at(&self) -> Option<DateTime<Local>> {
        self.finished_at
    }

    /// Whether a tick subscription is currently armed
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Start a countdown of the given length.
    ///
    /// The duration is only honoured when leaving Idle. From Paused this
    /// resumes with the remaining time untouched; while Running it does nothing.
    pub fn start(&mut self, hours: u32, minutes: u32, seconds: u32, now: Instant) {
        match self.run_state {
            RunState::Idle => {
                self.remaining_seconds = total_seconds(hours, minutes, seconds);
                self.begin_ticking(now);
                log::debug!(
                    "timer started: {} ({}s)",
                    format_hms(self.remaining_seconds),
                    self.remaining_seconds
                );
            }
            RunState::Paused => self.resume(now),
            RunState::Running => {}
        }
    }

    /// Resume a paused countdown
    pub fn resume(&mut self, now: Instant) {
        if self.run_state == RunState::Paused {
            self.begin_ticking(now);
            log::debug!("timer resumed at {}", format_hms(self.remaining_seconds));
        }
    }

    /// Suspend ticking, keeping the remaining time
    pub fn pause(&mut self) {
        if self.run_state == RunState::Running {
            self.ticker = None;
            self.run_state = RunState::Paused;
            log::debug!("timer paused at {}", format_hms(self.remaining_seconds));
        }
    }

    /// Stop ticking and go Idle; the remaining time is left as is
    pub fn stop(&mut self) {
        self.ticker = None;
        if self.run_state != RunState::Idle {
            log::debug!("timer stopped at {}", format_hms(self.remaining_seconds));
        }
        self.run_state = RunState::Idle;
    }

    /// Stop ticking and clear the remaining time
    pub fn reset(&mut self) {
        self.stop();
        self.remaining_seconds = 0;
    }

    /// Primary button: pause when running, resume when paused, start when idle
    pub fn toggle(&mut self, hours: u32, minutes: u32, seconds: u32, now: Instant) {
        match self.run_state {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(now),
            RunState::Idle => self.start(hours, minutes, seconds, now),
        }
    }

    /// Remaining time as "HH:MM:SS"
    pub fn format_display(&self) -> String {
        format_hms(self.remaining_seconds)
    }

    /// Apply every tick that has come due by `now`
    pub fn poll(&mut self, now: Instant) -> TickOutcome {
        let due = match self.ticker.as_mut() {
            Some(ticker) => ticker.due(now),
            None => return TickOutcome::Skipped,
        };

        let mut outcome = TickOutcome::Skipped;
        for _ in 0..due {
            outcome = self.tick();
            if outcome != TickOutcome::Counted {
                break;
            }
        }
        outcome
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> TickOutcome {
        if self.run_state != RunState::Running {
            return TickOutcome::Skipped;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return TickOutcome::Counted;
        }

        self.stop();
        self.finished_at = Some(Local::now());
        log::info!("countdown complete");
        self.notifier.alert();
        self.notifier.announce(TIMER_DONE_MESSAGE);
        TickOutcome::Completed
    }

    fn begin_ticking(&mut self, now: Instant) {
        // Replacing the handle cancels any previous subscription
        self.ticker = Some(Ticker::start(now, tick_duration()));
        self.run_state = RunState::Running;
    }
}

/// Wheel-style hours/minutes/seconds selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationPicker {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub focus: PickerField,
}

impl Default for DurationPicker {
    fn default() -> Self {
        Self::new(0, 15, 0)
    }
}

impl DurationPicker {
    /// Create a picker, clamping each field into its range
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours: hours.min(PickerField::Hours.limit() - 1),
            minutes: minutes.min(PickerField::Minutes.limit() - 1),
            seconds: seconds.min(PickerField::Seconds.limit() - 1),
            focus: PickerField::Minutes,
        }
    }

    pub fn value(&self, field: PickerField) -> u32 {
        match field {
            PickerField::Hours => self.hours,
            PickerField::Minutes => self.minutes,
            PickerField::Seconds => self.seconds,
        }
    }

    fn value_mut(&mut self, field: PickerField) -> &mut u32 {
        match field {
            PickerField::Hours => &mut self.hours,
            PickerField::Minutes => &mut self.minutes,
            PickerField::Seconds => &mut self.seconds,
        }
    }

    pub fn focus_left(&mut self) {
        self.focus = self.focus.left();
    }

    pub fn focus_right(&mut self) {
        self.focus = self.focus.right();
    }

    /// Increase the focused field, wrapping at its limit
    pub fn increment(&mut self) {
        let limit = self.focus.limit();
        let value = self.value_mut(self.focus);
        *value = (*value + 1) % limit;
    }

    /// Decrease the focused field, wrapping at zero
    pub fn decrement(&mut self) {
        let limit = self.focus.limit();
        let value = self.value_mut(self.focus);
        *value = (*value + limit - 1) % limit;
    }

    pub fn total_seconds(&self) -> u32 {
        total_seconds(self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{Notice, RecordingNotifier};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn engine() -> (TimerEngine, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::default());
        (TimerEngine::new(notifier.clone()), notifier)
    }

    #[test]
    fn test_new_engine_is_idle_at_zero() {
        let (timer, notifier) = engine();
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.run_state(), RunState::Idle);
        assert!(!timer.is_ticking());
        assert!(timer.finished_at().is_none());
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_start_from_idle_sets_total() {
        let now = Instant::now();
        for &(h, m, s) in &[(0, 0, 0), (0, 15, 0), (1, 1, 1), (23, 59, 59)] {
            let (mut timer, _) = engine();
            timer.start(h, m, s, now);
            assert_eq!(timer.remaining_seconds(), h * 3600 + m * 60 + s);
            assert_eq!(timer.run_state(), RunState::Running);
            assert!(timer.is_ticking());
        }
    }

    #[test]
    fn test_format_display() {
        assert_eq!(format_hms(3661), "01:01:01");
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(24 * 3600 - 1), "23:59:59");

        let (mut timer, _) = engine();
        timer.start(2, 3, 4, Instant::now());
        assert_eq!(timer.format_display(), "02:03:04");
    }

    #[test]
    fn test_tick_decrements_while_running() {
        let (mut timer, notifier) = engine();
        timer.start(0, 0, 10, Instant::now());

        assert_eq!(timer.tick(), TickOutcome::Counted);
        assert_eq!(timer.remaining_seconds(), 9);
        assert_eq!(timer.run_state(), RunState::Running);
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_last_tick_completes_exactly_once() {
        let (mut timer, notifier) = engine();
        timer.start(0, 0, 1, Instant::now());

        assert_eq!(timer.tick(), TickOutcome::Completed);
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.run_state(), RunState::Idle);
        assert!(!timer.is_ticking());
        assert!(timer.finished_at().is_some());

        // A stray tick afterwards must not fire again
        assert_eq!(timer.tick(), TickOutcome::Skipped);
        assert_eq!(
            notifier.notices(),
            vec![Notice::Alert, Notice::Announcement("Timer is up.".to_string())]
        );
    }

    #[test]
    fn test_zero_length_countdown_completes_on_first_tick() {
        let (mut timer, notifier) = engine();
        timer.start(0, 0, 0, Instant::now());
        assert_eq!(timer.tick(), TickOutcome::Completed);
        assert_eq!(notifier.alert_count(), 1);
    }

    #[test]
    fn test_pause_then_resume_keeps_remaining() {
        let now = Instant::now();
        let (mut timer, _) = engine();
        timer.start(0, 0, 5, now);

        timer.pause();
        assert_eq!(timer.run_state(), RunState::Paused);
        assert!(!timer.is_ticking());
        assert_eq!(timer.remaining_seconds(), 5);

        timer.resume(now);
        assert_eq!(timer.run_state(), RunState::Running);
        assert_eq!(timer.remaining_seconds(), 5);
    }

    #[test]
    fn test_tick_while_paused_is_ignored() {
        let (mut timer, _) = engine();
        timer.start(0, 0, 5, Instant::now());
        timer.pause();
        assert_eq!(timer.tick(), TickOutcome::Skipped);
        assert_eq!(timer.remaining_seconds(), 5);
    }

    #[test]
    fn test_start_with_duration_does_not_clobber_countdown() {
        let now = Instant::now();
        let (mut timer, _) = engine();
        timer.start(0, 0, 30, now);
        timer.tick();

        // Running: duration ignored
        timer.start(1, 0, 0, now);
        assert_eq!(timer.remaining_seconds(), 29);
        assert_eq!(timer.run_state(), RunState::Running);

        // Paused: resumes, duration ignored
        timer.pause();
        timer.start(1, 0, 0, now);
        assert_eq!(timer.remaining_seconds(), 29);
        assert_eq!(timer.run_state(), RunState::Running);
    }

    #[test]
    fn test_resume_from_idle_does_nothing() {
        let (mut timer, _) = engine();
        timer.resume(Instant::now());
        assert_eq!(timer.run_state(), RunState::Idle);
        assert!(!timer.is_ticking());
    }

    #[test]
    fn test_stop_keeps_remaining_and_never_notifies() {
        let (mut timer, notifier) = engine();
        timer.start(0, 1, 0, Instant::now());
        timer.tick();
        timer.stop();
        assert_eq!(timer.run_state(), RunState::Idle);
        assert_eq!(timer.remaining_seconds(), 59);
        assert!(!timer.is_ticking());
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_reset_from_any_state() {
        let now = Instant::now();

        let (mut idle, _) = engine();
        idle.reset();
        assert_eq!((idle.remaining_seconds(), idle.run_state()), (0, RunState::Idle));

        let (mut running, _) = engine();
        running.start(0, 5, 0, now);
        running.reset();
        assert_eq!((running.remaining_seconds(), running.run_state()), (0, RunState::Idle));
        assert!(!running.is_ticking());

        let (mut paused, notifier) = engine();
        paused.start(0, 5, 0, now);
        paused.pause();
        paused.reset();
        assert_eq!((paused.remaining_seconds(), paused.run_state()), (0, RunState::Idle));
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_toggle_cycles_like_primary_button() {
        let now = Instant::now();
        let (mut timer, _) = engine();

        timer.toggle(0, 0, 5, now);
        assert_eq!(timer.run_state(), RunState::Running);
        timer.toggle(0, 0, 5, now);
        assert_eq!(timer.run_state(), RunState::Paused);
        timer.toggle(0, 9, 9, now);
        assert_eq!(timer.run_state(), RunState::Running);
        assert_eq!(timer.remaining_seconds(), 5);
    }

    #[test]
    fn test_poll_applies_due_ticks() {
        let start = Instant::now();
        let (mut timer, _) = engine();
        timer.start(0, 0, 10, start);

        assert_eq!(timer.poll(start + Duration::from_millis(500)), TickOutcome::Skipped);
        assert_eq!(timer.remaining_seconds(), 10);

        assert_eq!(timer.poll(start + Duration::from_millis(1000)), TickOutcome::Counted);
        assert_eq!(timer.remaining_seconds(), 9);

        assert_eq!(timer.poll(start + Duration::from_millis(3200)), TickOutcome::Counted);
        assert_eq!(timer.remaining_seconds(), 7);
    }

    #[test]
    fn test_poll_stops_at_completion() {
        let start = Instant::now();
        let (mut timer, notifier) = engine();
        timer.start(0, 0, 2, start);

        assert_eq!(timer.poll(start + Duration::from_secs(10)), TickOutcome::Completed);
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.run_state(), RunState::Idle);
        assert_eq!(timer.poll(start + Duration::from_secs(20)), TickOutcome::Skipped);
        assert_eq!(notifier.alert_count(), 1);
    }

    #[test]
    fn test_pause_cancels_pending_ticks() {
        let start = Instant::now();
        let (mut timer, _) = engine();
        timer.start(0, 0, 10, start);
        timer.pause();

        assert_eq!(timer.poll(start + Duration::from_secs(5)), TickOutcome::Skipped);
        assert_eq!(timer.remaining_seconds(), 10);

        // Resuming arms a fresh subscription from the resume instant
        let resumed = start + Duration::from_secs(5);
        timer.resume(resumed);
        assert_eq!(timer.poll(resumed + Duration::from_millis(900)), TickOutcome::Skipped);
        assert_eq!(timer.poll(resumed + Duration::from_secs(1)), TickOutcome::Counted);
        assert_eq!(timer.remaining_seconds(), 9);
    }

    #[test]
    fn test_restart_after_completion_fires_again() {
        let (mut timer, notifier) = engine();
        let now = Instant::now();
        timer.start(0, 0, 1, now);
        timer.tick();
        timer.start(0, 0, 1, now);
        assert_eq!(timer.remaining_seconds(), 1);
        timer.tick();
        assert_eq!(notifier.alert_count(), 2);
    }

    #[test]
    fn test_picker_defaults_and_wrapping() {
        let mut picker = DurationPicker::default();
        assert_eq!((picker.hours, picker.minutes, picker.seconds), (0, 15, 0));
        assert_eq!(picker.focus, PickerField::Minutes);

        picker.focus_left();
        assert_eq!(picker.focus, PickerField::Hours);
        picker.decrement();
        assert_eq!(picker.hours, 23);
        picker.increment();
        assert_eq!(picker.hours, 0);

        picker.focus_left();
        assert_eq!(picker.focus, PickerField::Seconds);
        picker.decrement();
        assert_eq!(picker.seconds, 59);
        assert_eq!(picker.total_seconds(), 15 * 60 + 59);
    }

    #[test]
    fn test_picker_clamps_out_of_range_values() {
        let picker = DurationPicker::new(99, 75, 60);
        assert_eq!((picker.hours, picker.minutes, picker.seconds), (23, 59, 59));
    }
}
