use crate::domain::{DurationPicker, RunState, Screen, TaskList, TickOutcome, TimerEngine, UiMode};
use crate::notifications::{Notifier, StatusLine};
use std::collections::BTreeSet;
use std::rc::Rc;
use std::time::Instant;

/// Main application state
pub struct AppState {
    pub screen: Screen,
    pub ui_mode: UiMode,
    pub timer: TimerEngine,
    pub picker: DurationPicker,
    pub tasks: TaskList,
    pub selected_index: usize,
    /// Rows marked for batch deletion
    pub marked: BTreeSet<usize>,
    /// Text being typed for a new task
    pub input: String,
    pub status: StatusLine,
    notifier: Rc<dyn Notifier>,
}

impl AppState {
    pub fn new(picker: DurationPicker, notifier: Rc<dyn Notifier>, status: StatusLine) -> Self {
        Self {
            screen: Screen::Timer,
            ui_mode: UiMode::Normal,
            timer: TimerEngine::new(notifier.clone()),
            picker,
            tasks: TaskList::new(),
            selected_index: 0,
            marked: BTreeSet::new(),
            input: String::new(),
            status,
            notifier,
        }
    }

    /// Announce the currently visible screen
    pub fn announce_screen(&self) {
        self.notifier
            .announce(&format!("Selected screen: {}", self.screen.name()));
    }

    /// Switch to `screen`, announcing it if it was not already visible
    pub fn select_screen(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        self.screen = screen;
        log::debug!("screen selected: {}", screen.name());
        self.announce_screen();
    }

    /// Cycle to the other screen
    pub fn next_screen(&mut self) {
        self.select_screen(self.screen.next());
    }

    /// Advance the countdown to `now`
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        self.timer.poll(now)
    }

    // ---- Timer screen ----

    /// Start, pause or resume depending on the timer state
    pub fn timer_primary(&mut self, now: Instant) {
        let (h, m, s) = (self.picker.hours, self.picker.minutes, self.picker.seconds);
        self.timer.toggle(h, m, s, now);
    }

    pub fn timer_stop(&mut self) {
        self.timer.stop();
    }

    pub fn timer_reset(&mut self) {
        self.timer.reset();
    }

    /// The picker is only editable while no countdown is in flight
    pub fn picker_editable(&self) -> bool {
        self.timer.run_state() == RunState::Idle
    }

    pub fn picker_up(&mut self) {
        if self.picker_editable() {
            self.picker.increment();
        }
    }

    pub fn picker_down(&mut self) {
        if self.picker_editable() {
            self.picker.decrement();
        }
    }

    pub fn picker_left(&mut self) {
        if self.picker_editable() {
            self.picker.focus_left();
        }
    }

    pub fn picker_right(&mut self) {
        if self.picker_editable() {
            self.picker.focus_right();
        }
    }

    // ---- To Do screen ----

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    /// Toggle completion of the selected task
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.tasks.get(self.selected_index).map(|t| t.id) {
            self.tasks.toggle_completion(id);
        }
    }

    /// Mark or unmark the selected row for batch deletion
    pub fn toggle_mark(&mut self) {
        if self.selected_index >= self.tasks.len() {
            return;
        }
        if !self.marked.remove(&self.selected_index) {
            self.marked.insert(self.selected_index);
        }
    }

    /// Delete the selected task
    pub fn delete_selected(&mut self) {
        if self.tasks.remove_at([self.selected_index]) > 0 {
            self.marked.clear();
            self.clamp_selection();
        }
    }

    /// Delete every marked task in a single update
    pub fn delete_marked(&mut self) {
        let marked = std::mem::take(&mut self.marked);
        if self.tasks.remove_at(marked) > 0 {
            self.clamp_selection();
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len().saturating_sub(1);
        }
    }

    /// Open the new-task input line
    pub fn start_add_task(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the input line; blank titles are dropped
    pub fn submit_input(&mut self) {
        let title = std::mem::take(&mut self.input);
        if self.tasks.add(&title).is_some() {
            self.selected_index = self.tasks.len() - 1;
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::Normal;
    }
}
