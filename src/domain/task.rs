use chrono::{DateTime, Local};
use std::collections::HashSet;
use uuid::Uuid;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRecord {
    /// Unique ID, stable for the record's lifetime
    pub id: Uuid,
    /// Task title (never empty)
    pub title: String,
    /// Whether the task has been checked off
    pub is_completed: bool,
    /// When the task was added
    pub created_at: DateTime<Local>,
}

impl TaskRecord {
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            is_completed: false,
            created_at: Local::now(),
        }
    }

    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }
}

/// Ordered in-memory task list
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<TaskRecord>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task; blank titles are ignored
    pub fn add(&mut self, title: &str) -> Option<Uuid> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let record = TaskRecord::new(title.to_string());
        let id = record.id;
        log::info!("task added: {}", id);
        self.tasks.push(record);
        Some(id)
    }

    /// Flip completion of the task with `id`; returns false if there is none
    pub fn toggle_completion(&mut self, id: Uuid) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.toggle();
                true
            }
            None => false,
        }
    }

    /// Remove every task at the given positions in one pass.
    ///
    /// Positions refer to the list before removal; out-of-range positions
    /// are ignored. Returns how many tasks were removed.
    pub fn remove_at<I>(&mut self, positions: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        let doomed: HashSet<usize> = positions.into_iter().collect();
        if doomed.is_empty() {
            return 0;
        }

        let before = self.tasks.len();
        let mut index = 0;
        self.tasks.retain(|_| {
            let keep = !doomed.contains(&index);
            index += 1;
            keep
        });

        let removed = before - self.tasks.len();
        if removed > 0 {
            log::info!("removed {} task(s)", removed);
        }
        removed
    }

    /// Read-only snapshot in display order
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&TaskRecord> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed).count()
    }
}
