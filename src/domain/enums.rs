/// Run state of the countdown timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Never started, finished, stopped or reset
    #[default]
    Idle,
    Running,
    Paused,
}

impl RunState {
    /// Short badge shown next to the countdown
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Running => "RUNNING",
            Self::Paused => "PAUSED",
        }
    }

    /// Label for the primary timer action in this state
    pub fn primary_action(&self) -> &'static str {
        match self {
            Self::Idle => "Start",
            Self::Running => "Pause",
            Self::Paused => "Resume",
        }
    }
}

/// The two selectable screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Timer,
    ToDo,
}

impl Screen {
    /// Display name, also used in the selection announcement
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Timer => "Timer",
            Screen::ToDo => "To Do",
        }
    }

    /// The other screen
    pub fn next(&self) -> Self {
        match self {
            Screen::Timer => Screen::ToDo,
            Screen::ToDo => Screen::Timer,
        }
    }

    /// Position in the tab bar
    pub fn index(&self) -> usize {
        match self {
            Screen::Timer => 0,
            Screen::ToDo => 1,
        }
    }

    pub fn all() -> &'static [Screen] {
        &[Screen::Timer, Screen::ToDo]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
}

/// Field of the duration picker that has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerField {
    Hours,
    Minutes,
    Seconds,
}

impl PickerField {
    pub fn left(&self) -> Self {
        match self {
            Self::Hours => Self::Seconds,
            Self::Minutes => Self::Hours,
            Self::Seconds => Self::Minutes,
        }
    }

    pub fn right(&self) -> Self {
        match self {
            Self::Hours => Self::Minutes,
            Self::Minutes => Self::Seconds,
            Self::Seconds => Self::Hours,
        }
    }

    /// Exclusive upper bound of the field's value
    pub fn limit(&self) -> u32 {
        match self {
            Self::Hours => 24,
            Self::Minutes | Self::Seconds => 60,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Minutes => "min",
            Self::Seconds => "sec",
        }
    }
}
