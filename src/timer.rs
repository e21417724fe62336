//! Countdown for a guided yoga session. Purely local: finishing the timer
//! does not log anything, the session is logged only when the user confirms.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Finished,
}

#[derive(Debug, Clone)]
pub struct YogaTimer {
    remaining_secs: u32,
    state: TimerState,
}

impl YogaTimer {
    pub fn new() -> Self {
        Self {
            remaining_secs: 0,
            state: TimerState::Idle,
        }
    }

    /// Restarts from the full duration.
    pub fn start(&mut self, duration_minutes: u32) {
        self.remaining_secs = duration_minutes.saturating_mul(60);
        self.state = if self.remaining_secs == 0 {
            TimerState::Finished
        } else {
            TimerState::Running
        };
    }

    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == TimerState::Paused {
            self.state = TimerState::Running;
        }
    }

    /// One second elapsed. Returns true on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = TimerState::Finished;
            return true;
        }
        false
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// "MM:SS"
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }
}

impl Default for YogaTimer {
    fn default() -> Self {
        Self::new()
    }
}
