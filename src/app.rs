use log::info;

use crate::core::Depth;

/// Everything the user can ask for from the keyboard or window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    DepthUp,
    DepthDown,
    Reset,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// Application state threaded through the render loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    depth: Depth,
    run_state: RunState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_depth(Depth::MIN)
    }

    pub fn with_depth(depth: Depth) -> Self {
        Self {
            depth,
            run_state: RunState::Running,
        }
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Apply one command. `Stopped` is terminal, so anything after a quit is dropped.
    pub fn apply(&mut self, command: Command) {
        if !self.is_running() {
            return;
        }

        let previous = self.depth;
        match command {
            Command::DepthUp => self.depth = self.depth.increment(),
            Command::DepthDown => self.depth = self.depth.decrement(),
            Command::Reset => self.depth = Depth::MIN,
            Command::Quit => {
                info!("Quit requested");
                self.run_state = RunState::Stopped;
            }
        }

        if self.depth != previous {
            info!("Depth {} -> {}", previous, self.depth);
        }
    }

    pub fn apply_all<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.apply(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running_at_zero() {
        let state = AppState::new();
        assert_eq!(state.depth(), Depth::MIN);
        assert_eq!(state.run_state(), RunState::Running);
    }

    #[test]
    fn up_from_three_is_four() {
        let mut state = AppState::with_depth(Depth::new(3));
        state.apply(Command::DepthUp);
        assert_eq!(state.depth().get(), 4);
    }

    #[test]
    fn up_at_max_stays() {
        let mut state = AppState::with_depth(Depth::MAX);
        state.apply(Command::DepthUp);
        assert_eq!(state.depth().get(), 5);
    }

    #[test]
    fn down_at_zero_stays() {
        let mut state = AppState::new();
        state.apply(Command::DepthDown);
        assert_eq!(state.depth().get(), 0);
    }

    #[test]
    fn reset_from_any_depth() {
        for level in 0..=5 {
            let mut state = AppState::with_depth(Depth::new(level));
            state.apply(Command::Reset);
            assert_eq!(state.depth(), Depth::MIN);
            assert!(state.is_running());
        }
    }

    #[test]
    fn quit_stops_and_is_terminal() {
        let mut state = AppState::with_depth(Depth::new(2));
        state.apply_all([Command::Quit, Command::DepthUp, Command::Reset]);
        assert_eq!(state.run_state(), RunState::Stopped);
        assert_eq!(state.depth().get(), 2);
    }

    #[test]
    fn commands_apply_in_order() {
        let mut state = AppState::new();
        state.apply_all([
            Command::DepthUp,
            Command::DepthUp,
            Command::DepthUp,
            Command::DepthDown,
        ]);
        assert_eq!(state.depth().get(), 2);
    }
}
