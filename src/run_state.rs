#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    #[default]
    Running,
    Stopped,
}
impl RunState {
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }

    /// Returns whether this call performed the transition.
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        *self = RunState::Stopped;
        was_running
    }
}
