/// Minimal finite-state-machine container.
///
/// `S` is the state type (usually an enum). The machine tracks the current
/// state, the previous state, and how long the machine has been in its current
/// state. Transition logic lives in the system that drives it; for the agent's
/// boundary contact that is `systems::boundary`.
#[derive(Debug, Clone)]
pub struct StateMachine<S: Clone> {
    pub state: S,
    pub previous: S,
    /// Milliseconds spent in the current state. Reset to 0.0 on each transition.
    pub elapsed_ms: f32,
}

impl<S: Clone> StateMachine<S> {
    /// Create a new machine starting in `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            previous: initial.clone(),
            state: initial,
            elapsed_ms: 0.0,
        }
    }

    /// Transition to `next` only if it is a **different variant** from the
    /// current state (compared by discriminant, no `PartialEq` required).
    /// Returns whether a transition happened.
    pub fn go(&mut self, next: S) -> bool {
        if std::mem::discriminant(&self.state) == std::mem::discriminant(&next) {
            return false;
        }
        self.previous = std::mem::replace(&mut self.state, next);
        self.elapsed_ms = 0.0;
        true
    }

    /// Advance the elapsed-in-state timer.
    /// Call once per frame **before** evaluating transitions.
    pub fn tick(&mut self, elapsed_ms: f32) {
        self.elapsed_ms += elapsed_ms;
    }
}
