use super::motor::Motor;
use log::debug;
use std::fmt;

/// Motor controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotorState {
    /// Motor not driven
    #[default]
    Idle,
    /// Motor driven at full torque
    Running,
    /// Fault latched until reset
    Error,
}

impl MotorState {
    /// Label written to the log's state column
    pub fn label(&self) -> &'static str {
        match self {
            MotorState::Idle => "Idle",
            MotorState::Running => "Running",
            MotorState::Error => "Error",
        }
    }
}

impl fmt::Display for MotorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Event fed to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorEvent {
    /// Start driving
    Start,
    /// Stop driving
    Stop,
    /// Fault
    Fail,
    /// Clear a fault
    Reset,
    /// Advance the motor one step
    Tick,
}

impl MotorEvent {
    /// Name written to the log's events column
    pub fn name(&self) -> &'static str {
        match self {
            MotorEvent::Start => "EvStart",
            MotorEvent::Stop => "EvStop",
            MotorEvent::Fail => "EvFail",
            MotorEvent::Reset => "EvReset",
            MotorEvent::Tick => "EvTick",
        }
    }
}

impl fmt::Display for MotorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Motor controller state machine
#[derive(Debug, Clone, Default)]
pub struct MotorFsm {
    state: MotorState,
    motor: Motor,
}

impl MotorFsm {
    /// Create a controller in `Idle`
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> MotorState {
        self.state
    }

    /// Current motor
    pub fn motor(&self) -> &Motor {
        &self.motor
    }

    /// Apply an event; events with no transition from the current state are ignored
    pub fn handle(&mut self, event: MotorEvent) {
        let next = match (self.state, event) {
            (_, MotorEvent::Tick) => {
                self.motor.update(self.state == MotorState::Running);
                return;
            }
            (MotorState::Idle, MotorEvent::Start) => MotorState::Running,
            (MotorState::Running, MotorEvent::Stop) => MotorState::Idle,
            (MotorState::Running, MotorEvent::Fail) => MotorState::Error,
            (MotorState::Error, MotorEvent::Reset) => MotorState::Idle,
            _ => return,
        };

        debug!("{} --{}--> {}", self.state, event, next);
        self.state = next;
    }
}
