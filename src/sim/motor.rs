/// Seconds per simulation step
pub const DT: f64 = 0.01;
/// Speed time constant in seconds
pub const TAU: f64 = 0.2;
/// Steady-state speed per unit torque
pub const SPEED_PER_TORQUE: f64 = 1.0;
/// Torque applied while running
pub const RUNNING_TORQUE: f64 = 10.0;

/// Motor with a first-order speed response
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Motor {
    /// Current speed
    pub speed: f64,
    /// Torque applied on the last update
    pub torque: f64,
}

impl Motor {
    /// Advance one step; `speed` moves toward the torque's steady state
    pub fn update(&mut self, running: bool) {
        self.torque = if running { RUNNING_TORQUE } else { 0.0 };
        let target = self.torque * SPEED_PER_TORQUE;
        let alpha = DT / (TAU + DT);
        self.speed += (target - self.speed) * alpha;
    }
}
