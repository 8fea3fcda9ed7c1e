//! Motor controller simulation producing `step,speed,state,events` logs

/// Controller state machine
pub mod fsm;
/// Motor model
pub mod motor;

pub use fsm::{MotorEvent, MotorFsm, MotorState};
pub use motor::Motor;

use crate::error::{PlotError, PlotResult};
use csv::Writer;
use log::{debug, info};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Default number of simulated steps
pub const DEFAULT_STEPS: u32 = 1000;

/// One simulated step as written to the log
#[derive(Debug, Clone, PartialEq)]
pub struct SimRecord {
    /// Step index
    pub step: u32,
    /// Motor speed after the tick
    pub speed: f64,
    /// Controller state after the tick
    pub state: MotorState,
    /// Events processed this step, tick last
    pub events: Vec<MotorEvent>,
}

/// Step count and injected events
#[derive(Debug, Clone)]
pub struct Scenario {
    steps: u32,
    schedule: Vec<(u32, MotorEvent)>,
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            steps: DEFAULT_STEPS,
            schedule: vec![
                (100, MotorEvent::Start),
                (500, MotorEvent::Fail),
                (600, MotorEvent::Reset),
                (650, MotorEvent::Start),
            ],
        }
    }
}

impl Scenario {
    /// Scenario with the given steps and no injected events
    pub fn new(steps: u32) -> Self {
        Scenario {
            steps,
            schedule: Vec::new(),
        }
    }

    /// Set the number of steps
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Inject `event` before the tick of `step`
    pub fn with_event(mut self, step: u32, event: MotorEvent) -> Self {
        self.schedule.push((step, event));
        self
    }

    /// Number of steps
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Run the controller through every step
    pub fn run(&self) -> Vec<SimRecord> {
        let mut fsm = MotorFsm::new();
        let mut records = Vec::with_capacity(self.steps as usize);

        for step in 0..self.steps {
            let mut events: Vec<MotorEvent> = self
                .schedule
                .iter()
                .filter(|(at, _)| *at == step)
                .map(|(_, event)| *event)
                .collect();
            events.push(MotorEvent::Tick);

            for event in &events {
                fsm.handle(*event);
            }

            debug!(
                "step={:<6} state={:<8} speed={:.6}",
                step,
                fsm.state(),
                fsm.motor().speed
            );

            records.push(SimRecord {
                step,
                speed: fsm.motor().speed,
                state: fsm.state(),
                events,
            });
        }

        records
    }
}

/// Write records as CSV with a `step,speed,state,events` header
pub fn write_csv<W: Write>(records: &[SimRecord], writer: W) -> PlotResult<()> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(["step", "speed", "state", "events"])?;

    for record in records {
        let events: Vec<&str> = record.events.iter().map(|e| e.name()).collect();
        writer.write_record([
            record.step.to_string(),
            format!("{:.6}", record.speed),
            record.state.label().to_string(),
            events.join("|"),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Run `scenario` and write its log to `path`
pub fn simulate_to_file<P: AsRef<Path>>(scenario: &Scenario, path: P) -> PlotResult<usize> {
    let path = path.as_ref();
    let write_error = |reason: String| PlotError::WriteOutput {
        path: path.display().to_string(),
        reason,
    };

    let records = scenario.run();
    let file = File::create(path).map_err(|e| write_error(e.to_string()))?;
    write_csv(&records, file).map_err(|e| write_error(e.to_string()))?;

    info!("simulated {} steps into {}", records.len(), path.display());
    Ok(records.len())
}
