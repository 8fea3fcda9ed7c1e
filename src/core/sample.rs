/// A single log row: step, speed and state label
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Step (x axis)
    pub step: f64,
    /// Speed (y axis)
    pub speed: f64,
    /// State label, empty when the row had no third column
    pub state: String,
}

impl Sample {
    /// Create a new sample
    pub fn new(step: f64, speed: f64, state: impl Into<String>) -> Self {
        Sample {
            step,
            speed,
            state: state.into(),
        }
    }
}

/// Parsed log held as three index-aligned sequences
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleLog {
    steps: Vec<f64>,
    speeds: Vec<f64>,
    states: Vec<String>,
}

impl SampleLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample to all three sequences
    pub fn push(&mut self, sample: Sample) {
        self.steps.push(sample.step);
        self.speeds.push(sample.speed);
        self.states.push(sample.state);
    }

    /// Step values in row order
    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    /// Speed values in row order
    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    /// State labels in row order
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the log holds no samples
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get the sample at `index`
    #[cfg(test)]
    pub(crate) fn get(&self, index: usize) -> Option<Sample> {
        Some(Sample {
            step: *self.steps.get(index)?,
            speed: *self.speeds.get(index)?,
            state: self.states.get(index)?.clone(),
        })
    }

    /// Iterate `(step, speed)` points
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.steps.iter().copied().zip(self.speeds.iter().copied())
    }
}

impl FromIterator<Sample> for SampleLog {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let mut log = SampleLog::new();
        for sample in iter {
            log.push(sample);
        }
        log
    }
}
