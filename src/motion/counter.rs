/// Stepped ramp from zero up to a set of target values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterRamp {
    steps: u32,
    step: u32,
}

impl CounterRamp {
    pub fn new(steps: u32) -> Self {
        Self {
            steps: steps.max(1),
            step: 0,
        }
    }

    /// Move one step forward. Returns `false` once the ramp has finished.
    pub fn advance(&mut self) -> bool {
        if self.step < self.steps {
            self.step += 1;
        }
        !self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.step >= self.steps
    }

    pub fn value(&self, target: u64) -> u64 {
        if self.is_done() {
            return target;
        }
        target * u64::from(self.step) / u64::from(self.steps)
    }
}
