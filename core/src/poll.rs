#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollPhase {
    Warmup,
    Steady,
}

#[derive(Clone, Debug)]
pub struct PollClock {
    started_at_ms: f64,
    warmup_ms: f64,
    phase: PollPhase,
}

impl PollClock {
    pub fn new(started_at_ms: f64, warmup_ms: u32) -> Self {
        Self {
            started_at_ms,
            warmup_ms: warmup_ms as f64,
            phase: PollPhase::Warmup,
        }
    }

    pub fn phase(&self) -> PollPhase {
        self.phase
    }

    pub fn remaining_warmup_ms(&self, now_ms: f64) -> f64 {
        match self.phase {
            PollPhase::Warmup => (self.started_at_ms + self.warmup_ms - now_ms).max(0.0),
            PollPhase::Steady => 0.0,
        }
    }

    pub fn advance(&mut self, now_ms: f64) -> Option<PollPhase> {
        if self.phase == PollPhase::Steady {
            return None;
        }
        if now_ms - self.started_at_ms >= self.warmup_ms {
            self.phase = PollPhase::Steady;
            return Some(PollPhase::Steady);
        }
        None
    }
}
