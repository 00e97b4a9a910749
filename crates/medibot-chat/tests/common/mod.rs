use std::collections::VecDeque;

use medibot_chat::random::RandomSource;

/// Replays queued decisions. When a queue runs dry it picks index 0 and
/// declines every chance.
#[derive(Debug, Default)]
pub struct Scripted {
    picks: VecDeque<usize>,
    chances: VecDeque<bool>,
}

#[allow(dead_code)]
impl Scripted {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pick(mut self, index: usize) -> Self {
        self.picks.push_back(index);
        self
    }

    pub fn chance(mut self, outcome: bool) -> Self {
        self.chances.push_back(outcome);
        self
    }
}

impl RandomSource for Scripted {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0).min(len - 1)
    }

    fn chance(&mut self, _p: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}
