//! Tick counter: a small progress/repeat primitive for timing and
//! animation logic. The caller owns the tick cadence.

/// Counts from `start` toward `target` in `step` increments, one
/// [`tick`](Counter::tick) per frame (or whatever cadence the caller
/// chooses). Repeating counters wrap back to zero instead of halting.
#[derive(Debug, Clone, Copy)]
pub struct Counter {
    pub start: f32,
    pub target: f32,
    pub step: f32,
    pub current: f32,
    pub repeat: bool,
    pub finished: bool,
}

impl Counter {
    pub fn new(start: f32, target: f32, step: f32, repeat: bool) -> Self {
        Self {
            start,
            target,
            step,
            current: start,
            repeat,
            finished: false,
        }
    }

    /// Advance one step. Returns true whenever the counter is at (or has
    /// reached) its target this tick. Repeating counters wrap to zero on
    /// completion and never set `finished`; one-shot counters stop
    /// advancing and mark `finished`.
    pub fn tick(&mut self) -> bool {
        if self.current >= self.target {
            if self.repeat {
                self.current = 0.0;
            }
            return true;
        }

        self.current += self.step;
        if self.current >= self.target {
            if self.repeat {
                self.current = 0.0;
            } else {
                self.finished = true;
            }
            return true;
        }
        false
    }

    /// Force-finish: jump to the target and mark finished.
    pub fn complete(&mut self) {
        self.current = self.target;
        self.finished = true;
    }

    /// Restore the initial state.
    pub fn reset(&mut self) {
        self.current = self.start;
        self.finished = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_saturates_at_target() {
        let mut counter = Counter::new(0.0, 3.0, 1.0, false);

        assert!(!counter.tick());
        assert!(!counter.tick());
        assert!(counter.tick());
        assert!(counter.tick());
        assert!(counter.tick());
        assert_eq!(counter.current, 3.0);
        assert!(counter.finished);
    }

    #[test]
    fn test_repeat_wraps_to_zero() {
        let mut counter = Counter::new(0.0, 3.0, 1.0, true);

        assert!(!counter.tick());
        assert!(!counter.tick());
        assert!(counter.tick());
        assert_eq!(counter.current, 0.0);
        assert!(!counter.finished);

        // Second cycle behaves identically.
        assert!(!counter.tick());
        assert!(!counter.tick());
        assert!(counter.tick());
        assert_eq!(counter.current, 0.0);
    }

    #[test]
    fn test_overshooting_step_still_completes() {
        let mut counter = Counter::new(0.0, 5.0, 2.0, false);

        assert!(!counter.tick());
        assert!(!counter.tick());
        assert!(counter.tick());
        assert!(counter.current >= 5.0);
        assert!(counter.finished);

        // Further ticks report completion without advancing.
        let current = counter.current;
        assert!(counter.tick());
        assert_eq!(counter.current, current);
    }

    #[test]
    fn test_complete_and_reset() {
        let mut counter = Counter::new(1.0, 10.0, 1.0, false);

        counter.complete();
        assert_eq!(counter.current, 10.0);
        assert!(counter.finished);

        counter.reset();
        assert_eq!(counter.current, 1.0);
        assert!(!counter.finished);
    }

    #[test]
    fn test_finished_counter_reports_true_without_advancing() {
        let mut counter = Counter::new(0.0, 2.0, 1.0, false);
        counter.complete();

        assert!(counter.tick());
        assert_eq!(counter.current, 2.0);
    }
}
