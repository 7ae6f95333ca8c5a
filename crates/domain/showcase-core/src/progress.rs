use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of per-tick progress increments. The production source draws from
/// a uniform distribution; tests substitute fixed sequences.
pub trait IncrementSource: Send {
    fn next_increment(&mut self) -> f32;
}

/// Uniform random increments in `[0, max)`.
pub struct RandomIncrements {
    rng: StdRng,
    max: f32,
}

impl RandomIncrements {
    pub fn uniform(max: f32) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            max,
        }
    }
}

impl Default for RandomIncrements {
    fn default() -> Self {
        Self::uniform(showcase_config::MAX_PROGRESS_INCREMENT)
    }
}

impl IncrementSource for RandomIncrements {
    fn next_increment(&mut self) -> f32 {
        self.rng.gen_range(0.0..self.max)
    }
}

/// One simulated long-running operation. The percentage only ever grows and
/// the final tick lands exactly on 100.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressRun {
    percent: f32,
    complete: bool,
}

impl ProgressRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(self) -> f32 {
        self.percent
    }

    pub fn is_complete(self) -> bool {
        self.complete
    }

    /// Applies one tick. Returns the new percentage. Ticking a completed run
    /// leaves it at 100.
    pub fn tick(&mut self, src: &mut dyn IncrementSource) -> f32 {
        if self.complete {
            return self.percent;
        }
        let inc = src.next_increment().max(0.0);
        self.percent = (self.percent + inc).min(100.0);
        if self.percent >= 100.0 {
            self.percent = 100.0;
            self.complete = true;
        }
        self.percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<f32>, usize);

    impl IncrementSource for Fixed {
        fn next_increment(&mut self) -> f32 {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v
        }
    }

    #[test]
    fn run_terminates_exactly_at_100() {
        let mut src = Fixed(vec![40.0], 0);
        let mut run = ProgressRun::new();
        run.tick(&mut src);
        run.tick(&mut src);
        assert!(!run.is_complete());
        assert_eq!(run.tick(&mut src), 100.0);
        assert!(run.is_complete());
        // Further ticks stay pinned.
        assert_eq!(run.tick(&mut src), 100.0);
    }

    #[test]
    fn deterministic_source_gives_exact_tick_count() {
        let mut src = Fixed(vec![15.0], 0);
        let mut run = ProgressRun::new();
        let mut ticks = 0;
        while !run.is_complete() {
            run.tick(&mut src);
            ticks += 1;
        }
        // ceil(100 / 15) ticks to completion.
        assert_eq!(ticks, 7);
        assert_eq!(run.percent(), 100.0);
    }

    #[test]
    fn percent_is_monotonic_with_random_source() {
        let mut src = RandomIncrements::uniform(15.0);
        let mut run = ProgressRun::new();
        let mut prev = 0.0;
        for _ in 0..10_000 {
            let now = run.tick(&mut src);
            assert!(now >= prev);
            prev = now;
            if run.is_complete() {
                break;
            }
        }
        assert!(run.percent() <= 100.0);
    }

    #[test]
    fn negative_increments_are_ignored() {
        let mut src = Fixed(vec![-5.0, 50.0], 0);
        let mut run = ProgressRun::new();
        assert_eq!(run.tick(&mut src), 0.0);
        assert_eq!(run.tick(&mut src), 50.0);
    }
}
