//! Per-frame capability exposed to hosts
//!
//! A host driving loop (timer, render callback, button handler) only needs
//! something it can advance once per logical frame. This trait is that
//! capability; it carries no scheduling of its own.

/// Something a host can advance one generation at a time
pub trait Steppable {
    /// Advance by exactly one generation
    fn step(&mut self);

    /// Number of generations completed so far
    fn generation(&self) -> u64;

    /// Advance by `frames` generations, invoking `on_frame` after each
    ///
    /// The callback sees the state after every completed generation, the way
    /// a renderer would between frames.
    fn run<F>(&mut self, frames: u64, mut on_frame: F)
    where
        Self: Sized,
        F: FnMut(&Self),
    {
        for _ in 0..frames {
            self.step();
            on_frame(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        generation: u64,
    }

    impl Steppable for Counter {
        fn step(&mut self) {
            self.generation += 1;
        }

        fn generation(&self) -> u64 {
            self.generation
        }
    }

    #[test]
    fn test_run_calls_back_after_each_step() {
        let mut counter = Counter { generation: 0 };
        let mut seen = Vec::new();
        counter.run(3, |c| seen.push(c.generation()));
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(counter.generation(), 3);
    }
}
