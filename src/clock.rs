use super::*;

/// Turns variable draw deltas into whole fixed-rate ticks
pub struct FrameClock {
    tick: f64,
    accumulated: f64,
}

impl FrameClock {
    /// Ticks run per draw at most, anything beyond that is dropped
    const MAX_CATCH_UP: usize = 4;

    pub fn new(fps: usize) -> Self {
        Self {
            tick: 1.0 / fps as f64,
            accumulated: 0.0,
        }
    }

    /// How many ticks are due after `delta_time` seconds
    pub fn tick(&mut self, delta_time: f64) -> usize {
        self.accumulated += delta_time;
        let ticks = (self.accumulated / self.tick).floor();
        self.accumulated -= ticks * self.tick;
        let ticks = ticks as usize;
        if ticks > Self::MAX_CATCH_UP {
            log::trace!("dropping {} ticks", ticks - Self::MAX_CATCH_UP);
            return Self::MAX_CATCH_UP;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_partial_ticks() {
        let mut clock = FrameClock::new(30);
        assert_eq!(clock.tick(0.02), 0);
        assert_eq!(clock.tick(0.02), 1);
        assert_eq!(clock.tick(0.02), 0);
        assert_eq!(clock.tick(0.02), 1);
    }

    #[test]
    fn fast_display_runs_at_fixed_rate() {
        let mut clock = FrameClock::new(30);
        let ticks: usize = (0..144).map(|_| clock.tick(1.0 / 144.0)).sum();
        assert!((29..=30).contains(&ticks), "{ticks}");
    }

    #[test]
    fn stall_is_capped() {
        let mut clock = FrameClock::new(30);
        assert_eq!(clock.tick(10.0), 4);
        assert_eq!(clock.tick(0.0), 0);
    }
}
