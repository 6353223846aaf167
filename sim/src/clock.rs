use tracing::trace;

/// Clamp a host-supplied frame delta to a usable value: negative or
/// non-finite deltas become zero.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

/// Accumulated simulated time in seconds. Monotonically non-decreasing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimClock {
    elapsed: f32,
}

impl SimClock {
    pub const fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    /// Advance by `dt` and return the delta actually applied.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let applied = sanitize_dt(dt);
        if applied != dt {
            trace!(dt, "clamped frame delta to zero");
        }
        self.elapsed += applied;
        applied
    }

    pub fn current_time(&self) -> f32 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates_positive_deltas() {
        let mut c = SimClock::new();
        c.advance(0.25);
        c.advance(0.5);
        assert!((c.current_time() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn anomalous_deltas_never_reverse_time() {
        let mut c = SimClock::new();
        let mut last = c.current_time();
        for dt in [0.1, -0.3, f32::NAN, 0.2, f32::NEG_INFINITY, f32::INFINITY, 0.0, -1e-9, 0.05] {
            let applied = c.advance(dt);
            assert!(applied >= 0.0 && applied.is_finite());
            let now = c.current_time();
            assert!(now >= last, "time went backwards: {last} -> {now} on dt={dt}");
            last = now;
        }
        assert!((c.current_time() - 0.35).abs() < 1e-6);
    }
}
