//! Time-bounded interpolation for scroll and opacity animations.
use std::f64::consts::PI;

/// Swing easing: slow start, fast middle, slow end.
#[must_use]
pub fn swing(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    0.5 - (p * PI).cos() / 2.0
}

/// Interpolates a value from `from` to `to` over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
}

impl Tween {
    #[must_use]
    pub const fn new(from: f64, to: f64, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms,
        }
    }

    /// Fraction of the animation elapsed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (elapsed_ms / f64::from(self.duration_ms)).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let p = self.progress(elapsed_ms);
        if p >= 1.0 {
            return self.to;
        }
        (self.to - self.from).mul_add(swing(p), self.from)
    }

    #[must_use]
    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swing_hits_endpoints_and_midpoint() {
        assert!(swing(0.0).abs() < 1e-12);
        assert!((swing(0.5) - 0.5).abs() < 1e-12);
        assert!((swing(1.0) - 1.0).abs() < 1e-12);
        assert!((swing(2.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tween_is_monotonic_and_lands_exactly() {
        let tween = Tween::new(100.0, 900.0, 1000);
        let mut last = tween.value_at(0.0);
        assert!((last - 100.0).abs() < 1e-9);
        for step in 1..=20 {
            let value = tween.value_at(f64::from(step) * 50.0);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(tween.value_at(1000.0), 900.0);
        assert!(tween.is_done(1000.0));
        assert!(!tween.is_done(999.0));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let tween = Tween::new(1.0, 0.0, 0);
        assert!(tween.is_done(0.0));
        assert_eq!(tween.value_at(0.0), 0.0);
    }

    #[test]
    fn scrolling_upward_interpolates_downward() {
        let tween = Tween::new(1200.0, 0.0, 1500);
        let mid = tween.value_at(750.0);
        assert!((mid - 600.0).abs() < 1e-9);
    }
}
