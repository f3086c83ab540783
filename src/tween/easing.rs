// ============================================================================
// EASING CURVES for trail tweens
// ============================================================================

/// Named easing curve. Every curve maps 0.0 -> 0.0 and 1.0 -> 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    #[cfg(test)]
    Linear,
    /// Exponential ease-out: very fast start, long deceleration tail
    ExpoOut,
    /// Quadratic ease-out (the "power1" curve)
    Power1Out,
    /// Quintic S-curve
    QuintInOut,
}

impl Easing {
    /// Map linear progress `t` (clamped to 0..=1) through the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            #[cfg(test)]
            Easing::Linear => t,
            Easing::ExpoOut => expo_out(t),
            Easing::Power1Out => power1_out(t),
            Easing::QuintInOut => quint_in_out(t),
        }
    }
}

/// Ease-out exponential: covers most of the distance almost immediately,
/// then creeps toward the target. This is the "chasing the cursor" curve.
pub fn expo_out(t: f32) -> f32 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f32.powf(-10.0 * t)
    }
}

/// Ease-out quadratic: fast at start, decelerates (gentler than cubic)
pub fn power1_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Ease-in-out quintic: slow at both ends, sharp in the middle
pub fn quint_in_out(t: f32) -> f32 {
    if t < 0.5 {
        16.0 * t * t * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::ExpoOut,
        Easing::Power1Out,
        Easing::QuintInOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-3, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut prev = easing.apply(0.0);
            for step in 1..=100 {
                let v = easing.apply(step as f32 / 100.0);
                assert!(v >= prev - 1e-6, "{:?} decreased at step {}", easing, step);
                prev = v;
            }
        }
    }

    #[test]
    fn test_expo_out_decelerates() {
        // Most of the travel happens in the first fifth of the duration
        assert!(expo_out(0.2) > 0.7);
        assert!(expo_out(0.5) > 0.96);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(Easing::QuintInOut.apply(-3.0), 0.0);
        assert_eq!(Easing::Power1Out.apply(7.0), 1.0);
    }

    #[test]
    fn test_quint_midpoint() {
        assert!((quint_in_out(0.5) - 0.5).abs() < 1e-6);
    }
}
