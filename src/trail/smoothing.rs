use bevy::math::Vec2;

/// Default fraction of the remaining gap closed per frame
pub const DEFAULT_SMOOTHING: f32 = 0.1;

/// Linear interpolation: `a + n * (b - a)`
pub fn lerp(a: f32, b: f32, n: f32) -> f32 {
    a + n * (b - a)
}

/// Exponentially smoothed pointer position, lagging behind the live cursor.
///
/// Each axis stays unseeded until its first update so the anchor never
/// snaps in from the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SmoothedTrail {
    x: Option<f32>,
    y: Option<f32>,
}

impl SmoothedTrail {
    /// Move the anchor `factor` of the way toward `current` and return it
    pub fn update(&mut self, current: Vec2, factor: f32) -> Vec2 {
        let x = lerp(self.x.unwrap_or(current.x), current.x, factor);
        let y = lerp(self.y.unwrap_or(current.y), current.y, factor);
        self.x = Some(x);
        self.y = Some(y);
        Vec2::new(x, y)
    }

    /// `None` until the first update
    pub fn value(&self) -> Option<Vec2> {
        Some(Vec2::new(self.x?, self.y?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_update_seeds_with_current() {
        let mut trail = SmoothedTrail::default();
        assert_eq!(trail.value(), None);

        let anchor = trail.update(Vec2::new(320.0, 240.0), DEFAULT_SMOOTHING);
        assert_eq!(anchor, Vec2::new(320.0, 240.0));
        assert_eq!(trail.value(), Some(anchor));
    }

    #[test]
    fn test_update_closes_fraction_of_gap() {
        let mut trail = SmoothedTrail::default();
        trail.update(Vec2::ZERO, 0.1);

        let anchor = trail.update(Vec2::new(100.0, -50.0), 0.1);
        assert!((anchor.x - 10.0).abs() < 1e-5);
        assert!((anchor.y + 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_origin_is_a_valid_seed() {
        let mut trail = SmoothedTrail::default();
        trail.update(Vec2::ZERO, 0.1);
        // Smoothed value exactly at zero must not be treated as unseeded
        let anchor = trail.update(Vec2::new(10.0, 10.0), 0.1);
        assert!((anchor.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_converges_geometrically() {
        let target = Vec2::new(500.0, 300.0);
        let mut trail = SmoothedTrail::default();
        trail.update(Vec2::ZERO, DEFAULT_SMOOTHING);

        let mut prev_gap = target.length();
        let mut frames = 0;
        while prev_gap > 0.01 {
            let gap = trail.update(target, DEFAULT_SMOOTHING).distance(target);
            assert!(gap < prev_gap, "gap must shrink every frame");
            // Ratio (1 - factor) per frame
            if prev_gap > 1.0 {
                assert!((gap / prev_gap - 0.9).abs() < 1e-3);
            }
            prev_gap = gap;
            frames += 1;
            assert!(frames < 200, "did not converge");
        }
        // ln(0.01 / 583) / ln(0.9) ~= 104
        assert!(frames <= 110);
    }
}
