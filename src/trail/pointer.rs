use bevy::math::{Rect, Vec2};
use bevy::prelude::Resource;

use super::smoothing::SmoothedTrail;

/// One pointer position in page coordinates (origin top-left, y down)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample(pub Vec2);

impl PointerSample {
    #[cfg(test)]
    pub fn new(x: f32, y: f32) -> Self {
        PointerSample(Vec2::new(x, y))
    }

    /// Page position of a viewport-relative (client) position
    pub fn from_client(client: Vec2, scroll: Vec2) -> Self {
        PointerSample(client + scroll)
    }

    /// Back to viewport-relative coordinates
    pub fn to_client(self, scroll: Vec2) -> Vec2 {
        self.0 - scroll
    }

    pub fn distance(self, other: PointerSample) -> f32 {
        self.0.distance(other.0)
    }
}

/// Hit area of the trail region, in viewport (client) coordinates
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct HitRegion {
    pub bounds: Rect,
}

impl HitRegion {
    #[cfg(test)]
    pub fn new(bounds: Rect) -> Self {
        HitRegion { bounds }
    }

    /// Region covering the viewport minus `inset` on every side
    pub fn inset(viewport_size: Vec2, inset: f32) -> Self {
        let inset = inset.clamp(0.0, viewport_size.min_element() * 0.5);
        HitRegion {
            bounds: Rect::from_corners(Vec2::splat(inset), viewport_size - inset),
        }
    }

    /// Edge-inclusive membership test for a page-space sample
    pub fn contains(&self, sample: PointerSample, scroll: Vec2) -> bool {
        self.bounds.contains(sample.to_client(scroll))
    }
}

/// Shared pointer context.
///
/// Input handling writes `current` and the region flag through the
/// `on_*` methods; the sequencer owns `last_trigger` and `smoothed` through
/// [`PointerState::rebase_trigger`] and [`PointerState::smooth`].
#[derive(Resource, Debug, Clone, Default)]
pub struct PointerState {
    current: PointerSample,
    last_trigger: PointerSample,
    smoothed: SmoothedTrail,
    inside_region: bool,
    initialized: bool,
}

impl PointerState {
    pub fn current(&self) -> PointerSample {
        self.current
    }

    #[cfg(test)]
    pub fn last_trigger(&self) -> PointerSample {
        self.last_trigger
    }

    pub fn smoothed(&self) -> Option<Vec2> {
        self.smoothed.value()
    }

    pub fn inside_region(&self) -> bool {
        self.inside_region
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// Distance moved since the last reveal (or since the baseline was seeded)
    pub fn distance_since_trigger(&self) -> f32 {
        self.current.distance(self.last_trigger)
    }

    // === Input side ===

    /// Record a new pointer position.
    ///
    /// The very first sample also seeds the trigger baseline and catches up
    /// on region membership, since no enter event fires for a pointer that
    /// already sits inside the region when tracking starts.
    pub fn on_move(&mut self, sample: PointerSample, region: &HitRegion, scroll: Vec2) {
        self.current = sample;

        if !self.initialized {
            self.initialized = true;
            self.last_trigger = sample;
            self.inside_region = region.contains(sample, scroll);
        }
    }

    /// Pointer entered the region: rebase so pre-entry movement never counts
    pub fn on_region_enter(&mut self) {
        self.inside_region = true;
        self.last_trigger = self.current;
    }

    pub fn on_region_leave(&mut self) {
        self.inside_region = false;
    }

    // === Sequencer side ===

    pub fn rebase_trigger(&mut self) {
        self.last_trigger = self.current;
    }

    /// Advance the smoothed anchor toward `current`.
    ///
    /// No-op until the first real sample arrives, so the anchor seeds from
    /// that sample rather than from the default origin.
    pub fn smooth(&mut self, factor: f32) -> Option<Vec2> {
        if !self.initialized {
            return None;
        }
        Some(self.smoothed.update(self.current.0, factor))
    }
}

/// Region membership change produced by one pointer sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionTransition {
    Entered,
    Left,
}

/// Feed one pointer sample through the tracker, deriving enter/leave from
/// the hit region. The sample is recorded before an enter is applied, so the
/// baseline lands on the entry position itself.
pub fn track_sample(
    state: &mut PointerState,
    region: &HitRegion,
    scroll: Vec2,
    sample: PointerSample,
) -> Option<RegionTransition> {
    let was_initialized = state.initialized();
    state.on_move(sample, region, scroll);
    if !was_initialized {
        return None;
    }

    match (state.inside_region(), region.contains(sample, scroll)) {
        (false, true) => {
            state.on_region_enter();
            Some(RegionTransition::Entered)
        }
        (true, false) => {
            state.on_region_leave();
            Some(RegionTransition::Left)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> HitRegion {
        HitRegion::new(Rect::new(100.0, 100.0, 500.0, 400.0))
    }

    #[test]
    fn test_first_move_seeds_baseline() {
        let mut state = PointerState::default();
        state.on_move(PointerSample::new(900.0, 700.0), &region(), Vec2::ZERO);

        assert!(state.initialized());
        assert_eq!(state.last_trigger(), PointerSample::new(900.0, 700.0));
        assert_eq!(state.distance_since_trigger(), 0.0);
        assert!(!state.inside_region());
    }

    #[test]
    fn test_first_move_inside_region_catches_up_membership() {
        let mut state = PointerState::default();
        state.on_move(PointerSample::new(200.0, 200.0), &region(), Vec2::ZERO);
        assert!(state.inside_region());
    }

    #[test]
    fn test_later_moves_do_not_touch_baseline() {
        let mut state = PointerState::default();
        state.on_move(PointerSample::new(200.0, 200.0), &region(), Vec2::ZERO);
        state.on_move(PointerSample::new(260.0, 280.0), &region(), Vec2::ZERO);

        assert_eq!(state.last_trigger(), PointerSample::new(200.0, 200.0));
        assert_eq!(state.distance_since_trigger(), 100.0);
    }

    #[test]
    fn test_enter_rebases_to_current() {
        let mut state = PointerState::default();
        state.on_move(PointerSample::new(0.0, 0.0), &region(), Vec2::ZERO);
        state.on_move(PointerSample::new(300.0, 300.0), &region(), Vec2::ZERO);
        state.on_region_enter();

        assert!(state.inside_region());
        assert_eq!(state.distance_since_trigger(), 0.0);
    }

    #[test]
    fn test_leave_keeps_tracking_position() {
        let mut state = PointerState::default();
        state.on_move(PointerSample::new(200.0, 200.0), &region(), Vec2::ZERO);
        state.on_region_leave();
        state.on_move(PointerSample::new(800.0, 200.0), &region(), Vec2::ZERO);

        assert!(!state.inside_region());
        assert_eq!(state.current(), PointerSample::new(800.0, 200.0));
    }

    #[test]
    fn test_scroll_offset_applies_to_membership() {
        // Page y 1200 with 1000 scrolled is client y 200, inside the region
        let scroll = Vec2::new(0.0, 1000.0);
        let sample = PointerSample::from_client(Vec2::new(200.0, 200.0), scroll);
        assert_eq!(sample, PointerSample::new(200.0, 1200.0));
        assert!(region().contains(sample, scroll));
        assert!(!region().contains(sample, Vec2::ZERO));
    }

    #[test]
    fn test_track_sample_derives_transitions() {
        let mut state = PointerState::default();
        let r = region();

        assert_eq!(track_sample(&mut state, &r, Vec2::ZERO, PointerSample::new(50.0, 50.0)), None);
        assert_eq!(
            track_sample(&mut state, &r, Vec2::ZERO, PointerSample::new(150.0, 150.0)),
            Some(RegionTransition::Entered)
        );
        // Baseline is the entry sample itself
        assert_eq!(state.last_trigger(), PointerSample::new(150.0, 150.0));
        assert_eq!(track_sample(&mut state, &r, Vec2::ZERO, PointerSample::new(160.0, 150.0)), None);
        assert_eq!(
            track_sample(&mut state, &r, Vec2::ZERO, PointerSample::new(700.0, 150.0)),
            Some(RegionTransition::Left)
        );
        assert!(!state.inside_region());
    }

    #[test]
    fn test_smooth_waits_for_first_sample() {
        let mut state = PointerState::default();
        for _ in 0..30 {
            assert_eq!(state.smooth(0.1), None);
        }
        assert_eq!(state.smoothed(), None);

        state.on_move(PointerSample::new(800.0, 600.0), &region(), Vec2::ZERO);
        assert_eq!(state.smooth(0.1), Some(Vec2::new(800.0, 600.0)));
    }

    #[test]
    fn test_region_edges_are_inclusive() {
        let r = region();
        assert!(r.contains(PointerSample::new(100.0, 100.0), Vec2::ZERO));
        assert!(r.contains(PointerSample::new(500.0, 400.0), Vec2::ZERO));
        assert!(!r.contains(PointerSample::new(500.1, 400.0), Vec2::ZERO));
    }

    #[test]
    fn test_inset_region() {
        let r = HitRegion::inset(Vec2::new(1280.0, 720.0), 40.0);
        assert_eq!(r.bounds.min, Vec2::new(40.0, 40.0));
        assert_eq!(r.bounds.max, Vec2::new(1240.0, 680.0));

        let clamped = HitRegion::inset(Vec2::new(100.0, 60.0), 500.0);
        assert_eq!(clamped.bounds.min, Vec2::new(30.0, 30.0));
    }
}
