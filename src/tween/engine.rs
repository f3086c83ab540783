use std::collections::HashMap;
use std::hash::Hash;

use super::timeline::{Property, Style, StylePatch, Timeline, Track};

/// A timeline that has been started on some key
#[derive(Debug, Clone)]
struct Running {
    started_at: f32,
    duration: f32,
    tracks: Vec<RunningTrack>,
}

#[derive(Debug, Clone)]
struct RunningTrack {
    track: Track,
    /// Captured when the track first becomes live
    from: Option<Property>,
}

#[derive(Debug, Clone, Default)]
struct Entry {
    style: Style,
    running: Vec<Running>,
}

/// Keyed property tween engine.
///
/// Every key owns a [`Style`] and any number of running timelines. The engine
/// keeps its own clock; `tick` advances it and writes interpolated values.
#[derive(Debug, Clone)]
pub struct Tweener<K> {
    now: f32,
    entries: HashMap<K, Entry>,
}

impl<K> Default for Tweener<K> {
    fn default() -> Self {
        Tweener {
            now: 0.0,
            entries: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> Tweener<K> {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current style of `key` (the default rest style if never touched)
    pub fn style(&self, key: K) -> Style {
        self.entries
            .get(&key)
            .map(|entry| entry.style)
            .unwrap_or_default()
    }

    /// Write style fields immediately. Running timelines keep running.
    pub fn set(&mut self, key: K, patch: StylePatch) {
        patch.apply(&mut self.entries.entry(key).or_default().style);
    }

    /// Start `timeline` on `key` at the current engine time
    pub fn play(&mut self, key: K, timeline: Timeline) {
        let entry = self.entries.entry(key).or_default();
        timeline.initial().apply(&mut entry.style);

        let duration = timeline.duration();
        if timeline.tracks().is_empty() {
            return;
        }
        if duration <= 0.0 {
            for track in timeline.tracks() {
                track.target.write(&mut entry.style);
            }
            return;
        }

        entry.running.push(Running {
            started_at: self.now,
            duration,
            tracks: timeline
                .tracks()
                .iter()
                .map(|&track| RunningTrack { track, from: None })
                .collect(),
        });
    }

    /// Stop every running timeline on `key`, leaving its style where it is.
    /// Returns how many timelines were stopped.
    pub fn kill_tweens_of(&mut self, key: K) -> usize {
        self.entries
            .get_mut(&key)
            .map(|entry| std::mem::take(&mut entry.running).len())
            .unwrap_or(0)
    }

    pub fn is_tweening(&self, key: K) -> bool {
        self.active_timelines(key) > 0
    }

    pub fn active_timelines(&self, key: K) -> usize {
        self.entries
            .get(&key)
            .map_or(0, |entry| entry.running.len())
    }

    /// Advance the clock by `dt` seconds and apply every live track.
    /// Finished timelines are dropped after their final values are written.
    pub fn tick(&mut self, dt: f32) {
        self.now += dt.max(0.0);
        let now = self.now;

        for entry in self.entries.values_mut() {
            let Entry { style, running } = entry;

            for timeline in running.iter_mut() {
                let elapsed = now - timeline.started_at;

                for live in timeline.tracks.iter_mut() {
                    if elapsed < live.track.offset {
                        continue;
                    }
                    let from = *live.from.get_or_insert_with(|| live.track.target.read(style));
                    let value = live.track.target.lerp_from(&from, live.track.progress(elapsed));
                    value.write(style);
                }
            }

            running.retain(|timeline| now - timeline.started_at < timeline.duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::easing::Easing;
    use bevy::math::Vec2;

    fn fade_in_out() -> Timeline {
        Timeline::new()
            .set(StylePatch {
                opacity: Some(1.0),
                ..Default::default()
            })
            .to(Property::Opacity(0.0), 1.0, Easing::Linear, 1.0)
    }

    #[test]
    fn test_untouched_key_has_rest_style() {
        let tweener: Tweener<u32> = Tweener::new();
        assert_eq!(tweener.style(7), Style::default());
        assert!(!tweener.is_tweening(7));
    }

    #[test]
    fn test_play_applies_initial_patch_immediately() {
        let mut tweener = Tweener::new();
        tweener.play(1u32, fade_in_out());

        assert_eq!(tweener.style(1).opacity, 1.0);
        assert!(tweener.is_tweening(1));
    }

    #[test]
    fn test_delayed_track_waits_for_offset() {
        let mut tweener = Tweener::new();
        tweener.play(1u32, fade_in_out());

        tweener.tick(0.5);
        assert_eq!(tweener.style(1).opacity, 1.0);

        tweener.tick(1.0); // elapsed 1.5, halfway through the fade
        assert!((tweener.style(1).opacity - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_finished_timeline_writes_final_value_and_drops() {
        let mut tweener = Tweener::new();
        tweener.play(1u32, fade_in_out());

        tweener.tick(2.5);
        assert_eq!(tweener.style(1).opacity, 0.0);
        assert!(!tweener.is_tweening(1));
    }

    #[test]
    fn test_start_value_captured_when_track_begins() {
        let mut tweener = Tweener::new();
        tweener.play(
            1u32,
            Timeline::new().to(Property::Position(Vec2::new(100.0, 0.0)), 1.0, Easing::Linear, 0.5),
        );
        // Moved by someone else before the track starts
        tweener.set(
            1,
            StylePatch {
                position: Some(Vec2::new(50.0, 0.0)),
                ..Default::default()
            },
        );

        tweener.tick(1.0); // track elapsed 0.5
        assert!((tweener.style(1).position.x - 75.0).abs() < 1e-4);
    }

    #[test]
    fn test_kill_keeps_current_style() {
        let mut tweener = Tweener::new();
        tweener.play(
            1u32,
            Timeline::new().to(Property::Scale(3.0), 2.0, Easing::Linear, 0.0),
        );
        tweener.tick(1.0);

        assert_eq!(tweener.kill_tweens_of(1), 1);
        assert!(!tweener.is_tweening(1));
        let scale = tweener.style(1).scale;
        assert!((scale - 2.0).abs() < 1e-5);

        tweener.tick(5.0);
        assert_eq!(tweener.style(1).scale, scale);
        assert_eq!(tweener.kill_tweens_of(1), 0);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut tweener = Tweener::new();
        tweener.play(1u32, fade_in_out());
        tweener.play(2u32, fade_in_out());

        tweener.kill_tweens_of(1);
        assert!(!tweener.is_tweening(1));
        assert!(tweener.is_tweening(2));
    }

    #[test]
    fn test_set_only_timeline_does_not_linger() {
        let mut tweener = Tweener::new();
        tweener.play(
            4u32,
            Timeline::new().set(StylePatch {
                z_index: Some(5),
                ..Default::default()
            }),
        );
        assert_eq!(tweener.style(4).z_index, 5);
        assert!(!tweener.is_tweening(4));
    }
}
