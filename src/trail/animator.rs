use std::hash::Hash;

use crate::tween::{Style, StylePatch, Timeline, Tweener};

/// What the trail needs from an animation engine.
///
/// `E` is the engine's handle for one visual element. The sequencer never
/// waits on an animation; it only polls `is_tweening` and `style`.
pub trait Animator<E> {
    /// Is any timeline currently running on `element`?
    fn is_tweening(&self, element: E) -> bool;

    /// Current style of `element` as last written by the engine
    fn style(&self, element: E) -> Style;

    /// Write style fields immediately
    fn set(&mut self, element: E, patch: StylePatch);

    /// Stop everything running on `element`. Returns the number of
    /// timelines stopped.
    fn kill_tweens_of(&mut self, element: E) -> usize;

    /// Start `timeline` on `element` now
    fn play(&mut self, element: E, timeline: Timeline);

    fn opacity(&self, element: E) -> f32 {
        self.style(element).opacity
    }
}

impl<K: Copy + Eq + Hash> Animator<K> for Tweener<K> {
    fn is_tweening(&self, element: K) -> bool {
        Tweener::is_tweening(self, element)
    }

    fn style(&self, element: K) -> Style {
        Tweener::style(self, element)
    }

    fn set(&mut self, element: K, patch: StylePatch) {
        Tweener::set(self, element, patch);
    }

    fn kill_tweens_of(&mut self, element: K) -> usize {
        Tweener::kill_tweens_of(self, element)
    }

    fn play(&mut self, element: K, timeline: Timeline) {
        Tweener::play(self, element, timeline);
    }
}
