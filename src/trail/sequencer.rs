//! Per-frame reveal decisions for the image trail.

use bevy::log::trace;

use super::animator::Animator;
use super::config::{RevealTiming, TrailConfig};
use super::gate::should_trigger;
use super::pointer::PointerState;
use super::reveal::reveal_timeline;
use super::slot::ImageSlot;

/// Settings the sequencer reads every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequencerSettings {
    pub threshold: f32,
    pub smoothing: f32,
    pub timing: RevealTiming,
}

impl From<&TrailConfig> for SequencerSettings {
    fn from(config: &TrailConfig) -> Self {
        SequencerSettings {
            threshold: config.threshold,
            smoothing: config.smoothing,
            timing: config.reveal,
        }
    }
}

impl Default for SequencerSettings {
    fn default() -> Self {
        SequencerSettings::from(&TrailConfig::default())
    }
}

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Index of the slot revealed this frame
    pub revealed: Option<usize>,
    /// Stacking counter was reset because every slot went idle
    pub stack_reset: bool,
}

/// Round-robin image pool driven once per display frame
#[derive(Debug, Clone)]
pub struct TrailSequencer<E> {
    slots: Vec<ImageSlot<E>>,
    next_index: usize,
    stack_counter: u32,
    settings: SequencerSettings,
}

impl<E: Copy> TrailSequencer<E> {
    /// Returns `None` for an empty pool: there is nothing to reveal.
    pub fn new(slots: Vec<ImageSlot<E>>, settings: SequencerSettings) -> Option<Self> {
        if slots.is_empty() {
            return None;
        }
        Some(TrailSequencer {
            slots,
            next_index: 0,
            stack_counter: 1,
            settings,
        })
    }

    pub fn slots(&self) -> &[ImageSlot<E>] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [ImageSlot<E>] {
        &mut self.slots
    }

    pub fn next_index(&self) -> usize {
        self.next_index
    }

    pub fn stack_counter(&self) -> u32 {
        self.stack_counter
    }

    /// Run one frame: decide, reveal if due, then check for idle
    pub fn frame<A: Animator<E>>(&mut self, pointer: &mut PointerState, animator: &mut A) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();

        // Gate on the distance before this frame's smoothing; smoothing runs regardless
        let due = should_trigger(pointer, self.settings.threshold);
        pointer.smooth(self.settings.smoothing);

        if due {
            let index = self.next_index;
            self.reveal(index, pointer, animator);

            self.stack_counter += 1;
            self.next_index = (self.next_index + 1) % self.slots.len();
            pointer.rebase_trigger();

            outcome.revealed = Some(index);
        }

        let idle = !self.slots.iter().any(|slot| slot.is_active(animator));
        if idle && self.stack_counter != 1 {
            self.stack_counter = 1;
            outcome.stack_reset = true;
        }

        outcome
    }

    /// Cancel whatever runs on the slot and start a fresh reveal timeline
    fn reveal<A: Animator<E>>(&self, index: usize, pointer: &PointerState, animator: &mut A) {
        let slot = &self.slots[index];
        let half = slot.geometry().half_size();
        let current = pointer.current().0;
        let anchor = pointer.smoothed().unwrap_or(current);

        let cancelled = animator.kill_tweens_of(slot.element());
        if cancelled > 0 {
            trace!("slot {} restarted mid-animation", index);
        }
        animator.play(
            slot.element(),
            reveal_timeline(&self.settings.timing, anchor - half, current - half, self.stack_counter),
        );
    }
}
