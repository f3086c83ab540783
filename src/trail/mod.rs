//! Triggering and sequencing engine for the image trail.
//!
//! Everything here is host-agnostic: the Bevy systems in `visual` feed it
//! pointer samples and drive one `frame` per display refresh.

pub mod animator;
pub mod config;
pub mod frame_loop;
pub mod gate;
pub mod pointer;
pub mod reveal;
pub mod sequencer;
pub mod slot;
pub mod smoothing;

pub use animator::Animator;
pub use config::{CONFIG_PATH, ConfigError, TrailConfig};
pub use frame_loop::{FrameLoop, FrameLoopHandle, frame_loop_running};
pub use pointer::{HitRegion, PointerSample, PointerState, RegionTransition, track_sample};
pub use sequencer::{FrameOutcome, SequencerSettings, TrailSequencer};
pub use slot::{Geometry, ImageSlot};
