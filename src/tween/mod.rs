//! Minimal keyed tween engine used to animate trail images.

pub mod easing;
pub mod engine;
pub mod timeline;

pub use easing::Easing;
pub use engine::Tweener;
pub use timeline::{Property, Style, StylePatch, Timeline, Track};
