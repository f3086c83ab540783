use bevy::math::Vec2;

use super::config::RevealTiming;
use crate::tween::{Easing, Property, StylePatch, Timeline};

/// Build the reveal timeline for one image.
///
/// The image appears centred on the smoothed `anchor` (already offset to its
/// top-left), glides toward `target`, and halfway through dissolves while
/// growing to `scale_target`.
pub fn reveal_timeline(timing: &RevealTiming, anchor: Vec2, target: Vec2, z_index: u32) -> Timeline {
    Timeline::new()
        .set(StylePatch {
            position: Some(anchor),
            opacity: Some(1.0),
            scale: Some(1.0),
            z_index: Some(z_index),
        })
        .to(Property::Position(target), timing.move_duration, Easing::ExpoOut, 0.0)
        .to(
            Property::Opacity(0.0),
            timing.fade_duration,
            Easing::Power1Out,
            timing.fade_delay,
        )
        .to(
            Property::Scale(timing.scale_target),
            timing.scale_duration,
            Easing::QuintInOut,
            timing.fade_delay,
        )
}
