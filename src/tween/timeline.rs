//! Style values and the timelines that animate them.

use bevy::math::Vec2;

use super::easing::Easing;

/// Visual state of one animated element.
///
/// `position` is the element's top-left offset in page coordinates
/// (origin top-left, y down). `scale` is applied about the element center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub position: Vec2,
    pub opacity: f32,
    pub scale: f32,
    pub z_index: u32,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            position: Vec2::ZERO,
            opacity: 0.0,
            scale: 1.0,
            z_index: 0,
        }
    }
}

/// Partial style write. `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StylePatch {
    pub position: Option<Vec2>,
    pub opacity: Option<f32>,
    pub scale: Option<f32>,
    pub z_index: Option<u32>,
}

impl StylePatch {
    /// The rest state: top-left origin, fully transparent
    pub fn rest() -> Self {
        StylePatch {
            position: Some(Vec2::ZERO),
            opacity: Some(0.0),
            ..Default::default()
        }
    }

    pub fn apply(&self, style: &mut Style) {
        if let Some(position) = self.position {
            style.position = position;
        }
        if let Some(opacity) = self.opacity {
            style.opacity = opacity;
        }
        if let Some(scale) = self.scale {
            style.scale = scale;
        }
        if let Some(z_index) = self.z_index {
            style.z_index = z_index;
        }
    }

    /// Overlay `other` on top of this patch (fields set in `other` win)
    pub fn merge(self, other: StylePatch) -> StylePatch {
        StylePatch {
            position: other.position.or(self.position),
            opacity: other.opacity.or(self.opacity),
            scale: other.scale.or(self.scale),
            z_index: other.z_index.or(self.z_index),
        }
    }
}

/// A tweenable property together with its value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Property {
    Position(Vec2),
    Opacity(f32),
    Scale(f32),
}

impl Property {
    /// Read the current value of the same property from `style`
    pub fn read(&self, style: &Style) -> Property {
        match self {
            Property::Position(_) => Property::Position(style.position),
            Property::Opacity(_) => Property::Opacity(style.opacity),
            Property::Scale(_) => Property::Scale(style.scale),
        }
    }

    pub fn write(&self, style: &mut Style) {
        match *self {
            Property::Position(v) => style.position = v,
            Property::Opacity(v) => style.opacity = v,
            Property::Scale(v) => style.scale = v,
        }
    }

    /// Interpolate from `from` toward `self`. Mismatched variants snap to `self`.
    pub fn lerp_from(&self, from: &Property, t: f32) -> Property {
        match (from, self) {
            (Property::Position(a), Property::Position(b)) => Property::Position(a.lerp(*b, t)),
            (Property::Opacity(a), Property::Opacity(b)) => Property::Opacity(a + t * (b - a)),
            (Property::Scale(a), Property::Scale(b)) => Property::Scale(a + t * (b - a)),
            _ => *self,
        }
    }
}

/// One property tween positioned on a timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub target: Property,
    /// Start time relative to the timeline start
    pub offset: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl Track {
    pub fn end(&self) -> f32 {
        self.offset + self.duration
    }

    /// Eased progress of this track at `elapsed` timeline time
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.easing.apply((elapsed - self.offset) / self.duration)
    }
}

/// An immediate style write followed by any number of overlapping tracks.
///
/// Start values of each track are captured when the track begins, not when
/// the timeline is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    set: StylePatch,
    tracks: Vec<Track>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style written at time zero, before any track runs
    pub fn set(mut self, patch: StylePatch) -> Self {
        self.set = self.set.merge(patch);
        self
    }

    /// Tween `target` over `duration`, starting `offset` after the timeline start
    pub fn to(mut self, target: Property, duration: f32, easing: Easing, offset: f32) -> Self {
        self.tracks.push(Track {
            target,
            offset: offset.max(0.0),
            duration: duration.max(0.0),
            easing,
        });
        self
    }

    pub fn initial(&self) -> &StylePatch {
        &self.set
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Total length: the latest track end
    pub fn duration(&self) -> f32 {
        self.tracks.iter().map(Track::end).fold(0.0, f32::max)
    }
}
