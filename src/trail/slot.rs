use bevy::math::Vec2;

use super::animator::Animator;
use crate::tween::{Style, StylePatch};

/// Bounding box of an image at rest, in page coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Geometry {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn half_size(&self) -> Vec2 {
        self.size() * 0.5
    }
}

/// One reusable pool entry wrapping a single visual element
#[derive(Debug, Clone)]
pub struct ImageSlot<E> {
    element: E,
    geometry: Geometry,
}

impl<E: Copy> ImageSlot<E> {
    /// Wrap `element` and take its first measurement
    pub fn new<A, M>(element: E, animator: &mut A, measure: M) -> Self
    where
        A: Animator<E>,
        M: FnOnce(E, &Style) -> Geometry,
    {
        let mut slot = ImageSlot {
            element,
            geometry: Geometry::default(),
        };
        slot.recompute_geometry(animator, measure);
        slot
    }

    pub fn element(&self) -> E {
        self.element
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Visible or mid-animation. Only used for idle detection.
    pub fn is_active<A: Animator<E>>(&self, animator: &A) -> bool {
        animator.is_tweening(self.element) || animator.opacity(self.element) > 0.0
    }

    /// Reset the element to its rest style, then measure it again.
    ///
    /// The reset comes first so an offset left by an earlier reveal is
    /// never read back as layout.
    pub fn recompute_geometry<A, M>(&mut self, animator: &mut A, measure: M)
    where
        A: Animator<E>,
        M: FnOnce(E, &Style) -> Geometry,
    {
        animator.set(self.element, StylePatch::rest());
        self.geometry = measure(self.element, &animator.style(self.element));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::{Easing, Property, Timeline, Tweener};

    /// Bounding box as a layout engine would report it: offset included
    fn measure_at_offset(base: Vec2) -> impl FnOnce(u32, &Style) -> Geometry {
        move |_, style| Geometry {
            x: style.position.x,
            y: style.position.y,
            width: base.x,
            height: base.y,
        }
    }

    #[test]
    fn test_new_slot_is_measured_at_rest() {
        let mut tweener: Tweener<u32> = Tweener::new();
        let slot = ImageSlot::new(3u32, &mut tweener, measure_at_offset(Vec2::new(200.0, 300.0)));

        assert_eq!(
            slot.geometry(),
            Geometry {
                x: 0.0,
                y: 0.0,
                width: 200.0,
                height: 300.0
            }
        );
        assert_eq!(slot.geometry().half_size(), Vec2::new(100.0, 150.0));
        assert!(!slot.is_active(&tweener));
    }

    #[test]
    fn test_visible_or_tweening_counts_as_active() {
        let mut tweener: Tweener<u32> = Tweener::new();
        let slot = ImageSlot::new(1u32, &mut tweener, measure_at_offset(Vec2::ONE));

        tweener.set(
            1,
            StylePatch {
                opacity: Some(0.2),
                ..Default::default()
            },
        );
        assert!(slot.is_active(&tweener));

        tweener.set(
            1,
            StylePatch {
                opacity: Some(0.0),
                ..Default::default()
            },
        );
        tweener.play(1, Timeline::new().to(Property::Scale(2.0), 1.0, Easing::Linear, 0.0));
        assert!(slot.is_active(&tweener));

        tweener.tick(1.5);
        assert!(!slot.is_active(&tweener));
    }

    #[test]
    fn test_recompute_resets_offset_before_measuring() {
        let mut tweener: Tweener<u32> = Tweener::new();
        let mut slot = ImageSlot::new(1u32, &mut tweener, measure_at_offset(Vec2::new(100.0, 50.0)));

        // Mid-reveal: moved away from the layout origin and visible
        tweener.set(
            1,
            StylePatch {
                position: Some(Vec2::new(640.0, 320.0)),
                opacity: Some(0.6),
                ..Default::default()
            },
        );

        // Resize to a larger layout
        slot.recompute_geometry(&mut tweener, measure_at_offset(Vec2::new(120.0, 60.0)));

        assert_eq!(
            slot.geometry(),
            Geometry {
                x: 0.0,
                y: 0.0,
                width: 120.0,
                height: 60.0
            }
        );
        assert_eq!(tweener.style(1).opacity, 0.0);
        assert!(!slot.is_active(&tweener));
    }
}
