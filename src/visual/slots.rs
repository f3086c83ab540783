use bevy::color::Alpha;
use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::{
    camera::Viewport,
    trail::{Geometry, TrailConfig, TrailSequencer},
    tween::{Style, Tweener},
};

/// Depth step between two stacking levels
const Z_STEP: f32 = 0.01;

/// Stay well inside the camera's far plane however high the stack climbs
const MAX_Z: f32 = 900.0;

/// The running trail: slot pool bound to image entities
#[derive(Resource, Deref, DerefMut)]
pub struct ActiveTrail(pub TrailSequencer<Entity>);

/// Tween state of every image entity
#[derive(Resource, Default, Deref, DerefMut)]
pub struct SlotTweens(pub Tweener<Entity>);

/// Per-image render data
#[derive(Component, Debug, Clone, Copy)]
pub struct SlotVisual {
    /// Source image width / height
    pub aspect: f32,
}

/// Layout box of an image: displayed at `width_fraction` of the viewport
/// width, keeping its aspect ratio, offset by the style's position
pub fn slot_geometry(aspect: f32, viewport: &Viewport, width_fraction: f32, style: &Style) -> Geometry {
    let width = viewport.size.x * width_fraction;
    let height = if aspect > 0.0 { width / aspect } else { width };
    Geometry {
        x: style.position.x,
        y: style.position.y,
        width,
        height,
    }
}

/// World transform for a unit quad showing an image of layout `size`
pub fn slot_transform(style: &Style, size: Vec2, viewport: &Viewport) -> Transform {
    let centre = viewport.page_to_world(style.position + size * 0.5);
    let z = (style.z_index as f32 * Z_STEP).min(MAX_Z);

    Transform::from_translation(centre.extend(z))
        .with_scale((size * style.scale).extend(1.0))
}

/// System: Re-measure every slot after the window changed size
pub fn resize_slots(
    mut resized: MessageReader<WindowResized>,
    trail: Option<ResMut<ActiveTrail>>,
    mut tweens: ResMut<SlotTweens>,
    viewport: Res<Viewport>,
    config: Res<TrailConfig>,
    visuals: Query<&SlotVisual>,
) {
    if resized.read().count() == 0 {
        return;
    }
    let Some(mut trail) = trail else {
        return;
    };

    for slot in trail.slots_mut() {
        let aspect = visuals.get(slot.element()).map_or(1.0, |visual| visual.aspect);
        slot.recompute_geometry(&mut **tweens, |_, style| {
            slot_geometry(aspect, &viewport, config.image_width, style)
        });
    }

    if let Some(first) = trail.slots().first() {
        let geometry = first.geometry();
        info!(
            "Re-measured {} trail images (first is {:.0}x{:.0})",
            trail.slots().len(),
            geometry.width,
            geometry.height
        );
    }
}

/// System: Advance every running tween by the frame time
pub fn advance_tweens(time: Res<Time>, mut tweens: ResMut<SlotTweens>) {
    tweens.tick(time.delta_secs());
}

/// System: Push tweened styles onto transforms, visibility and material alpha
pub fn sync_slot_visuals(
    trail: Res<ActiveTrail>,
    tweens: Res<SlotTweens>,
    viewport: Res<Viewport>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut visuals: Query<(&mut Transform, &mut Visibility, &MeshMaterial3d<StandardMaterial>)>,
) {
    for slot in trail.slots() {
        let Ok((mut transform, mut visibility, material)) = visuals.get_mut(slot.element()) else {
            continue;
        };

        let style = tweens.style(slot.element());
        *transform = slot_transform(&style, slot.geometry().size(), &viewport);

        let shown = if style.opacity > 0.0 {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(shown);

        let stale = materials
            .get(&material.0)
            .is_some_and(|m| m.base_color.alpha() != style.opacity);
        if stale {
            if let Some(m) = materials.get_mut(&material.0) {
                m.base_color.set_alpha(style.opacity);
            }
        }
    }
}
