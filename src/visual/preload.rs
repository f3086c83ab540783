//! Image pool creation and the preload gate that starts the trail.

use bevy::asset::{LoadState, RenderAssetUsages};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use rand::Rng;

use crate::{
    camera::Viewport,
    trail::{
        CONFIG_PATH, ConfigError, FrameLoop, FrameLoopHandle, ImageSlot, SequencerSettings,
        TrailConfig, TrailSequencer,
    },
};

use super::slots::{ActiveTrail, SlotTweens, SlotVisual, slot_geometry};

/// Pixel width of generated placeholder tiles
const PLACEHOLDER_WIDTH: u32 = 240;

/// An image that still has to finish loading before it joins the pool
#[derive(Component, Debug, Clone)]
pub struct PendingImage {
    /// Position in the reveal order
    pub order: usize,
    pub image: Handle<Image>,
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PreloadState {
    #[default]
    Loading,
    Done,
}

/// Keeps the frame loop's cancellation handle for teardown
#[derive(Resource, Debug, Clone)]
pub struct TrailTeardown(pub FrameLoopHandle);

/// Run condition: images are still loading
pub fn preload_pending(state: Res<PreloadState>) -> bool {
    *state == PreloadState::Loading
}

/// System: Load the trail config, falling back to defaults
pub fn load_trail_config(mut commands: Commands) {
    let config = match TrailConfig::load(CONFIG_PATH) {
        Ok(config) => {
            info!("Loaded trail config from {}", CONFIG_PATH);
            config
        }
        Err(ConfigError::Io(e)) => {
            info!("No trail config at {} ({}), using defaults", CONFIG_PATH, e);
            TrailConfig::default()
        }
        Err(e) => {
            warn!("{} - using defaults", e);
            TrailConfig::default()
        }
    };
    commands.insert_resource(config);
}

/// Pixel size of a placeholder tile with the given width / height ratio
pub fn placeholder_size(aspect: f32) -> UVec2 {
    let height = (PLACEHOLDER_WIDTH as f32 / aspect.max(0.01)).round().max(1.0);
    UVec2::new(PLACEHOLDER_WIDTH, height as u32)
}

/// A soft, saturated colour with a random hue
pub fn placeholder_color(rng: &mut impl Rng) -> [u8; 4] {
    Color::hsl(rng.random_range(0.0..360.0), 0.65, 0.6)
        .to_srgba()
        .to_u8_array()
}

fn placeholder_image(size: UVec2, color: [u8; 4]) -> Image {
    Image::new_fill(
        Extent3d {
            width: size.x,
            height: size.y,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &color,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

/// System: Queue every trail image; nothing is revealed until all of them resolve
pub fn spawn_image_pool(
    mut commands: Commands,
    config: Res<TrailConfig>,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
) {
    let handles: Vec<Handle<Image>> = if config.images.is_empty() {
        let mut rng = rand::rng();
        let size = placeholder_size(config.placeholder_aspect);
        info!(
            "No trail images configured, generating {} placeholder tiles",
            config.placeholder_count
        );
        (0..config.placeholder_count)
            .map(|_| images.add(placeholder_image(size, placeholder_color(&mut rng))))
            .collect()
    } else {
        config
            .images
            .iter()
            .map(|path| asset_server.load(path.clone()))
            .collect()
    };

    for (order, image) in handles.into_iter().enumerate() {
        commands.spawn((PendingImage { order, image }, Name::new(format!("Trail image {}", order))));
    }
}

/// System: Once every image has loaded (or failed), build the slot pool and
/// start the frame loop
#[allow(clippy::too_many_arguments)]
pub fn poll_preload(
    mut commands: Commands,
    pending: Query<(Entity, &PendingImage)>,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    config: Res<TrailConfig>,
    viewport: Res<Viewport>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut tweens: ResMut<SlotTweens>,
    mut frame_loop: ResMut<FrameLoop>,
    mut state: ResMut<PreloadState>,
) {
    let mut ready = Vec::new();
    let mut failed = Vec::new();

    for (entity, pending_image) in &pending {
        if let Some(image) = images.get(&pending_image.image) {
            ready.push((pending_image.order, entity, pending_image.image.clone(), image.size_f32()));
        } else if matches!(
            asset_server.get_load_state(&pending_image.image),
            Some(LoadState::Failed(_))
        ) {
            failed.push((pending_image.order, entity));
        } else {
            // Still loading
            return;
        }
    }

    for (order, entity) in failed {
        error!("Trail image {} failed to load, leaving it out", order);
        commands.entity(entity).despawn();
    }

    ready.sort_by_key(|(order, ..)| *order);

    // Every image is drawn on the same unit quad, scaled per frame
    let quad = meshes.add(Rectangle::new(1.0, 1.0));

    let mut slots = Vec::with_capacity(ready.len());
    for (_, entity, image, size) in ready {
        let aspect = if size.y > 0.0 { size.x / size.y } else { 1.0 };
        let material = materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 1.0, 1.0, 0.0),
            base_color_texture: Some(image),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        commands.entity(entity).remove::<PendingImage>().insert((
            SlotVisual { aspect },
            Mesh3d(quad.clone()),
            MeshMaterial3d(material),
            Transform::default(),
            Visibility::Hidden,
        ));

        slots.push(ImageSlot::new(entity, &mut **tweens, |_, style| {
            slot_geometry(aspect, &viewport, config.image_width, style)
        }));
    }

    *state = PreloadState::Done;

    let slot_count = slots.len();
    let Some(sequencer) = TrailSequencer::new(slots, SequencerSettings::from(&*config)) else {
        error!("No trail images available, the trail stays off");
        return;
    };

    commands.insert_resource(ActiveTrail(sequencer));
    commands.insert_resource(TrailTeardown(frame_loop.start()));
    info!("🖼️ Preloaded {} trail images, frame loop started", slot_count);
}
