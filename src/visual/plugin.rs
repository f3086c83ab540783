use crate::trail::{FrameLoop, HitRegion, PointerState, frame_loop_running};
use crate::visual::preload::{
    PreloadState, load_trail_config, poll_preload, preload_pending, spawn_image_pool,
};
use crate::visual::slots::{ActiveTrail, SlotTweens, advance_tweens, resize_slots, sync_slot_visuals};
use crate::visual::tracking::{
    refresh_hit_region, render_trail, stop_frame_loop_on_exit, track_pointer,
};
use bevy::prelude::*;

pub struct TrailPlugin;

impl Plugin for TrailPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .init_resource::<HitRegion>()
            .init_resource::<SlotTweens>()
            .init_resource::<FrameLoop>()
            .init_resource::<PreloadState>()
            // Config first, then queue the images it names
            .add_systems(Startup, (load_trail_config, spawn_image_pool).chain())
            .add_systems(
                Update,
                (
                    // Input
                    refresh_hit_region,
                    track_pointer,
                    // Preload gate (builds the pool once)
                    poll_preload.run_if(preload_pending),
                    resize_slots,
                    // Decide
                    render_trail
                        .run_if(resource_exists::<ActiveTrail>)
                        .run_if(frame_loop_running),
                    // Advance
                    advance_tweens,
                    sync_slot_visuals.run_if(resource_exists::<ActiveTrail>),
                )
                    .chain(),
            )
            .add_systems(Last, stop_frame_loop_on_exit);
    }
}
