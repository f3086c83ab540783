use bevy::prelude::*;

use crate::{
    camera::Viewport,
    input::{PointerEvent, PointerEventType},
    trail::{
        FrameLoop, HitRegion, PointerSample, PointerState, RegionTransition, TrailConfig,
        track_sample,
    },
};

use super::{
    preload::TrailTeardown,
    slots::{ActiveTrail, SlotTweens},
};

/// System: Recompute the hit region whenever the viewport changes
pub fn refresh_hit_region(
    viewport: Res<Viewport>,
    config: Res<TrailConfig>,
    mut region: ResMut<HitRegion>,
) {
    if !viewport.is_changed() {
        return;
    }
    *region = HitRegion::inset(viewport.size, config.region_inset);
}

/// System: Feed pointer input into the shared pointer state
pub fn track_pointer(
    mut pointer_events: MessageReader<PointerEvent>,
    region: Res<HitRegion>,
    viewport: Res<Viewport>,
    mut pointer: ResMut<PointerState>,
) {
    for event in pointer_events.read() {
        match event.event_type {
            PointerEventType::Move => {
                let sample = PointerSample::from_client(event.position, viewport.scroll);
                match track_sample(&mut pointer, &region, viewport.scroll, sample) {
                    Some(RegionTransition::Entered) => {
                        debug!("Pointer entered trail region at {:?}", sample.0)
                    }
                    Some(RegionTransition::Left) => {
                        debug!("Pointer left trail region at {:?}", sample.0)
                    }
                    None => {}
                }
            }

            PointerEventType::Leave => {
                if pointer.inside_region() {
                    pointer.on_region_leave();
                    debug!("Pointer left the window");
                }
            }
        }
    }
}

/// System: One trail frame - decide, reveal, idle check
pub fn render_trail(
    mut trail: ResMut<ActiveTrail>,
    mut pointer: ResMut<PointerState>,
    mut tweens: ResMut<SlotTweens>,
    mut frame_loop: ResMut<FrameLoop>,
) {
    frame_loop.record_frame();
    let outcome = trail.frame(&mut pointer, &mut **tweens);

    if let Some(index) = outcome.revealed {
        debug!(
            "Revealed image {} (next {}, stack {})",
            index,
            trail.next_index(),
            trail.stack_counter()
        );
    }
    if outcome.stack_reset {
        debug!("All trail images idle, stacking order reset");
    }
}

/// System: Cancel the frame loop when the app shuts down
pub fn stop_frame_loop_on_exit(
    mut exits: MessageReader<AppExit>,
    teardown: Option<Res<TrailTeardown>>,
    frame_loop: Res<FrameLoop>,
) {
    if exits.read().count() == 0 {
        return;
    }
    if let Some(teardown) = teardown.filter(|t| !t.0.is_cancelled()) {
        teardown.0.cancel();
        info!("Trail frame loop cancelled after {} frames", frame_loop.frames());
    }
}
