use super::pointer::PointerState;

/// Default pointer travel (logical pixels) between two reveals
pub const DEFAULT_THRESHOLD: f32 = 100.0;

/// Has the pointer travelled far enough inside the region to reveal the next image?
///
/// Strictly greater than `threshold`; evaluated fresh every frame.
pub fn should_trigger(state: &PointerState, threshold: f32) -> bool {
    state.distance_since_trigger() > threshold && state.inside_region()
}
