use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use bevy::prelude::{Res, Resource};

/// Cancellation handle for a started [`FrameLoop`]
#[derive(Debug, Clone)]
pub struct FrameLoopHandle {
    cancelled: Arc<AtomicBool>,
}

impl FrameLoopHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Repeating per-frame task: waits for `start`, then runs every frame until
/// its handle is cancelled. Never stops on its own.
#[derive(Resource, Debug, Default)]
pub struct FrameLoop {
    cancelled: Option<Arc<AtomicBool>>,
    frames: u64,
}

impl FrameLoop {
    /// Start running. Starting again replaces (and cancels) the previous run.
    pub fn start(&mut self) -> FrameLoopHandle {
        if let Some(previous) = self.cancelled.take() {
            previous.store(true, Ordering::Relaxed);
        }
        let cancelled = Arc::new(AtomicBool::new(false));
        self.cancelled = Some(cancelled.clone());
        self.frames = 0;
        FrameLoopHandle { cancelled }
    }

    pub fn is_running(&self) -> bool {
        self.cancelled
            .as_ref()
            .is_some_and(|flag| !flag.load(Ordering::Relaxed))
    }

    /// Count one executed frame
    pub fn record_frame(&mut self) {
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Run condition: the trail frame runs only while the loop is live
pub fn frame_loop_running(frame_loop: Res<FrameLoop>) -> bool {
    frame_loop.is_running()
}
