use bevy::camera::ScalingMode;
use bevy::prelude::*;

/// Camera distance from the image plane
const CAMERA_HEIGHT: f32 = 1000.0;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .add_systems(Startup, setup_camera)
            .add_systems(PreUpdate, sync_viewport);
    }
}

/// Logical size of the window plus the page scroll offset.
///
/// Page coordinates have their origin at the top-left of the page, y down.
/// A native window never scrolls; an embedding host may set `scroll`.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub size: Vec2,
    pub scroll: Vec2,
}

impl Viewport {
    #[cfg(test)]
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            scroll: Vec2::ZERO,
        }
    }

    /// Page position -> world position on the image plane
    ///
    /// ```text
    ///  page (0,0) ----→ x          world   ↑ y
    ///    |                                 |
    ///    ↓ y                          -----+----→ x   (origin at viewport centre)
    /// ```
    pub fn page_to_world(&self, page: Vec2) -> Vec2 {
        let client = page - self.scroll;
        Vec2::new(client.x - self.size.x * 0.5, self.size.y * 0.5 - client.y)
    }
}

#[derive(Component)]
pub struct MainCamera;

/// Orthographic camera looking down -Z at the image plane, one world unit
/// per logical pixel
fn setup_camera(mut commands: Commands) {
    let projection = Projection::Orthographic(OrthographicProjection {
        scaling_mode: ScalingMode::WindowSize,
        near: 0.0,
        far: CAMERA_HEIGHT * 2.0,
        ..OrthographicProjection::default_3d()
    });
    commands.spawn((
        Camera3d::default(),
        projection,
        Transform::from_xyz(0.0, 0.0, CAMERA_HEIGHT).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Keep the viewport resource in step with the primary window
fn sync_viewport(mut viewport: ResMut<Viewport>, windows: Query<&Window>) {
    if let Ok(window) = windows.single() {
        let size = Vec2::new(window.width(), window.height());

        // Only touch the resource when the size actually changed
        if viewport.size != size {
            viewport.size = size;
            info!("Viewport resized to {}x{}", size.x, size.y);
        }
    }
}
