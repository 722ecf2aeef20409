use glam::{Mat4, Quat, UVec2, Vec2, Vec3, Vec4Swizzles};

/// Projection mode of the host camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection.
    Perspective {
        /// Vertical field of view in degrees.
        fovy: f32,
    },
    /// Orthographic projection.
    Orthographic {
        /// Half of the visible height in world units.
        half_height: f32,
    },
}

impl Projection {
    /// Whether this is an orthographic projection.
    #[must_use]
    pub fn is_orthographic(&self) -> bool {
        matches!(self, Self::Orthographic { .. })
    }
}

/// Externally observable camera pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position.
    pub position: Vec3,
    /// Unit orientation.
    pub orientation: Quat,
}

/// Camera object owned by the host.
///
/// Left-handed, Y-up: in local space right is `+X`, up is `+Y` and the
/// camera looks down `+Z`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Unit orientation.
    pub orientation: Quat,
    /// Projection mode and its scale parameter.
    pub projection: Projection,
    /// Viewport size in physical pixels.
    pub viewport: UVec2,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -10.0),
            orientation: Quat::IDENTITY,
            projection: Projection::Perspective { fovy: 45.0 },
            viewport: UVec2::new(1280, 720),
            znear: 0.1,
            zfar: 2000.0,
        }
    }
}

impl Camera {
    /// Camera-relative right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Camera-relative up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Viewing direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    /// Viewport aspect ratio (width / height). 1.0 for an empty viewport.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.viewport.y == 0 {
            return 1.0;
        }
        self.viewport.x as f32 / self.viewport.y as f32
    }

    /// Half the viewport size in pixels, never below one pixel per axis.
    #[must_use]
    pub fn half_resolution(&self) -> Vec2 {
        (self.viewport.as_vec2() * 0.5).max(Vec2::ONE)
    }

    /// Half the visible height in world units at `distance` from the eye.
    ///
    /// Orthographic cameras ignore `distance`.
    #[must_use]
    pub fn visible_half_height(&self, distance: f32) -> f32 {
        match self.projection {
            Projection::Orthographic { half_height } => half_height,
            Projection::Perspective { fovy } => {
                distance * (fovy.to_radians() * 0.5).tan()
            }
        }
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            orientation: self.orientation,
        }
    }

    /// Apply a pose.
    pub fn set_pose(&mut self, pose: Pose) {
        self.position = pose.position;
        self.orientation = pose.orientation;
    }

    /// Update the viewport after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = UVec2::new(width, height);
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_lh(self.position, self.forward(), self.up())
    }

    /// View-to-clip matrix with a `[0, 1]` depth range.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective { fovy } => Mat4::perspective_lh(
                fovy.to_radians(),
                self.aspect(),
                self.znear,
                self.zfar,
            ),
            Projection::Orthographic { half_height } => {
                let half_width = half_height * self.aspect();
                Mat4::orthographic_lh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.znear,
                    self.zfar,
                )
            }
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to viewport pixels (origin top-left, y down).
    ///
    /// Returns `None` for points behind the eye or an empty viewport, in
    /// either projection.
    #[must_use]
    pub fn world_to_viewport(&self, point: Vec3) -> Option<Vec2> {
        if self.viewport.x == 0 || self.viewport.y == 0 {
            return None;
        }
        if (point - self.position).dot(self.forward()) <= 0.0 {
            return None;
        }
        let clip = self.build_matrix() * point.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.xy() / clip.w;
        let size = self.viewport.as_vec2();
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * size.x,
            (1.0 - ndc.y) * 0.5 * size.y,
        ))
    }
}
