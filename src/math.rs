// Math utilities for scene objects

use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};

/// Anything that can hand out a 4x4 rotation matrix.
///
/// Objects don't care how their rotation is stored, only that it can be
/// turned into a matrix when the model matrix is built.
pub trait RotationSource {
    fn rotation_matrix(&self) -> Mat4;
}

impl RotationSource for Quat {
    fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_quat(*self)
    }
}

/// A precomputed rotation matrix, used as is.
impl RotationSource for Mat4 {
    fn rotation_matrix(&self) -> Mat4 {
        *self
    }
}

/// Euler angles in radians, applied in `order`.
#[derive(Debug, Clone, Copy)]
pub struct EulerAngles {
    pub order: EulerRot,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl EulerAngles {
    pub fn new(order: EulerRot, a: f32, b: f32, c: f32) -> Self {
        Self { order, a, b, c }
    }

    /// Pitch/yaw/roll around X, Y and Z.
    pub fn xyz(x: f32, y: f32, z: f32) -> Self {
        Self::new(EulerRot::XYZ, x, y, z)
    }
}

impl Default for EulerAngles {
    fn default() -> Self {
        Self::xyz(0.0, 0.0, 0.0)
    }
}

impl RotationSource for EulerAngles {
    fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_euler(self.order, self.a, self.b, self.c)
    }
}

/// Rotation of `angle` radians around `axis`. The axis must be normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    pub axis: Vec3,
    pub angle: f32,
}

impl AxisAngle {
    pub fn new(axis: Vec3, angle: f32) -> Self {
        Self { axis, angle }
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self::new(Vec3::Y, 0.0)
    }
}

impl RotationSource for AxisAngle {
    fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_axis_angle(self.axis, self.angle)
    }
}

/// Build a model matrix as `Scale * Translate * Rotation`.
///
/// The scale is applied to the identity first, the translation is then
/// applied inside the scaled frame, and the rotation is multiplied on the
/// right. This is not the usual TRS order: the translation column of the
/// result is `scale * position`, not `position`.
///
/// Nothing is validated. Zero scale gives a singular matrix, negative scale
/// a mirrored one, and NaN or infinite inputs end up in the result.
pub fn compose_model_matrix(position: Vec3, scale: Vec3, rotation: Mat4) -> Mat4 {
    let result = Mat4::IDENTITY * Mat4::from_scale(scale);
    let result = result * Mat4::from_translation(position);
    result * rotation
}

/// A renderable object's local transform state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Object<R = Quat> {
    pub position: Vec3,
    pub rotation: R,
    pub scale: Vec3,
}

impl<R: RotationSource> Object<R> {
    /// Create a new object
    pub fn new(position: Vec3, rotation: R, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn rotation(mut self, rotation: R) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn uniform_scale(self, scale: f32) -> Self {
        self.scale(Vec3::splat(scale))
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: R) {
        self.rotation = rotation;
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Move the object by `delta` in its parent space.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    pub fn rotation_matrix(&self) -> Mat4 {
        self.rotation.rotation_matrix()
    }

    /// Generate the model matrix from the current state.
    ///
    /// Recomputed on every call, see [`compose_model_matrix`] for the order.
    pub fn model_matrix(&self) -> Mat4 {
        compose_model_matrix(self.position, self.scale, self.rotation_matrix())
    }

    /// Map a local-space point into parent space.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.model_matrix().transform_point3(point)
    }

    /// Inverse-transpose of the model matrix's upper 3x3 block.
    ///
    /// Returns `None` when the block can't be inverted (zero scale on some
    /// axis) or holds non-finite values.
    pub fn normal_matrix(&self) -> Option<Mat3> {
        let normal = normal_matrix(self.model_matrix());
        if normal.is_none() {
            log::warn!(
                "degenerate model matrix (position {:?}, scale {:?}), no normal matrix",
                self.position,
                self.scale
            );
        }
        normal
    }
}

impl<R: RotationSource + Default> Default for Object<R> {
    fn default() -> Self {
        Self::new(Vec3::ZERO, R::default(), Vec3::ONE)
    }
}

impl Object<Quat> {
    /// Create an identity object
    pub fn identity() -> Self {
        Self::default()
    }

    /// Apply `rotation` on top of the current one.
    pub fn rotate(&mut self, rotation: Quat) {
        self.rotation = rotation * self.rotation;
    }
}

pub(crate) fn normal_matrix(model: Mat4) -> Option<Mat3> {
    let upper = Mat3::from_mat4(model);
    let det = upper.determinant();
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let normal = upper.inverse().transpose();
    normal.is_finite().then_some(normal)
}
