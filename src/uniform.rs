// GPU-ready layout for an object's model matrix

use glam::{Mat3, Mat4};

use crate::math::{normal_matrix, Object, RotationSource};

/// Column-major model and normal matrices, laid out for a uniform buffer.
///
/// The normal matrix is stored padded to 4x4. It falls back to identity,
/// with a warning, when the model matrix is singular or non-finite.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 4],
}

impl ModelUniform {
    pub fn new() -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            normal: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    pub fn from_matrix(model: Mat4) -> Self {
        let mut uniform = Self::new();
        uniform.update(model);
        uniform
    }

    pub fn update(&mut self, model: Mat4) {
        let normal = normal_matrix(model).unwrap_or_else(|| {
            log::warn!(
                "degenerate model matrix {:?}, using identity normal matrix",
                model
            );
            Mat3::IDENTITY
        });
        self.model = model.to_cols_array_2d();
        self.normal = Mat4::from_mat3(normal).to_cols_array_2d();
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for ModelUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RotationSource> From<&Object<R>> for ModelUniform {
    fn from(object: &Object<R>) -> Self {
        Self::from_matrix(object.model_matrix())
    }
}
