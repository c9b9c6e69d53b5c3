// model-matrix: model matrices for scene objects

pub mod math;
pub mod scene;
pub mod uniform;

pub use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};
pub use math::{compose_model_matrix, AxisAngle, EulerAngles, Object, RotationSource};
pub use scene::{Scene, SceneObject};
pub use uniform::ModelUniform;
