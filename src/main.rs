// model-matrix demo: builds a small scene and logs its model matrices.
// Run with RUST_LOG=debug (or trace) to see the output.

use model_matrix::{AxisAngle, EulerAngles, ModelUniform, Object, Quat, Scene, SceneObject, Vec3};

const STEPS: u32 = 4;
const ROTATION_SPEED: f32 = 2.0 * 0.016; // Assuming ~60 FPS

fn main() {
    // Initialize logging
    env_logger::init();

    let mut scene = Scene::new();
    scene.add_object(SceneObject::new(
        "cube",
        Object::identity().position(Vec3::new(0.0, 0.0, -3.0)),
    ));
    scene.add_object(SceneObject::new(
        "floor",
        Object::identity()
            .position(Vec3::new(0.0, -1.0, 0.0))
            .scale(Vec3::new(10.0, 0.1, 10.0)),
    ));
    scene.add_object(SceneObject::new(
        "flat",
        Object::identity().scale(Vec3::new(1.0, 0.0, 1.0)),
    ));

    for step in 0..STEPS {
        if let Some(cube) = scene.get_object_mut("cube") {
            cube.object.rotate(Quat::from_rotation_y(ROTATION_SPEED));
        }

        for (name, model) in scene.model_matrices() {
            log::trace!("step {step} '{name}' model matrix: {model:?}");
        }
    }

    for obj in scene.iter() {
        let uniform = ModelUniform::from(&obj.object);
        let origin = obj.object.transform_point(Vec3::ZERO);
        log::info!(
            "'{}': origin -> {:?}, {} uniform bytes, normal matrix: {}",
            obj.name,
            origin,
            uniform.as_bytes().len(),
            if obj.object.normal_matrix().is_some() {
                "ok"
            } else {
                "degenerate"
            },
        );
    }

    // Same composition with other rotation representations.
    let euler = Object::new(
        Vec3::X,
        EulerAngles::xyz(0.0, ROTATION_SPEED, 0.0),
        Vec3::ONE,
    );
    let axis_angle = Object::new(
        Vec3::X,
        AxisAngle::new(Vec3::Y, ROTATION_SPEED),
        Vec3::ONE,
    );
    log::info!("euler model matrix: {:?}", euler.model_matrix());
    log::info!("axis-angle model matrix: {:?}", axis_angle.model_matrix());
}
