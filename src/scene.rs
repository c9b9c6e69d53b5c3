// Scene module: a flat list of named objects

use glam::{Mat4, Quat};

use crate::math::{Object, RotationSource};

/// Represents a named object within the scene.
#[derive(Debug, Clone)]
pub struct SceneObject<R = Quat> {
    pub name: String,
    pub object: Object<R>,
}

impl<R: RotationSource> SceneObject<R> {
    /// Creates a new scene object with a given name and object state.
    pub fn new(name: impl Into<String>, object: Object<R>) -> Self {
        Self {
            name: name.into(),
            object,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.object.model_matrix()
    }
}

/// Represents the entire scene. Objects keep their insertion order and
/// names are not required to be unique.
#[derive(Debug)]
pub struct Scene<R = Quat> {
    pub objects: Vec<SceneObject<R>>,
}

impl<R> Default for Scene<R> {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
        }
    }
}

impl<R: RotationSource> Scene<R> {
    /// Creates a new, empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object to the scene.
    pub fn add_object(&mut self, object: SceneObject<R>) {
        log::debug!("adding object '{}' to scene", object.name);
        self.objects.push(object);
    }

    /// Removes the first object called `name`.
    pub fn remove_object(&mut self, name: &str) -> Option<SceneObject<R>> {
        let index = self.objects.iter().position(|obj| obj.name == name)?;
        log::debug!("removing object '{}' from scene", name);
        Some(self.objects.remove(index))
    }

    /// Gets a mutable reference to an object by name.
    pub fn get_object_mut(&mut self, name: &str) -> Option<&mut SceneObject<R>> {
        self.objects.iter_mut().find(|obj| obj.name == name)
    }

    /// Gets an immutable reference to an object by name.
    pub fn get_object(&self, name: &str) -> Option<&SceneObject<R>> {
        self.objects.iter().find(|obj| obj.name == name)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneObject<R>> {
        self.objects.iter()
    }

    /// Model matrix of every object, in insertion order.
    pub fn model_matrices(&self) -> impl Iterator<Item = (&str, Mat4)> + '_ {
        self.objects
            .iter()
            .map(|obj| (obj.name.as_str(), obj.model_matrix()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::EulerAngles;
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_object(SceneObject::new("cube", Object::identity()));
        scene.add_object(SceneObject::new(
            "floor",
            Object::identity()
                .position(Vec3::new(0.0, -1.0, 0.0))
                .scale(Vec3::new(10.0, 0.1, 10.0)),
        ));
        scene
    }

    #[test]
    fn lookup_by_name() {
        let scene = sample_scene();
        assert_eq!(scene.len(), 2);
        assert!(scene.get_object("floor").is_some());
        assert!(scene.get_object("ceiling").is_none());
    }

    #[test]
    fn mutation_through_lookup_changes_matrix() {
        let mut scene = sample_scene();
        let cube = scene.get_object_mut("cube").unwrap();
        cube.object.translate(Vec3::new(0.0, 2.0, 0.0));

        let cube = scene.get_object("cube").unwrap();
        assert_eq!(
            cube.model_matrix(),
            Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0))
        );
    }

    #[test]
    fn model_matrices_follow_insertion_order() {
        let scene = sample_scene();
        let matrices: Vec<_> = scene.model_matrices().collect();
        assert_eq!(matrices.len(), 2);
        assert_eq!(matrices[0], ("cube", Mat4::IDENTITY));
        assert_eq!(matrices[1].0, "floor");
        assert_relative_eq!(
            matrices[1].1,
            Mat4::from_scale(Vec3::new(10.0, 0.1, 10.0))
                * Mat4::from_translation(Vec3::new(0.0, -1.0, 0.0))
        );
    }

    #[test]
    fn duplicate_names_resolve_to_first() {
        let mut scene = sample_scene();
        scene.add_object(SceneObject::new(
            "cube",
            Object::identity().uniform_scale(3.0),
        ));

        assert_eq!(scene.get_object("cube").unwrap().object.scale, Vec3::ONE);

        let removed = scene.remove_object("cube").unwrap();
        assert_eq!(removed.object.scale, Vec3::ONE);
        assert_eq!(
            scene.get_object("cube").unwrap().object.scale,
            Vec3::splat(3.0)
        );
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn removing_missing_object_is_none() {
        let mut scene: Scene<EulerAngles> = Scene::new();
        assert!(scene.is_empty());
        assert!(scene.remove_object("nothing").is_none());
    }
}
