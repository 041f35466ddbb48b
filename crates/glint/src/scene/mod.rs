pub mod examples;

use crate::{
    aggregate::ShapeList,
    light::Light,
    material::{MaterialDescriptor, MaterialId},
    shape::Primitive,
};

#[derive(Default)]
pub struct Scene {
    pub objects: ShapeList,
    pub materials: Vec<MaterialDescriptor>,
    pub lights: Vec<Light>,
}

impl Scene {
    /// Insert an object in the scene
    pub fn insert_object<T: Into<Primitive>>(&mut self, object: T) {
        self.objects.0.push(object.into())
    }

    /// Insert a light in the scene
    pub fn insert_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Insert a material and returns the Material ID associated with this material
    pub fn insert_material(&mut self, material: MaterialDescriptor) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }
}
