use glam::Vec3;
use image::Rgb;

use crate::{
    color,
    light::{AmbientLight, DirectionalLight, Light},
    material::{texture::Uniform, MaterialDescriptor, Opaque, Reflective},
    scene::Scene,
    shape::{Plane, Sphere},
};

/// A few spheres over a plane, handy for quick sanity renders.
pub struct SpheresScene;

impl From<SpheresScene> for Scene {
    fn from(_: SpheresScene) -> Self {
        let mut scene = Scene::default();

        let matte = scene.insert_material(MaterialDescriptor {
            label: Some("Matte red".to_string()),
            material: Box::new(Opaque {
                texture: Box::new(Uniform(Rgb([0.9, 0.2, 0.2]))),
                specular: 16.0,
                ks: 0.05,
            }),
        });
        let mirror = scene.insert_material(MaterialDescriptor {
            label: Some("Mirror".to_string()),
            material: Box::new(Reflective {
                tint: color::gray(0.85),
                specular: 128.0,
                ks: 0.2,
            }),
        });
        let ground = scene.insert_material(MaterialDescriptor {
            label: Some("Ground".to_string()),
            material: Box::new(Opaque {
                texture: Box::new(Uniform(color::gray(0.5))),
                specular: 8.0,
                ks: 0.01,
            }),
        });

        scene.insert_object(Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, ground));
        scene.insert_object(Sphere {
            center: Vec3::new(-1.1, 0.0, -4.0),
            radius: 1.0,
            material: matte,
        });
        scene.insert_object(Sphere {
            center: Vec3::new(1.1, 0.0, -4.5),
            radius: 1.0,
            material: mirror,
        });

        scene.insert_light(Light::Ambient(AmbientLight {
            color: color::WHITE,
            intensity: 0.3,
        }));
        scene.insert_light(Light::Directional(DirectionalLight {
            direction: Vec3::new(-0.4, -1.0, -0.2),
            color: color::WHITE,
            intensity: 0.8,
        }));

        scene
    }
}
