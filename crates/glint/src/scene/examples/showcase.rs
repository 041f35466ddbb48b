use glam::{Mat3, Vec3};
use image::Rgb;

use crate::{
    color,
    light::{AmbientLight, DirectionalLight, Light, PointLight},
    material::{
        texture::{Checker, Uniform},
        MaterialDescriptor, Opaque, Reflective, Transparent,
    },
    scene::Scene,
    shape::{Aabb, Disk, Ellipsoid, Obb, Plane, Sphere, ThinCylinder, Triangle},
};

/// One of everything: every shape variant under a few material kinds.
pub struct ShowcaseScene;

impl From<ShowcaseScene> for Scene {
    fn from(_: ShowcaseScene) -> Self {
        let mut scene = Scene::default();

        let checker = scene.insert_material(MaterialDescriptor {
            label: Some("Floor checker".to_string()),
            material: Box::new(Opaque {
                texture: Box::new(Checker {
                    odd: Box::new(Uniform(color::gray(0.2))),
                    even: Box::new(Uniform(color::gray(0.8))),
                    frequency: 10.0,
                }),
                specular: 8.0,
                ks: 0.01,
            }),
        });
        let clay = scene.insert_material(MaterialDescriptor {
            label: Some("Clay".to_string()),
            material: Box::new(Opaque {
                texture: Box::new(Uniform(Rgb([0.62, 0.49, 0.24]))),
                specular: 32.0,
                ks: 0.1,
            }),
        });
        let mirror = scene.insert_material(MaterialDescriptor {
            label: Some("Mirror".to_string()),
            material: Box::new(Reflective {
                tint: color::gray(0.9),
                specular: 64.0,
                ks: 0.2,
            }),
        });
        let glass = scene.insert_material(MaterialDescriptor {
            label: Some("Glass".to_string()),
            material: Box::new(Transparent {
                ior: 1.5,
                tint: Rgb([0.9, 0.9, 0.95]),
                specular: 64.0,
                ks: 0.15,
            }),
        });

        scene.insert_object(Plane::new(Vec3::new(0.0, -2.0, 0.0), Vec3::Y, checker));
        scene.insert_object(Disk::new(Vec3::new(0.0, 2.8, -5.0), Vec3::NEG_Y, 1.2, mirror));

        scene.insert_object(Sphere {
            center: Vec3::new(-1.8, -0.2, -5.0),
            radius: 0.8,
            material: clay,
        });
        scene.insert_object(Ellipsoid::new(
            Vec3::new(0.0, 0.2, -6.0),
            Vec3::new(1.2, 0.7, 0.9),
            glass,
        ));

        scene.insert_object(Aabb::new(
            Vec3::new(1.9, -1.3, -5.5),
            Vec3::new(1.2, 1.4, 1.2),
            clay,
        ));
        scene.insert_object(
            Obb::new(
                Vec3::new(-0.4, -1.5, -4.0),
                Vec3::splat(0.9),
                Mat3::from_rotation_y(f32::to_radians(30.0)),
                mirror,
            )
            .expect("rotation matrices are invertible"),
        );

        scene.insert_object(ThinCylinder {
            position: Vec3::new(2.6, 0.0, -7.0),
            height: 4.0,
            radius: 0.35,
            material: clay,
        });

        scene.insert_object(Triangle {
            vertices: [
                Vec3::new(-3.2, -2.0, -7.0),
                Vec3::new(-1.8, -2.0, -7.5),
                Vec3::new(-2.5, 0.5, -7.2),
            ],
            material: mirror,
        });

        scene.insert_light(Light::Ambient(AmbientLight {
            color: color::WHITE,
            intensity: 0.25,
        }));
        scene.insert_light(Light::Directional(DirectionalLight {
            direction: Vec3::new(0.0, -1.0, -0.3),
            color: color::WHITE,
            intensity: 0.9,
        }));
        scene.insert_light(Light::Point(PointLight {
            position: Vec3::new(0.0, 2.0, -3.0),
            color: Rgb([1.0, 0.9, 0.8]),
            intensity: 4.0,
        }));

        scene
    }
}
