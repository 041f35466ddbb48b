use std::ops::Add;

use bytemuck::{Pod, Zeroable};
use rand::distributions::{self, Distribution};

use crate::{
    aggregate::ShapeList,
    camera::Camera,
    color::{self, Color},
    integrators::{Integrator, WhittedIntegrator},
    light::Light,
    material::{texture::Uniform, Emit, MaterialDescriptor, MaterialId},
    math::vec::{RgbAsVec3Ext, Vec3, Vec3AsRgbExt},
    scene::Scene,
};

pub struct RendererOptions {
    pub samples_per_pixel: u32,
    pub world_material: MaterialId,
}

pub struct Renderer {
    pub camera: Camera,
    pub objects: ShapeList,
    pub lights: Vec<Light>,
    pub materials: Vec<MaterialDescriptor>,
    pub options: RendererOptions,
    pub integrator: Box<dyn Integrator>,
}

/// One integrator evaluation, accumulable across samples.
pub struct RayResult {
    pub normal: Vec3,
    pub color: Color,
    pub z: f32,
    pub ray_depth: f32,
    pub samples_accumulated: u32,
}

impl RayResult {
    pub fn resample(self) -> Self {
        // Every cast may come back empty (depth cap at zero); averaging
        // nothing must not divide by zero
        if self.samples_accumulated == 0 {
            return self;
        }

        let inv_samples = 1.0 / self.samples_accumulated as f32;
        Self {
            normal: inv_samples * self.normal,
            color: (inv_samples * self.color.vec()).rgb(),
            z: inv_samples * self.z,
            ray_depth: inv_samples * self.ray_depth,
            samples_accumulated: 1,
        }
    }
}

impl Default for RayResult {
    fn default() -> Self {
        Self {
            normal: Vec3::ZERO,
            color: color::BLACK,
            z: 0.0,
            ray_depth: 0.0,
            samples_accumulated: 0,
        }
    }
}

impl Add for RayResult {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            normal: self.normal + rhs.normal,
            color: (self.color.vec() + rhs.color.vec()).rgb(),
            z: self.z + rhs.z,
            ray_depth: self.ray_depth + rhs.ray_depth,
            samples_accumulated: self.samples_accumulated + rhs.samples_accumulated,
        }
    }
}

/// Flat per-pixel output, ready to be written into image buffers.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct RenderResult {
    pub color: [f32; 3],
    pub normal: [f32; 3],
    pub z: f32,
    pub ray_depth: f32,
}

impl Renderer {
    /// Renders one pixel at viewport coordinates `(vx, vy)`, averaging
    /// `samples_per_pixel` jittered rays.
    pub fn process_pixel(&self, vx: f32, vy: f32) -> RenderResult {
        let pixel_width = 1. / (self.camera.width as f32 - 1.);
        let pixel_height = 1. / (self.camera.height as f32 - 1.);
        let distribution_x = distributions::Uniform::new(-pixel_width / 2., pixel_width / 2.);
        let distribution_y = distributions::Uniform::new(-pixel_height / 2., pixel_height / 2.);

        let mut rng = rand::thread_rng();
        let ray_result = (0..self.options.samples_per_pixel)
            .map(|_| {
                let dvx = distribution_x.sample(&mut rng);
                let dvy = distribution_y.sample(&mut rng);
                let camera_ray = self.camera.ray(vx + dvx, vy + dvy, &mut rng);
                self.integrator.ray_cast(self, camera_ray, 0)
            })
            .fold(RayResult::default(), RayResult::add)
            .resample();

        RenderResult {
            color: color::clamp(ray_result.color).0,
            normal: ray_result.normal.to_array(),
            z: ray_result.z,
            ray_depth: ray_result.ray_depth,
        }
    }
}

/// Builds a [Renderer] with the default camera and sky from a scene.
pub struct DefaultRenderer {
    pub width: u32,
    pub height: u32,
    pub spp: u32,
    pub max_depth: u32,
    pub scene: Scene,
}

impl From<DefaultRenderer> for Renderer {
    fn from(this: DefaultRenderer) -> Self {
        let camera = Camera::new(
            this.width,
            this.height,
            f32::to_radians(90.),
            1.0,
            Vec3::ZERO,
            crate::math::quaternion::Quat::IDENTITY,
            0.0,
        );

        let mut scene = this.scene;

        let world_material = scene.insert_material(MaterialDescriptor {
            label: Some("Sky".to_owned()),
            material: Box::new(Emit {
                texture: Box::new(Uniform(color::gray(0.3))),
            }),
        });

        Renderer {
            camera,
            objects: scene.objects,
            lights: scene.lights,
            materials: scene.materials,
            options: RendererOptions {
                samples_per_pixel: this.spp,
                world_material,
            },
            integrator: Box::new(WhittedIntegrator {
                max_depth: this.max_depth,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RayResult;

    #[test]
    fn resampling_zero_samples_stays_finite() {
        let result = RayResult::default().resample();
        assert_eq!(result.samples_accumulated, 0);
        assert!(result.color.0.iter().all(|c| c.is_finite()));
        assert!(result.z.is_finite());
        assert!(result.ray_depth.is_finite());
        assert!(result.normal.is_finite());
    }
}
