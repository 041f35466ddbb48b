use rand::prelude::Distribution;

use crate::{
    math::{quaternion::Quat, utils::UnitBall2, vec::Vec3},
    ray::Ray,
};

/// Pinhole camera with an optional aperture.
///
/// Viewport coordinates run in [-1, 1] on both axes, +y up.
pub struct Camera {
    pub width: u32,
    pub height: u32,
    pub viewport_height: f32,
    pub viewport_width: f32,
    pub focal_length: f32,
    pub origin: Vec3,
    pub rotation: Quat,
    pub aperture: f32,
}

impl Camera {
    pub fn new(
        width: u32,
        height: u32,
        vfov: f32,
        focal_length: f32,
        origin: Vec3,
        rotation: Quat,
        aperture: f32,
    ) -> Self {
        let h = f32::tan(vfov / 2.);
        let aspect_ratio = width as f32 / height as f32;

        Self {
            width,
            height,
            viewport_height: focal_length * h,
            viewport_width: focal_length * h * aspect_ratio,
            focal_length,
            origin,
            rotation,
            aperture,
        }
    }

    pub fn ray(&self, vx: f32, vy: f32, rng: &mut rand::rngs::ThreadRng) -> Ray {
        let [dx, dy] = UnitBall2.sample(rng);
        let offset = self.aperture / 2.0 * Vec3::new(dx, dy, 0.0);

        let center = self.origin - self.focal_length * Vec3::Z;
        let direction = center - (self.origin + offset)
            + vx * self.viewport_width * Vec3::X
            + vy * self.viewport_height * Vec3::Y;

        Ray::new(
            self.origin + self.rotation.mul_vec3(offset),
            self.rotation.mul_vec3(direction),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_ray_goes_straight_ahead() {
        let camera = Camera::new(
            100,
            100,
            f32::to_radians(90.0),
            1.0,
            Vec3::ZERO,
            Quat::IDENTITY,
            0.0,
        );
        let ray = camera.ray(0.0, 0.0, &mut rand::thread_rng());
        assert!(ray.direction.distance(Vec3::NEG_Z) < 1e-6);
    }
}
