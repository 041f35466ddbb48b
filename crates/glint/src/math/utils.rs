use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

use crate::material::texture::Uv;

use super::vec::Vec3;

/// Uniform sampling of the unit disk, used for camera aperture offsets.
pub struct UnitBall2;

impl Distribution<[f32; 2]> for UnitBall2 {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f32; 2] {
        let uniform = Uniform::new(0., 1.);
        let phi = std::f32::consts::TAU * uniform.sample(rng);
        let x: f32 = uniform.sample(rng);
        let r = x.sqrt();
        let (s, c) = f32::sin_cos(phi);
        [r * c, r * s]
    }
}

/// Equirectangular mapping of a unit direction.
pub fn sphere_uv_from_direction(direction: Vec3) -> Uv {
    let u = 0.5 + f32::atan2(direction.z, direction.x) / std::f32::consts::TAU;
    let v = f32::acos(direction.y.clamp(-1.0, 1.0)) / std::f32::consts::PI;

    [u, v]
}
