use glam::{Mat3, Vec3};
use thiserror::Error;

use crate::{material::MaterialId, ray::Ray};

use super::{Hit, HitRecord, Hittable};

/// Added to each slab denominator so axis-parallel rays divide by a tiny
/// value instead of exactly zero.
const SLAB_EPSILON: f32 = 1e-8;

/// Determinants below this make the rotation non-invertible for our purposes.
const SINGULAR_EPSILON: f32 = 1e-8;

/// Construction-time shape configuration errors.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The rotation matrix cannot be inverted.
    #[error("rotation matrix is singular (determinant {0})")]
    SingularRotation(f32),
}

/// An oriented box: an axis-aligned box under an arbitrary rotation.
///
/// The inverse rotation is computed once at construction; a singular matrix
/// is rejected there, before any ray is cast.
pub struct Obb {
    pub position: Vec3,
    pub size: Vec3,
    pub material: MaterialId,
    rotation: Mat3,
    inverse_rotation: Mat3,
}

impl Obb {
    pub fn new(
        position: Vec3,
        size: Vec3,
        rotation: Mat3,
        material: MaterialId,
    ) -> Result<Self, ShapeError> {
        let determinant = rotation.determinant();
        if determinant.abs() < SINGULAR_EPSILON {
            return Err(ShapeError::SingularRotation(determinant));
        }

        Ok(Self {
            position,
            size,
            material,
            rotation,
            inverse_rotation: rotation.inverse(),
        })
    }
}

impl Hittable for Obb {
    fn hit(&self, ray: Ray) -> Hit {
        // Move the ray into the box's local frame, where the box is axis
        // aligned and centered on the origin
        let local_orig = self.inverse_rotation * (ray.origin - self.position);
        let local_dir = self.inverse_rotation * ray.direction;

        let half = self.size / 2.0;
        let bounds_min = -half;
        let bounds_max = half;

        // Classic slab test
        let denom = local_dir + Vec3::splat(SLAB_EPSILON);
        let t_low = (bounds_min - local_orig) / denom;
        let t_high = (bounds_max - local_orig) / denom;

        let t_near = Vec3::min(t_low, t_high).max_element();
        let t_far = Vec3::max(t_low, t_high).min_element();

        if t_near > t_far || t_far < 0.0 {
            return Hit::NoHit;
        }

        let t = if t_near > 0.0 { t_near } else { t_far };
        if !ray.range().contains(&t) {
            return Hit::NoHit;
        }

        let local_point = local_orig + t * local_dir;

        // The face is the axis where the local point sits deepest relative to
        // the half extents; its sign picks the face normal
        let rel = (local_point / half).abs();
        let axis = if rel.x >= rel.y && rel.x >= rel.z {
            0
        } else if rel.y >= rel.z {
            1
        } else {
            2
        };

        let (local_normal, uv) = match axis {
            0 => (
                if local_point.x > 0.0 { Vec3::X } else { Vec3::NEG_X },
                [
                    (local_point.y - bounds_min.y) / self.size.y,
                    (local_point.z - bounds_min.z) / self.size.z,
                ],
            ),
            1 => (
                if local_point.y > 0.0 { Vec3::Y } else { Vec3::NEG_Y },
                [
                    (local_point.x - bounds_min.x) / self.size.x,
                    (local_point.z - bounds_min.z) / self.size.z,
                ],
            ),
            _ => (
                if local_point.z > 0.0 { Vec3::Z } else { Vec3::NEG_Z },
                [
                    (local_point.x - bounds_min.x) / self.size.x,
                    (local_point.y - bounds_min.y) / self.size.y,
                ],
            ),
        };

        // Back into world space, re-anchored at the box position
        Hit::Hit(HitRecord {
            point: self.rotation * local_point + self.position,
            normal: self.rotation * local_normal,
            t,
            uv: Some(uv),
            material: self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Aabb, Hit};

    #[test]
    fn singular_rotation_is_rejected_at_construction() {
        let singular = Mat3::from_cols(Vec3::X, Vec3::X, Vec3::Z);
        let result = Obb::new(Vec3::ZERO, Vec3::ONE, singular, MaterialId(0));
        assert!(matches!(result, Err(ShapeError::SingularRotation(_))));
    }

    #[test]
    fn identity_rotation_matches_aabb_distance() {
        let position = Vec3::new(0.5, -0.25, -6.0);
        let size = Vec3::new(2.0, 1.0, 3.0);
        let obb = Obb::new(position, size, Mat3::IDENTITY, MaterialId(0)).unwrap();
        let aabb = Aabb::new(position, size, MaterialId(0));

        for origin in [Vec3::ZERO, Vec3::new(1.2, 0.4, 0.0), Vec3::new(-0.5, 0.0, 1.0)] {
            let ray = Ray::new(origin, position - origin);
            let obb_record = obb.hit(ray).record().unwrap();
            let aabb_record = aabb.hit(ray).record().unwrap();
            assert!(
                (obb_record.t - aabb_record.t).abs() < 1e-3,
                "obb t = {}, aabb t = {}",
                obb_record.t,
                aabb_record.t
            );
        }
    }

    #[test]
    fn rotated_box_is_hit_where_the_unrotated_one_is_not() {
        // A box rotated 45 degrees around Y sticks its corner out towards +X
        let rotation = Mat3::from_rotation_y(std::f32::consts::FRAC_PI_4);
        let obb = Obb::new(Vec3::new(0.0, 0.0, -4.0), Vec3::splat(2.0), rotation, MaterialId(0))
            .unwrap();

        let corner_ray = Ray::new(Vec3::new(1.2, 0.0, 0.0), Vec3::NEG_Z);
        assert!(obb.hit(corner_ray).is_hit());

        let aabb = Aabb::new(Vec3::new(0.0, 0.0, -4.0), Vec3::splat(2.0), MaterialId(0));
        assert_eq!(aabb.hit(corner_ray), Hit::NoHit);
    }

    #[test]
    fn axis_parallel_ray_does_not_produce_nan() {
        let obb = Obb::new(Vec3::new(0.0, 0.0, -4.0), Vec3::splat(2.0), Mat3::IDENTITY, MaterialId(0))
            .unwrap();
        // Direction has exact zeros on two axes
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::NEG_Z);
        let record = obb.hit(ray).record().unwrap();
        assert!(record.t.is_finite());
        assert!((record.t - 3.0).abs() < 1e-3);
    }
}
