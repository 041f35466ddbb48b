use glam::Vec3;

use crate::{material::MaterialId, ray::Ray};

use super::{Hit, HitRecord, Hittable};

/// Rays closer to parallel than this are treated as a miss; keeps the
/// division below well away from a blow-up.
const PARALLEL_EPSILON: f32 = 1e-4;

/// An infinite plane anchored at `origin`.
///
/// The normal is constant over the whole plane and there is no meaningful
/// surface parameterization, so hits carry no uv.
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material: MaterialId,
}

impl Plane {
    pub fn new(origin: Vec3, normal: Vec3, material: MaterialId) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
            material,
        }
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: Ray) -> Hit {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() <= PARALLEL_EPSILON {
            return Hit::NoHit;
        }

        let t = (self.origin - ray.origin).dot(self.normal) / denom;
        if !ray.range().contains(&t) {
            return Hit::NoHit;
        }

        Hit::Hit(HitRecord {
            point: ray.at(t),
            normal: self.normal,
            t,
            uv: None,
            material: self.material,
        })
    }
}

/// A [Plane] restricted to a circular region around its anchor.
pub struct Disk {
    plane: Plane,
    radius: f32,
}

impl Disk {
    pub fn new(origin: Vec3, normal: Vec3, radius: f32, material: MaterialId) -> Self {
        Self {
            plane: Plane::new(origin, normal, material),
            radius,
        }
    }
}

impl Hittable for Disk {
    fn hit(&self, ray: Ray) -> Hit {
        let Hit::Hit(record) = self.plane.hit(ray) else {
            return Hit::NoHit;
        };

        if (record.point - self.plane.origin).length() > self.radius {
            return Hit::NoHit;
        }

        Hit::Hit(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Hit;

    #[test]
    fn known_point_round_trip() {
        // Ray built to cross the plane at P after exactly 5 units
        let plane = Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, MaterialId(0));
        let p = Vec3::new(3.0, -1.0, -4.0);
        let origin = Vec3::new(3.0, 4.0, -4.0);
        let ray = Ray::new(origin, p - origin);

        let record = plane.hit(ray).record().unwrap();
        assert!((record.t - 5.0).abs() < 1e-5);
        assert!(record.point.distance(p) < 1e-4);
        assert_eq!(record.uv, None);
    }

    #[test]
    fn parallel_ray_misses() {
        let plane = Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, MaterialId(0));
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(plane.hit(ray), Hit::NoHit);
    }

    #[test]
    fn hit_behind_the_origin_misses() {
        let plane = Plane::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y, MaterialId(0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Y);
        assert_eq!(plane.hit(ray), Hit::NoHit);
    }

    #[test]
    fn disk_accepts_inside_and_rejects_outside() {
        let disk = Disk::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z, 1.0, MaterialId(0));

        let inside = Ray::new(Vec3::new(0.5, 0.0, 0.0), Vec3::NEG_Z);
        assert!(disk.hit(inside).is_hit());

        let outside = Ray::new(Vec3::new(1.5, 0.0, 0.0), Vec3::NEG_Z);
        assert_eq!(disk.hit(outside), Hit::NoHit);
    }
}
