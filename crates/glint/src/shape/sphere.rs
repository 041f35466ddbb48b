use glam::Vec3;

use crate::{material::MaterialId, math::utils::sphere_uv_from_direction, ray::Ray};

use super::{Hit, HitRecord, Hittable};

/// A sphere described by its center and radius.
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: MaterialId,
}

impl Hittable for Sphere {
    fn hit(&self, ray: Ray) -> Hit {
        let l = self.center - ray.origin;
        // tca is the distance of closest approach along the ray,
        // d2 the squared distance from the center to the ray line
        let tca = l.dot(ray.direction);
        let d2 = l.length_squared() - tca * tca;
        if d2 > self.radius * self.radius {
            return Hit::NoHit;
        }

        let thc = f32::sqrt(self.radius * self.radius - d2);
        let t0 = tca - thc;
        let t1 = tca + thc;

        // Prefer the near root; when the origin is inside the sphere (or the
        // near root is behind the origin) fall back to the far one
        let t = if ray.range().contains(&t0) {
            t0
        } else if ray.range().contains(&t1) {
            t1
        } else {
            return Hit::NoHit;
        };

        let point = ray.at(t);
        let normal = (point - self.center).normalize();

        Hit::Hit(HitRecord {
            point,
            normal,
            t,
            uv: Some(sphere_uv_from_direction(normal)),
            material: self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Hit;

    fn sphere(center: Vec3, radius: f32) -> Sphere {
        Sphere {
            center,
            radius,
            material: MaterialId(0),
        }
    }

    #[test]
    fn ray_passing_beside_misses() {
        let s = sphere(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_Z);
        assert_eq!(s.hit(ray), Hit::NoHit);
    }

    #[test]
    fn origin_inside_hits_at_radius() {
        // The near root is negative, the far one is the exit point
        let s = sphere(Vec3::ZERO, 2.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.3, -0.7, 0.2));
        let record = s.hit(ray).record().unwrap();
        assert!((record.t - 2.5).abs() < 1e-5);
        // Outward normal at the exit point points away from the center
        assert!(record.normal.dot(ray.direction) > 0.0);
    }

    #[test]
    fn frontal_hit_distance_and_normal() {
        let s = sphere(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let record = s.hit(ray).record().unwrap();
        assert!((record.t - 4.0).abs() < 1e-5);
        assert!(record.normal.distance(Vec3::Z) < 1e-5);
        // Face center maps to the middle of the v range
        let [_, v] = record.uv.unwrap();
        assert!((v - 0.5).abs() < 1e-5);
    }

    #[test]
    fn both_roots_behind_the_origin_miss() {
        let s = sphere(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(s.hit(ray), Hit::NoHit);
    }

    #[test]
    fn identical_inputs_give_identical_records() {
        let s = sphere(Vec3::new(0.2, 1.3, -4.0), 0.75);
        let ray = Ray::new(Vec3::new(0.1, 0.9, 1.0), Vec3::new(0.05, 0.1, -1.0));
        assert_eq!(s.hit(ray), s.hit(ray));
    }
}
