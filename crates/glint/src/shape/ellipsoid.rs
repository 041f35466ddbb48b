use glam::Vec3;

use crate::{material::MaterialId, ray::Ray};

use super::{Hit, HitRecord, Hittable, Sphere};

/// An ellipsoid with semi-axis radii `(a, b, c)`: a unit sphere seen through
/// a non-uniform axis scaling.
///
/// The ray is squeezed into the scaled space, tested against the cached unit
/// sphere, and the hit is mapped back. Normals map back through the
/// element-wise reciprocal of the radii (the inverse-transpose of an axis
/// scaling) and are renormalized.
///
/// The returned `t` is the scaled-space parametric value, not a true
/// world-space length; for non-uniform radii this can misrank against other
/// shapes in the same scene. Kept as-is.
pub struct Ellipsoid {
    pub position: Vec3,
    pub radii: Vec3,
    unit_sphere: Sphere,
}

impl Ellipsoid {
    pub fn new(position: Vec3, radii: Vec3, material: MaterialId) -> Self {
        Self {
            position,
            radii,
            unit_sphere: Sphere {
                center: position / radii,
                radius: 1.0,
                material,
            },
        }
    }
}

impl Hittable for Ellipsoid {
    fn hit(&self, ray: Ray) -> Hit {
        let scaled_ray = Ray {
            origin: ray.origin / self.radii,
            direction: (ray.direction / self.radii).normalize(),
            bounds: ray.bounds,
        };

        let Hit::Hit(record) = self.unit_sphere.hit(scaled_ray) else {
            return Hit::NoHit;
        };

        Hit::Hit(HitRecord {
            point: record.point * self.radii,
            normal: (record.normal / self.radii).normalize(),
            ..record
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Hit;

    #[test]
    fn unit_radii_reproduce_the_sphere() {
        let position = Vec3::new(0.3, -0.8, -4.0);
        let ellipsoid = Ellipsoid::new(position, Vec3::ONE, MaterialId(0));
        let sphere = Sphere {
            center: position,
            radius: 1.0,
            material: MaterialId(0),
        };

        let ray = Ray::new(Vec3::new(0.0, 0.1, 1.0), position - Vec3::new(0.0, 0.1, 1.0));
        let e = ellipsoid.hit(ray).record().unwrap();
        let s = sphere.hit(ray).record().unwrap();

        assert!((e.t - s.t).abs() < 1e-5);
        assert!(e.point.distance(s.point) < 1e-5);
        assert!(e.normal.distance(s.normal) < 1e-5);
        assert_eq!(e.uv.is_some(), s.uv.is_some());
    }

    #[test]
    fn squashed_ellipsoid_misses_above_its_minor_axis() {
        // Radii (1, 0.25, 1): anything more than 0.25 above the center in y
        // passes over the surface
        let ellipsoid = Ellipsoid::new(Vec3::new(0.0, 0.0, -4.0), Vec3::new(1.0, 0.25, 1.0), MaterialId(0));

        let over = Ray::new(Vec3::new(0.0, 0.5, 0.0), Vec3::NEG_Z);
        assert_eq!(ellipsoid.hit(over), Hit::NoHit);

        let through = Ray::new(Vec3::new(0.0, 0.1, 0.0), Vec3::NEG_Z);
        assert!(ellipsoid.hit(through).is_hit());
    }

    #[test]
    fn mapped_back_point_lies_on_the_surface() {
        let position = Vec3::new(0.0, 1.0, -6.0);
        let radii = Vec3::new(2.0, 1.0, 0.5);
        let ellipsoid = Ellipsoid::new(position, radii, MaterialId(0));

        let ray = Ray::new(Vec3::ZERO, position - Vec3::ZERO);
        let record = ellipsoid.hit(ray).record().unwrap();

        // |(p - c) / radii| == 1 on an ellipsoid surface
        let local = (record.point - position) / radii;
        assert!((local.length() - 1.0).abs() < 1e-4);
    }
}
