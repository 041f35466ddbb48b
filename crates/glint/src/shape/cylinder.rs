use glam::Vec3;

use crate::{material::MaterialId, ray::Ray};

use super::{Hit, HitRecord, Hittable};

/// The open lateral surface of a finite cylinder: no end caps, vertical axis
/// through `position`, extending `height / 2` above and below it.
///
/// Since there are no caps the normal is purely radial; its vertical
/// component is zeroed before normalizing.
pub struct ThinCylinder {
    pub position: Vec3,
    pub height: f32,
    pub radius: f32,
    pub material: MaterialId,
}

impl Hittable for ThinCylinder {
    fn hit(&self, ray: Ray) -> Hit {
        let o = ray.origin - self.position;
        let d = ray.direction;

        // Quadratic in t against the infinite cylinder, x/z components only
        let a = d.x * d.x + d.z * d.z;
        let b = 2.0 * (o.x * d.x + o.z * d.z);
        let c = o.x * o.x + o.z * o.z - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Hit::NoHit;
        }

        let (mut t0, mut t1) = if a == 0.0 {
            // Ray parallel to the axis: the quadratic degenerates to a linear
            // equation, solvable only when b is nonzero
            if b == 0.0 {
                return Hit::NoHit;
            }
            (-c / b, -c / b)
        } else {
            let root = f32::sqrt(discriminant);
            let ta = (-b - root) / (2.0 * a);
            let tb = (-b + root) / (2.0 * a);
            if ta > tb {
                (tb, ta)
            } else {
                (ta, tb)
            }
        };

        let half = self.height / 2.0;
        let mut y0 = o.y + t0 * d.y;
        let mut y1 = o.y + t1 * d.y;

        // Clamp each root to the finite height, recomputing its distance
        if y0 < -half {
            y0 = -half;
            t0 = (y0 - o.y) / d.y;
        }
        if y1 > half {
            y1 = half;
            t1 = (y1 - o.y) / d.y;
        }

        if y0 > half || y1 < -half || t0 > t1 {
            return Hit::NoHit;
        }

        // The near root counts only if it actually cleared the floor
        let t = if y0 > -half { t0 } else { t1 };
        if !ray.range().contains(&t) {
            return Hit::NoHit;
        }

        let point = ray.at(t);
        let radial = point - self.position;
        let normal = Vec3::new(radial.x, 0.0, radial.z).normalize();

        Hit::Hit(HitRecord {
            point,
            normal,
            t,
            uv: None,
            material: self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Hit;

    fn cylinder(height: f32) -> ThinCylinder {
        ThinCylinder {
            position: Vec3::ZERO,
            height,
            radius: 1.0,
            material: MaterialId(0),
        }
    }

    #[test]
    fn axis_parallel_ray_beyond_the_radius_never_hits() {
        for height in [1.0, 100.0, 1e6] {
            let ray = Ray::new(Vec3::new(2.0, -50.0, 0.0), Vec3::Y);
            assert_eq!(cylinder(height).hit(ray), Hit::NoHit);
        }
    }

    #[test]
    fn perpendicular_ray_through_the_centerline() {
        let c = cylinder(1e6);
        // Fired from x = 2 towards the axis: the wall is one radius short
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_X);
        let record = c.hit(ray).record().unwrap();
        assert!((record.t - 1.0).abs() < 1e-5);
        assert!(record.normal.distance(Vec3::X) < 1e-5);

        // Same from the other side
        let ray = Ray::new(Vec3::new(-2.0, 0.0, 0.0), Vec3::X);
        let record = c.hit(ray).record().unwrap();
        assert!((record.t - 1.0).abs() < 1e-5);
        assert!(record.normal.distance(Vec3::NEG_X) < 1e-5);
    }

    #[test]
    fn ray_passing_over_the_top_misses() {
        let c = cylinder(2.0);
        let ray = Ray::new(Vec3::new(2.0, 1.5, 0.0), Vec3::NEG_X);
        assert_eq!(c.hit(ray), Hit::NoHit);
    }

    #[test]
    fn downward_ray_enters_through_the_wall() {
        let c = cylinder(2.0);
        // Enters above the cylinder and crosses the wall on its way down
        let ray = Ray::new(Vec3::new(2.0, 2.0, 0.0), Vec3::new(-1.0, -1.0, 0.0));
        let record = c.hit(ray).record().unwrap();
        assert!(record.point.y <= 1.0 + 1e-4);
        assert!((record.point.x.hypot(record.point.z) - 1.0).abs() < 1e-4);
        assert!((record.normal.y - 0.0).abs() < 1e-6);
    }

    #[test]
    fn uv_is_absent() {
        let record = cylinder(4.0)
            .hit(Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_X))
            .record()
            .unwrap();
        assert_eq!(record.uv, None);
    }
}
