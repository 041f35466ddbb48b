use glam::Vec3;

use crate::{material::MaterialId, ray::Ray};

use super::{Hit, HitRecord, Hittable, Plane};

/// Padding added to the bounds test so face-boundary hits survive float
/// rounding.
const BOUNDS_BIAS: f32 = 1e-3;

/// An axis-aligned box, tested as six outward-facing face planes clipped by
/// padded bounds.
///
/// The face planes and the padded bounds are computed once at construction
/// and never change afterwards.
pub struct Aabb {
    pub position: Vec3,
    pub size: Vec3,
    pub material: MaterialId,
    planes: [Plane; 6],
    bounds_min: Vec3,
    bounds_max: Vec3,
}

impl Aabb {
    pub fn new(position: Vec3, size: Vec3, material: MaterialId) -> Self {
        let half = size / 2.0;

        let planes = [
            Plane::new(position - half.x * Vec3::X, Vec3::NEG_X, material),
            Plane::new(position + half.x * Vec3::X, Vec3::X, material),
            Plane::new(position - half.y * Vec3::Y, Vec3::NEG_Y, material),
            Plane::new(position + half.y * Vec3::Y, Vec3::Y, material),
            Plane::new(position - half.z * Vec3::Z, Vec3::NEG_Z, material),
            Plane::new(position + half.z * Vec3::Z, Vec3::Z, material),
        ];

        Self {
            position,
            size,
            material,
            planes,
            bounds_min: position - half - Vec3::splat(BOUNDS_BIAS),
            bounds_max: position + half + Vec3::splat(BOUNDS_BIAS),
        }
    }

    fn contains(&self, p: Vec3) -> bool {
        self.bounds_min.x <= p.x
            && p.x <= self.bounds_max.x
            && self.bounds_min.y <= p.y
            && p.y <= self.bounds_max.y
            && self.bounds_min.z <= p.z
            && p.z <= self.bounds_max.z
    }

    /// Per-axis uv rule: the face's dominant normal component selects which
    /// two axes parameterize it, each normalized by the box extent.
    fn face_uv(&self, normal: Vec3, p: Vec3) -> [f32; 2] {
        if normal.x.abs() > 0.0 {
            [
                (p.y - self.bounds_min.y) / self.size.y,
                (p.z - self.bounds_min.z) / self.size.z,
            ]
        } else if normal.y.abs() > 0.0 {
            [
                (p.x - self.bounds_min.x) / self.size.x,
                (p.z - self.bounds_min.z) / self.size.z,
            ]
        } else {
            [
                (p.x - self.bounds_min.x) / self.size.x,
                (p.y - self.bounds_min.y) / self.size.y,
            ]
        }
    }
}

impl Hittable for Aabb {
    fn hit(&self, ray: Ray) -> Hit {
        let mut best: Option<HitRecord> = None;
        let mut best_t = f32::INFINITY;

        for plane in &self.planes {
            let Hit::Hit(record) = plane.hit(ray) else {
                continue;
            };
            if !self.contains(record.point) {
                continue;
            }
            if record.t < best_t {
                best_t = record.t;
                best = Some(HitRecord {
                    uv: Some(self.face_uv(plane.normal, record.point)),
                    material: self.material,
                    ..record
                });
            }
        }

        match best {
            Some(record) => Hit::Hit(record),
            None => Hit::NoHit,
        }
    }
}
