use glam::Vec3;

use crate::{material::MaterialId, ray::Ray};

use super::{Hit, HitRecord, Hittable};

/// Below this the ray is considered parallel to the triangle plane; hits
/// closer than this are discarded to avoid self-intersection acne.
const EPSILON: f32 = 1e-8;

/// A single triangle, tested with Möller-Trumbore.
///
/// The normal is the plane normal of the winding `v0 -> v1 -> v2`, constant
/// over the triangle. Barycentric boundaries are inclusive: a ray through an
/// edge or a vertex counts as a hit.
pub struct Triangle {
    pub vertices: [Vec3; 3],
    pub material: MaterialId,
}

impl Triangle {
    /// Anchor point of the triangle, not used by the intersection test.
    pub fn centroid(&self) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        (v0 + v1 + v2) / 3.0
    }
}

impl Hittable for Triangle {
    fn hit(&self, ray: Ray) -> Hit {
        let [v0, v1, v2] = self.vertices;
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        let h = ray.direction.cross(edge2);
        let a = edge1.dot(h);
        if a.abs() < EPSILON {
            // parallel to the triangle plane
            return Hit::NoHit;
        }

        let f = 1.0 / a;
        let s = ray.origin - v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return Hit::NoHit;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return Hit::NoHit;
        }

        let t = f * edge2.dot(q);
        if t <= EPSILON || !ray.range().contains(&t) {
            return Hit::NoHit;
        }

        Hit::Hit(HitRecord {
            point: ray.at(t),
            normal: edge1.cross(edge2).normalize(),
            t,
            uv: None,
            material: self.material,
        })
    }
}
