use crate::{
    ray::Ray,
    shape::{Hit, Hittable, Primitive},
};

/// Ordered list of primitives, scanned linearly for the nearest hit.
///
/// No acceleration structure on purpose: scenes stay small and every shape
/// test is cheap.
#[derive(Default)]
pub struct ShapeList(pub Vec<Primitive>);

impl Hittable for ShapeList {
    fn hit(&self, mut ray: Ray) -> Hit {
        let mut res = Hit::NoHit;

        for primitive in self.0.iter() {
            if ray.range().is_empty() {
                break;
            }

            crate::counter!("intersection tests");
            if let Hit::Hit(record) = primitive.hit(ray) {
                // Narrow the scan to the best hit so far
                ray.bounds.1 = record.t;
                res = Hit::Hit(record);
            }
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::{material::MaterialId, shape::Sphere};

    #[test]
    fn nearest_of_overlapping_shapes_wins() {
        let list = ShapeList(vec![
            Sphere {
                center: Vec3::new(0.0, 0.0, -10.0),
                radius: 1.0,
                material: MaterialId(0),
            }
            .into(),
            Sphere {
                center: Vec3::new(0.0, 0.0, -4.0),
                radius: 1.0,
                material: MaterialId(1),
            }
            .into(),
            Sphere {
                center: Vec3::new(0.0, 0.0, -7.0),
                radius: 1.0,
                material: MaterialId(2),
            }
            .into(),
        ]);

        let record = list.hit(Ray::new(Vec3::ZERO, Vec3::NEG_Z)).record().unwrap();
        assert_eq!(record.material, MaterialId(1));
        assert!((record.t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn empty_list_never_hits() {
        let list = ShapeList::default();
        assert_eq!(list.hit(Ray::new(Vec3::ZERO, Vec3::NEG_Z)), Hit::NoHit);
    }

    #[test]
    fn bounded_ray_ignores_shapes_past_its_range() {
        let list = ShapeList(vec![Sphere {
            center: Vec3::new(0.0, 0.0, -10.0),
            radius: 1.0,
            material: MaterialId(0),
        }
        .into()]);

        let short_ray = Ray::new_with_range(Vec3::ZERO, Vec3::NEG_Z, 0.0..5.0);
        assert_eq!(list.hit(short_ray), Hit::NoHit);
    }
}
