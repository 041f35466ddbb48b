//! The shapes the tracer knows how to intersect:
//! - spheres and ellipsoids
//! - planes and disks
//! - boxes, axis aligned or rotated
//! - open finite cylinders
//! - single triangles
//!
//! Each shape answers a single question: does this ray hit me, and if so
//! where. Everything else (shading, scene ownership) lives elsewhere.
//!
//! The set is closed: every shape is a variant of [Primitive] and the scene
//! stores those. The per-shape types still implement [Hittable] themselves so
//! that composite shapes can delegate (a [Disk] runs its [Plane] test, an
//! [Ellipsoid] runs its unit [Sphere] test, an [Aabb] tests its six face
//! planes).

pub mod aabb;
pub mod cylinder;
pub mod ellipsoid;
pub mod obb;
pub mod plane;
pub mod sphere;
pub mod triangle;

pub use aabb::Aabb;
pub use cylinder::ThinCylinder;
pub use ellipsoid::Ellipsoid;
pub use obb::{Obb, ShapeError};
pub use plane::{Disk, Plane};
pub use sphere::Sphere;
pub use triangle::Triangle;

use crate::{
    material::{texture::Uv, MaterialId},
    math::vec::Vec3,
    ray::Ray,
};

/// Local surface information produced by a successful ray/shape test.
///
/// `uv` is `None` for shapes without a surface parameterization (infinite
/// planes, disks, open cylinders, plain triangles). `material` is an opaque
/// handle into scene-owned storage; this module never looks inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    pub point: Vec3,
    pub normal: Vec3,
    pub t: f32,
    pub uv: Option<Uv>,
    pub material: MaterialId,
}

/// Outcome of an intersection test. Misses are a distinct variant, never a
/// sentinel distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    Hit(HitRecord),
    NoHit,
}

impl Hit {
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    pub fn record(self) -> Option<HitRecord> {
        match self {
            Self::Hit(record) => Some(record),
            Self::NoHit => None,
        }
    }
}

/// The single capability every renderable thing exposes.
///
/// Implementations are pure: no shared state is touched, so tests may run
/// concurrently across shapes and across rays.
pub trait Hittable: Sync + Send {
    fn hit(&self, ray: Ray) -> Hit;
}

/// The closed set of shapes a scene can hold.
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    Disk(Disk),
    Aabb(Aabb),
    Obb(Obb),
    Ellipsoid(Ellipsoid),
    ThinCylinder(ThinCylinder),
    Triangle(Triangle),
}

impl Hittable for Primitive {
    fn hit(&self, ray: Ray) -> Hit {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray),
            Primitive::Plane(plane) => plane.hit(ray),
            Primitive::Disk(disk) => disk.hit(ray),
            Primitive::Aabb(aabb) => aabb.hit(ray),
            Primitive::Obb(obb) => obb.hit(ray),
            Primitive::Ellipsoid(ellipsoid) => ellipsoid.hit(ray),
            Primitive::ThinCylinder(cylinder) => cylinder.hit(ray),
            Primitive::Triangle(triangle) => triangle.hit(ray),
        }
    }
}

macro_rules! impl_from_shape {
    ($($shape:ident),+ $(,)?) => {$(
        impl From<$shape> for Primitive {
            fn from(shape: $shape) -> Self {
                Primitive::$shape(shape)
            }
        }
    )+};
}

impl_from_shape!(Sphere, Plane, Disk, Aabb, Obb, Ellipsoid, ThinCylinder, Triangle);
