pub mod whitted;

pub use whitted::WhittedIntegrator;

use crate::{
    ray::Ray,
    renderer::{RayResult, Renderer},
};

pub trait Integrator: Sync + Send {
    fn ray_cast(&self, renderer: &Renderer, ray: Ray, depth: u32) -> RayResult;
}
