use std::f32::INFINITY;

use glam::Vec3;

use crate::{
    light::Light,
    math::utils::sphere_uv_from_direction,
    math::vec::{RefrReflVecExt, RgbAsVec3Ext, Vec3AsRgbExt},
    ray::Ray,
    renderer::{RayResult, Renderer},
    shape::{Hit, HitRecord, Hittable},
};

use super::Integrator;

/// Start offset of secondary and shadow rays, keeps them from re-hitting the
/// surface they originate from.
const RAY_OFFSET: f32 = 0.01;

/// Recursive ambient + diffuse + specular shading with reflection and
/// refraction rays, capped at `max_depth` bounces.
pub struct WhittedIntegrator {
    pub max_depth: u32,
}

impl WhittedIntegrator {
    fn occluded(&self, renderer: &Renderer, origin: Vec3, direction: Vec3, max_t: f32) -> bool {
        let shadow_ray = Ray::new_with_range(origin, direction, RAY_OFFSET..max_t);
        renderer.objects.hit(shadow_ray).is_hit()
    }

    /// Accumulated diffuse and specular contributions of every scene light.
    fn direct_lighting(
        &self,
        renderer: &Renderer,
        ray: Ray,
        record: &HitRecord,
        albedo: Option<Vec3>,
        highlight: Option<(f32, f32)>,
    ) -> Vec3 {
        let mut acc = Vec3::ZERO;

        for light in renderer.lights.iter() {
            // Surface-to-light direction, light tint scaled by intensity, and
            // the shadow-ray extent towards that light
            let (light_dir, tint, max_t) = match light {
                Light::Ambient(ambient) => {
                    if let Some(albedo) = albedo {
                        acc += ambient.intensity * ambient.color.vec() * albedo;
                    }
                    continue;
                }
                Light::Directional(directional) => (
                    -directional.direction.normalize(),
                    directional.intensity * directional.color.vec(),
                    INFINITY,
                ),
                Light::Point(point) => {
                    let to_light = point.position - record.point;
                    let distance = to_light.length();
                    (
                        to_light / distance,
                        point.intensity / (distance * distance) * point.color.vec(),
                        distance,
                    )
                }
            };

            if self.occluded(renderer, record.point, light_dir, max_t) {
                continue;
            }

            if let Some(albedo) = albedo {
                let lambert = record.normal.dot(light_dir).clamp(0.0, 1.0);
                acc += lambert * tint * albedo;
            }

            if let Some((exponent, ks)) = highlight {
                let reflected = (-light_dir).reflect(record.normal);
                let omega = reflected.dot(-ray.direction).max(0.0);
                acc += ks * omega.powf(exponent) * tint;
            }
        }

        acc
    }

    fn sky_ray(&self, renderer: &Renderer, ray: Ray) -> RayResult {
        let material = &renderer.materials[renderer.options.world_material.0].material;
        let uv = sphere_uv_from_direction(-ray.direction);
        let color = material
            .emissive(Some(uv))
            .map(|c| c.vec())
            .unwrap_or(Vec3::ZERO);

        RayResult {
            color: color.rgb(),
            samples_accumulated: 1,
            ..Default::default()
        }
    }
}

impl Integrator for WhittedIntegrator {
    fn ray_cast(&self, renderer: &Renderer, ray: Ray, depth: u32) -> RayResult {
        if depth == self.max_depth {
            return RayResult::default();
        }

        let mut ray_depth = (depth + 1) as f32;

        let Hit::Hit(record) = renderer.objects.hit(ray) else {
            return self.sky_ray(renderer, ray);
        };

        let material = &renderer.materials[record.material.0].material;

        let emitted = material
            .emissive(record.uv)
            .map(|c| c.vec())
            .unwrap_or(Vec3::ZERO);

        let albedo = material.diffuse(record.uv).map(|c| c.vec());
        let direct =
            self.direct_lighting(renderer, ray, &record, albedo, material.specular());

        let transmission = 'transmission: {
            let Some((ior, tint)) = material.transmission() else {
                break 'transmission Vec3::ZERO;
            };
            // refract reads the entering/exiting sides off the sign of
            // direction . normal, so the outward normal goes in as-is
            let Some(refracted) = ray.direction.refract(record.normal, ior) else {
                break 'transmission Vec3::ZERO;
            };

            let refracted_ray = Ray::new_with_range(record.point, refracted, RAY_OFFSET..INFINITY);
            let refracted_result = self.ray_cast(renderer, refracted_ray, depth + 1);
            ray_depth = ray_depth.max(refracted_result.ray_depth);

            tint.vec() * refracted_result.color.vec()
        };

        let reflection = 'reflection: {
            let Some(tint) = material.reflection() else {
                break 'reflection Vec3::ZERO;
            };
            let reflected = ray.direction.reflect(record.normal);

            let reflected_ray = Ray::new_with_range(record.point, reflected, RAY_OFFSET..INFINITY);
            let reflected_result = self.ray_cast(renderer, reflected_ray, depth + 1);
            ray_depth = ray_depth.max(reflected_result.ray_depth);

            tint.vec() * reflected_result.color.vec()
        };

        RayResult {
            normal: record.normal,
            color: (emitted + direct + transmission + reflection).rgb(),
            z: record.t,
            ray_depth,
            samples_accumulated: 1,
        }
    }
}
