pub mod texture;

use crate::color::Color;

use texture::{Texture, Uv};

/// What the shading stage may ask of a material. Every facet defaults to
/// "absent"; a material opts into the ones it has.
pub trait Material: Sync + Send {
    /// Light emitted regardless of illumination.
    fn emissive(&self, _uv: Option<Uv>) -> Option<Color> {
        None
    }

    /// Diffuse albedo at the given surface coordinates.
    fn diffuse(&self, _uv: Option<Uv>) -> Option<Color> {
        None
    }

    /// Phong exponent and strength of the specular highlight.
    fn specular(&self) -> Option<(f32, f32)> {
        None
    }

    /// Tint applied to the contribution of the reflected ray.
    fn reflection(&self) -> Option<Color> {
        None
    }

    /// Index of refraction and tint for the refracted ray contribution.
    fn transmission(&self) -> Option<(f32, Color)> {
        None
    }
}

/// Plain diffuse surface with a Phong highlight.
pub struct Opaque {
    pub texture: Box<dyn Texture>,
    pub specular: f32,
    pub ks: f32,
}

impl Material for Opaque {
    fn diffuse(&self, uv: Option<Uv>) -> Option<Color> {
        Some(self.texture.color(uv.unwrap_or([0.0, 0.0])))
    }

    fn specular(&self) -> Option<(f32, f32)> {
        Some((self.specular, self.ks))
    }
}

/// Mirror-like surface: spawns a reflection ray tinted by `tint`.
pub struct Reflective {
    pub tint: Color,
    pub specular: f32,
    pub ks: f32,
}

impl Material for Reflective {
    fn reflection(&self) -> Option<Color> {
        Some(self.tint)
    }

    fn specular(&self) -> Option<(f32, f32)> {
        Some((self.specular, self.ks))
    }
}

/// Refracting surface: spawns a refraction ray through the given index.
pub struct Transparent {
    pub ior: f32,
    pub tint: Color,
    pub specular: f32,
    pub ks: f32,
}

impl Material for Transparent {
    fn transmission(&self) -> Option<(f32, Color)> {
        Some((self.ior, self.tint))
    }

    fn specular(&self) -> Option<(f32, f32)> {
        Some((self.specular, self.ks))
    }
}

/// Pure emitter; also used for the sky.
pub struct Emit {
    pub texture: Box<dyn Texture>,
}

impl Material for Emit {
    fn emissive(&self, uv: Option<Uv>) -> Option<Color> {
        Some(self.texture.color(uv.unwrap_or([0.0, 0.0])))
    }
}

pub struct MaterialDescriptor {
    pub label: Option<String>,
    pub material: Box<dyn Material>,
}

impl std::fmt::Debug for MaterialDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaterialDescriptor")
            .field("label", &self.label)
            .field("material", &"<material>")
            .finish()
    }
}

/// Opaque handle into scene-owned material storage. Hit records carry this
/// instead of a pointer back into the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialId(pub usize);
