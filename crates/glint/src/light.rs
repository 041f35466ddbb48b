use crate::{color::Color, math::vec::Vec3};

pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

pub struct DirectionalLight {
    /// Direction the light travels, not towards the light.
    pub direction: Vec3,
    pub color: Color,
    pub intensity: f32,
}

pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
}

pub enum Light {
    Ambient(AmbientLight),
    Directional(DirectionalLight),
    Point(PointLight),
}
