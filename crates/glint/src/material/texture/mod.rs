use crate::color::Color;

pub type Uv = [f32; 2];

pub trait Texture: Sync + Send {
    fn color(&self, uv: Uv) -> Color;
}

pub struct Uniform(pub Color);

impl Texture for Uniform {
    fn color(&self, _: Uv) -> Color {
        self.0
    }
}

pub struct Checker {
    pub odd: Box<dyn Texture>,
    pub even: Box<dyn Texture>,
    pub frequency: f32,
}

impl Texture for Checker {
    fn color(&self, uv: Uv) -> Color {
        let w = std::f32::consts::TAU * self.frequency;
        let even = f32::cos(w * uv[0]) * f32::cos(w * uv[1]) > 0.0;
        let uv = [uv[0] / self.frequency, uv[1] / self.frequency];
        if even {
            self.even.color(uv)
        } else {
            self.odd.color(uv)
        }
    }
}
