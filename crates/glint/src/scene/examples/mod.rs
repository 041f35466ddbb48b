mod showcase;
mod spheres;

pub use showcase::ShowcaseScene;
pub use spheres::SpheresScene;
