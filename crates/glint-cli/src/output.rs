use std::path::PathBuf;

use anyhow::Result;
use image::{buffer::ConvertBuffer, ImageBuffer, Rgb};

use crate::tile_renderer::OutputBuffers;

/// Writes each rendered channel as a PNG under `outdir`.
pub struct FileOutput {
    pub outdir: PathBuf,
}

impl FileOutput {
    pub fn commit(&self, output_buffers: &OutputBuffers) -> Result<()> {
        let convert_rgb = ConvertBuffer::<ImageBuffer<Rgb<u8>, Vec<u8>>>::convert;
        let convert_luma = ConvertBuffer::<ImageBuffer<Rgb<u8>, Vec<u8>>>::convert;
        let path = self.outdir.as_path();
        std::fs::create_dir_all(path)?;

        log::info!("Saving images to {}...", path.display());
        convert_rgb(&output_buffers.color).save(path.join("color.png"))?;
        convert_rgb(&output_buffers.normal).save(path.join("normal.png"))?;
        convert_luma(&output_buffers.depth).save(path.join("depth.png"))?;
        convert_luma(&output_buffers.ray_depth).save(path.join("ray_depth.png"))?;

        Ok(())
    }
}
