use glint::renderer::{DefaultRenderer, RenderResult, Renderer};
use glint::scene::Scene;
use image::{ImageBuffer, Luma, Rgb, Rgb32FImage};
use itertools::Itertools;
use rayon::prelude::*;

use crate::progress::Progress;

/// A rectangular block of rendered pixels, anchored at its top-left corner.
/// `pixels` is stored row-major, `width` pixels per row.
struct Tile {
    x: u32,
    y: u32,
    width: u32,
    pixels: Vec<RenderResult>,
}

pub struct OutputBuffers {
    pub color: Rgb32FImage,
    pub normal: Rgb32FImage,
    pub depth: ImageBuffer<Luma<f32>, Vec<f32>>,
    pub ray_depth: ImageBuffer<Luma<f32>, Vec<f32>>,
}

impl OutputBuffers {
    fn new(width: u32, height: u32) -> Self {
        Self {
            color: ImageBuffer::new(width, height),
            normal: ImageBuffer::new(width, height),
            depth: ImageBuffer::new(width, height),
            ray_depth: ImageBuffer::new(width, height),
        }
    }

    fn blit(&mut self, tile: &Tile) {
        for (offset, result) in tile.pixels.iter().enumerate() {
            let x = tile.x + offset as u32 % tile.width;
            let y = tile.y + offset as u32 / tile.width;

            *self.color.get_pixel_mut(x, y) = Rgb(result.color);
            *self.normal.get_pixel_mut(x, y) = Rgb(result.normal);
            *self.depth.get_pixel_mut(x, y) = Luma([result.z]);
            *self.ray_depth.get_pixel_mut(x, y) = Luma([result.ray_depth]);
        }
    }
}

pub struct TileRenderer {
    pub height: u32,
    pub width: u32,
    pub spp: u32,
    pub tile_size: u32,
    pub max_depth: u32,
    pub scene: Scene,
}

impl TileRenderer {
    /// Renders the scene tile by tile across the rayon pool, then assembles
    /// the finished tiles into full-image channel buffers.
    pub fn run(self) -> OutputBuffers {
        let Self {
            height,
            width,
            spp,
            tile_size,
            max_depth,
            scene,
        } = self;

        let renderer: Renderer = DefaultRenderer {
            width,
            height,
            spp,
            max_depth,
            scene,
        }
        .into();

        let tile_count_x = (width + tile_size - 1) / tile_size;
        let tile_count_y = (height + tile_size - 1) / tile_size;
        let progress = Progress::new((tile_count_x * tile_count_y) as usize);

        log::info!("Generating image...");
        let tiles: Vec<Tile> = (0..tile_count_x)
            .cartesian_product(0..tile_count_y)
            .collect_vec()
            .into_par_iter()
            .map(|(tile_x, tile_y)| {
                let tile = render_tile(&renderer, tile_size, tile_x, tile_y);
                log::debug!("Tile {tile_x} {tile_y} done !");
                progress.inc();
                progress.print();
                tile
            })
            .collect();

        let mut output_buffers = OutputBuffers::new(width, height);
        for tile in &tiles {
            output_buffers.blit(tile);
        }

        log::info!("Image fully generated");
        output_buffers
    }
}

/// Renders one tile, clipped to the image edges.
fn render_tile(renderer: &Renderer, tile_size: u32, tile_x: u32, tile_y: u32) -> Tile {
    let width = renderer.camera.width;
    let height = renderer.camera.height;

    let x0 = tile_x * tile_size;
    let y0 = tile_y * tile_size;
    let x1 = (x0 + tile_size).min(width);
    let y1 = (y0 + tile_size).min(height);

    let mut pixels = Vec::with_capacity(((x1 - x0) * (y1 - y0)) as usize);
    for y in y0..y1 {
        for x in x0..x1 {
            // pixels in the image crate run left to right, top to bottom
            let vx = 2. * (x as f32 / (width - 1) as f32) - 1.;
            let vy = 1. - 2. * (y as f32 / (height - 1) as f32);
            pixels.push(renderer.process_pixel(vx, vy));
        }
    }

    Tile {
        x: x0,
        y: y0,
        width: x1 - x0,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blit_anchors_the_tile_in_the_image() {
        let mut buffers = OutputBuffers::new(4, 3);
        let pixels = (0..4)
            .map(|i| RenderResult {
                color: [0.0; 3],
                normal: [0.0; 3],
                z: i as f32,
                ray_depth: 0.0,
            })
            .collect();
        let tile = Tile {
            x: 2,
            y: 1,
            width: 2,
            pixels,
        };

        buffers.blit(&tile);

        assert_eq!(buffers.depth.get_pixel(2, 1).0, [0.0]);
        assert_eq!(buffers.depth.get_pixel(3, 1).0, [1.0]);
        assert_eq!(buffers.depth.get_pixel(2, 2).0, [2.0]);
        assert_eq!(buffers.depth.get_pixel(3, 2).0, [3.0]);
    }

    #[test]
    fn tiles_cover_the_whole_image() {
        // Dimensions chosen so the rightmost and bottom tiles are partial
        let renderer = TileRenderer {
            width: 5,
            height: 3,
            spp: 1,
            tile_size: 2,
            max_depth: 2,
            scene: Scene::default(),
        };

        let buffers = renderer.run();
        assert_eq!(buffers.color.dimensions(), (5, 3));

        // An empty scene renders the uniform sky everywhere, so a stray
        // unwritten pixel would stand out as black
        let sky = *buffers.color.get_pixel(0, 0);
        assert!(sky.0[0] > 0.0);
        assert!(buffers.color.pixels().all(|pixel| *pixel == sky));
    }
}
