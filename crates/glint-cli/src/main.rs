mod output;
mod progress;
mod tile_renderer;

use std::{fmt::Display, path::PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use glint::{
    scene::{
        examples::{ShowcaseScene, SpheresScene},
        Scene,
    },
    utils::{counter::report_counters, timer::timed_scope_log},
};
use output::FileOutput;
use tile_renderer::TileRenderer;

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    #[default]
    Showcase,
    Spheres,
}

impl From<AvailableScene> for Scene {
    fn from(scene: AvailableScene) -> Self {
        match scene {
            AvailableScene::Showcase => ShowcaseScene.into(),
            AvailableScene::Spheres => SpheresScene.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl std::str::FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((width, height)) = s.split_once('x') else {
            return Err(anyhow::anyhow!("expected dimensions as `width`x`height`"));
        };

        Ok(Dimensions {
            width: width.parse()?,
            height: height.parse()?,
        })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(long = "spp", default_value_t = 1)]
    /// Samples per pixels
    sample_per_pixel: u32,

    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(short, long, default_value = "800x600")]
    /// Screen dimension in format `width`x`height`
    dimensions: Dimensions,

    #[arg(long, default_value_t = 32)]
    tile_size: u32,

    #[arg(long, default_value_t = 6)]
    /// Maximum number of reflection/refraction bounces
    max_depth: u32,

    #[arg(short, long, default_value = "output/")]
    /// Directory the rendered channels are written to
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let renderer = TileRenderer {
        width: args.dimensions.width,
        height: args.dimensions.height,
        spp: args.sample_per_pixel,
        tile_size: args.tile_size,
        max_depth: args.max_depth,
        scene: args.scene.into(),
    };

    let output_buffers = timed_scope_log("Render", || renderer.run()).res;

    FileOutput {
        outdir: args.output,
    }
    .commit(&output_buffers)?;

    report_counters();
    Ok(())
}
