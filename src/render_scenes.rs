#![deny(clippy::all)]

use anyhow::{Context, Result};
use env_logger::Env;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use whitted::{load_scene, Image};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let scene_dir = Path::new("scenes");
    let output_dir = Path::new("renders");
    let iterations = 3;

    let mut scenes: Vec<PathBuf> = fs::read_dir(scene_dir)
        .with_context(|| format!("unable to list {}", scene_dir.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().map_or(false, |ext| ext == "json"))
        .collect();
    scenes.sort();

    fs::create_dir_all(output_dir)
        .with_context(|| format!("unable to create {}", output_dir.display()))?;

    for scene_path in &scenes {
        let scene = load_scene(scene_path)
            .with_context(|| format!("failed to load scene {}", scene_path.display()))?;

        let mut output_filename = output_dir.join(scene_path.file_stem().unwrap_or_default());
        output_filename.set_extension("png");

        let mut image = Image::new(scene.options.width, scene.options.height);
        let mut duration_sum = Duration::new(0, 0);

        info!("Raytracing {}...", scene_path.display());
        for i in 0..iterations {
            let now = Instant::now();
            scene.render(&mut image);
            let duration = now.elapsed();
            duration_sum += duration;

            info!("Iteration {}: rendered in {:.3?}", i + 1, duration);
        }

        info!("Avg time: {:.3?}", duration_sum / iterations);
        image
            .save(&output_filename)
            .with_context(|| format!("unable to write image {}", output_filename.display()))?;
        info!("Wrote rendered image to {}", output_filename.display());
    }

    Ok(())
}
