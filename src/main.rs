#![deny(clippy::all)]

use anyhow::{Context, Result};
use clap::{value_t, App, Arg};
use env_logger::Env;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;
use whitted::{build_progress_bar, load_scene, Image};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let matches = App::new("whitted")
        .about("A Whitted-style ray tracer")
        .arg(
            Arg::with_name("scene")
                .index(1)
                .required(true)
                .takes_value(true)
                .help("input scene as a json file"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help(
                    "Output rendered image to file\n\
                     Defaults to the scene name with a .png extension",
                ),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .help("Override the image width"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .help("Override the image height"),
        )
        .arg(
            Arg::with_name("shadows")
                .long("shadows")
                .help("Enable shadows"),
        )
        .arg(
            Arg::with_name("ss")
                .long("ss")
                .takes_value(true)
                .help("Anti-aliasing factor, N×N samples per pixel"),
        )
        .arg(
            Arg::with_name("depth")
                .long("depth")
                .takes_value(true)
                .help("Maximum number of mirror reflections"),
        )
        .arg(
            Arg::with_name("noprogress")
                .long("no-progress")
                .help("Hide progress bar"),
        )
        .get_matches();

    let scene_path = Path::new(matches.value_of("scene").unwrap_or_default());
    let output_filename = matches
        .value_of("output")
        .map_or_else(|| scene_path.with_extension("png"), PathBuf::from);
    let use_progress = !matches.is_present("noprogress");

    let now = Instant::now();
    let mut scene = load_scene(scene_path)
        .with_context(|| format!("failed to load scene {}", scene_path.display()))?;
    info!("Took {:.3?} to load the scene.", now.elapsed());

    if matches.is_present("width") {
        scene.options.width = value_t!(matches, "width", u32)?;
    }
    if matches.is_present("height") {
        scene.options.height = value_t!(matches, "height", u32)?;
    }
    if matches.is_present("shadows") {
        scene.set_shadows(true);
    }
    if matches.is_present("ss") {
        scene.set_ss_factor(value_t!(matches, "ss", u32)?);
    }
    if matches.is_present("depth") {
        scene.set_recursion_depth(value_t!(matches, "depth", u32)?);
    }

    let mut image = Image::new(scene.options.width, scene.options.height);
    let now = Instant::now();
    if use_progress {
        let progress = build_progress_bar(image.height());
        scene.render_with_progress(&mut image, &progress);
        progress.finish();
    } else {
        scene.render(&mut image);
    }
    let duration = now.elapsed();

    image
        .save(&output_filename)
        .with_context(|| format!("unable to write image {}", output_filename.display()))?;
    info!(
        "Output written to {} in {:.3?}",
        output_filename.display(),
        duration
    );

    Ok(())
}
