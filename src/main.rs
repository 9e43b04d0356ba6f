//! Terminal space garbage runner (default binary).
//!
//! Configuration comes from `SPACE_GARBAGE_*` environment variables. Logging is off unless
//! `SPACE_GARBAGE_LOG_PATH` names a file; the level is taken from `RUST_LOG`.

use std::fs::File;

use anyhow::{Context, Result};
use log::info;

use space_garbage::core::Canvas;
use space_garbage::engine::{Scene, SceneAssets, SceneConfig};
use space_garbage::input::KeyboardInput;
use space_garbage::term::TerminalCanvas;

fn main() -> Result<()> {
    init_logging()?;

    let config = SceneConfig::from_env();
    let assets = SceneAssets::load(&config.assets_dir, config.ship_frame_repeat)
        .with_context(|| format!("loading assets from {}", config.assets_dir.display()))?;

    let mut canvas = TerminalCanvas::new()?;
    canvas.enter()?;

    let result = run(&mut canvas, config, assets);

    // Always try to restore terminal state.
    let _ = canvas.exit();
    result
}

fn run(canvas: &mut TerminalCanvas, config: SceneConfig, assets: SceneAssets) -> Result<()> {
    let mut input = KeyboardInput::new();
    let mut scene = Scene::new(config, assets, canvas.size());
    scene.run(canvas, &mut input)?;
    info!("scene finished in year {}", scene.world().epoch());
    Ok(())
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("SPACE_GARBAGE_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.to_string_lossy()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
