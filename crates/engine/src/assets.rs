//! Loading ASCII-art sprites from disk.
//!
//! Every file in a directory is one frame. Files are read in name order so the animation
//! cycle is the same on every platform.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use log::debug;

use space_garbage_core::Sprite;

/// Load every file in `dir` as a sprite, each one repeated `repeat` times in a row.
pub fn load_sprites(dir: impl AsRef<Path>, repeat: usize) -> Result<Vec<Rc<Sprite>>> {
    let dir = dir.as_ref();
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("reading sprite directory {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()
        .with_context(|| format!("listing {}", dir.display()))?;
    paths.retain(|p| p.is_file());
    paths.sort();

    let mut sprites = Vec::with_capacity(paths.len() * repeat);
    for path in &paths {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading sprite {}", path.display()))?;
        let sprite = Rc::new(Sprite::new(text));
        for _ in 0..repeat {
            sprites.push(Rc::clone(&sprite));
        }
    }

    debug!("loaded {} frames from {}", paths.len(), dir.display());
    Ok(sprites)
}

/// All art a scene needs.
#[derive(Debug, Clone)]
pub struct SceneAssets {
    /// Ship animation cycle, frames already repeated.
    pub rocket: Vec<Rc<Sprite>>,
    pub garbage: Vec<Rc<Sprite>>,
}

impl SceneAssets {
    /// Load `rocket/` and `garbage/` under `root`.
    pub fn load(root: impl AsRef<Path>, ship_frame_repeat: usize) -> Result<Self> {
        let root = root.as_ref();
        let rocket = load_sprites(root.join("rocket"), ship_frame_repeat.max(1))?;
        let garbage = load_sprites(root.join("garbage"), 1)?;

        if rocket.is_empty() {
            bail!("no ship frames in {}", root.join("rocket").display());
        }
        if garbage.is_empty() {
            bail!("no garbage frames in {}", root.join("garbage").display());
        }
        Ok(Self { rocket, garbage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "space-garbage-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn loads_in_name_order_with_repeat() {
        let dir = scratch_dir("order");
        fs::write(dir.join("b.txt"), "bb\nb").unwrap();
        fs::write(dir.join("a.txt"), "a").unwrap();

        let sprites = load_sprites(&dir, 2).unwrap();
        let texts: Vec<&str> = sprites.iter().map(|s| s.text()).collect();
        assert_eq!(texts, vec!["a", "a", "bb\nb", "bb\nb"]);
        assert!(Rc::ptr_eq(&sprites[0], &sprites[1]));
        assert_eq!(sprites[2].size(), (2, 2));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = load_sprites("/definitely/not/here", 1).unwrap_err();
        assert!(err.to_string().contains("reading sprite directory"));
    }

    #[test]
    fn scene_assets_require_both_sets() {
        let root = scratch_dir("assets");
        fs::create_dir_all(root.join("rocket")).unwrap();
        fs::create_dir_all(root.join("garbage")).unwrap();
        fs::write(root.join("rocket").join("frame_1.txt"), "^").unwrap();

        let err = SceneAssets::load(&root, 2).unwrap_err();
        assert!(err.to_string().contains("no garbage frames"));

        fs::write(root.join("garbage").join("duck.txt"), "<o)").unwrap();
        let assets = SceneAssets::load(&root, 2).unwrap();
        assert_eq!(assets.rocket.len(), 2);
        assert_eq!(assets.garbage.len(), 1);

        fs::remove_dir_all(&root).unwrap();
    }
}
