//! Avatar texture loading. Avatars are ordinary photos, so EXIF orientation
//! is honored before the texture is created. Loading is deferred until the
//! testimonials section approaches the viewport; a missing or unreadable
//! file is logged and skipped, and the renderer falls back to an initials
//! badge.

use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;

pub struct AvatarStore {
    dir: Option<PathBuf>,
    textures: HashMap<&'static str, Texture2D>,
    loaded: bool,
}

impl AvatarStore {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self {
            dir,
            textures: HashMap::new(),
            loaded: false,
        }
    }

    pub fn loaded(&self) -> bool {
        self.loaded
    }

    pub fn get(&self, file: &str) -> Option<&Texture2D> {
        self.textures.get(file)
    }

    /// Load every named avatar from the assets directory. Called once, the
    /// first time the testimonials section comes near the viewport.
    pub fn load_all(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        files: &[&'static str],
    ) {
        if self.loaded {
            return;
        }
        self.loaded = true;

        let Some(dir) = self.dir.clone() else {
            log::debug!("no assets directory configured, avatars fall back to initials");
            return;
        };
        for &file in files {
            match load_texture_oriented(rl, thread, &dir.join(file)) {
                Ok(texture) => {
                    self.textures.insert(file, texture);
                }
                Err(err) => {
                    log::warn!("could not load avatar {file}: {err:#}");
                }
            }
        }
        log::info!("loaded {} of {} avatars", self.textures.len(), files.len());
    }
}

/// EXIF orientation tag value, defaulting to 1 (no rotation) when absent or
/// unreadable.
fn exif_orientation(bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY) {
            Some(field) => match &field.value {
                Value::Short(values) if !values.is_empty() => values[0],
                _ => 1,
            },
            None => 1,
        },
        Err(_) => 1,
    }
}

/// Load an image file, bake its EXIF rotation in, and upload it as a
/// texture. Orientations involving flips are rare in camera output and are
/// treated as unrotated.
pub fn load_texture_oriented(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF lives reliably only in JPEG output
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes)
        .map_err(|e| anyhow!("decoding {}: {}", path.display(), e))?;

    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => {
            image.rotate_cw();
        }
        8 => {
            image.rotate_ccw();
        }
        _ => {}
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("creating texture for {}: {}", path.display(), e))
}
