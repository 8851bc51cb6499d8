//! Shaders and textures bundled with the exercises.
//!
//! Assets are embedded at compile time. When an asset directory is configured
//! and holds a file with the same relative path, that file is used instead so
//! shaders can be tweaked without rebuilding.

use std::path::{Path, PathBuf};

use include_dir::{Dir, include_dir};

use crate::error::{Error, Result};

static EMBEDDED: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Looks up assets by relative path such as `shaders/textures/frag.glsl`.
#[derive(Debug, Clone, Default)]
pub struct Assets {
    override_dir: Option<PathBuf>,
}

impl Assets {
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        Self { override_dir }
    }

    pub fn bytes(&self, name: &str) -> Result<Vec<u8>> {
        if let Some(path) = self.on_disk(name) {
            log::debug!("Loading asset {} from {}", name, path.display());
            return std::fs::read(&path).map_err(|source| Error::Io { path, source });
        }
        EMBEDDED
            .get_file(name)
            .map(|file| file.contents().to_vec())
            .ok_or_else(|| Error::MissingAsset(name.to_string()))
    }

    pub fn text(&self, name: &str) -> Result<String> {
        let bytes = self.bytes(name)?;
        String::from_utf8(bytes).map_err(|e| Error::Io {
            path: PathBuf::from(name),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })
    }

    fn on_disk(&self, name: &str) -> Option<PathBuf> {
        let path = self.override_dir.as_deref()?.join(Path::new(name));
        path.is_file().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_shaders_exist() {
        let assets = Assets::default();
        for scene in ["shaders", "textures"] {
            let vert = assets.text(&format!("shaders/{scene}/vert.glsl")).unwrap();
            let frag = assets.text(&format!("shaders/{scene}/frag.glsl")).unwrap();
            assert!(vert.starts_with("#version 330 core"));
            assert!(frag.starts_with("#version 330 core"));
        }
    }

    #[test]
    fn embedded_textures_exist() {
        let assets = Assets::default();
        assert!(!assets.bytes("textures/container.png").unwrap().is_empty());
        assert!(!assets.bytes("textures/awesomeface.png").unwrap().is_empty());
    }

    #[test]
    fn disk_copy_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("shaders/shaders")).unwrap();
        std::fs::write(dir.path().join("shaders/shaders/frag.glsl"), "override").unwrap();

        let assets = Assets::new(Some(dir.path().to_path_buf()));
        assert_eq!(assets.text("shaders/shaders/frag.glsl").unwrap(), "override");
        // Files missing on disk still come from the binary.
        assert!(assets.text("shaders/shaders/vert.glsl").unwrap().contains("xOffset"));
    }

    #[test]
    fn missing_asset() {
        let err = Assets::default().bytes("textures/missing.png").unwrap_err();
        assert!(matches!(err, Error::MissingAsset(name) if name == "textures/missing.png"));
    }
}
