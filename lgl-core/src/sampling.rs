//! Texture sampling parameters.
//!
//! These are plain descriptions; the `lgl` crate maps them onto GL enums when
//! a texture is created.

use serde::Deserialize;
use thiserror::Error;

/// What happens when texture coordinates leave `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wrap {
    Repeat,
    MirroredRepeat,
    ClampToEdge,
    ClampToBorder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    Nearest,
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

impl Filter {
    pub fn uses_mipmaps(self) -> bool {
        !matches!(self, Filter::Nearest | Filter::Linear)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplingError {
    #[error("minification filter {0:?} needs mipmaps but mipmaps are disabled")]
    MipmapsDisabled(Filter),
    #[error("magnification filter must be nearest or linear, got {0:?}")]
    MipmapMagFilter(Filter),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextureOptions {
    pub wrap_s: Wrap,
    pub wrap_t: Wrap,
    pub min_filter: Filter,
    pub mag_filter: Filter,
    pub mipmaps: bool,
}

impl TextureOptions {
    /// Checks that the filters are usable with the mipmap setting.
    pub fn validate(&self) -> Result<(), SamplingError> {
        if self.mag_filter.uses_mipmaps() {
            return Err(SamplingError::MipmapMagFilter(self.mag_filter));
        }
        if self.min_filter.uses_mipmaps() && !self.mipmaps {
            return Err(SamplingError::MipmapsDisabled(self.min_filter));
        }
        Ok(())
    }

    /// Same wrap mode on both axes.
    pub fn with_wrap(mut self, wrap: Wrap) -> Self {
        self.wrap_s = wrap;
        self.wrap_t = wrap;
        self
    }

    pub fn with_filters(mut self, min: Filter, mag: Filter) -> Self {
        self.min_filter = min;
        self.mag_filter = mag;
        self
    }
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            wrap_s: Wrap::Repeat,
            wrap_t: Wrap::Repeat,
            min_filter: Filter::LinearMipmapLinear,
            mag_filter: Filter::Linear,
            mipmaps: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(TextureOptions::default().validate(), Ok(()));
    }

    #[test]
    fn mipmap_filter_requires_mipmaps() {
        let options = TextureOptions {
            mipmaps: false,
            ..Default::default()
        };
        assert_eq!(
            options.validate(),
            Err(SamplingError::MipmapsDisabled(Filter::LinearMipmapLinear))
        );

        let options = options.with_filters(Filter::Nearest, Filter::Nearest);
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn mag_filter_cannot_use_mipmaps() {
        let options =
            TextureOptions::default().with_filters(Filter::Linear, Filter::NearestMipmapLinear);
        assert!(matches!(
            options.validate(),
            Err(SamplingError::MipmapMagFilter(_))
        ));
    }

    #[test]
    fn deserializes_snake_case() {
        let options: TextureOptions = serde_json::from_str(
            r#"{ "wrap_s": "mirrored_repeat", "min_filter": "nearest_mipmap_linear" }"#,
        )
        .unwrap();
        assert_eq!(options.wrap_s, Wrap::MirroredRepeat);
        assert_eq!(options.wrap_t, Wrap::Repeat);
        assert_eq!(options.min_filter, Filter::NearestMipmapLinear);
        assert_eq!(options.mag_filter, Filter::Linear);
    }
}
