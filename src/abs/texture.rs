//! Structs and functions for handling textures.
//!
//! The module provides the [`Texture`] struct which is a CPU representation of a GPU texture,
//! and [`PixelData`] which holds decoded image bytes ready for upload.

use std::sync::Arc;

use glow::HasContext;
use image::DynamicImage;
use lgl_core::{Filter, TextureOptions, Wrap};

use crate::error::{Error, Result};

/// Layout of the bytes in a [`PixelData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

impl PixelFormat {
    pub fn gl_enum(self) -> u32 {
        match self {
            PixelFormat::Rgb => glow::RGB,
            PixelFormat::Rgba => glow::RGBA,
        }
    }

    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

/// Tightly packed 8-bit pixels, first row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelData {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub data: Vec<u8>,
}

impl PixelData {
    /// Decodes a PNG or JPEG file held in memory.
    pub fn load(bytes: &[u8], flip_vertically: bool) -> Result<Self> {
        let image = image::load_from_memory(bytes)?;
        Ok(Self::from_image(image, flip_vertically))
    }

    /// Converts an image, keeping an alpha channel only if it has one.
    ///
    /// Image rows run top-down while GL samples the first row as `v = 0`, so
    /// textures drawn with upward `v` coordinates need `flip_vertically`.
    pub fn from_image(image: DynamicImage, flip_vertically: bool) -> Self {
        let image = if flip_vertically { image.flipv() } else { image };
        let (width, height) = (image.width(), image.height());
        if image.color().has_alpha() {
            Self {
                width,
                height,
                format: PixelFormat::Rgba,
                data: image.into_rgba8().into_raw(),
            }
        } else {
            Self {
                width,
                height,
                format: PixelFormat::Rgb,
                data: image.into_rgb8().into_raw(),
            }
        }
    }
}

fn wrap_enum(wrap: Wrap) -> i32 {
    (match wrap {
        Wrap::Repeat => glow::REPEAT,
        Wrap::MirroredRepeat => glow::MIRRORED_REPEAT,
        Wrap::ClampToEdge => glow::CLAMP_TO_EDGE,
        Wrap::ClampToBorder => glow::CLAMP_TO_BORDER,
    }) as i32
}

fn filter_enum(filter: Filter) -> i32 {
    (match filter {
        Filter::Nearest => glow::NEAREST,
        Filter::Linear => glow::LINEAR,
        Filter::NearestMipmapNearest => glow::NEAREST_MIPMAP_NEAREST,
        Filter::LinearMipmapNearest => glow::LINEAR_MIPMAP_NEAREST,
        Filter::NearestMipmapLinear => glow::NEAREST_MIPMAP_LINEAR,
        Filter::LinearMipmapLinear => glow::LINEAR_MIPMAP_LINEAR,
    }) as i32
}

/// Represents a texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
}

impl Texture {
    /// Uploads `pixels` into a new 2D texture sampled with `options`.
    pub fn new(gl: &Arc<glow::Context>, pixels: &PixelData, options: &TextureOptions) -> Result<Self> {
        options.validate()?;
        unsafe {
            let texture = gl.create_texture().map_err(Error::Gl)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            // RGB rows are not 4-byte aligned for most widths
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                pixels.format.gl_enum() as i32,
                pixels.width as i32,
                pixels.height as i32,
                0,
                pixels.format.gl_enum(),
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(pixels.data.as_slice())),
            );
            if options.mipmaps {
                gl.generate_mipmap(glow::TEXTURE_2D);
            }
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, wrap_enum(options.wrap_s));
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, wrap_enum(options.wrap_t));
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                filter_enum(options.min_filter),
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                filter_enum(options.mag_filter),
            );
            gl.bind_texture(glow::TEXTURE_2D, None);

            log::debug!(
                "Uploaded {}x{} {:?} texture",
                pixels.width,
                pixels.height,
                pixels.format
            );
            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
            })
        }
    }

    /// Binds the texture to the specified texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

    use super::*;

    fn two_row_rgb() -> DynamicImage {
        let mut image = RgbImage::new(3, 2);
        for x in 0..3 {
            image.put_pixel(x, 0, Rgb([255, 0, 0]));
            image.put_pixel(x, 1, Rgb([0, 0, 255]));
        }
        DynamicImage::ImageRgb8(image)
    }

    #[test]
    fn rgb_stays_rgb() {
        let pixels = PixelData::from_image(two_row_rgb(), false);
        assert_eq!(pixels.format, PixelFormat::Rgb);
        assert_eq!(pixels.data.len(), 3 * 2 * 3);
        assert_eq!(&pixels.data[..3], &[255, 0, 0]);
    }

    #[test]
    fn flip_reverses_rows() {
        let pixels = PixelData::from_image(two_row_rgb(), true);
        assert_eq!(&pixels.data[..3], &[0, 0, 255]);
        assert_eq!(&pixels.data[9..12], &[255, 0, 0]);
    }

    #[test]
    fn alpha_becomes_rgba() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 128]));
        let pixels = PixelData::from_image(DynamicImage::ImageRgba8(image), false);
        assert_eq!(pixels.format, PixelFormat::Rgba);
        assert_eq!(pixels.data.len(), 2 * 2 * pixels.format.channels());
        assert_eq!(&pixels.data[..4], &[1, 2, 3, 128]);
    }

    #[test]
    fn load_decodes_png() {
        let mut encoded = Vec::new();
        two_row_rgb()
            .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
            .unwrap();
        let pixels = PixelData::load(&encoded, true).unwrap();
        assert_eq!((pixels.width, pixels.height), (3, 2));
        assert_eq!(&pixels.data[..3], &[0, 0, 255]);
    }

    #[test]
    fn load_rejects_garbage() {
        assert!(matches!(
            PixelData::load(b"definitely not an image", false),
            Err(Error::Image(_))
        ));
    }

    #[test]
    fn gl_enums() {
        assert_eq!(wrap_enum(Wrap::MirroredRepeat), glow::MIRRORED_REPEAT as i32);
        assert_eq!(filter_enum(Filter::NearestMipmapLinear), glow::NEAREST_MIPMAP_LINEAR as i32);
        assert_eq!(PixelFormat::Rgb.gl_enum(), glow::RGB);
    }
}
