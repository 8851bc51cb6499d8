use std::sync::Arc;

use glow::HasContext;
use lgl_core::geometry::TEXTURED_QUAD;
use lgl_core::{Filter, MixFactor, TextureOptions, Wrap};
use sdl2::keyboard::Keycode;

use super::{FrameContext, Scene};
use crate::abs::{Mesh, PixelData, ShaderProgram, Texture};
use crate::assets::Assets;
use crate::error::Result;

/// A quad sampling two textures, blended by a factor the Up and Down keys control.
pub struct TexturedQuad {
    program: ShaderProgram,
    mesh: Mesh,
    container: Texture,
    face: Texture,
    mix: MixFactor,
}

impl TexturedQuad {
    pub fn default_options() -> TextureOptions {
        TextureOptions::default()
            .with_wrap(Wrap::MirroredRepeat)
            .with_filters(Filter::NearestMipmapLinear, Filter::Linear)
    }

    pub fn new(
        gl: &Arc<glow::Context>,
        assets: &Assets,
        options: &TextureOptions,
        mix_rate: f32,
    ) -> Result<Self> {
        let container = load_texture(gl, assets, "textures/container.png", options)?;
        let face = load_texture(gl, assets, "textures/awesomeface.png", options)?;

        let program = ShaderProgram::from_sources(
            gl,
            &assets.text("shaders/textures/vert.glsl")?,
            &assets.text("shaders/textures/frag.glsl")?,
        )?;
        // Sampler units never change, so set them once.
        program.use_program();
        program.set_int("texture0", 0);
        program.set_int("texture1", 1);

        let mesh = Mesh::from_geometry(gl, &TEXTURED_QUAD)?;

        log::info!("Use Up/Down to change the texture mix");
        Ok(Self {
            program,
            mesh,
            container,
            face,
            mix: MixFactor::new(mix_rate),
        })
    }
}

fn load_texture(
    gl: &Arc<glow::Context>,
    assets: &Assets,
    name: &str,
    options: &TextureOptions,
) -> Result<Texture> {
    let pixels = PixelData::load(&assets.bytes(name)?, true)?;
    log::debug!("Loaded {} ({}x{})", name, pixels.width, pixels.height);
    Texture::new(gl, &pixels, options)
}

impl Scene for TexturedQuad {
    fn update(&mut self, ctx: &FrameContext) {
        if ctx.keyboard.is_down(Keycode::Up) {
            self.mix.raise(ctx.delta_time);
        }
        if ctx.keyboard.is_down(Keycode::Down) {
            self.mix.lower(ctx.delta_time);
        }
    }

    fn render(&mut self, gl: &Arc<glow::Context>) {
        unsafe {
            gl.clear_color(0.5, 0.5, 1.0, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        self.container.bind(0);
        self.face.bind(1);

        self.program.use_program();
        self.program.set_float("mixValue", self.mix.value());
        self.mesh.draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_exercise() {
        let options = TexturedQuad::default_options();
        assert_eq!(options.wrap_s, Wrap::MirroredRepeat);
        assert_eq!(options.wrap_t, Wrap::MirroredRepeat);
        assert_eq!(options.min_filter, Filter::NearestMipmapLinear);
        assert_eq!(options.mag_filter, Filter::Linear);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn bundled_textures_decode() {
        let assets = Assets::default();
        let container = PixelData::load(&assets.bytes("textures/container.png").unwrap(), true).unwrap();
        let face = PixelData::load(&assets.bytes("textures/awesomeface.png").unwrap(), true).unwrap();
        assert_eq!(container.format, crate::abs::PixelFormat::Rgb);
        assert_eq!(face.format, crate::abs::PixelFormat::Rgba);
        assert_eq!((face.width, face.height), (256, 256));
    }
}
