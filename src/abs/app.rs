//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application,
//! and the blocking render loop every exercise runs.

use std::sync::Arc;
use std::time::Instant;

use glow::HasContext;
use lgl_core::{KeyboardState, WindowSettings};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use crate::error::{Error, Result};
use crate::scenes::{FrameContext, Scene};

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
///
/// Field order matters: the GL context must be dropped before the window.
pub struct App {
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
    pub gl_context: sdl2::video::GLContext,
    pub window: sdl2::video::Window,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub sdl: sdl2::Sdl,
}

impl App {
    /// Creates the window and makes a fresh GL context current on it.
    pub fn new(config: &WindowSettings) -> Result<Self> {
        let sdl = sdl2::init().map_err(Error::Window)?;
        let video_subsystem = sdl.video().map_err(Error::Window)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(config.gl_major, config.gl_minor);
        if config.forward_compat {
            gl_attr.set_context_flags().forward_compatible().set();
        }

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .opengl()
            .resizable()
            .position_centered()
            .build()
            .map_err(|e| Error::Window(e.to_string()))?;

        let gl_context = window.gl_create_context().map_err(Error::Context)?;
        window.gl_make_current(&gl_context).map_err(Error::Context)?;

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };

        let interval = if config.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("Could not set swap interval: {}", e);
        }

        let version = gl.version();
        if (version.major, version.minor) < (config.gl_major as u32, config.gl_minor as u32) {
            return Err(Error::Context(format!(
                "got OpenGL {}.{}, need {}.{}",
                version.major, version.minor, config.gl_major, config.gl_minor
            )));
        }
        unsafe {
            log::info!(
                "OpenGL {} on {}",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER)
            );
        }

        let (width, height) = window.drawable_size();
        unsafe {
            gl.viewport(0, 0, width as i32, height as i32);
        }

        let event_pump = sdl.event_pump().map_err(Error::Window)?;

        Ok(Self {
            gl: Arc::new(gl),
            event_pump,
            gl_context,
            window,
            video_subsystem,
            sdl,
        })
    }

    /// Runs `scene` until the window is closed or Escape is pressed.
    pub fn run(&mut self, scene: &mut dyn Scene) {
        let mut keyboard = KeyboardState::default();
        let start = Instant::now();
        let mut last_frame = start;
        let mut frames: u64 = 0;

        'running: loop {
            let now = Instant::now();
            let delta_time = now.duration_since(last_frame).as_secs_f32();
            last_frame = now;

            keyboard.begin_frame();
            for event in self.event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => break 'running,
                    Event::Window {
                        win_event: WindowEvent::SizeChanged(..),
                        ..
                    } => {
                        // Drawable size differs from window size on high-DPI displays
                        let (width, height) = self.window.drawable_size();
                        log::debug!("Framebuffer resized to {}x{}", width, height);
                        unsafe {
                            self.gl.viewport(0, 0, width as i32, height as i32);
                        }
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        ..
                    } => keyboard.key_down(keycode),
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => keyboard.key_up(keycode),
                    _ => {}
                }
            }

            if keyboard.was_pressed(Keycode::Escape) {
                log::info!("Escape pressed, closing window");
                break 'running;
            }

            let ctx = FrameContext {
                keyboard: &keyboard,
                elapsed: now.duration_since(start).as_secs_f32(),
                delta_time,
            };
            scene.update(&ctx);
            scene.render(&self.gl);
            self.window.gl_swap_window();
            frames += 1;
        }

        let seconds = start.elapsed().as_secs_f32();
        log::info!(
            "Rendered {} frames in {:.1}s ({:.1} fps)",
            frames,
            seconds,
            frames as f32 / seconds.max(f32::EPSILON)
        );
    }
}
