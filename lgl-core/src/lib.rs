//! Graphics-free building blocks for the Learn OpenGL exercises.
//!
//! Nothing in this crate touches a GL context, so everything here can be
//! unit-tested headless. The `lgl` crate uploads and draws what is defined here.

pub mod animation;
pub mod config;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod sampling;

pub use animation::{ColorCycle, MixFactor};
pub use config::{Config, ConfigError, WindowConfig, WindowSettings};
pub use geometry::Geometry;
pub use input::KeyboardState;
pub use layout::{LayoutError, VertexAttribute, VertexLayout};
pub use sampling::{Filter, SamplingError, TextureOptions, Wrap};
