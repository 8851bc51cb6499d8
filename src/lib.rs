//! Learn OpenGL exercises.
//!
//! Each executable in `src/bin` opens a window, uploads a little static data and
//! renders one [`scenes::Scene`] until the window is closed. The shared setup
//! lives in [`launch`].

use std::path::Path;
use std::process::ExitCode;

use lgl_core::config::CONFIG_FILE;
use lgl_core::Config;

pub mod abs;
pub mod assets;
pub mod error;
pub mod logging;
pub mod scenes;

pub use assets::Assets;
pub use error::{Error, Result};

/// Loads the config, sets up logging and the window, builds the scene with
/// `build` and runs it. Any setup failure is reported and turned into a
/// failing exit code.
///
/// `title` and `size` are the exercise's own choices, used for whatever the
/// config file leaves unset.
pub fn launch<S, F>(title: &str, size: Option<(u32, u32)>, build: F) -> ExitCode
where
    S: scenes::Scene,
    F: FnOnce(&abs::App, &Config, &Assets) -> Result<S>,
{
    let config = match Config::load_or_default(Path::new(CONFIG_FILE)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    // Validated while loading.
    let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
    if let Err(e) = logging::init(level) {
        eprintln!("Failed to install logger: {e}");
    }

    match run(title, size, &config, build) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run<S, F>(title: &str, size: Option<(u32, u32)>, config: &Config, build: F) -> Result<()>
where
    S: scenes::Scene,
    F: FnOnce(&abs::App, &Config, &Assets) -> Result<S>,
{
    let window = config.window.resolve(title, size);
    log::info!(
        "Starting '{}' ({}x{}, OpenGL {}.{} core)",
        window.title,
        window.width,
        window.height,
        window.gl_major,
        window.gl_minor
    );

    let mut app = abs::App::new(&window)?;
    let assets = Assets::new(config.asset_dir.clone());
    let mut scene = build(&app, config, &assets)?;
    app.run(&mut scene);
    // The scene owns GL objects and must go before the context.
    drop(scene);
    log::info!("Shut down cleanly");
    Ok(())
}
