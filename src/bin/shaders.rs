use std::process::ExitCode;

use lgl::scenes::ColoredTriangle;

fn main() -> ExitCode {
    lgl::launch("Shaders", Some((1600, 900)), |app, _, assets| {
        ColoredTriangle::new(&app.gl, assets)
    })
}
