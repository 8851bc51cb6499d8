use std::process::ExitCode;

use lgl::scenes::HelloTriangle;

fn main() -> ExitCode {
    lgl::launch("Hello Triangle", None, |app, _, _| HelloTriangle::new(&app.gl))
}
