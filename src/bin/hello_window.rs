use std::process::ExitCode;

use lgl::scenes::HelloWindow;

fn main() -> ExitCode {
    lgl::launch("Hello Window", Some((1600, 900)), |_, _, _| {
        Ok(HelloWindow::new())
    })
}
