use std::process::ExitCode;

use lgl::scenes::TexturedQuad;

fn main() -> ExitCode {
    lgl::launch("Textures", Some((1600, 900)), |app, config, assets| {
        let options = config
            .textures
            .unwrap_or_else(TexturedQuad::default_options);
        TexturedQuad::new(&app.gl, assets, &options, config.mix_rate)
    })
}
