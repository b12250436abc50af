use clap::Parser;

use glhelper_common::scene_loader::SceneLoader;
use glhelper_common::scenes::Builtin;

mod app;
mod args;
mod logging;
mod state;

use app::App;
use args::Args;
use state::GalleryState;

fn main() {
    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    logging::init_logging(args.log.as_deref());

    let mut scenes = Vec::new();

    let first = match &args.file {
        Some(path) => {
            match SceneLoader::load_from_path(path) {
                Ok(scene) => {
                    log::info!("Read scene file from {:?}", path);
                    scenes.push(scene);
                }
                Err(e) => {
                    log::error!("Could not read scene description: {e}");
                    std::process::exit(-1);
                }
            }
            0
        }
        None => {
            let builtin = Builtin::from(args.scene);
            Builtin::ALL
                .iter()
                .position(|b| *b == builtin)
                .unwrap_or_default()
        }
    };

    scenes.extend(Builtin::ALL.iter().map(Builtin::build));

    let gallery = GalleryState::new(scenes.len(), first);

    let app = match App::new(args.width, args.height, scenes, gallery) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(-1);
        }
    };

    app.run();
}
