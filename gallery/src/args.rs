use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use glhelper::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use glhelper_common::scenes::Builtin;

#[derive(Debug, Parser)]
#[command(about = "Browse the shape exercises. Arrow keys cycle scenes, W toggles wireframe")]
pub struct Args {
    /// Built-in scene to start with (ignored when a scene file is given)
    #[arg(value_enum, default_value_t = SceneArg::Triangle)]
    pub scene: SceneArg,
    /// JSON5 scene description, shown first
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// Width of the window
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,
    /// Height of the window
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,
    /// Log filter in env_logger syntax, RUST_LOG is used when unset
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SceneArg {
    Stretched,
    ColoredPoints,
    Triangle,
    TinyTriangle,
    Triangles,
    Quad,
    Circle,
    Octagon,
    Pentagon,
    Pacman,
    Pizza,
    Star,
    Spiral,
    Sprite,
}

impl From<SceneArg> for Builtin {
    fn from(s: SceneArg) -> Self {
        match s {
            SceneArg::Stretched => Self::Stretched,
            SceneArg::ColoredPoints => Self::ColoredPoints,
            SceneArg::Triangle => Self::Triangle,
            SceneArg::TinyTriangle => Self::TinyTriangle,
            SceneArg::Triangles => Self::Triangles,
            SceneArg::Quad => Self::Quad,
            SceneArg::Circle => Self::Circle,
            SceneArg::Octagon => Self::Octagon,
            SceneArg::Pentagon => Self::Pentagon,
            SceneArg::Pacman => Self::Pacman,
            SceneArg::Pizza => Self::Pizza,
            SceneArg::Star => Self::Star,
            SceneArg::Spiral => Self::Spiral,
            SceneArg::Sprite => Self::Sprite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["glhelper-gallery"]).unwrap();

        assert!(matches!(args.scene, SceneArg::Triangle));
        assert!(args.file.is_none());
        assert_eq!((args.width, args.height), (1280, 720));
    }

    #[test]
    fn scene_names_match_builtins() {
        for builtin in Builtin::ALL {
            let args = Args::try_parse_from(["glhelper-gallery", builtin.name()]).unwrap();

            assert_eq!(Builtin::from(args.scene), builtin);
        }
    }
}
