use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use glhelper::shape::{
    group, make_polygon, make_rectangle, make_spiral, make_star, make_triangle, remove_sides,
    rotate, rotate_about_last, translate,
};
use glhelper::Shape;

use crate::scene::{DrawMode, Drawable, Mesh, Scene, Viewport, DEFAULT_SHAPE_COLOR};

pub struct SceneLoader {}

impl SceneLoader {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Scene, LoaderError> {
        let path = path.as_ref();
        let scene_str = std::fs::read_to_string(path)?;

        let mut scene = Self::load_from_str(&scene_str)?;

        if scene.name.is_empty() {
            scene.name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
        }

        Ok(scene)
    }

    pub fn load_from_str(src: &str) -> Result<Scene, LoaderError> {
        let file: SceneFile = json5::from_str(src)?;

        let mut scene = Scene::new(file.name.unwrap_or_default());

        if let Some(color) = file.clear_color {
            scene.clear_color = color;
        }
        if let Some(width) = file.line_width {
            scene.line_width = width;
        }
        if let Some(size) = file.point_size {
            scene.point_size = size;
        }
        scene.projection = file.projection;
        scene.viewport = file.viewport.unwrap_or_default();

        for stub in &file.items {
            scene = scene.push(build_item(stub)?);
        }

        Ok(scene)
    }
}

fn build_item(stub: &ItemStub) -> Result<Drawable, LoaderError> {
    let mesh = build_mesh(&stub.shape, &stub.transforms)?;

    let mode = match (&mesh, stub.mode) {
        (Mesh::Strip(_), None) => DrawMode::LineStrip,
        (Mesh::Strip(_), Some(DrawMode::Fill | DrawMode::Wireframe)) => {
            return Err(LoaderError::Other(
                "spirals can only be drawn as line_strip or points".into(),
            ))
        }
        (_, mode) => mode.unwrap_or_default(),
    };

    Ok(Drawable::new(
        mesh,
        stub.color.unwrap_or(DEFAULT_SHAPE_COLOR),
        mode,
    ))
}

fn build_mesh(stub: &ShapeStub, transforms: &[TransformStub]) -> Result<Mesh, LoaderError> {
    let mut shape = match stub {
        ShapeStub::Triangle { radius, center } => {
            let [x, y] = center.unwrap_or_default();
            make_triangle(*radius, x, y)
        }
        ShapeStub::Rectangle { width, height } => make_rectangle(*width, *height),
        ShapeStub::Polygon {
            radius,
            sides,
            center,
        } => {
            if *sides < 3 {
                return Err(LoaderError::Other("polygon needs at least 3 sides".into()));
            }

            let [x, y] = center.unwrap_or_default();
            make_polygon(*radius, *sides, x, y)
        }
        ShapeStub::Star {
            radius,
            points,
            center,
        } => {
            if *points < 2 {
                return Err(LoaderError::Other("star needs at least 2 points".into()));
            }

            let [x, y] = center.unwrap_or_default();
            make_star(*radius, *points, x, y)
        }
        ShapeStub::Spiral {
            radius,
            loops,
            center,
        } => {
            let [x, y] = center.unwrap_or_default();
            let mut strip = Shape::new(make_spiral(*radius, *loops, x, y), Vec::new());

            for transform in transforms {
                if let TransformStub::RemoveSides(_) = transform {
                    return Err(LoaderError::Other("spirals have no sides to remove".into()));
                }

                apply_transform(&mut strip, transform);
            }

            return Ok(Mesh::Strip(strip.vertices));
        }
        ShapeStub::Group(members) => {
            if members.is_empty() {
                return Err(LoaderError::Other("group needs at least one shape".into()));
            }

            let mut shapes = Vec::with_capacity(members.len());

            for member in members {
                match build_mesh(&member.shape, &member.transforms)? {
                    Mesh::Indexed(shape) => shapes.push(shape),
                    Mesh::Strip(_) => {
                        return Err(LoaderError::Other("spirals cannot be grouped".into()))
                    }
                }
            }

            let refs: Vec<&Shape> = shapes.iter().collect();
            group(&refs)
        }
    };

    // only a centre-last fan has wedges that can be dropped
    let fan = matches!(stub, ShapeStub::Polygon { .. } | ShapeStub::Star { .. });

    for transform in transforms {
        if let (TransformStub::RemoveSides(_), false) = (transform, fan) {
            return Err(LoaderError::Other(
                "only polygons and stars have sides to remove".into(),
            ));
        }

        apply_transform(&mut shape, transform);
    }

    Ok(Mesh::Indexed(shape))
}

fn apply_transform(shape: &mut Shape, transform: &TransformStub) {
    match transform {
        TransformStub::Translate([dx, dy]) => translate(shape, *dx, *dy),
        TransformStub::Rotate {
            angle,
            center: Some([x, y]),
        } => rotate(shape, *angle, *x, *y),
        TransformStub::Rotate {
            angle,
            center: None,
        } => rotate_about_last(shape, *angle),
        TransformStub::RemoveSides(count) => remove_sides(shape, *count),
    }
}

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("{0}")]
    Input(#[from] std::io::Error),
    #[error("{0}")]
    Format(#[from] json5::Error),
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Deserialize)]
struct SceneFile {
    name: Option<String>,
    clear_color: Option<[f32; 3]>,
    projection: Option<[f32; 4]>,
    viewport: Option<Viewport>,
    line_width: Option<f32>,
    point_size: Option<f32>,
    items: Vec<ItemStub>,
}

#[derive(Debug, Deserialize)]
struct ItemStub {
    color: Option<[f32; 3]>,
    mode: Option<DrawMode>,
    shape: ShapeStub,
    #[serde(default)]
    transforms: Vec<TransformStub>,
}

#[derive(Debug, Deserialize)]
struct MemberStub {
    shape: ShapeStub,
    #[serde(default)]
    transforms: Vec<TransformStub>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ShapeStub {
    Triangle {
        radius: f32,
        center: Option<[f32; 2]>,
    },
    Rectangle {
        width: f32,
        height: f32,
    },
    Polygon {
        radius: f32,
        sides: u32,
        center: Option<[f32; 2]>,
    },
    Star {
        radius: f32,
        points: u32,
        center: Option<[f32; 2]>,
    },
    Spiral {
        radius: f32,
        loops: u32,
        center: Option<[f32; 2]>,
    },
    Group(Vec<MemberStub>),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TransformStub {
    Translate([f32; 2]),
    Rotate {
        angle: f32,
        center: Option<[f32; 2]>,
    },
    RemoveSides(u32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn indexed(mesh: &Mesh) -> &Shape {
        match mesh {
            Mesh::Indexed(shape) => shape,
            _ => panic!("expected indexed mesh"),
        }
    }

    #[test]
    fn full_example() {
        let scene = SceneLoader::load_from_str(
            r#"{
                name: "example",
                clear_color: [0.1, 0.1, 0.1],
                projection: [-1, 1, -1, 1],
                line_width: 3,
                items: [
                    {
                        color: [1.0, 0.0, 0.0],
                        mode: "wireframe",
                        shape: { polygon: { radius: 0.5, sides: 6, center: [0, 0] } },
                        transforms: [
                            { translate: [0.5, 0] },
                            { rotate: { angle: 90, center: [0, 0] } },
                            { rotate: { angle: 45 } },
                            { remove_sides: 3 },
                        ],
                    },
                    { shape: { spiral: { radius: 0.75, loops: 2 } } },
                ],
            }"#,
        )
        .unwrap();

        assert_eq!(scene.name, "example");
        assert_eq!(scene.clear_color, [0.1, 0.1, 0.1]);
        assert_eq!(scene.projection, Some([-1.0, 1.0, -1.0, 1.0]));
        assert_eq!(scene.line_width, 3.0);
        assert_eq!(scene.point_size, 8.0);
        assert_eq!(scene.items.len(), 2);

        let hexagon = &scene.items[0];
        assert_eq!(hexagon.color, [1.0, 0.0, 0.0]);
        assert_eq!(hexagon.mode, DrawMode::Wireframe);

        let shape = indexed(&hexagon.mesh);
        assert_eq!(shape.vertex_count(), 4);
        assert_eq!(shape.triangle_count(), 3);
        assert!(shape.is_well_formed());

        let (x, y) = shape.last_vertex().unwrap();
        assert_approx_eq!(x, 0.0, 1e-6);
        assert_approx_eq!(y, 0.5, 1e-6);

        let spiral = &scene.items[1];
        assert_eq!(spiral.mode, DrawMode::LineStrip);
        assert_eq!(spiral.color, DEFAULT_SHAPE_COLOR);
        assert_eq!(spiral.mesh.vertex_count(), 128);
    }

    #[test]
    fn nested_groups() {
        let scene = SceneLoader::load_from_str(
            r#"{
                items: [{
                    shape: { group: [
                        { shape: { rectangle: { width: 1, height: 1 } }, transforms: [{ translate: [-1, 0] }] },
                        { shape: { group: [
                            { shape: { triangle: { radius: 0.3 } } },
                            { shape: { star: { radius: 0.3, points: 5, center: [0.5, 0.5] } } },
                        ] } },
                    ] },
                }],
            }"#,
        )
        .unwrap();

        let shape = indexed(&scene.items[0].mesh);

        assert_eq!(shape.vertex_count(), 4 + 3 + 11);
        assert_eq!(&shape.vertices[0..2], &[-1.0, 0.0]);
        assert_eq!(&shape.indices[6..9], &[4, 5, 6]);
        assert!(shape.is_well_formed());
        assert_eq!(scene.items[0].mode, DrawMode::Fill);
    }

    #[test]
    fn rejects_filled_spiral() {
        let res = SceneLoader::load_from_str(
            r#"{ items: [{ mode: "fill", shape: { spiral: { radius: 1, loops: 1 } } }] }"#,
        );

        assert!(matches!(res, Err(LoaderError::Other(_))));
    }

    #[test]
    fn rejects_grouped_spiral() {
        let res = SceneLoader::load_from_str(
            r#"{ items: [{ shape: { group: [{ shape: { spiral: { radius: 1, loops: 1 } } }] } }] }"#,
        );

        assert!(matches!(res, Err(LoaderError::Other(_))));
    }

    #[test]
    fn rejects_removing_sides_of_non_fans() {
        for src in [
            r#"{ items: [{ shape: { rectangle: { width: 2, height: 1 } }, transforms: [{ remove_sides: 1 }] }] }"#,
            r#"{ items: [{ shape: { triangle: { radius: 1 } }, transforms: [{ remove_sides: 1 }] }] }"#,
            r#"{ items: [{
                shape: { group: [
                    { shape: { polygon: { radius: 1, sides: 5 } } },
                    { shape: { polygon: { radius: 1, sides: 5, center: [2, 0] } } },
                ] },
                transforms: [{ remove_sides: 1 }],
            }] }"#,
        ] {
            assert!(matches!(
                SceneLoader::load_from_str(src),
                Err(LoaderError::Other(_))
            ));
        }
    }

    #[test]
    fn removes_sides_of_grouped_fans() {
        let scene = SceneLoader::load_from_str(
            r#"{ items: [{ shape: { group: [
                { shape: { star: { radius: 1, points: 4 } }, transforms: [{ translate: [1, 0] }, { remove_sides: 2 }] },
                { shape: { rectangle: { width: 1, height: 1 } } },
            ] } }] }"#,
        )
        .unwrap();

        let shape = indexed(&scene.items[0].mesh);

        assert_eq!(shape.vertex_count(), 7 + 4);
        assert_eq!(shape.triangle_count(), 6 + 2);
        assert!(shape.is_well_formed());
    }

    #[test]
    fn viewport_option() {
        let scene =
            SceneLoader::load_from_str(r#"{ viewport: "stretch", items: [] }"#).unwrap();
        assert_eq!(scene.viewport, Viewport::Stretch);

        let scene = SceneLoader::load_from_str("{ items: [] }").unwrap();
        assert_eq!(scene.viewport, Viewport::Square);
    }

    #[test]
    fn rejects_degenerate_fans() {
        for src in [
            r#"{ items: [{ shape: { polygon: { radius: 1, sides: 2 } } }] }"#,
            r#"{ items: [{ shape: { star: { radius: 1, points: 1 } } }] }"#,
            r#"{ items: [{ shape: { group: [] } }] }"#,
        ] {
            assert!(matches!(
                SceneLoader::load_from_str(src),
                Err(LoaderError::Other(_))
            ));
        }
    }

    #[test]
    fn format_errors() {
        assert!(matches!(
            SceneLoader::load_from_str("{ items: [{ shape: { hexagon: {} } }] }"),
            Err(LoaderError::Format(_))
        ));
        assert!(matches!(
            SceneLoader::load_from_str("{ items: [{ shape: { rectangle: { width: 1 } } }] }"),
            Err(LoaderError::Format(_))
        ));
    }

    #[test]
    fn bundled_scene_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../scenes/pinwheel.json5");
        let scene = SceneLoader::load_from_path(path).unwrap();

        assert_eq!(scene.name, "pinwheel");
        assert_eq!(scene.items.len(), 3);
        assert_eq!(scene.items[0].mesh.vertex_count(), 4 * 11);
        assert_eq!(scene.items[1].mode, DrawMode::Wireframe);
        assert_eq!(scene.items[2].mode, DrawMode::LineStrip);
        assert_eq!(scene.items[2].mesh.vertex_count(), 4 * 64);
    }

    #[test]
    fn missing_file() {
        let res = SceneLoader::load_from_path("does/not/exist.json5");

        assert!(matches!(res, Err(LoaderError::Input(_))));
    }
}
