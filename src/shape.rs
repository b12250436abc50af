mod factory;
mod group;
mod transform;

pub use factory::{make_polygon, make_rectangle, make_spiral, make_star, make_triangle};
pub use group::group;
pub use transform::{remove_sides, rotate, rotate_about_last, translate};

/// Flat list of `x, y` pairs plus a triangle list indexing into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl Shape {
    pub fn new(vertices: Vec<f32>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Last appended vertex. For fans this is the centre.
    pub fn last_vertex(&self) -> Option<(f32, f32)> {
        match self.vertices.as_slice() {
            [.., x, y] => Some((*x, *y)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Checks the layout invariants: paired coordinates, whole triangles and
    /// indices addressing existing vertices.
    pub fn is_well_formed(&self) -> bool {
        let count = self.vertex_count() as u32;

        self.vertices.len() % 2 == 0
            && self.indices.len() % 3 == 0
            && self.indices.iter().all(|&i| i < count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let shape = make_rectangle(2.0, 1.0);

        assert_eq!(shape.vertex_count(), 4);
        assert_eq!(shape.triangle_count(), 2);
        assert_eq!(shape.last_vertex(), Some((2.0, 0.0)));
        assert!(shape.is_well_formed());

        assert_eq!(Shape::default().last_vertex(), None);
    }

    #[test]
    fn malformed_shapes_are_detected() {
        assert!(!Shape::new(vec![0.0, 0.0, 1.0], vec![]).is_well_formed());
        assert!(!Shape::new(vec![0.0, 0.0], vec![0, 0, 1]).is_well_formed());
        assert!(!Shape::new(vec![0.0, 0.0], vec![0, 0]).is_well_formed());
    }
}
