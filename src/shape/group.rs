use super::Shape;

/// Merges shapes into one buffer pair, shifting each shape's indices by the
/// number of vertices already merged before it.
///
/// Vertices are concatenated in input order without deduplication.
///
/// # Panics
///
/// Panics if `shapes` is empty.
pub fn group(shapes: &[&Shape]) -> Shape {
    let (first, rest) = match shapes.split_first() {
        Some(split) => split,
        None => panic!("group needs at least one shape"),
    };

    let mut result = (*first).clone();
    let mut offset = first.vertex_count() as u32;

    for shape in rest {
        result.vertices.extend_from_slice(&shape.vertices);
        result
            .indices
            .extend(shape.indices.iter().map(|index| index + offset));

        offset += shape.vertex_count() as u32;
    }

    result
}
