/// Vertex and fragment stage sources linked into one program.
#[derive(Debug, Copy, Clone)]
pub struct ShaderPair {
    pub vertex: &'static str,
    pub fragment: &'static str,
}

pub const COLOR_UNIFORM: &str = "uniform_color";
pub const PROJECTION_UNIFORM: &str = "projection";

/// Positions straight to clip space, one colour per draw.
pub const FLAT: ShaderPair = ShaderPair {
    vertex: r#"
        #version 330 core

        layout (location = 0) in vec2 pos;

        void main() {
            gl_Position = vec4(pos.xy, 0.0f, 1.0f);
        }
    "#,
    fragment: UNIFORM_FRAGMENT,
};

/// Like [`FLAT`] but positions go through an orthographic `projection` matrix.
pub const PROJECTED: ShaderPair = ShaderPair {
    vertex: r#"
        #version 330 core

        layout (location = 0) in vec2 pos;

        uniform mat4 projection;

        void main() {
            gl_Position = projection * vec4(pos.xy, 0.0f, 1.0f);
        }
    "#,
    fragment: UNIFORM_FRAGMENT,
};

/// Interleaved position and colour attributes, no uniforms.
pub const COLORED: ShaderPair = ShaderPair {
    vertex: r#"
        #version 330 core

        layout (location = 0) in vec2 pos;
        layout (location = 1) in vec3 color;

        out vec3 vertex_color;

        void main() {
            gl_Position = vec4(pos, 0.0f, 1.0f);
            vertex_color = color;
        }
    "#,
    fragment: r#"
        #version 330 core

        in vec3 vertex_color;

        out vec4 color;

        void main() {
            color = vec4(vertex_color, 1.0f);
        }
    "#,
};

const UNIFORM_FRAGMENT: &str = r#"
    #version 330 core

    out vec4 color;

    uniform vec3 uniform_color;

    void main() {
        color = vec4(uniform_color, 1.0f);
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_declare_uniforms() {
        for pair in [FLAT, PROJECTED] {
            assert!(pair.vertex.contains("#version 330 core"));
            assert!(pair.fragment.contains(&format!("uniform vec3 {COLOR_UNIFORM};")));
        }

        assert!(PROJECTED
            .vertex
            .contains(&format!("uniform mat4 {PROJECTION_UNIFORM};")));
        assert!(!FLAT.vertex.contains(PROJECTION_UNIFORM));
    }

    #[test]
    fn colored_passes_color_through() {
        assert!(COLORED.vertex.contains("layout (location = 1) in vec3 color;"));
        assert!(COLORED.fragment.contains("in vec3 vertex_color;"));
        assert!(!COLORED.fragment.contains(COLOR_UNIFORM));
    }
}
