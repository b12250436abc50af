use std::ffi::{c_char, CString};

use cgmath::Matrix4;
use gl::types::{GLenum, GLint, GLuint};
use thiserror::Error;

pub struct ProgramBuilder<'a> {
    vert: &'a str,
    frag: &'a str,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new(vert_src: &'a str, frag_src: &'a str) -> Self {
        Self {
            vert: vert_src,
            frag: frag_src,
        }
    }

    pub fn build(self) -> Result<Program, PBError> {
        let vert = CString::new(self.vert).map_err(|_| PBError::InvalidSource("vertex"))?;
        let frag = CString::new(self.frag).map_err(|_| PBError::InvalidSource("fragment"))?;

        let vert = compile_shader(&vert, gl::VERTEX_SHADER)?;
        let frag = match compile_shader(&frag, gl::FRAGMENT_SHADER) {
            Ok(frag) => frag,
            Err(e) => {
                unsafe { gl::DeleteShader(vert) };
                return Err(e);
            }
        };

        let mut success: GLint = 0;

        unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            gl::GetProgramiv(program, gl::LINK_STATUS, (&mut success) as *mut GLint);
            if success != gl::TRUE as GLint {
                let mut len: GLint = 0;
                gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, (&mut len) as *mut GLint);

                let mut buf = vec![0_u8; len.max(1) as usize];
                gl::GetProgramInfoLog(
                    program,
                    buf.len() as GLint,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );
                gl::DeleteProgram(program);

                return Err(PBError::Linking(info_log_to_string(&buf)));
            }

            log::debug!("linked shader program {program}");

            Ok(Program { id: program })
        }
    }
}

fn compile_shader(src: &CString, kind: GLenum) -> Result<GLuint, PBError> {
    let mut success: GLint = 0;

    unsafe {
        let shader = gl::CreateShader(kind);

        gl::ShaderSource(
            shader,
            1,
            (&src.as_ptr()) as *const *const c_char,
            std::ptr::null(),
        );

        gl::CompileShader(shader);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, (&mut success) as *mut GLint);
        if success != gl::TRUE as GLint {
            let mut len: GLint = 0;
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, (&mut len) as *mut GLint);

            let mut buf = vec![0_u8; len.max(1) as usize];
            gl::GetShaderInfoLog(
                shader,
                buf.len() as GLint,
                std::ptr::null_mut(),
                buf.as_mut_ptr() as *mut c_char,
            );
            gl::DeleteShader(shader);

            return Err(PBError::Compilation {
                stage: stage_name(kind),
                log: info_log_to_string(&buf),
            });
        }

        Ok(shader)
    }
}

fn stage_name(kind: GLenum) -> &'static str {
    match kind {
        gl::VERTEX_SHADER => "vertex",
        gl::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

/// Driver logs are NUL terminated, and some drivers add trailing newlines.
fn info_log_to_string(buf: &[u8]) -> String {
    let data = buf.split(|a| *a == 0).next().unwrap_or(buf);

    String::from_utf8_lossy(data).trim_end().to_string()
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("{0} shader source contains a NUL byte")]
    InvalidSource(&'static str),
    #[error("{stage} shader compilation failed:\n{log}")]
    Compilation { stage: &'static str, log: String },
    #[error("Program linking failed:\n{0}")]
    Linking(String),
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Location of a uniform, `None` if the program has no active uniform of that name.
    pub fn uniform_location(&self, name: &str) -> Option<GLint> {
        let name = CString::new(name).ok()?;
        let location = unsafe { gl::GetUniformLocation(self.id, name.as_ptr()) };

        (location >= 0).then_some(location)
    }

    /// Sets a `vec3` uniform on the bound program, go through
    /// [`GlRenderer::set_vec3`](crate::renderer::GlRenderer::set_vec3) to bind
    /// it first. Unknown names are ignored, as GL itself does for location -1.
    pub(crate) fn set_vec3(&self, name: &str, value: [f32; 3]) {
        if let Some(location) = self.uniform_location(name) {
            unsafe { gl::Uniform3f(location, value[0], value[1], value[2]) }
        }
    }

    pub(crate) fn set_mat4(&self, name: &str, value: &Matrix4<f32>) {
        if let Some(location) = self.uniform_location(name) {
            let data: &[f32; 16] = value.as_ref();

            unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, data.as_ptr()) }
        }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_stops_at_nul() {
        let buf = b"0:3(1): error: syntax error\n\0garbage";

        assert_eq!(info_log_to_string(buf), "0:3(1): error: syntax error");
    }

    #[test]
    fn info_log_without_nul() {
        assert_eq!(info_log_to_string(b"link error"), "link error");
        assert_eq!(info_log_to_string(b""), "");
    }

    #[test]
    fn nul_in_source_is_rejected_before_gl() {
        let res = ProgramBuilder::new("void main() {}\0", "void main() {}").build();

        assert!(matches!(res, Err(PBError::InvalidSource("vertex"))));
    }

    #[test]
    fn error_messages_carry_log() {
        let err = PBError::Compilation {
            stage: "fragment",
            log: "undeclared identifier".into(),
        };

        assert_eq!(
            err.to_string(),
            "fragment shader compilation failed:\nundeclared identifier"
        );
    }
}
