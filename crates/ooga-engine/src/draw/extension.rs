use bytemuck::Pod;

/// Opaque handle to a backend-compiled pixel shader.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShaderHandle(pub u64);

/// Custom shading payload forwarded untouched to the backend.
///
/// `constants` is the raw constant-buffer contents; its layout is a contract
/// between the caller and its shader.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderExtension {
    pub shader: Option<ShaderHandle>,
    pub constants: Vec<u8>,
}

impl ShaderExtension {
    pub fn new(shader: ShaderHandle) -> Self {
        Self { shader: Some(shader), constants: Vec::new() }
    }

    /// Copies `value` into the constant buffer.
    pub fn with_constants<T: Pod>(mut self, value: &T) -> Self {
        self.constants.clear();
        self.constants.extend_from_slice(bytemuck::bytes_of(value));
        self
    }
}
