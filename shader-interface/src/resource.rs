//! Shader resource declarations.
//!
//! A [`Resource`] is what a shader description says about one bound
//! resource: its bind type, the slot the application binds it to, and the
//! name the shader source uses for it.

use std::fmt;

/// Category of a shader-visible resource.
///
/// Slots are numbered independently per bind type, except that samplers and
/// images end up in one shared namespace once an interface is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindType {
    /// Uniform buffer (read-only, small, frequently updated).
    UniformBuffer,

    /// Storage buffer (read-write, larger data).
    StorageBuffer,

    /// Sampled texture with its sampler state.
    Sampler,

    /// Storage image (load/store access).
    Image,
}

impl BindType {
    /// All bind types, in declaration order.
    pub const ALL: [BindType; 4] = [
        BindType::UniformBuffer,
        BindType::StorageBuffer,
        BindType::Sampler,
        BindType::Image,
    ];
}

impl fmt::Display for BindType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UniformBuffer => write!(f, "uniform buffer"),
            Self::StorageBuffer => write!(f, "storage buffer"),
            Self::Sampler => write!(f, "sampler"),
            Self::Image => write!(f, "image"),
        }
    }
}

bitflags::bitflags! {
    /// Memory access qualifiers of storage images and storage buffers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Qualifier: u32 {
        /// No aliasing with other resources.
        const RESTRICT = 1 << 0;
        /// Shader reads from the resource.
        const READ = 1 << 1;
        /// Shader writes to the resource.
        const WRITE = 1 << 2;
        /// Shader reads and writes the resource.
        const READ_WRITE = Self::READ.bits() | Self::WRITE.bits();
    }
}

bitflags::bitflags! {
    /// Shader stages that can access a binding.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShaderStageFlags: u32 {
        /// Vertex shader stage.
        const VERTEX = 1 << 0;
        /// Fragment shader stage.
        const FRAGMENT = 1 << 1;
        /// Compute shader stage.
        const COMPUTE = 1 << 2;
    }
}

/// A single resource declared by a shader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Type of the resource.
    pub bind_type: BindType,

    /// Application-facing slot, unique within `bind_type`.
    pub slot: u32,

    /// Name used by the shader source.
    ///
    /// For storage buffers this is the block name without any array suffix.
    pub name: String,

    /// Access qualifiers. Empty for uniform buffers and samplers.
    pub qualifiers: Qualifier,
}

impl Resource {
    /// Create a uniform buffer declaration.
    pub fn uniform_buffer(slot: u32, name: impl Into<String>) -> Self {
        Self {
            bind_type: BindType::UniformBuffer,
            slot,
            name: name.into(),
            qualifiers: Qualifier::empty(),
        }
    }

    /// Create a sampler declaration.
    pub fn sampler(slot: u32, name: impl Into<String>) -> Self {
        Self {
            bind_type: BindType::Sampler,
            slot,
            name: name.into(),
            qualifiers: Qualifier::empty(),
        }
    }

    /// Create a storage image declaration.
    pub fn image(slot: u32, qualifiers: Qualifier, name: impl Into<String>) -> Self {
        Self {
            bind_type: BindType::Image,
            slot,
            name: name.into(),
            qualifiers,
        }
    }

    /// Create a storage buffer declaration.
    ///
    /// Declarations such as `"data_out[]"` describe an unsized array member;
    /// the resource is registered under the block name `"data_out"`.
    pub fn storage_buffer(slot: u32, qualifiers: Qualifier, name: impl Into<String>) -> Self {
        let mut name = name.into();
        if let Some(bracket) = name.find('[') {
            name.truncate(bracket);
        }
        Self {
            bind_type: BindType::StorageBuffer,
            slot,
            name,
            qualifiers,
        }
    }

    /// Number of bytes this resource occupies in a name buffer.
    pub fn name_len(&self) -> usize {
        self.name.len()
    }
}
