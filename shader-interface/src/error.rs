//! Shader interface error types.

use thiserror::Error;

use crate::resource::BindType;

/// Inconsistencies in a shader resource description.
///
/// These are caller bugs. [`ShaderInterface::new`](crate::ShaderInterface::new)
/// refuses to build from a description that produces one of these; use
/// [`ShaderCreateInfo::validate`](crate::ShaderCreateInfo::validate) to check
/// a description upfront.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterfaceError {
    /// Two resources of the same bind type claim the same slot.
    #[error("{bind_type} slot {slot} is declared by both `{first}` and `{second}`")]
    DuplicateSlot {
        bind_type: BindType,
        slot: u32,
        first: String,
        second: String,
    },
    /// The declared name buffer size differs from the sum of resource name lengths.
    #[error("name buffer declares {declared} bytes but resource names need {required}")]
    NameBufferSizeMismatch { declared: usize, required: usize },
    /// A sampler slot leaves no binding above it for images.
    #[error("sampler `{name}` at slot {slot} leaves no binding for images above it")]
    SamplerSlotOutOfRange { name: String, slot: u32 },
    /// An image slot does not fit once shifted past the sampler slots.
    #[error("image `{name}` at slot {slot} overflows with image offset {image_offset}")]
    SlotOutOfRange {
        name: String,
        slot: u32,
        image_offset: u32,
    },
}

pub type InterfaceResult<T> = Result<T, InterfaceError>;
