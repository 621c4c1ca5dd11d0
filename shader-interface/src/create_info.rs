//! Declarative shader resource descriptions.
//!
//! [`ShaderCreateInfo`] is the data a shader description hands to
//! [`ShaderInterface::new`](crate::ShaderInterface::new): resources bound
//! once per pass, resources bound per batch, and the total number of name
//! bytes needed to store every resource name.

use std::collections::HashMap;
use std::iter::Chain;
use std::slice;

use crate::counts::ResourceCounts;
use crate::error::{InterfaceError, InterfaceResult};
use crate::resource::{BindType, Qualifier, Resource};

/// Iterator over pass resources followed by batch resources.
pub type Resources<'a> = Chain<slice::Iter<'a, Resource>, slice::Iter<'a, Resource>>;

/// Resource description of a single shader.
///
/// # Example
///
/// ```
/// use redlilium_shader_interface::{Qualifier, ShaderCreateInfo};
///
/// let info = ShaderCreateInfo::new("blur")
///     .uniform_buf(0, "Globals")
///     .sampler(0, "source_tx")
///     .image(0, Qualifier::WRITE, "out_img");
///
/// assert_eq!(info.resource_count(), 3);
/// assert_eq!(info.interface_names_size(), 23);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShaderCreateInfo {
    name: String,
    pass_resources: Vec<Resource>,
    batch_resources: Vec<Resource>,
    interface_names_size: usize,
}

impl ShaderCreateInfo {
    /// Create an empty description for the named shader.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a description from resource lists prepared elsewhere.
    ///
    /// `interface_names_size` must equal the summed name length of every
    /// resource; [`validate`](Self::validate) reports a mismatch.
    pub fn from_parts(
        name: impl Into<String>,
        pass_resources: Vec<Resource>,
        batch_resources: Vec<Resource>,
        interface_names_size: usize,
    ) -> Self {
        Self {
            name: name.into(),
            pass_resources,
            batch_resources,
            interface_names_size,
        }
    }

    /// Add a pass-scoped resource.
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.interface_names_size += resource.name_len();
        self.pass_resources.push(resource);
        self
    }

    /// Add a batch-scoped resource.
    pub fn with_batch_resource(mut self, resource: Resource) -> Self {
        self.interface_names_size += resource.name_len();
        self.batch_resources.push(resource);
        self
    }

    /// Add a pass-scoped uniform buffer.
    pub fn uniform_buf(self, slot: u32, name: impl Into<String>) -> Self {
        self.with_resource(Resource::uniform_buffer(slot, name))
    }

    /// Add a pass-scoped sampler.
    pub fn sampler(self, slot: u32, name: impl Into<String>) -> Self {
        self.with_resource(Resource::sampler(slot, name))
    }

    /// Add a pass-scoped storage image.
    pub fn image(self, slot: u32, qualifiers: Qualifier, name: impl Into<String>) -> Self {
        self.with_resource(Resource::image(slot, qualifiers, name))
    }

    /// Add a pass-scoped storage buffer.
    pub fn storage_buf(self, slot: u32, qualifiers: Qualifier, name: impl Into<String>) -> Self {
        self.with_resource(Resource::storage_buffer(slot, qualifiers, name))
    }

    /// Name of the shader.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resources bound once per pass.
    pub fn pass_resources(&self) -> &[Resource] {
        &self.pass_resources
    }

    /// Resources bound per batch or draw.
    pub fn batch_resources(&self) -> &[Resource] {
        &self.batch_resources
    }

    /// Number of bytes needed to store every resource name.
    pub fn interface_names_size(&self) -> usize {
        self.interface_names_size
    }

    /// All resources: pass resources first, then batch resources.
    pub fn resources(&self) -> Resources<'_> {
        self.pass_resources.iter().chain(self.batch_resources.iter())
    }

    /// Total number of resources.
    pub fn resource_count(&self) -> usize {
        self.pass_resources.len() + self.batch_resources.len()
    }

    /// Check the description for inconsistencies a shader interface cannot be
    /// built from.
    pub fn validate(&self) -> InterfaceResult<()> {
        let required: usize = self.resources().map(Resource::name_len).sum();
        if required != self.interface_names_size {
            return Err(InterfaceError::NameBufferSizeMismatch {
                declared: self.interface_names_size,
                required,
            });
        }

        let mut claimed: HashMap<(BindType, u32), &str> = HashMap::new();
        for res in self.resources() {
            if let Some(first) = claimed.insert((res.bind_type, res.slot), &res.name) {
                return Err(InterfaceError::DuplicateSlot {
                    bind_type: res.bind_type,
                    slot: res.slot,
                    first: first.to_string(),
                    second: res.name.clone(),
                });
            }
        }

        let counts = ResourceCounts::classify(self.resources());
        let Some(image_offset) = counts.image_offset() else {
            let name = self
                .resources()
                .find(|r| r.bind_type == BindType::Sampler && r.slot == u32::MAX)
                .map(|r| r.name.clone())
                .unwrap_or_default();
            return Err(InterfaceError::SamplerSlotOutOfRange {
                name,
                slot: u32::MAX,
            });
        };
        for res in self.resources().filter(|r| r.bind_type == BindType::Image) {
            if res.slot.checked_add(image_offset).is_none() {
                return Err(InterfaceError::SlotOutOfRange {
                    name: res.name.clone(),
                    slot: res.slot,
                    image_offset,
                });
            }
        }

        Ok(())
    }
}
