//! Type conversions between shader interface types and Vulkan types.

use ash::vk;

use crate::interface::ShaderInterface;
use crate::resource::{BindType, ShaderStageFlags};

/// Convert a bind type to the Vulkan descriptor type it is bound as.
pub fn convert_bind_type(bind_type: BindType) -> vk::DescriptorType {
    match bind_type {
        BindType::UniformBuffer => vk::DescriptorType::UNIFORM_BUFFER,
        BindType::StorageBuffer => vk::DescriptorType::STORAGE_BUFFER,
        BindType::Sampler => vk::DescriptorType::COMBINED_IMAGE_SAMPLER,
        BindType::Image => vk::DescriptorType::STORAGE_IMAGE,
    }
}

/// Convert ShaderStageFlags to Vulkan shader stage flags.
pub fn convert_shader_stage_flags(stages: ShaderStageFlags) -> vk::ShaderStageFlags {
    let mut result = vk::ShaderStageFlags::empty();

    if stages.contains(ShaderStageFlags::VERTEX) {
        result |= vk::ShaderStageFlags::VERTEX;
    }
    if stages.contains(ShaderStageFlags::FRAGMENT) {
        result |= vk::ShaderStageFlags::FRAGMENT;
    }
    if stages.contains(ShaderStageFlags::COMPUTE) {
        result |= vk::ShaderStageFlags::COMPUTE;
    }

    result
}

impl ShaderInterface {
    /// Descriptor set layout bindings of every input placed in `set`.
    ///
    /// Bindings are ordered by binding index and are visible to `stages`.
    pub fn descriptor_set_layout_bindings(
        &self,
        set: u32,
        stages: ShaderStageFlags,
    ) -> Vec<vk::DescriptorSetLayoutBinding<'static>> {
        let stage_flags = convert_shader_stage_flags(stages);

        let mut bindings: Vec<vk::DescriptorSetLayoutBinding<'static>> = self
            .inputs()
            .filter(|input| input.descriptor_location().set == set)
            .map(|input| {
                vk::DescriptorSetLayoutBinding::default()
                    .binding(input.descriptor_location().binding)
                    .descriptor_type(convert_bind_type(input.bind_type()))
                    .descriptor_count(1)
                    .stage_flags(stage_flags)
            })
            .collect();
        bindings.sort_by_key(|binding| binding.binding);
        bindings
    }
}
