//! Resolved binding tables of a shader.
//!
//! A [`ShaderInterface`] is built once from a [`ShaderCreateInfo`] and is
//! immutable afterwards. Building runs as one pipeline:
//!
//! 1. Classify resources and compute the image slot offset.
//! 2. Populate the input table group by group (uniform buffers, then
//!    samplers and images, then storage buffers), packing names into the
//!    name buffer.
//! 3. Sort each group by name.
//! 4. Walk the resource list again and store each resource's descriptor
//!    location at the position of its input record.
//!
//! Samplers and images share one binding namespace in the input table.
//! Images are shifted past the highest sampler slot so that sampler slot 0
//! and image slot 0 resolve to different bindings:
//!
//! ```
//! use redlilium_shader_interface::{BindType, Qualifier, ShaderCreateInfo, ShaderInterface};
//!
//! let info = ShaderCreateInfo::new("compute")
//!     .uniform_buf(0, "Globals")
//!     .sampler(0, "tex")
//!     .image(0, Qualifier::WRITE, "img_out")
//!     .storage_buf(0, Qualifier::READ_WRITE, "data");
//! let interface = ShaderInterface::new(&info);
//!
//! assert_eq!(interface.image_offset(), 1);
//! let image = interface.input_by_slot(BindType::Image, 0).unwrap();
//! assert_eq!(image.name(), "img_out");
//! assert_eq!(image.binding(), 1);
//! ```

use std::fmt;
use std::ops::Range;

use crate::counts::ResourceCounts;
use crate::create_info::ShaderCreateInfo;
use crate::input::{InputGroup, InputIndex, ShaderInput};
use crate::location::{
    DescriptorLocation, DescriptorLocationMap, LocationAllocator, SequentialLocations,
};
use crate::name_buffer::NameBuffer;
use crate::profiling::{profile_plot, profile_scope, profile_scope_dynamic};
use crate::resource::{BindType, Resource};

/// Binding tables of a single shader.
pub struct ShaderInterface {
    name: String,
    inputs: Box<[ShaderInput]>,
    names: NameBuffer,
    ubo_len: usize,
    texture_len: usize,
    ssbo_len: usize,
    image_offset: u32,
    descriptor_locations: DescriptorLocationMap,
}

impl ShaderInterface {
    /// Build the interface, assigning consecutive bindings of descriptor set 0
    /// in resource-list order.
    ///
    /// # Panics
    ///
    /// Panics if `info` fails [`ShaderCreateInfo::validate`].
    pub fn new(info: &ShaderCreateInfo) -> Self {
        Self::with_allocator(info, &mut SequentialLocations::new())
    }

    /// Build the interface, asking `allocator` for each resource's descriptor
    /// location in resource-list order.
    ///
    /// # Panics
    ///
    /// Panics if `info` fails [`ShaderCreateInfo::validate`].
    pub fn with_allocator<A>(info: &ShaderCreateInfo, allocator: &mut A) -> Self
    where
        A: LocationAllocator + ?Sized,
    {
        profile_scope!("shader_interface_build");
        profile_scope_dynamic!(info.name());

        if let Err(err) = info.validate() {
            panic!("invalid shader interface `{}`: {err}", info.name());
        }

        let counts = ResourceCounts::classify(info.resources());
        let image_offset = counts
            .image_offset()
            .unwrap_or_else(|| unreachable!("validated sampler slots leave room for images"));
        let (inputs, names) = build_inputs(info, &counts, image_offset);

        let mut interface = Self {
            name: info.name().to_string(),
            inputs,
            names,
            ubo_len: counts.ubo_count,
            texture_len: counts.combined_image_sampler_count,
            ssbo_len: counts.ssbo_count,
            image_offset,
            descriptor_locations: DescriptorLocationMap::default(),
        };
        interface.descriptor_locations = interface.resolve_locations(info, allocator);

        profile_plot!("shader_interface_inputs", interface.len());
        log::debug!(
            "Built shader interface `{}`: {} uniform buffers, {} textures, {} storage buffers, image offset {}",
            interface.name,
            interface.ubo_len,
            interface.texture_len,
            interface.ssbo_len,
            interface.image_offset
        );

        interface
    }

    /// Assign descriptor locations in resource-list order.
    fn resolve_locations<A>(
        &self,
        info: &ShaderCreateInfo,
        allocator: &mut A,
    ) -> DescriptorLocationMap
    where
        A: LocationAllocator + ?Sized,
    {
        let mut slots = vec![None; self.inputs.len()];
        for res in info.resources() {
            let index = self.find_by_slot(res.bind_type, res.slot).unwrap_or_else(|| {
                panic!(
                    "{} `{}` at slot {} is missing from the input table of `{}`",
                    res.bind_type, res.name, res.slot, self.name
                )
            });
            slots[index.index()] = Some(allocator.allocate(res));
        }
        DescriptorLocationMap::from_slots(slots)
    }

    /// Name of the shader this interface was built for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of input records.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Offset added to image slots; one past the highest sampler slot.
    pub fn image_offset(&self) -> u32 {
        self.image_offset
    }

    /// Number of uniform buffers.
    pub fn ubo_len(&self) -> usize {
        self.ubo_len
    }

    /// Number of samplers and images.
    pub fn texture_len(&self) -> usize {
        self.texture_len
    }

    /// Number of storage buffers.
    pub fn ssbo_len(&self) -> usize {
        self.ssbo_len
    }

    /// Packed names of all inputs.
    pub fn name_buffer(&self) -> &NameBuffer {
        &self.names
    }

    /// Descriptor locations, aligned with the input table.
    pub fn descriptor_locations(&self) -> &DescriptorLocationMap {
        &self.descriptor_locations
    }

    /// Positions of the input table occupied by `group`.
    pub fn group_range(&self, group: InputGroup) -> Range<usize> {
        match group {
            InputGroup::UniformBuffers => 0..self.ubo_len,
            InputGroup::Textures => self.ubo_len..self.ubo_len + self.texture_len,
            InputGroup::StorageBuffers => {
                let start = self.ubo_len + self.texture_len;
                start..start + self.ssbo_len
            }
        }
    }

    /// Record at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not belong to this interface.
    pub fn input(&self, index: InputIndex) -> InputRef<'_> {
        assert!(
            index.index() < self.inputs.len(),
            "input {} out of range for `{}` ({} inputs)",
            index.index(),
            self.name,
            self.inputs.len()
        );
        InputRef {
            interface: self,
            index,
        }
    }

    /// All records in table order.
    pub fn inputs(&self) -> impl ExactSizeIterator<Item = InputRef<'_>> + '_ {
        (0..self.inputs.len()).map(move |i| InputRef {
            interface: self,
            index: InputIndex(i as u32),
        })
    }

    /// Look up a record by name in every group.
    ///
    /// Groups are searched in table order, so a uniform buffer shadows a
    /// texture or storage buffer of the same name.
    pub fn input_by_name(&self, name: &str) -> Option<InputRef<'_>> {
        InputGroup::ALL
            .into_iter()
            .find_map(|group| self.find_by_name(group, name))
            .map(|index| self.input(index))
    }

    /// Look up a uniform buffer by name.
    pub fn ubo_by_name(&self, name: &str) -> Option<InputRef<'_>> {
        self.find_by_name(InputGroup::UniformBuffers, name)
            .map(|index| self.input(index))
    }

    /// Look up a sampler or image by name.
    pub fn texture_by_name(&self, name: &str) -> Option<InputRef<'_>> {
        self.find_by_name(InputGroup::Textures, name)
            .map(|index| self.input(index))
    }

    /// Look up a storage buffer by name.
    pub fn ssbo_by_name(&self, name: &str) -> Option<InputRef<'_>> {
        self.find_by_name(InputGroup::StorageBuffers, name)
            .map(|index| self.input(index))
    }

    /// Look up a record by the bind type and slot it was declared with.
    pub fn input_by_slot(&self, bind_type: BindType, slot: u32) -> Option<InputRef<'_>> {
        self.find_by_slot(bind_type, slot)
            .map(|index| self.input(index))
    }

    /// Look up the record of a declared resource.
    pub fn input_by_resource(&self, resource: &Resource) -> Option<InputRef<'_>> {
        self.input_by_slot(resource.bind_type, resource.slot)
    }

    /// Descriptor location of the record at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not belong to this interface.
    pub fn descriptor_location(&self, index: InputIndex) -> DescriptorLocation {
        assert!(
            index.index() < self.descriptor_locations.len(),
            "input {} out of range for `{}` ({} inputs)",
            index.index(),
            self.name,
            self.descriptor_locations.len()
        );
        self.descriptor_locations.get(index)
    }

    /// Descriptor location of the resource declared with `bind_type` and `slot`.
    ///
    /// Returns `None` if the shader declares no such resource.
    pub fn descriptor_location_by_slot(
        &self,
        bind_type: BindType,
        slot: u32,
    ) -> Option<DescriptorLocation> {
        self.find_by_slot(bind_type, slot)
            .map(|index| self.descriptor_locations.get(index))
    }

    /// Descriptor location of a resource of the description this interface
    /// was built from.
    ///
    /// # Panics
    ///
    /// Panics if the resource is not part of this interface.
    pub fn descriptor_location_by_resource(&self, resource: &Resource) -> DescriptorLocation {
        self.descriptor_location_by_slot(resource.bind_type, resource.slot)
            .unwrap_or_else(|| {
                panic!(
                    "{} `{}` at slot {} is not part of shader interface `{}`",
                    resource.bind_type, resource.name, resource.slot, self.name
                )
            })
    }

    fn find_by_name(&self, group: InputGroup, name: &str) -> Option<InputIndex> {
        let range = self.group_range(group);
        let inputs = &self.inputs[range.clone()];
        let pos = inputs.partition_point(|input| self.names.get(input.name) < name);
        inputs
            .get(pos)
            .filter(|input| self.names.get(input.name) == name)
            .map(|_| InputIndex((range.start + pos) as u32))
    }

    fn find_by_slot(&self, bind_type: BindType, slot: u32) -> Option<InputIndex> {
        let (group, binding) = match bind_type {
            BindType::UniformBuffer => (InputGroup::UniformBuffers, slot),
            BindType::StorageBuffer => (InputGroup::StorageBuffers, slot),
            BindType::Sampler if slot >= self.image_offset => return None,
            BindType::Sampler => (InputGroup::Textures, slot),
            BindType::Image => (InputGroup::Textures, slot.checked_add(self.image_offset)?),
        };
        let range = self.group_range(group);
        self.inputs[range.clone()]
            .iter()
            .position(|input| input.binding == binding)
            .map(|pos| InputIndex((range.start + pos) as u32))
    }
}

impl fmt::Debug for ShaderInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderInterface")
            .field("name", &self.name)
            .field("image_offset", &self.image_offset)
            .field("inputs", &DebugInputs(self))
            .finish()
    }
}

struct DebugInputs<'a>(&'a ShaderInterface);

impl fmt::Debug for DebugInputs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.inputs()).finish()
    }
}

/// A record of a [`ShaderInterface`] together with its position.
#[derive(Clone, Copy)]
pub struct InputRef<'a> {
    interface: &'a ShaderInterface,
    index: InputIndex,
}

impl<'a> InputRef<'a> {
    /// Position in the input table.
    pub fn index(&self) -> InputIndex {
        self.index
    }

    /// The raw record.
    pub fn input(&self) -> &'a ShaderInput {
        &self.interface.inputs[self.index.index()]
    }

    /// Name of the resource.
    pub fn name(&self) -> &'a str {
        self.interface.names.get(self.input().name)
    }

    /// Binding number after collision avoidance.
    pub fn location(&self) -> u32 {
        self.input().location
    }

    /// Binding number used when binding the resource.
    pub fn binding(&self) -> u32 {
        self.input().binding
    }

    /// Group of the input table holding the record.
    pub fn group(&self) -> InputGroup {
        let index = self.index.index();
        if index < self.interface.ubo_len {
            InputGroup::UniformBuffers
        } else if index < self.interface.ubo_len + self.interface.texture_len {
            InputGroup::Textures
        } else {
            InputGroup::StorageBuffers
        }
    }

    /// Bind type the resource was declared with.
    pub fn bind_type(&self) -> BindType {
        match self.group() {
            InputGroup::UniformBuffers => BindType::UniformBuffer,
            InputGroup::StorageBuffers => BindType::StorageBuffer,
            InputGroup::Textures if self.binding() < self.interface.image_offset => {
                BindType::Sampler
            }
            InputGroup::Textures => BindType::Image,
        }
    }

    /// Slot the resource was declared with.
    pub fn slot(&self) -> u32 {
        match self.bind_type() {
            BindType::Image => self.binding() - self.interface.image_offset,
            _ => self.binding(),
        }
    }

    /// Descriptor location of the resource.
    pub fn descriptor_location(&self) -> DescriptorLocation {
        self.interface.descriptor_locations.get(self.index)
    }
}

impl PartialEq for InputRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.interface, other.interface) && self.index == other.index
    }
}

impl Eq for InputRef<'_> {}

impl fmt::Debug for InputRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputRef")
            .field("index", &self.index.index())
            .field("name", &self.name())
            .field("bind_type", &self.bind_type())
            .field("location", &self.location())
            .field("binding", &self.binding())
            .field("descriptor_location", &self.descriptor_location())
            .finish()
    }
}

/// Populate the input table in group order and sort each group by name.
fn build_inputs(
    info: &ShaderCreateInfo,
    counts: &ResourceCounts,
    image_offset: u32,
) -> (Box<[ShaderInput]>, NameBuffer) {
    let mut inputs = Vec::with_capacity(counts.total());
    let mut names = NameBuffer::with_size(info.interface_names_size());

    for res in info.resources() {
        if res.bind_type == BindType::UniformBuffer {
            push_input(&mut inputs, &mut names, res, res.slot);
        }
    }

    for res in info.resources() {
        match res.bind_type {
            BindType::Sampler => push_input(&mut inputs, &mut names, res, res.slot),
            BindType::Image => {
                push_input(&mut inputs, &mut names, res, res.slot + image_offset)
            }
            BindType::UniformBuffer | BindType::StorageBuffer => {}
        }
    }

    for res in info.resources() {
        if res.bind_type == BindType::StorageBuffer {
            push_input(&mut inputs, &mut names, res, res.slot);
        }
    }

    let ubo_end = counts.ubo_count;
    let texture_end = ubo_end + counts.combined_image_sampler_count;
    for range in [0..ubo_end, ubo_end..texture_end, texture_end..inputs.len()] {
        // Stable, so equal names keep population order.
        inputs[range].sort_by(|a, b| names.get(a.name).cmp(names.get(b.name)));
    }

    (inputs.into_boxed_slice(), names)
}

fn push_input(
    inputs: &mut Vec<ShaderInput>,
    names: &mut NameBuffer,
    res: &Resource,
    binding: u32,
) {
    log::trace!("{} `{}` slot {} -> binding {}", res.bind_type, res.name, res.slot, binding);
    inputs.push(ShaderInput {
        name: names.push(&res.name),
        location: binding,
        binding,
    });
}
