//! Input table records.

use crate::name_buffer::NameRef;

/// Position of a record in a shader interface's input table.
///
/// Positions key the descriptor location map; they stay valid for the
/// lifetime of the interface that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InputIndex(pub(crate) u32);

impl InputIndex {
    /// Get the raw position.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One resource of a shader interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShaderInput {
    /// Name of the resource inside the interface's name buffer.
    pub name: NameRef,
    /// Binding number after collision avoidance.
    pub location: u32,
    /// Binding number used when binding the resource.
    pub binding: u32,
}

/// Contiguous group of the input table.
///
/// The table stores uniform buffers first, then samplers and images, then
/// storage buffers. Each group is sorted by name on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputGroup {
    UniformBuffers,
    Textures,
    StorageBuffers,
}

impl InputGroup {
    /// Groups in table order.
    pub const ALL: [InputGroup; 3] = [
        InputGroup::UniformBuffers,
        InputGroup::Textures,
        InputGroup::StorageBuffers,
    ];
}
