//! # RedLilium Shader Interface
//!
//! Binding tables that map the resources a shader declares to the places a
//! backend binds them.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`ShaderCreateInfo`] - Declared resources of a shader (pass and batch scoped)
//! - [`ShaderInterface`] - Name-sorted input table with lookup by name and by slot
//! - [`DescriptorLocationMap`] - Backend descriptor locations aligned with the input table
//! - Vulkan descriptor set layout bindings (`vulkan-backend` feature)
//!
//! ## Example
//!
//! ```
//! use redlilium_shader_interface::{BindType, Qualifier, ShaderCreateInfo, ShaderInterface};
//!
//! let info = ShaderCreateInfo::new("gpu_compute_ssbo_binding_test")
//!     .storage_buf(0, Qualifier::WRITE, "data0[]")
//!     .storage_buf(1, Qualifier::WRITE, "data1[]");
//! let interface = ShaderInterface::new(&info);
//!
//! let location = interface
//!     .descriptor_location_by_slot(BindType::StorageBuffer, 1)
//!     .expect("shader declares storage buffer 1");
//! assert_eq!(location.binding, 1);
//! assert_eq!(interface.ssbo_by_name("data0").unwrap().binding(), 0);
//! ```

mod counts;
pub mod create_info;
pub mod error;
pub mod input;
pub mod interface;
pub mod location;
pub mod name_buffer;
pub mod profiling;
pub mod resource;
#[cfg(feature = "vulkan-backend")]
pub mod vulkan;

// Re-export main types for convenience
pub use create_info::{Resources, ShaderCreateInfo};
pub use error::{InterfaceError, InterfaceResult};
pub use input::{InputGroup, InputIndex, ShaderInput};
pub use interface::{InputRef, ShaderInterface};
pub use location::{
    DescriptorLocation, DescriptorLocationMap, LocationAllocator, SequentialLocations,
};
pub use name_buffer::{NameBuffer, NameRef};
pub use resource::{BindType, Qualifier, Resource, ShaderStageFlags};

/// Shader interface library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the shader interface subsystem.
pub fn init() {
    log::info!("RedLilium Shader Interface v{} initialized", VERSION);
}
