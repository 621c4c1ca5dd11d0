//! Shared shader descriptions for the interface integration tests.

use redlilium_shader_interface::{Qualifier, Resource, ShaderCreateInfo};

/// Route `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Shader Descriptions
// ============================================================================

/// One resource of every bind type, all at slot 0.
pub fn mixed_shader() -> ShaderCreateInfo {
    ShaderCreateInfo::new("mixed")
        .uniform_buf(0, "Globals")
        .sampler(0, "tex")
        .image(0, Qualifier::WRITE, "img_out")
        .storage_buf(0, Qualifier::READ_WRITE, "data")
}

/// Two storage buffers and nothing else.
pub fn ssbo_binding_shader() -> ShaderCreateInfo {
    ShaderCreateInfo::new("gpu_compute_ssbo_binding_test")
        .storage_buf(0, Qualifier::WRITE, "data0[]")
        .storage_buf(1, Qualifier::WRITE, "data1[]")
}

/// A single storage image above slot 0 without samplers.
pub fn image_only_shader() -> ShaderCreateInfo {
    ShaderCreateInfo::new("gpu_compute_2d_test").image(1, Qualifier::WRITE, "img_output")
}

/// Pass and batch resources with interleaved samplers and images.
pub fn deferred_lighting_shader() -> ShaderCreateInfo {
    ShaderCreateInfo::new("deferred_lighting")
        .uniform_buf(2, "Lights")
        .uniform_buf(0, "Camera")
        .sampler(3, "gbuffer_normal")
        .image(0, Qualifier::WRITE, "out_radiance")
        .sampler(1, "gbuffer_albedo")
        .image(2, Qualifier::READ, "shadow_atlas")
        .sampler(0, "depth_tx")
        .storage_buf(1, Qualifier::READ, "light_grid[]")
        .storage_buf(0, Qualifier::READ, "light_indices[]")
        .with_batch_resource(Resource::uniform_buffer(1, "Object"))
        .with_batch_resource(Resource::sampler(4, "material_tx"))
        .with_batch_resource(Resource::image(1, Qualifier::READ_WRITE, "probe_cache"))
        .with_batch_resource(Resource::storage_buffer(
            2,
            Qualifier::READ,
            "instance_data[]",
        ))
}

/// Many resources of every type, declared in scrambled slot order.
pub fn large_shader(per_type: u32) -> ShaderCreateInfo {
    let mut info = ShaderCreateInfo::new("large");
    for i in 0..per_type {
        let slot = (i * 7) % per_type;
        info = info
            .uniform_buf(slot, format!("ubo_{slot}"))
            .sampler(slot, format!("sampler_{slot}"))
            .image(slot, Qualifier::READ_WRITE, format!("image_{slot}"))
            .with_batch_resource(Resource::storage_buffer(
                slot,
                Qualifier::READ,
                format!("ssbo_{slot}[]"),
            ));
    }
    info
}
