//! Classification pass over a resource list.

use crate::resource::{BindType, Resource};

/// Per-group resource counts and the image slot offset of a resource list.
///
/// Samplers and images share the texture group of the input table. Images
/// are shifted by [`image_offset`](Self::image_offset) so their bindings land
/// after every sampler binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ResourceCounts {
    pub ubo_count: usize,
    pub combined_image_sampler_count: usize,
    pub ssbo_count: usize,
    pub max_sampler_slot: Option<u32>,
}

impl ResourceCounts {
    /// Count resources per group in a single pass.
    pub fn classify<'a>(resources: impl IntoIterator<Item = &'a Resource>) -> Self {
        let mut counts = Self::default();

        for res in resources {
            match res.bind_type {
                BindType::UniformBuffer => counts.ubo_count += 1,
                BindType::StorageBuffer => counts.ssbo_count += 1,
                BindType::Image => counts.combined_image_sampler_count += 1,
                BindType::Sampler => {
                    counts.combined_image_sampler_count += 1;
                    counts.max_sampler_slot = counts.max_sampler_slot.max(Some(res.slot));
                }
            }
        }

        counts
    }

    /// One past the highest sampler slot, or 0 without samplers.
    ///
    /// `None` when a sampler sits at `u32::MAX` and no offset can separate
    /// images from it.
    pub fn image_offset(&self) -> Option<u32> {
        match self.max_sampler_slot {
            Some(slot) => slot.checked_add(1),
            None => Some(0),
        }
    }

    pub fn total(&self) -> usize {
        self.ubo_count + self.combined_image_sampler_count + self.ssbo_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Qualifier;

    #[test]
    fn test_classify_counts_groups() {
        let resources = [
            Resource::uniform_buffer(0, "Globals"),
            Resource::sampler(2, "albedo"),
            Resource::sampler(0, "normal"),
            Resource::image(0, Qualifier::WRITE, "out_img"),
            Resource::storage_buffer(0, Qualifier::READ, "lights[]"),
        ];

        let counts = ResourceCounts::classify(&resources);
        assert_eq!(counts.ubo_count, 1);
        assert_eq!(counts.combined_image_sampler_count, 3);
        assert_eq!(counts.ssbo_count, 1);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.max_sampler_slot, Some(2));
        assert_eq!(counts.image_offset(), Some(3));
    }

    #[test]
    fn test_classify_without_samplers() {
        let resources = [
            Resource::image(1, Qualifier::WRITE, "img_output"),
            Resource::storage_buffer(0, Qualifier::WRITE, "data0[]"),
        ];

        let counts = ResourceCounts::classify(&resources);
        assert_eq!(counts.max_sampler_slot, None);
        assert_eq!(counts.image_offset(), Some(0));
        assert_eq!(counts.combined_image_sampler_count, 1);
    }

    #[test]
    fn test_image_offset_past_last_slot() {
        let resources = [Resource::sampler(u32::MAX, "tex")];

        let counts = ResourceCounts::classify(&resources);
        assert_eq!(counts.max_sampler_slot, Some(u32::MAX));
        assert_eq!(counts.image_offset(), None);
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(ResourceCounts::classify(&[] as &[Resource]), ResourceCounts::default());
    }
}
