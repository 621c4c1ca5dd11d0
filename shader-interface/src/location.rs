//! Backend descriptor locations.
//!
//! A [`DescriptorLocation`] tells a backend where a resource is written in
//! its descriptor sets. Locations are handed out by a [`LocationAllocator`]
//! while an interface is built and stored in a [`DescriptorLocationMap`]
//! aligned with the input table.

use crate::input::InputIndex;
use crate::resource::Resource;

/// Descriptor set and binding index of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DescriptorLocation {
    /// Descriptor set index.
    pub set: u32,
    /// Binding index within the set.
    pub binding: u32,
}

impl DescriptorLocation {
    pub fn new(set: u32, binding: u32) -> Self {
        Self { set, binding }
    }
}

/// Source of descriptor locations.
///
/// Called once per resource, in resource-list order (pass resources before
/// batch resources).
pub trait LocationAllocator {
    /// Pick the location of the next resource.
    fn allocate(&mut self, resource: &Resource) -> DescriptorLocation;
}

impl<F> LocationAllocator for F
where
    F: FnMut(&Resource) -> DescriptorLocation,
{
    fn allocate(&mut self, resource: &Resource) -> DescriptorLocation {
        self(resource)
    }
}

/// Hands out consecutive binding indices within one descriptor set.
#[derive(Debug, Clone, Default)]
pub struct SequentialLocations {
    set: u32,
    next_binding: u32,
}

impl SequentialLocations {
    /// Start at binding 0 of set 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at binding 0 of the given set.
    pub fn in_set(set: u32) -> Self {
        Self {
            set,
            next_binding: 0,
        }
    }

    /// Binding index the next resource receives.
    pub fn next_binding(&self) -> u32 {
        self.next_binding
    }
}

impl LocationAllocator for SequentialLocations {
    fn allocate(&mut self, _resource: &Resource) -> DescriptorLocation {
        let location = DescriptorLocation::new(self.set, self.next_binding);
        self.next_binding += 1;
        location
    }
}

/// Descriptor locations stored at the positions of their input records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescriptorLocationMap {
    locations: Box<[DescriptorLocation]>,
}

impl DescriptorLocationMap {
    /// Finish a map whose every slot has been assigned.
    ///
    /// # Panics
    ///
    /// Panics if a slot was left unassigned.
    pub(crate) fn from_slots(slots: Vec<Option<DescriptorLocation>>) -> Self {
        let locations = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| {
                    panic!("input {index} has no descriptor location assigned")
                })
            })
            .collect();
        Self { locations }
    }

    /// Location of the record at `index`.
    pub fn get(&self, index: InputIndex) -> DescriptorLocation {
        self.locations[index.index()]
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Locations in input table order.
    pub fn as_slice(&self) -> &[DescriptorLocation] {
        &self.locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_locations() {
        let res = Resource::uniform_buffer(0, "Globals");
        let mut allocator = SequentialLocations::in_set(2);

        assert_eq!(allocator.allocate(&res), DescriptorLocation::new(2, 0));
        assert_eq!(allocator.allocate(&res), DescriptorLocation::new(2, 1));
        assert_eq!(allocator.next_binding(), 2);
    }

    #[test]
    fn test_closure_allocator() {
        let mut allocator =
            |res: &Resource| DescriptorLocation::new(res.slot, res.slot * 10);
        let res = Resource::sampler(3, "tex");

        assert_eq!(allocator.allocate(&res), DescriptorLocation::new(3, 30));
    }

    #[test]
    fn test_map_from_slots() {
        let map = DescriptorLocationMap::from_slots(vec![
            Some(DescriptorLocation::new(0, 1)),
            Some(DescriptorLocation::new(0, 0)),
        ]);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(InputIndex(0)), DescriptorLocation::new(0, 1));
        assert_eq!(map.get(InputIndex(1)), DescriptorLocation::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "input 1 has no descriptor location")]
    fn test_map_with_missing_slot_panics() {
        DescriptorLocationMap::from_slots(vec![Some(DescriptorLocation::default()), None]);
    }
}
