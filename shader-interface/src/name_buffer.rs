//! Packed storage for resource names.
//!
//! Every name of an interface lives in one contiguous buffer. Records refer
//! to their name through a [`NameRef`] byte range instead of owning a string.

use std::ops::Range;

/// Byte range of a name inside a [`NameBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NameRef {
    /// Byte offset into the buffer.
    pub offset: u32,
    /// Length of the name in bytes.
    pub len: u32,
}

impl NameRef {
    /// Byte range covered by the name.
    pub fn range(self) -> Range<usize> {
        let start = self.offset as usize;
        start..start + self.len as usize
    }
}

/// Fixed-size buffer holding names back to back.
///
/// The size is reserved upfront and never grows; writing more bytes than
/// reserved is a caller bug and panics.
#[derive(Clone, Default)]
pub struct NameBuffer {
    names: String,
    reserved: usize,
}

impl NameBuffer {
    /// Reserve a buffer for exactly `size` name bytes.
    pub fn with_size(size: usize) -> Self {
        Self {
            names: String::with_capacity(size),
            reserved: size,
        }
    }

    /// Append a name and return its location.
    ///
    /// # Panics
    ///
    /// Panics if the name does not fit in the reserved size.
    pub fn push(&mut self, name: &str) -> NameRef {
        let offset = self.names.len();
        assert!(
            offset + name.len() <= self.reserved,
            "name buffer overflow: `{name}` needs {} bytes at offset {offset}, only {} reserved",
            name.len(),
            self.reserved
        );
        self.names.push_str(name);
        NameRef {
            offset: offset as u32,
            len: name.len() as u32,
        }
    }

    /// Resolve a name reference.
    pub fn get(&self, name: NameRef) -> &str {
        &self.names[name.range()]
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of bytes reserved at creation.
    pub fn reserved(&self) -> usize {
        self.reserved
    }

    /// Raw contents of the buffer.
    pub fn as_bytes(&self) -> &[u8] {
        self.names.as_bytes()
    }
}

impl std::fmt::Debug for NameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameBuffer")
            .field("names", &self.names)
            .field("reserved", &self.reserved)
            .finish()
    }
}
