// Copyright 2026 argos
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The buffer object owner.

use crate::api::flags::{MapAccessFlags, StorageFlags};
use crate::traits::GlDriver;
use crate::GlName;
use std::mem;
use std::sync::Arc;

/// A binding point a buffer can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// Vertex attribute data.
    Array,
    /// Source of server-side copies.
    CopyRead,
    /// Destination of server-side copies.
    CopyWrite,
    /// Vertex index data.
    ElementArray,
    /// Destination of pixel readbacks.
    PixelPack,
    /// Source of pixel uploads.
    PixelUnpack,
    /// Backing store for buffer textures.
    Texture,
    /// Transform feedback capture.
    TransformFeedback,
    /// Uniform block storage.
    Uniform,
}

/// Usage pattern hint for a mutable allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageHint {
    /// Written once, drawn a few times.
    StreamDraw,
    /// Read back once, queried a few times.
    StreamRead,
    /// Copied once, used a few times.
    StreamCopy,
    /// Written once, drawn many times.
    StaticDraw,
    /// Read back once, queried many times.
    StaticRead,
    /// Copied once, used many times.
    StaticCopy,
    /// Rewritten repeatedly, drawn many times.
    DynamicDraw,
    /// Read back repeatedly, queried many times.
    DynamicRead,
    /// Copied repeatedly, used many times.
    DynamicCopy,
}

/// Access policy for a whole-buffer mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessPolicy {
    /// The mapping is only read.
    ReadOnly,
    /// The mapping is only written.
    WriteOnly,
    /// The mapping is read and written.
    ReadWrite,
}

/// Owns zero or one buffer object name.
///
/// Deletes the owned name on drop. Move-only: two `Buffer` values never
/// refer to the same live name.
#[derive(Debug)]
pub struct Buffer {
    driver: Arc<dyn GlDriver>,
    name: GlName,
}

impl Buffer {
    /// Creates an owner, minting a name immediately when `create` is true.
    pub fn new(driver: Arc<dyn GlDriver>, create: bool) -> Self {
        let mut buffer = Self::from_raw(driver, 0);
        if create {
            buffer.create();
        }
        buffer
    }

    /// Adopts an externally-created name without minting a new one.
    /// Name `0` yields an empty owner.
    pub fn from_raw(driver: Arc<dyn GlDriver>, name: GlName) -> Self {
        Self { driver, name }
    }

    /// Releases any currently owned name, then mints a fresh one.
    pub fn create(&mut self) {
        self.reset(0);
        self.name = self.driver.create_buffer();
    }

    /// Deletes the currently owned name (no-op when empty) and adopts
    /// `name`. The single destructive transition; the destructor funnels
    /// through it.
    pub fn reset(&mut self, name: GlName) {
        if self.name != 0 {
            self.driver.delete_buffer(self.name);
        }
        self.name = name;
    }

    /// Detaches and returns the owned name without deleting it. The caller
    /// becomes responsible for the name; this owner is left empty.
    pub fn release(&mut self) -> GlName {
        mem::replace(&mut self.name, 0)
    }

    /// The owned name, or `0` when empty.
    pub fn name(&self) -> GlName {
        self.name
    }

    /// Whether a name is currently owned.
    pub fn is_valid(&self) -> bool {
        self.name != 0
    }

    /// Binds the buffer to `target`.
    pub fn bind(&self, target: BufferTarget) {
        self.driver.bind_buffer(target, self.name);
    }

    /// Creates immutable storage of `size` bytes, optionally uploading
    /// initial contents. When `data` is present it must cover `size` bytes.
    pub fn storage(&self, size: u64, data: Option<&[u8]>, flags: StorageFlags) {
        self.driver.buffer_storage(self.name, size, data, flags);
    }

    /// Allocates mutable storage and uploads `data`.
    pub fn data(&self, data: &[u8], usage: UsageHint) {
        self.driver.buffer_data(self.name, data, usage);
    }

    /// Allocates mutable storage of `size` bytes with undefined contents.
    pub fn data_size(&self, size: u64, usage: UsageHint) {
        self.driver.buffer_data_size(self.name, size, usage);
    }

    /// Allocates mutable storage from a typed slice.
    pub fn data_of<T: bytemuck::NoUninit>(&self, data: &[T], usage: UsageHint) {
        self.data(bytemuck::cast_slice(data), usage);
    }

    /// Uploads `data` at `offset` into the existing allocation.
    pub fn set_sub_data(&self, offset: u64, data: &[u8]) {
        self.driver.buffer_sub_data(self.name, offset, data);
    }

    /// Uploads a typed slice at `offset` into the existing allocation.
    pub fn set_sub_data_of<T: bytemuck::NoUninit>(&self, offset: u64, data: &[T]) {
        self.set_sub_data(offset, bytemuck::cast_slice(data));
    }

    /// Copies `size` bytes out of `src`'s allocation into this one.
    pub fn copy_sub_data_from(&self, src: &Buffer, src_offset: u64, dst_offset: u64, size: u64) {
        self.driver
            .copy_buffer_sub_data(src.name, self.name, src_offset, dst_offset, size);
    }

    /// Maps the whole allocation. Returns the driver's pointer; null means
    /// the map failed. The pointer is invalidated by [`unmap`](Self::unmap)
    /// and by any destructive transition of this owner.
    pub fn map(&self, access: AccessPolicy) -> *mut u8 {
        self.driver.map_buffer(self.name, access)
    }

    /// Maps `length` bytes starting at `offset`.
    pub fn map_range(&self, offset: u64, length: u64, access: MapAccessFlags) -> *mut u8 {
        self.driver.map_buffer_range(self.name, offset, length, access)
    }

    /// Flushes a modified range of a [`FLUSH_EXPLICIT`](MapAccessFlags::FLUSH_EXPLICIT)
    /// mapping.
    pub fn flush_range(&self, offset: u64, length: u64) {
        self.driver.flush_mapped_buffer_range(self.name, offset, length);
    }

    /// Unmaps the buffer. A `false` return means the mapped store was
    /// corrupted while mapped and the contents are undefined.
    pub fn unmap(&self) -> bool {
        self.driver.unmap_buffer(self.name)
    }

    /// Reads `out.len()` bytes back from the allocation at `offset`.
    pub fn get_sub_data(&self, offset: u64, out: &mut [u8]) {
        self.driver.get_buffer_sub_data(self.name, offset, out);
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        self.reset(0);
    }
}
