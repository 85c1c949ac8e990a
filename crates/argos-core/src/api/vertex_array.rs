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

//! The vertex array object owner.

use crate::api::buffer::Buffer;
use crate::traits::GlDriver;
use crate::{GlEnum, GlName};
use std::mem;
use std::sync::Arc;

/// Owns zero or one vertex array object name.
///
/// Buffers attached through [`set_element_buffer`](VertexArray::set_element_buffer)
/// and [`set_vertex_buffer`](VertexArray::set_vertex_buffer) are borrowed,
/// never owned: the attachment lives in driver state, and the referenced
/// buffer must outlive its use there.
#[derive(Debug)]
pub struct VertexArray {
    driver: Arc<dyn GlDriver>,
    name: GlName,
}

impl VertexArray {
    /// Creates an owner, minting a name immediately when `create` is true.
    pub fn new(driver: Arc<dyn GlDriver>, create: bool) -> Self {
        let mut vertex_array = Self::from_raw(driver, 0);
        if create {
            vertex_array.create();
        }
        vertex_array
    }

    /// Adopts an externally-created name. Name `0` yields an empty owner.
    pub fn from_raw(driver: Arc<dyn GlDriver>, name: GlName) -> Self {
        Self { driver, name }
    }

    /// Releases any currently owned name, then mints a fresh one.
    pub fn create(&mut self) {
        self.reset(0);
        self.name = self.driver.create_vertex_array();
    }

    /// Deletes the currently owned name (no-op when empty) and adopts
    /// `name`.
    pub fn reset(&mut self, name: GlName) {
        if self.name != 0 {
            self.driver.delete_vertex_array(self.name);
        }
        self.name = name;
    }

    /// Detaches and returns the owned name without deleting it.
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

    /// Binds the vertex array to the rendering state.
    pub fn bind(&self) {
        self.driver.bind_vertex_array(self.name);
    }

    /// Enables a generic attribute.
    pub fn enable_attrib(&self, index: u32) {
        self.driver.enable_vertex_array_attrib(self.name, index);
    }

    /// Disables a generic attribute.
    pub fn disable_attrib(&self, index: u32) {
        self.driver.disable_vertex_array_attrib(self.name, index);
    }

    /// Attaches `buffer` as the element array buffer.
    pub fn set_element_buffer(&self, buffer: &Buffer) {
        self.driver
            .vertex_array_element_buffer(self.name, buffer.name());
    }

    /// Associates an attribute with a vertex buffer binding point.
    pub fn set_attrib_binding(&self, attrib_index: u32, binding_index: u32) {
        self.driver
            .vertex_array_attrib_binding(self.name, attrib_index, binding_index);
    }

    /// Sets the instance divisor of a binding point.
    pub fn set_binding_divisor(&self, binding_index: u32, divisor: u32) {
        self.driver
            .vertex_array_binding_divisor(self.name, binding_index, divisor);
    }

    /// Attaches a vertex buffer to a binding point.
    pub fn set_vertex_buffer(&self, binding_index: u32, buffer: &Buffer, offset: u64, stride: i32) {
        self.driver
            .vertex_array_vertex_buffer(self.name, binding_index, buffer.name(), offset, stride);
    }

    /// Attaches consecutive binding points starting at `first` from
    /// parallel slices of equal length.
    pub fn set_vertex_buffers(
        &self,
        first: u32,
        buffers: &[&Buffer],
        offsets: &[u64],
        strides: &[i32],
    ) {
        debug_assert_eq!(buffers.len(), offsets.len());
        debug_assert_eq!(buffers.len(), strides.len());
        let names: Vec<GlName> = buffers.iter().map(|buffer| buffer.name()).collect();
        self.driver
            .vertex_array_vertex_buffers(self.name, first, &names, offsets, strides);
    }

    /// Detaches `count` consecutive binding points starting at `first`.
    pub fn clear_vertex_buffers(&self, first: u32, count: usize) {
        self.driver
            .clear_vertex_array_vertex_buffers(self.name, first, count);
    }

    /// Describes a floating-point attribute's layout within its binding.
    pub fn set_attrib_format(
        &self,
        attrib_index: u32,
        size: i32,
        component_type: GlEnum,
        normalized: bool,
        relative_offset: u32,
    ) {
        self.driver.vertex_array_attrib_format(
            self.name,
            attrib_index,
            size,
            component_type,
            normalized,
            relative_offset,
        );
    }

    /// Describes an integer attribute's layout (no normalization).
    pub fn set_attrib_integer_format(
        &self,
        attrib_index: u32,
        size: i32,
        component_type: GlEnum,
        relative_offset: u32,
    ) {
        self.driver.vertex_array_attrib_integer_format(
            self.name,
            attrib_index,
            size,
            component_type,
            relative_offset,
        );
    }

    /// Describes a double-precision attribute's layout.
    pub fn set_attrib_double_format(
        &self,
        attrib_index: u32,
        size: i32,
        component_type: GlEnum,
        relative_offset: u32,
    ) {
        self.driver.vertex_array_attrib_double_format(
            self.name,
            attrib_index,
            size,
            component_type,
            relative_offset,
        );
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        self.reset(0);
    }
}
