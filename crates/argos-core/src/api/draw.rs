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

//! Stateless draw-call forwarding.
//!
//! No owner is involved: draws consume whatever vertex array, program and
//! transform feedback state is currently bound. Failures are reported only
//! through the driver's ambient error channel.

use crate::traits::GlDriver;

/// The primitive topology of a draw or a transform feedback capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveMode {
    /// Isolated points.
    Points,
    /// Isolated line segments.
    Lines,
    /// Closed line strip.
    LineLoop,
    /// Open line strip.
    LineStrip,
    /// Isolated triangles.
    Triangles,
    /// Triangle strip.
    TriangleStrip,
    /// Triangle fan.
    TriangleFan,
    /// Lines with adjacency for geometry shaders.
    LinesAdjacency,
    /// Line strip with adjacency for geometry shaders.
    LineStripAdjacency,
    /// Triangles with adjacency for geometry shaders.
    TrianglesAdjacency,
    /// Triangle strip with adjacency for geometry shaders.
    TriangleStripAdjacency,
    /// Patches for the tessellation stages.
    Patches,
}

/// The storage type of indices in an element array buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexType {
    /// 8-bit unsigned indices.
    Uint8,
    /// 16-bit unsigned indices.
    Uint16,
    /// 32-bit unsigned indices.
    Uint32,
}

/// Draws `count` vertices starting at `first` from the bound vertex array.
pub fn draw_arrays(driver: &dyn GlDriver, mode: PrimitiveMode, first: i32, count: i32) {
    driver.draw_arrays(mode, first, count);
}

/// Instanced variant of [`draw_arrays`].
pub fn draw_arrays_instanced(
    driver: &dyn GlDriver,
    mode: PrimitiveMode,
    first: i32,
    count: i32,
    instances: i32,
) {
    driver.draw_arrays_instanced(mode, first, count, instances);
}

/// Draws `count` indices from the bound element array buffer. `first` is a
/// byte offset into that buffer, as the native call interprets it.
pub fn draw_elements(
    driver: &dyn GlDriver,
    mode: PrimitiveMode,
    first: i32,
    count: i32,
    index_type: IndexType,
) {
    driver.draw_elements(mode, count, index_type, first as usize);
}

/// Instanced variant of [`draw_elements`].
pub fn draw_elements_instanced(
    driver: &dyn GlDriver,
    mode: PrimitiveMode,
    first: i32,
    count: i32,
    index_type: IndexType,
    instances: i32,
) {
    driver.draw_elements_instanced(mode, count, index_type, first as usize, instances);
}
