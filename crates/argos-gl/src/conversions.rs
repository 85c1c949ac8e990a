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

//! Mapping from the core crate's typed vocabulary to native constants.

use argos_core::{
    AccessPolicy, BufferTarget, IndexType, MapAccessFlags, PrimitiveMode, ShaderStage,
    StorageFlags, TextureTarget, UsageHint, VaryingCaptureMode,
};
use gl::types::{GLbitfield, GLenum};

/// A local extension trait converting core types into native constants.
/// This sidesteps Rust's orphan rules while keeping an idiomatic
/// `.into_gl()` syntax at the call sites.
pub trait IntoGl<T> {
    /// Consumes self and returns the native constant.
    fn into_gl(self) -> T;
}

impl IntoGl<GLenum> for BufferTarget {
    fn into_gl(self) -> GLenum {
        match self {
            BufferTarget::Array => gl::ARRAY_BUFFER,
            BufferTarget::CopyRead => gl::COPY_READ_BUFFER,
            BufferTarget::CopyWrite => gl::COPY_WRITE_BUFFER,
            BufferTarget::ElementArray => gl::ELEMENT_ARRAY_BUFFER,
            BufferTarget::PixelPack => gl::PIXEL_PACK_BUFFER,
            BufferTarget::PixelUnpack => gl::PIXEL_UNPACK_BUFFER,
            BufferTarget::Texture => gl::TEXTURE_BUFFER,
            BufferTarget::TransformFeedback => gl::TRANSFORM_FEEDBACK_BUFFER,
            BufferTarget::Uniform => gl::UNIFORM_BUFFER,
        }
    }
}

impl IntoGl<GLenum> for UsageHint {
    fn into_gl(self) -> GLenum {
        match self {
            UsageHint::StreamDraw => gl::STREAM_DRAW,
            UsageHint::StreamRead => gl::STREAM_READ,
            UsageHint::StreamCopy => gl::STREAM_COPY,
            UsageHint::StaticDraw => gl::STATIC_DRAW,
            UsageHint::StaticRead => gl::STATIC_READ,
            UsageHint::StaticCopy => gl::STATIC_COPY,
            UsageHint::DynamicDraw => gl::DYNAMIC_DRAW,
            UsageHint::DynamicRead => gl::DYNAMIC_READ,
            UsageHint::DynamicCopy => gl::DYNAMIC_COPY,
        }
    }
}

impl IntoGl<GLenum> for AccessPolicy {
    fn into_gl(self) -> GLenum {
        match self {
            AccessPolicy::ReadOnly => gl::READ_ONLY,
            AccessPolicy::WriteOnly => gl::WRITE_ONLY,
            AccessPolicy::ReadWrite => gl::READ_WRITE,
        }
    }
}

impl IntoGl<GLenum> for ShaderStage {
    fn into_gl(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::TessControl => gl::TESS_CONTROL_SHADER,
            ShaderStage::TessEvaluation => gl::TESS_EVALUATION_SHADER,
            ShaderStage::Geometry => gl::GEOMETRY_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
            ShaderStage::Compute => gl::COMPUTE_SHADER,
        }
    }
}

impl IntoGl<GLenum> for TextureTarget {
    fn into_gl(self) -> GLenum {
        match self {
            TextureTarget::D1 => gl::TEXTURE_1D,
            TextureTarget::D2 => gl::TEXTURE_2D,
            TextureTarget::D3 => gl::TEXTURE_3D,
            TextureTarget::D1Array => gl::TEXTURE_1D_ARRAY,
            TextureTarget::D2Array => gl::TEXTURE_2D_ARRAY,
            TextureTarget::Rectangle => gl::TEXTURE_RECTANGLE,
            TextureTarget::CubeMap => gl::TEXTURE_CUBE_MAP,
            TextureTarget::CubeMapArray => gl::TEXTURE_CUBE_MAP_ARRAY,
            TextureTarget::Buffer => gl::TEXTURE_BUFFER,
            TextureTarget::D2Multisample => gl::TEXTURE_2D_MULTISAMPLE,
            TextureTarget::D2MultisampleArray => gl::TEXTURE_2D_MULTISAMPLE_ARRAY,
        }
    }
}

impl IntoGl<GLenum> for PrimitiveMode {
    fn into_gl(self) -> GLenum {
        match self {
            PrimitiveMode::Points => gl::POINTS,
            PrimitiveMode::Lines => gl::LINES,
            PrimitiveMode::LineLoop => gl::LINE_LOOP,
            PrimitiveMode::LineStrip => gl::LINE_STRIP,
            PrimitiveMode::Triangles => gl::TRIANGLES,
            PrimitiveMode::TriangleStrip => gl::TRIANGLE_STRIP,
            PrimitiveMode::TriangleFan => gl::TRIANGLE_FAN,
            PrimitiveMode::LinesAdjacency => gl::LINES_ADJACENCY,
            PrimitiveMode::LineStripAdjacency => gl::LINE_STRIP_ADJACENCY,
            PrimitiveMode::TrianglesAdjacency => gl::TRIANGLES_ADJACENCY,
            PrimitiveMode::TriangleStripAdjacency => gl::TRIANGLE_STRIP_ADJACENCY,
            PrimitiveMode::Patches => gl::PATCHES,
        }
    }
}

impl IntoGl<GLenum> for IndexType {
    fn into_gl(self) -> GLenum {
        match self {
            IndexType::Uint8 => gl::UNSIGNED_BYTE,
            IndexType::Uint16 => gl::UNSIGNED_SHORT,
            IndexType::Uint32 => gl::UNSIGNED_INT,
        }
    }
}

impl IntoGl<GLenum> for VaryingCaptureMode {
    fn into_gl(self) -> GLenum {
        match self {
            VaryingCaptureMode::Interleaved => gl::INTERLEAVED_ATTRIBS,
            VaryingCaptureMode::Separate => gl::SEPARATE_ATTRIBS,
        }
    }
}

impl IntoGl<GLbitfield> for StorageFlags {
    fn into_gl(self) -> GLbitfield {
        let mut bits = 0;
        if self.contains(StorageFlags::DYNAMIC_STORAGE) {
            bits |= gl::DYNAMIC_STORAGE_BIT;
        }
        if self.contains(StorageFlags::MAP_READ) {
            bits |= gl::MAP_READ_BIT;
        }
        if self.contains(StorageFlags::MAP_WRITE) {
            bits |= gl::MAP_WRITE_BIT;
        }
        if self.contains(StorageFlags::MAP_PERSISTENT) {
            bits |= gl::MAP_PERSISTENT_BIT;
        }
        if self.contains(StorageFlags::MAP_COHERENT) {
            bits |= gl::MAP_COHERENT_BIT;
        }
        if self.contains(StorageFlags::CLIENT_STORAGE) {
            bits |= gl::CLIENT_STORAGE_BIT;
        }
        bits
    }
}

impl IntoGl<GLbitfield> for MapAccessFlags {
    fn into_gl(self) -> GLbitfield {
        let mut bits = 0;
        if self.contains(MapAccessFlags::READ) {
            bits |= gl::MAP_READ_BIT;
        }
        if self.contains(MapAccessFlags::WRITE) {
            bits |= gl::MAP_WRITE_BIT;
        }
        if self.contains(MapAccessFlags::PERSISTENT) {
            bits |= gl::MAP_PERSISTENT_BIT;
        }
        if self.contains(MapAccessFlags::COHERENT) {
            bits |= gl::MAP_COHERENT_BIT;
        }
        if self.contains(MapAccessFlags::INVALIDATE_RANGE) {
            bits |= gl::MAP_INVALIDATE_RANGE_BIT;
        }
        if self.contains(MapAccessFlags::INVALIDATE_BUFFER) {
            bits |= gl::MAP_INVALIDATE_BUFFER_BIT;
        }
        if self.contains(MapAccessFlags::FLUSH_EXPLICIT) {
            bits |= gl::MAP_FLUSH_EXPLICIT_BIT;
        }
        if self.contains(MapAccessFlags::UNSYNCHRONIZED) {
            bits |= gl::MAP_UNSYNCHRONIZED_BIT;
        }
        bits
    }
}
