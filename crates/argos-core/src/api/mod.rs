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

//! The owner types and the typed vocabulary of the driver boundary.
//!
//! One module per native object kind, each pairing the owner with the
//! closed enums its operations take:
//!
//! - **[`buffer`]**: [`Buffer`] and the buffer target/usage/access enums.
//! - **[`texture`]**: [`Texture`] and [`TextureTarget`].
//! - **[`shader`]**: [`Shader`] and [`ShaderStage`].
//! - **[`program`]**: [`Program`], [`UniformValue`], [`VaryingCaptureMode`].
//! - **[`vertex_array`]**: [`VertexArray`].
//! - **[`transform_feedback`]**: [`TransformFeedback`].
//! - **[`draw`]**: stateless draw calls, [`PrimitiveMode`], [`IndexType`].
//! - **[`flags`]**: the buffer storage and mapping flag sets.

pub mod buffer;
pub mod draw;
pub mod flags;
pub mod program;
pub mod shader;
pub mod texture;
pub mod transform_feedback;
pub mod vertex_array;

pub use self::buffer::{AccessPolicy, Buffer, BufferTarget, UsageHint};
pub use self::draw::{
    draw_arrays, draw_arrays_instanced, draw_elements, draw_elements_instanced, IndexType,
    PrimitiveMode,
};
pub use self::flags::{MapAccessFlags, StorageFlags};
pub use self::program::{Program, UniformValue, VaryingCaptureMode};
pub use self::shader::{Shader, ShaderStage};
pub use self::texture::{Texture, TextureTarget};
pub use self::transform_feedback::TransformFeedback;
pub use self::vertex_array::VertexArray;
