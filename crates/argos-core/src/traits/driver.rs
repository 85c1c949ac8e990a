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

use crate::api::{
    AccessPolicy, BufferTarget, IndexType, MapAccessFlags, PrimitiveMode, ShaderStage,
    StorageFlags, TextureTarget, UsageHint, VaryingCaptureMode,
};
use crate::{GlEnum, GlName};
use std::fmt::Debug;

/// The native driver boundary: one method per wrapped entry point.
///
/// Every method forwards directly to the corresponding native call with no
/// retry and no owner-side validation beyond what the typed arguments
/// statically enforce. Except for the status and info-log queries, calls
/// report failure only through the driver's ambient error channel, which
/// this trait does not expose.
///
/// # Thread affinity
///
/// The wrapped API is context-bound: every name and every call on it is
/// only meaningful on the thread whose context created it. This contract is
/// inherited from the driver and is not enforced here, which is why the
/// trait carries no `Send`/`Sync` bounds.
pub trait GlDriver: Debug {
    // --- Buffers ---

    /// Mints a new buffer name (`glCreateBuffers`).
    fn create_buffer(&self) -> GlName;
    /// Deletes a buffer name (`glDeleteBuffers`).
    fn delete_buffer(&self, name: GlName);
    /// Binds a buffer to a target (`glBindBuffer`).
    fn bind_buffer(&self, target: BufferTarget, name: GlName);
    /// Creates immutable storage (`glNamedBufferStorage`). `data` may be
    /// absent for an uninitialized allocation.
    fn buffer_storage(&self, name: GlName, size: u64, data: Option<&[u8]>, flags: StorageFlags);
    /// Allocates mutable storage and uploads `data` (`glNamedBufferData`).
    fn buffer_data(&self, name: GlName, data: &[u8], usage: UsageHint);
    /// Allocates `size` bytes of mutable storage without an upload
    /// (`glNamedBufferData` with a null pointer).
    fn buffer_data_size(&self, name: GlName, size: u64, usage: UsageHint);
    /// Uploads into an existing allocation (`glNamedBufferSubData`).
    fn buffer_sub_data(&self, name: GlName, offset: u64, data: &[u8]);
    /// Copies between two buffer allocations (`glCopyNamedBufferSubData`).
    fn copy_buffer_sub_data(
        &self,
        src: GlName,
        dst: GlName,
        src_offset: u64,
        dst_offset: u64,
        size: u64,
    );
    /// Maps the whole allocation (`glMapNamedBuffer`). Returns the
    /// driver's pointer unchanged; null signals a failed map.
    fn map_buffer(&self, name: GlName, access: AccessPolicy) -> *mut u8;
    /// Maps a range of the allocation (`glMapNamedBufferRange`).
    fn map_buffer_range(
        &self,
        name: GlName,
        offset: u64,
        length: u64,
        access: MapAccessFlags,
    ) -> *mut u8;
    /// Flushes an explicitly-flushed mapped range
    /// (`glFlushMappedNamedBufferRange`).
    fn flush_mapped_buffer_range(&self, name: GlName, offset: u64, length: u64);
    /// Unmaps the buffer (`glUnmapNamedBuffer`). A `false` return means the
    /// mapped store was corrupted while mapped.
    fn unmap_buffer(&self, name: GlName) -> bool;
    /// Reads back part of the allocation (`glGetNamedBufferSubData`).
    fn get_buffer_sub_data(&self, name: GlName, offset: u64, out: &mut [u8]);

    // --- Textures ---

    /// Mints a new texture name of the given target (`glCreateTextures`).
    fn create_texture(&self, target: TextureTarget) -> GlName;
    /// Deletes a texture name (`glDeleteTextures`).
    fn delete_texture(&self, name: GlName);
    /// Binds a texture to a unit (`glBindTextureUnit`).
    fn bind_texture_unit(&self, unit: u32, name: GlName);
    /// `glTextureStorage1D`.
    fn texture_storage_1d(&self, name: GlName, levels: i32, internal_format: GlEnum, width: i32);
    /// `glTextureStorage2D`.
    fn texture_storage_2d(
        &self,
        name: GlName,
        levels: i32,
        internal_format: GlEnum,
        width: i32,
        height: i32,
    );
    /// `glTextureStorage3D`.
    fn texture_storage_3d(
        &self,
        name: GlName,
        levels: i32,
        internal_format: GlEnum,
        width: i32,
        height: i32,
        depth: i32,
    );
    /// `glTextureStorage2DMultisample`.
    fn texture_storage_2d_multisample(
        &self,
        name: GlName,
        samples: i32,
        internal_format: GlEnum,
        width: i32,
        height: i32,
        fixed_sample_locations: bool,
    );
    /// `glTextureStorage3DMultisample`.
    fn texture_storage_3d_multisample(
        &self,
        name: GlName,
        samples: i32,
        internal_format: GlEnum,
        width: i32,
        height: i32,
        depth: i32,
        fixed_sample_locations: bool,
    );
    /// `glTextureSubImage1D`.
    fn texture_sub_image_1d(
        &self,
        name: GlName,
        level: i32,
        xoffset: i32,
        width: i32,
        format: GlEnum,
        texel_type: GlEnum,
        pixels: &[u8],
    );
    /// `glTextureSubImage2D`.
    #[allow(clippy::too_many_arguments)]
    fn texture_sub_image_2d(
        &self,
        name: GlName,
        level: i32,
        xoffset: i32,
        yoffset: i32,
        width: i32,
        height: i32,
        format: GlEnum,
        texel_type: GlEnum,
        pixels: &[u8],
    );
    /// `glTextureSubImage3D`.
    #[allow(clippy::too_many_arguments)]
    fn texture_sub_image_3d(
        &self,
        name: GlName,
        level: i32,
        xoffset: i32,
        yoffset: i32,
        zoffset: i32,
        width: i32,
        height: i32,
        depth: i32,
        format: GlEnum,
        texel_type: GlEnum,
        pixels: &[u8],
    );
    /// `glCompressedTextureSubImage1D`.
    fn compressed_texture_sub_image_1d(
        &self,
        name: GlName,
        level: i32,
        xoffset: i32,
        width: i32,
        format: GlEnum,
        data: &[u8],
    );
    /// `glCompressedTextureSubImage2D`.
    #[allow(clippy::too_many_arguments)]
    fn compressed_texture_sub_image_2d(
        &self,
        name: GlName,
        level: i32,
        xoffset: i32,
        yoffset: i32,
        width: i32,
        height: i32,
        format: GlEnum,
        data: &[u8],
    );
    /// `glCompressedTextureSubImage3D`.
    #[allow(clippy::too_many_arguments)]
    fn compressed_texture_sub_image_3d(
        &self,
        name: GlName,
        level: i32,
        xoffset: i32,
        yoffset: i32,
        zoffset: i32,
        width: i32,
        height: i32,
        depth: i32,
        format: GlEnum,
        data: &[u8],
    );
    /// `glGetTextureImage`.
    fn get_texture_image(
        &self,
        name: GlName,
        level: i32,
        format: GlEnum,
        texel_type: GlEnum,
        out: &mut [u8],
    );
    /// `glGetCompressedTextureImage`.
    fn get_compressed_texture_image(&self, name: GlName, level: i32, out: &mut [u8]);
    /// `glTextureParameterf`.
    fn texture_parameter_f32(&self, name: GlName, pname: GlEnum, value: f32);
    /// `glTextureParameteri`.
    fn texture_parameter_i32(&self, name: GlName, pname: GlEnum, value: i32);
    /// `glTextureParameterfv`.
    fn texture_parameter_f32_slice(&self, name: GlName, pname: GlEnum, values: &[f32]);
    /// `glTextureParameteriv`.
    fn texture_parameter_i32_slice(&self, name: GlName, pname: GlEnum, values: &[i32]);
    /// `glTextureParameterIiv` (values stored without conversion).
    fn texture_parameter_integer_i32_slice(&self, name: GlName, pname: GlEnum, values: &[i32]);
    /// `glTextureParameterIuiv` (values stored without conversion).
    fn texture_parameter_integer_u32_slice(&self, name: GlName, pname: GlEnum, values: &[u32]);
    /// `glGenerateTextureMipmap`.
    fn generate_texture_mipmap(&self, name: GlName);

    // --- Shaders ---

    /// Mints a new shader name for a pipeline stage (`glCreateShader`).
    fn create_shader(&self, stage: ShaderStage) -> GlName;
    /// Deletes a shader name (`glDeleteShader`).
    fn delete_shader(&self, name: GlName);
    /// Replaces the shader's source strings (`glShaderSource`).
    fn shader_source(&self, name: GlName, sources: &[&str]);
    /// `glCompileShader`. Success is reported separately by
    /// [`shader_compile_status`](GlDriver::shader_compile_status).
    fn compile_shader(&self, name: GlName);
    /// Reads `GL_COMPILE_STATUS` for the immediately preceding compile.
    fn shader_compile_status(&self, name: GlName) -> bool;
    /// Reads `GL_INFO_LOG_LENGTH`. Zero means the log is empty.
    fn shader_info_log_length(&self, name: GlName) -> usize;
    /// Fetches exactly `length` bytes of the info log
    /// (`glGetShaderInfoLog`). Only called with `length > 0`.
    fn shader_info_log(&self, name: GlName, length: usize) -> String;

    // --- Programs ---

    /// Mints a new program name (`glCreateProgram`).
    fn create_program(&self) -> GlName;
    /// Creates a separable single-stage program from source strings in one
    /// step (`glCreateShaderProgramv`). Compile and link status must still
    /// be checked by the caller.
    fn create_shader_program(&self, stage: ShaderStage, sources: &[&str]) -> GlName;
    /// Deletes a program name (`glDeleteProgram`).
    fn delete_program(&self, name: GlName);
    /// Installs the program into the rendering state (`glUseProgram`).
    fn use_program(&self, name: GlName);
    /// `glAttachShader`.
    fn attach_shader(&self, program: GlName, shader: GlName);
    /// `glDetachShader`.
    fn detach_shader(&self, program: GlName, shader: GlName);
    /// `glBindFragDataLocation`.
    fn bind_frag_data_location(&self, program: GlName, color_number: u32, name: &str);
    /// `glBindAttribLocation`.
    fn bind_attrib_location(&self, program: GlName, index: u32, name: &str);
    /// `glTransformFeedbackVaryings`. Takes effect at the next link.
    fn transform_feedback_varyings(
        &self,
        program: GlName,
        varyings: &[&str],
        mode: VaryingCaptureMode,
    );
    /// `glLinkProgram`. Success is reported separately by
    /// [`program_link_status`](GlDriver::program_link_status).
    fn link_program(&self, name: GlName);
    /// Reads `GL_LINK_STATUS` for the immediately preceding link.
    fn program_link_status(&self, name: GlName) -> bool;
    /// `glValidateProgram`.
    fn validate_program(&self, name: GlName);
    /// Reads `GL_VALIDATE_STATUS` for the immediately preceding validate.
    fn program_validate_status(&self, name: GlName) -> bool;
    /// Reads `GL_INFO_LOG_LENGTH`. Zero means the log is empty.
    fn program_info_log_length(&self, name: GlName) -> usize;
    /// Fetches exactly `length` bytes of the info log
    /// (`glGetProgramInfoLog`). Only called with `length > 0`.
    fn program_info_log(&self, name: GlName, length: usize) -> String;
    /// `glGetAttribLocation`; `-1` if the attribute is not active.
    fn attrib_location(&self, program: GlName, name: &str) -> i32;
    /// `glGetUniformLocation`; `-1` if the uniform is not active.
    fn uniform_location(&self, program: GlName, name: &str) -> i32;
    /// `glProgramUniform1i`.
    fn program_uniform_1i(&self, program: GlName, location: i32, value: i32);
    /// `glProgramUniform1f`.
    fn program_uniform_1f(&self, program: GlName, location: i32, value: f32);
    /// `glProgramUniform3fv` with a single vector.
    fn program_uniform_3f(&self, program: GlName, location: i32, value: &[f32; 3]);
    /// `glProgramUniform4fv` with a single vector.
    fn program_uniform_4f(&self, program: GlName, location: i32, value: &[f32; 4]);
    /// `glProgramUniformMatrix3fv` with a single column-major matrix.
    fn program_uniform_matrix_3f(&self, program: GlName, location: i32, value: &[f32; 9]);
    /// `glProgramUniformMatrix4fv` with a single column-major matrix.
    fn program_uniform_matrix_4f(&self, program: GlName, location: i32, value: &[f32; 16]);

    // --- Vertex arrays ---

    /// Mints a new vertex array name (`glCreateVertexArrays`).
    fn create_vertex_array(&self) -> GlName;
    /// Deletes a vertex array name (`glDeleteVertexArrays`).
    fn delete_vertex_array(&self, name: GlName);
    /// `glBindVertexArray`.
    fn bind_vertex_array(&self, name: GlName);
    /// `glEnableVertexArrayAttrib`.
    fn enable_vertex_array_attrib(&self, name: GlName, index: u32);
    /// `glDisableVertexArrayAttrib`.
    fn disable_vertex_array_attrib(&self, name: GlName, index: u32);
    /// `glVertexArrayElementBuffer`.
    fn vertex_array_element_buffer(&self, name: GlName, buffer: GlName);
    /// `glVertexArrayAttribBinding`.
    fn vertex_array_attrib_binding(&self, name: GlName, attrib_index: u32, binding_index: u32);
    /// `glVertexArrayBindingDivisor`.
    fn vertex_array_binding_divisor(&self, name: GlName, binding_index: u32, divisor: u32);
    /// `glVertexArrayVertexBuffer`.
    fn vertex_array_vertex_buffer(
        &self,
        name: GlName,
        binding_index: u32,
        buffer: GlName,
        offset: u64,
        stride: i32,
    );
    /// `glVertexArrayVertexBuffers` over parallel slices of equal length.
    fn vertex_array_vertex_buffers(
        &self,
        name: GlName,
        first: u32,
        buffers: &[GlName],
        offsets: &[u64],
        strides: &[i32],
    );
    /// `glVertexArrayVertexBuffers` with null arrays, detaching `count`
    /// binding points starting at `first`.
    fn clear_vertex_array_vertex_buffers(&self, name: GlName, first: u32, count: usize);
    /// `glVertexArrayAttribFormat`.
    fn vertex_array_attrib_format(
        &self,
        name: GlName,
        attrib_index: u32,
        size: i32,
        component_type: GlEnum,
        normalized: bool,
        relative_offset: u32,
    );
    /// `glVertexArrayAttribIFormat` (integer, no normalization).
    fn vertex_array_attrib_integer_format(
        &self,
        name: GlName,
        attrib_index: u32,
        size: i32,
        component_type: GlEnum,
        relative_offset: u32,
    );
    /// `glVertexArrayAttribLFormat` (64-bit doubles).
    fn vertex_array_attrib_double_format(
        &self,
        name: GlName,
        attrib_index: u32,
        size: i32,
        component_type: GlEnum,
        relative_offset: u32,
    );

    // --- Transform feedback ---

    /// Mints a new transform feedback name (`glCreateTransformFeedbacks`).
    fn create_transform_feedback(&self) -> GlName;
    /// Deletes a transform feedback name (`glDeleteTransformFeedbacks`).
    fn delete_transform_feedback(&self, name: GlName);
    /// `glBindTransformFeedback` on the `GL_TRANSFORM_FEEDBACK` target.
    /// Name `0` restores the default object.
    fn bind_transform_feedback(&self, name: GlName);
    /// `glTransformFeedbackBufferBase`.
    fn transform_feedback_buffer_base(&self, name: GlName, index: u32, buffer: GlName);
    /// `glTransformFeedbackBufferRange`.
    fn transform_feedback_buffer_range(
        &self,
        name: GlName,
        index: u32,
        buffer: GlName,
        offset: u64,
        size: u64,
    );
    /// `glBeginTransformFeedback` on the currently bound object.
    fn begin_transform_feedback(&self, mode: PrimitiveMode);
    /// `glPauseTransformFeedback`.
    fn pause_transform_feedback(&self);
    /// `glResumeTransformFeedback`.
    fn resume_transform_feedback(&self);
    /// `glEndTransformFeedback`.
    fn end_transform_feedback(&self);

    // --- Draws ---

    /// `glDrawArrays`.
    fn draw_arrays(&self, mode: PrimitiveMode, first: i32, count: i32);
    /// `glDrawArraysInstanced`.
    fn draw_arrays_instanced(&self, mode: PrimitiveMode, first: i32, count: i32, instances: i32);
    /// `glDrawElements`. `offset` is a byte offset into the bound element
    /// array buffer.
    fn draw_elements(&self, mode: PrimitiveMode, count: i32, index_type: IndexType, offset: usize);
    /// `glDrawElementsInstanced`.
    fn draw_elements_instanced(
        &self,
        mode: PrimitiveMode,
        count: i32,
        index_type: IndexType,
        offset: usize,
        instances: i32,
    );
}
