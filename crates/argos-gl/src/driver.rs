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

//! The function-pointer backend.

use crate::conversions::IntoGl;
use argos_core::{
    AccessPolicy, BufferTarget, GlDriver, GlEnum, GlName, IndexType, MapAccessFlags,
    PrimitiveMode, ShaderStage, StorageFlags, TextureTarget, UsageHint, VaryingCaptureMode,
};
use gl::types::{GLchar, GLint, GLintptr, GLsizei, GLsizeiptr, GLuint, GLvoid};
use std::ffi::{c_void, CStr, CString};
use std::ptr;

/// Identity strings reported by the context the driver was loaded against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterInfo {
    /// The `GL_VENDOR` string.
    pub vendor: String,
    /// The `GL_RENDERER` string.
    pub renderer: String,
    /// The `GL_VERSION` string.
    pub version: String,
}

/// `GlDriver` over function pointers loaded from the platform GL library.
///
/// Every trait method is a single native call through the loaded pointers;
/// only the direct-state-access ("named") entry points are used, so a
/// GL 4.5+ core profile context is required. The context that was current
/// on the loading thread stays the implicit target of every call — the
/// driver is as thread-affine as the API it wraps.
#[derive(Debug, Clone)]
pub struct NativeDriver {
    adapter: AdapterInfo,
}

impl NativeDriver {
    /// Loads the function pointers through `loader` (typically the
    /// windowing library's `get_proc_address`) and queries the context's
    /// identity strings.
    ///
    /// The GL context must be current on the calling thread.
    pub fn load_with<F>(loader: F) -> Self
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);

        let adapter = AdapterInfo {
            vendor: get_string(gl::VENDOR),
            renderer: get_string(gl::RENDERER),
            version: get_string(gl::VERSION),
        };
        log::info!(
            "NativeDriver: loaded GL entry points ({} / {} / {})",
            adapter.vendor,
            adapter.renderer,
            adapter.version
        );

        Self { adapter }
    }

    /// Identity strings of the context the driver was loaded against.
    pub fn adapter_info(&self) -> &AdapterInfo {
        &self.adapter
    }
}

/// Reads one of the context identity strings, tolerating a null return
/// from a broken or lost context.
fn get_string(name: GlEnum) -> String {
    let raw = unsafe { gl::GetString(name) };
    if raw.is_null() {
        return String::from("unknown");
    }
    unsafe { CStr::from_ptr(raw.cast::<GLchar>()) }
        .to_string_lossy()
        .into_owned()
}

/// Converts to a C string for the entry points that take name strings,
/// truncating at an interior NUL (the native call would stop there anyway).
fn to_c_string(s: &str) -> CString {
    match CString::new(s) {
        Ok(c) => c,
        Err(err) => {
            let end = err.nul_position();
            CString::new(&s.as_bytes()[..end]).unwrap_or_default()
        }
    }
}

/// Fetches an info log of the reported length through `fetch`, in a single
/// content fetch, and trims the trailing NUL the native calls write.
fn fetch_info_log<F>(length: usize, fetch: F) -> String
where
    F: FnOnce(GLsizei, *mut GLsizei, *mut GLchar),
{
    let mut buffer = vec![0u8; length];
    let mut written: GLsizei = 0;
    fetch(
        length as GLsizei,
        &mut written,
        buffer.as_mut_ptr().cast::<GLchar>(),
    );
    buffer.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buffer).into_owned()
}

impl GlDriver for NativeDriver {
    // --- Buffers ---

    fn create_buffer(&self) -> GlName {
        let mut name: GLuint = 0;
        unsafe { gl::CreateBuffers(1, &mut name) };
        log::debug!("NativeDriver: created buffer {name}");
        name
    }

    fn delete_buffer(&self, name: GlName) {
        log::debug!("NativeDriver: deleting buffer {name}");
        unsafe { gl::DeleteBuffers(1, &name) };
    }

    fn bind_buffer(&self, target: BufferTarget, name: GlName) {
        unsafe { gl::BindBuffer(target.into_gl(), name) };
    }

    fn buffer_storage(&self, name: GlName, size: u64, data: Option<&[u8]>, flags: StorageFlags) {
        let pointer = data.map_or(ptr::null(), |bytes| bytes.as_ptr().cast::<GLvoid>());
        unsafe { gl::NamedBufferStorage(name, size as GLsizeiptr, pointer, flags.into_gl()) };
    }

    fn buffer_data(&self, name: GlName, data: &[u8], usage: UsageHint) {
        unsafe {
            gl::NamedBufferData(
                name,
                data.len() as GLsizeiptr,
                data.as_ptr().cast::<GLvoid>(),
                usage.into_gl(),
            )
        };
    }

    fn buffer_data_size(&self, name: GlName, size: u64, usage: UsageHint) {
        unsafe { gl::NamedBufferData(name, size as GLsizeiptr, ptr::null(), usage.into_gl()) };
    }

    fn buffer_sub_data(&self, name: GlName, offset: u64, data: &[u8]) {
        unsafe {
            gl::NamedBufferSubData(
                name,
                offset as GLintptr,
                data.len() as GLsizeiptr,
                data.as_ptr().cast::<GLvoid>(),
            )
        };
    }

    fn copy_buffer_sub_data(
        &self,
        src: GlName,
        dst: GlName,
        src_offset: u64,
        dst_offset: u64,
        size: u64,
    ) {
        unsafe {
            gl::CopyNamedBufferSubData(
                src,
                dst,
                src_offset as GLintptr,
                dst_offset as GLintptr,
                size as GLsizeiptr,
            )
        };
    }

    fn map_buffer(&self, name: GlName, access: AccessPolicy) -> *mut u8 {
        unsafe { gl::MapNamedBuffer(name, access.into_gl()) }.cast::<u8>()
    }

    fn map_buffer_range(
        &self,
        name: GlName,
        offset: u64,
        length: u64,
        access: MapAccessFlags,
    ) -> *mut u8 {
        unsafe {
            gl::MapNamedBufferRange(
                name,
                offset as GLintptr,
                length as GLsizeiptr,
                access.into_gl(),
            )
        }
        .cast::<u8>()
    }

    fn flush_mapped_buffer_range(&self, name: GlName, offset: u64, length: u64) {
        unsafe {
            gl::FlushMappedNamedBufferRange(name, offset as GLintptr, length as GLsizeiptr)
        };
    }

    fn unmap_buffer(&self, name: GlName) -> bool {
        (unsafe { gl::UnmapNamedBuffer(name) }) == gl::TRUE
    }

    fn get_buffer_sub_data(&self, name: GlName, offset: u64, out: &mut [u8]) {
        unsafe {
            gl::GetNamedBufferSubData(
                name,
                offset as GLintptr,
                out.len() as GLsizeiptr,
                out.as_mut_ptr().cast::<GLvoid>(),
            )
        };
    }

    // --- Textures ---

    fn create_texture(&self, target: TextureTarget) -> GlName {
        let mut name: GLuint = 0;
        unsafe { gl::CreateTextures(target.into_gl(), 1, &mut name) };
        log::debug!("NativeDriver: created texture {name} ({target:?})");
        name
    }

    fn delete_texture(&self, name: GlName) {
        log::debug!("NativeDriver: deleting texture {name}");
        unsafe { gl::DeleteTextures(1, &name) };
    }

    fn bind_texture_unit(&self, unit: u32, name: GlName) {
        unsafe { gl::BindTextureUnit(unit, name) };
    }

    fn texture_storage_1d(&self, name: GlName, levels: i32, internal_format: GlEnum, width: i32) {
        unsafe { gl::TextureStorage1D(name, levels, internal_format, width) };
    }

    fn texture_storage_2d(
        &self,
        name: GlName,
        levels: i32,
        internal_format: GlEnum,
        width: i32,
        height: i32,
    ) {
        unsafe { gl::TextureStorage2D(name, levels, internal_format, width, height) };
    }

    fn texture_storage_3d(
        &self,
        name: GlName,
        levels: i32,
        internal_format: GlEnum,
        width: i32,
        height: i32,
        depth: i32,
    ) {
        unsafe { gl::TextureStorage3D(name, levels, internal_format, width, height, depth) };
    }

    fn texture_storage_2d_multisample(
        &self,
        name: GlName,
        samples: i32,
        internal_format: GlEnum,
        width: i32,
        height: i32,
        fixed_sample_locations: bool,
    ) {
        unsafe {
            gl::TextureStorage2DMultisample(
                name,
                samples,
                internal_format,
                width,
                height,
                fixed_sample_locations as u8,
            )
        };
    }

    fn texture_storage_3d_multisample(
        &self,
        name: GlName,
        samples: i32,
        internal_format: GlEnum,
        width: i32,
        height: i32,
        depth: i32,
        fixed_sample_locations: bool,
    ) {
        unsafe {
            gl::TextureStorage3DMultisample(
                name,
                samples,
                internal_format,
                width,
                height,
                depth,
                fixed_sample_locations as u8,
            )
        };
    }

    fn texture_sub_image_1d(
        &self,
        name: GlName,
        level: i32,
        xoffset: i32,
        width: i32,
        format: GlEnum,
        texel_type: GlEnum,
        pixels: &[u8],
    ) {
        unsafe {
            gl::TextureSubImage1D(
                name,
                level,
                xoffset,
                width,
                format,
                texel_type,
                pixels.as_ptr().cast::<GLvoid>(),
            )
        };
    }

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
    ) {
        unsafe {
            gl::TextureSubImage2D(
                name,
                level,
                xoffset,
                yoffset,
                width,
                height,
                format,
                texel_type,
                pixels.as_ptr().cast::<GLvoid>(),
            )
        };
    }

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
    ) {
        unsafe {
            gl::TextureSubImage3D(
                name,
                level,
                xoffset,
                yoffset,
                zoffset,
                width,
                height,
                depth,
                format,
                texel_type,
                pixels.as_ptr().cast::<GLvoid>(),
            )
        };
    }

    fn compressed_texture_sub_image_1d(
        &self,
        name: GlName,
        level: i32,
        xoffset: i32,
        width: i32,
        format: GlEnum,
        data: &[u8],
    ) {
        unsafe {
            gl::CompressedTextureSubImage1D(
                name,
                level,
                xoffset,
                width,
                format,
                data.len() as GLsizei,
                data.as_ptr().cast::<GLvoid>(),
            )
        };
    }

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
    ) {
        unsafe {
            gl::CompressedTextureSubImage2D(
                name,
                level,
                xoffset,
                yoffset,
                width,
                height,
                format,
                data.len() as GLsizei,
                data.as_ptr().cast::<GLvoid>(),
            )
        };
    }

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
    ) {
        unsafe {
            gl::CompressedTextureSubImage3D(
                name,
                level,
                xoffset,
                yoffset,
                zoffset,
                width,
                height,
                depth,
                format,
                data.len() as GLsizei,
                data.as_ptr().cast::<GLvoid>(),
            )
        };
    }

    fn get_texture_image(
        &self,
        name: GlName,
        level: i32,
        format: GlEnum,
        texel_type: GlEnum,
        out: &mut [u8],
    ) {
        unsafe {
            gl::GetTextureImage(
                name,
                level,
                format,
                texel_type,
                out.len() as GLsizei,
                out.as_mut_ptr().cast::<GLvoid>(),
            )
        };
    }

    fn get_compressed_texture_image(&self, name: GlName, level: i32, out: &mut [u8]) {
        unsafe {
            gl::GetCompressedTextureImage(
                name,
                level,
                out.len() as GLsizei,
                out.as_mut_ptr().cast::<GLvoid>(),
            )
        };
    }

    fn texture_parameter_f32(&self, name: GlName, pname: GlEnum, value: f32) {
        unsafe { gl::TextureParameterf(name, pname, value) };
    }

    fn texture_parameter_i32(&self, name: GlName, pname: GlEnum, value: i32) {
        unsafe { gl::TextureParameteri(name, pname, value) };
    }

    fn texture_parameter_f32_slice(&self, name: GlName, pname: GlEnum, values: &[f32]) {
        unsafe { gl::TextureParameterfv(name, pname, values.as_ptr()) };
    }

    fn texture_parameter_i32_slice(&self, name: GlName, pname: GlEnum, values: &[i32]) {
        unsafe { gl::TextureParameteriv(name, pname, values.as_ptr()) };
    }

    fn texture_parameter_integer_i32_slice(&self, name: GlName, pname: GlEnum, values: &[i32]) {
        unsafe { gl::TextureParameterIiv(name, pname, values.as_ptr()) };
    }

    fn texture_parameter_integer_u32_slice(&self, name: GlName, pname: GlEnum, values: &[u32]) {
        unsafe { gl::TextureParameterIuiv(name, pname, values.as_ptr()) };
    }

    fn generate_texture_mipmap(&self, name: GlName) {
        unsafe { gl::GenerateTextureMipmap(name) };
    }

    // --- Shaders ---

    fn create_shader(&self, stage: ShaderStage) -> GlName {
        let name = unsafe { gl::CreateShader(stage.into_gl()) };
        log::debug!("NativeDriver: created shader {name} ({stage:?})");
        name
    }

    fn delete_shader(&self, name: GlName) {
        log::debug!("NativeDriver: deleting shader {name}");
        unsafe { gl::DeleteShader(name) };
    }

    fn shader_source(&self, name: GlName, sources: &[&str]) {
        let pointers: Vec<*const GLchar> = sources
            .iter()
            .map(|source| source.as_ptr().cast::<GLchar>())
            .collect();
        let lengths: Vec<GLint> = sources.iter().map(|source| source.len() as GLint).collect();
        unsafe {
            gl::ShaderSource(
                name,
                sources.len() as GLsizei,
                pointers.as_ptr(),
                lengths.as_ptr(),
            )
        };
    }

    fn compile_shader(&self, name: GlName) {
        unsafe { gl::CompileShader(name) };
    }

    fn shader_compile_status(&self, name: GlName) -> bool {
        let mut status: GLint = 0;
        unsafe { gl::GetShaderiv(name, gl::COMPILE_STATUS, &mut status) };
        status == gl::TRUE as GLint
    }

    fn shader_info_log_length(&self, name: GlName) -> usize {
        let mut length: GLint = 0;
        unsafe { gl::GetShaderiv(name, gl::INFO_LOG_LENGTH, &mut length) };
        length.max(0) as usize
    }

    fn shader_info_log(&self, name: GlName, length: usize) -> String {
        fetch_info_log(length, |capacity, written, buffer| unsafe {
            gl::GetShaderInfoLog(name, capacity, written, buffer)
        })
    }

    // --- Programs ---

    fn create_program(&self) -> GlName {
        let name = unsafe { gl::CreateProgram() };
        log::debug!("NativeDriver: created program {name}");
        name
    }

    fn create_shader_program(&self, stage: ShaderStage, sources: &[&str]) -> GlName {
        let owned: Vec<CString> = sources.iter().map(|source| to_c_string(source)).collect();
        let pointers: Vec<*const GLchar> = owned.iter().map(|source| source.as_ptr()).collect();
        let name = unsafe {
            gl::CreateShaderProgramv(stage.into_gl(), sources.len() as GLsizei, pointers.as_ptr())
        };
        log::debug!("NativeDriver: created separable program {name} ({stage:?})");
        name
    }

    fn delete_program(&self, name: GlName) {
        log::debug!("NativeDriver: deleting program {name}");
        unsafe { gl::DeleteProgram(name) };
    }

    fn use_program(&self, name: GlName) {
        unsafe { gl::UseProgram(name) };
    }

    fn attach_shader(&self, program: GlName, shader: GlName) {
        unsafe { gl::AttachShader(program, shader) };
    }

    fn detach_shader(&self, program: GlName, shader: GlName) {
        unsafe { gl::DetachShader(program, shader) };
    }

    fn bind_frag_data_location(&self, program: GlName, color_number: u32, name: &str) {
        let name = to_c_string(name);
        unsafe { gl::BindFragDataLocation(program, color_number, name.as_ptr()) };
    }

    fn bind_attrib_location(&self, program: GlName, index: u32, name: &str) {
        let name = to_c_string(name);
        unsafe { gl::BindAttribLocation(program, index, name.as_ptr()) };
    }

    fn transform_feedback_varyings(
        &self,
        program: GlName,
        varyings: &[&str],
        mode: VaryingCaptureMode,
    ) {
        let owned: Vec<CString> = varyings.iter().map(|varying| to_c_string(varying)).collect();
        let pointers: Vec<*const GLchar> = owned.iter().map(|varying| varying.as_ptr()).collect();
        unsafe {
            gl::TransformFeedbackVaryings(
                program,
                varyings.len() as GLsizei,
                pointers.as_ptr(),
                mode.into_gl(),
            )
        };
    }

    fn link_program(&self, name: GlName) {
        unsafe { gl::LinkProgram(name) };
    }

    fn program_link_status(&self, name: GlName) -> bool {
        let mut status: GLint = 0;
        unsafe { gl::GetProgramiv(name, gl::LINK_STATUS, &mut status) };
        status == gl::TRUE as GLint
    }

    fn validate_program(&self, name: GlName) {
        unsafe { gl::ValidateProgram(name) };
    }

    fn program_validate_status(&self, name: GlName) -> bool {
        let mut status: GLint = 0;
        unsafe { gl::GetProgramiv(name, gl::VALIDATE_STATUS, &mut status) };
        status == gl::TRUE as GLint
    }

    fn program_info_log_length(&self, name: GlName) -> usize {
        let mut length: GLint = 0;
        unsafe { gl::GetProgramiv(name, gl::INFO_LOG_LENGTH, &mut length) };
        length.max(0) as usize
    }

    fn program_info_log(&self, name: GlName, length: usize) -> String {
        fetch_info_log(length, |capacity, written, buffer| unsafe {
            gl::GetProgramInfoLog(name, capacity, written, buffer)
        })
    }

    fn attrib_location(&self, program: GlName, name: &str) -> i32 {
        let name = to_c_string(name);
        unsafe { gl::GetAttribLocation(program, name.as_ptr()) }
    }

    fn uniform_location(&self, program: GlName, name: &str) -> i32 {
        let name = to_c_string(name);
        unsafe { gl::GetUniformLocation(program, name.as_ptr()) }
    }

    fn program_uniform_1i(&self, program: GlName, location: i32, value: i32) {
        unsafe { gl::ProgramUniform1i(program, location, value) };
    }

    fn program_uniform_1f(&self, program: GlName, location: i32, value: f32) {
        unsafe { gl::ProgramUniform1f(program, location, value) };
    }

    fn program_uniform_3f(&self, program: GlName, location: i32, value: &[f32; 3]) {
        unsafe { gl::ProgramUniform3fv(program, location, 1, value.as_ptr()) };
    }

    fn program_uniform_4f(&self, program: GlName, location: i32, value: &[f32; 4]) {
        unsafe { gl::ProgramUniform4fv(program, location, 1, value.as_ptr()) };
    }

    fn program_uniform_matrix_3f(&self, program: GlName, location: i32, value: &[f32; 9]) {
        unsafe { gl::ProgramUniformMatrix3fv(program, location, 1, gl::FALSE, value.as_ptr()) };
    }

    fn program_uniform_matrix_4f(&self, program: GlName, location: i32, value: &[f32; 16]) {
        unsafe { gl::ProgramUniformMatrix4fv(program, location, 1, gl::FALSE, value.as_ptr()) };
    }

    // --- Vertex arrays ---

    fn create_vertex_array(&self) -> GlName {
        let mut name: GLuint = 0;
        unsafe { gl::CreateVertexArrays(1, &mut name) };
        log::debug!("NativeDriver: created vertex array {name}");
        name
    }

    fn delete_vertex_array(&self, name: GlName) {
        log::debug!("NativeDriver: deleting vertex array {name}");
        unsafe { gl::DeleteVertexArrays(1, &name) };
    }

    fn bind_vertex_array(&self, name: GlName) {
        unsafe { gl::BindVertexArray(name) };
    }

    fn enable_vertex_array_attrib(&self, name: GlName, index: u32) {
        unsafe { gl::EnableVertexArrayAttrib(name, index) };
    }

    fn disable_vertex_array_attrib(&self, name: GlName, index: u32) {
        unsafe { gl::DisableVertexArrayAttrib(name, index) };
    }

    fn vertex_array_element_buffer(&self, name: GlName, buffer: GlName) {
        unsafe { gl::VertexArrayElementBuffer(name, buffer) };
    }

    fn vertex_array_attrib_binding(&self, name: GlName, attrib_index: u32, binding_index: u32) {
        unsafe { gl::VertexArrayAttribBinding(name, attrib_index, binding_index) };
    }

    fn vertex_array_binding_divisor(&self, name: GlName, binding_index: u32, divisor: u32) {
        unsafe { gl::VertexArrayBindingDivisor(name, binding_index, divisor) };
    }

    fn vertex_array_vertex_buffer(
        &self,
        name: GlName,
        binding_index: u32,
        buffer: GlName,
        offset: u64,
        stride: i32,
    ) {
        unsafe {
            gl::VertexArrayVertexBuffer(name, binding_index, buffer, offset as GLintptr, stride)
        };
    }

    fn vertex_array_vertex_buffers(
        &self,
        name: GlName,
        first: u32,
        buffers: &[GlName],
        offsets: &[u64],
        strides: &[i32],
    ) {
        let offsets: Vec<GLintptr> = offsets.iter().map(|offset| *offset as GLintptr).collect();
        unsafe {
            gl::VertexArrayVertexBuffers(
                name,
                first,
                buffers.len() as GLsizei,
                buffers.as_ptr(),
                offsets.as_ptr(),
                strides.as_ptr(),
            )
        };
    }

    fn clear_vertex_array_vertex_buffers(&self, name: GlName, first: u32, count: usize) {
        unsafe {
            gl::VertexArrayVertexBuffers(
                name,
                first,
                count as GLsizei,
                ptr::null(),
                ptr::null(),
                ptr::null(),
            )
        };
    }

    fn vertex_array_attrib_format(
        &self,
        name: GlName,
        attrib_index: u32,
        size: i32,
        component_type: GlEnum,
        normalized: bool,
        relative_offset: u32,
    ) {
        unsafe {
            gl::VertexArrayAttribFormat(
                name,
                attrib_index,
                size,
                component_type,
                normalized as u8,
                relative_offset,
            )
        };
    }

    fn vertex_array_attrib_integer_format(
        &self,
        name: GlName,
        attrib_index: u32,
        size: i32,
        component_type: GlEnum,
        relative_offset: u32,
    ) {
        unsafe {
            gl::VertexArrayAttribIFormat(name, attrib_index, size, component_type, relative_offset)
        };
    }

    fn vertex_array_attrib_double_format(
        &self,
        name: GlName,
        attrib_index: u32,
        size: i32,
        component_type: GlEnum,
        relative_offset: u32,
    ) {
        unsafe {
            gl::VertexArrayAttribLFormat(name, attrib_index, size, component_type, relative_offset)
        };
    }

    // --- Transform feedback ---

    fn create_transform_feedback(&self) -> GlName {
        let mut name: GLuint = 0;
        unsafe { gl::CreateTransformFeedbacks(1, &mut name) };
        log::debug!("NativeDriver: created transform feedback {name}");
        name
    }

    fn delete_transform_feedback(&self, name: GlName) {
        log::debug!("NativeDriver: deleting transform feedback {name}");
        unsafe { gl::DeleteTransformFeedbacks(1, &name) };
    }

    fn bind_transform_feedback(&self, name: GlName) {
        unsafe { gl::BindTransformFeedback(gl::TRANSFORM_FEEDBACK, name) };
    }

    fn transform_feedback_buffer_base(&self, name: GlName, index: u32, buffer: GlName) {
        unsafe { gl::TransformFeedbackBufferBase(name, index, buffer) };
    }

    fn transform_feedback_buffer_range(
        &self,
        name: GlName,
        index: u32,
        buffer: GlName,
        offset: u64,
        size: u64,
    ) {
        unsafe {
            gl::TransformFeedbackBufferRange(
                name,
                index,
                buffer,
                offset as GLintptr,
                size as GLsizeiptr,
            )
        };
    }

    fn begin_transform_feedback(&self, mode: PrimitiveMode) {
        unsafe { gl::BeginTransformFeedback(mode.into_gl()) };
    }

    fn pause_transform_feedback(&self) {
        unsafe { gl::PauseTransformFeedback() };
    }

    fn resume_transform_feedback(&self) {
        unsafe { gl::ResumeTransformFeedback() };
    }

    fn end_transform_feedback(&self) {
        unsafe { gl::EndTransformFeedback() };
    }

    // --- Draws ---

    fn draw_arrays(&self, mode: PrimitiveMode, first: i32, count: i32) {
        unsafe { gl::DrawArrays(mode.into_gl(), first, count) };
    }

    fn draw_arrays_instanced(&self, mode: PrimitiveMode, first: i32, count: i32, instances: i32) {
        unsafe { gl::DrawArraysInstanced(mode.into_gl(), first, count, instances) };
    }

    fn draw_elements(&self, mode: PrimitiveMode, count: i32, index_type: IndexType, offset: usize) {
        unsafe {
            gl::DrawElements(
                mode.into_gl(),
                count,
                index_type.into_gl(),
                offset as *const GLvoid,
            )
        };
    }

    fn draw_elements_instanced(
        &self,
        mode: PrimitiveMode,
        count: i32,
        index_type: IndexType,
        offset: usize,
        instances: i32,
    ) {
        unsafe {
            gl::DrawElementsInstanced(
                mode.into_gl(),
                count,
                index_type.into_gl(),
                offset as *const GLvoid,
                instances,
            )
        };
    }
}
