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

//! A recording fake driver for the lifecycle and status tests.
//!
//! Mints sequential names, records every create/delete per object kind,
//! and logs forwarded operations as compact strings so tests can assert
//! exact pass-through behavior without a live context.

#![allow(dead_code)]

use argos_core::{
    AccessPolicy, BufferTarget, GlDriver, GlEnum, GlName, IndexType, MapAccessFlags,
    PrimitiveMode, ShaderStage, StorageFlags, TextureTarget, UsageHint, VaryingCaptureMode,
};
use std::ptr;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Mutex;

/// The object kind a minted or deleted name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Buffer,
    Texture,
    Shader,
    Program,
    VertexArray,
    TransformFeedback,
}

/// A fake driver that mints unique names and records what happens to them.
#[derive(Debug)]
pub struct RecordingDriver {
    pub next_name: AtomicU32,
    pub created: Mutex<Vec<(Kind, GlName)>>,
    pub deleted: Mutex<Vec<(Kind, GlName)>>,
    pub calls: Mutex<Vec<String>>,

    /// Status flag returned after a compile.
    pub compile_ok: bool,
    /// Status flag returned after a link.
    pub link_ok: bool,
    /// Status flag returned after a validate.
    pub validate_ok: bool,
    /// Info log contents; `None` reports a zero-length log.
    pub info_log: Option<String>,
    /// Number of content fetches issued against the info log.
    pub log_fetches: AtomicUsize,
    /// The `length` argument of the most recent content fetch.
    pub last_fetch_len: AtomicUsize,
}

impl Default for RecordingDriver {
    fn default() -> Self {
        Self {
            next_name: AtomicU32::new(1),
            created: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            compile_ok: true,
            link_ok: true,
            validate_ok: true,
            info_log: None,
            log_fetches: AtomicUsize::new(0),
            last_fetch_len: AtomicUsize::new(0),
        }
    }
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    fn mint(&self, kind: Kind) -> GlName {
        let name = self.next_name.fetch_add(1, Ordering::Relaxed);
        self.created.lock().unwrap().push((kind, name));
        name
    }

    fn record_delete(&self, kind: Kind, name: GlName) {
        self.deleted.lock().unwrap().push((kind, name));
    }

    fn call(&self, entry: String) {
        self.calls.lock().unwrap().push(entry);
    }

    /// How many times `name` has been deleted, across all kinds.
    pub fn delete_count(&self, name: GlName) -> usize {
        self.deleted
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, deleted)| *deleted == name)
            .count()
    }

    /// Whether a forwarded call was recorded.
    pub fn saw_call(&self, entry: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|call| call == entry)
    }

    fn log_length(&self) -> usize {
        self.info_log.as_ref().map_or(0, |log| log.len())
    }

    fn fetch_log(&self, length: usize) -> String {
        self.log_fetches.fetch_add(1, Ordering::Relaxed);
        self.last_fetch_len.store(length, Ordering::Relaxed);
        self.info_log.clone().unwrap_or_default()
    }
}

impl GlDriver for RecordingDriver {
    // --- Buffers ---

    fn create_buffer(&self) -> GlName {
        self.mint(Kind::Buffer)
    }

    fn delete_buffer(&self, name: GlName) {
        self.record_delete(Kind::Buffer, name);
    }

    fn bind_buffer(&self, target: BufferTarget, name: GlName) {
        self.call(format!("bind_buffer {target:?} {name}"));
    }

    fn buffer_storage(&self, name: GlName, size: u64, data: Option<&[u8]>, flags: StorageFlags) {
        self.call(format!(
            "buffer_storage {name} {size} {} {:#x}",
            data.map_or(0, <[u8]>::len),
            flags.bits()
        ));
    }

    fn buffer_data(&self, name: GlName, data: &[u8], usage: UsageHint) {
        self.call(format!("buffer_data {name} {} {usage:?}", data.len()));
    }

    fn buffer_data_size(&self, name: GlName, size: u64, usage: UsageHint) {
        self.call(format!("buffer_data_size {name} {size} {usage:?}"));
    }

    fn buffer_sub_data(&self, name: GlName, offset: u64, data: &[u8]) {
        self.call(format!("buffer_sub_data {name} {offset} {}", data.len()));
    }

    fn copy_buffer_sub_data(
        &self,
        src: GlName,
        dst: GlName,
        src_offset: u64,
        dst_offset: u64,
        size: u64,
    ) {
        self.call(format!(
            "copy_buffer_sub_data {src} {dst} {src_offset} {dst_offset} {size}"
        ));
    }

    fn map_buffer(&self, name: GlName, access: AccessPolicy) -> *mut u8 {
        self.call(format!("map_buffer {name} {access:?}"));
        ptr::null_mut()
    }

    fn map_buffer_range(
        &self,
        name: GlName,
        offset: u64,
        length: u64,
        access: MapAccessFlags,
    ) -> *mut u8 {
        self.call(format!(
            "map_buffer_range {name} {offset} {length} {:#x}",
            access.bits()
        ));
        ptr::null_mut()
    }

    fn flush_mapped_buffer_range(&self, name: GlName, offset: u64, length: u64) {
        self.call(format!("flush_mapped_buffer_range {name} {offset} {length}"));
    }

    fn unmap_buffer(&self, name: GlName) -> bool {
        self.call(format!("unmap_buffer {name}"));
        true
    }

    fn get_buffer_sub_data(&self, name: GlName, offset: u64, out: &mut [u8]) {
        self.call(format!("get_buffer_sub_data {name} {offset} {}", out.len()));
    }

    // --- Textures ---

    fn create_texture(&self, target: TextureTarget) -> GlName {
        let name = self.mint(Kind::Texture);
        self.call(format!("create_texture {target:?} {name}"));
        name
    }

    fn delete_texture(&self, name: GlName) {
        self.record_delete(Kind::Texture, name);
    }

    fn bind_texture_unit(&self, unit: u32, name: GlName) {
        self.call(format!("bind_texture_unit {unit} {name}"));
    }

    fn texture_storage_1d(&self, name: GlName, levels: i32, internal_format: GlEnum, width: i32) {
        self.call(format!(
            "texture_storage_1d {name} {levels} {internal_format:#x} {width}"
        ));
    }

    fn texture_storage_2d(
        &self,
        name: GlName,
        levels: i32,
        internal_format: GlEnum,
        width: i32,
        height: i32,
    ) {
        self.call(format!(
            "texture_storage_2d {name} {levels} {internal_format:#x} {width} {height}"
        ));
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
        self.call(format!(
            "texture_storage_3d {name} {levels} {internal_format:#x} {width} {height} {depth}"
        ));
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
        self.call(format!(
            "texture_storage_2d_multisample {name} {samples} {internal_format:#x} {width} {height} {fixed_sample_locations}"
        ));
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
        self.call(format!(
            "texture_storage_3d_multisample {name} {samples} {internal_format:#x} {width} {height} {depth} {fixed_sample_locations}"
        ));
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
        self.call(format!(
            "texture_sub_image_1d {name} {level} {xoffset} {width} {format:#x} {texel_type:#x} {}",
            pixels.len()
        ));
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
        self.call(format!(
            "texture_sub_image_2d {name} {level} {xoffset} {yoffset} {width} {height} {format:#x} {texel_type:#x} {}",
            pixels.len()
        ));
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
        self.call(format!(
            "texture_sub_image_3d {name} {level} {xoffset} {yoffset} {zoffset} {width} {height} {depth} {format:#x} {texel_type:#x} {}",
            pixels.len()
        ));
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
        self.call(format!(
            "compressed_texture_sub_image_1d {name} {level} {xoffset} {width} {format:#x} {}",
            data.len()
        ));
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
        self.call(format!(
            "compressed_texture_sub_image_2d {name} {level} {xoffset} {yoffset} {width} {height} {format:#x} {}",
            data.len()
        ));
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
        self.call(format!(
            "compressed_texture_sub_image_3d {name} {level} {xoffset} {yoffset} {zoffset} {width} {height} {depth} {format:#x} {}",
            data.len()
        ));
    }

    fn get_texture_image(
        &self,
        name: GlName,
        level: i32,
        format: GlEnum,
        texel_type: GlEnum,
        out: &mut [u8],
    ) {
        self.call(format!(
            "get_texture_image {name} {level} {format:#x} {texel_type:#x} {}",
            out.len()
        ));
    }

    fn get_compressed_texture_image(&self, name: GlName, level: i32, out: &mut [u8]) {
        self.call(format!(
            "get_compressed_texture_image {name} {level} {}",
            out.len()
        ));
    }

    fn texture_parameter_f32(&self, name: GlName, pname: GlEnum, value: f32) {
        self.call(format!("texture_parameter_f32 {name} {pname:#x} {value}"));
    }

    fn texture_parameter_i32(&self, name: GlName, pname: GlEnum, value: i32) {
        self.call(format!("texture_parameter_i32 {name} {pname:#x} {value}"));
    }

    fn texture_parameter_f32_slice(&self, name: GlName, pname: GlEnum, values: &[f32]) {
        self.call(format!(
            "texture_parameter_f32_slice {name} {pname:#x} {values:?}"
        ));
    }

    fn texture_parameter_i32_slice(&self, name: GlName, pname: GlEnum, values: &[i32]) {
        self.call(format!(
            "texture_parameter_i32_slice {name} {pname:#x} {values:?}"
        ));
    }

    fn texture_parameter_integer_i32_slice(&self, name: GlName, pname: GlEnum, values: &[i32]) {
        self.call(format!(
            "texture_parameter_integer_i32_slice {name} {pname:#x} {values:?}"
        ));
    }

    fn texture_parameter_integer_u32_slice(&self, name: GlName, pname: GlEnum, values: &[u32]) {
        self.call(format!(
            "texture_parameter_integer_u32_slice {name} {pname:#x} {values:?}"
        ));
    }

    fn generate_texture_mipmap(&self, name: GlName) {
        self.call(format!("generate_texture_mipmap {name}"));
    }

    // --- Shaders ---

    fn create_shader(&self, stage: ShaderStage) -> GlName {
        let name = self.mint(Kind::Shader);
        self.call(format!("create_shader {stage:?} {name}"));
        name
    }

    fn delete_shader(&self, name: GlName) {
        self.record_delete(Kind::Shader, name);
    }

    fn shader_source(&self, name: GlName, sources: &[&str]) {
        self.call(format!("shader_source {name} {}", sources.len()));
    }

    fn compile_shader(&self, name: GlName) {
        self.call(format!("compile_shader {name}"));
    }

    fn shader_compile_status(&self, _name: GlName) -> bool {
        self.compile_ok
    }

    fn shader_info_log_length(&self, _name: GlName) -> usize {
        self.log_length()
    }

    fn shader_info_log(&self, _name: GlName, length: usize) -> String {
        self.fetch_log(length)
    }

    // --- Programs ---

    fn create_program(&self) -> GlName {
        self.mint(Kind::Program)
    }

    fn create_shader_program(&self, stage: ShaderStage, sources: &[&str]) -> GlName {
        let name = self.mint(Kind::Program);
        self.call(format!(
            "create_shader_program {stage:?} {} {name}",
            sources.len()
        ));
        name
    }

    fn delete_program(&self, name: GlName) {
        self.record_delete(Kind::Program, name);
    }

    fn use_program(&self, name: GlName) {
        self.call(format!("use_program {name}"));
    }

    fn attach_shader(&self, program: GlName, shader: GlName) {
        self.call(format!("attach_shader {program} {shader}"));
    }

    fn detach_shader(&self, program: GlName, shader: GlName) {
        self.call(format!("detach_shader {program} {shader}"));
    }

    fn bind_frag_data_location(&self, program: GlName, color_number: u32, name: &str) {
        self.call(format!(
            "bind_frag_data_location {program} {color_number} {name}"
        ));
    }

    fn bind_attrib_location(&self, program: GlName, index: u32, name: &str) {
        self.call(format!("bind_attrib_location {program} {index} {name}"));
    }

    fn transform_feedback_varyings(
        &self,
        program: GlName,
        varyings: &[&str],
        mode: VaryingCaptureMode,
    ) {
        self.call(format!(
            "transform_feedback_varyings {program} {varyings:?} {mode:?}"
        ));
    }

    fn link_program(&self, name: GlName) {
        self.call(format!("link_program {name}"));
    }

    fn program_link_status(&self, _name: GlName) -> bool {
        self.link_ok
    }

    fn validate_program(&self, name: GlName) {
        self.call(format!("validate_program {name}"));
    }

    fn program_validate_status(&self, _name: GlName) -> bool {
        self.validate_ok
    }

    fn program_info_log_length(&self, _name: GlName) -> usize {
        self.log_length()
    }

    fn program_info_log(&self, _name: GlName, length: usize) -> String {
        self.fetch_log(length)
    }

    fn attrib_location(&self, program: GlName, name: &str) -> i32 {
        self.call(format!("attrib_location {program} {name}"));
        -1
    }

    fn uniform_location(&self, program: GlName, name: &str) -> i32 {
        self.call(format!("uniform_location {program} {name}"));
        -1
    }

    fn program_uniform_1i(&self, program: GlName, location: i32, value: i32) {
        self.call(format!("program_uniform_1i {program} {location} {value}"));
    }

    fn program_uniform_1f(&self, program: GlName, location: i32, value: f32) {
        self.call(format!("program_uniform_1f {program} {location} {value}"));
    }

    fn program_uniform_3f(&self, program: GlName, location: i32, value: &[f32; 3]) {
        self.call(format!("program_uniform_3f {program} {location} {value:?}"));
    }

    fn program_uniform_4f(&self, program: GlName, location: i32, value: &[f32; 4]) {
        self.call(format!("program_uniform_4f {program} {location} {value:?}"));
    }

    fn program_uniform_matrix_3f(&self, program: GlName, location: i32, value: &[f32; 9]) {
        self.call(format!(
            "program_uniform_matrix_3f {program} {location} {value:?}"
        ));
    }

    fn program_uniform_matrix_4f(&self, program: GlName, location: i32, value: &[f32; 16]) {
        self.call(format!(
            "program_uniform_matrix_4f {program} {location} {value:?}"
        ));
    }

    // --- Vertex arrays ---

    fn create_vertex_array(&self) -> GlName {
        self.mint(Kind::VertexArray)
    }

    fn delete_vertex_array(&self, name: GlName) {
        self.record_delete(Kind::VertexArray, name);
    }

    fn bind_vertex_array(&self, name: GlName) {
        self.call(format!("bind_vertex_array {name}"));
    }

    fn enable_vertex_array_attrib(&self, name: GlName, index: u32) {
        self.call(format!("enable_vertex_array_attrib {name} {index}"));
    }

    fn disable_vertex_array_attrib(&self, name: GlName, index: u32) {
        self.call(format!("disable_vertex_array_attrib {name} {index}"));
    }

    fn vertex_array_element_buffer(&self, name: GlName, buffer: GlName) {
        self.call(format!("vertex_array_element_buffer {name} {buffer}"));
    }

    fn vertex_array_attrib_binding(&self, name: GlName, attrib_index: u32, binding_index: u32) {
        self.call(format!(
            "vertex_array_attrib_binding {name} {attrib_index} {binding_index}"
        ));
    }

    fn vertex_array_binding_divisor(&self, name: GlName, binding_index: u32, divisor: u32) {
        self.call(format!(
            "vertex_array_binding_divisor {name} {binding_index} {divisor}"
        ));
    }

    fn vertex_array_vertex_buffer(
        &self,
        name: GlName,
        binding_index: u32,
        buffer: GlName,
        offset: u64,
        stride: i32,
    ) {
        self.call(format!(
            "vertex_array_vertex_buffer {name} {binding_index} {buffer} {offset} {stride}"
        ));
    }

    fn vertex_array_vertex_buffers(
        &self,
        name: GlName,
        first: u32,
        buffers: &[GlName],
        offsets: &[u64],
        strides: &[i32],
    ) {
        self.call(format!(
            "vertex_array_vertex_buffers {name} {first} {buffers:?} {offsets:?} {strides:?}"
        ));
    }

    fn clear_vertex_array_vertex_buffers(&self, name: GlName, first: u32, count: usize) {
        self.call(format!(
            "clear_vertex_array_vertex_buffers {name} {first} {count}"
        ));
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
        self.call(format!(
            "vertex_array_attrib_format {name} {attrib_index} {size} {component_type:#x} {normalized} {relative_offset}"
        ));
    }

    fn vertex_array_attrib_integer_format(
        &self,
        name: GlName,
        attrib_index: u32,
        size: i32,
        component_type: GlEnum,
        relative_offset: u32,
    ) {
        self.call(format!(
            "vertex_array_attrib_integer_format {name} {attrib_index} {size} {component_type:#x} {relative_offset}"
        ));
    }

    fn vertex_array_attrib_double_format(
        &self,
        name: GlName,
        attrib_index: u32,
        size: i32,
        component_type: GlEnum,
        relative_offset: u32,
    ) {
        self.call(format!(
            "vertex_array_attrib_double_format {name} {attrib_index} {size} {component_type:#x} {relative_offset}"
        ));
    }

    // --- Transform feedback ---

    fn create_transform_feedback(&self) -> GlName {
        self.mint(Kind::TransformFeedback)
    }

    fn delete_transform_feedback(&self, name: GlName) {
        self.record_delete(Kind::TransformFeedback, name);
    }

    fn bind_transform_feedback(&self, name: GlName) {
        self.call(format!("bind_transform_feedback {name}"));
    }

    fn transform_feedback_buffer_base(&self, name: GlName, index: u32, buffer: GlName) {
        self.call(format!(
            "transform_feedback_buffer_base {name} {index} {buffer}"
        ));
    }

    fn transform_feedback_buffer_range(
        &self,
        name: GlName,
        index: u32,
        buffer: GlName,
        offset: u64,
        size: u64,
    ) {
        self.call(format!(
            "transform_feedback_buffer_range {name} {index} {buffer} {offset} {size}"
        ));
    }

    fn begin_transform_feedback(&self, mode: PrimitiveMode) {
        self.call(format!("begin_transform_feedback {mode:?}"));
    }

    fn pause_transform_feedback(&self) {
        self.call(String::from("pause_transform_feedback"));
    }

    fn resume_transform_feedback(&self) {
        self.call(String::from("resume_transform_feedback"));
    }

    fn end_transform_feedback(&self) {
        self.call(String::from("end_transform_feedback"));
    }

    // --- Draws ---

    fn draw_arrays(&self, mode: PrimitiveMode, first: i32, count: i32) {
        self.call(format!("draw_arrays {mode:?} {first} {count}"));
    }

    fn draw_arrays_instanced(&self, mode: PrimitiveMode, first: i32, count: i32, instances: i32) {
        self.call(format!(
            "draw_arrays_instanced {mode:?} {first} {count} {instances}"
        ));
    }

    fn draw_elements(&self, mode: PrimitiveMode, count: i32, index_type: IndexType, offset: usize) {
        self.call(format!(
            "draw_elements {mode:?} {count} {index_type:?} {offset}"
        ));
    }

    fn draw_elements_instanced(
        &self,
        mode: PrimitiveMode,
        count: i32,
        index_type: IndexType,
        offset: usize,
        instances: i32,
    ) {
        self.call(format!(
            "draw_elements_instanced {mode:?} {count} {index_type:?} {offset} {instances}"
        ));
    }
}
