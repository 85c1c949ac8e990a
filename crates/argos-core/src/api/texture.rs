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

//! The texture object owner.
//!
//! Internal formats, pixel formats, texel types and parameter names stay
//! raw [`GlEnum`] values: those constant spaces are open-ended and the
//! driver validates them itself.

use crate::traits::GlDriver;
use crate::{GlEnum, GlName};
use std::mem;
use std::sync::Arc;

/// The shape of a texture, fixed when its name is minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureTarget {
    /// One-dimensional.
    D1,
    /// Two-dimensional.
    D2,
    /// Three-dimensional.
    D3,
    /// Array of one-dimensional layers.
    D1Array,
    /// Array of two-dimensional layers.
    D2Array,
    /// Two-dimensional, unnormalized coordinates, no mipmaps.
    Rectangle,
    /// Six two-dimensional cube faces.
    CubeMap,
    /// Array of cube maps.
    CubeMapArray,
    /// Backed by a buffer object.
    Buffer,
    /// Two-dimensional multisampled.
    D2Multisample,
    /// Array of two-dimensional multisampled layers.
    D2MultisampleArray,
}

/// Owns zero or one texture object name.
#[derive(Debug)]
pub struct Texture {
    driver: Arc<dyn GlDriver>,
    name: GlName,
}

impl Texture {
    /// Creates an owner and immediately mints a name of the given target.
    pub fn new(driver: Arc<dyn GlDriver>, target: TextureTarget) -> Self {
        let mut texture = Self::from_raw(driver, 0);
        texture.create(target);
        texture
    }

    /// Adopts an externally-created name. Name `0` yields an empty owner.
    pub fn from_raw(driver: Arc<dyn GlDriver>, name: GlName) -> Self {
        Self { driver, name }
    }

    /// Releases any currently owned name, then mints a fresh one of the
    /// given target.
    pub fn create(&mut self, target: TextureTarget) {
        self.reset(0);
        self.name = self.driver.create_texture(target);
    }

    /// Deletes the currently owned name (no-op when empty) and adopts
    /// `name`.
    pub fn reset(&mut self, name: GlName) {
        if self.name != 0 {
            self.driver.delete_texture(self.name);
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

    /// Binds the texture to a texture unit.
    pub fn bind(&self, unit: u32) {
        self.driver.bind_texture_unit(unit, self.name);
    }

    /// Allocates immutable 1D storage.
    pub fn storage_1d(&self, levels: i32, internal_format: GlEnum, width: i32) {
        self.driver
            .texture_storage_1d(self.name, levels, internal_format, width);
    }

    /// Allocates immutable 2D storage.
    pub fn storage_2d(&self, levels: i32, internal_format: GlEnum, width: i32, height: i32) {
        self.driver
            .texture_storage_2d(self.name, levels, internal_format, width, height);
    }

    /// Allocates immutable 3D storage.
    pub fn storage_3d(
        &self,
        levels: i32,
        internal_format: GlEnum,
        width: i32,
        height: i32,
        depth: i32,
    ) {
        self.driver
            .texture_storage_3d(self.name, levels, internal_format, width, height, depth);
    }

    /// Allocates immutable multisampled 2D storage.
    pub fn storage_2d_multisample(
        &self,
        samples: i32,
        internal_format: GlEnum,
        width: i32,
        height: i32,
        fixed_sample_locations: bool,
    ) {
        self.driver.texture_storage_2d_multisample(
            self.name,
            samples,
            internal_format,
            width,
            height,
            fixed_sample_locations,
        );
    }

    /// Allocates immutable multisampled array storage.
    #[allow(clippy::too_many_arguments)]
    pub fn storage_3d_multisample(
        &self,
        samples: i32,
        internal_format: GlEnum,
        width: i32,
        height: i32,
        depth: i32,
        fixed_sample_locations: bool,
    ) {
        self.driver.texture_storage_3d_multisample(
            self.name,
            samples,
            internal_format,
            width,
            height,
            depth,
            fixed_sample_locations,
        );
    }

    /// Uploads a region of a 1D level.
    pub fn set_sub_image_1d(
        &self,
        level: i32,
        xoffset: i32,
        width: i32,
        format: GlEnum,
        texel_type: GlEnum,
        pixels: &[u8],
    ) {
        self.driver
            .texture_sub_image_1d(self.name, level, xoffset, width, format, texel_type, pixels);
    }

    /// Uploads a region of a 2D level.
    #[allow(clippy::too_many_arguments)]
    pub fn set_sub_image_2d(
        &self,
        level: i32,
        xoffset: i32,
        yoffset: i32,
        width: i32,
        height: i32,
        format: GlEnum,
        texel_type: GlEnum,
        pixels: &[u8],
    ) {
        self.driver.texture_sub_image_2d(
            self.name, level, xoffset, yoffset, width, height, format, texel_type, pixels,
        );
    }

    /// Uploads a region of a 3D level.
    #[allow(clippy::too_many_arguments)]
    pub fn set_sub_image_3d(
        &self,
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
        self.driver.texture_sub_image_3d(
            self.name, level, xoffset, yoffset, zoffset, width, height, depth, format,
            texel_type, pixels,
        );
    }

    /// Uploads a pre-compressed region of a 1D level.
    pub fn set_compressed_sub_image_1d(
        &self,
        level: i32,
        xoffset: i32,
        width: i32,
        format: GlEnum,
        data: &[u8],
    ) {
        self.driver
            .compressed_texture_sub_image_1d(self.name, level, xoffset, width, format, data);
    }

    /// Uploads a pre-compressed region of a 2D level.
    #[allow(clippy::too_many_arguments)]
    pub fn set_compressed_sub_image_2d(
        &self,
        level: i32,
        xoffset: i32,
        yoffset: i32,
        width: i32,
        height: i32,
        format: GlEnum,
        data: &[u8],
    ) {
        self.driver.compressed_texture_sub_image_2d(
            self.name, level, xoffset, yoffset, width, height, format, data,
        );
    }

    /// Uploads a pre-compressed region of a 3D level.
    #[allow(clippy::too_many_arguments)]
    pub fn set_compressed_sub_image_3d(
        &self,
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
        self.driver.compressed_texture_sub_image_3d(
            self.name, level, xoffset, yoffset, zoffset, width, height, depth, format, data,
        );
    }

    /// Reads a whole level back into `out`.
    pub fn get_image(&self, level: i32, format: GlEnum, texel_type: GlEnum, out: &mut [u8]) {
        self.driver
            .get_texture_image(self.name, level, format, texel_type, out);
    }

    /// Reads a whole compressed level back into `out`.
    pub fn get_compressed_image(&self, level: i32, out: &mut [u8]) {
        self.driver.get_compressed_texture_image(self.name, level, out);
    }

    /// Sets a float-valued parameter.
    pub fn set_parameter_f32(&self, pname: GlEnum, value: f32) {
        self.driver.texture_parameter_f32(self.name, pname, value);
    }

    /// Sets an integer-valued parameter.
    pub fn set_parameter_i32(&self, pname: GlEnum, value: i32) {
        self.driver.texture_parameter_i32(self.name, pname, value);
    }

    /// Sets a float-vector parameter.
    pub fn set_parameter_f32_slice(&self, pname: GlEnum, values: &[f32]) {
        self.driver
            .texture_parameter_f32_slice(self.name, pname, values);
    }

    /// Sets an integer-vector parameter.
    pub fn set_parameter_i32_slice(&self, pname: GlEnum, values: &[i32]) {
        self.driver
            .texture_parameter_i32_slice(self.name, pname, values);
    }

    /// Sets a signed integer-vector parameter without conversion.
    pub fn set_parameter_integer_i32_slice(&self, pname: GlEnum, values: &[i32]) {
        self.driver
            .texture_parameter_integer_i32_slice(self.name, pname, values);
    }

    /// Sets an unsigned integer-vector parameter without conversion.
    pub fn set_parameter_integer_u32_slice(&self, pname: GlEnum, values: &[u32]) {
        self.driver
            .texture_parameter_integer_u32_slice(self.name, pname, values);
    }

    /// Regenerates the mipmap chain from the base level.
    pub fn generate_mipmap(&self) {
        self.driver.generate_texture_mipmap(self.name);
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        self.reset(0);
    }
}
