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

//! The program object owner and the typed uniform setters.

use crate::api::shader::{Shader, ShaderStage};
use crate::error::ProgramError;
use crate::traits::GlDriver;
use crate::GlName;
use std::mem;
use std::sync::Arc;

/// How transform feedback varyings are laid out across capture buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VaryingCaptureMode {
    /// All varyings interleaved into the buffer bound at index 0.
    Interleaved,
    /// One varying per bound buffer index.
    Separate,
}

/// A value that can be written to a program uniform location.
///
/// Implemented for the scalar and `glam` vector/matrix types the native
/// `glProgramUniform*` family covers. Matrices are passed column-major
/// without transposition.
pub trait UniformValue {
    /// Writes `self` to `location` of `program` through the driver.
    fn apply(&self, driver: &dyn GlDriver, program: GlName, location: i32);
}

impl UniformValue for i32 {
    fn apply(&self, driver: &dyn GlDriver, program: GlName, location: i32) {
        driver.program_uniform_1i(program, location, *self);
    }
}

impl UniformValue for f32 {
    fn apply(&self, driver: &dyn GlDriver, program: GlName, location: i32) {
        driver.program_uniform_1f(program, location, *self);
    }
}

impl UniformValue for glam::Vec3 {
    fn apply(&self, driver: &dyn GlDriver, program: GlName, location: i32) {
        driver.program_uniform_3f(program, location, &self.to_array());
    }
}

impl UniformValue for glam::Vec4 {
    fn apply(&self, driver: &dyn GlDriver, program: GlName, location: i32) {
        driver.program_uniform_4f(program, location, &self.to_array());
    }
}

impl UniformValue for glam::Mat3 {
    fn apply(&self, driver: &dyn GlDriver, program: GlName, location: i32) {
        driver.program_uniform_matrix_3f(program, location, &self.to_cols_array());
    }
}

impl UniformValue for glam::Mat4 {
    fn apply(&self, driver: &dyn GlDriver, program: GlName, location: i32) {
        driver.program_uniform_matrix_4f(program, location, &self.to_cols_array());
    }
}

/// Owns zero or one program object name.
///
/// Link and validate are the fallible operations: each performs the native
/// action, checks the driver's status flag once, and fails with the
/// matching [`ProgramError`] kind carrying a fixed message. A failed link
/// or validate leaves the owner holding its name; diagnostics come from
/// [`info_log`](Program::info_log).
#[derive(Debug)]
pub struct Program {
    driver: Arc<dyn GlDriver>,
    name: GlName,
}

impl Program {
    /// Creates an owner, minting a name immediately when `create` is true.
    pub fn new(driver: Arc<dyn GlDriver>, create: bool) -> Self {
        let mut program = Self::from_raw(driver, 0);
        if create {
            program.create();
        }
        program
    }

    /// Creates a separable single-stage program from source strings in one
    /// step. Compile and link status are reported through the program's
    /// info log; callers that need a hard failure should
    /// [`link`](Program::link) explicitly.
    pub fn separable(driver: Arc<dyn GlDriver>, stage: ShaderStage, sources: &[&str]) -> Self {
        let mut program = Self::from_raw(driver, 0);
        program.create_separable(stage, sources);
        program
    }

    /// Adopts an externally-created name. Name `0` yields an empty owner.
    pub fn from_raw(driver: Arc<dyn GlDriver>, name: GlName) -> Self {
        Self { driver, name }
    }

    /// Releases any currently owned name, then mints a fresh one.
    pub fn create(&mut self) {
        self.reset(0);
        self.name = self.driver.create_program();
    }

    /// Releases any currently owned name, then creates a separable
    /// single-stage program from `sources`.
    pub fn create_separable(&mut self, stage: ShaderStage, sources: &[&str]) {
        self.reset(0);
        self.name = self.driver.create_shader_program(stage, sources);
    }

    /// Deletes the currently owned name (no-op when empty) and adopts
    /// `name`.
    pub fn reset(&mut self, name: GlName) {
        if self.name != 0 {
            self.driver.delete_program(self.name);
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

    /// Installs the program into the rendering state.
    pub fn use_program(&self) {
        self.driver.use_program(self.name);
    }

    /// Attaches a shader for the next link. The shader is borrowed, not
    /// owned; it must stay alive until detached or the program is linked.
    pub fn attach(&self, shader: &Shader) {
        self.driver.attach_shader(self.name, shader.name());
    }

    /// Detaches a previously attached shader.
    pub fn detach(&self, shader: &Shader) {
        self.driver.detach_shader(self.name, shader.name());
    }

    /// Binds a fragment output variable to a color number. Takes effect at
    /// the next link.
    pub fn bind_frag_data_location(&self, color_number: u32, name: &str) {
        self.driver
            .bind_frag_data_location(self.name, color_number, name);
    }

    /// Binds an attribute variable to a location. Takes effect at the next
    /// link.
    pub fn bind_attrib_location(&self, index: u32, name: &str) {
        self.driver.bind_attrib_location(self.name, index, name);
    }

    /// Selects the varyings to capture during transform feedback. Takes
    /// effect at the next link.
    pub fn set_transform_feedback_varyings(&self, varyings: &[&str], mode: VaryingCaptureMode) {
        self.driver
            .transform_feedback_varyings(self.name, varyings, mode);
    }

    /// Links the attached shaders and checks the driver's status flag.
    pub fn link(&self) -> Result<(), ProgramError> {
        self.driver.link_program(self.name);
        if self.driver.program_link_status(self.name) {
            Ok(())
        } else {
            Err(ProgramError::LinkFailed)
        }
    }

    /// Asks the driver whether the program could execute in the current
    /// state, and checks the resulting status flag.
    pub fn validate(&self) -> Result<(), ProgramError> {
        self.driver.validate_program(self.name);
        if self.driver.program_validate_status(self.name) {
            Ok(())
        } else {
            Err(ProgramError::ValidateFailed)
        }
    }

    /// Fetches the driver's diagnostic log for this program.
    ///
    /// Returns an empty string, without issuing a content fetch, when the
    /// driver reports a zero-length log; otherwise fetches exactly the
    /// reported number of bytes, once.
    pub fn info_log(&self) -> String {
        let length = self.driver.program_info_log_length(self.name);
        if length == 0 {
            String::new()
        } else {
            self.driver.program_info_log(self.name, length)
        }
    }

    /// Location of an active attribute, `-1` if absent.
    pub fn attrib_location(&self, name: &str) -> i32 {
        self.driver.attrib_location(self.name, name)
    }

    /// Location of an active uniform, `-1` if absent.
    pub fn uniform_location(&self, name: &str) -> i32 {
        self.driver.uniform_location(self.name, name)
    }

    /// Writes a typed value to a uniform location.
    pub fn set_uniform<U: UniformValue>(&self, location: i32, value: U) {
        value.apply(self.driver.as_ref(), self.name, location);
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        self.reset(0);
    }
}
