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

//! The shader object owner.

use crate::error::ShaderError;
use crate::traits::GlDriver;
use crate::GlName;
use std::mem;
use std::sync::Arc;

/// The programmable pipeline stage a shader object is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex processing.
    Vertex,
    /// Tessellation control.
    TessControl,
    /// Tessellation evaluation.
    TessEvaluation,
    /// Geometry processing.
    Geometry,
    /// Fragment processing.
    Fragment,
    /// Compute dispatch.
    Compute,
}

/// Owns zero or one shader object name.
///
/// Compilation is the one fallible operation in the owner's own contract:
/// [`compile`](Shader::compile) checks the driver's status flag and fails
/// with [`ShaderError::CompileFailed`]. The error message is fixed; the
/// driver's diagnostic text is retrieved separately with
/// [`info_log`](Shader::info_log). A failed compile leaves the owner
/// holding its (now-invalid) name.
#[derive(Debug)]
pub struct Shader {
    driver: Arc<dyn GlDriver>,
    name: GlName,
}

impl Shader {
    /// Creates an owner and immediately mints a name for `stage`.
    pub fn new(driver: Arc<dyn GlDriver>, stage: ShaderStage) -> Self {
        let mut shader = Self::from_raw(driver, 0);
        shader.create(stage);
        shader
    }

    /// Creates an owner for `stage` and sets its source in one step. The
    /// shader is not compiled.
    pub fn with_source(
        driver: Arc<dyn GlDriver>,
        stage: ShaderStage,
        source: &str,
    ) -> Result<Self, ShaderError> {
        let shader = Self::new(driver, stage);
        shader.set_source(source)?;
        Ok(shader)
    }

    /// Adopts an externally-created name. Name `0` yields an empty owner.
    pub fn from_raw(driver: Arc<dyn GlDriver>, name: GlName) -> Self {
        Self { driver, name }
    }

    /// Releases any currently owned name, then mints a fresh one for
    /// `stage`.
    pub fn create(&mut self, stage: ShaderStage) {
        self.reset(0);
        self.name = self.driver.create_shader(stage);
    }

    /// Deletes the currently owned name (no-op when empty) and adopts
    /// `name`.
    pub fn reset(&mut self, name: GlName) {
        if self.name != 0 {
            self.driver.delete_shader(self.name);
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

    /// Replaces the shader's source with a single string.
    ///
    /// Fails with [`ShaderError::SourceTooLarge`] when the length cannot be
    /// expressed in the native call's signed 32-bit length parameter.
    pub fn set_source(&self, source: &str) -> Result<(), ShaderError> {
        if source.len() > i32::MAX as usize {
            return Err(ShaderError::SourceTooLarge { len: source.len() });
        }
        self.driver.shader_source(self.name, &[source]);
        Ok(())
    }

    /// Replaces the shader's source with several strings, concatenated by
    /// the driver at compile time.
    pub fn set_sources(&self, sources: &[&str]) {
        self.driver.shader_source(self.name, sources);
    }

    /// Compiles the current source and checks the driver's status flag.
    pub fn compile(&self) -> Result<(), ShaderError> {
        self.driver.compile_shader(self.name);
        if self.driver.shader_compile_status(self.name) {
            Ok(())
        } else {
            Err(ShaderError::CompileFailed)
        }
    }

    /// Fetches the driver's diagnostic log for this shader.
    ///
    /// Returns an empty string, without issuing a content fetch, when the
    /// driver reports a zero-length log; otherwise fetches exactly the
    /// reported number of bytes, once.
    pub fn info_log(&self) -> String {
        let length = self.driver.shader_info_log_length(self.name);
        if length == 0 {
            String::new()
        } else {
            self.driver.shader_info_log(self.name, length)
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        self.reset(0);
    }
}
