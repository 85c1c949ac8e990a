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

//! Error types for the status-checked operations.
//!
//! These cover the only three operations whose failure the driver reports
//! synchronously through a status flag: shader compilation and program
//! link/validate. The messages are fixed; the driver's own diagnostic text
//! is retrieved separately through the info-log queries.

use std::fmt;

/// An error raised by a [`Shader`](crate::Shader) operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// The shader source exceeds the length the native call can express.
    SourceTooLarge {
        /// The offending source length in bytes.
        len: usize,
    },
    /// The driver reported a false compile status.
    CompileFailed,
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::SourceTooLarge { len } => {
                write!(f, "Shader source too large ({len} bytes)")
            }
            ShaderError::CompileFailed => write!(f, "Error while compiling shader"),
        }
    }
}

impl std::error::Error for ShaderError {}

/// An error raised by a [`Program`](crate::Program) operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramError {
    /// The driver reported a false link status.
    LinkFailed,
    /// The driver reported a false validate status.
    ValidateFailed,
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramError::LinkFailed => write!(f, "Error while linking shader program"),
            ProgramError::ValidateFailed => write!(f, "Shader program is invalid"),
        }
    }
}

impl std::error::Error for ProgramError {}

/// Umbrella error for callers that drive shaders and programs through one
/// code path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlError {
    /// A shader-specific error occurred.
    Shader(ShaderError),
    /// A program-specific error occurred.
    Program(ProgramError),
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlError::Shader(err) => write!(f, "Shader error: {err}"),
            GlError::Program(err) => write!(f, "Program error: {err}"),
        }
    }
}

impl std::error::Error for GlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GlError::Shader(err) => Some(err),
            GlError::Program(err) => Some(err),
        }
    }
}

impl From<ShaderError> for GlError {
    fn from(err: ShaderError) -> Self {
        GlError::Shader(err)
    }
}

impl From<ProgramError> for GlError {
    fn from(err: ProgramError) -> Self {
        GlError::Program(err)
    }
}
