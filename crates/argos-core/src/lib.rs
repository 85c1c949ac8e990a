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

//! # Argos Core
//!
//! Backend-agnostic contracts and move-only ownership wrappers for OpenGL
//! object names.
//!
//! This crate defines the "common language" of the workspace: the
//! [`GlDriver`] trait that abstracts the native entry points, the typed
//! enums and flag types used at that boundary, and one owner type per
//! native object kind ([`Buffer`], [`Texture`], [`Shader`], [`Program`],
//! [`VertexArray`], [`TransformFeedback`]). The concrete binding to the
//! real driver lives in the `argos-gl` crate, which implements [`GlDriver`]
//! over loaded function pointers.
//!
//! Every owner does exactly three things: mint a name through the driver,
//! forward typed calls one-to-one to native entry points parameterized by
//! that name, and delete the name on drop. Ownership transfers only by
//! move; two owners never refer to the same live name.
//!
//! # Error reporting
//!
//! Only shader compilation and program link/validate are fallible in this
//! crate's own contract. Every other operation is fire-and-forget: a bad
//! argument is reported through the driver's ambient error channel
//! (`glGetError` and the debug callback), which this crate neither polls
//! nor surfaces. Callers who want those diagnostics must query that
//! channel themselves.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod traits;

pub use self::api::*;
pub use self::error::{GlError, ProgramError, ShaderError};
pub use self::traits::GlDriver;

/// A native object name issued by the driver. `0` is the reserved sentinel
/// meaning "no object" (or the default object, depending on the kind).
pub type GlName = u32;

/// A raw native constant for the parameter spaces this crate does not
/// re-type (pixel formats, internal formats, parameter names, attribute
/// component types).
pub type GlEnum = u32;
