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

//! # Argos GL
//!
//! The concrete backend of the workspace: [`NativeDriver`] implements
//! `argos_core::GlDriver` over function pointers loaded from the platform's
//! GL library, using the direct-state-access ("named") entry points
//! throughout.
//!
//! The caller is responsible for creating a context (GL 4.5+ core profile)
//! and making it current before loading; see
//! [`NativeDriver::load_with`].

#![warn(missing_docs)]

mod conversions;
mod driver;

pub use self::conversions::IntoGl;
pub use self::driver::{AdapterInfo, NativeDriver};
