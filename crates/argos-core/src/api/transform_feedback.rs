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

//! The transform feedback object owner.

use crate::api::buffer::Buffer;
use crate::api::draw::PrimitiveMode;
use crate::traits::GlDriver;
use crate::GlName;
use std::mem;
use std::sync::Arc;

/// Owns zero or one transform feedback object name.
///
/// The begin/pause/resume/end controls operate on whichever object is
/// currently bound, not on a particular owner, so they are associated
/// functions taking only the driver.
#[derive(Debug)]
pub struct TransformFeedback {
    driver: Arc<dyn GlDriver>,
    name: GlName,
}

impl TransformFeedback {
    /// Creates an owner, minting a name immediately when `create` is true.
    pub fn new(driver: Arc<dyn GlDriver>, create: bool) -> Self {
        let mut feedback = Self::from_raw(driver, 0);
        if create {
            feedback.create();
        }
        feedback
    }

    /// Adopts an externally-created name. Name `0` yields an empty owner.
    pub fn from_raw(driver: Arc<dyn GlDriver>, name: GlName) -> Self {
        Self { driver, name }
    }

    /// Releases any currently owned name, then mints a fresh one.
    pub fn create(&mut self) {
        self.reset(0);
        self.name = self.driver.create_transform_feedback();
    }

    /// Deletes the currently owned name (no-op when empty) and adopts
    /// `name`.
    pub fn reset(&mut self, name: GlName) {
        if self.name != 0 {
            self.driver.delete_transform_feedback(self.name);
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

    /// Binds this object to the transform feedback target.
    pub fn bind(&self) {
        self.driver.bind_transform_feedback(self.name);
    }

    /// Restores the default transform feedback object.
    pub fn unbind(&self) {
        self.driver.bind_transform_feedback(0);
    }

    /// Attaches the whole of `buffer` to a capture index.
    pub fn set_buffer_base(&self, index: u32, buffer: &Buffer) {
        self.driver
            .transform_feedback_buffer_base(self.name, index, buffer.name());
    }

    /// Attaches `size` bytes of `buffer` starting at `offset` to a capture
    /// index.
    pub fn set_buffer_range(&self, index: u32, buffer: &Buffer, offset: u64, size: u64) {
        self.driver
            .transform_feedback_buffer_range(self.name, index, buffer.name(), offset, size);
    }

    /// Starts capture on the currently bound object.
    pub fn begin(driver: &dyn GlDriver, mode: PrimitiveMode) {
        driver.begin_transform_feedback(mode);
    }

    /// Pauses capture on the currently bound object.
    pub fn pause(driver: &dyn GlDriver) {
        driver.pause_transform_feedback();
    }

    /// Resumes a paused capture.
    pub fn resume(driver: &dyn GlDriver) {
        driver.resume_transform_feedback();
    }

    /// Ends capture on the currently bound object.
    pub fn end(driver: &dyn GlDriver) {
        driver.end_transform_feedback();
    }
}

impl Drop for TransformFeedback {
    fn drop(&mut self) {
        self.reset(0);
    }
}
