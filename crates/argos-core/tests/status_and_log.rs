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

//! Status-checked operations and info-log fetch behavior against fake
//! drivers scripted to succeed or fail.

mod common;

use argos_core::{Program, ProgramError, Shader, ShaderError, ShaderStage, VaryingCaptureMode};
use common::RecordingDriver;
use std::sync::atomic::Ordering;
use std::sync::Arc;

#[test]
fn compile_success_is_ok() {
    let driver = Arc::new(RecordingDriver::new());
    let shader = Shader::with_source(driver.clone(), ShaderStage::Vertex, "void main() {}")
        .expect("source fits");
    assert_eq!(shader.compile(), Ok(()));
    assert!(driver.saw_call(&format!("compile_shader {}", shader.name())));
}

#[test]
fn compile_failure_reports_the_error_and_keeps_the_handle() {
    let driver = Arc::new(RecordingDriver {
        compile_ok: false,
        ..RecordingDriver::new()
    });

    let shader = Shader::new(driver.clone(), ShaderStage::Fragment);
    let name = shader.name();

    assert_eq!(shader.compile(), Err(ShaderError::CompileFailed));
    // The owner retains its (now-invalid) handle; no implicit reset.
    assert!(shader.is_valid());
    assert_eq!(shader.name(), name);
    assert_eq!(driver.delete_count(name), 0);
}

#[test]
fn link_failure_reports_the_error_and_keeps_the_handle() {
    let driver = Arc::new(RecordingDriver {
        link_ok: false,
        ..RecordingDriver::new()
    });

    let program = Program::new(driver.clone(), true);
    let name = program.name();

    assert_eq!(program.link(), Err(ProgramError::LinkFailed));
    assert!(program.is_valid());
    assert_eq!(program.name(), name);
    assert_eq!(driver.delete_count(name), 0);
}

#[test]
fn validate_failure_reports_the_error() {
    let driver = Arc::new(RecordingDriver {
        validate_ok: false,
        ..RecordingDriver::new()
    });

    let program = Program::new(driver.clone(), true);
    assert_eq!(program.validate(), Err(ProgramError::ValidateFailed));
    assert!(driver.saw_call(&format!("validate_program {}", program.name())));
}

#[test]
fn link_and_validate_success_are_ok() {
    let driver = Arc::new(RecordingDriver::new());
    let program = Program::new(driver.clone(), true);
    assert_eq!(program.link(), Ok(()));
    assert_eq!(program.validate(), Ok(()));
}

#[test]
fn empty_info_log_skips_the_content_fetch() {
    let driver = Arc::new(RecordingDriver::new());

    let shader = Shader::new(driver.clone(), ShaderStage::Vertex);
    assert_eq!(shader.info_log(), "");
    assert_eq!(driver.log_fetches.load(Ordering::Relaxed), 0);

    let program = Program::new(driver.clone(), true);
    assert_eq!(program.info_log(), "");
    assert_eq!(driver.log_fetches.load(Ordering::Relaxed), 0);
}

#[test]
fn nonempty_info_log_is_fetched_once_with_the_reported_length() {
    let diagnostic = "0:12(3): error: `frag_color` undeclared";
    let driver = Arc::new(RecordingDriver {
        info_log: Some(String::from(diagnostic)),
        ..RecordingDriver::new()
    });

    let shader = Shader::new(driver.clone(), ShaderStage::Fragment);
    assert_eq!(shader.info_log(), diagnostic);
    assert_eq!(driver.log_fetches.load(Ordering::Relaxed), 1);
    assert_eq!(
        driver.last_fetch_len.load(Ordering::Relaxed),
        diagnostic.len()
    );
}

#[test]
fn program_info_log_uses_the_program_queries() {
    let diagnostic = "error: vertex shader lacks `main'";
    let driver = Arc::new(RecordingDriver {
        info_log: Some(String::from(diagnostic)),
        ..RecordingDriver::new()
    });

    let program = Program::new(driver.clone(), true);
    assert_eq!(program.info_log(), diagnostic);
    assert_eq!(driver.log_fetches.load(Ordering::Relaxed), 1);
}

#[test]
fn failed_compile_then_log_is_the_documented_recovery_path() {
    let diagnostic = "0:1(1): error: syntax error, unexpected NEW_IDENTIFIER";
    let driver = Arc::new(RecordingDriver {
        compile_ok: false,
        info_log: Some(String::from(diagnostic)),
        ..RecordingDriver::new()
    });

    let shader = Shader::with_source(driver.clone(), ShaderStage::Vertex, "nonsense")
        .expect("source fits");
    let result = shader.compile();
    assert_eq!(result, Err(ShaderError::CompileFailed));
    // The error carries a fixed message; driver diagnostics come from the
    // separate info-log query.
    assert_eq!(
        result.unwrap_err().to_string(),
        "Error while compiling shader"
    );
    assert_eq!(shader.info_log(), diagnostic);
}

#[test]
fn separable_program_forwards_stage_and_sources() {
    let driver = Arc::new(RecordingDriver::new());
    let program = Program::separable(
        driver.clone(),
        ShaderStage::Vertex,
        &["#version 450 core\n", "void main() {}\n"],
    );
    assert!(program.is_valid());
    assert!(driver.saw_call(&format!(
        "create_shader_program Vertex 2 {}",
        program.name()
    )));
}

#[test]
fn shader_source_is_set_without_compiling() {
    let driver = Arc::new(RecordingDriver::new());
    let shader = Shader::with_source(driver.clone(), ShaderStage::Vertex, "void main() {}")
        .expect("source fits");
    assert!(driver.saw_call(&format!("shader_source {} 1", shader.name())));
    assert!(!driver.saw_call(&format!("compile_shader {}", shader.name())));
}

#[test]
fn varyings_are_recorded_for_the_next_link() {
    let driver = Arc::new(RecordingDriver::new());
    let program = Program::new(driver.clone(), true);
    program.set_transform_feedback_varyings(&["out_position"], VaryingCaptureMode::Interleaved);
    assert!(driver.saw_call(&format!(
        "transform_feedback_varyings {} [\"out_position\"] Interleaved",
        program.name()
    )));
}
