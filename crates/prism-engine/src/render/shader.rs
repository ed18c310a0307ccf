//! Per-stage WGSL compilation with readable diagnostics.
//!
//! Every stage is parsed and validated on the CPU with naga before it reaches
//! the device, so a broken shader produces a compiler log instead of a device
//! error.

use std::fmt;

use naga::valid::{Capabilities, ValidationFlags, Validator};
use prism_shader::ShaderStage;

/// A stage failed to compile. `diagnostic` is the compiler log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderCompileError {
    pub stage: ShaderStage,
    pub diagnostic: String,
}

impl ShaderCompileError {
    fn new(stage: ShaderStage, diagnostic: impl Into<String>) -> Self {
        Self {
            stage,
            diagnostic: diagnostic.into(),
        }
    }
}

impl fmt::Display for ShaderCompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to compile {} shader!\n{}", self.stage, self.diagnostic)
    }
}

impl std::error::Error for ShaderCompileError {}

fn naga_stage(stage: ShaderStage) -> naga::ShaderStage {
    match stage {
        ShaderStage::Vertex => naga::ShaderStage::Vertex,
        ShaderStage::Fragment => naga::ShaderStage::Fragment,
    }
}

/// Parses and validates one stage's WGSL and checks it declares
/// `entry_point` for that stage.
pub fn validate_stage(
    stage: ShaderStage,
    source: &str,
    entry_point: &str,
) -> Result<(), ShaderCompileError> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| ShaderCompileError::new(stage, e.emit_to_string(source)))?;

    Validator::new(ValidationFlags::all(), Capabilities::default())
        .validate(&module)
        .map_err(|e| ShaderCompileError::new(stage, e.emit_to_string(source)))?;

    let wanted = naga_stage(stage);
    let found = module
        .entry_points
        .iter()
        .any(|ep| ep.stage == wanted && ep.name == entry_point);
    if !found {
        return Err(ShaderCompileError::new(
            stage,
            format!("no @{stage} entry point named `{entry_point}`"),
        ));
    }

    Ok(())
}

/// Validates `source` and creates a GPU shader module from it.
pub fn compile_stage(
    device: &wgpu::Device,
    stage: ShaderStage,
    source: &str,
    entry_point: &str,
) -> Result<wgpu::ShaderModule, ShaderCompileError> {
    validate_stage(stage, source, entry_point)?;

    let label = format!("prism {stage} shader");
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    log::debug!("compiled {stage} shader ({} bytes)", source.len());
    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VS: &str = "
@vertex
fn vs_main(@location(0) p: vec2<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(p, 0.0, 1.0);
}
";

    const FS: &str = "
@group(0) @binding(0) var<uniform> u_color: vec4<f32>;

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return u_color;
}
";

    #[test]
    fn valid_stages_pass() {
        validate_stage(ShaderStage::Vertex, VS, "vs_main").unwrap();
        validate_stage(ShaderStage::Fragment, FS, "fs_main").unwrap();
    }

    #[test]
    fn syntax_error_carries_stage_and_log() {
        let err = validate_stage(ShaderStage::Fragment, "fn fs_main( {", "fs_main").unwrap_err();
        assert_eq!(err.stage, ShaderStage::Fragment);
        assert!(!err.diagnostic.is_empty());
        assert!(err.to_string().starts_with("Failed to compile fragment shader!"));
    }

    #[test]
    fn type_error_is_caught_by_validation() {
        let src = "
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return 1.0;
}
";
        let err = validate_stage(ShaderStage::Fragment, src, "fs_main").unwrap_err();
        assert_eq!(err.stage, ShaderStage::Fragment);
    }

    #[test]
    fn wrong_entry_name_is_reported() {
        let err = validate_stage(ShaderStage::Vertex, VS, "main").unwrap_err();
        assert!(err.diagnostic.contains("`main`"));
    }

    #[test]
    fn entry_of_wrong_stage_is_reported() {
        let err = validate_stage(ShaderStage::Vertex, FS, "fs_main").unwrap_err();
        assert_eq!(err.stage, ShaderStage::Vertex);
        assert!(err.diagnostic.contains("@vertex"));
    }

    #[test]
    fn empty_source_has_no_entry_point() {
        assert!(validate_stage(ShaderStage::Vertex, "", "vs_main").is_err());
    }
}
