//! White light through a prism, animated into a color spectrum.

mod app;
mod config;
mod renderer;
mod scene;
mod spectrum;

use anyhow::{Context, Result};
use clap::Parser;
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::render::validate_stage;
use prism_engine::window::Runtime;
use prism_shader::{ShaderProgramSource, ShaderStage};

use crate::app::PrismApp;
use crate::config::{Cli, DemoConfig};
use crate::renderer::{FRAGMENT_ENTRY, VERTEX_ENTRY};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::from(Cli::parse());

    let source = load_program(&config)?;

    log::info!("opening {}x{} window", config.width, config.height);
    Runtime::run(config.runtime_config(), config.gpu_init(), PrismApp::new(source))
}

/// Loads the tagged shader file and checks both stages before a window exists.
fn load_program(config: &DemoConfig) -> Result<ShaderProgramSource> {
    let source = prism_shader::load(&config.shader_path)?;
    source
        .require_complete()
        .with_context(|| format!("in {}", config.shader_path.display()))?;

    log::debug!("vertex stage:\n{}", source.vertex);
    log::debug!("fragment stage:\n{}", source.fragment);

    check_program(&source).with_context(|| format!("in {}", config.shader_path.display()))?;
    Ok(source)
}

fn check_program(source: &ShaderProgramSource) -> Result<()> {
    for (stage, entry) in [
        (ShaderStage::Vertex, VERTEX_ENTRY),
        (ShaderStage::Fragment, FRAGMENT_ENTRY),
    ] {
        if let Err(e) = validate_stage(stage, source.stage(stage), entry) {
            log::error!("{e}");
            return Err(e.into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUNDLED: &str = include_str!("../res/shaders/basic.shader");

    #[test]
    fn bundled_shader_splits_into_both_stages() {
        let source = prism_shader::parse_str(BUNDLED);
        source.require_complete().unwrap();
        assert!(source.vertex.contains("@vertex"));
        assert!(!source.vertex.contains("@fragment"));
        assert!(source.fragment.contains("u_color"));
        assert!(!source.fragment.contains("#shader"));
    }

    #[test]
    fn bundled_shader_compiles() {
        check_program(&prism_shader::parse_str(BUNDLED)).unwrap();
    }

    #[test]
    fn swapped_stages_fail_to_compile() {
        let source = prism_shader::parse_str(BUNDLED);
        let swapped = ShaderProgramSource {
            vertex: source.fragment,
            fragment: source.vertex,
        };
        assert!(check_program(&swapped).is_err());
    }

    #[test]
    fn default_config_loads_bundled_file() {
        let source = load_program(&DemoConfig::default()).unwrap();
        assert_eq!(source, prism_shader::parse_str(BUNDLED));
    }

    #[test]
    fn missing_file_is_an_error() {
        let config = DemoConfig {
            shader_path: "/no/such/dir/basic.shader".into(),
            ..DemoConfig::default()
        };
        let err = load_program(&config).unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/dir/basic.shader"));
    }
}
