use std::path::PathBuf;

use clap::Parser;
use prism_engine::device::GpuInit;
use prism_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// The shader file shipped next to this crate.
pub const DEFAULT_SHADER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/res/shaders/basic.shader");

/// Animates white light splitting into a spectrum through a prism.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "prism",
    version,
    after_help = "Set RUST_LOG (e.g. RUST_LOG=debug) to change log verbosity."
)]
pub struct Cli {
    /// Tagged shader file with `#shader vertex` and `#shader fragment` sections.
    #[arg(value_name = "SHADER_FILE", default_value = DEFAULT_SHADER_PATH)]
    pub shader_path: PathBuf,
}

/// Demo settings. Everything except the shader path is fixed at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub shader_path: PathBuf,
    /// Write shader colors to the screen without sRGB encoding.
    pub linear_output: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Prism".to_string(),
            width: 1280.0,
            height: 960.0,
            shader_path: PathBuf::from(DEFAULT_SHADER_PATH),
            linear_output: true,
        }
    }
}

impl From<Cli> for DemoConfig {
    fn from(cli: Cli) -> Self {
        Self {
            shader_path: cli.shader_path,
            ..Self::default()
        }
    }
}

impl DemoConfig {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            // The scene is laid out in NDC; resizing only stretches it.
            resizable: true,
        }
    }

    pub fn gpu_init(&self) -> GpuInit {
        GpuInit {
            prefer_srgb: !self.linear_output,
            ..GpuInit::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<DemoConfig, clap::Error> {
        Cli::try_parse_from(std::iter::once("prism").chain(args.iter().copied())).map(DemoConfig::from)
    }

    #[test]
    fn no_args_uses_defaults() {
        assert_eq!(parse(&[]).unwrap(), DemoConfig::default());
    }

    #[test]
    fn positional_sets_shader_path() {
        assert_eq!(parse(&["my.shader"]).unwrap().shader_path, PathBuf::from("my.shader"));
    }

    #[test]
    fn double_dash_allows_leading_hyphen_path() {
        assert_eq!(
            parse(&["--", "-odd.shader"]).unwrap().shader_path,
            PathBuf::from("-odd.shader")
        );
    }

    #[test]
    fn help_flags() {
        assert_eq!(parse(&["-h"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
        assert_eq!(parse(&["x", "--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse(&["--fast"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn two_paths_are_rejected() {
        assert!(parse(&["a", "b"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn window_matches_config() {
        let rc = DemoConfig::default().runtime_config();
        assert_eq!(rc.title, "Prism");
        assert_eq!(rc.initial_size, LogicalSize::new(1280.0, 960.0));
    }

    #[test]
    fn linear_output_disables_srgb() {
        let cfg = DemoConfig::default();
        assert!(!cfg.gpu_init().prefer_srgb);
        assert_eq!(cfg.gpu_init().present_mode, wgpu::PresentMode::Fifo);
    }
}
