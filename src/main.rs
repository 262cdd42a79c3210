//! fontscope - A terminal client for PDF font analysis
//!
//! This is the binary entry point. All logic lives in the workspace crates.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use fontscope_app::config::{
    apply_api_url_override, default_config_path, init_config_file, load_settings,
};
use fontscope_app::{Engine, Settings};
use fontscope_core::AnalysisVariant;

/// fontscope - Identify the fonts used in a PDF
#[derive(Parser, Debug)]
#[command(name = "fontscope")]
#[command(about = "A terminal client for PDF font analysis", long_about = None)]
struct Args {
    /// PDF file to select on startup
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Analysis to run: basic, detailed, advanced or ocr
    #[arg(long, value_name = "VARIANT")]
    variant: Option<AnalysisVariant>,

    /// Base URL of the analysis service
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long, requires = "path")]
    headless: bool,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config_path = args.config.clone().or_else(default_config_path);

    if args.init_config {
        let Some(path) = config_path else {
            eprintln!("❌ No config directory on this platform; pass --config <FILE>");
            std::process::exit(2);
        };
        if init_config_file(&path)? {
            eprintln!("✅ Wrote default config to {}", path.display());
        } else {
            eprintln!("Config already exists: {}", path.display());
        }
        return Ok(());
    }

    if let Err(e) = fontscope_core::logging::init() {
        eprintln!("⚠ Logging disabled: {}", e);
    }

    let mut settings = config_path
        .as_deref()
        .map(load_settings)
        .unwrap_or_else(Settings::default);
    apply_api_url_override(&mut settings, args.api_url.as_deref());
    let variant = args.variant.unwrap_or(settings.upload.default_variant);

    let mut engine = match Engine::new(settings) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    if args.headless {
        // `requires = "path"` guarantees a path here
        let Some(path) = args.path else {
            std::process::exit(2);
        };
        let outcome = headless::runner::run_headless(engine, path, variant).await?;
        if !outcome.is_success() {
            std::process::exit(1);
        }
        return Ok(());
    }

    engine.state.selected_variant = variant;
    if let Some(path) = args.path {
        engine.select_path(path);
    }

    fontscope_tui::run(engine).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_all_flags() {
        let args = Args::try_parse_from([
            "fontscope",
            "doc.pdf",
            "--variant",
            "ocr",
            "--api-url",
            "http://analysis:8080",
            "--config",
            "/tmp/fontscope.toml",
            "--headless",
        ])
        .unwrap();

        assert_eq!(args.path, Some(PathBuf::from("doc.pdf")));
        assert_eq!(args.variant, Some(AnalysisVariant::Ocr));
        assert_eq!(args.api_url.as_deref(), Some("http://analysis:8080"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/fontscope.toml")));
        assert!(args.headless);
        assert!(!args.init_config);
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        assert!(Args::try_parse_from(["fontscope", "--variant", "fast"]).is_err());
    }

    #[test]
    fn test_headless_requires_path() {
        assert!(Args::try_parse_from(["fontscope", "--headless"]).is_err());
    }
}
