//! LandingForge CLI - Bridge interface for automation
//!
//! Commands: catalog, validate, generate
//! Outputs JSON to stdout
//! Returns non-zero on validation or generation failure

use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use landingforge_core::{
    export_named, ExportFile, GeneratorConfig, LandingGenerator, RawCampaignInput,
    GENERATOR_VERSION, RECOGNIZED_LANGUAGES, RECOGNIZED_TARGET_ACTIONS,
    RECOGNIZED_TRAFFIC_SOURCES, SUGGESTED_THEMES,
};

#[derive(Parser)]
#[command(name = "landingforge-cli")]
#[command(about = "LandingForge CLI - Campaign Landing Compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List campaign option catalogs
    Catalog,

    /// Validate campaign parameters
    Validate {
        /// JSON payload (RawCampaignInput)
        #[arg(short, long)]
        payload: String,
    },

    /// Generate a landing page and package exports
    Generate {
        /// JSON payload (RawCampaignInput)
        #[arg(short, long)]
        payload: String,

        /// Export formats, repeatable (html, php)
        #[arg(short, long, default_value = "html")]
        format: Vec<String>,

        /// Directory to write export files into
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Simulated processing delay in milliseconds
        #[arg(long, default_value_t = 3000)]
        delay_ms: u64,

        /// Abort the attempt after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Seed for the quality scorer
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries JSON only.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog => {
            let catalogs = serde_json::json!({
                "generatorVersion": GENERATOR_VERSION,
                "themes": SUGGESTED_THEMES,
                "languages": RECOGNIZED_LANGUAGES,
                "trafficSources": RECOGNIZED_TRAFFIC_SOURCES,
                "targetActions": RECOGNIZED_TARGET_ACTIONS,
            });
            println!("{}", serde_json::to_string_pretty(&catalogs).unwrap());
            ExitCode::SUCCESS
        }

        Commands::Validate { payload } => {
            let input: RawCampaignInput = match serde_json::from_str(&payload) {
                Ok(i) => i,
                Err(e) => {
                    println!(r#"{{"valid": false, "error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            match landingforge_core::validate(&input) {
                Ok(params) => {
                    let output = serde_json::json!({
                        "valid": true,
                        "parameters": params,
                    });
                    println!("{}", serde_json::to_string_pretty(&output).unwrap());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    let output = serde_json::json!({
                        "valid": false,
                        "error": e.to_string(),
                    });
                    println!("{}", serde_json::to_string_pretty(&output).unwrap());
                    ExitCode::from(2) // Validation failure
                }
            }
        }

        Commands::Generate {
            payload,
            format,
            out,
            delay_ms,
            timeout_ms,
            seed,
        } => {
            let input: RawCampaignInput = match serde_json::from_str(&payload) {
                Ok(i) => i,
                Err(e) => {
                    println!(r#"{{"success": false, "error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            let config = GeneratorConfig {
                processing_delay: Duration::from_millis(delay_ms),
                timeout: timeout_ms.map(Duration::from_millis),
            };
            let generator = match seed {
                Some(seed) => LandingGenerator::seeded(config, seed),
                None => LandingGenerator::new(config),
            };

            let artifact = match generator.generate(&input).await {
                Ok(artifact) => artifact,
                Err(e) => {
                    let output = serde_json::json!({
                        "success": false,
                        "error": e.to_string(),
                    });
                    println!("{}", serde_json::to_string(&output).unwrap());
                    return ExitCode::from(2); // Validation or generation failure
                }
            };

            let mut exports = Vec::with_capacity(format.len());
            for name in &format {
                match export_named(&artifact, name) {
                    Ok(file) => exports.push(file),
                    Err(e) => {
                        let output = serde_json::json!({
                            "success": false,
                            "error": e.to_string(),
                        });
                        println!("{}", serde_json::to_string(&output).unwrap());
                        return ExitCode::from(2);
                    }
                }
            }

            let written = match out {
                Some(dir) => match write_exports(&dir, &exports) {
                    Ok(paths) => Some(paths),
                    Err(e) => {
                        let output = serde_json::json!({
                            "success": false,
                            "error": format!("failed to write exports: {}", e),
                        });
                        println!("{}", serde_json::to_string(&output).unwrap());
                        return ExitCode::FAILURE;
                    }
                },
                None => None,
            };

            let exports_json: Vec<_> = exports
                .iter()
                .map(|file| {
                    serde_json::json!({
                        "filename": file.filename,
                        "mimeType": file.mime_type,
                        "sha256": file.sha256,
                        "dataBase64": base64::Engine::encode(
                            &base64::engine::general_purpose::STANDARD,
                            &file.bytes,
                        ),
                    })
                })
                .collect();

            let output = serde_json::json!({
                "success": true,
                "generatorVersion": GENERATOR_VERSION,
                "artifact": &*artifact,
                "exports": exports_json,
                "written": written,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
            ExitCode::SUCCESS
        }
    }
}

/// Writes export files into `dir`, creating it if needed.
fn write_exports(dir: &Path, files: &[ExportFile]) -> io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut paths = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.filename);
        std::fs::write(&path, &file.bytes)?;
        paths.push(path);
    }
    Ok(paths)
}
