//! `forge`: generate a persona bundle from a config file.
//!
//! # Usage
//!
//! ```bash
//! forge persona.yaml            # print the bundle as JSON
//! forge persona.json out/       # write the ten files under out/
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: tracing filter (default: "info,persona_forge=debug")

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use persona_forge::{generate, Bundle, GenerateConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,persona_forge=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config_path, out_dir) = match args.as_slice() {
        [config] => (PathBuf::from(config), None),
        [config, out] => (PathBuf::from(config), Some(PathBuf::from(out))),
        _ => bail!("usage: forge <config.(json|yaml)> [out-dir]"),
    };

    let bundle = build(&config_path)?;
    match out_dir {
        Some(dir) => {
            let written = write_bundle(&bundle, &dir)?;
            tracing::info!("Wrote {} files to {}", written, dir.display());
        }
        None => println!("{}", bundle.to_json().context("serializing bundle")?),
    }
    Ok(())
}

fn build(config_path: &Path) -> Result<Bundle> {
    let config = GenerateConfig::from_file(config_path)
        .with_context(|| format!("reading config {}", config_path.display()))?;
    let bundle = generate(&config).context("generating bundle")?;
    tracing::debug!(
        "Generated {} documents for {}",
        bundle.files.len(),
        config.name.as_deref().unwrap_or_default()
    );
    Ok(bundle)
}

/// Write every file under `dir`, creating parent directories.
fn write_bundle(bundle: &Bundle, dir: &Path) -> Result<usize> {
    for file in &bundle.files {
        let target = dir.join(&file.path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(&target, &file.content)
            .with_context(|| format!("writing {}", target.display()))?;
    }
    Ok(bundle.files.len())
}
