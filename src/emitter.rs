//! Asset Emitter - Single Entry Point
//!
//! Ensures the output directory, writes every asset in fixed order and
//! reports what was written. A progress line is only printed after its file
//! has been fully written.

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::hashing::{compute_manifest_hash, sha256_hex};
use crate::palette::PALETTE;
use crate::templates::{Asset, AssetKind};
use crate::ENGINE_VERSION;

/// Relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/logos";

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write report: {0}")]
    Report(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EmitError {
    /// Directory creation and file writes; everything a run can leave half done.
    pub fn is_filesystem(&self) -> bool {
        matches!(self, EmitError::CreateDir { .. } | EmitError::WriteFile { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmittedAsset {
    pub kind: AssetKind,
    pub file_name: String,
    pub path: PathBuf,
    pub bytes: usize,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmissionManifest {
    pub engine_version: String,
    pub generated_at: DateTime<Utc>,
    pub output_dir: PathBuf,
    pub assets: Vec<EmittedAsset>,
    /// Covers file names and content hashes only, so it is identical for
    /// every run regardless of time or output location.
    pub manifest_hash: String,
}

#[derive(Serialize)]
struct AssetDigest<'a> {
    file_name: &'a str,
    sha256: &'a str,
}

pub struct Emitter {
    output_dir: PathBuf,
}

impl Emitter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory and any missing ancestors.
    pub fn ensure_output_dir(&self) -> Result<(), EmitError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| EmitError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })
    }

    /// Write one asset, replacing whatever was at its path.
    pub fn write_asset(&self, kind: AssetKind) -> Result<EmittedAsset, EmitError> {
        let asset = Asset::new(kind, &self.output_dir);
        let write_err = |source: io::Error| EmitError::WriteFile {
            path: asset.path.clone(),
            source,
        };

        // `File::create` truncates; the handle closes on drop on every path.
        let mut file = File::create(&asset.path).map_err(write_err)?;
        file.write_all(asset.body.as_bytes()).map_err(write_err)?;
        file.flush().map_err(write_err)?;

        let emitted = EmittedAsset {
            kind,
            file_name: kind.file_name().to_string(),
            bytes: asset.body.len(),
            sha256: sha256_hex(asset.body.as_bytes()),
            path: asset.path,
        };
        debug!(
            "wrote {} ({} bytes, sha256 {})",
            emitted.path.display(),
            emitted.bytes,
            emitted.sha256
        );
        Ok(emitted)
    }

    /// Emit all four assets and report to `report`.
    ///
    /// Stops at the first failure. Files written before it are left in place.
    pub fn emit_all<W: Write>(
        &self,
        report: &mut W,
        format: ReportFormat,
    ) -> Result<EmissionManifest, EmitError> {
        self.ensure_output_dir()?;

        if format == ReportFormat::Human {
            writeln!(report, "📝 Generating TRON Vanity logos...")?;
            writeln!(report)?;
        }

        let mut assets = Vec::with_capacity(AssetKind::ALL.len());
        for kind in AssetKind::ALL {
            let emitted = self.write_asset(kind)?;
            if format == ReportFormat::Human {
                writeln!(report, "✓ {} generated: {}", kind.label(), emitted.path.display())?;
            }
            assets.push(emitted);
        }

        let manifest = self.build_manifest(assets)?;
        info!(
            "emitted {} assets to {} (manifest {})",
            manifest.assets.len(),
            self.output_dir.display(),
            manifest.manifest_hash
        );

        match format {
            ReportFormat::Human => self.write_summary(report)?,
            ReportFormat::Json => {
                writeln!(report, "{}", serde_json::to_string_pretty(&manifest)?)?;
            }
        }

        Ok(manifest)
    }

    fn build_manifest(&self, assets: Vec<EmittedAsset>) -> Result<EmissionManifest, EmitError> {
        let digests: Vec<_> = assets
            .iter()
            .map(|a| AssetDigest { file_name: &a.file_name, sha256: &a.sha256 })
            .collect();
        let manifest_hash = compute_manifest_hash(&digests)?;

        Ok(EmissionManifest {
            engine_version: ENGINE_VERSION.to_string(),
            generated_at: Utc::now(),
            output_dir: self.output_dir.clone(),
            assets,
            manifest_hash,
        })
    }

    fn write_summary<W: Write>(&self, report: &mut W) -> io::Result<()> {
        writeln!(report)?;
        writeln!(report, "🎨 Color palette:")?;
        for swatch in PALETTE {
            let title = format!("{} ({}):", swatch.role, swatch.name);
            writeln!(report, "  • {:<20} {} / {}", title, swatch.hex, swatch.rgb_label())?;
        }
        writeln!(report)?;
        writeln!(report, "📁 Output directory: {}", self.output_dir.display())?;
        writeln!(report)?;
        writeln!(report, "✨ All logo files generated!")?;
        writeln!(report)?;
        writeln!(report, "💡 Suggested usage:")?;
        for kind in AssetKind::ALL {
            writeln!(report, "  • {:<15} - {}", kind.file_name(), kind.usage())?;
        }
        Ok(())
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

/// Argument-free entry point: `assets/logos` under the working directory,
/// human report on stdout.
pub fn run() -> Result<EmissionManifest, EmitError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    Emitter::default().emit_all(&mut out, ReportFormat::Human)
}
