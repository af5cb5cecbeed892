//! TRON Vanity Logos - Brand Asset Emitter
//!
//! # Ground Rules
//! 1. SVG Is Truth (no rasterization, ever)
//! 2. Templates Are Constants
//! 3. Fixed Asset Set, Fixed Order
//! 4. Deterministic Output
//! 5. Report Only What Was Written

pub mod templates;
pub mod palette;
pub mod hashing;
pub mod emitter;

pub use templates::{Asset, AssetKind, generate_logo, generate_icon, generate_banner, generate_favicon};
pub use palette::{Swatch, PALETTE};
pub use hashing::{compute_manifest_hash, canonical_json, sha256_hex};
pub use emitter::{Emitter, EmitError, EmittedAsset, EmissionManifest, ReportFormat, run, DEFAULT_OUTPUT_DIR};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
