//! findoc CLI - Command-line interface library
//!
//! Generates the FinApp user manual (`.docx`) and pitch deck (`.pptx`):
//! - Manual: built from TOML content, embedded by default
//! - Pitch: twelve slides laid out in code
//! - Settings: `findoc.toml` with output, metadata and theme overrides
//!
//! # Library Usage
//!
//! ```no_run
//! use findoc_cli::{all_command, Settings};
//!
//! let settings = Settings::default();
//! for path in all_command(&settings, None)? {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Both files into ./dist
//! findoc all --output dist
//!
//! # Manual from custom content, with a brand settings file
//! findoc --config brand.toml manual --content manual.toml
//!
//! # Verbose logging
//! RUST_LOG=debug findoc pitch
//! ```

pub mod app;
pub mod config;
pub mod manual;
pub mod pitch;

// Re-export main entry point and types
pub use app::{all_command, manual_command, pitch_command, run_cli};
pub use config::{OutputSettings, Settings, CONFIG_FILE};
pub use manual::{Block, ManualContent, ManualMeta};
