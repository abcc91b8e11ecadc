//! Level loading
//!
//! Uses RON (Rusty Object Notation) for human-readable level files, with
//! JSON accepted for `.json` paths. Brotli-compressed RON is also read:
//! - Reading: auto-detects compression by checking for a valid RON start
//! - Validation: rejects empty level lists and nonsense geometry
//!
//! The document is an ordered list of levels:
//!
//! ```ron
//! [
//!     (
//!         platforms: [(x: 100, y: 450, width: 200, height: 20)],
//!         hazards: [(x: 400, y: 580, width: 80, height: 20)],
//!         collectibles: [(x: 180, y: 400)],
//!     ),
//! ]
//! ```

#[cfg(not(target_arch = "wasm32"))]
use std::fs;
use std::io::Cursor;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation limits to prevent resource exhaustion from malicious files
pub mod limits {
    /// Maximum number of levels in one document
    pub const MAX_LEVELS: usize = 256;
    /// Maximum entries in any single platform/hazard/collectible list
    pub const MAX_ENTITIES: usize = 4096;
    /// Maximum coordinate value (prevents overflow issues)
    pub const MAX_COORD: f32 = 1_000_000.0;
}

/// Error type for level loading
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// A static rectangle placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub type PlatformSpec = BoxSpec;
pub type HazardSpec = BoxSpec;

/// Collectibles only carry a position; their size is a game constant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollectibleSpec {
    pub x: f32,
    pub y: f32,
}

/// One level. All three lists are required in the source document, even
/// when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    pub platforms: Vec<PlatformSpec>,
    pub hazards: Vec<HazardSpec>,
    pub collectibles: Vec<CollectibleSpec>,
}

/// Check if a float is valid (not NaN or Inf)
fn is_valid_float(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

fn validate_box(spec: &BoxSpec, context: &str) -> Result<(), String> {
    for (name, v) in [("x", spec.x), ("y", spec.y), ("width", spec.width), ("height", spec.height)] {
        if !is_valid_float(v) {
            return Err(format!("{}: invalid {} ({})", context, name, v));
        }
    }
    if spec.width <= 0.0 || spec.height <= 0.0 {
        return Err(format!(
            "{}: size must be positive ({}x{})",
            context, spec.width, spec.height
        ));
    }
    Ok(())
}

fn validate_level(level: &LevelDescriptor, idx: usize) -> Result<(), String> {
    let lists = [
        ("platforms", level.platforms.len()),
        ("hazards", level.hazards.len()),
        ("collectibles", level.collectibles.len()),
    ];
    for (name, len) in lists {
        if len > limits::MAX_ENTITIES {
            return Err(format!(
                "Level {}: too many {} ({} > {})",
                idx, name, len, limits::MAX_ENTITIES
            ));
        }
    }

    for (i, p) in level.platforms.iter().enumerate() {
        validate_box(p, &format!("Level {} platform {}", idx, i))?;
    }
    for (i, h) in level.hazards.iter().enumerate() {
        validate_box(h, &format!("Level {} hazard {}", idx, i))?;
    }
    for (i, c) in level.collectibles.iter().enumerate() {
        if !is_valid_float(c.x) || !is_valid_float(c.y) {
            return Err(format!(
                "Level {} collectible {}: invalid position ({}, {})",
                idx, i, c.x, c.y
            ));
        }
    }
    Ok(())
}

/// Validate a whole document
fn validate_levels(levels: &[LevelDescriptor]) -> Result<(), LevelError> {
    if levels.is_empty() {
        return Err(LevelError::Validation("no levels defined".into()));
    }
    if levels.len() > limits::MAX_LEVELS {
        return Err(LevelError::Validation(format!(
            "too many levels ({} > {})",
            levels.len(),
            limits::MAX_LEVELS
        )));
    }
    for (i, level) in levels.iter().enumerate() {
        validate_level(level, i).map_err(LevelError::Validation)?;
    }
    Ok(())
}

/// RON text starts with a bracket, a comment or whitespace; brotli is binary
fn is_plain_text(bytes: &[u8]) -> bool {
    bytes
        .first()
        .map(|&b| matches!(b, b'[' | b'(' | b'/' | b' ' | b'\n' | b'\r' | b'\t'))
        .unwrap_or(false)
}

fn decode_text(bytes: Vec<u8>) -> Result<String, LevelError> {
    // A brotli header can happen to start with a text byte, so plain text
    // must also be valid UTF-8 throughout
    if is_plain_text(&bytes) {
        if let Ok(text) = std::str::from_utf8(&bytes) {
            return Ok(text.to_owned());
        }
    }
    let mut decompressed = Vec::new();
    brotli::BrotliDecompress(&mut Cursor::new(&bytes), &mut decompressed).map_err(|e| {
        LevelError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("brotli decompression failed: {}", e),
        ))
    })?;
    String::from_utf8(decompressed).map_err(|e| {
        LevelError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("invalid UTF-8: {}", e),
        ))
    })
}

/// Log where in the document a RON parse failed
fn log_ron_context(contents: &str, e: &ron::error::SpannedError) {
    log::error!("RON parse error: {}", e);
    let pos = e.position;
    if let Some(line) = contents.lines().nth(pos.line.saturating_sub(1)) {
        log::error!("  Line {}: {}", pos.line, line.trim_end());
    }
}

/// The ordered set of levels for one run of the game. Immutable after load.
#[derive(Debug, Clone)]
pub struct LevelStore {
    levels: Vec<LevelDescriptor>,
}

impl LevelStore {
    /// Build a store from already-parsed descriptors
    pub fn new(levels: Vec<LevelDescriptor>) -> Result<Self, LevelError> {
        validate_levels(&levels)?;
        Ok(Self { levels })
    }

    /// Load levels from disk. `.json` files are parsed as JSON, everything
    /// else as RON (plain or brotli-compressed).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        Self::from_bytes(path, bytes)
    }

    /// Parse level data already read into memory (async loading, WASM).
    /// `path` is only used to pick the format and for log messages.
    pub fn from_bytes<P: AsRef<Path>>(path: P, bytes: Vec<u8>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let contents = decode_text(bytes)?;
        let store = if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_ron_str(&contents)
        }
        .map_err(|e| {
            log::error!("Failed to load levels from {}", path.display());
            e
        })?;

        log::info!("Loaded {} level(s) from {}", store.level_count(), path.display());
        Ok(store)
    }

    /// Parse levels from a RON string (embedded data or testing)
    pub fn from_ron_str(s: &str) -> Result<Self, LevelError> {
        let levels: Vec<LevelDescriptor> = ron::from_str(s).map_err(|e| {
            log_ron_context(s, &e);
            e
        })?;
        Self::new(levels)
    }

    /// Parse levels from a JSON string
    pub fn from_json_str(s: &str) -> Result<Self, LevelError> {
        let levels: Vec<LevelDescriptor> = serde_json::from_str(s)?;
        Self::new(levels)
    }

    /// Number of levels. Always at least one.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Index taken modulo the level count, so this never goes out of range
    pub fn wrap_index(&self, index: usize) -> usize {
        index % self.levels.len()
    }

    /// Level at `index`, wrapping around past the end
    pub fn level_at(&self, index: usize) -> &LevelDescriptor {
        &self.levels[self.wrap_index(index)]
    }
}
