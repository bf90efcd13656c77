//! External tool discovery.
//!
//! [`ToolRegistry`] resolves the executables torrentforge drives
//! (`mediainfo`, `mktorrent`) from explicit config overrides or `PATH`.

use std::collections::HashMap;
use std::path::PathBuf;

use tf_core::config::ToolsConfig;
use tf_core::{Error, Result};
use tracing::debug;

/// Tool names the registry manages.
pub const KNOWN_TOOLS: &[&str] = &["mediainfo", "mktorrent"];

/// Availability information for a tool, returned by
/// [`ToolRegistry::check_all`].
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Tool name.
    pub name: String,
    /// Whether the tool was found.
    pub available: bool,
    /// Resolved path to the executable.
    pub path: Option<PathBuf>,
}

/// Registry holding discovered tool locations.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, PathBuf>,
}

impl ToolRegistry {
    /// Resolve each known tool.
    ///
    /// An existing config override wins; otherwise [`which::which`]
    /// searches `PATH`. Tools that are not found are omitted from the
    /// registry and reported by [`ToolRegistry::require`] on use.
    pub fn discover(config: &ToolsConfig) -> Self {
        let mut tools = HashMap::new();

        for &name in KNOWN_TOOLS {
            let custom = match name {
                "mediainfo" => config.mediainfo_path.as_deref(),
                "mktorrent" => config.mktorrent_path.as_deref(),
                _ => None,
            };

            let resolved = match custom {
                Some(p) if p.exists() => Some(p.to_path_buf()),
                // Custom path unset or missing; fall back to PATH.
                _ => which::which(name).ok(),
            };

            match resolved {
                Some(path) => {
                    debug!("resolved {name} at {}", path.display());
                    tools.insert(name.to_string(), path);
                }
                None => debug!("{name} not found"),
            }
        }

        Self { tools }
    }

    /// Path of the given tool, or [`Error::Tool`] if it was not found
    /// during discovery.
    pub fn require(&self, name: &str) -> Result<&PathBuf> {
        self.tools.get(name).ok_or_else(|| {
            Error::tool(name, format!("{name} not found; is it installed and in PATH?"))
        })
    }

    /// Availability information for all known tools.
    pub fn check_all(&self) -> Vec<ToolInfo> {
        KNOWN_TOOLS
            .iter()
            .map(|&name| ToolInfo {
                name: name.to_string(),
                available: self.tools.contains_key(name),
                path: self.tools.get(name).cloned(),
            })
            .collect()
    }
}
