// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! Server configuration loaded from YAML.
//!
//! Configuration is YAML (never TOML).  Layers are **deep-merged**, so a
//! file can override only the fields it cares about.
//!
//! Search order (later overrides earlier):
//! 1. `/etc/gist/server.yaml`
//! 2. `~/.config/gist/server.yaml`
//! 3. `.gist/server.yaml` (workspace-local)
//! 4. Path given to [`load`] explicitly.
//!
//! **All defaults are production-safe.** Running `load(None)` with no config
//! file gives you a loopback-only bind and a 1 MiB request body limit.
//!
//! # Example full config
//! ```yaml
//! bind: "127.0.0.1:8787"
//! max_body_bytes: 1048576
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

fn default_bind() -> String {
    "127.0.0.1:8787".to_string()
}

fn default_max_body() -> usize {
    1024 * 1024
}

/// Top-level server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// `host:port` to listen on. Default: `127.0.0.1:8787` (loopback only).
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Maximum request body size in bytes (default: 1 MiB).  Enforced below
    /// the handlers by a `tower-http` body-limit layer; the truncation
    /// algorithm itself has no length bound.
    #[serde(default = "default_max_body")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_body_bytes: default_max_body(),
        }
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    paths.push(PathBuf::from("/etc/gist/server.yaml"));
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".config/gist/server.yaml"));
    }
    paths.push(PathBuf::from(".gist/server.yaml"));
    paths
}

pub fn load(extra: Option<&Path>) -> anyhow::Result<ServerConfig> {
    let mut merged = serde_yaml::Value::Mapping(serde_yaml::Mapping::new());

    for path in config_search_paths() {
        if path.is_file() {
            debug!(path = %path.display(), "loading server config layer");
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let layer: serde_yaml::Value = serde_yaml::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?;
            merge_yaml(&mut merged, layer);
        }
    }

    if let Some(p) = extra {
        debug!(path = %p.display(), "loading explicit server config");
        let text =
            std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
        let layer: serde_yaml::Value =
            serde_yaml::from_str(&text).with_context(|| format!("parsing {}", p.display()))?;
        merge_yaml(&mut merged, layer);
    }

    let config: ServerConfig = if matches!(&merged, serde_yaml::Value::Mapping(m) if m.is_empty()) {
        ServerConfig::default()
    } else {
        serde_yaml::from_value(merged).unwrap_or_default()
    };
    Ok(config)
}

fn merge_yaml(dst: &mut serde_yaml::Value, src: serde_yaml::Value) {
    match (dst, src) {
        (serde_yaml::Value::Mapping(d), serde_yaml::Value::Mapping(s)) => {
            for (k, v) in s {
                let entry = d
                    .entry(k)
                    .or_insert(serde_yaml::Value::Mapping(serde_yaml::Mapping::new()));
                merge_yaml(entry, v);
            }
        }
        (dst, src) => *dst = src,
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
