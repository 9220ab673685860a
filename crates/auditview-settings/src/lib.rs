//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::AuditviewConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `auditview.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<AuditviewConfigV1> {
    let cfg: AuditviewConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (defaults + config file + overrides).
pub fn resolve_config(
    cfg: AuditviewConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// Parse then resolve; blank input means "no config file".
pub fn load_config(input: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if input.trim().is_empty() {
        AuditviewConfigV1::default()
    } else {
        parse_config_toml(input)?
    };
    resolve_config(cfg, overrides)
}
