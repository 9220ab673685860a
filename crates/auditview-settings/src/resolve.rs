use crate::model::AuditviewConfigV1;
use anyhow::Context;
use auditview_domain::policy::EffectiveConfig;
use auditview_domain::sort::{SortColumn, SortDirection};
use auditview_domain::trend::TrendWindow;
use auditview_types::ids;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    pub trend_days: Option<u32>,
    pub template: Option<String>,
    pub max_rows: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: AuditviewConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != ids::SCHEMA_CONFIG_V1
    {
        anyhow::bail!(
            "unsupported config schema: {schema} (expected {})",
            ids::SCHEMA_CONFIG_V1
        );
    }

    let mut effective = EffectiveConfig::default();

    if let Some(column) = overrides.sort_by.or(cfg.sort_by) {
        if column.trim().is_empty() {
            anyhow::bail!("sort_by must not be empty");
        }
        effective.sort.column = SortColumn::parse(&column);
    }

    if let Some(direction) = overrides.sort_direction.or(cfg.sort_direction) {
        effective.sort.direction =
            SortDirection::parse(&direction).context("invalid sort_direction")?;
    }

    if let Some(days) = overrides.trend_days.or(cfg.trend_days) {
        effective.trend_window = TrendWindow::try_from(days).context("invalid trend_days")?;
    }

    effective.template = overrides
        .template
        .or(cfg.template)
        .filter(|t| !t.trim().is_empty());

    if let Some(max_rows) = overrides.max_rows.or(cfg.max_rows) {
        effective.max_rows = max_rows as usize;
    }

    Ok(ResolvedConfig { effective })
}
