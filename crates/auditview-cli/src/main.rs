//! CLI entry point for auditview.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `auditview-app` crate.

use anyhow::Context;
use auditview_app::{
    Dashboard, FileEngine, NoticeKind, TableFormat, render_assessment, render_dashboard,
    render_table,
};
use auditview_domain::policy::EffectiveConfig;
use auditview_domain::resolve_setup_url;
use auditview_settings::Overrides;
use auditview_types::ExportKind;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use futures::executor::block_on;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "auditview",
    version,
    about = "Render security-audit results, trends, and compliance assessments"
)]
struct Cli {
    /// Directory holding summary.json, trend files, templates, and assessments.
    #[arg(long, default_value = ".")]
    data_dir: Utf8PathBuf,

    /// Path to auditview config TOML (missing file means defaults).
    #[arg(long, default_value = "auditview.toml")]
    config: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the sorted results table.
    Table {
        /// Column key to sort by (e.g. status, testName, message).
        #[arg(long)]
        sort_by: Option<String>,

        /// Sort direction (asc|desc).
        #[arg(long)]
        direction: Option<String>,

        #[arg(long, value_enum, default_value = "md")]
        format: Format,

        /// Where to write the table (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render the score summary, trend, and results as Markdown.
    Dashboard {
        /// Trend window in days (7, 30, 90, 180, 365).
        #[arg(long)]
        days: Option<u32>,

        /// Also write a score badge SVG to this path.
        #[arg(long)]
        badge: Option<Utf8PathBuf>,
    },

    /// Resolve remediation text to a Setup deep link.
    Resolve {
        /// Remediation text containing a "Setup > ..." breadcrumb.
        text: String,
    },

    /// Run a compliance template against the current audit.
    Assess {
        /// Template id (defaults to `template` from the config file).
        template_id: Option<String>,
    },

    /// Save a snapshot of the current audit.
    Snapshot {
        /// Compliance template to tag the snapshot with.
        #[arg(long)]
        template: Option<String>,
    },

    /// Export results or trend history.
    Export {
        #[arg(long, value_enum)]
        kind: KindArg,

        /// Trend window in days for trend exports.
        #[arg(long)]
        days: Option<u32>,

        /// Where to write the file (defaults to the exported file name).
        #[arg(long, short, conflicts_with = "data_uri")]
        output: Option<Utf8PathBuf>,

        /// Print a base64 data URI instead of writing a file.
        #[arg(long)]
        data_uri: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Md,
    Csv,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Csv,
    Spreadsheet,
    TrendCsv,
}

impl From<KindArg> for ExportKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Csv => ExportKind::Csv,
            KindArg::Spreadsheet => ExportKind::Spreadsheet,
            KindArg::TrendCsv => ExportKind::TrendCsv,
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("auditview error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.cmd {
        Commands::Table {
            sort_by,
            direction,
            format,
            output,
        } => {
            let overrides = Overrides {
                sort_by: sort_by.clone(),
                sort_direction: direction.clone(),
                ..Overrides::default()
            };
            cmd_table(cli, overrides, *format, output.as_deref())
        }
        Commands::Dashboard { days, badge } => {
            let overrides = Overrides {
                trend_days: *days,
                ..Overrides::default()
            };
            cmd_dashboard(cli, overrides, badge.as_deref())
        }
        Commands::Resolve { text } => Ok(cmd_resolve(text)),
        Commands::Assess { template_id } => {
            let overrides = Overrides {
                template: template_id.clone(),
                ..Overrides::default()
            };
            cmd_assess(cli, overrides)
        }
        Commands::Snapshot { template } => {
            let overrides = Overrides {
                template: template.clone(),
                ..Overrides::default()
            };
            cmd_snapshot(cli, overrides)
        }
        Commands::Export {
            kind,
            days,
            output,
            data_uri,
        } => {
            let overrides = Overrides {
                trend_days: *days,
                ..Overrides::default()
            };
            cmd_export(cli, overrides, (*kind).into(), output.as_deref(), *data_uri)
        }
    }
}

fn load_config(cli: &Cli, overrides: Overrides) -> anyhow::Result<EffectiveConfig> {
    // Missing file is allowed (defaults apply).
    let text = if cli.config.exists() {
        std::fs::read_to_string(&cli.config)
            .with_context(|| format!("read config: {}", cli.config))?
    } else {
        String::new()
    };
    let resolved = auditview_settings::load_config(&text, overrides)
        .with_context(|| format!("load config: {}", cli.config))?;
    Ok(resolved.effective)
}

fn open_dashboard(cli: &Cli, config: &EffectiveConfig) -> Dashboard<FileEngine> {
    Dashboard::new(FileEngine::new(cli.data_dir.clone()), config)
}

/// Load the dashboard; on failure print the error panel message and return `false`.
fn load_dashboard(dash: &mut Dashboard<FileEngine>) -> bool {
    block_on(dash.load());
    match &dash.state().load_error {
        Some(message) => {
            eprintln!("auditview: {message}");
            false
        }
        None => true,
    }
}

fn report_notices(dash: &mut Dashboard<FileEngine>) {
    for notice in dash.drain_notices() {
        let level = match notice.kind {
            NoticeKind::Success => "ok",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
        };
        eprintln!("auditview {level}: {}: {}", notice.title, notice.message);
    }
}

fn cmd_table(
    cli: &Cli,
    overrides: Overrides,
    format: Format,
    output: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let config = load_config(cli, overrides)?;
    let mut dash = open_dashboard(cli, &config);
    if !load_dashboard(&mut dash) {
        return Ok(1);
    }

    let format = match format {
        Format::Md => TableFormat::Markdown,
        Format::Csv => TableFormat::Csv,
    };
    let text = render_table(&dash.state().rows, format, config.max_rows)?;
    emit(output, &text)?;
    Ok(0)
}

fn cmd_dashboard(cli: &Cli, overrides: Overrides, badge: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let config = load_config(cli, overrides)?;
    let mut dash = open_dashboard(cli, &config);
    if !load_dashboard(&mut dash) {
        return Ok(1);
    }

    let state = dash.state();
    print!("{}", render_dashboard(state, config.max_rows));
    if let Some(path) = badge {
        let svg = auditview_render::score_badge_svg(state.summary.score, state.score_band().as_str());
        write_text_file(path, &svg).context("write badge")?;
    }
    Ok(0)
}

fn cmd_resolve(text: &str) -> i32 {
    match resolve_setup_url(Some(text)) {
        Some(url) => {
            println!("{url}");
            0
        }
        None => {
            eprintln!("auditview: no setup path found");
            1
        }
    }
}

fn cmd_assess(cli: &Cli, overrides: Overrides) -> anyhow::Result<i32> {
    let config = load_config(cli, overrides)?;
    let mut dash = open_dashboard(cli, &config);

    let result = block_on(dash.run_assessment());
    report_notices(&mut dash);
    if result.is_err() {
        return Ok(1);
    }
    if let Some(view) = &dash.state().assessment {
        print!("{}", render_assessment(view));
    }
    Ok(0)
}

fn cmd_snapshot(cli: &Cli, overrides: Overrides) -> anyhow::Result<i32> {
    let config = load_config(cli, overrides)?;
    let mut dash = open_dashboard(cli, &config);

    let result = block_on(dash.save_snapshot());
    report_notices(&mut dash);
    match result {
        Ok(id) => {
            println!("{id}");
            Ok(0)
        }
        Err(_) => Ok(1),
    }
}

fn cmd_export(
    cli: &Cli,
    overrides: Overrides,
    kind: ExportKind,
    output: Option<&Utf8Path>,
    as_data_uri: bool,
) -> anyhow::Result<i32> {
    let config = load_config(cli, overrides)?;
    let mut dash = open_dashboard(cli, &config);

    let result = block_on(dash.export(kind));
    report_notices(&mut dash);
    let Ok(download) = result else {
        return Ok(1);
    };

    if as_data_uri {
        println!("{}", download.data_uri);
        return Ok(0);
    }

    let (_, bytes) = auditview_render::decode_data_uri(&download.data_uri)
        .context("decode export payload")?;
    let path = output
        .map(Utf8Path::to_path_buf)
        .unwrap_or_else(|| Utf8PathBuf::from(&download.file_name));
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(&path, bytes).with_context(|| format!("write export: {}", path))?;
    println!("{path}");
    Ok(0)
}

fn emit(output: Option<&Utf8Path>, text: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => write_text_file(path, text),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}
