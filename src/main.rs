//! Celebeauty - a terminal dashboard for creator intelligence reports.

use std::path::PathBuf;

use celebeauty::config::{self, Config};
use celebeauty::report::ReportSource;
use celebeauty::state::Tab;
use celebeauty::{App, Result};
use clap::{Parser, ValueEnum};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "celebeauty", version, about = "Celebeauty Intelligence Dashboard")]
struct Cli {
    #[arg(long, help = "Report JSON to display (defaults to the bundled sample)")]
    data: Option<PathBuf>,
    #[arg(long, help = "Configuration file")]
    config: Option<PathBuf>,
    #[arg(long, value_enum, help = "Tab shown at startup")]
    tab: Option<TabArg>,
    #[arg(long, default_value_t = false, help = "Validate the report and exit")]
    check: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TabArg {
    Quant,
    Content,
}

impl From<TabArg> for Tab {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::Quant => Tab::Quant,
            TabArg::Content => Tab::Content,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = init_tracing(cli.check)?;

    // Load configuration
    let mut config = Config::load(cli.config)?;
    if let Some(tab) = cli.tab {
        config.ui.initial_tab = tab.into();
    }

    let source = ReportSource::resolve(cli.data, config.report.data_path.clone());
    let report = match source.load() {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(source = %source, "Report rejected: {}", e);
            return Err(e);
        }
    };

    if cli.check {
        tracing::info!(
            channel = %report.quant.profile.name,
            kpis = report.quant.kpis.len(),
            strategies = report.strategy_count(),
            "Report is valid"
        );
        return Ok(());
    }

    // Run the application
    let mut app = App::new(&config, report, &source)?;
    app.run().await?;

    Ok(())
}

fn init_tracing(check: bool) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "celebeauty=info".into());

    if check {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
        return Ok(None);
    }

    // The terminal belongs to the dashboard, so logs go to a file
    let log_dir = config::log_dir()?;
    std::fs::create_dir_all(&log_dir)?;
    let appender = tracing_appender::rolling::daily(log_dir, "celebeauty.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    Ok(Some(guard))
}
