//! Reads NMEA 0183 sentences from stdin and writes the selected ones to stdout.
//!
//! With the default settings, position fix and recommended-minimum sentences
//! are passed at most twice a second per type, their talker is rewritten to
//! GPS and every line is prefixed with `geo nmea `, which is the format
//! expected by mock-location apps that only understand GPS talkers.
//!
//! Diagnostics go to stderr through tracing so stdout only carries output.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use nmea_core::Sentence;
use nmea_filter::{FilterConfig, Outcome, Pipeline, StatisticsCollector};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Output line format
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    /// Prefix followed by the checksummed sentence
    Wire,
    /// One JSON object per sentence
    Json,
    /// Human-readable description
    Text,
}

/// NMEA 0183 stream filter
#[derive(Parser, Debug)]
#[command(name = "nmea-filter", version, about, long_about = None)]
struct Cli {
    /// JSON configuration file; flags override its values
    #[arg(short, long, env = "NMEA_FILTER_CONFIG")]
    config: Option<PathBuf>,

    /// Sentence types to pass, comma-separated ("*" for all)
    #[arg(short, long, value_delimiter = ',')]
    types: Option<Vec<String>>,

    /// Minimum milliseconds between two sentences of the same type (0 disables)
    #[arg(short, long)]
    min_period_ms: Option<u64>,

    /// Talker id to write into every emitted sentence
    #[arg(long, conflicts_with = "keep_talker")]
    talker: Option<String>,

    /// Keep the original talker ids
    #[arg(long)]
    keep_talker: bool,

    /// Text written before every emitted sentence
    #[arg(short, long)]
    prefix: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Wire)]
    format: OutputFormat,

    /// Seconds between statistics log lines (0 disables)
    #[arg(long, default_value_t = 0)]
    stats_interval: u64,
}

impl Cli {
    /// Build the filter configuration: defaults, then file, then flags.
    fn filter_config(&self) -> anyhow::Result<FilterConfig> {
        let mut config = match &self.config {
            Some(path) => FilterConfig::from_file(path)?,
            None => FilterConfig::default(),
        };

        if let Some(types) = &self.types {
            config.types = types.clone();
        }
        if let Some(min_period_ms) = self.min_period_ms {
            config.min_period_ms = min_period_ms;
        }
        if self.keep_talker {
            config.talker = None;
        } else if let Some(talker) = &self.talker {
            config.talker = Some(talker.clone());
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.filter_config()?;

    for warning in config.validate() {
        tracing::warn!("Configuration: {}", warning);
    }

    tracing::info!(
        types = ?config.types,
        min_period_ms = config.min_period_ms,
        talker = ?config.talker,
        "NMEA filter starting..."
    );

    let mut pipeline = Pipeline::new(config);
    let stats = pipeline.statistics();

    let reporter = (cli.stats_interval > 0).then(|| {
        let stats = Arc::clone(&stats);
        let period = Duration::from_secs(cli.stats_interval);
        tokio::spawn(async move {
            report_statistics(stats, period).await;
        })
    });

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        result = filter_stream(stdin, &mut stdout, &mut pipeline, cli.format) => {
            result?;
            tracing::debug!("End of input");
        }
    }

    if let Some(handle) = reporter {
        handle.abort();
    }

    stdout.flush().await?;
    tracing::info!(statistics = ?stats.snapshot(), "Shutdown complete");
    Ok(())
}

/// Run every line of `input` through the pipeline until EOF.
///
/// Lines are read as bytes so that invalid UTF-8 from a noisy serial link
/// is rejected like any other malformed line instead of ending the stream.
async fn filter_stream<R, W>(
    mut input: R,
    output: &mut W,
    pipeline: &mut Pipeline,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf);
        if let Some(rendered) = handle_line(pipeline, &line, format)? {
            output.write_all(rendered.as_bytes()).await?;
            output.write_all(b"\n").await?;
            output.flush().await?;
        }
    }
}

/// Process one input line, returning the text to write out, if any.
fn handle_line(
    pipeline: &mut Pipeline,
    line: &str,
    format: OutputFormat,
) -> anyhow::Result<Option<String>> {
    match pipeline.process(line, Instant::now()) {
        Outcome::Emit(sentence) => Ok(Some(render(pipeline, &sentence, format)?)),
        Outcome::Skipped(reason) => {
            tracing::trace!("Skipped: {}", reason);
            Ok(None)
        }
        Outcome::Rejected(e) => {
            tracing::warn!("{}: {}", e, line.trim());
            Ok(None)
        }
    }
}

/// Format an emitted sentence for stdout.
fn render(pipeline: &Pipeline, sentence: &Sentence, format: OutputFormat) -> anyhow::Result<String> {
    let output = match format {
        OutputFormat::Wire => pipeline.render(sentence),
        OutputFormat::Text => sentence.to_string(),
        OutputFormat::Json => {
            let mut value = serde_json::to_value(sentence)?;
            value["wire"] = serde_json::json!(sentence.to_wire());
            value["description"] = serde_json::json!(sentence.to_string());
            serde_json::to_string(&value)?
        }
    };
    Ok(output)
}

/// Log throughput once per period.
async fn report_statistics(stats: Arc<StatisticsCollector>, period: Duration) {
    let mut interval = tokio::time::interval(period);
    // The first tick completes immediately
    interval.tick().await;

    loop {
        interval.tick().await;
        stats.update_rate(period);
        let snapshot = stats.snapshot();
        tracing::info!(
            received = snapshot.received,
            emitted = snapshot.emitted,
            rejected = snapshot.rejected,
            "{:.1} sentences/s emitted over the last {}s",
            snapshot.emit_rate,
            period.as_secs()
        );
    }
}
