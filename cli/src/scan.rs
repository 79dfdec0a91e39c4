use crate::cli::ReportFormat;
use crate::error::{CliError, Result, ResultExt};
use crate::progress::{format_duration, ProgressTracker as CliProgressTracker};
use crate::ui;
use indicatif::{ProgressBar, ProgressStyle};
use key_scan::config::write_default_config;
use key_scan::{
    CatalogClient, CatalogSource, Credential, DefaultScanRunner, JsonRenderer, OutputRenderer,
    ProgressCallback, ProgressTracker as ScanProgressTracker, ScanConfig, ScanConfigBuilder,
    ScanResults, TextRenderer,
};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
pub struct ScanArgs {
    pub key: String,
    pub output: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub discovery_url: Option<String>,
    pub timeout: Option<u64>,
    pub delay_ms: Option<u64>,
    pub insecure: bool,
    pub format: ReportFormat,
    pub show_errors: bool,
    pub verbose: bool,
}

pub fn execute(args: ScanArgs) -> Result<()> {
    let rt = Runtime::new().with_context(|| "Failed to create async runtime")?;
    rt.block_on(execute_async(args))
}

/// Write the default configuration template and exit
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    ui::status_message(&format!("Writing default configuration to {}", path.display()));
    write_default_config(path, force)?;
    ui::success_message("Configuration file created successfully!");
    ui::info_message(&format!(
        "Edit {} and pass it with --config to adjust timeouts or classification rules",
        path.display()
    ));
    Ok(())
}

async fn execute_async(args: ScanArgs) -> Result<()> {
    let credential = Credential::new(args.key.as_str());
    if credential.is_empty() {
        return Err(CliError::Other("The API key must not be empty".to_string()));
    }

    let config = resolve_config(&args)?;

    ui::info_message(&format!(
        "Starting full API discovery scan for key ending in '{}'",
        credential.masked()
    ));
    if config.insecure_tls() {
        ui::warning_message("TLS certificate verification is disabled for this scan");
    }
    if args.verbose {
        print_settings(&config);
    }

    let mut progress = CliProgressTracker::new(
        "API Key Scan",
        vec![
            "Fetching list of all discoverable APIs",
            "Testing each API",
            "Generating report",
        ],
    );

    progress.start_step();
    let catalog = CatalogClient::new(&config)?;
    debug!("Fetching API catalog from {}", catalog.url());
    let targets = catalog.fetch_catalog().await?;
    ui::success_message(&format!(
        "Found {} APIs to test. This may take a few minutes...",
        targets.len()
    ));
    progress.complete_step();

    progress.start_step();
    let runner = DefaultScanRunner::from_config(&config)?;

    let pb = Arc::new(ProgressBar::new(targets.len() as u64));
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("█▉▊▋▌▍▎▏  ");
    pb.set_style(style);

    let pb_clone = Arc::clone(&pb);
    let on_progress: Box<ProgressCallback> = Box::new(move |p: &ScanProgressTracker| {
        pb_clone.set_position(p.completed_targets as u64);
        if let Some(message) = progress_message(p) {
            pb_clone.set_message(message);
        }
    });
    let (results, final_progress) = runner
        .execute_with_progress(&targets, &credential, Some(on_progress))
        .await;

    pb.finish_with_message("All APIs tested");
    progress.complete_step();

    if args.verbose {
        ui::info_message(&format!(
            "Probe results: {} total, {} accessible, {} unclassified errors",
            final_progress.completed_targets,
            final_progress.accessible_targets,
            final_progress.failed_targets
        ));
    }

    progress.start_step();
    let report = render_report(&results, args.format, args.show_errors);
    progress.complete_step();

    println!("{}", report);

    if let Some(path) = &args.output {
        save_report(path, &report)?;
    }

    progress.complete();
    Ok(())
}

/// Progress bar message for the target in flight, with an ETA once one probe finished
fn progress_message(progress: &ScanProgressTracker) -> Option<String> {
    let name = progress.current_target.as_deref()?;
    let mut message = format!(
        "({}/{}, {:.0}%) Testing: {}",
        progress.current_index,
        progress.total_targets,
        progress.progress_percentage(),
        name
    );

    if let Some(remaining) = progress.estimated_remaining() {
        message.push_str(&format!(" (about {} left)", format_duration(remaining)));
    }

    Some(message)
}

/// Built-in defaults, then the config file, then command line flags
fn resolve_config(args: &ScanArgs) -> Result<ScanConfig> {
    let base = match &args.config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            ScanConfig::load_with_validation(path)?
        }
        None => ScanConfig::default(),
    };

    let mut builder = ScanConfigBuilder::from_config(base);
    if let Some(url) = &args.discovery_url {
        builder = builder.discovery_url(url.as_str());
    }
    if let Some(timeout) = args.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(delay_ms) = args.delay_ms {
        builder = builder.delay_ms(delay_ms);
    }
    if args.insecure {
        builder = builder.insecure_tls(true);
    }

    builder
        .build()
        .with_context(|| "Invalid scan settings")
}

fn render_report(results: &ScanResults, format: ReportFormat, show_errors: bool) -> String {
    match format {
        ReportFormat::Text => {
            let renderer = if show_errors {
                TextRenderer::with_errors()
            } else {
                TextRenderer::new()
            };
            renderer.render(results)
        }
        ReportFormat::Json => JsonRenderer::new().render(results),
    }
}

fn save_report(path: &Path, report: &str) -> Result<()> {
    ui::status_message(&format!("Saving report to {}", path.display()));
    fs::write(path, report).map_err(|source| CliError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;
    ui::success_message("Done.");
    Ok(())
}

fn print_settings(config: &ScanConfig) {
    ui::info_message("Scan settings:");
    ui::detail_line("Catalog", config.discovery_url());
    ui::detail_line("Timeout", &format!("{}s", config.timeout().as_secs()));
    ui::detail_line("Delay", &format!("{}ms", config.delay().as_millis()));
    ui::detail_line(
        "Rules",
        &format!("{} classification rules", config.classification_rules().len()),
    );
}
