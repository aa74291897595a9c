//! CLI Tooling
//!
//! Command-line interface for the demo application. Loads configuration,
//! builds a registry from it, registers the demo services once logging is up,
//! and renders the requested view as text or JSON.

use crate::config::{ConfigLoader, DepslotConfig};
use crate::error::ContextError;
use crate::logging::LoggingConfig;
use crate::registry::ContextRegistry;
use crate::tooling::app::{register_services, render_app, ProfileView, ServiceSource};
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// depslot demo - named dependency slots over scoped context values
#[derive(Parser)]
#[command(name = "depslot-demo")]
#[command(about = "Render the depslot demo application")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the user profile
    Run {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Render without the service providers so defaults apply
        #[arg(long)]
        no_providers: bool,
    },
    /// List registered dependency slots
    Slots {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

impl Cli {
    /// Apply the command-line logging flags on top of `base`
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

/// One registered slot as listed by `slots`
#[derive(Debug, Clone, Serialize)]
pub struct SlotInfo {
    pub id: String,
    pub handle: u64,
    pub value_type: String,
    pub has_default: bool,
}

pub struct CliContext {
    config: DepslotConfig,
    registry: ContextRegistry,
}

impl CliContext {
    /// Load configuration and build an empty registry from it
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ContextError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&std::env::current_dir().map_err(|e| {
                ContextError::ConfigError(format!("Failed to read working directory: {}", e))
            })?)?,
        };
        Self::from_config(config)
    }

    pub fn from_config(config: DepslotConfig) -> Result<Self, ContextError> {
        let registry = ContextRegistry::from_config(&config.registry);
        Ok(Self { config, registry })
    }

    /// Register the demo services. Call after logging is installed so the
    /// registration events are recorded.
    pub fn register(&self) -> Result<(), ContextError> {
        register_services(&self.registry)
    }

    pub fn config(&self) -> &DepslotConfig {
        &self.config
    }

    pub fn registry(&self) -> &ContextRegistry {
        &self.registry
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ContextError> {
        match command {
            Commands::Run {
                format,
                no_providers,
            } => {
                let view = render_app(&self.registry, !no_providers)?;
                info!(source = ?view.source, "Rendered profile");
                match output_format(format)? {
                    OutputFormat::Json => to_json(&view),
                    OutputFormat::Text => Ok(format_profile_text(&view)),
                }
            }
            Commands::Slots { format } => {
                let slots = self.slots();
                match output_format(format)? {
                    OutputFormat::Json => to_json(&slots),
                    OutputFormat::Text => Ok(format_slots_text(&slots)),
                }
            }
        }
    }

    /// Registered slots sorted by identifier
    pub fn slots(&self) -> Vec<SlotInfo> {
        let mut ids = self.registry.registered_ids();
        ids.sort();
        ids.into_iter()
            .filter_map(|id| {
                let handle = self.registry.get_any(&id)?;
                Some(SlotInfo {
                    handle: handle.id().as_u64(),
                    value_type: handle.type_name().to_string(),
                    has_default: handle.has_default(),
                    id,
                })
            })
            .collect()
    }
}

enum OutputFormat {
    Text,
    Json,
}

fn output_format(format: &str) -> Result<OutputFormat, ContextError> {
    match format {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(ContextError::Output(format!(
            "Invalid format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ContextError> {
    serde_json::to_string_pretty(value).map_err(|e| ContextError::Output(e.to_string()))
}

fn format_profile_text(view: &ProfileView) -> String {
    let mut out = format!("Welcome, {}!\n", view.user.name);
    if !view.user.email.is_empty() {
        out.push_str(&format!("  Email: {}\n", view.user.email));
    }
    out.push_str(&format!(
        "  Signed in: {}\n",
        if view.authenticated { "yes" } else { "no" }
    ));
    let source = match view.source {
        ServiceSource::Provided => "provided",
        ServiceSource::Default => "registered defaults",
    };
    out.push_str(&format!("  Services: {}", source));
    out
}

fn format_slots_text(slots: &[SlotInfo]) -> String {
    if slots.is_empty() {
        return "No dependency slots registered.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Id", "Handle", "Type", "Default"]);
    for slot in slots {
        table.add_row(vec![
            slot.id.clone(),
            slot.handle.to_string(),
            slot.value_type.clone(),
            if slot.has_default { "yes" } else { "no" }.to_string(),
        ]);
    }
    table.to_string()
}
