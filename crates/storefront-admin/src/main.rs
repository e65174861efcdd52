//! Storefront admin: headless host entry point.
//!
//! Runs one admin action against a `settings.json` file without a browser.
//! The action goes through the same [`AdminController`] the page uses, with
//! an in-memory surface standing in for the panel and a [`FileHost`] that
//! writes the export back to the settings file.
//!
//! # Usage
//!
//! ```text
//! storefront-admin [--config <TOML>] [--settings <JSON>] <COMMAND>
//!
//! Commands:
//!   themes                       List themes; `*` marks the active one
//!   style                        Print the active theme's style variables
//!   fields                       List product fields and their visibility
//!   create-theme --name <NAME> [--base <N>]
//!   delete-theme <ID> [--yes]
//!   switch-theme <ID>
//!   merge-fields <FIELD>...
//!   toggle-field <FIELD>
//!   show-description <true|false>
//!   load-folder <PATH>
//!   clear-folder
//!   init-config                  Write a default host config file
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable              | Default            | Description              |
//! |-----------------------|--------------------|--------------------------|
//! | `STOREFRONT_CONFIG`   | `storefront.toml`  | Host config file         |
//! | `STOREFRONT_SETTINGS` | from host config   | Settings file            |
//! | `RUST_LOG`            | host `log_level`   | Log filter               |

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use storefront_admin::application::admin::AdminController;
use storefront_admin::application::toast::ToastSink;
use storefront_admin::infrastructure::host::file::FileHost;
use storefront_admin::infrastructure::picker::PathFolderPicker;
use storefront_admin::infrastructure::storage::host_config::{load_host_config, save_host_config};
use storefront_admin::infrastructure::storage::settings::load_settings;
use storefront_admin::infrastructure::surface::memory::InMemorySurface;
use storefront_core::STYLE_VAR_NAMES;

type Controller = AdminController<InMemorySurface, FileHost>;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Headless admin for the storefront viewer.
#[derive(Debug, Parser)]
#[command(
    name = "storefront-admin",
    about = "Edit storefront themes and field settings from the command line",
    version
)]
struct Cli {
    /// Host configuration file (TOML).  Missing file means defaults.
    #[arg(long, default_value = "storefront.toml", env = "STOREFRONT_CONFIG")]
    config: PathBuf,

    /// Settings file to edit.  Overrides `settings_path` from the host config.
    #[arg(long, env = "STOREFRONT_SETTINGS")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List themes; `*` marks the active one.
    Themes,
    /// Print the active theme's style variables.
    Style,
    /// List product fields and their visibility.
    Fields,
    /// Create a custom theme from a built-in and make it active.
    CreateTheme {
        #[arg(long)]
        name: String,
        /// 1-based position in the built-in list; defaults to the active theme.
        #[arg(long)]
        base: Option<String>,
    },
    /// Delete a custom theme.
    DeleteTheme {
        id: String,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
    /// Make a theme active.
    SwitchTheme { id: String },
    /// Add newly discovered product fields.
    MergeFields {
        #[arg(required = true)]
        fields: Vec<String>,
    },
    /// Flip one field's visibility.
    ToggleField { field: String },
    /// Turn the description field on or off everywhere.
    ShowDescription {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    /// Record a product folder.
    LoadFolder { path: PathBuf },
    /// Forget the recorded product folder.
    ClearFolder,
    /// Write the current host configuration (or defaults) to `--config`.
    InitConfig,
}

/// Toasts go to the log; there is nobody to hide them for.
struct LogToast;

impl ToastSink for LogToast {
    fn show(&self, message: &str) {
        info!(toast = message);
    }

    fn hide(&self) {}
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let host_config = load_host_config(&cli.config)
        .with_context(|| format!("failed to load host config {}", cli.config.display()))?;

    // `RUST_LOG` wins over the host config's level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&host_config.log_level)),
        )
        .init();

    if let Command::InitConfig = cli.command {
        save_host_config(&cli.config, &host_config)
            .with_context(|| format!("failed to write {}", cli.config.display()))?;
        println!("wrote {}", cli.config.display());
        return Ok(());
    }

    let settings_path = cli
        .settings
        .clone()
        .unwrap_or_else(|| host_config.settings_path.clone());
    let config = load_settings(&settings_path)
        .with_context(|| format!("failed to load settings {}", settings_path.display()))?;

    let mut controller = AdminController::new(
        config,
        InMemorySurface::new(),
        FileHost::new(&settings_path),
        Arc::new(LogToast),
        host_config.admin_options(),
    );

    if run(&mut controller, cli.command).await? {
        controller.save().context("failed to save settings")?;
        println!("saved {}", settings_path.display());
    }
    Ok(())
}

/// Runs one command.  Returns `true` when the settings changed.
async fn run(controller: &mut Controller, command: Command) -> anyhow::Result<bool> {
    match command {
        Command::Themes => {
            for card in controller.surface().theme_cards() {
                let marker = if card.active { '*' } else { ' ' };
                let kind = if card.deletable { "custom" } else { "built-in" };
                println!("{marker} {:<24} {:<20} {:<18} {kind}", card.id, card.name, card.summary);
            }
            Ok(false)
        }
        Command::Style => {
            for name in STYLE_VAR_NAMES {
                if let Some(value) = controller.surface().style_var(name) {
                    println!("{name}: {value};");
                }
            }
            Ok(false)
        }
        Command::Fields => {
            for row in controller.surface().field_rows() {
                let mark = if row.visible { 'x' } else { ' ' };
                println!("[{mark}] {}", row.name);
            }
            println!("show description: {}", controller.surface().show_desc_toggle());
            Ok(false)
        }
        Command::CreateTheme { name, base } => {
            let id = controller
                .create_theme(&name, base.as_deref())
                .with_context(|| format!("could not create theme {name:?}"))?;
            println!("created {id}");
            Ok(true)
        }
        Command::DeleteTheme { id, yes } => {
            controller.surface_mut().queue_confirm(yes);
            let deleted = controller
                .delete_theme(&id)
                .with_context(|| format!("could not delete theme {id}"))?;
            if !deleted {
                println!("{id} not deleted; pass --yes to confirm");
            }
            Ok(deleted)
        }
        Command::SwitchTheme { id } => {
            controller
                .switch_theme(&id)
                .with_context(|| format!("could not switch to theme {id}"))?;
            Ok(true)
        }
        Command::MergeFields { fields } => {
            controller.update_fields_tab(&fields);
            Ok(true)
        }
        Command::ToggleField { field } => {
            if !controller.config().field_order().contains(&field) {
                bail!("unknown field {field:?}; merge it first");
            }
            let visible = !controller.config().is_field_enabled(&field);
            controller.set_field_visible(&field, visible);
            println!("{field}: {}", if visible { "shown" } else { "hidden" });
            Ok(true)
        }
        Command::ShowDescription { enabled } => {
            controller.set_show_description(enabled);
            Ok(true)
        }
        Command::LoadFolder { path } => {
            let picker = PathFolderPicker::new(Some(path.clone()));
            if !controller.pick_folder(&picker).await {
                bail!("{} is not a readable directory", path.display());
            }
            let name = controller
                .hooks()
                .last_folder()
                .map(|d| d.name.clone())
                .unwrap_or_default();
            controller.set_folder_name(name);
            Ok(true)
        }
        Command::ClearFolder => {
            controller.clear_folder();
            Ok(true)
        }
        Command::InitConfig => Ok(false),
    }
}
