//! Command-line front end: render pages, inspect catalogs and switch templates.

use clap::{Parser, Subcommand, ValueEnum};
use nulltrace_site::{
    logging, Catalog, Catalogs, DesignTemplate, DesignTemplatePanel, FileSettingsStore,
    NotificationKind, NotificationLog, Site, SiteBundle, SiteConfig, SiteResult,
    StructureTemplate, StructureTemplatePanel, TemplateDescriptor, TemplatePanel, ThemeHandle,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "site-render", about = "Render a template-driven site and manage its templates")]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the home page of a bundle to stdout (or a file)
    Render {
        #[arg(short, long)]
        bundle: PathBuf,

        /// Settings file overriding the bundle's settings
        #[arg(short, long)]
        settings: Option<PathBuf>,

        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List the design and structure catalogs
    Templates,

    /// Check bundle or catalog files
    Validate {
        #[arg(short, long, value_enum, default_value = "bundle")]
        kind: FileKind,

        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Select a template and save it to a settings file
    Select {
        #[arg(value_enum)]
        panel: PanelArg,

        id: String,

        #[arg(short, long)]
        settings: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FileKind {
    Bundle,
    Design,
    Structure,
}

#[derive(Clone, Copy, ValueEnum)]
enum PanelArg {
    Design,
    Structure,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match SiteConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    logging::init(level, config.log_json);

    let result = match cli.command {
        Command::Render {
            bundle,
            settings,
            out,
        } => render(config, &bundle, settings, out.as_deref()).await,
        Command::Templates => list_templates(&config),
        Command::Validate { kind, files } => validate(kind, &files),
        Command::Select {
            panel,
            id,
            settings,
        } => select(&config, panel, &id, settings).await,
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn render(
    mut config: SiteConfig,
    bundle: &Path,
    settings: Option<PathBuf>,
    out: Option<&Path>,
) -> SiteResult<bool> {
    if settings.is_some() {
        config.settings_path = settings;
    }
    let site = Site::from_bundle(config, SiteBundle::load(bundle)?)?;
    let html = site.render_home().await?;
    match out {
        Some(path) => {
            std::fs::write(path, html)?;
            tracing::info!(path = %path.display(), "page written");
        }
        None => print!("{}", html),
    }
    Ok(true)
}

fn list_templates(config: &SiteConfig) -> SiteResult<bool> {
    let catalogs = Catalogs::from_config(config)?;
    println!("Design templates:");
    print_catalog(&catalogs.design);
    println!();
    println!("Structure templates:");
    print_catalog(&catalogs.structure);
    Ok(true)
}

fn print_catalog<T: TemplateDescriptor>(catalog: &Catalog<T>) {
    for (i, template) in catalog.iter().enumerate() {
        let marker = if i == 0 { " (default)" } else { "" };
        println!(
            "  {:<24} {:<14} {}{}",
            template.id(),
            template.category_tag(),
            template.name(),
            marker
        );
    }
}

fn validate(kind: FileKind, files: &[PathBuf]) -> SiteResult<bool> {
    let mut all_ok = true;
    for file in files {
        let outcome = match kind {
            FileKind::Bundle => SiteBundle::load(file).map(|b| format!("{} pages", b.pages.len())),
            FileKind::Design => {
                Catalog::<DesignTemplate>::load(file).map(|c| format!("{} templates", c.len()))
            }
            FileKind::Structure => {
                Catalog::<StructureTemplate>::load(file).map(|c| format!("{} templates", c.len()))
            }
        };
        match outcome {
            Ok(summary) => println!("ok      {} ({})", file.display(), summary),
            Err(e) => {
                all_ok = false;
                println!("invalid {}: {}", file.display(), e);
            }
        }
    }
    Ok(all_ok)
}

async fn select(
    config: &SiteConfig,
    panel: PanelArg,
    id: &str,
    settings: PathBuf,
) -> SiteResult<bool> {
    let catalogs = Catalogs::from_config(config)?;
    let store = Arc::new(FileSettingsStore::new(settings));
    let theme = ThemeHandle::default();
    let log = NotificationLog::new();

    let saved = match panel {
        PanelArg::Design => {
            let panel: DesignTemplatePanel =
                TemplatePanel::new(catalogs.design, store, theme.clone(), Arc::new(log.clone()));
            panel.mount().await;
            panel.select(id).await.is_ok()
        }
        PanelArg::Structure => {
            let panel: StructureTemplatePanel =
                TemplatePanel::new(catalogs.structure, store, theme.clone(), Arc::new(log.clone()));
            panel.mount().await;
            panel.select(id).await.is_ok()
        }
    };

    for notification in log.entries() {
        let label = match notification.kind {
            NotificationKind::Loading => "..",
            NotificationKind::Success => "ok",
            NotificationKind::Error => "!!",
        };
        println!("[{}] {}", label, notification.message);
    }
    let state = theme.snapshot();
    println!("{}", state.to_css());
    println!("body class: {}", state.body_class());
    Ok(saved)
}
