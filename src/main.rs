use clap::Parser;
use quill::core::config::{CliOverrides, QuillConfig, load_config, resolve};
use quill::core::layout::DeviceClass;
use quill::core::theme::Theme;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "quill", about = "Editor page header for the terminal")]
struct Args {
    /// Color theme (overrides QUILL_THEME and the config file)
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Initial document title
    #[arg(long)]
    title: Option<String>,

    /// Document is a standalone page
    #[arg(long)]
    page: bool,

    /// Document is an unpublished draft
    #[arg(long)]
    draft: bool,

    /// Public URL of the document
    #[arg(long)]
    permalink: Option<String>,

    /// Force the mobile layout
    #[arg(long, conflicts_with = "desktop")]
    mobile: bool,

    /// Force the desktop layout
    #[arg(long)]
    desktop: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        let device = if self.mobile {
            Some(DeviceClass::Mobile)
        } else if self.desktop {
            Some(DeviceClass::Desktop)
        } else {
            None
        };
        CliOverrides {
            theme: self.theme,
            title: self.title.clone(),
            permalink: self.permalink.clone(),
            is_page: self.page,
            is_draft: self.draft,
            device,
        }
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to quill.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("quill.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        QuillConfig::default()
    });
    let resolved = resolve(&config, &args.overrides());

    log::info!(
        "Quill starting up: theme {}, device {:?}",
        resolved.theme,
        resolved.device
    );

    quill::tui::run(resolved)
}
