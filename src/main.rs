use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use imgtheme::backends::{backend_for, ThemeEntry};
use imgtheme::cli::Args;
use imgtheme::tui::{self, TuiApp};
use imgtheme::{
    logging, ImageSource, PaletteExtractor, ThemeController, ThemePreference, UpdateOutcome,
};

fn main() -> Result<()> {
    let args = Args::parse();
    // The TUI owns the terminal; stray log lines would corrupt it.
    logging::init(if args.tui { "off" } else { "imgtheme=warn" });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let extractor = PaletteExtractor::new(args.extractor_config());

    if args.tui {
        let preference = args.preference.unwrap_or(ThemePreference::Dark);
        let controller = Arc::new(ThemeController::new(extractor, preference));
        let app = TuiApp::new(controller, args.images.clone(), runtime.handle().clone())?;
        return tui::run(app);
    }

    let entries = runtime.block_on(collect_palettes(&args, extractor));
    let backend = backend_for(args.format);
    match &args.output {
        Some(path) => backend.write_to(&entries, path)?,
        None => {
            let out = backend.serialize(&entries)?;
            std::io::stdout()
                .write_all(out.as_bytes())
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}

/// Raw extraction without a preference, controller-reconciled with one.
async fn collect_palettes(args: &Args, extractor: PaletteExtractor) -> Vec<ThemeEntry> {
    let mut entries = Vec::with_capacity(args.images.len());
    match args.preference {
        None => {
            for path in &args.images {
                let palette = extractor.extract(&ImageSource::from(path.as_path())).await;
                entries.push(ThemeEntry::from_path(path, palette));
            }
        }
        Some(preference) => {
            let controller = ThemeController::new(extractor, preference);
            for path in &args.images {
                let palette = match controller
                    .update_palette(&ImageSource::from(path.as_path()))
                    .await
                {
                    UpdateOutcome::Published(palette) => palette,
                    UpdateOutcome::Superseded => controller.palette(),
                };
                entries.push(ThemeEntry::from_path(path, palette));
            }
        }
    }
    entries
}
