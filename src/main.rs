use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

mod cli;
mod config;
mod errors;
mod input;
mod parse;
mod plan;
mod prompt;
mod provider;
mod ux;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = cli::Args::parse();

    // Validation and configuration errors are the only failures that
    // propagate; everything downstream comes back as a renderable value.
    let input = input::FormInput::new(&args.niche, args.price, args.goal)?;

    let mut cfg = config::Config::from_env()?;
    cfg.text_model = args.text_model.clone();
    cfg.image_model = args.image_model.clone();
    cfg.timeout_secs = args.timeout_secs;
    cfg.debug = args.debug;

    let (text, image) = provider::make_capabilities(&cfg);
    let planner = plan::Planner::new(text, image);

    let pb = spinner("Generating your marketing plan (this may take a moment)...");
    let outcome = planner.generate(&input).await;
    pb.finish_and_clear();

    if outcome.is_degraded() {
        ux::print_error(&outcome.value().text);
        std::process::exit(1);
    }
    let generated = outcome.into_value();

    let saved = match ux::save_images(&generated.images, Path::new(&args.out_dir)) {
        Ok(paths) => paths,
        Err(e) => {
            log::warn!("could not write ad images, rendering text only: {e:#}");
            Vec::new()
        }
    };
    let image_labels: Vec<String> = saved.iter().map(|p| p.display().to_string()).collect();

    let sections = parse::parse_sections(&generated.text);
    ux::render_plan(&sections, &image_labels, false);

    if let Some(language) = &args.translate {
        let pb = spinner(&format!("Translating the plan into {language}..."));
        let translated = planner.translate(&generated.text, language).await;
        pb.finish_and_clear();

        if translated.is_degraded() {
            ux::print_error(translated.value());
        } else {
            println!("{}", format!("=== Translated plan ({language}) ===").bold());
            let sections = parse::parse_sections(translated.value());
            ux::render_plan(&sections, &[], true);
        }
    }

    Ok(())
}
