use anyhow::{anyhow, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use colored::Colorize;
use fs_err as fs;
use std::path::{Path, PathBuf};

use crate::parse::{self, PlanSection};

/// Decodes one `data:<mime>;base64,<payload>` URI into raw bytes plus a file
/// extension inferred from the mime type.
fn decode_data_uri(uri: &str) -> Result<(Vec<u8>, &'static str)> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| anyhow!("not a data URI"))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| anyhow!("malformed data URI: missing payload"))?;
    let mime = meta.split(';').next().unwrap_or_default();
    let ext = match mime {
        "image/png" => "png",
        "image/webp" => "webp",
        _ => "jpg",
    };
    let bytes = BASE64.decode(payload)?;
    Ok((bytes, ext))
}

/// Writes each generated image under `out_dir` as `ad-copy-<n>.<ext>` and
/// returns the written paths in the same order. An undecodable image fails
/// the whole write; the caller treats that like any other image failure.
pub fn save_images(images: &[String], out_dir: &Path) -> Result<Vec<PathBuf>> {
    if images.is_empty() {
        return Ok(Vec::new());
    }
    fs::create_dir_all(out_dir)?;
    let mut paths = Vec::with_capacity(images.len());
    for (i, uri) in images.iter().enumerate() {
        let (bytes, ext) = decode_data_uri(uri)?;
        let path = out_dir.join(format!("ad-copy-{}.{}", i + 1, ext));
        fs::write(&path, bytes)?;
        paths.push(path);
    }
    Ok(paths)
}

fn print_section_heading(title: &str) {
    println!("\n{}", format!("== {title} ==").cyan().bold());
}

/// Renders the parsed plan section by section. For the ad-copy section the
/// content is split into chunks and each chunk is annotated with its paired
/// image path. Translated views never show images, since image order is not
/// guaranteed to survive translation of the text.
pub fn render_plan(sections: &[PlanSection], image_labels: &[String], translated: bool) {
    if sections.is_empty() {
        println!("{}", "(the plan contained no sections to render)".dimmed());
        return;
    }

    for section in sections {
        print_section_heading(&section.title);

        let is_ad_copy = section.title.to_lowercase().contains("ad copy");
        if is_ad_copy && !translated && !image_labels.is_empty() {
            for chunk in parse::correlate(&section.content, image_labels) {
                println!("{}", chunk.content);
                if let Some(image) = &chunk.image {
                    println!("{}", format!("[ad image: {image}]").green());
                }
                println!();
            }
        } else {
            println!("{}", section.content);
        }
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("\n{}", "An error occurred".red().bold());
    eprintln!("{}", message.red());
}
