use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One named block of the plan text. Derived by [`parse_sections`]; order
/// matches order of appearance and duplicate titles are kept as separate
/// entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSection {
    pub title: String,
    pub content: String,
}

/// One slice of a "Persuasive Ad Copy" section, paired positionally with a
/// generated image when one exists at the same index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdCopyChunk {
    pub content: String,
    pub image: Option<String>,
}

fn visual_sentence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)visual sentence:(.*)").unwrap())
}

fn ad_copy_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*Ad Copy \d+:").unwrap())
}

/// True for a line that starts a new section: a double-hash marker followed
/// by a non-blank title.
fn is_marker_line(line: &str) -> bool {
    line.strip_prefix("## ")
        .map(|rest| !rest.trim().is_empty())
        .unwrap_or(false)
}

/// Splits raw plan text into ordered sections.
///
/// Line-oriented two-state walk: outside any section until the first marker
/// line, then inside one, accumulating content until the next marker. Text
/// before the first marker is discarded; no markers at all yields an empty
/// sequence, which is a valid "nothing to render" case rather than an error.
pub fn parse_sections(raw: &str) -> Vec<PlanSection> {
    let mut sections: Vec<PlanSection> = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in raw.lines() {
        if is_marker_line(line) {
            if let Some((title, body)) = current.take() {
                sections.push(PlanSection {
                    title,
                    content: body.join("\n").trim().to_string(),
                });
            }
            let title = line.trim_start_matches('#').trim().to_string();
            current = Some((title, Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
        // Lines before the first marker fall through and are dropped.
    }

    if let Some((title, body)) = current {
        sections.push(PlanSection {
            title,
            content: body.join("\n").trim().to_string(),
        });
    }

    sections
}

/// Collects every `Visual sentence: ...` cue in order of appearance, trimmed.
/// The label match is case-insensitive; duplicates are kept.
pub fn extract_visual_prompts(raw: &str) -> Vec<String> {
    visual_sentence_re()
        .captures_iter(raw)
        .map(|c| c[1].trim().to_string())
        .collect()
}

/// Splits ad-copy content at each `Ad Copy <N>:` line and pairs chunk `i`
/// with `images[i]` when that index exists. The pairing is strictly
/// positional; fewer images than chunks simply leaves the tail unpaired. An
/// empty leading chunk (content starting exactly at a marker) is dropped,
/// but a non-empty preamble is kept as chunk zero.
pub fn correlate(content: &str, images: &[String]) -> Vec<AdCopyChunk> {
    let marker = ad_copy_marker_re();
    let mut parts: Vec<Vec<&str>> = vec![Vec::new()];

    for line in content.lines() {
        if marker.is_match(line) {
            parts.push(Vec::new());
        }
        parts.last_mut().unwrap().push(line);
    }

    if parts.first().map(|p| p.concat().trim().is_empty()).unwrap_or(false) {
        parts.remove(0);
    }

    parts
        .into_iter()
        .enumerate()
        .map(|(i, lines)| AdCopyChunk {
            content: lines.join("\n").trim().to_string(),
            image: images.get(i).cloned(),
        })
        .collect()
}
