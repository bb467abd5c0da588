use futures::future;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::input::FormInput;
use crate::prompt;
use crate::provider::{DynImageGeneration, DynTextGeneration};

/// A generated plan: raw section-marked text plus the ordered image data
/// URIs produced from its visual cues. `images` may be shorter than the
/// number of ad copies, or empty; that means "no images available", never an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub text: String,
    pub images: Vec<String>,
}

/// Result of a remote generation pass. `Degraded` wraps a value whose text
/// begins with `Error:` so callers keep one uniform rendering path for both
/// success and graceful failure, while the variant itself makes the
/// distinction explicit instead of relying on prefix sniffing.
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    Ready(T),
    Degraded(T),
}

impl<T> Outcome<T> {
    pub fn value(&self) -> &T {
        match self {
            Outcome::Ready(v) | Outcome::Degraded(v) => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Ready(v) | Outcome::Degraded(v) => v,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded(_))
    }
}

/// The two orchestrators, holding the injected capabilities and nothing
/// else. Each call is independent; there is no cross-invocation state.
pub struct Planner {
    text: DynTextGeneration,
    image: DynImageGeneration,
}

impl Planner {
    pub fn new(text: DynTextGeneration, image: DynImageGeneration) -> Self {
        Self { text, image }
    }

    /// Generates the full marketing plan for one validated input.
    ///
    /// A text failure (or empty response) degrades to an `Error:`-prefixed
    /// plan with no images. Image generation fans out one call per visual
    /// cue and joins them all-or-nothing: a single failure empties the whole
    /// batch rather than returning a partial sequence that would misalign
    /// with the ad-copy chunks. An image failure never discounts a
    /// successful text plan.
    pub async fn generate(&self, input: &FormInput) -> Outcome<GeneratedPlan> {
        let instruction = prompt::marketing_plan(input);

        let text = match self.text.generate(&instruction).await {
            Ok(t) if !t.trim().is_empty() => t,
            Ok(_) => {
                return Outcome::Degraded(GeneratedPlan {
                    text: "Error: the model returned an empty plan.".into(),
                    images: Vec::new(),
                })
            }
            Err(e) => {
                return Outcome::Degraded(GeneratedPlan {
                    text: format!(
                        "Error: an error occurred while generating the plan. Details: {e:#}"
                    ),
                    images: Vec::new(),
                })
            }
        };

        let visual_prompts = crate::parse::extract_visual_prompts(&text);
        if visual_prompts.is_empty() {
            return Outcome::Ready(GeneratedPlan {
                text,
                images: Vec::new(),
            });
        }

        let wrapped: Vec<String> = visual_prompts.iter().map(|p| prompt::ad_image(p)).collect();
        let calls = wrapped.iter().map(|p| self.image.generate(p));
        let images = match future::try_join_all(calls).await {
            Ok(images) => images,
            Err(e) => {
                warn!("image generation failed, returning text-only plan: {e:#}");
                Vec::new()
            }
        };

        Outcome::Ready(GeneratedPlan { text, images })
    }

    /// Translates already-generated plan text. One text call, no image
    /// calls; failure degrades to an `Error:`-prefixed string value.
    pub async fn translate(&self, text: &str, language: &str) -> Outcome<String> {
        match self.text.generate(&prompt::translation(text, language)).await {
            Ok(t) if !t.trim().is_empty() => Outcome::Ready(t),
            Ok(_) => Outcome::Degraded("Error: the translation came back empty.".into()),
            Err(e) => Outcome::Degraded(format!(
                "Error: an error occurred during translation. Details: {e:#}"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ImageGeneration, TextGeneration};
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    struct FixedText(Result<String>);

    #[async_trait]
    impl TextGeneration for FixedText {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            match &self.0 {
                Ok(t) => Ok(t.clone()),
                Err(e) => Err(anyhow!("{e}")),
            }
        }
    }

    struct EchoImages;

    #[async_trait]
    impl ImageGeneration for EchoImages {
        async fn generate(&self, prompt: &str) -> Result<String> {
            Ok(format!("data:image/jpeg;base64,{prompt}"))
        }
    }

    struct FailingImages;

    #[async_trait]
    impl ImageGeneration for FailingImages {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err(anyhow!("image backend down"))
        }
    }

    fn sample_input() -> FormInput {
        FormInput::new("vegan dog food", 25.0, 1000.0).unwrap()
    }

    fn plan_with_cues() -> String {
        "## Persuasive Ad Copy\n\
         Ad Copy 1:\n\
         Visual sentence: a bowl of green kibble\n\
         Ad Copy 2:\n\
         Visual sentence: a happy dog mid-leap\n\
         ## Summary\n\
         done"
            .to_string()
    }

    #[tokio::test]
    async fn text_failure_degrades_to_error_text_with_no_images() {
        let planner = Planner::new(
            Box::new(FixedText(Err(anyhow!("503 backend unavailable")))),
            Box::new(EchoImages),
        );
        let outcome = planner.generate(&sample_input()).await;
        assert!(outcome.is_degraded());
        let plan = outcome.into_value();
        assert!(plan.text.starts_with("Error:"));
        assert!(plan.text.contains("503 backend unavailable"));
        assert!(plan.images.is_empty());
    }

    #[tokio::test]
    async fn empty_text_degrades_the_same_way() {
        let planner = Planner::new(
            Box::new(FixedText(Ok("   \n".into()))),
            Box::new(EchoImages),
        );
        let outcome = planner.generate(&sample_input()).await;
        assert!(outcome.is_degraded());
        assert!(outcome.value().text.starts_with("Error:"));
    }

    #[tokio::test]
    async fn generates_one_image_per_visual_cue_in_order() {
        let planner = Planner::new(
            Box::new(FixedText(Ok(plan_with_cues()))),
            Box::new(EchoImages),
        );
        let outcome = planner.generate(&sample_input()).await;
        assert!(!outcome.is_degraded());
        let plan = outcome.into_value();
        assert_eq!(plan.images.len(), 2);
        assert!(plan.images[0].contains("a bowl of green kibble"));
        assert!(plan.images[1].contains("a happy dog mid-leap"));
    }

    #[tokio::test]
    async fn image_batch_failure_keeps_the_text_plan() {
        let planner = Planner::new(
            Box::new(FixedText(Ok(plan_with_cues()))),
            Box::new(FailingImages),
        );
        let outcome = planner.generate(&sample_input()).await;
        assert!(!outcome.is_degraded());
        let plan = outcome.into_value();
        assert_eq!(plan.text, plan_with_cues());
        assert!(plan.images.is_empty());
    }

    #[tokio::test]
    async fn no_visual_cues_skips_image_generation() {
        let planner = Planner::new(
            Box::new(FixedText(Ok("## Summary\nshort plan".into()))),
            Box::new(FailingImages),
        );
        let outcome = planner.generate(&sample_input()).await;
        assert!(!outcome.is_degraded());
        assert!(outcome.value().images.is_empty());
    }

    #[tokio::test]
    async fn translation_passes_markers_through_untouched() {
        let source = "## A\nhello\n## B\nworld";
        let planner = Planner::new(
            Box::new(FixedText(Ok("## A\nbonjour\n## B\nmonde".into()))),
            Box::new(EchoImages),
        );
        let outcome = planner.translate(source, "French").await;
        assert!(!outcome.is_degraded());
        let translated = outcome.into_value();
        let before: Vec<_> = crate::parse::parse_sections(source)
            .into_iter()
            .map(|s| s.title)
            .collect();
        let after: Vec<_> = crate::parse::parse_sections(&translated)
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(before.len(), after.len());
    }

    #[tokio::test]
    async fn translation_failure_degrades_to_error_text() {
        let planner = Planner::new(
            Box::new(FixedText(Err(anyhow!("quota exhausted")))),
            Box::new(EchoImages),
        );
        let outcome = planner.translate("## A\nhello", "Spanish").await;
        assert!(outcome.is_degraded());
        assert!(outcome.value().starts_with("Error:"));
    }
}
