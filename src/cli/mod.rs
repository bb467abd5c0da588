use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "copycraft", version, about = "Generate a niche marketing plan with ad images via the Gemini APIs")]
pub struct Args {
    /// Product niche, e.g. "vegan dog food"
    #[arg(long, default_value = "digital art prints")]
    pub niche: String,

    /// Product price in dollars
    #[arg(long, default_value_t = 25.0)]
    pub price: f64,

    /// Revenue goal in dollars
    #[arg(long, default_value_t = 1000.0)]
    pub goal: f64,

    /// Also render the plan translated into this language
    #[arg(long)]
    pub translate: Option<String>,

    /// Directory where generated ad images are written
    #[arg(long, default_value = "copycraft-out")]
    pub out_dir: String,

    #[arg(long, default_value = "gemini-2.5-flash")]
    pub text_model: String,

    #[arg(long, default_value = "imagen-4.0-generate-001")]
    pub image_model: String,

    #[arg(long, default_value_t = 300)]
    pub timeout_secs: u64,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
