//! CLI command implementations.

pub mod render;
pub mod routes;
pub mod simulate;
pub mod submit;

use clap::Args;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Request path (e.g. "/help").
    #[arg(default_value = "/")]
    pub path: String,

    /// Ready every section module and stream the swap chunks too.
    #[arg(long)]
    pub swaps: bool,
}

/// Arguments for the simulate command.
#[derive(Args)]
pub struct SimulateArgs {
    /// Request path (e.g. "/help").
    #[arg(default_value = "/")]
    pub path: String,

    /// Scroll to this offset; repeat to scroll several times.
    #[arg(short, long = "scroll", value_name = "Y")]
    pub scroll: Vec<f64>,

    /// Virtual milliseconds to wait after mount (default: the content delay).
    #[arg(short, long, value_name = "MS")]
    pub advance: Option<u64>,

    /// Complete media loads after mount and after every scroll.
    #[arg(long)]
    pub load_media: bool,

    /// Fail outstanding media loads at the end with this reason.
    #[arg(long, value_name = "REASON")]
    pub fail_media: Option<String>,

    /// Viewport width override.
    #[arg(long)]
    pub width: Option<f64>,

    /// Viewport height override.
    #[arg(long)]
    pub height: Option<f64>,

    /// Write a JSON session recording to this file.
    #[arg(long, value_name = "FILE")]
    pub record: Option<String>,
}

/// Arguments for the submit command.
#[derive(Args)]
pub struct SubmitArgs {
    /// Form to submit (login, signup or help).
    pub form: String,

    /// Field value as NAME=VALUE; repeat for each field.
    #[arg(short, long = "field", value_name = "NAME=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Never prompt for missing fields.
    #[arg(long)]
    pub no_input: bool,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    if name.is_empty() {
        return Err(format!("missing field name in '{}'", raw));
    }
    Ok((name.to_string(), value.to_string()))
}
