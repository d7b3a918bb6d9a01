use std::fmt::Display;
use std::io::stdout;

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::args::OutputFormat;

/// Print a view model in the selected output format.
pub fn render<T>(view: &T, format: OutputFormat) -> Result<()>
where
    T: Serialize + Display,
{
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
        OutputFormat::Plain => print!("{}", view),
    }
    Ok(())
}

/// Same as `render`, with a leading status badge in plain mode.
pub fn render_with_badge<T>(badge: &str, view: &T, format: OutputFormat) -> Result<()>
where
    T: Serialize + Display,
{
    if format == OutputFormat::Plain {
        if stdout().is_terminal() {
            println!("{}", badge.green().bold());
        } else {
            println!("{}", badge);
        }
        println!();
    }
    render(view, format)
}
