//! `filters`: values accepted by `--format`, `--year` and `--tournament`.

use serde::Serialize;

use super::common::{to_json, CommandContext};
use crate::{cli::types::Year, records::Dataset, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    /// First-seen order.
    pub formats: Vec<String>,
    /// Most recent first.
    pub years: Vec<Year>,
    pub tournaments: Vec<String>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            formats: dataset.available_formats(),
            years: dataset.available_years(),
            tournaments: dataset.tournament_names(),
        }
    }
}

pub fn handle_filters(ctx: &CommandContext, as_json: bool) -> Result<()> {
    print!("{}", filters_output(ctx, as_json)?);
    Ok(())
}

pub fn filters_output(ctx: &CommandContext, as_json: bool) -> Result<String> {
    let options = FilterOptions::from_dataset(&ctx.dataset);
    if as_json {
        to_json(&options)
    } else {
        Ok(render_filter_options(&options))
    }
}

pub fn render_filter_options(options: &FilterOptions) -> String {
    let years: Vec<String> = options.years.iter().map(Year::to_string).collect();
    [
        format!("Formats:     {}\n", list_or_dash(&options.formats)),
        format!("Years:       {}\n", list_or_dash(&years)),
        format!("Tournaments: {}\n", list_or_dash(&options.tournaments)),
    ]
    .concat()
}

fn list_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
