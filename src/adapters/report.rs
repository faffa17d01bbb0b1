use crate::core::substitution::get_substitution;
use crate::core::{AnnotatedRecipe, MatchReport};
use crate::utils::error::{MatchError, Result};
use std::fmt::Write as _;
use std::str::FromStr;

pub const SUPPORTED_FORMATS: &[&str] = &["json", "csv", "text"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }

    pub fn file_name(&self) -> String {
        format!("recommendations.{}", self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(MatchError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: format!("Valid formats: {}", SUPPORTED_FORMATS.join(", ")),
            }),
        }
    }
}

pub fn render(report: &MatchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => render_csv(&report.results),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

fn render_csv(results: &[AnnotatedRecipe]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "id",
        "name",
        "cuisine",
        "difficulty",
        "time_minutes",
        "match_score",
        "missing_ingredients",
    ])?;

    for result in results {
        let recipe = &result.recipe;
        writer.write_record([
            recipe.id.to_string(),
            recipe.name.clone(),
            recipe.cuisine.clone(),
            recipe
                .difficulty
                .map(|d| d.to_string())
                .unwrap_or_default(),
            recipe
                .time_minutes
                .map(|t| t.to_string())
                .unwrap_or_default(),
            format!("{:.2}", result.match_score),
            result.missing_ingredients.join("; "),
        ])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| MatchError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

fn render_text(report: &MatchReport) -> String {
    let mut out = String::new();

    if report.results.is_empty() {
        let _ = writeln!(
            out,
            "No recipes matched: {}",
            report.ingredients.join(", ")
        );
        return out;
    }

    let _ = writeln!(
        out,
        "🍳 {} recipes match: {}",
        report.results.len(),
        report.ingredients.join(", ")
    );

    for (index, result) in report.results.iter().enumerate() {
        let recipe = &result.recipe;
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}. {} ({:.0}% match)",
            index + 1,
            recipe.name,
            result.match_score * 100.0
        );

        let mut details = Vec::new();
        if !recipe.cuisine.is_empty() {
            details.push(recipe.cuisine.clone());
        }
        if let Some(difficulty) = recipe.difficulty {
            details.push(difficulty.to_string());
        }
        if let Some(minutes) = recipe.time_minutes {
            details.push(format!("{} min", minutes));
        }
        if !details.is_empty() {
            let _ = writeln!(out, "   {}", details.join(" | "));
        }

        if result.missing_ingredients.is_empty() {
            let _ = writeln!(out, "   ✅ You have everything");
            continue;
        }

        let _ = writeln!(out, "   Missing: {}", result.missing_ingredients.join(", "));
        for missing in &result.missing_ingredients {
            if let Some(suggestion) = get_substitution(missing) {
                let _ = writeln!(out, "   💡 Instead of {}: {}", missing, suggestion);
            }
        }
    }

    out
}
