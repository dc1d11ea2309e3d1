use crate::types::SummaryResult;

/// Placeholder printed when the summary is empty
pub const NO_SUMMARY: &str = "(No summary available)";

/// Placeholder printed when there are no bullet points
pub const NO_BULLET_POINTS: &str = "(No bullet points available)";

/// Render a result as the plain-text report shown and saved to disk
pub fn format_output(result: &SummaryResult) -> String {
    let mut lines = Vec::with_capacity(result.bullet_points.len() + 4);

    lines.push("SUMMARY:".to_string());
    if result.summary.is_empty() {
        lines.push(NO_SUMMARY.to_string());
    } else {
        lines.push(result.summary.clone());
    }

    lines.push(String::new());
    lines.push("BULLET POINTS:".to_string());
    if result.bullet_points.is_empty() {
        lines.push(format!("- {}", NO_BULLET_POINTS));
    } else {
        lines.extend(result.bullet_points.iter().map(|point| format!("- {}", point)));
    }

    lines.join("\n")
}
