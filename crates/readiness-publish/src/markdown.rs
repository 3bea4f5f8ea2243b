//! Human-readable Markdown rendering of a [`Report`].

use readiness_core::constants::MARKDOWN_ISSUE_ROW_LIMIT;
use readiness_core::models::Report;

/// Render the Markdown artifact. `json_artifact` names the companion JSON file.
pub fn render_markdown(report: &Report, json_artifact: &str) -> String {
    let metadata = &report.metadata;
    let summary = &report.summary;
    let mut md = String::new();

    md.push_str("# Load Balancer Readiness Report\n\n");
    md.push_str(&format!(
        "- Generated (UTC): `{}`\n",
        metadata.generated_at_utc.to_rfc3339()
    ));
    md.push_str(&format!("- Region: `{}`\n", metadata.region));
    md.push_str(&format!("- Tenancy: `{}`\n", metadata.tenancy_id));
    md.push_str(&format!("- Run ID: `{}`\n\n", metadata.run_id));

    md.push_str("## Summary\n\n");
    md.push_str("| Metric | Value |\n");
    md.push_str("|---|---:|\n");
    for (metric, value) in [
        ("Scanned Compartments", summary.scanned_compartment_count),
        ("Skipped Compartments", summary.skipped_compartment_count),
        ("Load Balancers", summary.total_load_balancers),
        ("Private LBs", summary.total_private_load_balancers),
        ("Public LBs", summary.total_public_load_balancers),
        ("Listeners", summary.total_listeners),
        ("Backend Sets", summary.total_backend_sets),
        ("Backends", summary.total_backends),
        ("LBs with Issues", summary.load_balancers_with_issues),
    ] {
        md.push_str(&format!("| {metric} | {value} |\n"));
    }
    md.push('\n');

    md.push_str("## Backend Set Health Status\n\n");
    md.push_str("| Status | Count |\n");
    md.push_str("|---|---:|\n");
    for (status, count) in &summary.backend_set_health_status_counts {
        md.push_str(&format!("| {} | {count} |\n", escape_cell(status.as_str())));
    }
    if summary.backend_set_health_status_counts.is_empty() {
        md.push_str("| - | 0 |\n");
    }
    md.push('\n');

    md.push_str(&format!(
        "## LBs With Issues (Top {MARKDOWN_ISSUE_ROW_LIMIT})\n\n"
    ));
    md.push_str("| Compartment | LB Name | State | Private | Issue Backend Sets |\n");
    md.push_str("|---|---|---|---|---|\n");
    for record in report
        .issue_load_balancers
        .iter()
        .take(MARKDOWN_ISSUE_ROW_LIMIT)
    {
        let issue_sets: Vec<String> = record
            .detail
            .issue_backend_sets()
            .map(|set| format!("{}:{}", set.name, set.health_status))
            .collect();
        let issue_sets = if issue_sets.is_empty() {
            "-".to_string()
        } else {
            issue_sets.join(", ")
        };
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            escape_cell(&record.compartment_name),
            escape_cell(&record.detail.display_name),
            escape_cell(&record.detail.lifecycle_state),
            record.detail.is_private,
            escape_cell(&issue_sets),
        ));
    }
    if report.issue_load_balancers.is_empty() {
        md.push_str("| - | - | - | - | No load balancer backend issues found. |\n");
    }
    md.push('\n');

    md.push_str("## Full Data\n\n");
    md.push_str(&format!(
        "- Full machine-readable details are available in the JSON artifact `{json_artifact}`."
    ));
    md
}

/// Pipes inside a cell would split the table row.
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipes_are_escaped() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
        assert_eq!(escape_cell("plain"), "plain");
    }
}
