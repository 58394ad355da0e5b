//! Terminal rendering of evaluations, panels, plans and reference tables.

use chrono::{DateTime, NaiveDateTime};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vitals_eval::{Evaluation, PanelReport};
use vitals_model::{ActionPlan, BiomarkerStatus, OverallStatus, weekday_abbr};
use vitals_rules::{LOWER_TOLERANCE, STRICT_RULES, TOLERANCE_RULES, UPPER_TOLERANCE, format_bands};

/// `M/D/YYYY, h:mm:ss AM`.
const CREATED_AT_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Dashboard headline and sub-heading for an overall status.
pub fn status_lines(overall: OverallStatus, tested: usize) -> [String; 2] {
    [overall.headline().to_string(), overall.tested_summary(tested)]
}

/// Strict results grouped by panel, in table order.
pub fn evaluation_table(evaluation: &Evaluation) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Panel"),
        header_cell("Biomarker"),
        header_cell("Value"),
        header_cell("Optimal range"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for (panel, results) in evaluation.by_panel() {
        for (index, result) in results.iter().enumerate() {
            let panel_cell = if index == 0 {
                Cell::new(panel.label()).add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                panel_cell,
                Cell::new(&result.name),
                Cell::new(result.value_with_unit()),
                dim_cell(result.range_with_unit()),
                status_cell(result.status),
            ]);
        }
    }
    table
}

/// One backend panel graded with the tolerance table.
pub fn panel_table(report: &PanelReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Biomarker"),
        header_cell("Value"),
        header_cell("Reference range"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for row in &report.rows {
        table.add_row(vec![
            Cell::new(&row.key),
            Cell::new(&row.value),
            dim_cell(&row.evaluation.range),
            status_cell(row.evaluation.status),
        ]);
    }
    table
}

/// Heading line for a panel, with its formatted creation time if known.
pub fn panel_heading(report: &PanelReport) -> String {
    match &report.created_at {
        Some(created_at) => format!("{} ({})", report.title, format_created_at(created_at)),
        None => report.title.clone(),
    }
}

/// Format a panel's `createdAt` stamp; unparseable stamps are shown verbatim.
pub fn format_created_at(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(CREATED_AT_FORMAT).to_string();
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map_or_else(
        |_| raw.to_string(),
        |parsed| parsed.format(CREATED_AT_FORMAT).to_string(),
    )
}

/// Weekly action plan, one row per day.
pub fn plan_table(plan: &ActionPlan) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Day"),
        header_cell("Diet"),
        header_cell("Meal"),
        header_cell("Supplement"),
        header_cell("Exercise"),
        header_cell("Lifestyle"),
        header_cell("Targets"),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    align_column(&mut table, 0, CellAlignment::Center);
    let mut days: Vec<_> = plan.days.iter().collect();
    days.sort_by_key(|day| day.day);
    for day in days {
        table.add_row(vec![
            Cell::new(weekday_abbr(day.day)).add_attribute(Attribute::Bold),
            Cell::new(&day.diet_tip),
            Cell::new(&day.meal_suggestion),
            Cell::new(&day.supplement),
            Cell::new(&day.exercise),
            Cell::new(&day.lifestyle_tip),
            dim_cell(day.target_biomarkers.join(", ")),
        ]);
    }
    table
}

/// Strict band reference table.
pub fn strict_rules_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Biomarker"),
        header_cell("Unit"),
        header_cell("Optimal"),
        header_cell("Suboptimal"),
        header_cell("Panel"),
    ]);
    apply_table_style(&mut table);
    for rule in &STRICT_RULES {
        table.add_row(vec![
            Cell::new(rule.id.as_str()),
            Cell::new(rule.display_name),
            dim_cell(rule.unit),
            Cell::new(format_bands(rule.optimal)).fg(Color::Green),
            Cell::new(format_bands(rule.suboptimal)).fg(Color::Yellow),
            Cell::new(rule.panel.label()),
        ]);
    }
    table
}

/// Tolerance-scaled reference table with its critical cut-offs.
pub fn tolerance_rules_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Reference range"),
        header_cell("Critical below"),
        header_cell("Critical above"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for rule in &TOLERANCE_RULES {
        let key = if rule.aliases.is_empty() {
            rule.key.to_string()
        } else {
            format!("{} ({})", rule.key, rule.aliases.join(", "))
        };
        table.add_row(vec![
            Cell::new(key),
            Cell::new(rule.range),
            Cell::new(format_threshold(rule.min * LOWER_TOLERANCE)).fg(Color::Red),
            Cell::new(format_threshold(rule.max * UPPER_TOLERANCE)).fg(Color::Red),
        ]);
    }
    table
}

fn format_threshold(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: BiomarkerStatus) -> Cell {
    let color = match status {
        BiomarkerStatus::Optimal => Color::Green,
        BiomarkerStatus::Suboptimal => Color::Yellow,
        BiomarkerStatus::Critical => Color::Red,
    };
    Cell::new(format!("{} {}", status.badge(), status)).fg(color)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_drop_trailing_zeros() {
        assert_eq!(format_threshold(13.5 * LOWER_TOLERANCE), "12.15");
        assert_eq!(format_threshold(200.0 * UPPER_TOLERANCE), "220");
        assert_eq!(format_threshold(0.0), "0");
    }

    #[test]
    fn created_at_formats() {
        assert_eq!(
            format_created_at("2025-03-01T10:00:00Z"),
            "3/1/2025, 10:00:00 AM"
        );
        assert_eq!(
            format_created_at("2025-11-20T18:05:09.123"),
            "11/20/2025, 6:05:09 PM"
        );
        assert_eq!(format_created_at("yesterday"), "yesterday");
    }
}
