//! Terminal rendering of decisions, statistics, and probability series

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::data::CategoricalAnalysis;
use crate::dist::{ChartSeries, DistributionResult, ModelDecision};

/// How many series rows to show before truncating the table
const SERIES_PREVIEW_ROWS: usize = 25;

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

fn fmt_number(value: f64) -> String {
    format!("{:.6}", value)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Print the model-selection decision card.
pub fn print_decision(decision: &ModelDecision) {
    println!();
    println!(
        "    {} {}",
        style("MODEL DECISION").white().bold(),
        style(format!("→ {}", decision.family)).cyan().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!(
        "      Sample ratio n/N: {} {}",
        style(format!("{:.2}%", decision.sample_ratio * 100.0))
            .yellow()
            .bold(),
        style(format!("(threshold {:.0}%)", decision.threshold * 100.0)).dim()
    );
    println!("      {}", decision.reason);
    if let Some(recommendation) = &decision.recommendation {
        println!("      {} {}", style("Tip:").cyan(), recommendation);
    }
}

/// Print the statistics and interpretations of one calculation.
pub fn print_result(result: &DistributionResult) {
    println!();
    println!(
        "    {} {}",
        style(format!("{}", result.family).to_uppercase()).white().bold(),
        style("STATISTICS").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Statistic").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    let stats = &result.statistics;
    table.add_row(vec![Cell::new("Mean"), Cell::new(fmt_number(stats.mean))]);
    if let Some(median) = stats.median {
        table.add_row(vec![Cell::new("Median"), Cell::new(median)]);
    }
    table.add_row(vec![
        Cell::new("Variance"),
        Cell::new(fmt_number(stats.variance)),
    ]);
    table.add_row(vec![
        Cell::new("Std deviation"),
        Cell::new(fmt_number(stats.std)),
    ]);
    if let Some(adjusted) = stats.adjusted_std {
        table.add_row(vec![
            Cell::new("Adjusted std (finite pop.)"),
            Cell::new(fmt_number(adjusted)).fg(Color::Yellow),
        ]);
    }
    if let Some(factor) = stats.correction_factor {
        table.add_row(vec![
            Cell::new("Correction factor"),
            Cell::new(fmt_number(factor)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Skewness"),
        Cell::new(fmt_number(stats.skewness)),
    ]);
    table.add_row(vec![
        Cell::new("Excess kurtosis"),
        Cell::new(fmt_number(stats.kurtosis)),
    ]);
    print_indented(&table);

    let population_line = match (result.population_ratio, result.sample_ratio) {
        (Some(ratio), _) | (None, Some(ratio)) => format!(
            "Population: {} (n/N = {:.2}%)",
            result.population_type,
            ratio * 100.0
        ),
        (None, None) => format!("Population: {}", result.population_type),
    };
    println!("      {}", style(population_line).dim());

    println!();
    println!("      {} {}", style("Skew:").cyan(), result.interpretations.skewness);
    println!(
        "      {} {}",
        style("Kurtosis:").cyan(),
        result.interpretations.kurtosis
    );

    if let (Some(probability), Some(pct)) = (result.probability_x, result.probability_x_pct) {
        let x = result.inputs.observed.unwrap_or(0);
        println!();
        println!(
            "      {} {} {}",
            style(format!("P(X = {})", x)).white().bold(),
            style("=").dim(),
            style(format!("{} ({:.4}%)", fmt_number(probability), pct))
                .green()
                .bold()
        );
    }
}

/// Print the probability and cumulative series as a table.
pub fn print_chart(chart: &ChartSeries) {
    println!();
    println!("    {}", style("PROBABILITY SERIES").white().bold());
    println!("    {}", style("─".repeat(50)).dim());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("x").add_attribute(Attribute::Bold),
        Cell::new("P(X = x) %").add_attribute(Attribute::Bold),
        Cell::new("Cumulative %").add_attribute(Attribute::Bold),
    ]);

    for ((x, probability), cumulative) in chart
        .x_values
        .iter()
        .zip(chart.probabilities.iter())
        .zip(chart.cumulative.iter())
        .take(SERIES_PREVIEW_ROWS)
    {
        table.add_row(vec![
            Cell::new(x),
            Cell::new(format!("{:.4}", probability)),
            Cell::new(format!("{:.4}", cumulative)),
        ]);
    }
    print_indented(&table);

    if chart.x_values.len() > SERIES_PREVIEW_ROWS {
        println!(
            "      {}",
            style(format!(
                "... {} more rows (use --export for the full series)",
                chart.x_values.len() - SERIES_PREVIEW_ROWS
            ))
            .dim()
        );
    }
}

/// Print the categorical analysis that produced (N, K, p).
pub fn print_categorical(analysis: &CategoricalAnalysis) {
    println!();
    println!(
        "    {} {}",
        style("COLUMN ANALYSIS").white().bold(),
        style(format!("'{}'", analysis.column)).cyan()
    );
    println!("    {}", style("─".repeat(50)).dim());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
        Cell::new("Share").add_attribute(Attribute::Bold),
    ]);

    let mut rows: Vec<(&String, &u64)> = analysis.categories.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    for (category, count) in rows {
        let share = *count as f64 / analysis.population as f64 * 100.0;
        let is_success = category == &analysis.success_category;
        let name_cell = if is_success {
            Cell::new(format!("{} (success)", category))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(category)
        };
        table.add_row(vec![
            name_cell,
            Cell::new(count),
            Cell::new(format!("{:.2}%", share)),
        ]);
    }
    print_indented(&table);

    println!(
        "      N = {}, K = {}, p = {}",
        style(analysis.population).yellow().bold(),
        style(analysis.successes).yellow().bold(),
        style(fmt_number(analysis.p)).yellow().bold()
    );
}
