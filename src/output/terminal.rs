// Colored terminal output for analysis reports and theme listings.
//
// All terminal-specific formatting lives here: colors, bars, section
// headers. The main.rs display paths delegate to these functions.

use colored::Colorize;

use crate::analysis::whitespace::Priority;
use crate::analysis::CompetitiveAnalysisReport;
use crate::output::truncate_chars;
use crate::themes::cluster::ThemeCluster;
use crate::themes::model::ExtractedTheme;

/// Render the full competitive analysis report.
pub fn display_report(report: &CompetitiveAnalysisReport) {
    println!(
        "\n{}",
        "=== Competitive Messaging Report ===".bold()
    );
    println!(
        "  {} sources, {} documents analyzed",
        report.summary.total_sources, report.summary.total_documents
    );
    println!();

    // Overall score with a bar
    let overall = report.differentiation.overall;
    println!(
        "  Differentiation: {} {}",
        score_bar(overall),
        colorize_score(overall)
    );
    let b = &report.differentiation.breakdown;
    println!(
        "    unique {:>3}  clarity {:>3}  value {:>3}  content {:>3}  voice {:>3}",
        b.unique_themes, b.messaging_clarity, b.value_proposition, b.content_quality, b.brand_voice
    );
    println!();

    if !report.differentiation.strengths.is_empty() {
        println!("  {}", "Strengths".green().bold());
        for s in &report.differentiation.strengths {
            println!("    + {s}");
        }
    }
    if !report.differentiation.weaknesses.is_empty() {
        println!("  {}", "Weaknesses".red().bold());
        for w in &report.differentiation.weaknesses {
            println!("    - {w}");
        }
    }
    if !report.differentiation.opportunities.is_empty() {
        println!("  {}", "Opportunities".yellow().bold());
        for o in &report.differentiation.opportunities {
            println!("    ~ {o}");
        }
    }
    println!();

    display_theme_table("Your unique themes", &report.unique_themes, 10);
    display_theme_table("Shared with competitors", &report.common_themes, 10);
    display_clusters(&report.clusters);

    if !report.white_space.is_empty() {
        println!("  {}", "White-space opportunities".bold());
        for opp in report.white_space.iter().take(10) {
            println!(
                "    {:>5.1}  {}  {}",
                opp.opportunity_score,
                colorize_priority(opp.priority),
                truncate_chars(&opp.area, 48),
            );
        }
        println!();
    }

    if !report.content_gaps.is_empty() {
        println!("  {}", "Content gaps".bold());
        for gap in report.content_gaps.iter().take(10) {
            println!(
                "    {:>4.0}%  {}  {}",
                gap.source_usage_percent,
                colorize_priority(gap.impact),
                truncate_chars(&gap.theme, 48),
            );
        }
        println!();
    }

    if !report.summary.top_opportunity_areas.is_empty() {
        println!(
            "  Top opportunity areas: {}",
            report.summary.top_opportunity_areas.join(", ").bold()
        );
    }
}

/// Render a theme-and-cluster listing for a single corpus.
pub fn display_themes(themes: &[ExtractedTheme], clusters: &[ThemeCluster]) {
    if themes.is_empty() {
        println!("No themes survived extraction. Lower --min-frequency or supply more content.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Extracted Themes ({}) ===", themes.len()).bold()
    );
    println!();
    println!(
        "  {:<40} {:>5}  {:>8}  {:>10}  {}",
        "Theme".dimmed(),
        "Freq".dimmed(),
        "Sources".dimmed(),
        "Confidence".dimmed(),
        "Category".dimmed(),
    );
    println!("  {}", "-".repeat(84).dimmed());

    for theme in themes {
        let category = theme
            .category
            .map(|c| format!("{c:?}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<40} {:>5}  {:>8}  {:>10.2}  {}",
            truncate_chars(&theme.theme, 38),
            theme.frequency,
            theme.source_count(),
            theme.confidence,
            category,
        );
    }
    println!();

    display_clusters(clusters);
}

fn display_theme_table(title: &str, themes: &[ExtractedTheme], limit: usize) {
    if themes.is_empty() {
        return;
    }
    println!("  {}", title.bold());
    for theme in themes.iter().take(limit) {
        println!(
            "    {:<40} x{}",
            truncate_chars(&theme.theme, 38),
            theme.frequency
        );
    }
    println!();
}

fn display_clusters(clusters: &[ThemeCluster]) {
    if clusters.is_empty() {
        return;
    }
    println!("  {}", "Theme clusters".bold());
    for cluster in clusters.iter().take(10) {
        let coverage = cluster.competitor_coverage;
        let bar = coverage_bar(coverage);
        println!(
            "    {:<36} {:>4} mentions  {} {:>5.1}% coverage",
            truncate_chars(&cluster.name, 34),
            cluster.total_frequency,
            bar,
            coverage,
        );
    }
    println!();
}

fn score_bar(score: u32) -> String {
    let width = 20usize;
    let filled = (score as usize * width) / 100;
    format!("[{}{}]", "=".repeat(filled), " ".repeat(width - filled))
}

fn coverage_bar(coverage: f64) -> String {
    let width = 10usize;
    let filled = ((coverage / 100.0 * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), " ".repeat(width - filled))
}

fn colorize_score(score: u32) -> String {
    let text = format!("{score}/100");
    if score >= 70 {
        text.bright_green().to_string()
    } else if score >= 40 {
        text.bright_yellow().to_string()
    } else {
        text.bright_red().to_string()
    }
}

fn colorize_priority(priority: Priority) -> String {
    match priority {
        Priority::High => "high  ".red().to_string(),
        Priority::Medium => "medium".yellow().to_string(),
        Priority::Low => "low   ".normal().to_string(),
    }
}
