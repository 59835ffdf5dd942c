// Colored terminal output for sentence checks and document comparisons.
//
// The library never prints; main.rs hands outcomes to these functions.

use colored::Colorize;

use super::links::search_links;
use super::truncate_chars;
use crate::pipeline::{CheckOutcome, CompareOutcome, ComparisonReport};

/// Display the sentences of a checked document with their search links.
pub fn display_check(outcome: &CheckOutcome) {
    let (source, sentences) = match outcome {
        CheckOutcome::NoContent { source } if source.is_empty() => {
            println!("{}", "No text found for plagiarism check.".yellow());
            return;
        }
        CheckOutcome::NoContent { source } => {
            println!(
                "{}",
                format!("No content found in '{source}'.").yellow()
            );
            return;
        }
        CheckOutcome::Sentences { source, sentences } => (source, sentences),
    };

    println!(
        "\n{}",
        format!("=== {} sentences from {} ===", sentences.len(), source).bold()
    );
    println!("Open the links below to check each sentence manually:\n");

    for (i, sentence) in sentences.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, sentence.bold());
        for link in search_links(sentence) {
            println!("       {:<24} {}", link.label.dimmed(), link.url);
        }
        println!("  {}", "-".repeat(60).dimmed());
    }
}

/// Display a comparison outcome, including up to `max_passages` passages.
pub fn display_compare(outcome: &CompareOutcome, max_passages: usize) {
    match outcome {
        CompareOutcome::WrongDocumentCount(n) => {
            println!(
                "{}",
                format!("Please supply exactly two files to compare (got {n}).").yellow()
            );
        }
        CompareOutcome::InsufficientContent { left, right } => {
            println!(
                "{}",
                format!("One or both files have no content to compare ({left}, {right}).")
                    .yellow()
            );
        }
        CompareOutcome::Compared(report) => display_report(report, max_passages),
    }
}

fn display_report(report: &ComparisonReport, max_passages: usize) {
    println!(
        "\n{}",
        format!("=== {} vs {} ===", report.left, report.right).bold()
    );
    println!();

    let bar_width: usize = 40;
    let filled = (report.similarity * bar_width as f64).round() as usize;
    let bar = format!(
        "[{}{}]",
        "=".repeat(filled),
        " ".repeat(bar_width.saturating_sub(filled))
    );
    println!(
        "  Similarity: {} {}",
        colorize_similarity(report.similarity, &bar),
        colorize_similarity(report.similarity, &format!("{:.2}%", report.percent())).bold()
    );
    println!(
        "  Matching passages: {} ({} characters)",
        report.spans.len(),
        report.matched_chars()
    );

    if report.spans.is_empty() || max_passages == 0 {
        return;
    }

    println!("\n  {}", "Matching text:".bold());
    for (span, passage) in report.spans.iter().zip(report.passages()).take(max_passages) {
        let preview = truncate_chars(passage, 100);
        println!(
            "    @{:<6} @{:<6} {:>5}  {}",
            span.a,
            span.b,
            span.len,
            format!("{preview:?}").dimmed()
        );
    }
    if report.spans.len() > max_passages {
        println!(
            "    {}",
            format!("... and {} more", report.spans.len() - max_passages).dimmed()
        );
    }
}

/// Color a string by how high the similarity is.
fn colorize_similarity(similarity: f64, text: &str) -> colored::ColoredString {
    if similarity >= 0.75 {
        text.red()
    } else if similarity >= 0.40 {
        text.yellow()
    } else {
        text.green()
    }
}
