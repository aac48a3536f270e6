// Colored terminal output for scores, batch rankings and segmentation.
//
// Result files get the bare number; everything a person reads goes through
// here. main.rs delegates all display to these functions.

use colored::Colorize;

use crate::pipeline::batch::BatchResult;
use crate::similarity::band::SimilarityBand;
use crate::similarity::vector::FrequencyVector;

/// Display the result of a single original/suspect comparison.
pub fn display_check(original: &str, suspect: &str, score: f64, precision: usize) {
    let band = SimilarityBand::from_score(score);

    println!("\n{}", "=== Similarity Check ===".bold());
    println!("  Original: {}", super::truncate_chars(original, 60));
    println!("  Suspect:  {}", super::truncate_chars(suspect, 60));
    println!(
        "  Score:    {}  {}  {}",
        super::format_score(score, precision).bold(),
        colorize_band(band),
        band.describe().dimmed()
    );
}

/// Display a ranked batch of suspects.
pub fn display_ranking(original: &str, results: &[BatchResult]) {
    if results.is_empty() {
        println!("No suspects scored.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Ranking against {} ({} suspects) ===", original, results.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<48} {:>6}  {:<8}",
        "Rank".dimmed(),
        "Suspect".dimmed(),
        "Score".dimmed(),
        "Band".dimmed(),
    );
    println!("  {}", "-".repeat(72).dimmed());

    for (i, result) in results.iter().enumerate() {
        println!(
            "  {:>4}. {:<48} {:>6.2}  {}",
            i + 1,
            super::truncate_chars(&result.suspect, 45),
            result.score,
            colorize_band(result.band),
        );
    }

    println!();

    let high = results
        .iter()
        .filter(|r| r.band == SimilarityBand::High)
        .count();
    let moderate = results
        .iter()
        .filter(|r| r.band == SimilarityBand::Moderate)
        .count();

    if high > 0 {
        println!("  {} {} likely derived documents", "!!".red().bold(), high);
    }
    if moderate > 0 {
        println!("  {} {} with substantial overlap", "~".yellow(), moderate);
    }
}

/// Display a document's tokens and its most frequent terms.
pub fn display_segmentation(path: &str, tokens: &[String], vector: &FrequencyVector, top: usize) {
    println!(
        "\n{}",
        format!(
            "=== Segmentation of {} ({} tokens, {} distinct) ===",
            path,
            vector.total(),
            vector.len()
        )
        .bold()
    );
    println!();

    let joined = tokens.join(" / ");
    println!("  {}", super::truncate_chars(&joined, 400).dimmed());
    println!();

    for (token, count) in vector.sorted().into_iter().take(top) {
        println!("  {:>6}  {}", count, token);
    }
}

/// Colorize a similarity band.
fn colorize_band(band: SimilarityBand) -> colored::ColoredString {
    match band {
        SimilarityBand::High => band.as_str().red().bold(),
        SimilarityBand::Moderate => band.as_str().yellow(),
        SimilarityBand::Low => band.as_str().green(),
    }
}
