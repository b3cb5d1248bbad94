//! Side-by-side engine comparison on a bundled sample dataset.
//!
//! Usage: compare_engines [QUERY] [KIND] [LIMIT]
//! where KIND is exact, prefix, or fuzzy.

use std::env;
use std::fs;
use std::io::Write;

use indexbench::{EngineKind, Harness, QueryKind};

const SAMPLE_REVIEWS: &[&str] = &[
    "A funny book that kept me laughing the whole flight",
    "Boring from the first chapter, could not finish it",
    "A great story about friendship and loss",
    "The funniest book in the series by far",
    "Bound to become a classic, beautifully written",
    "Dry and boring, the plot never gets going",
    "Great characters but the ending felt rushed",
    "A book about books, what more could a reader want",
    "Not funny, not clever, not worth the money",
    "The best great-adventure story I have read this year",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let query = args.get(1).map(String::as_str).unwrap_or("funny");
    let kind: QueryKind = args.get(2).map(String::as_str).unwrap_or("exact").parse()?;
    let limit: usize = args.get(3).map(String::as_str).unwrap_or("10").parse()?;

    let dataset_path = env::temp_dir().join("indexbench_demo.json");
    let mut file = fs::File::create(&dataset_path)?;
    for text in SAMPLE_REVIEWS {
        writeln!(file, "{}", serde_json::json!({ "reviewText": text }))?;
    }

    println!("Benchmarking all engines");
    println!("  query: {:?} ({:?}), limit: {}", query, kind, limit);
    println!("  corpus: {} sample reviews\n", SAMPLE_REVIEWS.len());

    let harness = Harness::with_defaults();
    let report = harness.run_single(&dataset_path, query, limit, kind)?;

    println!(
        "{:<10} {:>8} {:>12} {:>12}",
        "engine", "matches", "time (ms)", "peak (KiB)"
    );
    for engine_kind in EngineKind::ALL {
        let name = engine_kind.name();
        match report[name].result() {
            Some(result) => println!(
                "{:<10} {:>8} {:>12.4} {:>12.1}",
                name,
                result.matches.len(),
                result.elapsed_ms(),
                result.peak_memory as f64 / 1024.0
            ),
            None => println!(
                "{:<10} {:>8} {:>12} {:>12}  ({})",
                name,
                "-",
                "-",
                "-",
                report[name].error().unwrap_or("failed")
            ),
        }
    }

    if let Some(result) = report["linear"].result() {
        println!("\nMatches (linear scan):");
        for record in &result.matches {
            println!("  [{}] {}", record.id.value(), record.text);
        }
    }

    fs::remove_file(&dataset_path).ok();
    Ok(())
}
