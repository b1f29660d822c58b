use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_humanize_core::{HumanizeError, Humanizer, Lexicon, word_count};

const TEXT: &str = "Numerous organizations utilize automated systems in order to facilitate significant \
    improvements. It is important to demonstrate that the methodology is sound. Subsequently, teams \
    conduct reviews and they implement changes because the optimization process requires approximately \
    three iterations. Nevertheless, the results do not always match expectations.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build the pipeline over the stock English word tables
    let humanizer = Humanizer::new(Lexicon::ENGLISH)?;

    println!("Original ({} words):\n{}\n", word_count(TEXT), TEXT);

    // Unseeded runs differ every time
    for i in 0..3 {
        let result = humanizer.humanize(TEXT)?;
        println!("Run {} ({} -> {} words):\n{}\n", i + 1, result.original_word_count, result.final_word_count, result.text);
    }

    // Same seed, same output
    let first = humanizer.humanize_with_rng(TEXT, &mut StdRng::seed_from_u64(42))?;
    let second = humanizer.humanize_with_rng(TEXT, &mut StdRng::seed_from_u64(42))?;
    println!("Seeded run (seed 42), reproducible: {}\n{}\n", first == second, first.text);

    // Empty input is refused before any pass runs
    match humanizer.humanize("   ") {
        Err(HumanizeError::MissingInput) => println!("Blank input rejected: {}", HumanizeError::MissingInput),
        _ => println!("Should not happen"),
    }

    // A lexicon with an empty table cannot build a humanizer
    let broken = Lexicon { fillers: &[], ..Lexicon::ENGLISH };
    match Humanizer::new(broken) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Invalid lexicon: {e}"),
    }

    Ok(())
}
