//! Fill a Mad-Libs template from a small in-memory dictionary.
//!
//! Each blank names a category; blanks of the same category get distinct words because
//! they are drawn together, without replacement.

use happylibs::{sample_with_rng, WordCategory, WordDictionary};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dictionary = WordDictionary::from_categories([
        WordCategory::new(
            "adjectives",
            ["fluffy", "grumpy", "sparkly", "enormous", "tiny"]
                .map(String::from)
                .to_vec(),
        ),
        WordCategory::new(
            "nouns",
            ["elephant", "rocket", "umbrella", "banana"]
                .map(String::from)
                .to_vec(),
        ),
        WordCategory::new("verbs", ["juggle", "wobble", "sneeze"].map(String::from).to_vec()),
    ]);

    let template = "The {adjectives} {nouns} began to {verbs} next to a {adjectives} {nouns}.";

    // Count blanks per category so each category is sampled once.
    let blanks: Vec<&str> = template
        .split('{')
        .skip(1)
        .filter_map(|part| part.split_once('}').map(|(name, _)| name))
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut drawn: Vec<(&str, Vec<String>)> = Vec::new();
    for name in dictionary.categories() {
        let k = blanks.iter().filter(|b| **b == name).count();
        drawn.push((name, sample_with_rng(dictionary.words(name)?, k, &mut rng)));
    }

    let mut filled = template.to_owned();
    for (name, words) in &drawn {
        for word in words {
            filled = filled.replacen(&format!("{{{name}}}"), word, 1);
        }
    }

    println!("template: {template}");
    println!("filled:   {filled}");

    Ok(())
}
