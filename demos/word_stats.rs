//! Word Statistics
//!
//! This example runs one reusable pipeline against different sources and
//! reducers.
//!
//! Key concepts:
//! - A pipeline is built once, without knowing its source or its reduction
//! - Flattening lines into words with `mapcat`
//! - Early termination with `take`, even through flattening
//!
//! Run with: cargo run --example word_stats

use transducers::builder::Pipeline;
use transducers::{reducer, reducers, selector, transduce, transduce_str};

fn main() {
    println!("=== Word Statistics Example ===\n");

    let text = vec![
        "the quick brown fox",
        "jumps over",
        "",
        "the lazy dog and keeps running",
    ];

    // Long words only, lowercased, first five of them.
    let long_words = Pipeline::new()
        .mapcat_by(selector!(str::split_whitespace))
        .filter(|w: &&str| w.len() > 3)
        .map(|w: &str| w.to_lowercase())
        .take(5);

    let words = transduce(&long_words, reducers::collect(), text.clone()).unwrap();
    println!("First long words: {:?}", words);

    let letters = transduce(
        &long_words,
        reducer(0, |acc: usize, w: String| acc + w.len()),
        text,
    )
    .unwrap();
    println!("Letters in them: {}", letters);

    let vowels = transduce_str(
        Pipeline::new().filter(|c: &char| "aeiou".contains(*c)),
        reducers::count(),
        "transducers compose",
    )
    .unwrap();
    println!("Vowels in a phrase: {}", vowels);

    println!("\n=== Example Complete ===");
}
