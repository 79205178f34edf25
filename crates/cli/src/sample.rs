// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sample document generation.
//!
//! Lorem-ipsum style filler for trying patterns out before real content
//! exists: 4-8 sentences per paragraph, 4-16 words per sentence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default paragraph count.
pub const DEFAULT_PARAGRAPHS: usize = 3;

const WORDS: &[&str] = &[
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sed",
    "do",
    "eiusmod",
    "tempor",
    "incididunt",
    "ut",
    "labore",
    "et",
    "dolore",
    "magna",
    "aliqua",
    "enim",
    "ad",
    "minim",
    "veniam",
    "quis",
    "nostrud",
    "exercitation",
    "ullamco",
    "laboris",
    "nisi",
    "aliquip",
    "ex",
    "ea",
    "commodo",
    "consequat",
    "duis",
    "aute",
    "irure",
    "in",
    "reprehenderit",
    "voluptate",
    "velit",
    "esse",
    "cillum",
    "fugiat",
    "nulla",
    "pariatur",
    "excepteur",
    "sint",
    "occaecat",
    "cupidatat",
    "non",
    "proident",
    "sunt",
    "culpa",
    "qui",
    "officia",
    "deserunt",
    "mollit",
    "anim",
    "id",
    "est",
    "laborum",
];

/// Generate `paragraphs` paragraphs of filler text, separated by blank
/// lines. A seed makes the output reproducible.
pub fn generate(paragraphs: usize, seed: Option<u64>) -> String {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut out = Vec::with_capacity(paragraphs);
    for _ in 0..paragraphs {
        out.push(paragraph(&mut rng));
    }
    out.join("\n\n")
}

fn paragraph(rng: &mut StdRng) -> String {
    let sentences = rng.gen_range(4..=8);
    let mut out = Vec::with_capacity(sentences);
    for _ in 0..sentences {
        out.push(sentence(rng));
    }
    out.join(" ")
}

fn sentence(rng: &mut StdRng) -> String {
    let words = rng.gen_range(4..=16);
    let mut out = String::new();
    for i in 0..words {
        let word = WORDS[rng.gen_range(0..WORDS.len())];
        if i == 0 {
            // Capitalize the first word; the vocabulary is all ASCII.
            out.push(word.as_bytes()[0].to_ascii_uppercase() as char);
            out.push_str(&word[1..]);
        } else {
            out.push(' ');
            out.push_str(word);
        }
    }
    out.push('.');
    out
}

#[cfg(test)]
#[path = "sample_tests.rs"]
mod tests;
