//! Build script to embed the word lists
//!
//! Reads `data/*.txt` (one word per line) and generates Rust source with const arrays.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// (input file, const name, doc line)
const LISTS: &[(&str, &str, &str)] = &[
    (
        "data/answers.txt",
        "ANSWERS",
        "Words eligible to be chosen as the target",
    ),
    (
        "data/allowed.txt",
        "ALLOWED",
        "Additional words accepted as guesses but never chosen as the target",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let out_path = Path::new(&out_dir).join("wordlists.rs");

    let mut output = fs::File::create(&out_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", out_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    for &(input_path, const_name, doc_comment) in LISTS {
        let words = read_words(input_path)
            .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));
        write_list(&mut output, &words, const_name, doc_comment).unwrap();
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn read_words(path: &str) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect())
}

fn write_list(
    output: &mut impl Write,
    words: &[String],
    const_name: &str,
    doc_comment: &str,
) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "/// {doc_comment} ({} words)", words.len())?;
    writeln!(output, "pub const {const_name}: &[&str] = &[")?;
    for word in words {
        writeln!(output, "    {word:?},")?;
    }
    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in {const_name}")?;
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", words.len())
}
