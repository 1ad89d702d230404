//! Build script to generate the embedded word list
//!
//! Turns `data/words.txt` into a const slice so offline play needs no files.
//! Malformed entries fail the build instead of surfacing at runtime.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const WORD_FILE: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let content =
        fs::read_to_string(WORD_FILE).unwrap_or_else(|e| panic!("Failed to read {WORD_FILE}: {e}"));

    let words = collect_words(&content);
    let source = render_word_list("WORDS", &words);

    let output_path = Path::new(&out_dir).join("words.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    println!("cargo:rerun-if-changed={WORD_FILE}");
}

/// Trimmed, non-empty lines; panics on anything that is not a unique
/// five-letter lowercase word
fn collect_words(content: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, word)| !word.is_empty())
        .map(|(line_no, word)| {
            assert!(
                word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()),
                "{WORD_FILE}:{line_no}: '{word}' is not a five-letter lowercase word"
            );
            assert!(seen.insert(word), "{WORD_FILE}:{line_no}: duplicate word '{word}'");
            word
        })
        .collect()
}

fn render_word_list(const_name: &str, words: &[&str]) -> String {
    let mut source = String::new();

    writeln!(source, "// Generated from {WORD_FILE}; do not edit").unwrap();
    writeln!(source).unwrap();
    writeln!(
        source,
        "/// Bundled five-letter target words, used when the word service is not wanted"
    )
    .unwrap();
    writeln!(source, "pub const {const_name}: &[&str] = &[").unwrap();
    for chunk in words.chunks(8) {
        let line: Vec<String> = chunk.iter().map(|w| format!("\"{w}\"")).collect();
        writeln!(source, "    {},", line.join(", ")).unwrap();
    }
    writeln!(source, "];").unwrap();
    writeln!(source).unwrap();
    writeln!(source, "/// Number of words in {const_name}").unwrap();
    writeln!(source, "pub const {const_name}_COUNT: usize = {};", words.len()).unwrap();

    source
}
