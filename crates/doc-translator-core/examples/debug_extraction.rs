use std::fs;
use std::path::PathBuf;

use doc_translator_core::extract::extract_text;
use doc_translator_core::{DEFAULT_MAX_CHARS, DocumentFormat, limit_chars};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: debug_extraction <file> <mime-type>");
        std::process::exit(1);
    }

    let path = PathBuf::from(&args[1]);
    let format = DocumentFormat::from_mime(&args[2]).expect("Unsupported content type");

    println!("Reading: {}", path.display());
    println!("Format: {format}\n");

    let bytes = fs::read(&path).expect("Failed to read file");
    let result = extract_text(format, &bytes).expect("Failed to extract text");

    let chars = result.char_count();
    println!("Extracted {} chars ({} bytes)", chars, result.text.len());
    println!("Blank: {}", result.is_blank());

    let limited = limit_chars(result.text, DEFAULT_MAX_CHARS);
    println!("Would be truncated: {}\n", limited.truncated);

    let preview: String = limited.text.chars().take(500).collect();
    println!("=== Preview ===");
    println!("{preview}");
    if chars > 500 {
        println!("...");
    }
}
