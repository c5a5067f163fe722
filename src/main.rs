use had_reader::had::utils;
use had_reader::HadReader;
use std::env;

const DEFAULT_TRIE_PATH: &str = "assets/trie.bin";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1].starts_with("--") {
        eprintln!(
            "Usage: {} <path-to-had-file> [--trie <trie.bin>] [--dump <hex-dump-file>]",
            args[0]
        );
        std::process::exit(1);
    }

    let asset_path = &args[1];
    let trie_path = flag_value(&args, "--trie").unwrap_or(DEFAULT_TRIE_PATH);
    let dump_path = flag_value(&args, "--dump");

    println!("Reading asset file: {}", asset_path);
    println!("Using trie: {}", trie_path);
    println!("{}", "=".repeat(60));

    let reader = match HadReader::new(asset_path, trie_path) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("\nERROR: Failed to load asset");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    if let Some(dump_path) = dump_path {
        if let Err(e) = utils::write_hex_dump(dump_path, reader.data()) {
            eprintln!("\nERROR: Failed to write hex dump");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
        println!("Hex dump written to {}", dump_path);
    }

    match reader.palettes() {
        Ok(palettes) => {
            println!("Palette count: {}\n", palettes.len());
            for (i, palette) in palettes.iter().enumerate() {
                println!("Palette #{}: {}", i + 1, palette.name);
                for (j, color) in palette.colors.iter().enumerate() {
                    println!("Color #{}: {}", j + 1, color);
                }
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to decode palettes");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns the argument following `flag`, exiting if the flag has none.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let idx = args.iter().position(|arg| arg == flag)?;
    match args.get(idx + 1) {
        Some(value) => Some(value.as_str()),
        None => {
            eprintln!("ERROR: {} flag requires an argument.", flag);
            std::process::exit(1);
        }
    }
}
