use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

use pngmeta_reader::{extract_from_file, is_png, PngMetaError};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-png-folder>", args[0]);
        std::process::exit(1);
    }

    let folder = Path::new(&args[1]);
    if !folder.is_dir() {
        eprintln!("ERROR: Invalid or inaccessible folder path: {}", folder.display());
        std::process::exit(1);
    }

    println!("Extracting PNG text metadata from: {}", folder.display());
    println!("{}", "=".repeat(60));

    match process_folder(folder) {
        Ok((processed, extracted)) => {
            println!(
                "\nFinished! Scanned {} PNG files, extracted metadata from {}.",
                processed, extracted
            );
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to process folder");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}

/// Scan every PNG in `folder` (non-recursively) and write each extracted
/// document to a sibling `.txt` file.
///
/// Returns `(processed, extracted)` counts. Per-file failures are reported
/// and counted but never abort the batch.
fn process_folder(folder: &Path) -> std::io::Result<(u64, u64)> {
    let mut processed = 0u64;
    let mut extracted = 0u64;

    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file() || !has_png_extension(&path) || !is_png(&path) {
            continue;
        }

        processed += 1;
        match extract_from_file(&path) {
            Ok(document) => {
                let txt_path = path.with_extension("txt");
                fs::write(&txt_path, document.to_string())?;
                extracted += 1;
            }
            Err(PngMetaError::NoMetadata) => {}
            Err(e) => eprintln!("\n  {}: {}", path.display(), e),
        }

        print!("\rProcessed: {} | Metadata found: {}", processed, extracted);
        let _ = std::io::stdout().flush();
    }
    println!();

    Ok((processed, extracted))
}

fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}
