use clap::Parser;
use keiro::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Generate a Postman collection from a converted Apigee proxy configuration
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the xmltodict-converted proxy JSON file
    proxy_path: Option<String>,

    /// Target server host, e.g. api.example.com
    #[arg(short, long)]
    target_host: Option<String>,

    /// Name recorded in the collection's info block
    #[arg(short = 'n', long, default_value = "Collection Name")]
    collection_name: String,

    /// Output file path; defaults to PostmanCollection_<timestamp>.json
    #[arg(short, long)]
    output: Option<String>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive();
    } else {
        run_non_interactive(cli);
    }
}

fn run_generation(
    proxy_path: String,
    target_host: String,
    collection_name: String,
    output_path: Option<String>,
) {
    // --- 1. File Loading ---
    let raw = fs::read_to_string(&proxy_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read proxy file '{}': {}",
            &proxy_path, e
        ))
    });
    let tree: serde_json::Value = serde_json::from_str(&raw)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse proxy JSON: {}", e)));

    // --- 2. Route Extraction ---
    println!("\nExtracting routes from '{}'...", proxy_path);
    let records = extract_routes(&tree)
        .unwrap_or_else(|e| exit_with_error(&format!("Route extraction failed: {}", e)));
    println!("Extracted {} routable endpoint(s)", records.len());

    for record in &records {
        println!(
            "  -> {} {}{}",
            record.verb, record.base_path, record.path_suffix
        );
    }

    // --- 3. Collection Building ---
    let collection = build_collection(&records, &target_host, &collection_name);
    let json = serde_json::to_string_pretty(&collection)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize collection: {}", e)));

    // --- 4. Output ---
    let output_path = output_path.unwrap_or_else(default_output_path);
    if let Some(parent) = Path::new(&output_path).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to create output directory '{}': {}",
                parent.display(),
                e
            ))
        });
    }
    fs::write(&output_path, json).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to write collection to '{}': {}",
            &output_path, e
        ))
    });

    println!("\nPostman collection created and saved as '{}'.", output_path);
}

/// Runs the CLI in non-interactive mode, taking all arguments from the
/// command line.
fn run_non_interactive(cli: Cli) {
    let proxy_path = cli.proxy_path.unwrap_or_else(|| {
        exit_with_error("Proxy path is required in non-interactive mode.");
    });
    let target_host = cli.target_host.unwrap_or_else(|| {
        exit_with_error("Target host is required in non-interactive mode.");
    });

    run_generation(proxy_path, target_host, cli.collection_name, cli.output);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() {
    println!("--- Keiro Interactive Mode ---");

    let proxy_path = prompt_for_input(
        "Enter converted proxy JSON path",
        Some("xml2jsonConvertedFile/default.json"),
    );
    let target_host = prompt_for_input("Enter the target server (e.g., api.example.com)", None);
    let collection_name = prompt_for_input("Enter collection name", Some("Collection Name"));
    let output_path_str = prompt_for_input("Enter output path (optional)", None);

    let output_path = if output_path_str.is_empty() {
        None
    } else {
        Some(output_path_str)
    };

    run_generation(proxy_path, target_host, collection_name, output_path);
}

fn default_output_path() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("PostmanCollections/PostmanCollection_{}.json", timestamp)
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
