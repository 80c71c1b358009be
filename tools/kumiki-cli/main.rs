use clap::{Parser, ValueEnum};
use kumiki::prelude::*;
use std::fs;
use std::process;
use std::time::Instant;

/// CLI-side mirror of the library's generation mode for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeCli {
    Deployed,
    Live,
}

impl From<ModeCli> for GenerationMode {
    fn from(mode: ModeCli) -> Self {
        match mode {
            ModeCli::Deployed => GenerationMode::Deployed,
            ModeCli::Live => GenerationMode::LiveSession,
        }
    }
}

/// Compile a visual block program into runtime-language text
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the component schema JSON file
    schema_path: String,
    /// Path to the form descriptor JSON file
    form_path: String,
    /// Optional path to the block-program JSON file (events/globals/procedures)
    program_path: Option<String>,

    /// Generation mode
    #[arg(short, long, value_enum, default_value = "deployed")]
    mode: ModeCli,

    /// Package prefix for the define-form header
    #[arg(short, long)]
    package: Option<String>,

    /// Write the output here instead of stdout
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    let schema_json = fs::read_to_string(&cli.schema_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read schema file '{}': {}",
            &cli.schema_path, e
        ))
    });
    let form_json = fs::read_to_string(&cli.form_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read form file '{}': {}",
            &cli.form_path, e
        ))
    });
    let program: ProgramBlocks = match &cli.program_path {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read program file '{}': {}", path, e))
            });
            serde_json::from_str(&text).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to parse program JSON: {}", e))
            })
        }
        None => {
            eprintln!("No block-program file provided; generating the bare form.");
            ProgramBlocks::new()
        }
    };

    let mut db = ComponentDatabase::new();
    db.populate_from_json(&schema_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load schema: {}", e)));

    let mut generator = CodeGenerator::new(&db, cli.mode.into());
    if let Some(package) = &cli.package {
        generator = generator.with_package(package.clone());
    }

    let output = generator
        .generate(&form_json, &program)
        .unwrap_or_else(|e| exit_with_error(&format!("Generation failed: {}", e)));

    match &cli.output {
        Some(path) => {
            fs::write(path, &output).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write output '{}': {}", path, e))
            });
            eprintln!(
                "Wrote {} bytes to {} in {:?}",
                output.len(),
                path,
                total_start.elapsed()
            );
        }
        None => println!("{output}"),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}
