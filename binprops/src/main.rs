//! Command-line tool for checking properties files and converting them to
//! other formats.
//!
//! Usage: props [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --to <FORMAT>          Output format (list, properties, json, yaml, toml, cbor)
//!                              [default: list]
//!   -w, --write                Write output next to the input with an inferred extension
//!   -o, --output <FILE>        Write output to specified file
//!       --check                Check if the file is valid (exit 0 if valid, 1 if invalid)
//!       --bool-shorthand       Also read t/f/T/F as booleans
//!       --log-level <LEVEL>    Log filter when RUST_LOG is unset [default: warn]
//!   -h, --help                 Print help
//!   -V, --version              Print version

use clap::{Parser, ValueEnum};
use libprops::{encode, Format, Loader, ParseOptions, PropertyMap};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;

mod transcode;

/// Load a typed properties file and print or convert it.
#[derive(Parser, Debug)]
#[command(name = "props", version, after_help = EXAMPLES)]
struct Cli {
    /// Input file (reads from stdin if not provided or `-`)
    file: Option<PathBuf>,

    /// Output format
    #[arg(short = 't', long = "to", value_enum, default_value_t = OutputFormat::List)]
    to: OutputFormat,

    /// Write output to a file next to the input, with an inferred extension
    #[arg(short = 'w', long = "write", conflicts_with = "output")]
    write_back: bool,

    /// Write output to the specified file
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Check if the input is valid (exit 0 if valid, 1 if invalid)
    #[arg(long)]
    check: bool,

    /// Also accept t, f, T and F as boolean values
    #[arg(long)]
    bool_shorthand: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One line per property with its value kind
    List,
    /// Canonical key=value lines
    Properties,
    Json,
    Yaml,
    Toml,
    Cbor,
}

impl OutputFormat {
    fn format(self) -> Format {
        match self {
            OutputFormat::List => Format::Listing,
            OutputFormat::Properties => Format::Properties,
            OutputFormat::Json => Format::Json,
            OutputFormat::Yaml => Format::Yaml,
            OutputFormat::Toml => Format::Toml,
            OutputFormat::Cbor => Format::Cbor,
        }
    }
}

const EXAMPLES: &str = "EXAMPLES:
    # List every property with its inferred type
    props app.properties

    # Validate a file
    props --check app.properties

    # Convert to JSON
    props -t json app.properties

    # Rewrite in canonical form (sorted keys)
    props -t properties app.properties -o app.sorted.properties

    # Convert to TOML next to the input (writes app.toml)
    props -t toml -w app.properties

    # Read from stdin
    printf 'a=1\\n' | props -t yaml";

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let options = if cli.bool_shorthand {
        ParseOptions::with_bool_shorthand()
    } else {
        ParseOptions::default()
    };
    let loader = Loader::new().with_options(options);

    // "-" means stdin, same as no argument
    let input_path = cli.file.as_deref().filter(|p| *p != Path::new("-"));

    if cli.write_back && input_path.is_none() {
        eprintln!("Error: --write requires an input file");
        process::exit(1);
    }

    let loaded = match input_path {
        Some(path) => loader.load_path(path),
        None => loader.load_reader(io::stdin().lock()),
    };

    let properties = match loaded {
        Ok(properties) => properties,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    debug!(count = properties.len(), "Input loaded");

    if cli.check {
        match input_path {
            Some(path) => println!("{}: ok", path.display()),
            None => println!("ok"),
        }
        return;
    }

    let exit_code = output_properties(
        &properties,
        cli.to.format(),
        cli.output.as_deref(),
        cli.write_back,
        input_path,
    );
    process::exit(exit_code);
}

fn format_extension(format: Format) -> &'static str {
    match format {
        Format::Properties => "properties",
        Format::Json => "json",
        Format::Listing => "txt",
        Format::Yaml => "yaml",
        Format::Toml => "toml",
        Format::Cbor => "cbor",
    }
}

fn output_properties(
    properties: &PropertyMap,
    format: Format,
    output_file: Option<&Path>,
    write_back: bool,
    input_file: Option<&Path>,
) -> i32 {
    match format {
        Format::Yaml => match transcode::yaml::encode(properties) {
            Ok(output) => write_text_output(&output, output_file, write_back, input_file, format),
            Err(e) => {
                eprintln!("Error: Cannot convert to YAML: {}", e);
                return 1;
            }
        },
        Format::Toml => match transcode::toml::encode(properties) {
            Ok(output) => write_text_output(&output, output_file, write_back, input_file, format),
            Err(e) => {
                eprintln!("Error: Cannot convert to TOML: {}", e);
                return 1;
            }
        },
        Format::Cbor => match transcode::cbor::encode(properties) {
            Ok(bytes) => write_binary_output(&bytes, output_file, write_back, input_file, format),
            Err(e) => {
                eprintln!("Error: Cannot convert to CBOR: {}", e);
                return 1;
            }
        },
        _ => {
            let output = encode(properties, format);
            write_text_output(&output, output_file, write_back, input_file, format);
        }
    }

    0
}

/// Destination file for `--output` or `--write`, or `None` for stdout.
fn output_path(
    output_file: Option<&Path>,
    write_back: bool,
    input_file: Option<&Path>,
    format: Format,
) -> Option<PathBuf> {
    if let Some(path) = output_file {
        return Some(path.to_path_buf());
    }
    if write_back {
        // main() rejects --write without an input file
        return input_file.map(|p| p.with_extension(format_extension(format)));
    }
    None
}

fn write_text_output(
    output: &str,
    output_file: Option<&Path>,
    write_back: bool,
    input_file: Option<&Path>,
    format: Format,
) {
    match output_path(output_file, write_back, input_file, format) {
        Some(path) => {
            if let Err(e) = fs::write(&path, output) {
                eprintln!("Error writing {}: {}", path.display(), e);
                process::exit(1);
            }
        }
        None => {
            print!("{}", output);
            // Ensure output ends with newline
            if !output.is_empty() && !output.ends_with('\n') {
                println!();
            }
        }
    }
}

fn write_binary_output(
    output: &[u8],
    output_file: Option<&Path>,
    write_back: bool,
    input_file: Option<&Path>,
    format: Format,
) {
    match output_path(output_file, write_back, input_file, format) {
        Some(path) => {
            if let Err(e) = fs::write(&path, output) {
                eprintln!("Error writing {}: {}", path.display(), e);
                process::exit(1);
            }
        }
        None => {
            // Write raw bytes to stdout
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            if let Err(e) = handle.write_all(output) {
                eprintln!("Error writing to stdout: {}", e);
                process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["props", "app.properties"]).unwrap();
        assert_eq!(cli.to, OutputFormat::List);
        assert_eq!(cli.file, Some(PathBuf::from("app.properties")));
        assert!(!cli.check && !cli.write_back && !cli.bool_shorthand);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_cli_format_and_flags() {
        let cli =
            Cli::try_parse_from(["props", "-t", "toml", "--bool-shorthand", "-w", "a.properties"])
                .unwrap();
        assert_eq!(cli.to.format(), Format::Toml);
        assert!(cli.bool_shorthand);
        assert!(cli.write_back);
    }

    #[test]
    fn test_cli_rejects_write_with_output() {
        assert!(Cli::try_parse_from(["props", "-w", "-o", "out.json", "a.properties"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["props", "-t", "xml"]).is_err());
    }

    #[test]
    fn test_write_back_path() {
        let path = output_path(
            None,
            true,
            Some(Path::new("conf/app.properties")),
            Format::Json,
        );
        assert_eq!(path, Some(PathBuf::from("conf/app.json")));
    }

    #[test]
    fn test_output_wins_over_stdout() {
        let path = output_path(Some(Path::new("x.yaml")), false, None, Format::Yaml);
        assert_eq!(path, Some(PathBuf::from("x.yaml")));
        assert_eq!(output_path(None, false, None, Format::Yaml), None);
    }
}
