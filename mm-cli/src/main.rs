// Command-line interface for mm
//
// This binary provides commands for inspecting and converting FreeMind (.mm) files.
//
// The main role for the mm program is to interface with mind-map content: converting it to
// outline markup, meeting minutes or slide decks, and publishing converted output as blog posts.
// The core capabilities use the mm-babel crate; this binary is an interface for that library.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension,
// while being overwrittable by an explicit --from flag.
// Usage:
//  mm <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  mm convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  mm publish <input> [--output <file>]  - Convert and prefix blog front matter from the config
//  mm inspect <path>                     - Dump the parsed node tree as JSON
//  mm --list-formats                     - List available formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Example:
//  mm talk.mm --to notes --extra-order-by-time --extra-fragment

use clap::{Arg, ArgAction, Command, ValueHint};
use mm_babel::{publish, FormatRegistry, FrontMatter, PublishArtifact, PublishSpec};
use mm_config::{Loader, MmConfig};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                // No value, treat as boolean flag
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("mm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting FreeMind mind-map files")
        .long_about(
            "mm is a command-line tool for working with FreeMind (.mm) mind-map files.\n\n\
            Commands:\n  \
            - convert: Transform a mind map into another format\n  \
            - publish: Convert and prefix blog front matter from the config\n  \
            - inspect: Dump the parsed node tree as JSON\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mm talk.mm --to markdown                # Outline markup (stdout)\n  \
            mm talk.mm --to slides -o talk.html     # S5 slide deck\n  \
            mm minutes.mm --to notes --minutes      # Time-ordered meeting minutes\n  \
            mm publish talk.mm                      # Blog post per the config's post table",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mm.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a mind map to another format (default command)")
                .long_about(
                    "Convert a mind map into a flat document format.\n\n\
                    Supported target formats:\n  \
                    - markdown: outline with '#' headings and '-' bullets\n  \
                    - textile:  outline with 'hN.' headings and '*' bullets\n  \
                    - notes:    meeting minutes with section classification\n  \
                    - slides:   S5 slide deck\n\n\
                    The source format is auto-detected from the file extension (.mm).\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("minutes")
                        .long("minutes")
                        .short('m')
                        .help("Order the minutes by time and show the time (notes format)")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("publish")
                .about("Convert a mind map and prefix blog front matter")
                .long_about(
                    "Convert a mind map to outline markup and prefix the blog front matter\n\
                    configured for it in the [posts] table of the configuration file.\n\n\
                    The output path defaults to the configured md_fname; use -o to override.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input mind-map file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to the configured md_fname)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Dump the parsed node tree as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the mind-map file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // Try normal parsing first; if the first arg looks like a file, inject
    // "convert" as the default subcommand.
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "publish"
                && cleaned_args[1] != "inspect"
                && cleaned_args[1] != "help"
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").expect("to is required");
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => detect_from(input),
            };
            if sub_matches.get_flag("minutes") {
                extra_params.insert("order-by-time".to_string(), "true".to_string());
            }
            // Configured notes defaults; explicit flags and extras win
            if to == "notes" {
                let defaults = &config.convert.notes;
                if defaults.order_by_time {
                    extra_params
                        .entry("order-by-time".to_string())
                        .or_insert_with(|| "true".to_string());
                }
                if defaults.fragment {
                    extra_params
                        .entry("fragment".to_string())
                        .or_insert_with(|| "true".to_string());
                }
            }
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert(input, &from, to, output, &extra_params);
        }
        Some(("publish", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_publish(input, output, &extra_params, &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            handle_inspect(path);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn load_cli_config(config_path: Option<&str>) -> MmConfig {
    let loader = match config_path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("mm.toml"),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {e}");
        std::process::exit(1);
    })
}

fn detect_from(input: &str) -> String {
    let registry = FormatRegistry::default();
    match registry.detect_format_from_filename(input) {
        Some(detected) => detected,
        None => {
            eprintln!("Error: Could not detect format from filename '{input}'");
            eprintln!("Please specify --from explicitly");
            std::process::exit(1);
        }
    }
}

fn handle_list_formats() {
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        let format = registry.get(&name).expect("listed format must exist");
        let mut capabilities = Vec::new();
        if format.supports_parsing() {
            capabilities.push("parse");
        }
        if format.supports_serialization() {
            capabilities.push("serialize");
        }
        println!("{name:<10} {:<20} {}", capabilities.join("+"), format.description());
    }
}

fn read_map(input: &str, from: &str) -> mm_babel::MindMap {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });
    let registry = FormatRegistry::default();
    registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Error parsing '{input}': {e}");
        std::process::exit(1);
    })
}

fn handle_convert(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
) {
    let map = read_map(input, from);

    let mut spec = PublishSpec::new(&map, to);
    spec.options = extra_params.clone();
    if let Some(path) = output {
        spec = spec.with_output_path(path);
    }

    match publish(spec) {
        Ok(result) => match result.artifact {
            PublishArtifact::InMemory(text) => println!("{text}"),
            PublishArtifact::File(path) => eprintln!("Wrote {}", path.display()),
        },
        Err(e) => {
            eprintln!("Error converting '{input}': {e}");
            std::process::exit(1);
        }
    }
}

fn handle_publish(
    input: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &MmConfig,
) {
    let filename = Path::new(input)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(input);
    let post = config.post(filename).unwrap_or_else(|| {
        eprintln!("Error: no [posts] entry for '{filename}' in the configuration");
        std::process::exit(1);
    });

    let map = read_map(input, "freemind");

    let output_path = output.unwrap_or(&post.md_fname).to_string();
    let mut spec = PublishSpec::new(&map, &config.convert.outline_dialect)
        .with_front_matter(FrontMatter::from(post))
        .with_output_path(&output_path);
    spec.options = extra_params.clone();

    match publish(spec) {
        Ok(result) => {
            if let PublishArtifact::File(path) = result.artifact {
                println!("Wrote {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Error publishing '{input}': {e}");
            std::process::exit(1);
        }
    }
}

fn handle_inspect(path: &str) {
    let map = read_map(path, "freemind");
    match serde_json::to_string_pretty(&map) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing tree: {e}");
            std::process::exit(1);
        }
    }
}
