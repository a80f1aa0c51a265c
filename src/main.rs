//! named-format CLI
//!
//! Usage:
//!   named-format [OPTIONS] [PATTERN]
//!
//! Options:
//!   -p, --params <FILE>   Parameter file (TOML, values under [values])
//!   -l, --locale <TAG>    Locale tag, `language` or `language_COUNTRY`
//!       --positional      Treat the pattern as already positional
//!       --rewrite-only    Print the rewritten pattern instead of rendering
//!   -h, --help            Print help

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use named_format::{format, params, scan, FormatError, Locale, ParamSet, ParseMode, Value};

#[derive(Parser)]
#[command(name = "named-format")]
#[command(about = "Rewrite named message patterns to positional form and render them")]
struct Cli {
    /// Pattern text (reads from stdin if not provided)
    pattern: Option<String>,

    /// Parameter file (TOML format, values under a [values] table)
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Locale tag: `language` or `language_COUNTRY`
    #[arg(short, long, default_value = "en_US")]
    locale: String,

    /// Treat the pattern as already positional and print it unchanged
    #[arg(long)]
    positional: bool,

    /// Print the rewritten positional pattern instead of rendering it
    #[arg(long)]
    rewrite_only: bool,
}

fn main() {
    let cli = Cli::parse();

    // If no pattern argument and stdin is a terminal (interactive), show
    // intro help
    let pattern = match &cli.pattern {
        Some(text) => text.clone(),
        None => {
            if io::stdin().is_terminal() {
                print_intro();
                return;
            }
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };
    // patterns are whitespace-significant; only the trailing newline from
    // stdin is dropped
    let pattern = pattern
        .strip_suffix('\n')
        .map(|p| p.strip_suffix('\r').unwrap_or(p))
        .unwrap_or(&pattern)
        .to_string();

    let locale = parse_locale(&cli.locale);

    // Load parameters
    let mut parameters: ParamSet = match &cli.params {
        Some(path) => match params::from_file(path) {
            Ok(set) => set,
            Err(e) => {
                eprintln!("Error loading parameters '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ParamSet::new(),
    };

    // The locale is addressable as a parameter unless the file already
    // defines one
    parameters
        .entry("locale".to_string())
        .or_insert_with(|| Value::Object(Arc::new(locale.clone())));

    if cli.positional || cli.rewrite_only {
        let mode = if cli.positional {
            ParseMode::Positional
        } else {
            ParseMode::Named
        };
        match scan(&pattern, mode) {
            Ok(parsed) => println!("{}", parsed.text()),
            Err(e) => {
                eprintln!("{}", e.format(&pattern, "<pattern>"));
                std::process::exit(1);
            }
        }
        return;
    }

    match format(&pattern, &parameters, &locale) {
        Ok(message) => println!("{}", message),
        Err(FormatError::Parse(e)) => {
            eprintln!("{}", e.format(&pattern, "<pattern>"));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn parse_locale(tag: &str) -> Locale {
    match tag.split_once('_') {
        Some((language, country)) => Locale::new(language, country),
        None => Locale::new(tag, ""),
    }
}

fn print_intro() {
    println!(
        r#"named-format - rewrite named message patterns and render them

USAGE:
    named-format [OPTIONS] [PATTERN]
    echo '<pattern>' | named-format [OPTIONS]

OPTIONS:
    -p, --params <FILE>   Parameter file (TOML, values under [values])
    -l, --locale <TAG>    Locale tag (default: en_US)
        --positional      Pattern is already positional; print it unchanged
        --rewrite-only    Print the rewritten pattern, skip rendering
    -h, --help            Print help

QUICK START:
    echo 'Hello {{user}}' | named-format -p params.toml

with params.toml:

    [values]
    user = "world"

Dotted paths reach into nested tables ({{bean.s1}}), and the active locale
is addressable as {{locale.language}}."#
    );
}
