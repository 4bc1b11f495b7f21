use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use clap::{Parser, ValueEnum};
use serde::Serialize;
use struct_json::{Builder, Builders, ParseOptions, ScanMode, Struct};

#[derive(Parser, Debug)]
#[command(name = "sjson", version, about = "Lenient JSON parser and renderer")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Force array parsing (overrides auto-detection).
    #[arg(short = 'a', long, conflicts_with = "object")]
    array: bool,

    /// Force object parsing (overrides auto-detection).
    #[arg(long)]
    object: bool,

    /// Output format: compact, json, row (default: compact).
    #[arg(short, long, value_enum, value_name = "format", default_value_t = Format::Compact)]
    format: Format,

    /// Skip braces and brackets that appear inside quoted strings.
    #[arg(long)]
    string_aware: bool,

    /// Maximum nesting depth (default: 256).
    #[arg(long, value_name = "number", conflicts_with = "no_depth_limit")]
    max_depth: Option<usize>,

    /// Disable the nesting depth limit.
    #[arg(long)]
    no_depth_limit: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Re-render in the compact wire form.
    Compact,
    /// Pretty-printed standard JSON.
    Json,
    /// The flat row of scalar members, as pretty-printed JSON.
    Row,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    Object,
    Array,
}

enum Parsed {
    Object(Builder),
    Array(Builders),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let input = read_input(args.input.as_deref())?;
    let options = parse_options(&args);
    let shape = resolve_shape(&args, &input);
    log::debug!("parsing input as {shape:?} with {options:?}");

    let parsed = match shape {
        Shape::Object => {
            let mut builder = Builder::new();
            builder.parse_with_options(&input, &options)?;
            Parsed::Object(builder)
        }
        Shape::Array => Parsed::Array(struct_json::parse_array_with_options(&input, &options)?),
    };

    let rendered = render(&parsed, args.format)?;
    write_output(args.output.as_deref(), rendered.as_bytes())?;
    if let Some(path) = args.output.as_deref().filter(|path| *path != "-") {
        println!("✔ Rendered {} → {path}", args.input.as_deref().unwrap_or("stdin"));
    }
    Ok(())
}

fn parse_options(args: &Args) -> ParseOptions {
    let scan_mode = if args.string_aware {
        ScanMode::StringAware
    } else {
        ScanMode::Legacy
    };
    let max_depth = if args.no_depth_limit {
        None
    } else {
        Some(args.max_depth.unwrap_or(struct_json::constants::MAX_DEPTH))
    };
    ParseOptions::new()
        .with_scan_mode(scan_mode)
        .with_max_depth(max_depth)
}

fn resolve_shape(args: &Args, input: &str) -> Shape {
    if args.array {
        return Shape::Array;
    }
    if args.object {
        return Shape::Object;
    }
    if input.trim_start().starts_with('[') {
        Shape::Array
    } else {
        Shape::Object
    }
}

fn render(parsed: &Parsed, format: Format) -> Result<String, Box<dyn Error>> {
    match (parsed, format) {
        (Parsed::Object(builder), Format::Compact) => Ok(builder.to_string()),
        (Parsed::Array(array), Format::Compact) => Ok(array.to_string()),
        (Parsed::Object(builder), Format::Json) => pretty(&struct_json::to_json_value(builder)?),
        (Parsed::Array(array), Format::Json) => pretty(&struct_json::to_json_value(array)?),
        (Parsed::Object(builder), Format::Row) => pretty(&builder.to_row()?),
        (Parsed::Array(array), Format::Row) => pretty(&array.to_row()?),
    }
}

fn pretty<T: Serialize>(value: &T) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn read_input(input: Option<&str>) -> Result<String, Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(fs::read_to_string(path)?),
    }
}

fn write_output(path: Option<&str>, data: &[u8]) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) if path != "-" => fs::write(path, data)?,
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(data)?;
        }
    }
    Ok(())
}
