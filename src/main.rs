use std::{
    env, fs, io,
    path::{Path, PathBuf},
    process,
};

use tracing_subscriber::EnvFilter;
use typedomain::{
    CompileOptions, Diagnostic, FsLoader, TypeUniverse, load_universe,
    syntax::lexer::Lexer,
    writer::write_domains,
};

fn main() {
    init_tracing();

    let mut args: Vec<String> = env::args().collect();
    let no_ref_check = args.iter().any(|arg| arg == "--no-ref-check");
    if no_ref_check {
        args.retain(|arg| arg != "--no-ref-check");
    }
    let mut roots = Vec::new();
    if !extract_roots(&mut args, &mut roots) {
        process::exit(2);
    }

    if args.len() < 2 {
        print_help();
        return;
    }

    let options = CompileOptions::new()
        .with_roots(roots)
        .check_references(!no_ref_check);

    let command = args[1].as_str();
    if matches!(command, "-h" | "--help" | "help") {
        print_help();
        return;
    }

    let Some(path) = args.get(2) else {
        match command {
            "check" | "json" | "fmt" | "tokens" => {
                eprintln!("Usage: typedomain {} <file>", command);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                print_help();
            }
        }
        process::exit(2);
    };

    match command {
        "check" => check_file(path, &options),
        "json" => json_file(path, &options),
        "fmt" => fmt_file(path, &options),
        "tokens" => show_tokens(path),
        other => {
            eprintln!("Unknown command: {}", other);
            print_help();
            process::exit(2);
        }
    }
}

/// Logs go to stderr, filtered by `TYPEDOMAIN_LOG` (e.g. `typedomain=debug`).
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("TYPEDOMAIN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_help() {
    println!(
        "\
typedomain

Usage:
  typedomain check <file>
  typedomain json <file>
  typedomain fmt <file>
  typedomain tokens <file>
  typedomain <command> <file> --root <path> [--root <path> ...]

Commands:
  check              Resolve the file and list every computed domain
  json               Resolve the file and print the universe as JSON
  fmt                Resolve the file and print the computed domains as DSL
  tokens             Print the lexer tokens of the file

Flags:
  --root <path>      Add an include root (can be repeated)
  --no-ref-check     Allow element types that name no type in their domain
  -h, --help         Show this help message

Environment:
  TYPEDOMAIN_LOG     Log filter, e.g. `debug` (default: warn)
  NO_COLOR           Disable colored diagnostics
"
    );
}

fn extract_roots(args: &mut Vec<String>, roots: &mut Vec<PathBuf>) -> bool {
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--root" {
            if i + 1 >= args.len() {
                eprintln!("Usage: typedomain <command> <file> --root <path> [--root <path> ...]");
                return false;
            }
            let path = args.remove(i + 1);
            args.remove(i);
            roots.push(PathBuf::from(path));
            continue;
        }
        i += 1;
    }
    true
}

fn compile(path: &str, options: &CompileOptions) -> TypeUniverse {
    match load_universe(Path::new(path), options, &FsLoader) {
        Ok(universe) => universe,
        Err(diagnostic) => report(&diagnostic),
    }
}

/// Renders the diagnostic with an excerpt of the file it points into.
fn report(diagnostic: &Diagnostic) -> ! {
    let source = diagnostic
        .location()
        .and_then(|location| fs::read_to_string(location.file()).ok());
    eprintln!("{}", diagnostic.render(source.as_deref()));
    process::exit(1);
}

fn check_file(path: &str, options: &CompileOptions) {
    let universe = compile(path, options);
    for domain in universe.domains() {
        println!("{}: {} types", domain.tag, domain.user_types.len());
    }
    for transform in universe.transforms() {
        println!("transform {} -> {}", transform.from, transform.to);
    }
}

fn json_file(path: &str, options: &CompileOptions) {
    let universe = compile(path, options);
    match serde_json::to_string_pretty(&universe) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("Error serializing {}: {}", path, err);
            process::exit(1);
        }
    }
}

fn fmt_file(path: &str, options: &CompileOptions) {
    let universe = compile(path, options);
    print!("{}", write_domains(universe.domains()));
}

fn show_tokens(path: &str) {
    match fs::read_to_string(path) {
        Ok(source) => {
            let mut lexer = Lexer::new(&source, path);
            println!("Tokens from {}:", path);
            println!("{}", "─".repeat(50));
            for tok in lexer.tokenize() {
                println!(
                    "{:>3}:{:<3} {:12} {:?}",
                    tok.location.line,
                    tok.location.column,
                    tok.token_type.to_string(),
                    tok.literal
                );
            }
        }
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            process::exit(1);
        }
    }
}
