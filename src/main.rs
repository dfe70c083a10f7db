use std::{fs, path::PathBuf, process};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};
use volt::{compile_script, run_script};

/// File extension every volt script must carry.
const SCRIPT_EXTENSION: &str = "rn";

/// volt runs a script one statement per line, either by interpreting it or by
/// lowering it to a textual intermediate representation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Lower the script to a listing instead of interpreting it.
    #[arg(short, long)]
    compile: bool,

    /// Write the listing to this file instead of standard output. Only used
    /// together with `--compile`.
    #[arg(short, long, requires = "compile")]
    output: Option<PathBuf>,

    /// The script to run. Must end in `.rn`.
    file: PathBuf,
}

fn main() {
    let args = Args::parse();

    // RUST_LOG controls the level; warnings are shown by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();

    if args.file.extension().is_none_or(|ext| ext != SCRIPT_EXTENSION) {
        eprintln!("Error: volt scripts must have the .{SCRIPT_EXTENSION} extension, got '{}'.",
                  args.file.display());
        process::exit(1);
    }

    let script = fs::read_to_string(&args.file).unwrap_or_else(|_| {
                                                   eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                             args.file.display());
                                                   process::exit(1);
                                               });

    if args.compile {
        compile(&args, &script);
    } else {
        interpret(&script);
    }
}

/// Prints one value per statement; errors are reported and skipped.
fn interpret(script: &str) {
    for outcome in run_script(script) {
        match outcome.result {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}

/// Prints or writes the whole listing; the first error ends the process with
/// a non-zero status.
fn compile(args: &Args, script: &str) {
    let name = args.file
                   .file_stem()
                   .map_or_else(|| "main".to_string(), |stem| stem.to_string_lossy().into_owned());

    let listing = compile_script(&name, script).unwrap_or_else(|e| {
                                                   eprintln!("{e}");
                                                   process::exit(1);
                                               });

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &listing) {
                eprintln!("Failed to write the listing to '{}': {e}", path.display());
                process::exit(1);
            }
        },
        None => print!("{listing}"),
    }
}
