//! varstore CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use varstore_runtime::{Document, init_logging};

/// What to do with the files named on the command line.
#[derive(Debug, PartialEq)]
enum Command {
    Dump(PathBuf),
    Check(PathBuf),
    ToMsgpack { input: PathBuf, output: PathBuf },
}

/// CLI configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    command: Option<Command>,
    show_help: bool,
    show_version: bool,
    verbose: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut positional = Vec::new();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbose = true,
            a if a.starts_with('-') => {
                return Err(format!("unknown option: {a}").into());
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let Some(name) = positional.next() else {
        return Ok(config);
    };
    let paths: Vec<PathBuf> = positional.map(PathBuf::from).collect();

    config.command = Some(match (name.as_str(), paths.as_slice()) {
        ("dump", [path]) => Command::Dump(path.clone()),
        ("check", [path]) => Command::Check(path.clone()),
        ("to-msgpack", [input, output]) => Command::ToMsgpack {
            input: input.clone(),
            output: output.clone(),
        },
        ("dump" | "check", _) => return Err(format!("{name} takes exactly one file").into()),
        ("to-msgpack", _) => return Err("to-msgpack takes an input and an output file".into()),
        _ => return Err(format!("unknown command: {name}").into()),
    });

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("varstore {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.verbose);

    match config.command {
        None => {
            print_help();
            Err("no command given".into())
        }
        Some(Command::Dump(path)) => {
            let doc = Document::read_file(&path)?;
            print!("{doc}");
            Ok(())
        }
        Some(Command::Check(path)) => {
            let doc = Document::read_file(&path)?;
            println!("\x1b[32mOK\x1b[0m {}: {}", path.display(), doc.summary());
            Ok(())
        }
        Some(Command::ToMsgpack { input, output }) => {
            let doc = Document::read_file(&input)?;
            let bytes = doc.to_msgpack()?;
            std::fs::write(&output, &bytes).map_err(|e| {
                format!("failed to write to file '{}': {e}", output.display())
            })?;
            println!(
                "wrote {} ({} bytes) to {}",
                doc.summary(),
                bytes.len(),
                output.display()
            );
            Ok(())
        }
    }
}

fn print_help() {
    println!(
        "\x1b[1mvarstore\x1b[0m - Inspect varstore binary files

\x1b[1mUSAGE:\x1b[0m
    varstore [OPTIONS] <COMMAND> <FILES...>

\x1b[1mCOMMANDS:\x1b[0m
    dump <file>               Print the value, table, or registry in a file
    check <file>              Decode a file and report OK or the decode error
    to-msgpack <in> <out>     Convert a file to MessagePack

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -v, --verbose      Log debug output to stderr (RUST_LOG overrides)

\x1b[1mEXAMPLES:\x1b[0m
    varstore dump case.bin
    varstore check vars.db
    varstore -v to-msgpack case.bin case.msgpack"
    );
}
