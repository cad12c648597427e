mod debug_report;

use showparse::{CannedOutput, Command, Options, parse_command, parse_with};
use std::io::{self, IsTerminal, Read};

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let opts = Options { validate: config.validate, trace: config.trace };
    let outcome = match &config.input {
        Input::File(path) => {
            let mut adapter = CannedOutput::new();
            adapter
                .insert_file(config.command.cli(), path)
                .map_err(showparse::Error::from)
                .and_then(|()| parse_command(&adapter, config.command.cli(), &opts))
        }
        Input::Text(text) => parse_with(config.command.cli(), text, &opts),
    };

    let res = match outcome {
        Ok(res) => res,
        Err(err) => {
            debug_report::print_failure(config.command, &err, config.color);
            std::process::exit(1);
        }
    };

    if config.json {
        match serde_json::to_string_pretty(&res.tree) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to serialize output: {err}");
                std::process::exit(1);
            }
        }
    } else {
        debug_report::print_run(&res, config.color);
    }
}

enum Input {
    File(String),
    Text(String),
}

struct CliConfig {
    command: Command,
    input: Input,
    json: bool,
    validate: bool,
    trace: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut command: Option<Command> = None;
    let mut input: Option<String> = None;
    let mut json = false;
    let mut validate = true;
    let mut trace = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("showparse {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-l" | "--list" => {
                print_commands();
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "--report" => json = false,
            "--no-validate" => validate = false,
            "--trace" => trace = true,
            "--command" | "-c" => {
                let value = args.next().ok_or_else(|| "error: --command expects a value".to_string())?;
                command = Some(parse_command_name(&value)?);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            _ if arg.starts_with("--command=") => {
                command = Some(parse_command_name(arg.trim_start_matches("--command="))?);
            }
            _ if arg.starts_with("--input=") => {
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(arg.trim_start_matches("--input=").to_string());
            }
            _ => {
                return Err(format!("error: unknown option '{arg}'\n\n{}", help_text()));
            }
        }
    }

    let command = command.ok_or_else(|| format!("error: --command is required\n\n{}", help_text()))?;
    let input = match input {
        Some(path) if path != "-" => Input::File(path),
        _ => {
            let text = read_stdin_input()?;
            if text.trim().is_empty() {
                return Err(format!("error: no input provided\n\n{}", help_text()));
            }
            Input::Text(text)
        }
    };

    Ok(CliConfig { command, input, json, validate, trace, color })
}

fn parse_command_name(value: &str) -> Result<Command, String> {
    Command::from_name(value)
        .ok_or_else(|| format!("error: unknown command '{value}' (use --list to see supported commands)"))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_commands() {
    for command in Command::ALL {
        println!("{:<22} {}", command.name(), command.cli());
    }
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "showparse {version}

Turn IOS-XR OSPF show-command output into a validated tree.

Usage:
  showparse --command <name> [OPTIONS] < output.txt
  showparse --command <name> --input <file> [OPTIONS]

Options:
  -c, --command <name>       Command whose output is parsed: a short name
                             (see --list) or the full command line.
  -i, --input <file>         Read command output from <file>. Use '-' or omit
                             to read stdin.
  --json                     Print the output tree as JSON.
  --report                   Print a human-readable report (default).
  --no-validate              Skip schema validation.
  --trace                    Show which rules fired on each line.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -l, --list                 List supported commands.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG=showparse=debug   Log every rule that fires.

Exit codes:
  0  Success.
  1  Output could not be parsed or failed validation.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
