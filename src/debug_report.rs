use showparse::{Command, Error, Node, ParseResult, SchemaError, Value};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(res: &ParseResult, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{}\"", res.command.cli()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Results ━━━", ansi::GRAY));
    if res.tree.is_empty() {
        println!("{}", palette.dim("  No data extracted"));
    } else {
        print_node(&res.tree, 1, &palette);
    }

    println!("\n{}", palette.paint("━━━ Rule hits ━━━", ansi::GRAY));
    print_rule_hits(res, &palette);

    if !res.trace.is_empty() {
        println!("\n{}", palette.paint("━━━ Trace ━━━", ansi::GRAY));
        print_trace(res, &palette);
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Lines: {}  │  Ignored: {}",
        palette.paint(format!("{:?}", res.elapsed), ansi::GREEN),
        palette.paint(res.metrics.lines.to_string(), ansi::CYAN),
        palette.dim(res.metrics.unmatched_lines().to_string()),
    );
    println!();
}

pub fn print_failure(command: Command, err: &Error, color: bool) {
    let palette = ansi::Palette::new(color);
    eprintln!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{}\"", command.cli()), ansi::CYAN)));
    eprintln!("\n{}", palette.paint("━━━ Failure ━━━", ansi::GRAY));

    match err {
        Error::Schema(SchemaError::Empty) => {
            eprintln!("  {}", palette.paint("No data extracted", ansi::YELLOW));
            eprintln!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
            eprintln!("  • The output belongs to a different command");
            eprintln!("  • The device returned an error or an empty table");
            eprintln!("\n{}", palette.dim("  Tip: run with --trace --no-validate to see which lines were recognized"));
        }
        Error::Schema(SchemaError::Mismatch(violations)) => {
            eprintln!(
                "  {}",
                palette.paint(format!("{} schema violation(s)", violations.len()), ansi::RED)
            );
            for violation in violations.iter().take(20) {
                eprintln!("    {}", violation);
            }
            if violations.len() > 20 {
                eprintln!("    {}", palette.dim(format!("... +{} more", violations.len() - 20)));
            }
        }
        other => eprintln!("  {}", palette.paint(other.to_string(), ansi::RED)),
    }
    eprintln!();
}

fn print_node(node: &Node, depth: usize, palette: &ansi::Palette) {
    let indent = "  ".repeat(depth);
    for (key, value) in node.iter() {
        match value {
            Value::Map(child) if child.is_empty() => {
                println!("{indent}{} {}", palette.paint(key, ansi::BLUE), palette.dim("{}"));
            }
            Value::Map(child) => {
                println!("{indent}{}", palette.paint(key, ansi::BLUE));
                print_node(child, depth + 1, palette);
            }
            Value::Text(text) => {
                println!("{indent}{} {}", palette.dim(format!("{key}:")), palette.paint(text, ansi::GREEN));
            }
            Value::Int(n) => {
                println!("{indent}{} {}", palette.dim(format!("{key}:")), palette.paint(n.to_string(), ansi::YELLOW));
            }
            Value::Bool(b) => {
                println!("{indent}{} {}", palette.dim(format!("{key}:")), palette.paint(b.to_string(), ansi::CYAN));
            }
        }
    }
}

fn print_rule_hits(res: &ParseResult, palette: &ansi::Palette) {
    let fired: Vec<_> = res.metrics.rule_hits.iter().filter(|hit| hit.count > 0).collect();
    if fired.is_empty() {
        println!("  {}", palette.dim("No rule fired"));
        return;
    }
    for hit in fired {
        println!("  {} {}", palette.paint(format!("{:>4}×", hit.count), ansi::YELLOW), palette.paint(hit.rule, ansi::CYAN));
    }
    let idle = res.metrics.rule_hits.len() - res.metrics.rule_hits.iter().filter(|hit| hit.count > 0).count();
    if idle > 0 {
        println!("  {}", palette.dim(format!("{idle} rule(s) never fired")));
    }
}

fn print_trace(res: &ParseResult, palette: &ansi::Palette) {
    for line in &res.trace {
        let rules = if line.rules.is_empty() {
            palette.dim("-")
        } else {
            palette.paint(line.rules.join(", "), ansi::CYAN)
        };
        println!(
            "  {} {} {} {}",
            palette.paint(format!("{:>4}", line.number), ansi::GRAY),
            palette.dim(&line.text),
            palette.dim("│"),
            rules
        );
    }
}
