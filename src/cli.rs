const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
pub(crate) struct CliArgs {
    pub(crate) command: Option<String>,
    pub(crate) script: Option<String>,
    pub(crate) verbose: bool,
    pub(crate) help: bool,
    pub(crate) version: bool,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs {
        command: None,
        script: None,
        verbose: false,
        help: false,
        version: false,
    };

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "-v" | "--verbose" => {
                cli.verbose = true;
            }
            "-c" => {
                // Everything after -c is the expression
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                }
                break;
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            path => {
                // Assume it's a script file if not a flag
                if !path.starts_with('-') {
                    cli.script = Some(path.to_string());
                }
            }
        }
        i += 1;
    }

    cli
}

pub(crate) fn print_help() {
    println!(
        r#"pcalc-{} A precedence-climbing integer expression calculator

USAGE:
    pcalc                   Start interactive REPL
    pcalc -c <expression>   Evaluate a single expression
    pcalc <script.calc>     Evaluate a script file, one expression per line
    pcalc -v, --verbose     Echo each expression before its result
    pcalc --help            Show this help message
    pcalc --version         Show version

SYNTAX:
    Tokens are separated by whitespace; parentheses are tokens too.

    integer                 Base-10 integer literal
    + - * /                 Add, subtract, multiply, divide (left-associative)
    ^                       Power (right-associative, binds tightest)
    ( expression )          Grouping, overrides precedence
    - term                  Unary negation, freely nestable

SCRIPTS:
    Blank lines are skipped; lines starting with # are comments.

EXAMPLES:
    pcalc -c "( 9 - 8 ) - 7"          # -6
    pcalc -c "11 * 2 - 8 / 2"         # 18
    pcalc -c "2 ^ 3 ^ 2"              # 512
    pcalc -c "2 * - ( 2 + 4 )"        # -12
"#,
        VERSION
    );
}

pub(crate) fn print_version() {
    println!("pcalc {}", VERSION);
}
