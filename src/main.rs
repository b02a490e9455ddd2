//! CLI entry point for canopy

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, ValueEnum};

use canopy::{OutputConfig, Theme, TreeFormatter, TreeWalker, WalkerConfig};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

/// Glyph theme as named on the command line.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ThemeArg {
    /// Square corners
    #[default]
    Classic,
    /// Rounded corner on the last branch
    Round,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Classic => Theme::Classic,
            ThemeArg::Round => Theme::Round,
        }
    }
}

const EXAMPLES: &str = "Examples:
  canopy                      Tree of the current directory
  canopy /path/to/dir         Tree of the given directory
  canopy -e node_modules      Exclude every node_modules directory
  canopy -e src/main.rs       Exclude only that path and its subtree
  canopy -e .                 Skip hidden files and directories
  canopy -o src               Show only the src subtree
  canopy -o src/util/log.rs   Show only that file and its parents
  canopy -d 2 -s              Two levels deep, with sizes
  canopy -t round             Rounded corner on the last branch

Excludes take precedence over includes.
";

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Display a directory tree with filters, sizes, and themes")]
#[command(version)]
#[command(after_help = EXAMPLES)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Exclude entries: a bare name matches that basename anywhere, a
    /// pattern with '/' matches one relative path and its subtree, and
    /// '.' hides dot-entries
    #[arg(short = 'e', value_name = "PATTERN", num_args = 1..)]
    exclude: Vec<String>,

    /// Show only matching paths, their subtrees, and the parent
    /// directories leading to them
    #[arg(short = 'o', value_name = "PATTERN", num_args = 1..)]
    include: Vec<String>,

    /// Descend only N levels deep (0 shows just the root)
    #[arg(short = 'd', value_name = "N")]
    depth: Option<usize>,

    /// Show file and recursive directory sizes
    #[arg(short = 's')]
    sizes: bool,

    /// Branch glyph theme
    #[arg(short = 't', value_name = "THEME", default_value = "classic")]
    theme: ThemeArg,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    // A bare `canopy help` behaves like --help
    if std::env::args().nth(1).as_deref() == Some("help") {
        let _ = Args::command().print_long_help();
        return;
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    if !root.exists() {
        eprintln!(
            "canopy: cannot access '{}': No such file or directory",
            args.path.display()
        );
        process::exit(1);
    }

    let walker_config = WalkerConfig {
        exclude_patterns: args.exclude,
        include_patterns: args.include,
        max_depth: args.depth,
        show_sizes: args.sizes,
    };

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        theme: args.theme.into(),
    };

    let walker = TreeWalker::new(walker_config);
    let mut formatter = TreeFormatter::new(output_config);

    if let Err(e) = walker.walk_streaming(&root, &mut formatter) {
        eprintln!("canopy: error writing output: {}", e);
        process::exit(1);
    }
}
