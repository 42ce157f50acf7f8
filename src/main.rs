use calver::{Collection, CompareMode, FormatError, FormatSet, Level, Version, VersionError};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::cmp::Ordering;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `CALVER_LOG=debug`.
const LOG_ENV: &str = "CALVER_LOG";

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Format(#[from] FormatError),

    #[error("{0}")]
    Version(#[from] VersionError),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum LevelArg {
    Major,
    Minor,
    Micro,
    Modifier,
}

impl LevelArg {
    fn to_level(self) -> Level {
        match self {
            LevelArg::Major => Level::Major,
            LevelArg::Minor => Level::Minor,
            LevelArg::Micro => Level::Micro,
            LevelArg::Modifier => Level::Modifier,
        }
    }
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// A format string to parse versions with, e.g. `<YYYY>.<0M>.<MICRO>`. Repeat to try several;
    /// the one that matches the most levels wins, and earlier ones win ties.
    #[arg(short, long = "format", value_name = "FORMAT", required = true)]
    formats: Vec<String>,
}

impl FormatArgs {
    fn to_format_set(&self) -> Result<FormatSet, CliError> {
        Ok(FormatSet::new(&self.formats)?)
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
#[command(arg_required_else_help(true))]
enum Commands {
    /// Validates that a version matches a format. Prints `true` and exits 0, or prints `false`
    /// and exits 1.
    Valid {
        /// The version string to validate
        version: String,

        #[command(flatten)]
        formats: FormatArgs,
    },

    /// Prints the format a version matched and each of its values
    Parse {
        /// The version string to parse
        version: String,

        #[command(flatten)]
        formats: FormatArgs,
    },

    /// Prints a version cut off after the value for a level
    Series {
        /// The version string
        version: String,

        #[command(flatten)]
        formats: FormatArgs,

        /// The last level to keep. Omit to print the whole version.
        #[arg(short, long, value_enum)]
        level: Option<LevelArg>,
    },

    /// Compares two versions. Prints `-1`, `0` or `1` if the first is less than, equal to, or
    /// greater than the second.
    Compare {
        /// The first version string
        first: String,

        /// The second version string
        second: String,

        #[command(flatten)]
        formats: FormatArgs,

        /// Fail if the versions matched different formats
        #[arg(long)]
        strict: bool,
    },

    /// Sorts versions, printing one per line
    Sort {
        /// The version strings to sort
        #[arg(required = true)]
        versions: Vec<String>,

        #[command(flatten)]
        formats: FormatArgs,

        /// Sort in descending order
        #[arg(short, long)]
        reverse: bool,

        /// Fail if the versions matched different formats
        #[arg(long)]
        strict: bool,
    },

    /// Increments the value for a level, keeping its zero-padding
    Bump {
        /// The version string to increment
        version: String,

        #[command(flatten)]
        formats: FormatArgs,

        /// The level to increment
        #[arg(short, long, value_enum)]
        level: LevelArg,
    },
}

type Output = (String, i32);

fn compare_mode(strict: bool) -> CompareMode {
    if strict {
        CompareMode::Strict
    } else {
        CompareMode::Lenient
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn describe(version: &Version) -> String {
    let mut lines = vec![format!("format: {}", version.format_string())];
    for level in version.levels() {
        lines.push(format!("{}: {}", level, version.value(level).unwrap_or_default()));
    }
    lines.join("\n")
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    match cli.command {
        Some(Commands::Valid { version, formats }) => {
            Ok(if formats.to_format_set()?.is_match(&version) {
                ("true".to_string(), 0)
            } else {
                ("false".to_string(), 1)
            })
        }
        Some(Commands::Parse { version, formats }) => {
            let version = formats.to_format_set()?.new_version(&version)?;
            Ok((describe(&version), 0))
        }
        Some(Commands::Series {
            version,
            formats,
            level,
        }) => {
            let version = formats.to_format_set()?.new_version(&version)?;
            Ok((version.series(level.map(LevelArg::to_level)), 0))
        }
        Some(Commands::Compare {
            first,
            second,
            formats,
            strict,
        }) => {
            let format_set = formats.to_format_set()?;
            let first = format_set.new_version(&first)?;
            let second = format_set.new_version(&second)?;
            let output = match first.compare(&second, compare_mode(strict))? {
                Ordering::Less => "-1",
                Ordering::Equal => "0",
                Ordering::Greater => "1",
            };
            Ok((output.to_string(), 0))
        }
        Some(Commands::Sort {
            versions,
            formats,
            reverse,
            strict,
        }) => {
            let mut collection = Collection::new(&versions, &formats.to_format_set()?)?;
            collection.sort_by_mode(compare_mode(strict))?;
            let mut sorted: Vec<String> = collection.iter().map(Version::to_string).collect();
            if reverse {
                sorted.reverse();
            }
            Ok((sorted.join("\n"), 0))
        }
        Some(Commands::Bump {
            version,
            formats,
            level,
        }) => {
            let version = formats.to_format_set()?.new_version(&version)?;
            Ok((version.increment(level.to_level())?.to_string(), 0))
        }
        None => unreachable!("clap should catch this no-subcommand case"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run(args: &[&str]) -> Result<Output, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("calver").chain(args.iter().copied()))
            .unwrap();
        do_work(cli)
    }

    #[rstest]
    #[case(&["valid", "2024.12", "--format", "<YYYY>.<MINOR>"], ("true", 0))]
    #[case(&["valid", "2024.12f", "--format", "<YYYY>.<MINOR>"], ("false", 1))]
    #[case(
        &["valid", "2024.12f", "-f", "<YYYY>.<MINOR>", "-f", "<YYYY>.<MINOR>f"],
        ("true", 0)
    )]
    #[case(
        &["parse", "v25.07-rc1", "-f", "v<0Y>.<0M>-<MODIFIER>"],
        ("format: v<0Y>.<0M>-<MODIFIER>\nmajor: 25\nminor: 07\nmodifier: rc1", 0)
    )]
    #[case(&["series", "2025-07-14", "-f", "<YYYY>-<MM>-<DD>", "-l", "minor"], ("2025-07", 0))]
    #[case(&["series", "2025-07-14", "-f", "<YYYY>-<MM>-<DD>"], ("2025-07-14", 0))]
    #[case(&["compare", "2025.1", "2025.2", "-f", "<YYYY>.<MM>"], ("-1", 0))]
    #[case(&["compare", "2025.01", "2025.1", "-f", "<YYYY>.<0M>", "-f", "<YYYY>.<MM>"], ("0", 0))]
    #[case(&["compare", "2025.3", "2025.2", "-f", "<YYYY>.<MM>", "--strict"], ("1", 0))]
    #[case(
        &["sort", "2025.10", "2025.9", "2024.12", "-f", "<YYYY>.<MM>"],
        ("2024.12\n2025.9\n2025.10", 0)
    )]
    #[case(
        &["sort", "-r", "2025.10", "2025.9", "2024.12", "-f", "<YYYY>.<MM>"],
        ("2025.10\n2025.9\n2024.12", 0)
    )]
    #[case(
        &["sort", "2025-1a", "2025-10", "2025-2", "-f", "<YYYY>-<MODIFIER>"],
        ("2025-10\n2025-1a\n2025-2", 0)
    )]
    #[case(&["bump", "2025.099", "-f", "<YYYY>.<MICRO>", "-l", "micro"], ("2025.100", 0))]
    fn test_commands(#[case] args: &[&str], #[case] expected: (&str, i32)) {
        let (output, exit_code) = run(args).unwrap();
        assert_eq!(expected, (output.as_str(), exit_code));
    }

    #[rstest]
    #[case(&["parse", "2025", "-f", "<YYYY><YY>"])]
    #[case(&["parse", "2025-07", "-f", "<YYYY>.<MM>"])]
    #[case(&["compare", "2025.01", "2025.1", "-f", "<YYYY>.<0M>", "-f", "<YYYY>.<MM>", "--strict"])]
    #[case(&["bump", "2025-rc", "-f", "<YYYY>-<MODIFIER>", "-l", "modifier"])]
    fn test_command_errors(#[case] args: &[&str]) {
        assert!(run(args).is_err());
    }

    #[test]
    fn test_format_required() {
        assert!(Cli::try_parse_from(["calver", "valid", "2025"]).is_err());
    }
}
