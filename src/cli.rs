//! Command-line interface implementation for pyinit.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};

use crate::vcs::VcsMode;

/// Command-line arguments structure for pyinit.
#[derive(Parser, Debug)]
#[command(author, version, about = "pyinit: opinionated Python project scaffolding tool", long_about = None)]
pub struct Args {
    /// Name of the project to create; used for both the project directory
    /// and the Python package inside it
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Version-control behavior: detect and initialize only when needed
    /// (auto), always initialize (force), or leave git alone (skip)
    #[arg(long, value_enum, default_value = "auto")]
    pub vcs: VcsMode,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
