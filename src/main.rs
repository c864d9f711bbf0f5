// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{Parser, Subcommand};
use semv::commands::check::CheckCommand;
use semv::commands::format::FormatCommand;
use semv::commands::parse::ParseCommand;
use semv::config::new_semv_config;
use semv::error::{Result, format_error_with_color, get_exit_code};
use semv::logging;
use std::io::IsTerminal;

#[derive(Parser)]
#[command(name = "semv")]
#[command(author, version, about = "Semantic version parsing and formatting", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a version and print its fields
    #[command(visible_alias = "p")]
    Parse {
        /// Version to parse (e.g., "1.2.3", "1.2.3-beta.1")
        version: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Build a version string from its fields
    #[command(visible_alias = "f")]
    Format {
        major: u64,
        minor: u64,
        patch: u64,

        /// Prerelease suffix appended after '-'
        #[arg(long, value_name = "PRE")]
        pre: Option<String>,
    },

    /// Check that a version is well formed and print its normalized form
    #[command(visible_alias = "c")]
    Check {
        version: String,

        /// Print nothing; report only through the exit code
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    let quiet = matches!(cli.command, Commands::Check { quiet: true, .. });

    let result: Result<()> = (|| match cli.command {
        Commands::Parse { version, json } => {
            let config = new_semv_config()?;
            let command = ParseCommand::new(&config)?;
            command.execute(&version, json)
        }
        Commands::Format {
            major,
            minor,
            patch,
            pre,
        } => {
            let command = FormatCommand::new()?;
            command.execute(major, minor, patch, pre.as_deref())
        }
        Commands::Check { version, quiet } => {
            let command = CheckCommand::new()?;
            command.execute(&version, quiet)
        }
    })();

    if let Err(e) = result {
        if !quiet {
            eprint!("{}", format_error_with_color(&e, std::io::stderr().is_terminal()));
        }
        std::process::exit(get_exit_code(&e));
    }
}
