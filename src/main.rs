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
use javaprobe::commands::list::ListCommand;
use javaprobe::commands::which::WhichCommand;
use javaprobe::config::{ProbeConfig, probe_home};
use javaprobe::error::{ProbeError, Result, format_error_chain, format_error_with_color, get_exit_code};
use javaprobe::logging;
use std::io::IsTerminal;

#[derive(Parser)]
#[command(name = "javaprobe")]
#[command(author, version, about = "Discover installed Java runtimes", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List discovered Java installations
    #[command(visible_alias = "ls")]
    List {
        /// Output in JSON format
        #[arg(long)]
        json: bool,

        /// Check that each executable exists
        #[arg(long)]
        check: bool,
    },

    /// Show the Java executable chosen as the default
    #[command(visible_alias = "w")]
    Which {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn report(error: &ProbeError) -> ! {
    let message = if std::io::stderr().is_terminal() {
        format_error_with_color(error, true)
    } else {
        format_error_chain(error)
    };
    eprintln!("{message}");
    std::process::exit(get_exit_code(error));
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    let config = match probe_home().and_then(|home| ProbeConfig::load(&home)) {
        Ok(config) => config,
        Err(e) => report(&e),
    };

    let result: Result<()> = (|| match cli.command {
        Commands::List { json, check } => {
            let command = ListCommand::new(&config)?;
            command.execute(json, check)
        }
        Commands::Which { json } => {
            let command = WhichCommand::new(&config)?;
            command.execute(json)
        }
    })();

    if let Err(e) = result {
        report(&e);
    }
}
