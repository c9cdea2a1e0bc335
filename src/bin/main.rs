/*
 * Copyright 2019-2020 Wren Powell
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Command-line front end for a donor collection.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use mailroom::{format_report, DonorCollection, Settings};

#[derive(Parser)]
#[command(name = "mailroom")]
#[command(about = "Track donors and their donations")]
struct Cli {
    /// The directory which contains named stores.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// The name of the store to open.
    #[arg(long, global = true, default_value = "mailroom")]
    store: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a donor with no donations.
    Add { name: String },
    /// Record a donation, adding the donor if needed.
    Donate { name: String, amount: f64 },
    /// Remove a donor.
    Delete { name: String },
    /// Show a donor's donations.
    Show { name: String },
    /// List all donors.
    List,
    /// Print a summary of every donor's giving.
    Report,
    /// Write a thank-you letter for every donor.
    Letters { directory: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::from_env();
    if let Some(data_dir) = cli.data_dir {
        settings.data_dir = data_dir;
    }

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut collection = DonorCollection::open_in(&settings, &cli.store).with_context(|| {
        format!(
            "Failed to open store '{}'",
            settings.store_path(&cli.store).display()
        )
    })?;

    match cli.command {
        Command::Add { name } => {
            if collection.add_donor(&name)? {
                println!("Added {}.", name);
            } else {
                println!("{} is already a donor.", name);
            }
        }
        Command::Donate { name, amount } => {
            collection.process_donation(&name, amount)?;
            let donor = collection.donor(&name)?;
            print!("{}", donor.thank_you_letter());
        }
        Command::Delete { name } => {
            collection
                .del_donor(&name)
                .with_context(|| format!("Failed to remove donor '{}'", name))?;
            println!("Removed {}.", name);
        }
        Command::Show { name } => {
            let donor = collection
                .donor(&name)
                .with_context(|| format!("Failed to find donor '{}'", name))?;
            println!(
                "{}: {} donation(s) totaling ${:.2}",
                donor.name(),
                donor.count(),
                donor.donations()
            );
            for amount in donor.history() {
                println!("  ${:.2}", amount);
            }
        }
        Command::List => {
            for name in collection.names()? {
                println!("{}", name);
            }
        }
        Command::Report => {
            print!("{}", format_report(&collection.report()?));
        }
        Command::Letters { directory } => {
            for path in collection.send_letters(&directory)? {
                println!("{}", path.display());
            }
        }
    }

    collection.db_close()?;

    Ok(())
}
