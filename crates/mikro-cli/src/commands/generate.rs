//! Generate command - build the micro-account assigned to a taxpayer identifier.

use std::process::ExitCode;

use clap::{ArgGroup, Args};
use tracing::info;

use mikro_core::{Identifier, MicroAccount};

use super::load_config;

/// Arguments for the generate command.
#[derive(Args)]
#[command(group(ArgGroup::new("identifier").required(true).args(["pesel", "nip"])))]
pub struct GenerateArgs {
    /// PESEL of an individual taxpayer
    #[arg(long)]
    pesel: Option<String>,

    /// NIP of a business taxpayer
    #[arg(long)]
    nip: Option<String>,

    /// Print the account number without spaces
    #[arg(long)]
    compact: bool,

    /// Print the full IBAN with the PL prefix
    #[arg(long, conflicts_with = "compact")]
    iban: bool,
}

pub fn run(args: GenerateArgs, config_path: Option<&str>) -> anyhow::Result<ExitCode> {
    let config = load_config(config_path)?;

    let identifier = match (args.pesel, args.nip) {
        (Some(pesel), _) => Identifier::pesel(pesel.trim())?,
        (None, Some(nip)) => Identifier::nip(nip.trim())?,
        (None, None) => anyhow::bail!("Either --pesel or --nip is required"),
    };

    let account = MicroAccount::generate(&identifier)?;
    info!("Generated micro-account for {}", identifier);

    let output = if args.iban {
        account.iban()
    } else if args.compact || !config.output.group_digits {
        account.number().to_string()
    } else {
        account.formatted()
    };

    println!("{}", output);

    Ok(ExitCode::SUCCESS)
}
