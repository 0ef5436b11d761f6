use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use zeroize::Zeroizing;

use hdwallet_core::{
    bitcoin_address, ethereum_address, DerivationPath, Strength, WalletSession,
};

#[derive(Parser)]
#[command(author, version, about = "BIP-39 / BIP-32 hierarchical deterministic wallet tool")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a fresh mnemonic phrase
    Generate {
        /// Entropy size in bits (128, 160, 192, 224 or 256)
        #[arg(long)]
        strength: Option<usize>,
    },
    /// Derive keys and addresses and print the export mapping as JSON
    Export {
        /// Existing phrase given on the command line, where it is visible in
        /// the process list and shell history; prefer --prompt-phrase
        #[arg(long)]
        phrase: Option<String>,
        /// Read an existing phrase from the terminal without echo; a new
        /// phrase is generated when neither this nor --phrase is given
        #[arg(long, conflicts_with = "phrase")]
        prompt_phrase: bool,
        /// Entropy size in bits when generating
        #[arg(long)]
        strength: Option<usize>,
        /// Derivation path such as 44'/0'/0'/0/0
        #[arg(long)]
        path: Option<String>,
        #[arg(long, conflicts_with = "prompt_passphrase")]
        passphrase: Option<String>,
        /// Read the passphrase from the terminal without echo
        #[arg(long)]
        prompt_passphrase: bool,
    },
    /// Encode a hex public key as an address
    Address {
        public_key: String,
        #[arg(long, value_enum, default_value_t = ChainArg::Bitcoin)]
        chain: ChainArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ChainArg {
    Bitcoin,
    Ethereum,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = hdwallet_core::init().context("failed to load configuration")?;
    let session = WalletSession::new(config);

    match cli.cmd {
        Command::Generate { strength } => {
            let generated = session.generate(resolve_strength(&session, strength)?);
            println!("{}", generated.phrase()?.as_str());
        }
        Command::Export {
            phrase,
            prompt_phrase,
            strength,
            path,
            passphrase,
            prompt_passphrase,
        } => {
            let phrase = read_phrase(phrase, prompt_phrase)?;
            let started = match phrase {
                Some(text) => session.with_phrase(&text).context("invalid mnemonic phrase")?,
                None => session.generate(resolve_strength(&session, strength)?),
            };

            let path = match path {
                Some(text) => text
                    .parse::<DerivationPath>()
                    .context("invalid derivation path")?,
                None => session.config().default_path.clone(),
            };

            let passphrase = if prompt_passphrase {
                Zeroizing::new(
                    rpassword::prompt_password("BIP-39 passphrase: ")
                        .context("failed to read passphrase")?,
                )
            } else {
                Zeroizing::new(passphrase.unwrap_or_default())
            };

            let derived = started.derive(&passphrase, &path)?;
            println!("{}", derived.export()?.to_json()?);
        }
        Command::Address { public_key, chain } => {
            let address = match chain {
                ChainArg::Bitcoin => bitcoin_address(&public_key)?,
                ChainArg::Ethereum => ethereum_address(&public_key)?,
            };
            println!("{}", address);
        }
    }
    Ok(())
}

fn read_phrase(phrase: Option<String>, prompt: bool) -> Result<Option<Zeroizing<String>>> {
    if prompt {
        let text = rpassword::prompt_password("Mnemonic phrase: ").context("failed to read mnemonic phrase")?;
        return Ok(Some(Zeroizing::new(text)));
    }
    Ok(phrase.map(Zeroizing::new))
}

fn resolve_strength(session: &WalletSession, bits: Option<usize>) -> Result<Strength> {
    match bits {
        Some(bits) => Ok(Strength::try_from(bits)?),
        None => Ok(session.config().default_strength),
    }
}
