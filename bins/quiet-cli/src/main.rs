//! quiet-cli: Command-line front end for the silent payments key core.
//!
//! Derives keys and addresses from a mnemonic read at a hidden prompt,
//! recovers per-output spending keys, and reports balances from a wallet
//! state file.

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use quiet_core::network::Network;
use quiet_core::types::Utxo;
use quiet_wallet::{KeyDeriver, Wallet, generate_mnemonic};
use zeroize::Zeroizing;

use crate::config::CliConfig;

/// Silent payments key tool.
#[derive(Parser)]
#[command(name = "quiet-cli")]
#[command(version, about = "BIP-352 silent payment keys from a mnemonic.")]
struct Cli {
    /// Network (mainnet, testnet, regtest, signet). Overrides QUIET_NETWORK.
    #[arg(short, long, global = true)]
    network: Option<Network>,

    /// BIP-352 account index. Overrides QUIET_ACCOUNT.
    #[arg(short, long, global = true)]
    account: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new mnemonic.
    Generate(GenerateArgs),
    /// Print public keys for every network as JSON.
    Keys,
    /// Print the silent payment address.
    Address(AddressArgs),
    /// Print watch-only scan keys as JSON.
    ScanKeys,
    /// Show the balance recorded in a wallet state file.
    Balance(BalanceArgs),
    /// Recover the private key that spends one output.
    SpendKey(SpendKeyArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Number of words (12 or 24).
    #[arg(short, long, default_value_t = 24)]
    words: usize,
}

#[derive(Args)]
struct AddressArgs {
    /// Label index; 0 is the change address.
    #[arg(short, long)]
    label: Option<u32>,
}

#[derive(Args)]
struct BalanceArgs {
    /// Path to wallet state JSON. Overrides QUIET_WALLET.
    #[arg(short, long)]
    wallet: Option<PathBuf>,
}

#[derive(Args)]
struct SpendKeyArgs {
    /// Path to a JSON file holding one UTXO.
    #[arg(short, long)]
    utxo: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = CliConfig::from_env()?;
    if let Some(network) = cli.network {
        config.network = network;
    }
    if let Some(account) = cli.account {
        config.account = account;
    }
    tracing::debug!(network = %config.network, account = config.account, "loaded config");

    match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::Keys => keys(&config),
        Commands::Address(args) => address(&config, args),
        Commands::ScanKeys => scan_keys(&config),
        Commands::Balance(args) => balance(&config, args),
        Commands::SpendKey(args) => spend_key(&config, args),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let mnemonic = Zeroizing::new(generate_mnemonic(args.words)?);
    println!("\nMNEMONIC (BACKUP THIS, {} WORDS):", args.words);
    println!("  {}", mnemonic.as_str());
    println!("\nWARNING: This phrase will NOT be shown again.");
    println!("Anyone with this phrase can spend your funds.");
    Ok(())
}

fn keys(config: &CliConfig) -> Result<()> {
    let mnemonic = prompt_mnemonic()?;
    let keys = deriver(config).project_all_networks(&mnemonic)?;
    println!("{}", serde_json::to_string_pretty(&keys)?);
    Ok(())
}

fn address(config: &CliConfig, args: AddressArgs) -> Result<()> {
    let mnemonic = prompt_mnemonic()?;
    let deriver = deriver(config);
    let address = match args.label {
        Some(m) => deriver.labeled_address(&mnemonic, config.network, m)?,
        None => deriver.address(&mnemonic, config.network)?,
    };
    println!("{address}");
    Ok(())
}

fn scan_keys(config: &CliConfig) -> Result<()> {
    let mnemonic = prompt_mnemonic()?;
    let scan_only = deriver(config).project_scan_only(&mnemonic, config.network)?;
    println!("{}", serde_json::to_string_pretty(&scan_only)?);
    Ok(())
}

fn balance(config: &CliConfig, args: BalanceArgs) -> Result<()> {
    let path = args.wallet.unwrap_or_else(|| config.wallet_path.clone());
    let wallet = load_wallet(&path)?;

    println!("\n=== WALLET BALANCE ===");
    println!("Network: {}", wallet.network);
    println!("UTXOs:   {}", wallet.utxos_for(wallet.network).len());
    println!("Balance: {} sats", wallet.balance());
    if wallet.is_initialized() {
        println!("Address: {}", wallet.address()?);
    } else {
        println!("Address: (keys not initialized)");
    }
    Ok(())
}

fn spend_key(config: &CliConfig, args: SpendKeyArgs) -> Result<()> {
    let utxo = load_utxo(&args.utxo)?;
    let mnemonic = prompt_mnemonic()?;
    let key = deriver(config).recover_spend_private_key(&utxo, config.network, &mnemonic)?;
    let hex = Zeroizing::new(key.to_hex());
    println!("{}", hex.as_str());
    Ok(())
}

fn deriver(config: &CliConfig) -> KeyDeriver {
    KeyDeriver::for_account(config.account)
}

fn prompt_mnemonic() -> Result<Zeroizing<String>> {
    let phrase = rpassword::prompt_password("Mnemonic: ").context("Failed to read mnemonic")?;
    Ok(Zeroizing::new(phrase))
}

fn load_wallet(path: &Path) -> Result<Wallet> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read wallet file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid wallet file: {}", path.display()))
}

fn load_utxo(path: &Path) -> Result<Utxo> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read UTXO file: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid UTXO file: {}", path.display()))
}
