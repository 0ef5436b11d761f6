//! Wallet session orchestration
//!
//! A `WalletSession` is an immutable snapshot of every artifact produced so
//! far. Each step returns a new session; earlier snapshots stay valid for
//! whoever still holds them.

use crate::core::address::{Address, AddressEncoder};
use crate::core::crypto::keys::{DerivationPath, ExtendedKey, KeyTree};
use crate::core::crypto::mnemonic::{Entropy, EntropySource, MnemonicCodec, MnemonicPhrase, Seed};
use crate::domain::{DerivedKeys, WalletExport};
use crate::shared::config::CoreConfig;
use crate::shared::error::WalletError;
use crate::shared::types::{Strength, WalletResult};

/// State record for one derivation session
#[derive(Clone, Debug, Default)]
pub struct WalletSession {
    config: CoreConfig,
    key_tree: KeyTree,
    entropy: Option<Entropy>,
    phrase: Option<MnemonicPhrase>,
    seed: Option<Seed>,
    master: Option<ExtendedKey>,
    path: Option<DerivationPath>,
    child: Option<ExtendedKey>,
    bitcoin_address: Option<Address>,
    ethereum_address: Option<Address>,
}

impl WalletSession {
    pub fn new(config: CoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Fresh entropy and phrase; all downstream artifacts are cleared
    pub fn generate(&self, strength: Strength) -> Self {
        let entropy = EntropySource::generate_with_strength(strength);
        let phrase = MnemonicCodec::entropy_to_phrase(&entropy);
        log::info!("Generated new {}-word mnemonic", phrase.word_count());
        self.restart(entropy, phrase)
    }

    /// `generate` with the configured default strength
    pub fn generate_default(&self) -> Self {
        self.generate(self.config.default_strength)
    }

    /// Start from a user-supplied phrase, validating its checksum
    pub fn with_phrase(&self, text: &str) -> WalletResult<Self> {
        let entropy = MnemonicCodec::phrase_to_entropy(text)?;
        let phrase = MnemonicCodec::entropy_to_phrase(&entropy);
        log::info!("Imported {}-word mnemonic", phrase.word_count());
        Ok(self.restart(entropy, phrase))
    }

    fn restart(&self, entropy: Entropy, phrase: MnemonicPhrase) -> Self {
        Self {
            config: self.config.clone(),
            key_tree: self.key_tree.clone(),
            entropy: Some(entropy),
            phrase: Some(phrase),
            ..Self::default()
        }
    }

    /// Seed, master key, child key at `path` and both addresses
    ///
    /// Replaces every derived artifact at once; nothing from a previous
    /// derivation survives into the returned session.
    pub fn derive(&self, passphrase: &str, path: &DerivationPath) -> WalletResult<Self> {
        let phrase = self.phrase()?;
        let seed = MnemonicCodec::phrase_to_seed(phrase, passphrase);
        let master = self.key_tree.master_from_seed(&seed)?;
        let child = self.key_tree.derive_path(&master, path)?;

        let bitcoin_address =
            AddressEncoder::to_bitcoin_address_for(child.public_key(), self.config.bitcoin_network);
        let ethereum_address = AddressEncoder::to_ethereum_checksum_address(child.public_key());
        log::info!("Derived {} at {}", bitcoin_address, path);

        Ok(Self {
            seed: Some(seed),
            master: Some(master),
            path: Some(path.clone()),
            child: Some(child),
            bitcoin_address: Some(bitcoin_address),
            ethereum_address: Some(ethereum_address),
            ..self.clone()
        })
    }

    /// `derive` along the configured default path
    pub fn derive_default(&self, passphrase: &str) -> WalletResult<Self> {
        let path = self.config.default_path.clone();
        self.derive(passphrase, &path)
    }

    pub fn entropy(&self) -> WalletResult<&Entropy> {
        self.entropy.as_ref().ok_or_else(|| WalletError::not_ready("entropy"))
    }

    pub fn phrase(&self) -> WalletResult<&MnemonicPhrase> {
        self.phrase.as_ref().ok_or_else(|| WalletError::not_ready("mnemonic phrase"))
    }

    pub fn seed(&self) -> WalletResult<&Seed> {
        self.seed.as_ref().ok_or_else(|| WalletError::not_ready("seed"))
    }

    pub fn master(&self) -> WalletResult<&ExtendedKey> {
        self.master.as_ref().ok_or_else(|| WalletError::not_ready("master key"))
    }

    pub fn path(&self) -> WalletResult<&DerivationPath> {
        self.path.as_ref().ok_or_else(|| WalletError::not_ready("derivation path"))
    }

    pub fn child(&self) -> WalletResult<&ExtendedKey> {
        self.child.as_ref().ok_or_else(|| WalletError::not_ready("child key"))
    }

    pub fn bitcoin_address(&self) -> WalletResult<&Address> {
        self.bitcoin_address
            .as_ref()
            .ok_or_else(|| WalletError::not_ready("bitcoin address"))
    }

    pub fn ethereum_address(&self) -> WalletResult<&Address> {
        self.ethereum_address
            .as_ref()
            .ok_or_else(|| WalletError::not_ready("ethereum address"))
    }

    /// Hex keypairs for the master and child keys
    pub fn derived_keys(&self) -> WalletResult<DerivedKeys> {
        let master = self.master()?;
        let child = self.child()?;
        Ok(DerivedKeys {
            master_private_key: private_hex(master)?,
            master_public_key: master.public_key_hex(),
            child_private_key: private_hex(child)?,
            child_public_key: child.public_key_hex(),
        })
    }

    /// The seven-field export mapping
    pub fn export(&self) -> WalletResult<WalletExport> {
        let keys = self.derived_keys()?;
        Ok(WalletExport {
            seed_phrase: self.phrase()?.as_str().to_string(),
            master_private_key: keys.master_private_key.clone(),
            master_public_key: keys.master_public_key.clone(),
            child_private_key: keys.child_private_key.clone(),
            child_public_key: keys.child_public_key.clone(),
            bitcoin_address: self.bitcoin_address()?.to_string(),
            ethereum_address: self.ethereum_address()?.to_string(),
        })
    }
}

fn private_hex(key: &ExtendedKey) -> WalletResult<String> {
    key.private_key_hex()
        .map(|hex| hex.to_string())
        .ok_or_else(|| WalletError::not_ready("private key"))
}
