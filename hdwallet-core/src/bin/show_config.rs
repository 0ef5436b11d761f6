use hdwallet_core::shared::constants::{
    ENV_BITCOIN_NETWORK, ENV_DEFAULT_PATH, ENV_DEFAULT_STRENGTH, ENV_LOG_LEVEL,
};
use hdwallet_core::CoreConfig;

fn main() {
    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    println!("HD Wallet Core Configuration:\n");
    println!("  Default Strength ({}): {}", ENV_DEFAULT_STRENGTH, config.default_strength);
    println!("  Default Path ({}): {}", ENV_DEFAULT_PATH, config.default_path);
    println!("  Bitcoin Network ({}): {}", ENV_BITCOIN_NETWORK, config.bitcoin_network.name());
    println!("  Log Level ({}): {}", ENV_LOG_LEVEL, config.log_level);
}
