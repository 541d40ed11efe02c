use {
    anyhow::Result,
    clap::{
        crate_authors,
        crate_description,
        crate_name,
        crate_version,
        Args,
        Parser,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    std::{
        fs,
        time::Duration,
    },
};

pub mod server;

#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the auction server service.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    /// Server Options
    #[command(flatten)]
    pub server: server::Options,

    #[command(flatten)]
    pub config: ConfigOptions,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Config Options")]
#[group(id = "Config")]
pub struct ConfigOptions {
    /// Path to a configuration file containing the auction timing parameters
    #[arg(long = "config")]
    #[arg(env = "AUCTION_CONFIG")]
    #[arg(default_value = "config.yaml")]
    pub config: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// How long a newly created auction accepts bids before the sweep closes it.
    #[serde(with = "humantime_serde")]
    pub auction_duration: Duration,

    /// How often the background sweep scans for expired open auctions.
    #[serde(with = "humantime_serde")]
    pub sweep_interval: Duration,
}

impl Config {
    pub fn load(path: &str) -> Result<Config> {
        // Open and read the YAML file
        let yaml_content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&yaml_content)?;
        Ok(config)
    }
}
