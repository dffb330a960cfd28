//! `jrpc config` command
//!
//! Shows the configuration jrpc would use, after command line overrides.
//!
//! # Usage
//! ```bash
//! jrpc config           # Show effective config
//! jrpc config --path    # Show config file locations
//! ```

use anyhow::Result;
use clap::Args;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Show config file locations
    #[arg(long)]
    pub path: bool,
}

pub fn run(args: ConfigArgs, config: &Config) -> Result<()> {
    if args.path {
        let global = Config::global_config_path();
        let local = Config::find_local_config();

        match global {
            Some(ref path) => println!("Global: {}", path.display()),
            None => println!("Global: (no home directory)"),
        }
        match local {
            Some(ref path) => println!("Local:  {}", path.display()),
            None => println!("Local:  (none found)"),
        }
        return Ok(());
    }

    let mut shown = config.clone();
    if shown.server.token.is_some() {
        shown.server.token = Some("********".to_string());
    }

    print!("{}", toml::to_string_pretty(&shown)?);
    Ok(())
}
