use anyhow::{bail, Result};
use clap::Subcommand;
use confedit::config::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file as TOML
    Show,
    /// Print the config file location
    Path,
    /// Create the config file with defaults (refuses to overwrite)
    Init,
    /// List every key with its current value
    Keys,
    /// Set a key, e.g. `site.conf_dir /var/www/app/sites/default`; an empty value unsets it
    Set { key: String, value: String },
    /// Print one key
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    let path = Config::path()?;
    match action {
        ConfigAction::Show => print!("{}", toml::to_string_pretty(&Config::load_from(&path)?)?),
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init => {
            if path.exists() {
                bail!("Config already exists at {}", path.display());
            }
            Config::default().save_to(&path)?;
            eprintln!("Created config at {}", path.display());
        }
        ConfigAction::Keys => {
            let config = Config::load_from(&path)?;
            for key in Config::KEYS {
                println!("{key} = {}", shown(config.get_value(key)?));
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_from(&path)?;
            config.set_value(&key, &value)?;
            config.save_to(&path)?;
            eprintln!("{key} = {} ({})", shown(config.get_value(&key)?), path.display());
        }
        ConfigAction::Get { key } => {
            println!("{}", shown(Config::load_from(&path)?.get_value(&key)?));
        }
    }
    Ok(())
}

fn shown(value: String) -> String {
    if value.is_empty() { "(unset)".to_string() } else { value }
}
