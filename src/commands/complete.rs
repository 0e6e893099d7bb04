use anyhow::Result;
use confedit::{config::Config, sources, SystemEnvironment};

pub fn cmd_complete() -> Result<()> {
    let env = SystemEnvironment::new(Config::load()?);
    for path in sources::completion_candidates(&env) {
        println!("{path}");
    }
    Ok(())
}
