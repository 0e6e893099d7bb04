use anyhow::{bail, Result};
use clap::Args;
use confedit::{config::Config, opener, select, sources, SystemEnvironment};

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Substring for narrowing the list of files
    #[arg(value_name = "FILTER")]
    pub filter: Option<String>,

    /// Open the Nth file of the list without prompting
    #[arg(long, value_name = "N")]
    pub choice: Option<usize>,

    /// Editor command template, e.g. "vim %s" (overrides config, $VISUAL and $EDITOR)
    #[arg(long, value_name = "CMD")]
    pub editor: Option<String>,

    /// Return as soon as the editor has started
    #[arg(long)]
    pub bg: bool,
}

pub fn cmd_edit(args: &EditArgs) -> Result<()> {
    let config = Config::load()?;
    let editor = opener::resolve_editor(args.editor.as_deref(), config.editor.command.as_deref())?;

    let env = SystemEnvironment::new(config);
    let candidates = sources::collect(&env).filter(args.filter.as_deref());
    if candidates.is_empty() {
        match &args.filter {
            Some(filter) => bail!("No files match {filter:?}"),
            None => bail!("No configuration files found"),
        }
    }

    let label = select::select(
        &candidates,
        args.choice,
        std::io::stdin().lock(),
        std::io::stderr(),
    )?;
    let path = select::resolve_selection(&label);

    if args.bg {
        opener::open_in_background(&path, &editor)?;
        eprintln!("Opened {} in the background", path.display());
    } else {
        opener::open_in_editor(&path, &editor)?;
    }
    Ok(())
}
