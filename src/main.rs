use clap::Parser;
use rolodex::cli::Cli;
use rolodex::commands::handle_contact_commands;
use rolodex::services::config::load_settings;
use rolodex::services::contact_store::ContactStore;
use rolodex::services::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings()?;
    logging::init(settings.log_level());

    let path = settings.contacts_file(cli.file.as_deref());
    // A malformed file stops here, before anything can overwrite it.
    let mut store = ContactStore::load(&path)?;
    tracing::debug!(path = %path.display(), contacts = store.len(), "store ready");

    handle_contact_commands(&cli, &mut store)
}
