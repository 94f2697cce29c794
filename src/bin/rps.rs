use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rolodex::cli::RpsCli;
use rolodex::commands::handle_game_commands;
use rolodex::services::config::DEFAULT_LOG_LEVEL;
use rolodex::services::logging;

fn main() -> anyhow::Result<()> {
    let cli = RpsCli::parse();
    logging::init(DEFAULT_LOG_LEVEL);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    handle_game_commands(&cli, &mut rng)
}
