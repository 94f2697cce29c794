use crate::cli::{GameCommands, RpsCli};
use crate::commands::session::Console;
use crate::domain::{Choice, PlayReport};
use crate::services::game::Game;
use crate::services::output::print_one;
use rand::Rng;
use std::io::{BufRead, Write};

const GAME_HELP: &str = "\
rock | paper | scissors (or r | p | s)   play a round
score                                    show the score
reset                                    zero both scores
quit                                     leave the game";

pub fn handle_game_commands<R: Rng + ?Sized>(cli: &RpsCli, rng: &mut R) -> anyhow::Result<()> {
    match &cli.command {
        GameCommands::Play { choice } => {
            let mut game = Game::new();
            let round = game.play(*choice, rng);
            let report = PlayReport {
                round,
                score: game.score(),
            };
            print_one(cli.json, report, |r| format!("{}\n{}", r.round, r.score))?;
        }
        GameCommands::Session => {
            let stdin = std::io::stdin();
            let console = Console::new(stdin.lock(), std::io::stdout());
            run_game_session(console, rng)?;
        }
    }
    Ok(())
}

/// Plays until `quit` or end of input and returns the final game.
pub fn run_game_session<In: BufRead, Out: Write, R: Rng + ?Sized>(
    mut console: Console<In, Out>,
    rng: &mut R,
) -> anyhow::Result<(Game, Console<In, Out>)> {
    let mut game = Game::new();
    console.say("Please select Rock, Paper, or Scissors to play the game:")?;
    console.say(game.score())?;
    while let Some(line) = console.prompt("> ")? {
        match line.trim().to_ascii_lowercase().as_str() {
            "" => {}
            "quit" | "exit" => break,
            "help" => console.say(GAME_HELP)?,
            "score" => console.say(game.score())?,
            "reset" => {
                game.reset();
                console.say(game.score())?;
            }
            other => match other.parse::<Choice>() {
                Ok(choice) => {
                    let round = game.play(choice, rng);
                    console.say(round)?;
                    console.say(game.score())?;
                }
                Err(e) => console.say(format!("error: {}", e))?,
            },
        }
    }
    Ok((game, console))
}
