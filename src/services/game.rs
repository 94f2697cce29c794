use crate::domain::{Choice, Outcome, Round, Scoreboard};
use rand::Rng;

pub fn random_choice<R: Rng + ?Sized>(rng: &mut R) -> Choice {
    Choice::ALL[rng.gen_range(0..Choice::ALL.len())]
}

pub fn decide(user: Choice, computer: Choice) -> Outcome {
    use Choice::*;
    match (user, computer) {
        _ if user == computer => Outcome::Tie,
        (Rock, Scissors) | (Scissors, Paper) | (Paper, Rock) => Outcome::UserWins,
        _ => Outcome::ComputerWins,
    }
}

/// Scores for one run of the game. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct Game {
    score: Scoreboard,
    last: Option<Round>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> Scoreboard {
        self.score
    }

    pub fn last_round(&self) -> Option<Round> {
        self.last
    }

    pub fn play<R: Rng + ?Sized>(&mut self, user: Choice, rng: &mut R) -> Round {
        let computer = random_choice(rng);
        self.play_against(user, computer)
    }

    pub fn play_against(&mut self, user: Choice, computer: Choice) -> Round {
        let outcome = decide(user, computer);
        match outcome {
            Outcome::UserWins => self.score.user += 1,
            Outcome::ComputerWins => self.score.computer += 1,
            Outcome::Tie => {}
        }
        let round = Round {
            user,
            computer,
            outcome,
        };
        tracing::debug!(%user, %computer, ?outcome, "round played");
        self.last = Some(round);
        round
    }

    pub fn reset(&mut self) {
        self.score = Scoreboard::default();
        self.last = None;
    }
}
