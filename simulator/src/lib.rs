//! Repeated roulette sessions for one player and the statistics they yield.

use roulette_execution::{
    Game, GameRng, InvalidBet, Player, Strategy, Table, UnknownOutcome, Wheel,
};
use roulette_types::casino::{PlayerId, DEFAULT_INITIAL_STAKE, DEFAULT_SESSION_DURATION};
use serde::Serialize;
use tracing::{info, warn};

mod config;
pub mod statistics;

pub use config::{Config, ConfigError, ValidatedConfig};

/// Aggregate results of a batch of sessions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    /// Rounds played in each session.
    pub durations: Vec<u64>,
    /// Highest stake seen in each session.
    pub maxima: Vec<u64>,
    pub mean_duration: f64,
    pub duration_std: f64,
    pub mean_maximum: f64,
    pub maximum_std: f64,
}

impl Summary {
    pub fn new(durations: Vec<u64>, maxima: Vec<u64>) -> Self {
        Self {
            mean_duration: statistics::mean(&durations),
            duration_std: statistics::std(&durations),
            mean_maximum: statistics::mean(&maxima),
            maximum_std: statistics::std(&maxima),
            durations,
            maxima,
        }
    }
}

/// Runs sessions of one player at one game.
pub struct Simulator {
    game: Game,
    player: Player,
    session_duration: u32,
    initial_stake: u64,
    durations: Vec<u64>,
    maxima: Vec<u64>,
}

impl Simulator {
    pub fn new(game: Game, player: Player) -> Self {
        Self {
            game,
            player,
            session_duration: DEFAULT_SESSION_DURATION,
            initial_stake: DEFAULT_INITIAL_STAKE,
            durations: Vec::new(),
            maxima: Vec::new(),
        }
    }

    /// Build the wheel, table and player described by `config`.
    ///
    /// The wheel and any randomized strategy draw from streams forked off
    /// `seed`, so a run is fully determined by its config and seed.
    pub fn from_config(config: &ValidatedConfig, seed: u64) -> Result<Self, UnknownOutcome> {
        let mut rng = GameRng::new(seed);
        let wheel = Wheel::american(rng.fork());
        let strategy = Strategy::build(config.strategy, &wheel, config.base_bet, &mut rng)?;
        let table = Table::new(config.table_minimum, config.table_limit);

        let mut simulator = Self::new(Game::new(wheel, table), Player::new(PlayerId(1), strategy));
        simulator.session_duration = config.session_duration;
        simulator.initial_stake = config.initial_stake;
        Ok(simulator)
    }

    pub fn with_session(mut self, session_duration: u32, initial_stake: u64) -> Self {
        self.session_duration = session_duration;
        self.initial_stake = initial_stake;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn session_duration(&self) -> u32 {
        self.session_duration
    }

    pub fn initial_stake(&self) -> u64 {
        self.initial_stake
    }

    /// Durations recorded by the last [Simulator::run_many].
    pub fn durations(&self) -> &[u64] {
        &self.durations
    }

    /// Peak stakes recorded by the last [Simulator::run_many].
    pub fn maxima(&self) -> &[u64] {
        &self.maxima
    }

    /// Play one session from a fresh stake and round budget.
    ///
    /// Returns the player's stake after every round played. The session ends
    /// early once the player stops playing.
    pub fn run_session(&mut self) -> Result<Vec<u64>, InvalidBet> {
        self.player.stake = self.initial_stake;
        self.player.rounds_left = self.session_duration;
        self.player.new_round();

        let mut stakes = Vec::with_capacity(self.session_duration as usize);
        for _ in 0..self.session_duration {
            if !self.player.playing() {
                break;
            }
            if let Err(err) = self.game.cycle(&mut self.player) {
                warn!(
                    player = %self.player.id(),
                    round = stakes.len() + 1,
                    %err,
                    "session aborted"
                );
                return Err(err);
            }
            stakes.push(self.player.stake);
        }

        info!(
            duration = stakes.len(),
            peak = stakes.iter().max().copied().unwrap_or(self.initial_stake),
            stake = self.player.stake,
            "session complete"
        );
        Ok(stakes)
    }

    /// Play `samples` sessions and summarize their durations and peaks.
    pub fn run_many(&mut self, samples: usize) -> Result<Summary, InvalidBet> {
        self.gather(samples, Self::run_session)
    }

    fn gather<F>(&mut self, samples: usize, mut session: F) -> Result<Summary, InvalidBet>
    where
        F: FnMut(&mut Self) -> Result<Vec<u64>, InvalidBet>,
    {
        self.durations.clear();
        self.maxima.clear();
        for _ in 0..samples {
            let stakes = session(self)?;
            self.durations.push(stakes.len() as u64);
            self.maxima
                .push(stakes.iter().max().copied().unwrap_or(self.initial_stake));
        }

        let summary = Summary::new(self.durations.clone(), self.maxima.clone());
        info!(
            samples,
            mean_duration = summary.mean_duration,
            duration_std = summary.duration_std,
            mean_maximum = summary.mean_maximum,
            maximum_std = summary.maximum_std,
            "gathered sessions"
        );
        Ok(summary)
    }
}
