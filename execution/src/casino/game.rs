use super::{InvalidBet, Player, Table, Wheel};
use roulette_types::casino::bin_label;
use tracing::debug;

/// A wheel and a table: runs one round of play at a time.
pub struct Game {
    wheel: Wheel,
    table: Table,
}

impl Game {
    pub fn new(wheel: Wheel, table: Table) -> Self {
        Self { wheel, table }
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Play one round for `player`.
    ///
    /// A player that is not playing is left untouched. Otherwise the player
    /// bets, the wheel spins, each bet is settled against the winning bin,
    /// the player sees the bin and one round is used up. The table is empty
    /// again once the round is settled.
    ///
    /// If a bet is refused, the round is not played: the player's bets already
    /// on the table are returned to their stake and every pending bet is
    /// removed.
    pub fn cycle(&mut self, player: &mut Player) -> Result<(), InvalidBet> {
        if !player.playing() {
            return Ok(());
        }

        if let Err(err) = player.place_bets(&mut self.table) {
            for bet in self.table.take_bets() {
                if bet.owner == Some(player.id()) {
                    player.stake = player.stake.saturating_add(bet.amount);
                }
            }
            return Err(err);
        }

        let (index, bin) = self.wheel.spin();
        let (mut won, mut lost) = (0usize, 0usize);
        for bet in self.table.take_bets() {
            if bin.contains(&bet.outcome) {
                player.win(&bet);
                won += 1;
            } else {
                player.lose(&bet);
                lost += 1;
            }
        }
        debug!(
            bin = %bin_label(index),
            won,
            lost,
            stake = player.stake,
            "resolved spin"
        );
        player.notify_winners(bin);
        player.rounds_left = player.rounds_left.saturating_sub(1);
        Ok(())
    }
}
