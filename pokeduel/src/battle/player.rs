use std::mem;

use crate::{
    battle::BattleMon,
    error::{
        BattleError,
        WrapOptionError,
        invalid_state_error,
    },
};

/// One participant of a battle, along with their roster.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    roster: Vec<BattleMon>,
    active: usize,
    remaining: usize,
}

impl Player {
    /// Creates a new player. The first roster entry starts as the active Mon.
    pub fn new(name: String, roster: Vec<BattleMon>) -> Result<Self, BattleError> {
        if roster.is_empty() {
            return Err(invalid_state_error(format!("player {name} has an empty roster")));
        }
        if roster.iter().any(|mon| !mon.alive()) {
            return Err(invalid_state_error(format!(
                "player {name} has a fainted Mon in their roster"
            )));
        }
        let remaining = roster.len();
        Ok(Self {
            name,
            roster,
            active: 0,
            remaining,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roster(&self) -> &[BattleMon] {
        &self.roster
    }

    /// The roster index of the active Mon.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The number of Mons that have not fainted.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn active(&self) -> &BattleMon {
        // The active index is only ever set to a valid roster index.
        &self.roster[self.active]
    }

    pub(crate) fn active_mut(&mut self) -> &mut BattleMon {
        &mut self.roster[self.active]
    }

    /// Looks up a Mon in the roster.
    pub fn mon(&self, index: usize) -> Result<&BattleMon, BattleError> {
        self.roster
            .get(index)
            .wrap_not_found_error_with_format(format_args!(
                "roster index {index} for player {}",
                self.name
            ))
    }

    /// Roster indices of Mons that could be switched in.
    pub fn switch_candidates(&self) -> impl Iterator<Item = usize> + '_ {
        self.roster
            .iter()
            .enumerate()
            .filter(|(index, mon)| *index != self.active && mon.alive())
            .map(|(index, _)| index)
    }

    pub(crate) fn record_faint(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Switches the active Mon, returning the previous active index.
    pub(crate) fn switch_to(&mut self, index: usize) -> Result<usize, BattleError> {
        let mon = self.mon(index)?;
        if index == self.active {
            return Err(invalid_state_error(format!(
                "{} is already active for player {}",
                mon.name(),
                self.name
            )));
        }
        if !mon.alive() {
            return Err(invalid_state_error(format!(
                "{} has fainted and cannot switch in",
                mon.name()
            )));
        }
        Ok(mem::replace(&mut self.active, index))
    }
}
