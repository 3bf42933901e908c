use crate::errors::{RaffleError, RaffleResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Registration position of a prize within its raffle (1-based)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PrizeId(pub u64);

/// Sale serial number of a ticket within its raffle (1-based)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TicketId(pub u64);

impl fmt::Display for PrizeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A prize on offer. Two prizes with the same name and value are still
/// different prizes because their ids differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prize {
    id: PrizeId,
    name: String,
    value: u64,
}

impl Prize {
    pub(crate) fn new(id: PrizeId, name: impl Into<String>, value: i64) -> RaffleResult<Self> {
        let value = u64::try_from(value).map_err(|_| RaffleError::negative_amount("prize value", value))?;
        Ok(Self {
            id,
            name: name.into(),
            value,
        })
    }

    pub fn id(&self) -> PrizeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prize: {} worth {}", self.name, self.value)
    }
}

/// One sold ticket. Buying three tickets yields three of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket {
    id: TicketId,
    buyer: String,
}

impl Ticket {
    pub(crate) fn new(id: TicketId, buyer: impl Into<String>) -> Self {
        Self {
            id,
            buyer: buyer.into(),
        }
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn buyer(&self) -> &str {
        &self.buyer
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ticket {} bought by {}", self.id, self.buyer)
    }
}

/// A prize paired with the ticket that won it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Award {
    pub prize: Prize,
    pub ticket: Ticket,
}

/// Outcome of a lucky draw.
///
/// Awards are kept in prize registration order. Each prize and each ticket
/// appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawResult {
    awards: Vec<Award>,
    unawarded: Vec<Prize>,
}

impl DrawResult {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, prize: Prize, ticket: Ticket) {
        self.awards.push(Award { prize, ticket });
    }

    pub(crate) fn leave_unawarded(&mut self, prize: Prize) {
        self.unawarded.push(prize);
    }

    pub fn len(&self) -> usize {
        self.awards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.awards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Award> {
        self.awards.iter()
    }

    /// Winning ticket for a prize, if that prize was awarded
    pub fn winner_of(&self, prize: PrizeId) -> Option<&Ticket> {
        self.awards
            .iter()
            .find(|award| award.prize.id() == prize)
            .map(|award| &award.ticket)
    }

    /// Prizes left without a winner because the tickets ran out
    pub fn unawarded(&self) -> &[Prize] {
        &self.unawarded
    }

    pub fn into_map(self) -> HashMap<Prize, Ticket> {
        self.awards
            .into_iter()
            .map(|award| (award.prize, award.ticket))
            .collect()
    }
}

impl<'a> IntoIterator for &'a DrawResult {
    type Item = &'a Award;
    type IntoIter = std::slice::Iter<'a, Award>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
