use crate::container::Container;
use crate::errors::RaffleResult;
use crate::raffle::types::{DrawResult, Prize, PrizeId, Ticket, TicketId};
use rand::{rngs::StdRng, SeedableRng};

/// A raffle owning one box of prizes and one box of sold tickets
#[derive(Debug, Clone)]
pub struct Raffle {
    title: String,
    prize_box: Container<Prize>,
    ticket_box: Container<Ticket>,
    next_prize_id: u64,
    next_ticket_id: u64,
    rng: StdRng,
}

impl Raffle {
    /// Create a raffle whose draws are seeded from OS entropy
    pub fn new(title: &str) -> Self {
        Self::with_rng(title, StdRng::from_entropy())
    }

    /// Create a raffle with reproducible draws
    pub fn with_seed(title: &str, seed: u64) -> Self {
        Self::with_rng(title, StdRng::seed_from_u64(seed))
    }

    fn with_rng(title: &str, rng: StdRng) -> Self {
        Self {
            title: format!("Raffle for {}", title),
            prize_box: Container::new(),
            ticket_box: Container::new(),
            next_prize_id: 1,
            next_ticket_id: 1,
            rng,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Register a prize. Fails if `value` is negative.
    pub fn add_prize(&mut self, name: &str, value: i64) -> RaffleResult<PrizeId> {
        let id = PrizeId(self.next_prize_id);
        let prize = Prize::new(id, name, value)?;
        self.prize_box.put(prize);
        self.next_prize_id += 1;

        tracing::debug!(prize_id = id.0, name, value, "prize registered");
        Ok(id)
    }

    /// Sell one ticket to `buyer`
    pub fn sell_ticket(&mut self, buyer: &str) -> TicketId {
        let id = TicketId(self.next_ticket_id);
        self.ticket_box.put(Ticket::new(id, buyer));
        self.next_ticket_id += 1;

        tracing::debug!(ticket_id = id.0, buyer, "ticket sold");
        id
    }

    /// Sell `quantity` separate tickets to the same buyer
    pub fn sell_tickets(&mut self, buyer: &str, quantity: u64) -> Vec<TicketId> {
        (0..quantity).map(|_| self.sell_ticket(buyer)).collect()
    }

    pub fn prizes(&self) -> &Container<Prize> {
        &self.prize_box
    }

    /// Tickets still in the box (sold and not yet drawn)
    pub fn tickets(&self) -> &Container<Ticket> {
        &self.ticket_box
    }

    /// Pair each prize, in registration order, with a ticket drawn at random.
    ///
    /// Drawn tickets leave the box, so calling this again only sees the
    /// tickets that are left. Once the box is empty the remaining prizes go
    /// unawarded.
    pub fn lucky_draw(&mut self) -> DrawResult {
        let mut result = DrawResult::new();

        for prize in self.prize_box.iter() {
            if self.ticket_box.is_empty() {
                result.leave_unawarded(prize.clone());
                continue;
            }

            match self.ticket_box.draw(&mut self.rng) {
                Ok(ticket) => {
                    tracing::debug!(prize_id = prize.id().0, ticket_id = ticket.id().0, "prize awarded");
                    result.record(prize.clone(), ticket);
                }
                Err(e) => {
                    tracing::error!("ticket box failed to draw despite holding tickets: {}", e);
                    result.leave_unawarded(prize.clone());
                }
            }
        }

        tracing::info!(
            awarded = result.len(),
            unawarded = result.unawarded().len(),
            tickets_remaining = self.ticket_box.len(),
            "lucky draw complete"
        );
        if !result.unawarded().is_empty() {
            tracing::warn!(
                "{} prize(s) left without a winner: not enough tickets sold",
                result.unawarded().len()
            );
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_title_is_prefixed() {
        let raffle = Raffle::new("Cancer Research");
        assert_eq!(raffle.title(), "Raffle for Cancer Research");
    }

    #[test]
    fn test_add_prize_rejects_negative_value() {
        let mut raffle = Raffle::with_seed("Test", 1);
        assert!(raffle.add_prize("Broken", -1).is_err());
        assert!(raffle.prizes().is_empty());
    }

    #[test]
    fn test_ids_follow_registration_order() {
        let mut raffle = Raffle::with_seed("Test", 1);
        let p1 = raffle.add_prize("A", 1).unwrap();
        let p2 = raffle.add_prize("B", 2).unwrap();
        let tickets = raffle.sell_tickets("Carol", 3);

        assert_eq!((p1, p2), (PrizeId(1), PrizeId(2)));
        assert_eq!(tickets, vec![TicketId(1), TicketId(2), TicketId(3)]);
    }

    #[test]
    fn test_prizes_awarded_in_order_until_tickets_run_out() {
        let mut raffle = Raffle::with_seed("Test", 3);
        for i in 0..4 {
            raffle.add_prize(&format!("Prize {}", i), 10).unwrap();
        }
        raffle.sell_ticket("Alice");
        raffle.sell_ticket("Bob");

        let result = raffle.lucky_draw();

        let awarded: Vec<_> = result.iter().map(|a| a.prize.id()).collect();
        assert_eq!(awarded, vec![PrizeId(1), PrizeId(2)]);
        let unawarded: Vec<_> = result.unawarded().iter().map(Prize::id).collect();
        assert_eq!(unawarded, vec![PrizeId(3), PrizeId(4)]);
        assert!(raffle.tickets().is_empty());
    }

    #[test]
    fn test_prizes_survive_the_draw() {
        let mut raffle = Raffle::with_seed("Test", 3);
        raffle.add_prize("Hamper", 30).unwrap();
        raffle.sell_ticket("Alice");

        raffle.lucky_draw();
        assert_eq!(raffle.prizes().len(), 1);
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let build = || {
            let mut raffle = Raffle::with_seed("Seeded", 99);
            for i in 0..5 {
                raffle.add_prize(&format!("Prize {}", i), i).unwrap();
            }
            for buyer in ["Ann", "Ben", "Cat", "Dan", "Eve", "Fay", "Gus"] {
                raffle.sell_ticket(buyer);
            }
            raffle
        };

        let first: Vec<_> = build().lucky_draw().iter().map(|a| a.ticket.id()).collect();
        let second: Vec<_> = build().lucky_draw().iter().map(|a| a.ticket.id()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_surplus_tickets_stay_in_box() {
        let mut raffle = Raffle::with_seed("Test", 5);
        raffle.add_prize("Only prize", 100).unwrap();
        raffle.sell_tickets("Dave", 4);

        let result = raffle.lucky_draw();
        assert_eq!(result.len(), 1);
        assert_eq!(raffle.tickets().len(), 3);

        let winner = result.winner_of(PrizeId(1)).expect("prize awarded").id();
        let left: HashSet<_> = raffle.tickets().iter().map(Ticket::id).collect();
        assert!(!left.contains(&winner));
    }
}
