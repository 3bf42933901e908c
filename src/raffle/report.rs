//! Serializable summary of a lucky draw

use crate::raffle::engine::Raffle;
use crate::raffle::types::{DrawResult, PrizeId, TicketId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One winning line in a draw report
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WinnerRecord {
    pub prize_id: PrizeId,
    pub prize: String,
    pub value: u64,
    pub ticket_id: TicketId,
    pub buyer: String,
}

/// Draw outcome with identifying metadata, for export as JSON
#[derive(Debug, Clone, Serialize)]
pub struct DrawReport {
    pub draw_id: Uuid,
    pub title: String,
    pub drawn_at: DateTime<Utc>,
    pub winners: Vec<WinnerRecord>,
    pub unawarded_prizes: Vec<String>,
    pub tickets_remaining: usize,
}

impl DrawReport {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Raffle {
    /// Summarize a draw taken from this raffle
    pub fn report(&self, result: &DrawResult) -> DrawReport {
        let winners = result
            .iter()
            .map(|award| WinnerRecord {
                prize_id: award.prize.id(),
                prize: award.prize.name().to_string(),
                value: award.prize.value(),
                ticket_id: award.ticket.id(),
                buyer: award.ticket.buyer().to_string(),
            })
            .collect();

        DrawReport {
            draw_id: Uuid::new_v4(),
            title: self.title().to_string(),
            drawn_at: Utc::now(),
            winners,
            unawarded_prizes: result.unawarded().iter().map(|p| p.name().to_string()).collect(),
            tickets_remaining: self.tickets().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lists_winners_and_leftovers() {
        let mut raffle = Raffle::with_seed("Cancer Research", 11);
        raffle.add_prize("Family holiday at Disneyland Paris (3 nights)", 1500).unwrap();
        raffle.add_prize("Family holiday at Legoland Windsor (1 night)", 450).unwrap();
        raffle.sell_ticket("Alice");

        let result = raffle.lucky_draw();
        let report = raffle.report(&result);

        assert_eq!(report.title, "Raffle for Cancer Research");
        assert_eq!(report.winners.len(), 1);
        assert_eq!(report.winners[0].buyer, "Alice");
        assert_eq!(report.winners[0].value, 1500);
        assert_eq!(report.unawarded_prizes, vec!["Family holiday at Legoland Windsor (1 night)"]);
        assert_eq!(report.tickets_remaining, 0);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut raffle = Raffle::with_seed("Test", 2);
        raffle.add_prize("Hamper", 40).unwrap();
        raffle.sell_ticket("Bob");

        let result = raffle.lucky_draw();
        let json = raffle.report(&result).to_json_pretty().expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["winners"][0]["ticket_id"], 1);
        assert_eq!(value["winners"][0]["prize"], "Hamper");
        assert!(value["draw_id"].is_string());
    }
}
