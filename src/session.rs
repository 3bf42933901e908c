//! Text console for running a raffle end to end
//!
//! The session owns the I/O, the ticket price and the running revenue. It
//! calls into [`Raffle`] only with values it has already validated.

use crate::currency::Currency;
use crate::errors::RaffleResult;
use crate::raffle::{DrawResult, Raffle};
use std::io::{self, BufRead, Write};

const PRICE_PROMPT: &str = "How much is each ticket in the raffle?";
const QUANTITY_PROMPT: &str = "How many tickets do you want to buy? ";

/// Interactive raffle session over any line-oriented input and output
pub struct RaffleSession<R, W> {
    raffle: Raffle,
    input: R,
    output: W,
    ticket_cost: Option<Currency>,
    revenue: Currency,
    currency_symbol: String,
}

impl<R: BufRead, W: Write> RaffleSession<R, W> {
    pub fn new(raffle: Raffle, input: R, output: W) -> Self {
        Self {
            raffle,
            input,
            output,
            ticket_cost: None,
            revenue: Currency::zero(),
            currency_symbol: "£".to_string(),
        }
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Preset the ticket price so the session does not ask for it
    pub fn with_ticket_price(mut self, price: Currency) -> Self {
        self.ticket_cost = Some(price);
        self
    }

    pub fn raffle(&self) -> &Raffle {
        &self.raffle
    }

    pub fn revenue(&self) -> Currency {
        self.revenue
    }

    pub fn ticket_cost(&self) -> Option<Currency> {
        self.ticket_cost
    }

    /// Set up, sell, draw and report revenue
    pub fn run(&mut self) -> RaffleResult<DrawResult> {
        writeln!(self.output, "> Setting up the raffle...")?;
        if self.ticket_cost.is_none() {
            self.set_price_of_ticket()?;
        }
        self.set_up_prizes()?;

        writeln!(self.output, "> Selling tickets...")?;
        self.sell_tickets()?;

        writeln!(self.output, "> Drawing prizes...")?;
        let result = self.results()?;

        writeln!(self.output, "> Total revenue")?;
        writeln!(
            self.output,
            "Total revenue for this raffle was: {}{}",
            self.currency_symbol, self.revenue
        )?;
        self.output.flush()?;

        tracing::info!(revenue = self.revenue.amount(), "raffle session finished");
        Ok(result)
    }

    pub fn set_price_of_ticket(&mut self) -> RaffleResult<()> {
        writeln!(self.output, "> Setting price of each ticket in raffle...")?;
        writeln!(self.output, "{}", PRICE_PROMPT)?;
        let value = self.read_whole_number(PRICE_PROMPT)?;
        self.ticket_cost = Some(Currency::new(value)?);
        Ok(())
    }

    pub fn set_up_prizes(&mut self) -> RaffleResult<()> {
        writeln!(self.output, "Enter the details of the prizes for this raffle.")?;

        loop {
            writeln!(self.output, "Enter the details of a prize... ")?;
            let name = self.prompt("Name of prize: ")?;
            let value_prompt = format!("How much in {} does it worth? ", self.currency_symbol);
            writeln!(self.output, "{}", value_prompt)?;
            let value = self.read_whole_number(&value_prompt)?;
            self.raffle.add_prize(&name, value)?;

            if !self.ask_more("More prizes (yes or no)? ")? {
                return Ok(());
            }
        }
    }

    /// Sell tickets, one buyer per transaction, many tickets per buyer
    pub fn sell_tickets(&mut self) -> RaffleResult<()> {
        let unit_cost = self.ticket_cost.unwrap_or_default();

        loop {
            writeln!(self.output, "What is your name? ")?;
            let buyer = self.read_line()?;
            writeln!(self.output, "{}", QUANTITY_PROMPT)?;
            let how_many = self.read_whole_number(QUANTITY_PROMPT)?;

            for _ in 0..how_many {
                self.raffle.sell_ticket(&buyer);
                self.revenue.add(unit_cost.amount());
            }
            tracing::debug!(buyer = %buyer, how_many, revenue = self.revenue.amount(), "sale recorded");

            if !self.ask_more("More tickets (yes or no)? ")? {
                return Ok(());
            }
        }
    }

    /// Run the lucky draw and announce the winners
    pub fn results(&mut self) -> RaffleResult<DrawResult> {
        writeln!(self.output, "{}\nThe winners are... ", self.raffle.title())?;

        let winners = self.raffle.lucky_draw();
        for award in &winners {
            writeln!(self.output, "WINNER!")?;
            writeln!(
                self.output,
                "Prize: {} worth {}{}",
                award.prize.name(),
                self.currency_symbol,
                award.prize.value()
            )?;
            writeln!(self.output, "{}", award.ticket)?;
        }

        writeln!(self.output, "Many Congratulations!!")?;
        Ok(winners)
    }

    fn prompt(&mut self, text: &str) -> RaffleResult<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn ask_more(&mut self, text: &str) -> RaffleResult<bool> {
        let answer = self.prompt(text)?;
        Ok(answer.trim().eq_ignore_ascii_case("yes"))
    }

    /// Read a non-negative integer, re-prompting until one is entered
    fn read_whole_number(&mut self, prompt: &str) -> RaffleResult<i64> {
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<i64>() {
                Ok(value) if value >= 0 => return Ok(value),
                _ => {
                    tracing::debug!(input = %line, "rejected non-numeric input");
                    writeln!(self.output, "The value must be a whole number. {}", prompt)?;
                }
            }
        }
    }

    fn read_line(&mut self) -> RaffleResult<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input ended before the raffle was complete").into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
