// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown hands evaluator CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::{sync::Arc, time::Instant};

use showdown_eval::{Card, Evaluator, HandRank, LookupTable};

pub mod sim;

#[derive(Debug, Parser)]
#[clap(version, about = "Poker hands evaluator")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prints the rank, class and percentile of a hand.
    Eval {
        /// The two hole cards (i.e. "AS KD").
        hole: String,
        /// The 3, 4 or 5 board cards (i.e. "2C 7H 9S").
        board: String,
    },
    /// Same as eval and also prints the five cards that make the best hand.
    Best {
        /// The two hole cards (i.e. "AS KD").
        hole: String,
        /// The 3, 4 or 5 board cards (i.e. "2C 7H 9S").
        board: String,
    },
    /// Estimates the equity of the hole cards against random opponents.
    Equity {
        /// The two hole cards (i.e. "AS KD").
        hole: String,
        /// The known board cards.
        #[clap(long, short, default_value = "")]
        board: String,
        /// Number of opponents.
        #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=9))]
        players: u8,
        /// Number of simulated games.
        #[clap(long, short, default_value_t = 100_000, value_parser = clap::value_parser!(u32).range(1..))]
        samples: u32,
    },
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let now = Instant::now();
    let evaluator = Evaluator::new(Arc::new(LookupTable::new()));
    info!("Lookup tables built in {:.3}s", now.elapsed().as_secs_f64());

    match cli.command {
        Command::Eval { hole, board } => {
            let (hole, board) = (parse_cards(&hole)?, parse_cards(&board)?);
            check_distinct(&hole, &board)?;

            let rank = evaluator.evaluate(&hole, &board)?;
            print_rank(rank);
        }
        Command::Best { hole, board } => {
            let (hole, board) = (parse_cards(&hole)?, parse_cards(&board)?);
            check_distinct(&hole, &board)?;

            let (rank, hand) = evaluator.best_hand(&hole, &board)?;
            print_rank(rank);
            println!("Best hand:   {}", format_cards(&hand));
        }
        Command::Equity {
            hole,
            board,
            players,
            samples,
        } => {
            let (hole, board) = (parse_cards(&hole)?, parse_cards(&board)?);
            let sim = sim::Sim::new(&evaluator, hole, board, players as usize)?;

            let now = Instant::now();
            let equity = sim.run(samples as usize);
            info!(
                "Simulated {} games in {:.3}s",
                equity.games,
                now.elapsed().as_secs_f64()
            );

            println!("Win:         {:.2}%", equity.win_prob() * 100.0);
            println!("Tie:         {:.2}%", equity.tie_prob() * 100.0);
            println!("Equity:      {:.2}%", equity.equity() * 100.0);
        }
    }

    Ok(())
}

fn parse_cards(s: &str) -> Result<Vec<Card>> {
    Card::parse_many(s).with_context(|| format!("Invalid cards {s:?}"))
}

fn check_distinct(hole: &[Card], board: &[Card]) -> Result<()> {
    if hole.len() != 2 {
        bail!("Expected 2 hole cards got {}", hole.len());
    }

    if let Some(card) = board.iter().find(|c| hole.contains(c)) {
        bail!("Duplicate card {card}");
    }

    for (idx, card) in board.iter().enumerate() {
        if board[..idx].contains(card) {
            bail!("Duplicate card {card}");
        }
    }

    if hole[0] == hole[1] {
        bail!("Duplicate card {}", hole[0]);
    }

    Ok(())
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_rank(rank: HandRank) {
    println!("Rank:        {}", rank.value());
    println!("Class:       {}", rank.class());
    println!("Percentile:  {:.4}", rank.percentile());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_args() {
        Cli::command().debug_assert();

        let cli = Cli::try_parse_from(["showdown", "equity", "AS AH", "-p", "3"]).unwrap();
        let Command::Equity {
            players, samples, ..
        } = &cli.command
        else {
            panic!("unexpected command {:?}", cli.command);
        };
        assert_eq!(*players, 3);
        assert_eq!(*samples, 100_000);

        assert!(Cli::try_parse_from(["showdown", "equity", "AS AH", "-p", "10"]).is_err());
    }

    #[test]
    fn distinct_cards() {
        let cards = |s: &str| Card::parse_many(s).unwrap();

        assert!(check_distinct(&cards("AS AH"), &cards("2C 3C 4C")).is_ok());
        assert!(check_distinct(&cards("AS AH"), &cards("AS 3C 4C")).is_err());
        assert!(check_distinct(&cards("AS AS"), &cards("2C 3C 4C")).is_err());
        assert!(check_distinct(&cards("AS AH"), &cards("2C 2C 4C")).is_err());
        assert!(check_distinct(&cards("AS"), &cards("2C 3C 4C KD")).is_err());
    }

    #[test]
    fn eval_errors() {
        let evaluator = Evaluator::default();
        let hole = parse_cards("AS AH").unwrap();
        let board = parse_cards("2C 3C").unwrap();

        let err = anyhow::Error::from(evaluator.evaluate(&hole, &board).unwrap_err());
        assert!(err.to_string().contains("invalid hand size 4"));

        let err = parse_cards("AS XX").unwrap_err();
        assert!(format!("{err:#}").contains("invalid card rank 'X'"));
    }
}
