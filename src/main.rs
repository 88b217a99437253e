//! Interactive driver: runs the engine on the built-in take-away game over a
//! line-oriented stdin protocol.

use std::io;
use std::io::prelude::*;
use std::time::Duration;

use anyhow::Context;
use itertools::Itertools;
use tanto::environment::{Environment, Promotions};
use tanto::evaluation::material::Material;
use tanto::search::Settings;
use tanto::takeaway::TakeAway;
use tanto::Engine;

fn parse_pile(args: &[&str]) -> anyhow::Result<u32> {
    args.first()
        .context("pile expects a token count")?
        .parse()
        .context("pile expects a number")
}

fn go(engine: &mut Engine<Material>, game: &TakeAway, args: &[&str]) -> anyhow::Result<()> {
    let settings = engine.settings_mut();
    let mut i = 0;
    while i < args.len() {
        match args[i] {
            "iterations" if i + 1 < args.len() => {
                settings.max_iterations =
                    Some(args[i + 1].parse().context("iterations expects a number")?);
            }
            "movetime" if i + 1 < args.len() => {
                settings.move_time = Some(Duration::from_millis(
                    args[i + 1].parse().context("movetime expects milliseconds")?,
                ));
            }
            "seed" if i + 1 < args.len() => {
                settings.seed = Some(args[i + 1].parse().context("seed expects a number")?);
            }
            "infinite" => {
                settings.max_iterations = None;
                settings.move_time = None;
            }
            _ => {}
        }
        if args[i] == "infinite" {
            i += 1;
        } else {
            i += 2;
        }
    }
    engine.start_search(game.clone(), |report| match report.best_move {
        Some(best) => println!("bestmove {best}"),
        None => println!("bestmove (none)"),
    })
}

fn main() {
    tanto::print_engine_info();

    let mut game = TakeAway::new(21);
    let mut engine = Engine::new(Material, Settings::default());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.unwrap();
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.split_first() {
            Some((&"pile", rest)) => match parse_pile(rest) {
                Ok(tokens_left) => game = TakeAway::new(tokens_left),
                Err(e) => println!("info string {e}"),
            },
            Some((&"moves", _)) => println!(
                "{}",
                game.generate_moves(Promotions::all(), true).iter().join(" ")
            ),
            Some((&"d", _)) => println!("{game:?}"),
            Some((&"go", rest)) => {
                if let Err(e) = go(&mut engine, &game, rest) {
                    println!("info string {e}");
                }
            }
            Some((&"quit", _)) => break,
            Some((other, _)) => println!("info string Unsupported command: {other}"),
            None => {}
        }
    }
}
