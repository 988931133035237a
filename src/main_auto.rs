// Copyright (C) 2020-2026 Andy Kurnia.

use anagrid::{
    error, game_config, lexicon, logging, move_picker, return_error, signature, tournament,
};

fn usage() -> error::Returns<()> {
    Err("args: lexicon.txt num_rounds strategy[:name]... [--csv out.csv] [--seed n] [--threads n] [--fixed-order]".into())
}

// "careful" or "careful:bob". Without a name the strategy names the player.
fn parse_player(arg: &str) -> error::Returns<tournament::Player> {
    let (strategy, name) = arg.split_once(':').unwrap_or((arg, arg));
    if name.is_empty() {
        return_error!(format!("player {arg:?} has an empty name"));
    }
    Ok(tournament::Player {
        name: name.to_string(),
        strategy: strategy.parse()?,
    })
}

fn main() -> error::Returns<()> {
    let _logger = logging::setup_logging("info", None)?;
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 4 {
        return usage();
    }

    let mut players = Vec::new();
    let mut csv_path = None;
    let mut seed = None;
    let mut num_threads = None;
    let mut randomize_order = true;
    let mut rest = args[3..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--csv" => csv_path = rest.next(),
            "--seed" => match rest.next() {
                Some(s) => seed = Some(s.parse::<u64>()?),
                None => return usage(),
            },
            "--threads" => match rest.next() {
                Some(s) => num_threads = Some(s.parse::<usize>()?),
                None => return usage(),
            },
            "--fixed-order" => randomize_order = false,
            _ => players.push(parse_player(arg)?),
        }
    }
    if players.is_empty() {
        println!(
            "strategies: {}",
            move_picker::StrategyKind::ALL
                .iter()
                .map(|s| s.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        return usage();
    }
    let num_rounds = args[2].parse::<u32>()?;
    let seed = seed.unwrap_or_else(rand::random);

    let game_config = game_config::make_english_game_config();
    game_config.validate()?;
    let t0 = std::time::Instant::now();
    let lexicon = lexicon::Lexicon::from_file(&args[1])?;
    let signatures = signature::SignatureIndex::build(&lexicon, game_config.num_blanks_budget())?;
    log::info!(
        "loaded {} words into {} signatures in {:?}",
        lexicon.len(),
        signatures.len(),
        t0.elapsed()
    );

    let mut tournament = tournament::Tournament::new(&game_config, &lexicon, &signatures, players)?;
    if let Some(num_threads) = num_threads {
        tournament.set_num_threads(num_threads);
    }
    println!("playing {num_rounds} rounds with seed {seed}");
    tournament.play(num_rounds, randomize_order, seed)?;

    println!(
        "{:<16} {:<8} {:>6} {:>10} {:>8}",
        "PLAYER", "STRATEGY", "WINS", "TOTAL", "AVERAGE"
    );
    for (player, standing) in tournament.players().iter().zip(tournament.standings()) {
        println!(
            "{:<16} {:<8} {:>6} {:>10} {:>8.2}",
            standing.name,
            player.strategy.name(),
            standing.wins,
            standing.total_score,
            standing.total_score as f64 / standing.rounds.max(1) as f64
        );
    }

    if let Some(csv_path) = csv_path {
        tournament.write_csv_file(csv_path)?;
        println!("wrote {} results to {}", tournament.results().len(), csv_path);
    }

    Ok(())
}
