//! Hidden-boss guessing game CLI.
//!
//! Runs the engine either against a built-in feedback oracle (simulate
//! mode, the default) or interactively, with the player supplying the
//! six feedback symbols after each guess:
//!
//! ```bash
//! cargo run -p quizsouls -- --target "Gravelord Nito"
//! cargo run -p quizsouls -- --interactive --catalog bosses.json
//! ```

use quizsouls_core::testing::FeedbackOracle;
use quizsouls_core::{
    load_bosses, Attribute, Boss, Feedback, Session, SessionConfig, SessionState, Signal,
};
use rand::seq::SliceRandom;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

struct CliConfig {
    catalog: Option<PathBuf>,
    target: Option<String>,
    max_attempts: Option<u32>,
    interactive: bool,
}

fn parse_args(args: &[String]) -> CliConfig {
    let mut config = CliConfig {
        catalog: None,
        target: None,
        max_attempts: None,
        interactive: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" => {
                if let Some(path) = args.get(i + 1) {
                    config.catalog = Some(PathBuf::from(path));
                    i += 1;
                }
            }
            "--target" => {
                if let Some(name) = args.get(i + 1) {
                    config.target = Some(name.clone());
                    i += 1;
                }
            }
            "--max-attempts" => {
                if let Some(n) = args.get(i + 1) {
                    config.max_attempts = n.parse().ok();
                    i += 1;
                }
            }
            "--interactive" | "-i" => {
                config.interactive = true;
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    let config = parse_args(&args);

    let catalog = match &config.catalog {
        Some(path) => match load_bosses(path) {
            Ok(bosses) => bosses,
            Err(e) => {
                eprintln!("Failed to load catalog {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => quizsouls_core::testing::sample_catalog(),
    };

    if catalog.is_empty() {
        eprintln!("Catalog is empty, nothing to guess.");
        std::process::exit(1);
    }

    let mut session_config = SessionConfig::new();
    if let Some(max) = config.max_attempts {
        session_config = session_config.with_max_attempts(max);
    }
    let mut session = Session::with_config(catalog.clone(), session_config);

    if config.interactive {
        run_interactive(&mut session);
    } else {
        let target = pick_target(&catalog, config.target.as_deref());
        run_simulated(&mut session, target);
    }
}

/// Resolve the simulation target: by name if given, random otherwise.
fn pick_target(catalog: &[Boss], requested: Option<&str>) -> Boss {
    match requested {
        Some(name) => match catalog
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name) || b.slug == name)
        {
            Some(boss) => boss.clone(),
            None => {
                eprintln!("No boss named {name:?} in the catalog.");
                std::process::exit(1);
            }
        },
        None => {
            let mut rng = rand::thread_rng();
            match catalog.choose(&mut rng) {
                Some(boss) => boss.clone(),
                None => unreachable!("catalog checked non-empty"),
            }
        }
    }
}

fn run_simulated(session: &mut Session, target: Boss) {
    println!("Hidden boss: {}", target.name);
    println!();
    let oracle = FeedbackOracle::new(target);

    while session.state() == SessionState::Ready {
        let guess = match session.next_guess() {
            Ok(boss) => boss.clone(),
            Err(e) => {
                println!("{e}");
                break;
            }
        };
        let feedback = oracle.feedback_for(&guess);
        println!(
            "Attempt {}/{}: {guess}",
            session.attempt(),
            session.max_attempts()
        );
        println!("  feedback: {feedback}");
        if session.submit_feedback(&feedback).is_err() {
            break;
        }
    }

    print_outcome(session);
}

fn run_interactive(session: &mut Session) {
    println!("Answer each guess with six symbols, one per attribute, in order:");
    println!("  HP Weapons Resistance Weakness Immunity Optional");
    println!("Symbols: = equal, > greater, < less, ~ close, X different, ? unknown");
    println!();

    let stdin = io::stdin();
    while session.state() == SessionState::Ready {
        let guess = match session.next_guess() {
            Ok(boss) => boss.clone(),
            Err(e) => {
                println!("{e}");
                break;
            }
        };
        println!(
            "Attempt {}/{}: {guess}",
            session.attempt(),
            session.max_attempts()
        );

        let feedback = match read_feedback(&stdin) {
            Some(feedback) => feedback,
            None => {
                session.abort();
                break;
            }
        };
        if session.submit_feedback(&feedback).is_err() {
            break;
        }
        println!();
        println!("{}", session.restrictions());
        println!();
    }

    print_outcome(session);
}

/// Read one line of feedback symbols from stdin. Returns `None` on EOF
/// or an explicit `quit`.
fn read_feedback(stdin: &io::Stdin) -> Option<Feedback> {
    loop {
        print!("feedback> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            return None;
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            return None;
        }

        let symbols: Vec<&str> = line.split_whitespace().collect();
        if symbols.len() != Attribute::ALL.len() {
            println!(
                "Expected {} symbols, got {}. Try again.",
                Attribute::ALL.len(),
                symbols.len()
            );
            continue;
        }

        let mut feedback = Feedback::new();
        for (attr, symbol) in Attribute::ALL.into_iter().zip(symbols) {
            feedback.set(attr, Signal::from_symbol(symbol));
        }
        return Some(feedback);
    }
}

fn print_outcome(session: &Session) {
    println!();
    match session.state() {
        SessionState::Solved => {
            let name = session
                .answer()
                .map(|b| b.name.as_str())
                .unwrap_or("unknown");
            println!("Solved in {} attempts: {name}", session.attempt());
        }
        SessionState::Exhausted => {
            println!(
                "Out of attempts after {} guesses. Best remaining candidates:",
                session.attempt()
            );
            for entry in session.top(5) {
                println!("  {:>6.2}  {}", entry.score, entry.boss.name);
            }
        }
        SessionState::Aborted => println!("Game aborted."),
        state => println!("Session ended in state {state:?}."),
    }
}

fn print_help() {
    println!("quizsouls - hidden-boss guessing game");
    println!();
    println!("USAGE:");
    println!("  quizsouls [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help           Show this help message");
    println!("  -i, --interactive    Read feedback symbols from stdin");
    println!("      --catalog FILE   Load the boss catalog from a JSON file");
    println!("      --target NAME    Simulate against this boss (default: random)");
    println!("      --max-attempts N Attempt budget per game (default: 7)");
    println!();
    println!("Without --interactive the game plays against a built-in oracle");
    println!("that answers truthfully for the chosen target.");
}
