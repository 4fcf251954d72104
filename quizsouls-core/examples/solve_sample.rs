//! Quick demonstration: self-play over the built-in sample catalog.

use quizsouls_core::testing::{sample_catalog, FeedbackOracle};
use quizsouls_core::{Session, SessionState};

fn main() {
    let catalog = sample_catalog();
    println!("=== Self-play over {} bosses ===\n", catalog.len());

    for target in &catalog {
        let oracle = FeedbackOracle::new(target.clone());
        let mut session = Session::new(catalog.clone());

        while session.state() == SessionState::Ready {
            let guess = match session.next_guess() {
                Ok(boss) => boss.clone(),
                Err(_) => break,
            };
            let feedback = oracle.feedback_for(&guess);
            println!(
                "  [{}/{}] guessed {} -> {}",
                session.attempt(),
                session.max_attempts(),
                guess.name,
                feedback
            );
            if session.submit_feedback(&feedback).is_err() {
                break;
            }
        }

        match session.state() {
            SessionState::Solved => println!(
                "target {}: SOLVED in {} attempts\n",
                target.name,
                session.attempt()
            ),
            state => {
                println!("target {}: ended {:?}; final top 3:", target.name, state);
                for entry in session.top(3) {
                    println!("  {:.2}  {}", entry.score, entry.boss);
                }
                println!();
            }
        }
    }
}
