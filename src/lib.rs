//! teen-patti: three-card Teen Patti hand evaluation
//!
//! Goals:
//! - Deterministic classification and ranking of 3-card hands
//! - Explicit tie outcomes instead of arbitrary winners
//! - Injected randomness and console I/O so every round can be replayed in tests
//!
//! ## Quick start: evaluate and compare hands
//! ```
//! use teen_patti::evaluator::{evaluate, Category};
//! use teen_patti::hand::Hand;
//! use teen_patti::showdown::{resolve, Outcome};
//!
//! let trail: Hand = "7s 7h 7d".parse().unwrap();
//! let color: Hand = "As Ks 5s".parse().unwrap();
//! let high: Hand = "2c 5h 9d".parse().unwrap();
//!
//! let evals = [evaluate(&trail), evaluate(&color), evaluate(&high)];
//! assert_eq!(evals[0].category, Category::Trail);
//! assert_eq!(resolve(&evals), Outcome::Winner(0));
//! ```
//!
//! ## Console game
//! ```sh
//! cargo run -- play
//! cargo run -- rig --winner B
//! ```

pub mod cards;
pub mod config;
pub mod console;
pub mod deck;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod session;
pub mod showdown;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
