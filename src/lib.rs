//! Strictly Ludo simulator - headless games between computer players
//!
//! Supplies what the engine leaves to its caller: a dice source, turn order,
//! piece selection and reporting.
//!
//! # Architecture
//!
//! - **Config**: TOML-backed simulation settings
//! - **Players**: computer strategies choosing among legal moves
//! - **Orchestrator**: the turn loop over one [`strictly_ludo::Board`]
//! - **Report**: per-game and per-series summaries
//!
//! # Example
//!
//! ```
//! use strictly_ludo_sim::{Orchestrator, SimConfig};
//!
//! # fn example() -> Result<(), strictly_ludo_sim::SimError> {
//! let config = SimConfig::default().with_seed(Some(7));
//! let report = Orchestrator::new(&config)?.run()?;
//! assert!(report.turns > 0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;
mod report;

pub use config::{ConfigError, SimConfig, Strategy};
pub use orchestrator::{Orchestrator, SimError, play_series};
pub use players::{ComputerPlayer, EagerPlayer, RandomPlayer, player_for};
pub use report::{GameReport, SeriesReport, TurnAction, TurnRecord};
