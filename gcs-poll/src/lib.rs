//! Cancellable polling loops for the swarm-gcs dashboard
//!
//! Each dashboard screen (a "subscriber") runs one polling loop for the
//! lifetime it is visible: fetch, fold the outcome into a
//! [`ConnectionState`], deliver it to the subscriber's callback, sleep the
//! screen's interval, repeat. The live game-state screen polls every second;
//! the slower statistics screens every five.
//!
//! A tick can never kill its loop. Every outcome of a fetch - success, empty
//! body, transport failure, bad status, undecodable payload - arrives as a
//! typed [`PollResult`](gcs_telemetry::PollResult) and becomes a state for
//! the UI; only explicit cancellation stops the loop, and cancellation takes
//! effect promptly even mid-fetch or mid-sleep.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use gcs_poll::spawn_poller;
//! # use gcs_telemetry::{PollResult, GameState};
//! # async fn fetch_game_state() -> PollResult<GameState> { PollResult::Empty }
//!
//! # async fn demo() {
//! let handle = spawn_poller(
//!     Duration::from_secs(1),
//!     || fetch_game_state(),
//!     |update| println!("{:?}: {:?}", update.state, update.payload),
//! );
//!
//! // Screen goes away: stop the loop and wait for it to wind down.
//! handle.shutdown().await;
//! # }
//! ```

mod poller;
mod state;

pub use poller::{spawn_poller, PollHandle};
pub use state::{ConnectionState, PollUpdate};
