//! # Agora Core
//!
//! Core types and numeric primitives for the Agora opinion ecosystem:
//!
//! - **Pheromone field** — per-opinion time-decaying reinforcement signal
//!   (stigmergy: support events deposit, time evaporates)
//! - **Fitness landscape** — scalar opinion quality from argument
//!   robustness, support volume, rebuttal penalty, age decay, and
//!   pheromone boost
//! - **Quorum sensing** — the discussion phase state machine
//!   (OPEN → DELIBERATION → CONVERGENCE → CLOSED), driven by cluster-size
//!   diversity and pheromone aggregates
//!
//! Every function here is a pure, stateless transformation over immutable
//! snapshot data. Degenerate inputs (empty corpora, zero-size clusters)
//! produce documented neutral outputs; invalid caller-supplied parameters
//! surface as [`AgoraError`](error::AgoraError).
//!
//! ## Quick Start
//!
//! ```rust
//! use agora_core::prelude::*;
//!
//! let now = Timestamp::from_millis(0);
//! let state = PheromoneState::new(1.0, 0.8, 0.01, now).unwrap();
//! assert_eq!(state.current_intensity(now), 1.0);
//! ```

pub mod error;
pub mod fitness;
pub mod pheromone;
pub mod prelude;
pub mod quorum;
pub mod types;
