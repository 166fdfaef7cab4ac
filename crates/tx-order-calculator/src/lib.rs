//! # Transaction Order Calculator
//!
//! Orders pool-resident, unconfirmed transactions so that no transaction
//! precedes one of its own unconfirmed parents.
//!
//! ## Architecture
//!
//! - **Domain**: `DependencyNode`, `DependencyGraph` (arena keyed by `TxHash`), errors, invariants
//! - **Algorithms**: non-anchor ancestor selection, Kahn's sort, the single-use calculator
//! - **Ports**: Inbound (`TransactionOrderingApi`) and Outbound (`TransactionGraph`)
//! - **Application**: `TransactionOrderingService`, a lock-guarded shared graph
//!
//! ## Anchors
//!
//! A node with no pool-internal parent is an *anchor*: everything it spends is
//! already settled outside the pool. Anchors are only emitted when explicitly
//! requested.
//!
//! ```text
//!   4 ──► 1 ──► 5 ◄── 2
//!   └──────────►┘ ◄── 3
//!
//!   enqueue(5)  =>  [1, 5]     (4, 2, 3 are anchors)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut calculator = TransactionOrderCalculator::new(&graph);
//! calculator.enqueue(child)?;
//! let ordered = calculator.order_transactions()?;
//! ```

#![warn(clippy::unwrap_used, clippy::expect_used)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use algorithms::TransactionOrderCalculator;
pub use application::service::TransactionOrderingService;
pub use config::OrderingConfig;
pub use domain::entities::*;
pub use domain::errors::OrderingError;
pub use domain::value_objects::*;
pub use ports::inbound::TransactionOrderingApi;
pub use ports::outbound::TransactionGraph;
