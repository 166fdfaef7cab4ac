//! # Transaction Order Calculator Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/
//! │   ├── fixtures.rs       # Pool graphs built from integer entry ids
//! │   └── integration/      # Ordering scenarios and pool flows
//! └── benches/              # Criterion benchmarks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p tx-order-tests
//!
//! # By category
//! cargo test -p tx-order-tests integration::scenarios
//! cargo test -p tx-order-tests integration::pool_flows
//!
//! # Benchmarks
//! cargo bench -p tx-order-tests
//! ```
