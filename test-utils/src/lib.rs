//! Relay Bot Test Utils
//!
//! Provides shared testing utilities for the relay bot. The central piece is
//! [`gateway::FakeGateway`], an in-memory [`dmrelay::relay::RelayGateway`]
//! implementation that records every outbound call and serves scripted thread
//! listings, so routing invariants can be asserted without a live Discord
//! connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::gateway::FakeGateway;
//!
//! #[tokio::test]
//! async fn relays_first_message() {
//!     let gateway = FakeGateway::new();
//!     // drive the router against the fake...
//!     assert_eq!(gateway.created().len(), 1);
//! }
//! ```

pub mod factory;
pub mod gateway;
