//! Test utilities for Hetiograph integration tests
//!
//! TestFixture builds graphs through the public GraphCoordinator API only,
//! each in its own temporary database directory.

pub mod test_fixture;
