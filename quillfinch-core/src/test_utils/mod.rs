/*
    Test utilities shared across test modules
*/

pub mod fixtures;

pub use fixtures::{TestPostBuilder, TestUserBuilder};
