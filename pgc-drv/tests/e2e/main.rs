//! End-to-end tests driving the `pgc` binary over the §8 boundary
//! scenarios and the CLI surface around it.

mod cli_tests;
mod compilation_tests;