//! Builds a given/when/then suite and runs its blocks in declaration order.
//!
//! Later `when` blocks continue from the state left by earlier ones, so the
//! suite must never be run in parallel.

use std::fmt::Debug;
use std::io;
use std::sync::Arc;

use rspec::block::Context;
use rspec::{ConfigurationBuilder, Logger, Runner};

/// Runs `body` against `env` as one ordered scenario, exiting the test
/// process on the first failed expectation.
pub fn run_in_order<T, F>(description: &'static str, env: T, body: F)
where
    T: Clone + Send + Sync + Debug + 'static,
    F: FnOnce(&mut Context<T>),
{
    let suite = rspec::given(description, env, body);
    let sequential = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid scenario configuration: {e}"));
    let stdout_logger = Arc::new(Logger::new(io::stdout()));
    Runner::new(sequential, vec![stdout_logger]).run(&suite);
}
