//! Integration tests

mod common;

mod alerts_test;
mod config_test;
mod execution_test;
mod persistence_test;
mod signal_test;
