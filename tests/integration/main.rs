//! Integration tests for vtb

mod cli_test;
mod controller_test;
mod data_test;
mod helpers;
mod timeline_test;
