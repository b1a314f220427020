//! Live-update tests

mod broadcast_test;
