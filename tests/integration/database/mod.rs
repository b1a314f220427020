//! PostgreSQL store tests
