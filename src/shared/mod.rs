//! Shared Module
//!
//! This module contains the types that make up the forum's public contract:
//! the records returned by the REST API, the request bodies it accepts, the
//! events pushed over the live-update channel, and the application
//! configuration.
//!
//! # Overview
//!
//! Nothing in here touches the network or the database. The backend builds on
//! these types, and anything that wants to talk to the server (test clients,
//! tooling) can depend on them without pulling in axum or sqlx.

/// Question records and creation payloads
pub mod question;

/// Answer records and creation payloads
pub mod answer;

/// Live-update event wire format
pub mod event;

/// Tag parsing and popularity counting
pub mod tags;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use question::{NewQuestion, Question, QuestionId};
pub use answer::{Answer, AnswerId, NewAnswer, NewAnswerBody};
pub use event::{LiveEvent, NewAnswerPayload, CONNECTED_MESSAGE};
pub use tags::{popular_tags, TagCount};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
