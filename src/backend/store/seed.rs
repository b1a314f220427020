//! Sample data for a fresh forum.
//!
//! Seeding only runs against an empty store, so restarting a server backed by
//! PostgreSQL never duplicates the sample questions.

use super::{ForumStore, StoreResult};
use crate::shared::{NewAnswer, NewQuestion};

struct SampleThread {
    title: &'static str,
    description: &'static str,
    tags: &'static str,
    answers: &'static [&'static str],
}

const SAMPLE_THREADS: &[SampleThread] = &[
    SampleThread {
        title: "How do I implement authentication with JWT in Node.js?",
        description: "I'm building a REST API with Express and need user authentication. \
            How should tokens be issued, stored, validated and refreshed?",
        tags: "javascript,node.js,authentication,jwt,express",
        answers: &[
            "Sign a short-lived access token on login with `jsonwebtoken`, verify it in a \
             middleware that reads the Authorization header, and keep a revocable refresh \
             token in an HTTP-only cookie.",
            "Passport's `passport-jwt` strategy keeps the verification logic modular. \
             Plan for token revocation early if the application handles sensitive data.",
            "Keep claims small, never put secrets in the payload, add a `jti` claim so \
             tokens can be revoked, and add CSRF protection if tokens travel in cookies.",
        ],
    },
    SampleThread {
        title: "What's the best way to manage state in a large React application?",
        description: "Prop drilling is getting out of hand. Should I use Redux, the Context \
            API, or something else for a large codebase?",
        tags: "react,javascript,state-management,redux,frontend",
        answers: &[
            "Mix approaches: local state for UI details, context for rarely changing \
             globals, Redux Toolkit for shared domain state, and React Query for server state.",
            "Zustand gives you a hook-based store with no providers and very little \
             boilerplate, and it scales fine to large component trees.",
        ],
    },
    SampleThread {
        title: "How to optimize PostgreSQL queries for better performance?",
        description: "Some queries slow down as data grows. Basic indexes are in place. \
            What else should I look at, both in queries and in server configuration?",
        tags: "postgresql,database,performance,sql,optimization",
        answers: &[
            "Start with EXPLAIN ANALYZE, add composite and partial indexes for your real \
             filters, avoid SELECT *, and only then tune shared_buffers and work_mem.",
            "For very large tables look at partitioning, BRIN indexes for ordered data, \
             materialized views for reports, and pg_stat_statements to find the worst queries.",
        ],
    },
    SampleThread {
        title: "Best practices for microservices architecture?",
        description: "We are splitting a monolith. How do we draw service boundaries, pick \
            communication patterns, and handle distributed transactions?",
        tags: "microservices,architecture,system-design,backend,devops",
        answers: &[
            "Align services with bounded contexts, give each its own data, use sagas for \
             cross-service workflows, and invest in tracing and centralized logs early.",
            "Migrate gradually with the strangler pattern and keep the first services \
             coarse. Too many tiny services too early is the most common mistake.",
        ],
    },
    SampleThread {
        title: "How to implement real-time features with WebSockets?",
        description: "I need live notifications and collaborative editing. Socket.IO or \
            plain WebSockets? How do I manage connections and scale across servers?",
        tags: "websockets,real-time,javascript,socket.io,node.js",
        answers: &[
            "Plain WebSockets are enough for server push. Add heartbeats to detect dead \
             connections and a pub/sub backbone such as Redis once you run several servers.",
            "For collaborative editing you also need conflict resolution. CRDT libraries \
             like Yjs or Automerge handle concurrent edits and offline sync.",
        ],
    },
];

/// Insert the sample threads if the store has no questions yet
///
/// Returns the number of questions created.
pub async fn seed_sample_data(store: &dyn ForumStore) -> StoreResult<usize> {
    if !store.all_questions().await?.is_empty() {
        tracing::debug!("Store already has questions, skipping sample data");
        return Ok(0);
    }

    for thread in SAMPLE_THREADS {
        let question = store
            .create_question(NewQuestion::new(
                thread.title,
                thread.description,
                Some(thread.tags.to_string()),
            ))
            .await?;

        for text in thread.answers {
            store.create_answer(NewAnswer::new(question.id, *text)).await?;
        }
    }

    tracing::info!("Seeded {} sample questions", SAMPLE_THREADS.len());
    Ok(SAMPLE_THREADS.len())
}
