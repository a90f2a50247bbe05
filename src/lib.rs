pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod prompts;
pub mod client;
pub mod web;

/*

sealion-review: paste code into a web form, have a hosted Sea-Lion
model report bugs, improvements and style problems, then ask it for
a rewrite that takes those reports into account.

sealion-review/
├── Cargo.toml
├── static/index.html   # The form served at /
├── src/
│   ├── lib.rs          # Re-exports
│   ├── main.rs         # Loads .env, starts logging, serves the form
│   ├── error.rs        # Error type and display flattening
│   ├── config.rs       # Endpoint, model, timeout, port
│   ├── request.rs      # Chat-completion wire types
│   ├── providers/      # Completion backends
│   │   ├── mod.rs      # CompletionBackend trait
│   │   └── sealion.rs  # Hosted Sea-Lion API client
│   ├── prompts.rs      # The four fixed prompts
│   ├── client.rs       # review / apply_rewrite facade
│   └── web.rs          # axum router and handlers
└── tests/

*/

pub use client::{Review, Reviewer};
pub use config::AppConfig;
pub use error::Error;
pub use providers::{CompletionBackend, SeaLionClient};
pub use request::{ChatMessage, Role};

/// Outcome of one completion call: the trimmed reply or a typed failure
pub type CompletionReply = Result<String, crate::error::Error>;
