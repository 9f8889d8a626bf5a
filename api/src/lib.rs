//! # Remote Task Store Client
//!
//! Rust client for the remote task store HTTP API. The remote store is the
//! system of record for task identifiers and titles; completion flags are
//! local-only and never sent here.
//!
//! ## Example
//!
//! ```no_run
//! use taskboard_api::TasksClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from TASKS_API_URL environment variable
//!     let client = TasksClient::from_env()?;
//!
//!     // List the remote collection
//!     let tasks = client.list_tasks().await?;
//!     println!("{} tasks", tasks.len());
//!
//!     // Create a record; the server assigns the identifier
//!     let created = client.create_task("buy milk").await?;
//!     println!("created #{}", created.id);
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior
//!
//! - Two operations only: list and create (no remote update or delete)
//! - No retry, no timeout beyond the transport default; failures propagate
//!   immediately to the caller
//! - A JSON `null` or absent list body is treated as an empty collection

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::TasksClient;
pub use error::ApiError;
pub use types::{NewTask, Task, TaskId};
