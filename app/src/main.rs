//! CLI demo for the task-list feature.
//!
//! Synchronizes with the remote task store named by `TASKS_API_URL`, creates
//! a task, and toggles it locally.

use std::sync::Arc;

use taskboard::{TaskListAction, TaskListEnvironment, TaskListReducer, TaskListState};
use taskboard_api::TasksClient;
use taskboard_core::environment::SystemClock;
use taskboard_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type TaskStore = Store<TaskListState, TaskListAction, TaskListEnvironment, TaskListReducer>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard=debug,taskboard_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Taskboard ===\n");

    // Create environment and store
    let client = TasksClient::from_env()?;
    let env = TaskListEnvironment::new(Arc::new(client), Arc::new(SystemClock));
    let store = Store::new(TaskListState::new(), TaskListReducer::new(), env);

    // Initial sync with the remote store
    println!("Fetching tasks...");
    let mut handle = store.send(TaskListAction::FetchTasks).await?;
    handle.wait().await;
    print_snapshot(&store).await;

    // Create a task; the server assigns its identifier
    println!("\nCreating 'Buy milk'...");
    store
        .send(TaskListAction::TitleChanged {
            title: "Buy milk".to_string(),
        })
        .await?;
    let mut handle = store
        .send(TaskListAction::CreateTask {
            title: "Buy milk".to_string(),
        })
        .await?;
    handle.wait().await;
    print_snapshot(&store).await;

    // Toggle the newest task locally; the toggle never reaches the server
    if let Some(id) = store.state(|s| s.tasks.last().map(|t| t.id)).await {
        println!("\nToggling #{id} locally...");
        store.send(TaskListAction::ToggleDone { id }).await?;
    }
    print_snapshot(&store).await;

    Ok(())
}

async fn print_snapshot(store: &TaskStore) {
    let (snapshot, stats) = store.state(|s| (s.clone(), s.stats())).await;

    if let Some(error) = &snapshot.error {
        println!("  error: {error}");
    }

    for task in &snapshot.tasks {
        let mark = if task.done { "✓" } else { " " };
        println!("  [{mark}] #{} {}", task.id, task.title);
    }
    println!(
        "  {} of {} done ({}%)",
        stats.completed, stats.total, stats.percent
    );
}
