use axum::{
    Form, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::todo::page::render_todo_page;
use crate::todo::{Priority, TodoService, TodoServiceError};

#[derive(Debug, Deserialize)]
pub struct AddTodoForm {
    #[serde(default)]
    title: String,
    priority: Option<String>,
}

/// Custom error type for todo handler operations.
#[derive(Debug, thiserror::Error)]
enum TodoError {
    /// Represents an error during template rendering.
    #[error("Template rendering failed")]
    Template(#[from] askama::Error),
    /// Represents a todo service error.
    #[error("Todo service error")]
    Service(#[from] TodoServiceError),
}

impl axum::response::IntoResponse for TodoError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = ?self, "Failed to handle todo request");
        let user_facing_error_message =
            "An unexpected error occurred while processing your request. Please try again later.";
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!(
                "<h1>Internal Server Error</h1><p>{}</p>",
                user_facing_error_message
            )),
        )
            .into_response()
    }
}

#[derive(Clone, Debug)]
pub struct TodoState {
    pub db: Arc<sea_orm::DatabaseConnection>,
}

/// Handler for the / endpoint that renders every todo along with the add form.
#[tracing::instrument(skip(state))]
async fn index_handler(State(state): State<Arc<TodoState>>) -> Result<Html<String>, TodoError> {
    let todo_service = TodoService::new(&state.db);
    let todos = todo_service.list_todos().await?;
    let page = render_todo_page(&todos)?;
    Ok(Html(page))
}

/// Handler for adding a todo via POST request. A blank title is ignored.
#[tracing::instrument(skip(state))]
async fn add_todo_handler(
    State(state): State<Arc<TodoState>>,
    Form(form): Form<AddTodoForm>,
) -> Result<Redirect, TodoError> {
    let todo_service = TodoService::new(&state.db);
    let priority = Priority::from_form_value(form.priority.as_deref());
    todo_service.add_todo(&form.title, priority).await?;
    Ok(Redirect::to("/"))
}

/// Handler for flipping the completion state of a todo. Unknown IDs are ignored.
#[tracing::instrument(skip(state))]
async fn toggle_todo_handler(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<u32>,
) -> Result<Redirect, TodoError> {
    let todo_service = TodoService::new(&state.db);
    todo_service.toggle_todo(id).await?;
    Ok(Redirect::to("/"))
}

/// Handler for deleting a todo. Unknown IDs are ignored.
#[tracing::instrument(skip(state))]
async fn delete_todo_handler(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<u32>,
) -> Result<Redirect, TodoError> {
    let todo_service = TodoService::new(&state.db);
    todo_service.delete_todo(id).await?;
    Ok(Redirect::to("/"))
}

/// Creates and returns the todo router with all todo-related routes.
pub fn create_todo_router(state: Arc<TodoState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/add_todo", post(add_todo_handler))
        .route(
            "/toggle_todo/{id}",
            get(toggle_todo_handler).post(toggle_todo_handler),
        )
        .route(
            "/delete_todo/{id}",
            get(delete_todo_handler).post(delete_todo_handler),
        )
        .with_state(state)
}
