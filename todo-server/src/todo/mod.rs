use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

pub mod page;
pub mod table;
pub mod web;

pub use table::TodoTable;

/// Priority attached to a todo item.
#[derive(Debug, Default, PartialEq, Clone, Copy, Eq, Hash)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Returns the lowercase form stored in the database and used in CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Returns the capitalized label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Interprets a submitted form value.
    ///
    /// Missing, blank, or unrecognized values fall back to [`Priority::Medium`].
    pub fn from_form_value(value: Option<&str>) -> Self {
        value
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown priority '{0}'")]
pub struct UnknownPriority(String);

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(UnknownPriority(value.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Eq, Hash)]
pub struct Todo {
    id: u32,
    title: String,
    done: bool,
    priority: Priority,
    created_at: NaiveDate,
}

impl Todo {
    pub fn new(
        id: u32,
        title: String,
        done: bool,
        priority: Priority,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id,
            title,
            done,
            priority,
            created_at,
        }
    }

    /// Returns the ID of the todo.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the title of the todo.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the todo has been completed.
    pub fn done(&self) -> bool {
        self.done
    }

    /// Returns the priority of the todo.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the date the todo was created.
    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    /// Returns a copy of this todo with the completion flag flipped.
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }
}

/// A todo that has not been stored yet, so it has no ID.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct NewTodo {
    pub title: String,
    pub done: bool,
    pub priority: Priority,
    pub created_at: NaiveDate,
}

impl NewTodo {
    /// Creates a pending todo.
    pub fn pending(title: impl Into<String>, priority: Priority, created_at: NaiveDate) -> Self {
        Self {
            title: title.into(),
            done: false,
            priority,
            created_at,
        }
    }
}

/// Error type for TodoService operations.
#[derive(Debug, thiserror::Error)]
pub enum TodoServiceError {
    /// Represents a database error.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub struct TodoService<'a> {
    table: TodoTable<'a>,
}

impl TodoService<'_> {
    pub fn new(db: &sea_orm::DatabaseConnection) -> TodoService<'_> {
        TodoService {
            table: TodoTable::new(db),
        }
    }

    /// Retrieves every todo in insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoServiceError> {
        Ok(self.table.list_all().await?)
    }

    /// Creates a new pending todo dated today.
    ///
    /// # Arguments
    ///
    /// * `title` - The raw title submitted by the user. Surrounding whitespace is trimmed.
    /// * `priority` - The priority of the new todo.
    ///
    /// # Returns
    ///
    /// The created `Todo`, or `None` when the trimmed title is empty and nothing was stored.
    #[tracing::instrument(skip(self))]
    pub async fn add_todo(
        &self,
        title: &str,
        priority: Priority,
    ) -> Result<Option<Todo>, TodoServiceError> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        let today = chrono::Local::now().date_naive();
        let created = self
            .table
            .insert(NewTodo::pending(title, priority, today))
            .await?;
        Ok(Some(created))
    }

    /// Flips the completion flag of a todo.
    ///
    /// # Returns
    ///
    /// The updated `Todo`, or `None` if no todo has the given ID.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_todo(&self, id: u32) -> Result<Option<Todo>, TodoServiceError> {
        let Some(todo) = self.table.get_by_id(id).await? else {
            return Ok(None);
        };

        let toggled = todo.toggled();
        self.table.update(&toggled).await?;
        Ok(Some(toggled))
    }

    /// Deletes a todo by its ID.
    ///
    /// # Returns
    ///
    /// `true` if a todo was removed, `false` if none had the given ID.
    #[tracing::instrument(skip(self))]
    pub async fn delete_todo(&self, id: u32) -> Result<bool, TodoServiceError> {
        Ok(self.table.delete_by_id(id).await?)
    }

    /// Inserts the sample todos when the table is empty.
    #[tracing::instrument(skip(self))]
    pub async fn seed_sample_todos(&self) -> Result<usize, TodoServiceError> {
        let seeded = self.table.seed_if_empty().await?;
        if seeded > 0 {
            tracing::info!("Seeded {} sample todos", seeded);
        }
        Ok(seeded)
    }
}
