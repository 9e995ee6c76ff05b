use chrono::NaiveDate;
use sea_orm::*;

use crate::entities::*;
use crate::todo::{NewTodo, Priority, Todo};

const SAMPLE_CREATED_AT: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => panic!("2024-01-01 is a valid date"),
};

const SAMPLE_TODOS: [(&str, Priority); 3] = [
    ("Learn FastHTML", Priority::High),
    ("Build a web app", Priority::Medium),
    ("Deploy with Docker", Priority::Low),
];

impl From<todo::Model> for Todo {
    fn from(model: todo::Model) -> Self {
        // Rows written outside this crate may carry any string.
        let priority: Priority = model.priority.parse().unwrap_or_default();
        Todo::new(
            model.id as u32,
            model.title,
            model.done,
            priority,
            model.created_at,
        )
    }
}

impl From<NewTodo> for todo::ActiveModel {
    fn from(new_todo: NewTodo) -> Self {
        todo::ActiveModel {
            title: ActiveValue::Set(new_todo.title),
            done: ActiveValue::Set(new_todo.done),
            priority: ActiveValue::Set(new_todo.priority.as_str().to_string()),
            created_at: ActiveValue::Set(new_todo.created_at),
            ..Default::default()
        }
    }
}

/// The persisted collection of todos.
///
/// Every call goes straight to the database; nothing is cached.
pub struct TodoTable<'a> {
    db: &'a sea_orm::DatabaseConnection,
}

impl TodoTable<'_> {
    pub fn new(db: &sea_orm::DatabaseConnection) -> TodoTable<'_> {
        TodoTable { db }
    }

    /// Returns every stored todo, oldest first.
    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Todo>, DbErr> {
        let todos = todo::Entity::find()
            .order_by_asc(todo::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Todo::from)
            .collect();
        Ok(todos)
    }

    /// Stores a new todo and returns it with its assigned ID.
    #[tracing::instrument(skip(self))]
    pub async fn insert(&self, new_todo: NewTodo) -> Result<Todo, DbErr> {
        let active_model = todo::ActiveModel::from(new_todo);
        let created_model = active_model.insert(self.db).await?;
        Ok(Todo::from(created_model))
    }

    /// Looks up a todo by its ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: u32) -> Result<Option<Todo>, DbErr> {
        let Ok(id) = i32::try_from(id) else {
            return Ok(None);
        };
        let model = todo::Entity::find_by_id(id).one(self.db).await?;
        Ok(model.map(Todo::from))
    }

    /// Writes every field of `todo` to the row with the same ID.
    ///
    /// Does nothing if that row no longer exists.
    #[tracing::instrument(skip(self))]
    pub async fn update(&self, todo: &Todo) -> Result<(), DbErr> {
        let Ok(id) = i32::try_from(todo.id()) else {
            return Ok(());
        };
        let active_model = todo::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(todo.title().to_string()),
            done: ActiveValue::Set(todo.done()),
            priority: ActiveValue::Set(todo.priority().as_str().to_string()),
            created_at: ActiveValue::Set(todo.created_at()),
        };
        match todo::Entity::update(active_model).exec(self.db).await {
            Ok(_) | Err(DbErr::RecordNotUpdated) => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Removes the todo with the given ID.
    ///
    /// Returns `true` if a row was deleted.
    #[tracing::instrument(skip(self))]
    pub async fn delete_by_id(&self, id: u32) -> Result<bool, DbErr> {
        let Ok(id) = i32::try_from(id) else {
            return Ok(false);
        };
        let result = todo::Entity::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Inserts the sample todos if the table holds no rows at all.
    ///
    /// Returns the number of todos inserted.
    #[tracing::instrument(skip(self))]
    pub async fn seed_if_empty(&self) -> Result<usize, DbErr> {
        if todo::Entity::find().count(self.db).await? > 0 {
            return Ok(0);
        }

        let models = SAMPLE_TODOS.into_iter().map(|(title, priority)| {
            todo::ActiveModel::from(NewTodo::pending(title, priority, SAMPLE_CREATED_AT))
        });
        todo::Entity::insert_many(models).exec(self.db).await?;
        Ok(SAMPLE_TODOS.len())
    }
}
