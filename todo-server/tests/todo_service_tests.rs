use todo_server::todo::{Priority, Todo, TodoService};

mod common;

use common::setup;

fn find_by_title<'a>(todos: &'a [Todo], title: &str) -> &'a Todo {
    todos
        .iter()
        .find(|todo| todo.title() == title)
        .unwrap_or_else(|| panic!("No todo titled {title}"))
}

#[tokio::test]
async fn lists_seeded_todos_on_fresh_store() {
    let context = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&context.db);

    todo_service.seed_sample_todos().await.unwrap();
    let todos = todo_service.list_todos().await.unwrap();

    let summary: Vec<(&str, Priority, bool)> = todos
        .iter()
        .map(|todo| (todo.title(), todo.priority(), todo.done()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Learn FastHTML", Priority::High, false),
            ("Build a web app", Priority::Medium, false),
            ("Deploy with Docker", Priority::Low, false),
        ]
    );
}

#[tokio::test]
async fn can_add_todo_after_seeding() {
    let context = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&context.db);
    todo_service.seed_sample_todos().await.unwrap();

    let created = todo_service
        .add_todo("Write tests", Priority::Low)
        .await
        .expect("Failed to add todo")
        .expect("Todo should have been created");
    let today = chrono::Local::now().date_naive();

    let todos = todo_service.list_todos().await.unwrap();
    assert_eq!(todos.len(), 4);
    assert_eq!(
        todos[3],
        Todo::new(created.id(), "Write tests".to_string(), false, Priority::Low, today)
    );
}

#[tokio::test]
async fn trims_title_before_storing() {
    let context = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&context.db);

    let created = todo_service
        .add_todo("  Buy milk \n", Priority::High)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(created.title(), "Buy milk");
}

#[tokio::test]
async fn ignores_blank_titles() {
    let context = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&context.db);
    todo_service.seed_sample_todos().await.unwrap();

    for title in ["", "   ", "\t\n"] {
        let created = todo_service.add_todo(title, Priority::High).await.unwrap();
        assert_eq!(created, None);
    }

    assert_eq!(todo_service.list_todos().await.unwrap().len(), 3);
}

#[tokio::test]
async fn toggle_flips_only_the_target_todo() {
    let context = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&context.db);
    todo_service.seed_sample_todos().await.unwrap();
    let before = todo_service.list_todos().await.unwrap();
    let target = find_by_title(&before, "Learn FastHTML").clone();

    let toggled = todo_service.toggle_todo(target.id()).await.unwrap();
    assert_eq!(toggled, Some(target.toggled()));

    let after = todo_service.list_todos().await.unwrap();
    let expected: Vec<Todo> = before
        .iter()
        .map(|todo| {
            if todo.id() == target.id() {
                todo.toggled()
            } else {
                todo.clone()
            }
        })
        .collect();
    assert_eq!(after, expected);
    assert!(find_by_title(&after, "Learn FastHTML").done());
}

#[tokio::test]
async fn toggling_twice_restores_original_state() {
    let context = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&context.db);
    todo_service.seed_sample_todos().await.unwrap();
    let before = todo_service.list_todos().await.unwrap();
    let target = find_by_title(&before, "Learn FastHTML");

    todo_service.toggle_todo(target.id()).await.unwrap();
    todo_service.toggle_todo(target.id()).await.unwrap();

    assert_eq!(todo_service.list_todos().await.unwrap(), before);
}

#[tokio::test]
async fn toggle_and_delete_ignore_unknown_ids() {
    let context = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&context.db);
    todo_service.seed_sample_todos().await.unwrap();
    let before = todo_service.list_todos().await.unwrap();
    let unknown_id = before.iter().map(Todo::id).max().unwrap() + 100;

    assert_eq!(todo_service.toggle_todo(unknown_id).await.unwrap(), None);
    assert!(!todo_service.delete_todo(unknown_id).await.unwrap());

    assert_eq!(todo_service.list_todos().await.unwrap(), before);
}

#[tokio::test]
async fn delete_removes_exactly_one_todo() {
    let context = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&context.db);
    todo_service.seed_sample_todos().await.unwrap();
    let before = todo_service.list_todos().await.unwrap();
    let target_id = find_by_title(&before, "Build a web app").id();

    assert!(todo_service.delete_todo(target_id).await.unwrap());
    assert!(!todo_service.delete_todo(target_id).await.unwrap());

    let after = todo_service.list_todos().await.unwrap();
    assert_eq!(after.len(), before.len() - 1);
    assert!(after.iter().all(|todo| todo.id() != target_id));
    let expected: Vec<Todo> = before
        .into_iter()
        .filter(|todo| todo.id() != target_id)
        .collect();
    assert_eq!(after, expected);
}

#[tokio::test]
async fn seeding_is_skipped_after_todos_are_deleted_down_to_one() {
    let context = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&context.db);
    assert_eq!(todo_service.seed_sample_todos().await.unwrap(), 3);

    let todos = todo_service.list_todos().await.unwrap();
    for todo in &todos[1..] {
        todo_service.delete_todo(todo.id()).await.unwrap();
    }

    assert_eq!(todo_service.seed_sample_todos().await.unwrap(), 0);
    assert_eq!(todo_service.list_todos().await.unwrap().len(), 1);
}
