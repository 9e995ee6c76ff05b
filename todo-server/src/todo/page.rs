use askama::Template;

use crate::todo::Todo;

#[derive(Template)]
#[template(path = "todos/index.html")]
struct TodoPageTemplate<'a> {
    todos: &'a [Todo],
}

impl<'a> TodoPageTemplate<'a> {
    pub fn new(todos: &'a [Todo]) -> Self {
        Self { todos }
    }
}

/// Renders the full todo page: the add form followed by every todo in the given order.
pub fn render_todo_page(todos: &[Todo]) -> Result<String, askama::Error> {
    TodoPageTemplate::new(todos).render()
}

impl Todo {
    /// CSS classes for the todo's container.
    pub fn css_classes(&self) -> String {
        let mut classes = format!("todo-item priority-{}", self.priority());
        if self.done() {
            classes.push_str(" todo-done");
        }
        classes
    }

    /// Text of the toggle button.
    pub fn toggle_label(&self) -> &'static str {
        if self.done() { "↺" } else { "✓" }
    }

    /// CSS classes of the toggle button.
    pub fn toggle_button_class(&self) -> &'static str {
        if self.done() {
            "btn btn-warning"
        } else {
            "btn btn-success"
        }
    }
}
