use chrono::NaiveDate;
use chrono_humanize::Humanize;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use scheduler_core::date::parse_date;
use scheduler_core::models::Task;

fn display_date(date: &str) -> String {
    parse_date(date)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| date.to_string())
}

fn due_cell(date: &str, today: NaiveDate) -> Cell {
    let Some(due) = parse_date(date) else {
        return Cell::new("Unknown");
    };

    if due == today {
        Cell::new("today").fg(Color::Yellow)
    } else if due < today {
        Cell::new((due - today).humanize()).fg(Color::Red) // Overdue
    } else {
        Cell::new((due - today).humanize())
    }
}

fn title_cell(task: &Task) -> Cell {
    if task.is_recurring() {
        Cell::new(format!("↻ {}", task.title)).add_attribute(Attribute::Bold)
    } else {
        Cell::new(&task.title)
    }
}

pub fn display_tasks(tasks: &[Task], today: NaiveDate) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Due", "Title", "Repeat", "Comment"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(task.id));
        row.add_cell(Cell::new(display_date(&task.date)));
        row.add_cell(due_cell(&task.date, today));
        row.add_cell(title_cell(task));
        row.add_cell(Cell::new(if task.repeat.is_empty() { "-" } else { task.repeat.as_str() }));
        row.add_cell(Cell::new(&task.comment));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_task(task: &Task, today: NaiveDate) {
    let mut table = Table::new();
    table.add_row(vec![Cell::new("ID"), Cell::new(task.id)]);
    table.add_row(vec![Cell::new("Title"), title_cell(task)]);
    table.add_row(vec![Cell::new("Date"), Cell::new(display_date(&task.date))]);
    table.add_row(vec![Cell::new("Due"), due_cell(&task.date, today)]);
    table.add_row(vec![
        Cell::new("Repeat"),
        Cell::new(if task.repeat.is_empty() { "None" } else { task.repeat.as_str() }),
    ]);
    table.add_row(vec![Cell::new("Comment"), Cell::new(&task.comment)]);

    println!("{table}");
}
