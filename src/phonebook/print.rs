use colored::Colorize;
use phonebook::api::{CmdMessage, MessageLevel, Page};
use phonebook::config::PhonebookConfig;
use phonebook::model::{Field, Record};
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = "|";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Left-align `value` in a cell `width` columns wide.
pub(crate) fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.width());
    format!("{}{}", value, " ".repeat(fill))
}

pub(crate) fn format_row<'a>(values: impl IntoIterator<Item = &'a str>, width: usize) -> String {
    values
        .into_iter()
        .map(|v| pad(v, width))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

pub(crate) fn print_table(records: &[Record], width: usize) {
    println!("{}", format_row(Field::header(), width).bold());
    for record in records {
        let values = record.values();
        println!("{}", format_row(values.iter().map(|v| &**v), width));
    }
}

pub(crate) fn print_records(records: &[Record], width: usize) {
    if records.is_empty() {
        println!("No records found.");
        return;
    }
    print_table(records, width);
}

pub(crate) fn print_page(records: &[Record], page: &Page, width: usize) {
    println!(
        "{}",
        format!(
            "Phonebook (page {} of {}, {} records)",
            page.number, page.total_pages, page.total_records
        )
        .dimmed()
    );
    println!();
    print_table(records, width);
}

pub(crate) fn print_fields(fields: &[Field]) {
    for field in fields {
        println!("{}", field);
    }
}

pub(crate) fn print_config(config: &PhonebookConfig) {
    println!("column_width = {}", config.column_width);
    println!("records_per_page = {}", config.records_per_page);
    println!("search_strict = {}", config.search_strict);
    println!("search_case_sensitive = {}", config.search_case_sensitive);
}
