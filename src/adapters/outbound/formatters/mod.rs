/// Report formatters
mod html_formatter;

pub use html_formatter::HtmlFormatter;
