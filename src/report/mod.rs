mod json;
mod markdown;

pub use json::JsonReport;
pub use markdown::MarkdownReport;
