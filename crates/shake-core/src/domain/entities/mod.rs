pub mod common;
pub mod report;
pub mod template;

pub use common::RelativePath;
pub use report::ScaffoldReport;
pub use template::{TemplateEntry, TemplateFile};
