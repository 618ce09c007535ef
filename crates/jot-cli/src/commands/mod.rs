mod add;
pub mod common;
mod completions;
mod delete;
mod edit;
mod filter;
mod list;
mod show;

pub use add::run_add;
pub use completions::run_completions;
pub use delete::run_delete;
pub use edit::run_edit;
pub use filter::run_filter;
pub use list::run_list;
pub use show::run_show;
