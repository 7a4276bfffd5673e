mod dispatch;
mod print;

pub use dispatch::{invoke_action, Action};
pub use print::{print_error, print_result};
