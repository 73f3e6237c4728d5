mod analyze;
mod check;

pub use analyze::run_analyze;
pub use check::run_check;
