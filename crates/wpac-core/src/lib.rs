pub mod config;
pub mod dispatch;
pub mod logging;
pub mod model;
pub mod render;
pub mod session;
pub mod url_check;
