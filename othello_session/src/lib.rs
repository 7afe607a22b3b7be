mod config;
mod high_score;
mod session;
pub use config::*;
pub use high_score::*;
pub use session::*;
