pub mod repl;
pub mod setup;
pub mod task;
pub mod turn;

pub use repl::run_repl_mode;
pub use setup::{open_session_log, setup_from_cli, AppConfig};
pub use task::run_task_mode;
pub use turn::answer_turn;
