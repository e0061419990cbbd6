/*
[INPUT]:  Public API exports for binance-futures-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod cli;
pub mod config;
pub mod order_log;
pub mod report;
pub mod submit;
pub mod validation;

// Re-export main types for convenience
pub use cli::Cli;
pub use config::BotConfig;
pub use order_log::FileOrderLog;
pub use submit::submit_order;
