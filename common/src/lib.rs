pub mod config;
pub mod engine;
pub mod logger;
pub mod scores;

pub use engine::tictactoe;
pub use scores::ScoreBoard;
