mod command;
mod config;
mod game_loop;
mod render;
mod score_keeper;
mod setup;

use clap::Parser;
use std::path::{Path, PathBuf};
use tictactoe_common::config::Validate;
use tictactoe_common::{log, logger};

use config::{Config, GameMode, get_config_manager, load_config, resolve_path};
use game_loop::GameLoop;
use score_keeper::FileScoreKeeper;
use setup::MatchSettings;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-Tac-Toe for two players or against a minimax AI")]
struct Args {
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    #[arg(long)]
    player1: Option<String>,

    #[arg(long)]
    player2: Option<String>,

    /// Settings file, relative to the executable unless absolute.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    ai_delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    /// Overrides apply to this run only and are never saved.
    fn apply_to(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(ref name) = self.player1 {
            config.player1_name = name.clone();
        }
        if let Some(ref name) = self.player2 {
            config.player2_name = name.clone();
        }
        if let Some(delay) = self.ai_delay_ms {
            config.ai_delay_ms = delay;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = load_config(&config_manager);
    args.apply_to(&mut config);
    config.validate()?;

    let settings = MatchSettings::from_config(&config)?;

    let scores_path = resolve_path(Path::new(&config.scores_file));
    log!(
        "Starting {} game, scores in {}",
        settings.mode,
        scores_path.display()
    );

    let mut game = GameLoop::new(settings, FileScoreKeeper::new(scores_path));
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    game.run(stdin, &mut stdout).await?;

    log!("Goodbye");
    Ok(())
}
