mod play;
mod self_play;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_engine::config::{
    ConfigManager, DEFAULT_CONFIG_FILE_NAME, FileContentConfigProvider, GameConfig, OpponentKind,
    YamlConfigSerializer,
};
use tictactoe_engine::logger::{self, LogLevel};
use tictactoe_engine::tictactoe::Side;
use tictactoe_engine::{SessionRng, log};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(author, version, about = "Tic-tac-toe against a minimax engine", long_about = None)]
struct Cli {
    /// Path to the YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log search details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game on the terminal
    Play {
        #[arg(long, value_enum)]
        human_side: Option<SideArg>,
        #[arg(long, value_enum)]
        opponent: Option<OpponentArg>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Let the engine play against itself and print a tally
    SelfPlay {
        #[arg(long, default_value_t = 10)]
        games: u32,
        /// Second side plays random moves instead of optimal ones
        #[arg(long)]
        random_second: bool,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write the default config file
    InitConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    First,
    Second,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::First => Side::First,
            SideArg::Second => Side::Second,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OpponentArg {
    Optimal,
    Random,
}

impl From<OpponentArg> for OpponentKind {
    fn from(arg: OpponentArg) -> Self {
        match arg {
            OpponentArg::Optimal => OpponentKind::Optimal,
            OpponentArg::Random => OpponentKind::Random,
        }
    }
}

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(DEFAULT_CONFIG_FILE_NAME);
    }
    PathBuf::from(DEFAULT_CONFIG_FILE_NAME)
}

fn session_rng(seed: Option<u64>) -> SessionRng {
    seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random)
}

/// Overwrites whatever is at `path` with the default config, without
/// reading it first, so a broken file can be replaced.
fn init_config(path: &Path) -> Result<(), String> {
    let config_manager: ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> =
        ConfigManager::from_yaml_file(path);
    config_manager.set_config(&GameConfig::default())
}

fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = cli.config.unwrap_or_else(get_config_path);

    if matches!(cli.command, Some(Commands::InitConfig)) {
        logger::init_logger(None, LogLevel::Info);
        init_config(&config_path)?;
        log!("Wrote default config to {}", config_path.display());
        println!("Wrote {}", config_path.display());
        return Ok(());
    }

    let config_manager: ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> =
        ConfigManager::from_yaml_file(&config_path);
    let mut config = config_manager.get_config()?;

    let level = if cli.verbose || config.debug_log {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    logger::init_logger(config.log_prefix.clone(), level);

    match cli.command {
        Some(Commands::Play {
            human_side,
            opponent,
            seed,
        }) => {
            if let Some(side) = human_side {
                config.human_side = side.into();
            }
            if let Some(opponent) = opponent {
                config.opponent = opponent.into();
            }
            if seed.is_some() {
                config.seed = seed;
            }
            play::run(&config, session_rng(config.seed))?;
        }
        Some(Commands::SelfPlay {
            games,
            random_second,
            seed,
        }) => {
            let tally = self_play::run(games, random_second, session_rng(seed.or(config.seed)));
            println!("{}", tally);
        }
        Some(Commands::InitConfig) | None => {
            play::run(&config, session_rng(config.seed))?;
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dispatch(Cli::parse())
}
