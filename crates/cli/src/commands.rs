//! Subcommands of the `arena` binary.

use std::sync::Arc;

use anyhow::{Context, Result};
use battle_content::{ConfigLoader, RosterLoader};
use battle_core::{BattleConfig, CharacterId};
use battle_runtime::{
    BattleRepository, BattleService, CharacterOracleImpl, FileBattleRepository,
    InMemoryBattleRepo,
};
use clap::Subcommand;
use serde::Serialize;

use crate::config::ArenaConfig;

#[derive(Subcommand)]
pub enum Command {
    /// List the character catalog
    Catalog,

    /// List accepted attack tokens and button combinations
    Attacks,

    /// Run an instant 3v3 tournament
    Tournament {
        /// Hero ids, comma separated (e.g. 1,2,3)
        #[arg(value_delimiter = ',', value_name = "HEROES")]
        heroes: Vec<u32>,
        /// Villain ids, comma separated (e.g. 11,12,13)
        #[arg(long, short, value_delimiter = ',', value_name = "VILLAINS")]
        villains: Vec<u32>,
    },

    /// Run an instant 1v1 duel
    Duel { hero: u32, villain: u32 },

    /// Register the teams of the next scripted battle
    Teams {
        #[arg(value_delimiter = ',', value_name = "HEROES")]
        heroes: Vec<u32>,
        #[arg(long, short, value_delimiter = ',', value_name = "VILLAINS")]
        villains: Vec<u32>,
    },

    /// Show the pending team registration
    Pending,

    /// Fix the fighting order and create the scripted battle
    Order {
        /// Battle id; generated when omitted
        #[arg(long, default_value = "")]
        id: String,
        #[arg(value_delimiter = ',', value_name = "HEROES")]
        heroes: Vec<u32>,
        #[arg(long, short, value_delimiter = ',', value_name = "VILLAINS")]
        villains: Vec<u32>,
    },

    /// Submit one exchange of a scripted battle
    Attack {
        battle: String,
        round: u8,
        /// basico | especial | critico, or a Y/X/A/B combination
        hero: String,
        villain: String,
    },

    /// Show the state of a scripted battle
    Summary { battle: String },

    /// Show every attack applied in a scripted battle
    Log { battle: String },

    /// Show final results of a finished battle
    Results { battle: String },

    /// List stored battles
    Battles,

    /// Delete a stored battle
    Delete { battle: String },
}

impl Command {
    pub fn execute(self, config: &ArenaConfig) -> Result<()> {
        let service = build_service(config)?;
        match self {
            Command::Catalog => print_json(&service.characters()?),
            Command::Attacks => print_json(&service.attack_catalog()),
            Command::Tournament { heroes, villains } => {
                let (heroes, villains) = (ids(heroes), ids(villains));
                let result = match config.seed {
                    Some(seed) => service.simulate_team_battle_with_seed(&heroes, &villains, seed),
                    None => service.simulate_team_battle(&heroes, &villains),
                }?;
                print_json(&result)
            }
            Command::Duel { hero, villain } => {
                let (hero, villain) = (CharacterId(hero), CharacterId(villain));
                let result = match config.seed {
                    Some(seed) => service.simulate_duel_with_seed(hero, villain, seed),
                    None => service.simulate_duel(hero, villain),
                }?;
                print_json(&result)
            }
            Command::Teams { heroes, villains } => {
                print_json(&service.register_teams(ids(heroes), ids(villains))?)
            }
            Command::Pending => print_json(&service.registered_teams()?),
            Command::Order {
                id,
                heroes,
                villains,
            } => print_json(&service.register_order(&id, ids(heroes), ids(villains))?),
            Command::Attack {
                battle,
                round,
                hero,
                villain,
            } => print_json(&service.resolve_attack(&battle, round, &hero, &villain)?),
            Command::Summary { battle } => print_json(&service.battle_summary(&battle)?),
            Command::Log { battle } => print_json(&service.battle_log(&battle)?),
            Command::Results { battle } => print_json(&service.round_results(&battle)?),
            Command::Battles => print_json(&service.list_battles()?),
            Command::Delete { battle } => {
                service.delete_battle(&battle)?;
                print_json(&serde_json::json!({ "deleted": battle }))
            }
        }
    }
}

fn build_service(config: &ArenaConfig) -> Result<BattleService> {
    let oracle = load_oracle(config)?;

    let rules = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => BattleConfig::default(),
    };

    let repo: Arc<dyn BattleRepository> = if config.persist {
        let dir = config.resolved_data_dir();
        let repo = FileBattleRepository::new(&dir)
            .with_context(|| format!("Failed to open battle store at {}", dir.display()))?;
        tracing::debug!("Battle store at {}", dir.display());
        Arc::new(repo)
    } else {
        Arc::new(InMemoryBattleRepo::new())
    };

    Ok(BattleService::new(Arc::new(oracle), repo, rules))
}

fn load_oracle(config: &ArenaConfig) -> Result<CharacterOracleImpl> {
    let oracle = match &config.roster_path {
        Some(path) => CharacterOracleImpl::from_profiles(RosterLoader::load(path)?),
        None => CharacterOracleImpl::default_catalog()?,
    };
    tracing::debug!("Loaded {} characters", oracle.len());
    Ok(oracle)
}

fn ids(raw: Vec<u32>) -> Vec<CharacterId> {
    raw.into_iter().map(CharacterId).collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{json}");
    Ok(())
}
