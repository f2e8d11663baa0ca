//! Session options shared by every subcommand.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Args;

use decon_content::ContentFactory;
use decon_core::ItemId;
use decon_runtime::{Session, SessionBuilder};

#[derive(Args)]
pub struct SessionArgs {
    /// Content directory holding items.ron, config.toml and party.ron
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "DECON_DATA_DIR",
        default_value = "crates/game/content/data",
        global = true
    )]
    data_dir: PathBuf,

    /// Session seed (random when omitted)
    #[arg(long, value_name = "SEED", global = true)]
    seed: Option<u64>,

    /// Set a party holding, overriding party.ron (repeatable)
    #[arg(long = "hold", value_name = "ID=QTY", value_parser = parse_pair::<u32, u32>, global = true)]
    holdings: Vec<(u32, u32)>,

    /// Set a game variable, overriding party.ron (repeatable)
    #[arg(long = "var", value_name = "ID=VALUE", value_parser = parse_pair::<u32, i64>, global = true)]
    variables: Vec<(u32, i64)>,
}

impl SessionArgs {
    pub fn build(&self) -> Result<Session> {
        let factory = ContentFactory::new(&self.data_dir);
        let mut builder = SessionBuilder::from_content(&factory).with_context(|| {
            format!("Failed to load content from {}", self.data_dir.display())
        })?;

        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        for &(id, quantity) in &self.holdings {
            builder = builder.holding(ItemId(id), quantity);
        }
        for &(id, value) in &self.variables {
            builder = builder.variable(id, value);
        }

        Ok(builder.build())
    }
}

/// Parses `KEY=VALUE`.
fn parse_pair<K, V>(s: &str) -> Result<(K, V), String>
where
    K: FromStr,
    V: FromStr,
    K::Err: std::fmt::Display,
    V::Err: std::fmt::Display,
{
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim().parse().map_err(|e| format!("bad key '{key}': {e}"))?;
    let value = value
        .trim()
        .parse()
        .map_err(|e| format!("bad value '{value}': {e}"))?;
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs() {
        assert_eq!(parse_pair::<u32, u32>("5=3"), Ok((5, 3)));
        assert_eq!(parse_pair::<u32, i64>("1 = -2"), Ok((1, -2)));
        assert!(parse_pair::<u32, u32>("5").is_err());
        assert!(parse_pair::<u32, u32>("x=1").is_err());
    }
}
