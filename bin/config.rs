use anyhow::Error as Anyhow;
use derive_more::{Display, Error, From};
use lib::kuba::{Color, Game, Push};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use test_strategy::Arbitrary;

/// The reason why parsing configuration failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse configuration")]
pub struct ParseConfigError(ron::de::SpannedError);

/// Runtime configuration for one of the players.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Arbitrary, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerConfig {
    #[strategy("[A-Za-z][A-Za-z0-9]{0,11}")]
    pub name: String,
    pub color: Color,
}

impl PlayerConfig {
    pub fn new<N: Into<String>>(name: N, color: Color) -> Self {
        PlayerConfig {
            name: name.into(),
            color,
        }
    }
}

/// Prints the configuration in [RON] notation.
///
/// [RON]: https://github.com/ron-rs/ron
impl fmt::Display for PlayerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for PlayerConfig {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

/// A recorded sequence of pushes.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    pub first: PlayerConfig,
    pub second: PlayerConfig,
    #[serde(default)]
    pub moves: Vec<(String, Push)>,
}

impl FromStr for Script {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

/// Starts a new [`Game`] between two configured players.
pub fn new_game(first: &PlayerConfig, second: &PlayerConfig) -> Result<Game, Anyhow> {
    let game = Game::try_new(
        (first.name.as_str(), first.color),
        (second.name.as_str(), second.color),
    )?;

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_player_config_is_an_identity(c: PlayerConfig) {
        assert_eq!(c.to_string().parse(), Ok(c));
    }

    #[proptest]
    fn player_config_is_deserializable(#[strategy("[A-Za-z]{1,8}")] name: String, c: Color) {
        assert_eq!(
            format!("(name: {name:?}, color: {c})").parse(),
            Ok(PlayerConfig::new(name, c))
        );
    }

    #[test]
    fn player_config_rejects_unknown_fields() {
        assert!("(name: \"A\", color: white, rank: 1)"
            .parse::<PlayerConfig>()
            .is_err());
    }

    #[test]
    fn script_is_deserializable() {
        let script: Script = r#"(
            first: (name: "A", color: white),
            second: (name: "B", color: black),
            moves: [("A", "66F"), ("B", "06B")],
        )"#
        .parse()
        .unwrap();

        assert_eq!(script.first, PlayerConfig::new("A", Color::White));
        assert_eq!(script.second, PlayerConfig::new("B", Color::Black));
        assert_eq!(
            script.moves,
            vec![
                ("A".to_string(), "66F".parse().unwrap()),
                ("B".to_string(), "06B".parse().unwrap()),
            ]
        );
    }

    #[test]
    fn script_moves_default_to_none() {
        let script: Script = "(first: (name: \"A\", color: white), second: (name: \"B\", color: black))"
            .parse()
            .unwrap();

        assert!(script.moves.is_empty());
    }

    #[test]
    fn script_rejects_malformed_pushes() {
        let s = "(first: (name: \"A\", color: white), second: (name: \"B\", color: black), moves: [(\"A\", \"77F\")])";
        assert!(s.parse::<Script>().is_err());
    }

    #[proptest]
    fn new_game_seats_both_players(a: PlayerConfig, #[filter(#b.name != #a.name)] b: PlayerConfig) {
        let b = PlayerConfig::new(b.name, !a.color);
        let game = new_game(&a, &b).unwrap();
        assert_eq!(game.player(&a.name).map(|p| p.color()), Some(a.color));
        assert_eq!(game.player(&b.name).map(|p| p.color()), Some(b.color));
    }

    #[proptest]
    fn new_game_fails_if_players_share_a_color(a: PlayerConfig, #[filter(#b.name != #a.name)] b: PlayerConfig) {
        let b = PlayerConfig::new(b.name, a.color);
        assert!(new_game(&a, &b).is_err());
    }

    #[proptest]
    fn new_game_fails_if_players_share_a_name(a: PlayerConfig) {
        let b = PlayerConfig::new(a.name.clone(), !a.color);
        assert!(new_game(&a, &b).is_err());
    }
}
