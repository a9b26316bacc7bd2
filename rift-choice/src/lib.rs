//! Text form of the choices a player sends in response to an action request.
//!
//! A choice is a keyword optionally followed by comma-separated arguments:
//!
//! ```text
//! move 0,3
//! item Burn Salve,1
//! switch
//! ```
#![no_std]

extern crate alloc;

use alloc::{
    format,
    string::{
        String,
        ToString,
    },
    vec::Vec,
};
use core::{
    fmt,
    str::FromStr,
};

use anyhow::{
    Context,
    Error,
    Result,
    bail,
};
use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("invalid choice: {0}")]
pub struct InvalidChoiceError(String);

/// Comma-separated arguments of a single choice.
struct Args<'s> {
    kind: &'static str,
    inner: core::str::Split<'s, char>,
}

impl<'s> Args<'s> {
    fn new(kind: &'static str, input: &'s str) -> Self {
        Self {
            kind,
            inner: input.split(','),
        }
    }

    fn next(&mut self) -> Option<&'s str> {
        self.inner
            .next()
            .map(str::trim)
            .filter(|arg| !arg.is_empty())
    }

    fn position(&mut self, what: &str) -> Result<Option<usize>> {
        self.next()
            .map(|arg| arg.parse::<usize>().with_context(|| format!("invalid {what}: {arg}")))
            .transpose()
    }

    fn finish(mut self) -> Result<()> {
        match self.next() {
            Some(extra) => bail!("unexpected argument in {} choice: {extra}", self.kind),
            None => Ok(()),
        }
    }
}

fn write_target(f: &mut fmt::Formatter<'_>, target: Option<usize>) -> fmt::Result {
    match target {
        Some(target) => write!(f, ",{target}"),
        None => Ok(()),
    }
}

/// Use the move in `slot`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveChoice {
    pub slot: usize,
    /// Position of the targeted combatant. Defaults to the first available opponent.
    pub target: Option<usize>,
}

impl fmt::Display for MoveChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slot)?;
        write_target(f, self.target)
    }
}

impl FromStr for MoveChoice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut args = Args::new("move", s);
        let slot = args.position("move slot")?.context("missing move slot")?;
        let target = args.position("move target")?;
        args.finish()?;
        Ok(Self { slot, target })
    }
}

/// Use an item from the team bag.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ItemChoice {
    /// Item name, matched without regard to case.
    pub item: String,
    /// Position of the combatant receiving the item. Defaults to the user.
    pub target: Option<usize>,
}

impl fmt::Display for ItemChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.item)?;
        write_target(f, self.target)
    }
}

impl FromStr for ItemChoice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut args = Args::new("item", s);
        let item = args.next().context("missing item name")?.to_string();
        let target = args.position("item target")?;
        args.finish()?;
        Ok(Self { item, target })
    }
}

/// Bring a reserve onto the field. Defaults to the first healthy reserve.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SwitchChoice {
    pub reserve: Option<usize>,
}

impl fmt::Display for SwitchChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reserve {
            Some(reserve) => write!(f, "{reserve}"),
            None => Ok(()),
        }
    }
}

impl FromStr for SwitchChoice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut args = Args::new("switch", s);
        let reserve = args.position("reserve")?;
        args.finish()?;
        Ok(Self { reserve })
    }
}

/// A player's response to an action request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Move(MoveChoice),
    /// Halve incoming damage until the combatant acts again.
    Defend,
    /// Activate the Echo's signature ability.
    Ability,
    Switch(SwitchChoice),
    Item(ItemChoice),
    Escape,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(choice) => write!(f, "move {choice}"),
            Self::Defend => f.write_str("defend"),
            Self::Ability => f.write_str("ability"),
            Self::Switch(SwitchChoice { reserve: None }) => f.write_str("switch"),
            Self::Switch(choice) => write!(f, "switch {choice}"),
            Self::Item(choice) => write!(f, "item {choice}"),
            Self::Escape => f.write_str("escape"),
        }
    }
}

impl FromStr for Choice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (keyword, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let choice = match keyword {
            "move" => Self::Move(rest.parse()?),
            "item" => Self::Item(rest.parse()?),
            "switch" => Self::Switch(rest.parse()?),
            "defend" | "ability" | "escape" if !rest.trim().is_empty() => {
                bail!("{keyword} takes no arguments")
            }
            "defend" => Self::Defend,
            "ability" => Self::Ability,
            "escape" => Self::Escape,
            _ => return Err(InvalidChoiceError(keyword.to_string()).into()),
        };
        Ok(choice)
    }
}

/// Joins choices with `;`.
pub fn choices_to_string<I>(choices: I) -> String
where
    I: IntoIterator<Item = Choice>,
{
    choices.into_iter().join(";")
}

/// Parses a `;`-separated list of choices, skipping empty entries.
pub fn choices_from_string<S>(choices: S) -> Result<Vec<Choice>>
where
    S: AsRef<str>,
{
    choices
        .as_ref()
        .split(';')
        .filter(|choice| !choice.trim().is_empty())
        .map(Choice::from_str)
        .collect()
}
