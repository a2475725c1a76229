use std::fmt;
use std::str::FromStr;

use serde::{
  Deserialize,
  Serialize
};

use crate::task::Task;

/// Which slice of the board the list
/// shows. Never mutates the tasks.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
pub enum Filter {
  #[default]
  All,
  Active,
  Completed
}

impl Filter {
  /// Selector order.
  pub const ALL: [Filter; 3] = [
    Filter::All,
    Filter::Active,
    Filter::Completed
  ];

  pub const fn label(
    self
  ) -> &'static str {
    match self {
      | Filter::All => "All",
      | Filter::Active => "Active",
      | Filter::Completed => {
        "Completed"
      }
    }
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | Filter::All => true,
      | Filter::Active => {
        !task.completed
      }
      | Filter::Completed => {
        task.completed
      }
    }
  }
}

impl fmt::Display for Filter {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.label())
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
  thiserror::Error,
)]
pub enum ParseFilterError {
  #[error(
    "unknown filter {0:?}: expected \
     all, active or completed"
  )]
  Unknown(String),
  #[error(
    "ambiguous filter {0:?}: matches \
     more than one of all, active, \
     completed"
  )]
  Ambiguous(String)
}

impl FromStr for Filter {
  type Err = ParseFilterError;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    let wanted =
      s.trim().to_ascii_lowercase();
    if wanted.is_empty() {
      return Err(
        ParseFilterError::Unknown(
          s.to_string()
        )
      );
    }

    let mut matches =
      Filter::ALL.into_iter().filter(
        |filter| {
          filter
            .label()
            .to_ascii_lowercase()
            .starts_with(&wanted)
        }
      );

    let first =
      matches.next().ok_or_else(|| {
        ParseFilterError::Unknown(
          s.to_string()
        )
      })?;
    if matches.next().is_some() {
      return Err(
        ParseFilterError::Ambiguous(
          s.to_string()
        )
      );
    }

    Ok(first)
  }
}
