//! Item actions a player can perform on an item id.

use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// The closed set of item actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemAction {
    Take,
    Drop,
    Eat,
}

impl ItemAction {
    pub const ALL: [ItemAction; 3] = [ItemAction::Take, ItemAction::Drop, ItemAction::Eat];

    pub fn label(self) -> &'static str {
        match self {
            ItemAction::Take => "take",
            ItemAction::Drop => "drop",
            ItemAction::Eat => "eat",
        }
    }
}

impl fmt::Display for ItemAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ItemAction {
    type Err = EngineError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        ItemAction::ALL
            .into_iter()
            .find(|action| action.label() == label)
            .ok_or_else(|| EngineError::UnknownAction(label.to_string()))
    }
}
