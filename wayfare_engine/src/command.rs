//! Command module
//!
//! Describes the commands typed at the terminal prompt.
use crate::action::ItemAction;

/// Commands that can be typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dump,
    Go(String),
    Help,
    Item { action: ItemAction, item_id: String },
    Look,
    Quit,
    Rooms,
    Start { room_id: String, name: String },
    Unknown,
}

const DIRECTION_WORDS: &[&str] = &[
    "north", "south", "east", "west", "up", "down", "n", "s", "e", "w", "u", "d",
];

/// Parses an input string and returns a corresponding `Command` if recognized.
///
/// Keywords are matched case-insensitively; room ids, item ids and names are kept as typed.
pub fn parse_command(input: &str) -> Command {
    let raw: Vec<&str> = input.split_whitespace().collect();
    let lowered: Vec<String> = raw.iter().map(|word| word.to_lowercase()).collect();
    let words: Vec<&str> = lowered.iter().map(String::as_str).collect();
    match words.as_slice() {
        ["rooms" | "home"] => Command::Rooms,
        ["start" | "begin", _, rest @ ..] if !rest.is_empty() => Command::Start {
            room_id: raw[1].to_string(),
            name: raw[2..].join(" "),
        },
        ["look" | "l"] => Command::Look,
        ["help" | "?"] => Command::Help,
        ["dump"] => Command::Dump,
        ["quit" | "exit"] => Command::Quit,
        ["go" | "move" | "walk", dir] => Command::Go((*dir).to_string()),
        [dir] if DIRECTION_WORDS.contains(dir) => Command::Go((*dir).to_string()),
        ["get" | "grab", _] => Command::Item {
            action: ItemAction::Take,
            item_id: raw[1].to_string(),
        },
        [verb, _] => verb.parse::<ItemAction>().map_or(Command::Unknown, |action| Command::Item {
            action,
            item_id: raw[1].to_string(),
        }),
        _ => Command::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_start_with_multi_word_name() {
        assert_eq!(
            parse_command("start hall  Ada   Lovelace"),
            Command::Start {
                room_id: "hall".into(),
                name: "Ada Lovelace".into()
            }
        );
        assert_eq!(parse_command("start hall"), Command::Unknown);
    }

    #[test]
    fn parses_movement() {
        assert_eq!(parse_command("go north"), Command::Go("north".into()));
        assert_eq!(parse_command("N"), Command::Go("n".into()));
        assert_eq!(parse_command("west"), Command::Go("west".into()));
        assert_eq!(parse_command("sideways"), Command::Unknown);
    }

    #[test]
    fn parses_item_actions() {
        assert_eq!(
            parse_command("take torch"),
            Command::Item {
                action: ItemAction::Take,
                item_id: "torch".into()
            }
        );
        assert_eq!(
            parse_command("grab torch"),
            Command::Item {
                action: ItemAction::Take,
                item_id: "torch".into()
            }
        );
        assert_eq!(
            parse_command("EAT apple"),
            Command::Item {
                action: ItemAction::Eat,
                item_id: "apple".into()
            }
        );
        assert_eq!(parse_command("juggle apple"), Command::Unknown);
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_command("look"), Command::Look);
        assert_eq!(parse_command("rooms"), Command::Rooms);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command(""), Command::Unknown);
    }
}
