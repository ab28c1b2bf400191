//! View module.
//!
//! Page models re-derived from game state after every request, plus a plain
//! terminal rendering of them. Nothing here mutates the game.
use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;

use crate::action::ItemAction;
use crate::item::Item;
use crate::router::Page;
use crate::style::GameStyle;
use crate::world::RoomListing;

/// One item placement as shown on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemLine {
    pub id: String,
    pub name: String,
    pub is_edible: bool,
    pub can_drop: bool,
}

impl From<&Item> for ItemLine {
    fn from(item: &Item) -> Self {
        let kind = item.kind();
        Self {
            id: kind.id.clone(),
            name: kind.name.clone(),
            is_edible: kind.is_edible,
            can_drop: kind.can_drop,
        }
    }
}

/// An exit label and the room it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExitLine {
    pub direction: String,
    pub room_id: String,
    pub room_name: String,
}

/// Everything shown on the page for the player's current room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomView {
    pub room_id: String,
    pub room_name: String,
    pub player_name: String,
    pub items: Vec<ItemLine>,
    pub exits: Vec<ExitLine>,
    pub inventory: Vec<ItemLine>,
}

impl RoomView {
    /// Actions offered for any item lying in the room.
    pub const ROOM_ACTIONS: [ItemAction; 1] = [ItemAction::Take];

    /// Actions offered for a carried item.
    pub fn inventory_actions(item: &ItemLine) -> Vec<ItemAction> {
        let mut actions = Vec::new();
        if item.can_drop {
            actions.push(ItemAction::Drop);
        }
        if item.is_edible {
            actions.push(ItemAction::Eat);
        }
        actions
    }
}

/// Render a page for the terminal.
pub fn render_page(page: &Page) -> String {
    match page {
        Page::NewPlayer { rooms } => render_new_player(rooms),
        Page::Room(view) => render_room(view),
    }
}

fn render_new_player(rooms: &[RoomListing]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Choose a starting room".subheading_style());
    for room in rooms {
        let _ = writeln!(out, "  {} {}", room.id.as_str().section_style(), room.name.room_style());
    }
    let _ = writeln!(
        out,
        "\nType {} to begin.",
        "start <room id> <your name>".bold()
    );
    out
}

fn render_room(view: &RoomView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.room_name.room_titlebar_style());

    let _ = writeln!(out, "\n{}", "Items here".subheading_style());
    if view.items.is_empty() {
        let _ = writeln!(out, "  (nothing)");
    }
    for item in &view.items {
        let _ = writeln!(out, "{}", item_row(item, &RoomView::ROOM_ACTIONS));
    }

    let _ = writeln!(out, "\n{}", "Exits".subheading_style());
    if view.exits.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for exit in &view.exits {
        let _ = writeln!(
            out,
            "  {} -> {}",
            exit.direction.exit_style(),
            exit.room_name.room_style()
        );
    }

    let _ = writeln!(out, "\n{} {}", view.player_name.bold(), "is carrying".subheading_style());
    if view.inventory.is_empty() {
        let _ = writeln!(out, "  (nothing)");
    }
    for item in &view.inventory {
        let _ = writeln!(out, "{}", item_row(item, &RoomView::inventory_actions(item)));
    }
    out
}

fn item_row(item: &ItemLine, actions: &[ItemAction]) -> String {
    let labels: Vec<String> = actions
        .iter()
        .map(|action| action.label().section_style().to_string())
        .collect();
    format!(
        "  {} {} {}",
        item.name.item_style(),
        format!("({})", item.id).action_style(),
        labels.join(" ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, is_edible: bool, can_drop: bool) -> ItemLine {
        ItemLine {
            id: id.into(),
            name: id.into(),
            is_edible,
            can_drop,
        }
    }

    fn sample_view() -> RoomView {
        RoomView {
            room_id: "b".into(),
            room_name: "Room B".into(),
            player_name: "Ada".into(),
            items: vec![line("torch", false, true)],
            exits: vec![ExitLine {
                direction: "south".into(),
                room_id: "a".into(),
                room_name: "Room A".into(),
            }],
            inventory: vec![line("apple", true, true), line("idol", false, false)],
        }
    }

    #[test]
    fn inventory_actions_follow_item_flags() {
        assert_eq!(
            RoomView::inventory_actions(&line("apple", true, true)),
            [ItemAction::Drop, ItemAction::Eat]
        );
        assert!(RoomView::inventory_actions(&line("idol", false, false)).is_empty());
        assert_eq!(RoomView::ROOM_ACTIONS, [ItemAction::Take]);
    }

    #[test]
    fn item_line_copies_catalog_flags() {
        let catalog = crate::item::ItemCatalog::from_defs(&[wayfare_data::ItemDef::new(
            "idol",
            "cursed idol",
            false,
            false,
        )]);
        let item = catalog.instantiate("idol").unwrap();
        assert_eq!(
            ItemLine::from(&item),
            ItemLine {
                id: "idol".into(),
                name: "cursed idol".into(),
                is_edible: false,
                can_drop: false,
            }
        );
    }

    #[test]
    fn room_page_mentions_everything() {
        colored::control::set_override(false);
        let text = render_page(&Page::Room(sample_view()));
        assert!(text.contains("Room B"));
        assert!(text.contains("torch (torch) [take]"));
        assert!(text.contains("south -> Room A"));
        assert!(text.contains("apple (apple) [drop] [eat]"));
        assert!(text.contains("Ada is carrying"));
    }

    #[test]
    fn new_player_page_lists_rooms() {
        colored::control::set_override(false);
        let text = render_page(&Page::NewPlayer {
            rooms: vec![RoomListing {
                id: "a".into(),
                name: "Room A".into(),
            }],
        });
        assert!(text.contains("[a] Room A"));
    }
}
