//! Terminal front end.
//!
//! Stands in for a web browser: each typed command becomes one [`Request`],
//! redirects are followed, and the final page is rendered to the terminal.

use std::collections::HashMap;

use anyhow::{Result, bail};
use colored::Colorize;
use log::{debug, info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::command::{Command, parse_command};
use crate::game::Game;
use crate::router::{Method, Page, Request, Response, route};
use crate::style::GameStyle;
use crate::view::render_page;

/// Redirects followed for a single command before giving up.
const MAX_REDIRECTS: usize = 8;

/// Tracks the current location the way a browser tracks its URL.
#[derive(Debug, Clone)]
pub struct Browser {
    location: String,
}

impl Default for Browser {
    fn default() -> Self {
        Self::new()
    }
}

impl Browser {
    pub fn new() -> Self {
        Self {
            location: "/".to_string(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Send a request and follow redirects until a page comes back.
    ///
    /// # Errors
    /// - if the router keeps redirecting past `MAX_REDIRECTS`
    pub fn send(&mut self, game: &mut Game, request: Request) -> Result<Page> {
        let mut request = request;
        for _ in 0..=MAX_REDIRECTS {
            if request.method == Method::Get {
                self.location.clone_from(&request.path);
            }
            match route(game, &request) {
                Response::Page(page) => return Ok(page),
                Response::Redirect(to) => {
                    debug!("redirect: {} -> {to}", request.path);
                    request = Request::get(to);
                },
            }
        }
        bail!("too many redirects (stopped at '{}')", self.location)
    }

    /// Translate a prompt command into the request a browser would send, if any.
    pub fn request_for(&self, command: &Command) -> Option<Request> {
        match command {
            Command::Rooms => Some(Request::get("/")),
            Command::Start { room_id, name } => {
                let form = HashMap::from([
                    ("name".to_string(), name.clone()),
                    ("roomId".to_string(), room_id.clone()),
                ]);
                Some(Request::post("/player", form))
            },
            Command::Look | Command::Dump => Some(Request::get(self.location.clone())),
            Command::Go(direction) => Some(Request::get(format!(
                "{}/{direction}",
                self.location.trim_end_matches('/')
            ))),
            Command::Item { action, item_id } => Some(Request::post(
                format!("/items/{item_id}/{action}"),
                HashMap::new(),
            )),
            Command::Help | Command::Quit | Command::Unknown => None,
        }
    }
}

/// Run the read-eval-print loop until the user quits.
///
/// # Errors
/// - if the line editor can't be created or the router loops on redirects
pub fn run_repl(game: &mut Game) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut browser = Browser::new();

    let page = browser.send(game, Request::get("/"))?;
    println!("{}", render_page(&page));

    loop {
        let prompt = format!("\n[{}]>> ", browser.location()).prompt_style().to_string();
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        if line.trim().is_empty() {
            continue;
        }
        record_history(&mut editor, &line);

        let command = parse_command(&line);
        match &command {
            Command::Quit => break,
            Command::Help => println!("{}", help_text()),
            Command::Unknown => println!("{}", "Didn't quite catch that? Try 'help'.".error_style()),
            Command::Dump => {
                if let Some(request) = browser.request_for(&command) {
                    let page = browser.send(game, request)?;
                    println!("{}", ron::ser::to_string_pretty(&page, ron::ser::PrettyConfig::default())?);
                }
            },
            _ => {
                if let Some(request) = browser.request_for(&command) {
                    let page = browser.send(game, request)?;
                    println!("{}", render_page(&page));
                }
            },
        }
    }
    info!("player quit at {}", browser.location());
    println!("{}", "Goodbye.".italic());
    Ok(())
}

fn record_history(editor: &mut DefaultEditor, line: &str) {
    if let Err(err) = editor.add_history_entry(line) {
        warn!("failed to append to history: {err}");
    }
}

fn help_text() -> String {
    [
        ("rooms", "list starting rooms"),
        ("start <room> <name>", "begin playing in a room"),
        ("look", "show the current room"),
        ("go <direction> | n/s/e/w", "walk through an exit"),
        ("take|drop|eat <item id>", "handle an item"),
        ("dump", "print the current page model"),
        ("quit", "leave the game"),
    ]
    .iter()
    .map(|(cmd, what)| format!("  {:<26} {what}", cmd.bold()))
    .collect::<Vec<_>>()
    .join("\n")
}
