//! Request router.
//!
//! Maps one already-parsed request onto at most one game operation and answers
//! with either a page model or a redirect. The router keeps no state of its own;
//! everything lives in the [`Game`] passed in.

use std::collections::HashMap;

use log::{debug, error, warn};
use serde::Serialize;

use crate::action::ItemAction;
use crate::error::{EngineError, Result};
use crate::game::{Game, Session};
use crate::view::RoomView;
use crate::world::RoomListing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// An inbound request: method, path, and decoded form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub form: HashMap<String, String>,
}

impl Request {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            form: HashMap::new(),
        }
    }

    pub fn post(path: impl Into<String>, form: HashMap<String, String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            form,
        }
    }
}

/// A page to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Page {
    NewPlayer { rooms: Vec<RoomListing> },
    Room(RoomView),
}

/// What the router answers with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Response {
    Page(Page),
    Redirect(String),
}

const HOME: &str = "/";

fn room_location(room_id: &str) -> String {
    format!("/rooms/{room_id}")
}

fn home() -> Response {
    Response::Redirect(HOME.to_string())
}

/// Route one request against `game`.
pub fn route(game: &mut Game, request: &Request) -> Response {
    let segments: Vec<&str> = request.path.split('/').collect();
    let outcome = match (request.method, segments.as_slice()) {
        (Method::Get, ["", ""]) => Ok(Response::Page(Page::NewPlayer {
            rooms: game.world().list_available_rooms(),
        })),
        (Method::Post, ["", "player"]) if !game.is_registered() => register(game, &request.form),
        (Method::Get, ["", "rooms", room_id, rest @ ..]) if rest.len() <= 1 => {
            room_request(game, room_id, rest.first().copied())
        },
        (Method::Post, ["", "items", item_id, action]) => item_request(game, item_id, action),
        _ => fallback(game),
    };
    outcome.unwrap_or_else(|err| {
        error!("{} {}: {err}; sending player home", method_label(request.method), request.path);
        home()
    })
}

fn method_label(method: Method) -> &'static str {
    match method {
        Method::Get => "GET",
        Method::Post => "POST",
    }
}

fn register(game: &mut Game, form: &HashMap<String, String>) -> Result<Response> {
    let name = form.get("name").map_or("", String::as_str);
    let room_id = form.get("roomId").map_or("", String::as_str);
    match game.register(name, room_id) {
        Ok(session) => Ok(Response::Redirect(room_location(session.current_room_id()?))),
        Err(err) if err.is_not_found() => {
            warn!("registration for \"{name}\" named unknown room '{room_id}'");
            Ok(home())
        },
        Err(err) => Err(err),
    }
}

fn room_request(game: &mut Game, room_id: &str, direction: Option<&str>) -> Result<Response> {
    let Some(mut session) = game.session() else {
        return Ok(home());
    };
    let current = session.current_room_id()?.to_string();
    if room_id != current {
        return Ok(Response::Redirect(room_location(&current)));
    }
    match direction {
        None => Ok(Response::Page(Page::Room(session.view()?))),
        Some(direction) => {
            let letter: String = direction.chars().take(1).collect();
            session.move_to(&letter)?;
            redirect_to_current(&session)
        },
    }
}

fn item_request(game: &mut Game, item_id: &str, label: &str) -> Result<Response> {
    let Some(mut session) = game.session() else {
        return Ok(home());
    };
    match label.parse::<ItemAction>() {
        Ok(action) => session.perform(action, item_id)?,
        Err(EngineError::UnknownAction(label)) => {
            debug!("ignoring unknown item action '{label}' on '{item_id}'");
        },
        Err(err) => return Err(err),
    }
    redirect_to_current(&session)
}

fn fallback(game: &mut Game) -> Result<Response> {
    match game.session() {
        Some(session) => redirect_to_current(&session),
        None => Ok(home()),
    }
}

fn redirect_to_current(session: &Session<'_>) -> Result<Response> {
    Ok(Response::Redirect(room_location(session.current_room_id()?)))
}

/// Decode an `application/x-www-form-urlencoded` body.
///
/// `+` means space; percent escapes that don't decode to UTF-8 are kept as written.
pub fn parse_form(body: &str) -> HashMap<String, String> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
