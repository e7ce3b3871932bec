use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{delete, get, put},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::{
    db::entities::{person, zombie},
    flash::{self, Flash},
    services::{MarkEatenOutcome, ServiceContext},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct MarkEatenRequest {
    pub zombie: Option<String>,
    pub person: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct PersonResponse {
    pub id: i32,
    pub name: String,
    pub alive: bool,
    pub eaten_by: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct ZombieResponse {
    pub id: i32,
    pub name: String,
}

/// One joined row, grouped by source table so person and zombie columns
/// with the same name cannot collide.
#[derive(Debug, Serialize)]
pub struct PersonRow {
    pub person: PersonResponse,
    pub zombie: Option<ZombieResponse>,
}

#[derive(Debug, Serialize)]
pub struct PeopleListResponse {
    pub people: Vec<PersonRow>,
}

impl From<person::Model> for PersonResponse {
    fn from(model: person::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            alive: model.alive,
            eaten_by: model.eaten_by,
        }
    }
}

impl From<zombie::Model> for ZombieResponse {
    fn from(model: zombie::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<(person::Model, Option<zombie::Model>)> for PersonRow {
    fn from((person, zombie): (person::Model, Option<zombie::Model>)) -> Self {
        Self {
            person: person.into(),
            zombie: zombie.map(ZombieResponse::from),
        }
    }
}

#[derive(Template)]
#[template(path = "list_people.html")]
struct ListPeopleTemplate {
    now: String,
    project_name: String,
    rows: Vec<PersonRow>,
    zombies: Vec<ZombieResponse>,
    success: Option<String>,
    error: Option<String>,
}

#[derive(Template)]
#[template(path = "new_person.html")]
struct NewPersonTemplate {
    now: String,
    project_name: String,
    success: Option<String>,
    error: Option<String>,
}

type HtmlError = (StatusCode, Html<String>);

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_people).post(create_person))
        .route("/eaten/", put(mark_eaten))
        .route("/new/", get(new_person_form))
        .route("/{id}", delete(delete_person))
        .with_state(state)
}

async fn list_people(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Response {
    let services = ServiceContext::from_state(&state);

    // The JSON path never touches the flash cookie and never renders a
    // template.
    if wants_json(&headers) {
        return match services.person().list_with_zombies().await {
            Ok(rows) => Json(PeopleListResponse {
                people: rows.into_iter().map(PersonRow::from).collect(),
            })
            .into_response(),
            Err(err) => err.into_response(),
        };
    }

    let (jar, pending) = flash::take(jar);

    let rows = match services.person().list_with_zombies().await {
        Ok(rows) => rows,
        Err(err) => return html_error(StatusCode::INTERNAL_SERVER_ERROR, err.message()).into_response(),
    };
    let zombies = match services.zombie().list().await {
        Ok(zombies) => zombies,
        Err(err) => return html_error(StatusCode::INTERNAL_SERVER_ERROR, err.message()).into_response(),
    };

    let template = ListPeopleTemplate {
        now: Local::now().to_rfc3339(),
        project_name: project_name(),
        rows: rows.into_iter().map(PersonRow::from).collect(),
        zombies: zombies.into_iter().map(ZombieResponse::from).collect(),
        success: pending.success,
        error: pending.error,
    };
    match template.render() {
        Ok(rendered) => (jar, Html(rendered)).into_response(),
        Err(_) => {
            html_error(StatusCode::INTERNAL_SERVER_ERROR, "failed to render people list")
                .into_response()
        }
    }
}

async fn mark_eaten(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(body): Form<MarkEatenRequest>,
) -> (CookieJar, Redirect) {
    let (Some(zombie_id), Some(person_id)) = (parse_id(&body.zombie), parse_id(&body.person))
    else {
        return flash::redirect_with_flash(
            jar,
            "/",
            Flash::error("No person or zombie id was given!"),
        );
    };

    let outcome = ServiceContext::from_state(&state)
        .person()
        .mark_eaten(person_id, zombie_id)
        .await;

    let flash = match outcome {
        Ok(MarkEatenOutcome::Eaten) => {
            Flash::success("The person was entirely swallowed (not just the brain).")
        }
        Ok(MarkEatenOutcome::NothingToEat) => Flash::error("There is no person to be eaten."),
        Err(err) => Flash::error(err.message()),
    };
    flash::redirect_with_flash(jar, "/", flash)
}

async fn new_person_form(jar: CookieJar) -> Result<(CookieJar, Html<String>), HtmlError> {
    let (jar, pending) = flash::take(jar);
    let template = NewPersonTemplate {
        now: Local::now().to_rfc3339(),
        project_name: project_name(),
        success: pending.success,
        error: pending.error,
    };
    let rendered = template.render().map_err(|_| {
        html_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to render new person form",
        )
    })?;
    Ok((jar, Html(rendered)))
}

async fn create_person(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(body): Form<CreatePersonRequest>,
) -> (CookieJar, Redirect) {
    let name = body.name.trim();
    if name.is_empty() {
        return flash::redirect_with_flash(
            jar,
            "/people",
            Flash::error("Type the name of the new person."),
        );
    }

    let flash = match ServiceContext::from_state(&state).person().create(name).await {
        Ok(created) => Flash::success(format!(
            "Person named {} created successfully!",
            created.name
        )),
        Err(err) => Flash::error(err.message()),
    };
    flash::redirect_with_flash(jar, "/people", flash)
}

async fn delete_person(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> (CookieJar, Redirect) {
    // No existence check: a delete that matched nothing still reads as a
    // success to the user.
    let flash = match ServiceContext::from_state(&state).person().delete(id).await {
        Ok(()) => Flash::success(format!("Person with id = {id} deleted successfully!")),
        Err(err) => Flash::error(err.message()),
    };
    flash::redirect_with_flash(jar, "/people", flash)
}

/// Accept containing text/html wins over application/json; anything else
/// falls back to the HTML page.
fn wants_json(headers: &HeaderMap) -> bool {
    let Some(accept) = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let accept = accept.to_ascii_lowercase();
    !accept.contains("text/html") && accept.contains("application/json")
}

fn parse_id(value: &Option<String>) -> Option<i32> {
    value.as_deref()?.trim().parse().ok()
}

pub(crate) fn project_name() -> String {
    let raw = env!("CARGO_PKG_NAME");
    let mut words = Vec::new();
    let mut current = String::new();
    for ch in raw.chars() {
        if ch == '_' || ch == '-' {
            if !current.is_empty() {
                words.push(current.clone());
                current.clear();
            }
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    let mut out = String::new();
    for (idx, word) in words.into_iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            for ch in chars {
                out.push(ch.to_ascii_lowercase());
            }
        }
    }
    if out.is_empty() {
        "Project".to_string()
    } else {
        out
    }
}

fn html_error(status: StatusCode, message: &str) -> HtmlError {
    (status, Html(message.to_string()))
}
