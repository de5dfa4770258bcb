use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Path, State as AxumState},
    http::{HeaderMap, StatusCode, header::{CACHE_CONTROL, CONTENT_TYPE, SET_COOKIE}},
    response::{Html, IntoResponse, Response},
};
use santa_core::{Assessment, Portrait, verdict::background_for};
use serde::Deserialize;
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::{
    error::WebError,
    render::{Page, render_page},
    session::{session_cookie, session_id_from_headers},
    state::State,
};

#[derive(Deserialize)]
pub struct WishForm {
    #[serde(default)]
    pub wish: String,
}

pub async fn page_handler(
    AxumState(state): AxumState<Arc<State>>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let last = state
        .sessions
        .lookup(session_id_from_headers(&headers), Instant::now())
        .await;

    respond(&state, last.as_ref(), None).await
}

pub async fn submit_handler(
    AxumState(state): AxumState<Arc<State>>,
    headers: HeaderMap,
    Form(form): Form<WishForm>,
) -> Result<Response, WebError> {
    let assessment = Assessment::with_model(&form.wish, &state.model);

    let recorded = state
        .sessions
        .record(
            session_id_from_headers(&headers),
            assessment.clone(),
            Instant::now(),
        )
        .await;
    info!(
        session = %recorded.id,
        approved = assessment.approved,
        score = assessment.score,
        tier = assessment.tier.as_str(),
        "wish assessed"
    );

    let new_session = recorded.is_new.then_some(recorded.id);
    respond(&state, Some(&assessment), new_session).await
}

/// Render the page; `new_session` is sent back as a cookie when set.
async fn respond(
    state: &State,
    result: Option<&Assessment>,
    new_session: Option<Uuid>,
) -> Result<Response, WebError> {
    let approved = result.map(|r| r.approved);
    let background_name = background_for(approved);
    let background = state
        .assets
        .data_uri(background_name)
        .await
        .map_err(|e| WebError::Render(format!("background {background_name}: {e}")))?;

    let portrait = Portrait::for_outcome(approved);
    state
        .assets
        .ensure_exists(portrait.image)
        .await
        .map_err(|e| WebError::Render(format!("portrait {}: {e}", portrait.image)))?;

    let html = render_page(&Page {
        variant: state.config.variant,
        background: &background,
        portrait,
        result,
    });

    let mut response = Html(html).into_response();
    if let Some(id) = new_session {
        response
            .headers_mut()
            .insert(SET_COOKIE, session_cookie(id));
    }
    Ok(response)
}

pub async fn asset_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(name): Path<String>,
) -> Result<Response, WebError> {
    let bytes = state.assets.read(&name).await?;

    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, "image/png"), (CACHE_CONTROL, "public, max-age=3600")],
        bytes,
    )
        .into_response())
}

pub async fn assess_handler(
    AxumState(state): AxumState<Arc<State>>,
    Json(payload): Json<WishForm>,
) -> Json<Assessment> {
    Json(Assessment::with_model(&payload.wish, &state.model))
}

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
