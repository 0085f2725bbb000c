//! Page handlers for the creation and viewer workflows

use std::sync::Arc;

use askama::Template;
use axum::extract::{Form, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use inficard_domain::{InficardError, ProfileSubmission};
use tracing::{error, warn};

use crate::context::AppContext;
use crate::templates::{
    download_filename, CardPage, ErrorPage, FormPage, PreviewPage, GENERIC_FAILURE_MESSAGE,
};

/// `GET /` - the creation form.
pub async fn show_form() -> Response {
    render(StatusCode::OK, FormPage::blank())
}

/// `POST /` - the card creation workflow.
///
/// Validation and the profile upsert are the critical path; QR
/// rasterization and artifact publication are best-effort and never block
/// or fail the preview response.
pub async fn create_card(
    State(ctx): State<Arc<AppContext>>,
    Form(submission): Form<ProfileSubmission>,
) -> Response {
    let preview = match ctx.cards.create_card(submission.clone()).await {
        Ok(preview) => preview,
        Err(InficardError::Validation(errors)) => {
            return render(
                StatusCode::UNPROCESSABLE_ENTITY,
                FormPage::with_errors(submission, &errors),
            );
        }
        Err(_) => {
            // Already logged by the service; keep the user on the form.
            return render(
                StatusCode::BAD_GATEWAY,
                FormPage::with_banner(submission, GENERIC_FAILURE_MESSAGE),
            );
        }
    };

    let qr_data_uri = match ctx.cards.render_card_qr(&preview.card_url).await {
        Ok(png) => {
            let cards = ctx.cards.clone();
            let profile_id = preview.profile_id.clone();
            let card_url = preview.card_url.clone();
            let upload = png.clone();
            tokio::spawn(async move {
                if let Err(err) = cards.publish_card_artifact(&profile_id, &card_url, upload).await
                {
                    warn!(error = %err, %profile_id, "card artifact publication failed");
                }
            });
            format!("data:image/png;base64,{}", BASE64.encode(&png))
        }
        Err(err) => {
            warn!(error = %err, profile_id = %preview.profile_id, "QR rasterization failed");
            String::new()
        }
    };

    render(StatusCode::OK, PreviewPage::new(&preview, qr_data_uri))
}

/// `GET /card/{id}` - the public card viewer.
pub async fn view_card(State(ctx): State<Arc<AppContext>>, Path(id): Path<String>) -> Response {
    match ctx.cards.view_card(&id).await {
        Ok(profile) => {
            let card_url = ctx.cards.share_url(&profile.id);
            render(StatusCode::OK, CardPage::from_profile(&profile, card_url))
        }
        Err(InficardError::NotFound(_)) => render(StatusCode::NOT_FOUND, ErrorPage::not_found()),
        Err(err) => {
            error!(error = %err, profile_id = %id, "profile lookup failed");
            render(StatusCode::BAD_GATEWAY, ErrorPage::load_failure(&err.to_string()))
        }
    }
}

/// `GET /card/{id}/qr.png` - the download action.
///
/// Re-derives the raster image from the shareable URL, exactly like the
/// preview's QR, and serves it as an attachment with the fixed filename.
/// Only known profiles get an image; otherwise the route would mint QR
/// codes pointing at pages that do not exist.
pub async fn download_qr(State(ctx): State<Arc<AppContext>>, Path(id): Path<String>) -> Response {
    if let Err(err) = ctx.cards.view_card(&id).await {
        return match err {
            InficardError::NotFound(_) => render(StatusCode::NOT_FOUND, ErrorPage::not_found()),
            other => {
                error!(error = %other, profile_id = %id, "profile lookup failed");
                render(StatusCode::BAD_GATEWAY, ErrorPage::load_failure(&other.to_string()))
            }
        };
    }

    let card_url = ctx.cards.share_url(&id);
    match ctx.cards.render_card_qr(&card_url).await {
        Ok(png) => {
            let disposition = format!("attachment; filename=\"{}\"", download_filename());
            (
                [
                    (header::CONTENT_TYPE, "image/png".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                png,
            )
                .into_response()
        }
        Err(err) => {
            error!(error = %err, profile_id = %id, "QR download rendering failed");
            render(StatusCode::INTERNAL_SERVER_ERROR, ErrorPage::render_failure())
        }
    }
}

/// Fallback for unknown paths.
pub async fn not_found() -> Response {
    render(StatusCode::NOT_FOUND, ErrorPage::page_missing())
}

fn render<T: Template>(status: StatusCode, template: T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            error!(error = %err, "template rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
