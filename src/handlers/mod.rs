pub mod dashboard;

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{Form, FromRequest, Multipart, Request, State},
    http::header,
    response::{Html, IntoResponse, Response},
};
use askama::Template;
use serde::Deserialize;

use crate::{error::AppResult, models::Identity, services, AppState};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    user_id: String,
}

/// The submitted `userId`.
///
/// GET reads the query string; POST reads an urlencoded or multipart body. A
/// missing field or an unreadable body leaves the identifier empty, which then
/// classifies as an unknown user.
#[derive(Debug, Default, Deserialize)]
pub struct IdentifyForm {
    #[serde(default, rename = "userId")]
    user_id: String,
}

#[async_trait]
impl<S> FromRequest<S> for IdentifyForm
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|content_type| content_type.starts_with("multipart/form-data"));

        if is_multipart {
            let user_id = multipart_user_id(req, state).await.unwrap_or_default();
            return Ok(Self { user_id });
        }

        match Form::<IdentifyForm>::from_request(req, state).await {
            Ok(Form(form)) => Ok(form),
            Err(rejection) => {
                tracing::debug!(%rejection, "Unreadable identify form, using empty userId");
                Ok(Self::default())
            }
        }
    }
}

async fn multipart_user_id<S>(req: Request, state: &S) -> Option<String>
where
    S: Send + Sync,
{
    let mut multipart = Multipart::from_request(req, state).await.ok()?;
    while let Some(field) = multipart.next_field().await.ok()? {
        if field.name() == Some("userId") {
            return field.text().await.ok();
        }
    }
    None
}

pub async fn index() -> IndexTemplate {
    IndexTemplate
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn identify(State(state): State<AppState>, form: IdentifyForm) -> AppResult<Response> {
    let identity = services::classify(&state.db, &form.user_id, &state.config.reporting.admin_token).await?;
    tracing::info!(role = ?identity.role(), "User identified");

    let page = match identity {
        Identity::Admin => dashboard::admin_page(&state).await?.into_response(),
        Identity::Supplier(party) => dashboard::supplier_page(&state, party).await?.into_response(),
        Identity::Customer(party) => dashboard::customer_page(&state, party).await?.into_response(),
        Identity::Unknown => {
            let template = ErrorTemplate { user_id: form.user_id };
            Html(template.render()?).into_response()
        }
    };

    Ok(page)
}
