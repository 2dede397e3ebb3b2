//! Contact route handlers.
//!
//! Each handler locks the store once and releases it when the handler
//! returns. No handler awaits while holding the lock.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, Uri},
    response::{IntoResponse, Response},
    Json,
};

use crate::contacts::{validate::validate, ContactDraft, ContactError, ContactId, ContactStore};
use crate::http::error::{ApiError, ApiResult};
use crate::http::request::{filter_from_headers, parse_id, ContactPayload};
use crate::http::response::{contact_location, page_response, see_other};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::query::{self, ListParams};

/// GET /contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> ApiResult<Response> {
    let Query(params) = Query::<ListParams>::try_from_uri(&uri)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let filter = filter_from_headers(&headers);

    let store = state.lock()?;
    let page = query::list_contacts(store.all(), &filter, &params)?;

    tracing::debug!(
        returned = page.contacts.len(),
        total_pages = page.total,
        filtered = filter.complete().is_some(),
        "Listed contacts"
    );
    Ok(page_response(page))
}

/// POST /contacts
pub async fn create_contact(
    State(state): State<AppState>,
    ContactPayload(draft): ContactPayload,
) -> ApiResult<Response> {
    let mut store = state.lock()?;
    let contact = store.create(draft)?;
    metrics::record_store_size(store.len());

    tracing::info!(id = contact.id, "Contact created");
    Ok(see_other(&contact_location(contact.id)))
}

/// GET /contacts/{id}
pub async fn get_contact(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_id(&raw_id).ok_or(ContactError::NotFound)?;

    let store = state.lock()?;
    let contact = store.get(id)?;
    Ok(Json(contact).into_response())
}

/// PUT /contacts/{id}
pub async fn update_contact(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ContactPayload(draft): ContactPayload,
) -> ApiResult<Response> {
    let mut store = state.lock()?;
    let id = update_in(&mut store, &raw_id, draft)?;

    tracing::info!(id, "Contact updated");
    Ok(see_other(&contact_location(id)))
}

/// DELETE /contacts/{id}
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_id(&raw_id).ok_or(ContactError::NotFound)?;

    let mut store = state.lock()?;
    store.delete(id)?;
    metrics::record_store_size(store.len());

    tracing::info!(id, "Contact deleted");
    Ok(see_other("/contacts"))
}

/// The body is validated before the identifier is resolved, so a bad body
/// is reported even when the identifier matches nothing.
fn update_in(
    store: &mut ContactStore,
    raw_id: &str,
    draft: ContactDraft,
) -> Result<ContactId, ContactError> {
    match parse_id(raw_id) {
        Some(id) => store.update(id, draft).map(|c| c.id),
        None => {
            validate(&draft)?;
            Err(ContactError::NotFound)
        }
    }
}
