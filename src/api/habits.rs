//! Habit Resource Operations
//!
//! The six REST operations the client consumes. The server owns streak
//! computation and upload bookkeeping; every mutation returns the
//! authoritative record, which callers feed back into the store unchanged.

use gloo_net::http::Request;

use super::{decode, habits_url};
use crate::error::Error;
use crate::models::{Habit, HabitDraft};

fn network(e: gloo_net::Error) -> Error {
    Error::Network(e.to_string())
}

/// GET `/habits` — the whole collection.
pub async fn list() -> Result<Vec<Habit>, Error> {
    let resp = Request::get(&habits_url(""))
        .send()
        .await
        .map_err(network)?;
    decode(resp).await
}

/// POST `/habits` — returns the created record with its generated id.
///
/// `idempotency_key` is minted once per draft submission so an accidental
/// resubmit can be collapsed server-side; servers that ignore the header keep
/// the plain POST semantics.
pub async fn create(draft: &HabitDraft, idempotency_key: &str) -> Result<Habit, Error> {
    let resp = Request::post(&habits_url(""))
        .header("Idempotency-Key", idempotency_key)
        .json(draft)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(resp).await
}

/// PATCH `/habits/{id}` — name/description only; streak and uploads are
/// untouched by this call.
pub async fn update(id: &str, draft: &HabitDraft) -> Result<Habit, Error> {
    let resp = Request::patch(&habits_url(&format!("/{id}")))
        .json(draft)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(resp).await
}

/// DELETE `/habits/{id}` — no response body guaranteed, so only the status
/// line is inspected.
pub async fn remove(id: &str) -> Result<(), Error> {
    let resp = Request::delete(&habits_url(&format!("/{id}")))
        .send()
        .await
        .map_err(network)?;
    if !resp.ok() {
        return Err(Error::Server(resp.status()));
    }
    Ok(())
}

/// POST `/habits/{id}/upload` — multipart with a single `photo` field.
/// The server appends today's upload record and recomputes the streak.
pub async fn upload_today(id: &str, photo: &web_sys::File) -> Result<Habit, Error> {
    let form = web_sys::FormData::new().map_err(|e| Error::Network(format!("{e:?}")))?;
    form.append_with_blob("photo", photo)
        .map_err(|e| Error::Network(format!("{e:?}")))?;

    let resp = Request::post(&habits_url(&format!("/{id}/upload")))
        .body(form)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(resp).await
}

/// DELETE `/habits/{id}/upload` — removes today's upload record if present
/// and recomputes the streak downward.
pub async fn delete_today_upload(id: &str) -> Result<Habit, Error> {
    let resp = Request::delete(&habits_url(&format!("/{id}/upload")))
        .send()
        .await
        .map_err(network)?;
    decode(resp).await
}
