//! REST client for the clinic booking API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` against
//! [`API_BASE`](crate::config::API_BASE).
//! Native builds: stubs returning `None`, since these endpoints are only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is typed as [`ApiError`] and logged at `error`, then collapsed
//! to `None`. Callers treat "no result" and a falsy result (empty list,
//! `success: false`, missing `id`) the same way. POST is the one exception:
//! a non-2xx body that still decodes is returned so the server's `error`
//! text can reach the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use booking::{
    Appointment, Branch, CancelResponse, Category, CreateAppointmentRequest, CreateAppointmentResponse, Doctor, Id,
    Service, SlotQuery, SlotsResponse,
};

/// Why a request produced no usable result.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{method} {url}: transport error: {message}")]
    Transport {
        method: &'static str,
        url: String,
        message: String,
    },
    #[error("{method} {url}: status {status}")]
    Status { method: &'static str, url: String, status: u16 },
    #[error("{method} {url}: undecodable body: {message}")]
    Decode {
        method: &'static str,
        url: String,
        message: String,
    },
}

#[cfg(any(test, feature = "csr"))]
fn categories_path() -> String {
    "/services/categories".to_owned()
}

#[cfg(any(test, feature = "csr"))]
fn services_path(category: Option<Id>) -> String {
    match category {
        Some(id) => format!("/services?category={id}"),
        None => "/services".to_owned(),
    }
}

#[cfg(any(test, feature = "csr"))]
fn doctors_path(branch: Option<Id>) -> String {
    match branch {
        Some(id) => format!("/doctors?branch={id}"),
        None => "/doctors".to_owned(),
    }
}

#[cfg(any(test, feature = "csr"))]
fn branches_path() -> String {
    "/branches".to_owned()
}

#[cfg(any(test, feature = "csr"))]
fn appointments_path(telegram_id: i64) -> String {
    format!("/appointments?telegram_id={telegram_id}")
}

#[cfg(any(test, feature = "csr"))]
fn slots_path(query: &SlotQuery) -> String {
    format!("/slots?doctor={}&date={}", query.doctor_id, query.date)
}

#[cfg(any(test, feature = "csr"))]
fn create_appointment_path() -> String {
    "/appointments".to_owned()
}

#[cfg(any(test, feature = "csr"))]
fn appointment_path(id: Id) -> String {
    format!("/appointments/{id}")
}

#[cfg(feature = "csr")]
fn collapse<T>(result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("api: {err}");
            None
        }
    }
}

#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(
    method: &'static str,
    url: &str,
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode {
        method,
        url: url.to_owned(),
        message: e.to_string(),
    })
}

#[cfg(feature = "csr")]
fn transport(method: &'static str, url: &str, err: gloo_net::Error) -> ApiError {
    ApiError::Transport {
        method,
        url: url.to_owned(),
        message: err.to_string(),
    }
}

/// GET `path` and decode a JSON body; non-2xx is a failure.
#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Option<T> {
    let url = crate::config::api_url(path);
    collapse(
        async {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| transport("GET", &url, e))?;
            if !resp.ok() {
                return Err(ApiError::Status {
                    method: "GET",
                    url: url.clone(),
                    status: resp.status(),
                });
            }
            decode("GET", &url, resp).await
        }
        .await,
    )
}

/// POST `body` as JSON to `path`; the body is decoded whatever the status.
#[cfg(feature = "csr")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(path: &str, body: &B) -> Option<T> {
    let url = crate::config::api_url(path);
    collapse(
        async {
            let resp = gloo_net::http::Request::post(&url)
                .json(body)
                .map_err(|e| transport("POST", &url, e))?
                .send()
                .await
                .map_err(|e| transport("POST", &url, e))?;
            if !resp.ok() {
                log::warn!("api: POST {url}: status {}", resp.status());
            }
            decode("POST", &url, resp).await
        }
        .await,
    )
}

/// DELETE `path` and decode a JSON body; non-2xx is a failure.
#[cfg(feature = "csr")]
async fn delete_json<T: serde::de::DeserializeOwned>(path: &str) -> Option<T> {
    let url = crate::config::api_url(path);
    collapse(
        async {
            let resp = gloo_net::http::Request::delete(&url)
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(|e| transport("DELETE", &url, e))?;
            if !resp.ok() {
                return Err(ApiError::Status {
                    method: "DELETE",
                    url: url.clone(),
                    status: resp.status(),
                });
            }
            decode("DELETE", &url, resp).await
        }
        .await,
    )
}

/// Fetch service categories from `/services/categories`.
pub async fn fetch_categories() -> Option<Vec<Category>> {
    #[cfg(feature = "csr")]
    {
        get_json(&categories_path()).await
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Fetch services, optionally limited to one category.
pub async fn fetch_services(category: Option<Id>) -> Option<Vec<Service>> {
    #[cfg(feature = "csr")]
    {
        get_json(&services_path(category)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = category;
        None
    }
}

/// Fetch doctors, optionally limited to one branch.
pub async fn fetch_doctors(branch: Option<Id>) -> Option<Vec<Doctor>> {
    #[cfg(feature = "csr")]
    {
        get_json(&doctors_path(branch)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = branch;
        None
    }
}

pub async fn fetch_branches() -> Option<Vec<Branch>> {
    #[cfg(feature = "csr")]
    {
        get_json(&branches_path()).await
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Fetch the visitor's appointments.
pub async fn fetch_appointments(telegram_id: i64) -> Option<Vec<Appointment>> {
    #[cfg(feature = "csr")]
    {
        get_json(&appointments_path(telegram_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = telegram_id;
        None
    }
}

/// Fetch free slots for a doctor on a date.
pub async fn fetch_slots(query: &SlotQuery) -> Option<SlotsResponse> {
    #[cfg(feature = "csr")]
    {
        get_json(&slots_path(query)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = query;
        None
    }
}

/// Create an appointment via `POST /appointments`.
pub async fn create_appointment(request: &CreateAppointmentRequest) -> Option<CreateAppointmentResponse> {
    #[cfg(feature = "csr")]
    {
        post_json(&create_appointment_path(), request).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        None
    }
}

/// Cancel an appointment via `DELETE /appointments/{id}`.
pub async fn cancel_appointment(id: Id) -> Option<CancelResponse> {
    #[cfg(feature = "csr")]
    {
        delete_json(&appointment_path(id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        None
    }
}
