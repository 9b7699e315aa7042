use crate::error::{Error, ErrorInfo};
use crate::utils::LocalSessionStore;
use log::error;
use reqwasm::http::Request;
use serde::{de::DeserializeOwned, Serialize};
use shared::model::SessionCache;

const CONTENT_TYPE_JSON: &str = "application/json";

enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Cache over browser storage. Built per call, it holds no state itself.
pub fn session_cache() -> SessionCache<LocalSessionStore> {
    SessionCache::new(LocalSessionStore)
}

/// build all kinds of http request: post/get/delete etc.
async fn request<B, T>(method: RequestMethod, url: &str, body: Option<B>) -> Result<T, Error>
where
    T: DeserializeOwned + 'static,
    B: Serialize,
{
    let payload = body
        .map(|b| serde_json::to_string(&b).map_err(|_| Error::RequestError))
        .transpose()?;
    let mut request = match method {
        RequestMethod::Get => Request::get(url),
        RequestMethod::Post => Request::post(url),
        RequestMethod::Put => Request::put(url),
        RequestMethod::Delete => Request::delete(url),
    };
    if let Some(json) = payload {
        request = request.body(json).header("Content-Type", CONTENT_TYPE_JSON);
    }
    if let Some(session) = session_cache().get() {
        request = request.header("Authorization", format!("Bearer {}", session.token).as_str());
    }

    match request.send().await {
        Ok(response) => {
            let status = response.status();
            if (200..300).contains(&status) {
                response.json::<T>().await.map_err(|err| {
                    error!("Failed to deserialize {err}");
                    Error::DeserializeError
                })
            } else {
                let code = response.json::<ErrorInfo>().await.ok().map(|info| info.error);
                Err(Error::from_status(status, code))
            }
        }
        Err(e) => {
            error!("{e}");
            Err(Error::RequestError)
        }
    }
}

/// Delete request
pub async fn request_delete<T>(url: &str) -> Result<T, Error>
where
    T: DeserializeOwned + 'static,
{
    request::<(), T>(RequestMethod::Delete, url, None).await
}

/// Get request
pub async fn request_get<T>(url: &str) -> Result<T, Error>
where
    T: DeserializeOwned + 'static,
{
    request::<(), T>(RequestMethod::Get, url, None).await
}

/// Post request with a body
pub async fn request_post<B, T>(url: &str, body: B) -> Result<T, Error>
where
    T: DeserializeOwned + 'static,
    B: Serialize,
{
    request(RequestMethod::Post, url, Some(body)).await
}

/// Put request with a body
pub async fn request_put<B, T>(url: &str, body: B) -> Result<T, Error>
where
    T: DeserializeOwned + 'static,
    B: Serialize,
{
    request(RequestMethod::Put, url, Some(body)).await
}
