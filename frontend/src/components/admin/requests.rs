//! Request planning and dispatch.
//!
//! Planning is pure: a trigger maps to one [`RequestPlan`] (method, path,
//! optional JSON body), so paths and payloads are testable without a
//! browser. Dispatch sends the plan with `gloo-net` and folds the response
//! into a [`Completed`] value or the message to flash.

use common::model::error::ErrorResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::messages::{Action, Completed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One fully determined HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPlan {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl RequestPlan {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    pub fn post<T: Serialize>(path: impl Into<String>, payload: &T) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: serde_json::to_value(payload).ok(),
        }
    }

    pub fn put<T: Serialize>(path: impl Into<String>, payload: &T) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body: serde_json::to_value(payload).ok(),
        }
    }
}

/// Sends a planned request. The `action` decides how a 2xx response is
/// interpreted: delete ignores the body, list/search expects an array,
/// everything else a single record.
pub async fn dispatch<T: DeserializeOwned>(
    action: Action,
    plan: RequestPlan,
    base: &str,
) -> Result<Completed<T>, String> {
    let url = format!("{}{}", base, plan.path);
    let builder = match plan.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };

    let sent = match &plan.body {
        Some(body) => match builder.json(body) {
            Ok(request) => request.send().await,
            Err(err) => Err(err),
        },
        None => builder.send().await,
    };

    let response = match sent {
        Ok(response) => response,
        Err(err) => {
            gloo_console::error!("request failed", url, err.to_string());
            return Err(err.to_string());
        }
    };

    if !response.ok() {
        return Err(error_message(&response).await);
    }

    match action {
        Action::Delete => Ok(Completed::Deleted),
        Action::Search => response
            .json::<Vec<T>>()
            .await
            .map(Completed::Listing)
            .map_err(|err| err.to_string()),
        _ => response
            .json::<T>()
            .await
            .map(Completed::Entity)
            .map_err(|err| err.to_string()),
    }
}

/// Server's error message, falling back to the status line when the body is
/// not the expected `{message}` shape.
async fn error_message(response: &Response) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => format!("{} {}", response.status(), response.status_text()),
    }
}
