use gloo_net::http::{Request, RequestBuilder, Response};
use shared::{service_error_from_body, ServiceError};

/// Creates a request carrying the project's API key headers
pub fn service_request(method: &str, url: &str, anon_key: &str) -> RequestBuilder {
    let req = match method.to_uppercase().as_str() {
        "GET" => Request::get(url),
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "DELETE" => Request::delete(url),
        "PATCH" => Request::patch(url),
        _ => Request::get(url), // Default to GET
    };

    if anon_key.is_empty() {
        return req;
    }

    req.header("apikey", anon_key)
        .header("Authorization", &format!("Bearer {}", anon_key))
}

/// Turns a non-success response into a [`ServiceError`]
pub async fn error_from_response(response: Response) -> ServiceError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    service_error_from_body(status, &body)
}

pub fn network_error(context: &str, error: gloo_net::Error) -> ServiceError {
    ServiceError::network(format!("{}: {}", context, error))
}
