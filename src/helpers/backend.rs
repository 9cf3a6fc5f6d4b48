use thiserror::Error;

/// How a request to the quiz server can go wrong. Every arm ends up in
/// front of the user as a toast; none of them is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The service could not be reached at all.
    #[error("connection error: {0}")]
    Connection(String),

    /// The service answered with a non-2xx status. `message` is the JSON
    /// `message` field when the body has one, otherwise the raw body,
    /// otherwise the HTTP status text.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// A 2xx answer whose body did not decode as the expected JSON.
    #[error("response error: {0}")]
    Response(String),

    /// Anything else (non-UTF-8 payload, unserializable request).
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AuthOk {
    pub message: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Profile {
    pub username: String,
    pub email: String,
    pub joined: String,
    pub tests_taken: u32,
    pub average_score: f32,
}

#[derive(Clone, PartialEq, serde::Serialize)]
struct LoginSchema {
    username: String,
    password: String,
}

#[derive(Clone, PartialEq, serde::Serialize)]
struct RegisterSchema {
    username: String,
    email: String,
    password: String,
}

#[derive(serde::Deserialize)]
struct ServerMessage {
    message: String,
}

/// The remote quiz service, seen as three opaque request/response calls.
/// The router talks to this trait only, which keeps the navigation logic
/// testable without a server.
pub trait QuizApi {
    fn login(&self, username: &str, password: &str) -> Result<AuthOk, ApiError>;
    fn register(&self, username: &str, email: &str, password: &str) -> Result<AuthOk, ApiError>;
    fn fetch_profile(&self, username: &str) -> Result<Profile, ApiError>;
}

/// Live implementation over `ehttp`. Calls block the UI thread until the
/// server answers; there is no timeout and no background worker.
pub struct HttpApi {
    url: String,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self {
            url: option_env!("QUIZ_BACKEND_URL")
                .unwrap_or("http://127.0.0.1:5000/")
                .to_string(),
        }
    }
}

impl HttpApi {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }

    fn post_json(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<ehttp::Response, ApiError> {
        let url = format!("{}{}", self.url, path);
        log::debug!("Sending to {}", url);
        let body = serde_json::to_vec(body).map_err(|e| ApiError::Unexpected(e.to_string()))?;
        let mut request = ehttp::Request::post(url, body);
        request
            .headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        ehttp::fetch_blocking(&request).map_err(ApiError::Connection)
    }
}

impl QuizApi for HttpApi {
    fn login(&self, username: &str, password: &str) -> Result<AuthOk, ApiError> {
        let schema = LoginSchema {
            username: username.to_string(),
            password: password.to_string(),
        };
        let result = decode(self.post_json("login", &schema)?);
        log::info!("Login result: {:?}", result);
        result
    }

    fn register(&self, username: &str, email: &str, password: &str) -> Result<AuthOk, ApiError> {
        let schema = RegisterSchema {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = decode(self.post_json("register", &schema)?);
        log::info!("Register result: {:?}", result);
        result
    }

    fn fetch_profile(&self, username: &str) -> Result<Profile, ApiError> {
        let url = format!("{}profile/{}", self.url, username);
        log::debug!("Sending to {}", url);
        let request = ehttp::Request::get(url);
        let response = ehttp::fetch_blocking(&request).map_err(ApiError::Connection)?;
        decode(response)
    }
}

/// Split a response into the three outcomes the application knows about:
/// payload, server error with a message, or an undecodable body.
fn decode<T: serde::de::DeserializeOwned>(response: ehttp::Response) -> Result<T, ApiError> {
    if !response.ok {
        return Err(ApiError::Server {
            status: response.status,
            message: error_message(&response),
        });
    }
    let text = response
        .text()
        .ok_or_else(|| ApiError::Unexpected("response body is not UTF-8".to_string()))?;
    serde_json::from_str(text).map_err(|e| ApiError::Response(e.to_string()))
}

fn error_message(response: &ehttp::Response) -> String {
    match response.text() {
        Some(text) if !text.is_empty() => match serde_json::from_str::<ServerMessage>(text) {
            Ok(server) => server.message,
            Err(_) => text.to_string(),
        },
        _ => response.status_text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, status_text: &str, body: &str) -> ehttp::Response {
        ehttp::Response {
            url: "http://127.0.0.1:5000/login".to_string(),
            ok: (200..300).contains(&status),
            status,
            status_text: status_text.to_string(),
            headers: Default::default(),
            bytes: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn ok_body_decodes() {
        let ok: AuthOk =
            decode(response(200, "OK", r#"{"message":"ok","username":"u1"}"#)).unwrap();
        assert_eq!(ok.username, "u1");
        assert_eq!(ok.message, "ok");
    }

    #[test]
    fn profile_body_decodes() {
        let body = r#"{
            "username": "u1",
            "email": "u1@example.com",
            "joined": "2024-03-01",
            "tests_taken": 4,
            "average_score": 72.5
        }"#;
        let profile: Profile = decode(response(200, "OK", body)).unwrap();
        assert_eq!(profile.tests_taken, 4);
    }

    #[test]
    fn server_error_extracts_json_message() {
        let err = decode::<AuthOk>(response(401, "Unauthorized", r#"{"message":"bad credentials"}"#))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 401,
                message: "bad credentials".to_string()
            }
        );
    }

    #[test]
    fn server_error_falls_back_to_raw_body() {
        let err = decode::<AuthOk>(response(500, "Internal Server Error", "boom")).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn server_error_with_empty_body_uses_status_text() {
        let err = decode::<AuthOk>(response(503, "Service Unavailable", "")).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 503,
                message: "Service Unavailable".to_string()
            }
        );
    }

    #[test]
    fn malformed_success_body_is_a_response_error() {
        let err = decode::<AuthOk>(response(200, "OK", "{not json")).unwrap_err();
        assert!(matches!(err, ApiError::Response(_)));
    }

    #[test]
    fn non_utf8_body_is_unexpected() {
        let mut garbled = response(200, "OK", "");
        garbled.bytes = vec![0xf0, 0x28, 0x8c, 0x28];
        let err = decode::<AuthOk>(garbled).unwrap_err();
        assert!(matches!(err, ApiError::Unexpected(_)));
    }
}
