use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Response {
    pub status: String,
    pub message: String,
}

impl Response {
    pub fn success(message: &str) -> Self {
        Response {
            status: "success".to_string(),
            message: message.to_string(),
        }
    }

    pub fn failed(message: &str) -> Self {
        Response {
            status: "failed".to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}
