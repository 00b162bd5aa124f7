use anyhow::Result;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::RequestCredentials;

#[derive(Serialize)]
struct AskRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct AskResponse {
    reply: String,
}

/// One POST per message, session cookies attached; any body that
/// deserializes with a string `reply` counts as an answer regardless of
/// status code. No retry, no timeout beyond the browser's own.
#[derive(Clone, PartialEq)]
pub struct AskClient {
    base_url: String,
}

impl AskClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub async fn ask(&self, message: &str) -> Result<String> {
        let url = format!("{}/ask", self.base_url);
        let response = Request::post(&url)
            .credentials(RequestCredentials::Include)
            .json(&AskRequest { message })?
            .send()
            .await?;
        let body: AskResponse = response.json().await?;
        Ok(body.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape_matches_backend() {
        let body = serde_json::to_value(AskRequest { message: "hello" }).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "hello" }));
    }

    #[test]
    fn reply_field_is_extracted_verbatim() {
        let response: AskResponse = serde_json::from_str(r#"{"reply": "OK"}"#).unwrap();
        assert_eq!(response.reply, "OK");
    }

    #[test]
    fn extra_response_fields_are_tolerated() {
        let response: AskResponse =
            serde_json::from_str(r#"{"reply": "OK", "sources": []}"#).unwrap();
        assert_eq!(response.reply, "OK");
    }

    #[test]
    fn missing_reply_field_is_an_error() {
        assert!(serde_json::from_str::<AskResponse>(r#"{"answer": "OK"}"#).is_err());
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = AskClient::new("http://localhost:5000/");
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
