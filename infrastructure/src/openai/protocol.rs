//! Wire types for the chat-completions API
//!
//! Only the fields this adapter reads or writes are modelled; unknown
//! response fields are ignored.

use serde::{Deserialize, Serialize};

/// Request body for `POST /chat/completions`
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    /// Provider extension asking for web search before answering.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub use_search: bool,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatMessage<'a> {
    pub fn system(content: &'a str) -> Self {
        Self {
            role: "system",
            content,
        }
    }

    pub fn user(content: &'a str) -> Self {
        Self {
            role: "user",
            content,
        }
    }
}

/// Response body of a successful completion
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if it has any.
    pub fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty())
    }
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

/// Best-effort human-readable message from an error response body.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_with_search_flag() {
        let request = ChatCompletionRequest {
            model: "kimi-search",
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("Q1")],
            use_search: true,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "kimi-search",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "Q1"}
                ],
                "use_search": true
            })
        );
    }

    #[test]
    fn test_request_without_search_flag_omits_it() {
        let request = ChatCompletionRequest {
            model: "gemini-2.0-flash-exp",
            messages: vec![ChatMessage::user("Q1")],
            use_search: false,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("use_search").is_none());
    }

    #[test]
    fn test_response_text_of_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "first"}},
                {"index": 1, "message": {"role": "assistant", "content": "second"}}
            ]
        }))
        .unwrap();
        assert_eq!(response.into_text().as_deref(), Some("first"));
    }

    #[test]
    fn test_response_without_content() {
        let response: ChatCompletionResponse =
            serde_json::from_value(json!({"choices": [{"message": {"role": "assistant"}}]}))
                .unwrap();
        assert_eq!(response.into_text(), None);

        let response: ChatCompletionResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.into_text(), None);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"error":{"message":"bad key","type":"auth"}}"#),
            "bad key"
        );
        assert_eq!(error_message("upstream down\n"), "upstream down");
        assert_eq!(error_message(""), "empty response body");
    }
}
