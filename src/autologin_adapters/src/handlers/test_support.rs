use autologin_core::ResponseBuilder;

/// Response builder that records what the handler produced.
#[derive(Debug, Default)]
pub struct RecordedResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl RecordedResponse {
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl ResponseBuilder for RecordedResponse {
    type Response = RecordedResponse;

    fn status(mut self, code: u16) -> Self {
        self.status = code;
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    fn build(self) -> Self::Response {
        self
    }
}
