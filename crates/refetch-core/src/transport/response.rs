//! Response returned by a transport.

use serde::de::DeserializeOwned;

/// Status, headers and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u32,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Response {
    pub fn new(status: u32, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn response_code(&self) -> u32 {
        self.status
    }

    /// True for status codes in `[200, 300)`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Body decoded as UTF-8; invalid sequences are replaced.
    pub fn content_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body parsed as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn resp(status: u32) -> Response {
        Response::new(
            status,
            vec![("Content-Type".to_string(), "application/json".to_string())],
            br#"{"name":"refetch","count":3}"#.to_vec(),
        )
    }

    #[test]
    fn success_range_boundaries() {
        assert!(resp(200).is_success());
        assert!(resp(299).is_success());
        assert!(!resp(199).is_success());
        assert!(!resp(300).is_success());
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let r = resp(200);
        assert_eq!(r.header("content-type"), Some("application/json"));
        assert_eq!(r.header("etag"), None);
    }

    #[test]
    fn json_and_text_accessors() {
        #[derive(Deserialize)]
        struct Payload {
            name: String,
            count: u32,
        }
        let r = resp(200);
        let p: Payload = r.json().unwrap();
        assert_eq!(p.name, "refetch");
        assert_eq!(p.count, 3);
        assert!(r.content_text().starts_with("{\"name\""));
    }
}
