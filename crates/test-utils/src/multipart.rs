//! Hand-built `multipart/form-data` bodies for HTTP tests.

/// Boundary used by [`MultipartBody`].
pub const TEST_BOUNDARY: &str = "----weather-image-test-boundary";

/// Builder for a `multipart/form-data` request body.
#[derive(Debug, Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain text field.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{TEST_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    /// Add a file field.
    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{TEST_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// `Content-Type` header value for this body.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={TEST_BOUNDARY}")
    }

    /// Close the body and return its bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{TEST_BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_layout() {
        let body = MultipartBody::new().text("metadata", "{}").finish();
        let text = String::from_utf8(body).unwrap();

        assert!(text.starts_with(&format!("--{TEST_BOUNDARY}\r\n")));
        assert!(text.contains("name=\"metadata\"\r\n\r\n{}\r\n"));
        assert!(text.ends_with(&format!("--{TEST_BOUNDARY}--\r\n")));
    }
}
