// ABOUTME: Image attachments for vision prompts decoded from data URIs or bare base64
// ABOUTME: Rejects undecodable or non-image payloads before any AI call is made
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::errors::{AppError, AppResult};

/// MIME type assumed for bare base64 payloads
pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Binary image sent inline alongside a prompt
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    /// Declared MIME type, `image/*`
    pub mime_type: String,
    /// Raw image bytes
    pub data: Vec<u8>,
}

impl std::fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl ImageAttachment {
    /// Decode a client-supplied image
    ///
    /// Accepts `data:<mime>;base64,<payload>` URIs, keeping the declared MIME
    /// type, or a bare base64 payload which is assumed to be JPEG.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the payload is empty, is not base64, or
    /// declares a non-image MIME type.
    pub fn from_encoded(encoded: &str) -> AppResult<Self> {
        let encoded = encoded.trim();

        let (mime_type, payload) = match encoded.strip_prefix("data:") {
            Some(rest) => {
                let (header, payload) = rest.split_once(',').ok_or_else(|| {
                    AppError::invalid_input("Image data URI is missing its ',' separator")
                })?;
                let mut params = header.split(';');
                let mime = params.next().unwrap_or_default().trim();
                if !params.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
                    return Err(AppError::invalid_input(
                        "Image data URI must be base64 encoded",
                    ));
                }
                let mime = if mime.is_empty() {
                    DEFAULT_IMAGE_MIME_TYPE
                } else {
                    mime
                };
                (mime.to_ascii_lowercase(), payload)
            }
            None => (DEFAULT_IMAGE_MIME_TYPE.to_owned(), encoded),
        };

        if !mime_type.starts_with("image/") {
            return Err(AppError::invalid_input(format!(
                "Unsupported attachment type '{mime_type}', expected an image"
            )));
        }

        let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(AppError::invalid_input("Image payload is empty"));
        }

        let data = STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| AppError::invalid_input(format!("Image is not valid base64: {e}")))?;

        Ok(Self { mime_type, data })
    }

    /// Base64 form for inline transport
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_data_uri_keeps_declared_mime_type() {
        let image = ImageAttachment::from_encoded("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_bare_base64_defaults_to_jpeg() {
        let image = ImageAttachment::from_encoded("/9j/4AAQ").unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, [0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10]);
        assert_eq!(image.to_base64(), "/9j/4AAQ");
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        let err = ImageAttachment::from_encoded("data:image/jpeg;base64,not base64!!").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("base64"));
    }

    #[test]
    fn test_non_image_mime_is_rejected() {
        let err = ImageAttachment::from_encoded("data:text/plain;base64,aGVsbG8=").unwrap_err();
        assert!(err.message.contains("text/plain"));
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        assert!(ImageAttachment::from_encoded("data:image/jpeg;base64,").is_err());
        assert!(ImageAttachment::from_encoded("   ").is_err());
    }
}
