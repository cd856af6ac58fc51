//! File download responses.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::ports::ExportedDocument;

/// Characters allowed unescaped in an RFC 5987 `filename*` value.
fn is_attr_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#' | b'$' | b'&' | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
        )
}

fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        if is_attr_char(b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    out
}

/// Printable ASCII stand-in for clients that ignore `filename*`.
fn ascii_fallback(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect()
}

/// `attachment` disposition carrying both filename forms.
pub fn content_disposition(filename: &str) -> String {
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii_fallback(filename),
        percent_encode(filename)
    )
}

/// Sends an exported document as an attachment.
pub fn download_response(document: ExportedDocument) -> Response {
    let disposition = content_disposition(&document.filename);
    let (Ok(content_type), Ok(disposition)) = (
        HeaderValue::from_str(&document.content_type),
        HeaderValue::from_str(&disposition),
    ) else {
        tracing::error!(filename = %document.filename, "export produced invalid headers");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.content,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accented_names_are_percent_encoded() {
        assert_eq!(
            content_disposition("Evaluacion_Genética.doc"),
            "attachment; filename=\"Evaluacion_Gen_tica.doc\"; filename*=UTF-8''Evaluacion_Gen%C3%A9tica.doc"
        );
    }

    #[test]
    fn quotes_never_reach_the_plain_filename() {
        let header = content_disposition("Plan_\"Clase\".doc");
        assert!(header.starts_with("attachment; filename=\"Plan__Clase_.doc\";"));
    }

    #[test]
    fn response_carries_word_headers() {
        let doc = ExportedDocument::new(b"<html>".to_vec(), "application/msword", "Plantilla_Titulares.doc");
        let response = download_response(doc);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/msword"
        );
        assert!(response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .contains("Plantilla_Titulares.doc"));
    }

    proptest! {
        #[test]
        fn disposition_is_always_a_valid_header(name in "\\PC{0,40}") {
            let value = content_disposition(&name);
            prop_assert!(HeaderValue::from_str(&value).is_ok());
        }
    }
}
