//! HTTP span helpers.

use uuid::Uuid;

/// Path segments whose following segment is a free-form identifier.
const IDENTIFIER_PREFIXES: [(&str, &str); 2] = [("by-slug", "{slug}"), ("uploads", "{file}")];

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = normalise_path_for_span_name(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

fn normalise_path_for_span_name(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::from("/");
    let mut previous: Option<&str> = None;

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            normalised.push('/');
        }

        let placeholder = IDENTIFIER_PREFIXES
            .iter()
            .find(|(prefix, _)| previous == Some(*prefix))
            .map(|(_, placeholder)| *placeholder);

        if let Some(placeholder) = placeholder {
            normalised.push_str(placeholder);
        } else if Uuid::parse_str(segment).is_ok() {
            normalised.push_str("{id}");
        } else {
            normalised.push_str(segment);
        }

        previous = Some(segment);
    }

    normalised
}
