/// Marker line the prompts instruct the model to emit before the diagram
/// description. Responses are split on its first occurrence.
pub const IMAGE_MARKER: &str = "IMAGE DESCRIPTION:";

/// Split a generated response into body text and an optional image
/// description. The body is everything before the first marker, trimmed.
/// A missing marker, or a marker with nothing after it, yields `None` for
/// the description rather than an error.
pub fn split_image_marker(response: &str) -> (String, Option<String>) {
    match response.split_once(IMAGE_MARKER) {
        Some((body, description)) => {
            let description = description.trim();
            (
                body.trim().to_string(),
                if description.is_empty() {
                    None
                } else {
                    Some(description.to_string())
                },
            )
        }
        None => (response.trim().to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_marker() {
        let response = "Explanation body\nIMAGE DESCRIPTION:\n  A diagram of X  ";
        let (text, description) = split_image_marker(response);
        assert_eq!(text, "Explanation body");
        assert_eq!(description, Some("A diagram of X".to_string()));
    }

    #[test]
    fn test_split_without_marker() {
        let (text, description) = split_image_marker("  Just an explanation.  ");
        assert_eq!(text, "Just an explanation.");
        assert!(description.is_none());
    }

    #[test]
    fn test_split_marker_with_empty_tail() {
        let (text, description) = split_image_marker("Body\nIMAGE DESCRIPTION:\n   ");
        assert_eq!(text, "Body");
        assert!(description.is_none());
    }

    #[test]
    fn test_split_on_first_marker_only() {
        let response = "Body\nIMAGE DESCRIPTION: first\nIMAGE DESCRIPTION: second";
        let (text, description) = split_image_marker(response);
        assert_eq!(text, "Body");
        assert_eq!(
            description,
            Some("first\nIMAGE DESCRIPTION: second".to_string())
        );
    }

    #[test]
    fn test_split_empty_response() {
        let (text, description) = split_image_marker("");
        assert_eq!(text, "");
        assert!(description.is_none());
    }
}
