use crate::domain::entities::Response;
use colored::Colorize;
use serde_json::Value;

/// Fills in for an empty response body so the terminal shows something.
const EMPTY_BODY_PLACEHOLDER: &str = "<empty>";

/// Prints the status line, every response header, and the rendered body.
pub fn print_response(response: &Response) {
    println!("\nResponse:");
    println!("{}", format!("Status: {}", response.status).cyan());
    println!("Headers:");
    for (name, value) in &response.headers {
        println!("  {}: {}", name, value);
    }
    println!("\nBody:");
    print_response_body(&response.body);
}

pub fn print_response_body(body: &str) {
    let rendered = format_body(body);
    if !body.is_empty() && serde_json::from_str::<Value>(body).is_ok() {
        println!("{}", rendered.green());
    } else {
        println!("{}", rendered.white());
    }
}

/// Valid JSON is re-serialized with two-space indentation; anything else is
/// passed through verbatim. An empty body becomes a literal placeholder.
fn format_body(body: &str) -> String {
    if body.is_empty() {
        return EMPTY_BODY_PLACEHOLDER.to_string();
    }
    match serde_json::from_str::<Value>(body) {
        Ok(json) => serde_json::to_string_pretty(&json).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_json_is_reindented_with_two_spaces() {
        assert_eq!(format_body(r#"{"a":1}"#), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn non_json_passes_through_verbatim() {
        assert_eq!(format_body("not json"), "not json");
    }

    #[test]
    fn empty_body_renders_a_placeholder() {
        assert_eq!(format_body(""), "<empty>");
    }

    #[test]
    fn nested_json_keeps_its_structure() {
        let formatted = format_body(r#"{"items":[{"id":1}]}"#);
        assert!(formatted.contains("\"items\": ["));
        assert!(formatted.contains("      \"id\": 1"));
    }
}
