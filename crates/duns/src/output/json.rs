//! JSON output formatting.

/// Format a value as pretty-printed JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use duns_core::dun::Dun;

    #[test]
    fn test_format_json_dun() {
        let dun = Dun::new("Pisa", "Tower").with_id("a");

        let value: serde_json::Value = serde_json::from_str(&format_json(&dun)).unwrap();

        assert_eq!(value["id"], "a");
        assert_eq!(value["title"], "Pisa");
        assert_eq!(value["completed"], false);
    }
}
