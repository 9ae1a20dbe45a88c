//! Canonicalizes the loosely shaped `points` input into an ordered list.

/// The three shapes a `points` payload arrives in. Multipart forms repeat the
/// field for a real array, send one JSON-encoded or comma-separated value for
/// a flat string, or omit it entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointsInput {
    Sequence(Vec<String>),
    Text(String),
    Absent,
}

impl PointsInput {
    /// Maps the collected occurrences of the `points` field onto the union:
    /// zero occurrences are `Absent`, one is `Text`, several are `Sequence`.
    pub fn from_fields(mut values: Vec<String>) -> Self {
        match values.len() {
            0 => PointsInput::Absent,
            1 => PointsInput::Text(values.remove(0)),
            _ => PointsInput::Sequence(values),
        }
    }
}

/// Total and deterministic: malformed input degrades to best-effort comma
/// splitting instead of erroring.
pub fn normalize(input: PointsInput) -> Vec<String> {
    match input {
        PointsInput::Sequence(values) => values,
        PointsInput::Text(text) => match serde_json::from_str::<Vec<String>>(&text) {
            Ok(values) => values,
            Err(_) => text.split(',').map(|p| p.trim().to_string()).collect(),
        },
        PointsInput::Absent => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sequence_passes_through_unchanged() {
        let input = PointsInput::Sequence(strings(&["a", " b "]));
        assert_eq!(normalize(input), strings(&["a", " b "]));
    }

    #[test]
    fn json_encoded_list_is_parsed() {
        let input = PointsInput::Text(r#"["a","b"]"#.to_string());
        assert_eq!(normalize(input), strings(&["a", "b"]));
    }

    #[test]
    fn malformed_json_falls_back_to_comma_split() {
        let input = PointsInput::Text("a, b ,c".to_string());
        assert_eq!(normalize(input), strings(&["a", "b", "c"]));
    }

    #[test]
    fn json_of_the_wrong_shape_falls_back_to_comma_split() {
        // Valid JSON, but not a list of strings
        let input = PointsInput::Text(r#"{"a": 1}"#.to_string());
        assert_eq!(normalize(input), strings(&[r#"{"a": 1}"#]));
    }

    #[test]
    fn absent_becomes_empty() {
        assert_eq!(normalize(PointsInput::Absent), Vec::<String>::new());
    }

    #[test]
    fn single_value_without_commas_is_one_point() {
        let input = PointsInput::Text("just one".to_string());
        assert_eq!(normalize(input), strings(&["just one"]));
    }

    #[test]
    fn from_fields_maps_arity_onto_the_union() {
        assert_eq!(PointsInput::from_fields(vec![]), PointsInput::Absent);
        assert_eq!(
            PointsInput::from_fields(strings(&["a,b"])),
            PointsInput::Text("a,b".to_string())
        );
        assert_eq!(
            PointsInput::from_fields(strings(&["a", "b"])),
            PointsInput::Sequence(strings(&["a", "b"]))
        );
    }

    #[test]
    fn normalization_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(
                normalize(PointsInput::Text("x , y".to_string())),
                strings(&["x", "y"])
            );
        }
    }
}
