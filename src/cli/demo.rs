use super::convert_values;
use crate::case::CaseConvention;
use crate::cli::output::{print_section, print_text_conversions};
use serde_json::{json, Value};

/// Example inputs, grouped the way the demo prints them.
pub fn sections() -> Vec<(&'static str, Vec<Value>)> {
    vec![
        (
            "Basic conversions",
            vec![
                json!("hello world"),
                json!("user_id"),
                json!("SCREEN_NAME"),
                json!("mobile-number"),
            ],
        ),
        (
            "CamelCase conversions",
            vec![
                json!("firstName"),
                json!("XMLHttpRequest"),
                json!("myComponentName"),
                json!("alreadyCamelCase"),
            ],
        ),
        (
            "With numbers",
            vec![
                json!("user_id_123"),
                json!("user123Id"),
                json!("version2Update"),
                json!("mobile_number-123"),
            ],
        ),
        (
            "Edge cases",
            vec![
                json!(""),
                json!("   "),
                json!("___"),
                json!("single"),
                json!("HELLO"),
                json!("   trim   spaces   "),
                json!("multiple___separators"),
            ],
        ),
        (
            "Mixed separators",
            vec![
                json!("first-name_last name"),
                json!("FIRST_name-LAST"),
                json!("mix.of-all_separators here"),
                json!("React.Component.Name"),
            ],
        ),
        (
            "Error handling",
            vec![json!(null), json!(123), json!({}), json!([])],
        ),
    ]
}

pub fn run(conventions: &[CaseConvention], colored: bool) {
    for (title, inputs) in sections() {
        print_section(title, colored);
        let conversions = convert_values(&inputs, conventions, false);
        print_text_conversions(&conversions, colored);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_error_section_is_invalid() {
        for (title, inputs) in sections() {
            let conversions = convert_values(&inputs, &CaseConvention::ALL, false);
            let all_invalid = conversions.iter().all(|c| !c.is_valid());
            let all_valid = conversions.iter().all(|c| c.is_valid());

            if title == "Error handling" {
                assert!(all_invalid);
            } else {
                assert!(all_valid, "{title} should convert cleanly");
            }
        }
    }
}
