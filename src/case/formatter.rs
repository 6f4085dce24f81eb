use super::CaseConvention;

/// Join lowercase tokens under `convention`.
pub fn format(tokens: &[String], convention: CaseConvention) -> String {
    match tokens {
        [] => String::new(),
        [single] => single.to_lowercase(),
        _ => match convention {
            CaseConvention::Camel => camel(tokens),
            CaseConvention::Kebab => tokens.join("-"),
            CaseConvention::Dot => tokens.join("."),
        },
    }
}

fn camel(tokens: &[String]) -> String {
    let mut result = String::with_capacity(tokens.iter().map(String::len).sum());

    for (i, token) in tokens.iter().enumerate() {
        if i == 0 {
            result.push_str(token);
            continue;
        }

        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
        }
    }

    result
}
