// ============================================================================
// Derived class name — file-naming key for generated artifacts
// ============================================================================

/// Derive the generated-code class name from a test case name.
///
/// Title-cases each whitespace-separated word, concatenates them, and strips
/// any character that is not ASCII alphanumeric. Pure and deterministic: the
/// same name always produces the same class name, and two names that
/// normalize to the same string share one artifact file (last writer wins).
///
/// `"Add to Cart Test!"` → `"AddToCartTest"`
pub fn derive_class_name(name: &str) -> String {
    name.split_whitespace()
        .map(title_case)
        .collect::<String>()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Uppercase the first character of a word, lowercase the rest.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
