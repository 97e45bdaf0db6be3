//! Argument splitting for CSS function calls

/// Split the inner text of a function call into its top-level arguments.
///
/// Commas nested inside parentheses (`rgba(0, 0, 0, 0.5)`) or inside quoted
/// spans are kept. Every part is trimmed and whitespace-only parts are dropped,
/// so an empty input yields an empty list.
pub fn split_arguments(input: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut paren_depth: i32 = 0;
    let mut in_quotes = false;

    for c in input.chars() {
        match c {
            '"' | '\'' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            '(' if !in_quotes => {
                paren_depth += 1;
                current.push(c);
            }
            ')' if !in_quotes => {
                paren_depth = (paren_depth - 1).max(0);
                current.push(c);
            }
            ',' if !in_quotes && paren_depth == 0 => {
                push_trimmed(&mut parts, &current);
                current.clear();
            }
            _ => current.push(c),
        }
    }

    push_trimmed(&mut parts, &current);
    parts
}

fn push_trimmed(parts: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
}
