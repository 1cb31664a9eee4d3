use crate::namespace::{MULTI_WILDCARD, SINGLE_WILDCARD};

fn is_wildcard(c: char) -> bool {
	c == SINGLE_WILDCARD || c == MULTI_WILDCARD
}

/// True if the component contains either wildcard symbol.
pub fn component_has_wildcard(component: &str) -> bool {
	component.chars().any(is_wildcard)
}

/// True if the component contains the single-character wildcard and no
/// multi-character wildcard.
pub fn component_has_single_character_wildcard(component: &str) -> bool {
	component.contains(SINGLE_WILDCARD) && !component.contains(MULTI_WILDCARD)
}

/// True if the component contains the multi-character wildcard and no
/// single-character wildcard.
pub fn component_has_multi_character_wildcard(component: &str) -> bool {
	component.contains(MULTI_WILDCARD) && !component.contains(SINGLE_WILDCARD)
}

/// Match `text` against a glob `pattern` within a single component.
///
/// `?` consumes exactly one character and `*` consumes zero or more. Any
/// number of wildcards may appear; on mismatch the most recent `*` is
/// widened by one character and matching resumes from there.
pub fn glob_match(pattern: &str, text: &str) -> bool {
	if !component_has_wildcard(pattern) {
		return pattern == text;
	}

	let pattern: Vec<char> = pattern.chars().collect();
	let text: Vec<char> = text.chars().collect();

	let mut pi = 0;
	let mut ti = 0;
	// (pattern index after the star, text index the star currently extends to)
	let mut backtrack: Option<(usize, usize)> = None;

	while ti < text.len() {
		match pattern.get(pi) {
			Some(&c) if c == MULTI_WILDCARD => {
				pi += 1;
				backtrack = Some((pi, ti));
			}
			Some(&c) if c == SINGLE_WILDCARD || c == text[ti] => {
				pi += 1;
				ti += 1;
			}
			_ => match backtrack {
				Some((star_pi, star_ti)) => {
					pi = star_pi;
					ti = star_ti + 1;
					backtrack = Some((star_pi, ti));
				}
				None => return false,
			},
		}
	}

	pattern[pi..].iter().all(|&c| c == MULTI_WILDCARD)
}
