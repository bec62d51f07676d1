//! Signature normalization
//!
//! Different tools print the same code entity differently: `a.B#m(java.lang.String)`,
//! `a.B.m(String)` and `a.B.m( String )` all name one method. [`normalize`]
//! maps every such spelling onto one canonical text so relationships built
//! from different tools compare equal.

/// Canonicalize an entity signature
///
/// 1. Drops generic type-argument lists, at any nesting depth.
/// 2. Turns `#` member separators into `.` and removes all whitespace.
/// 3. For a method signature with qualified parameter types, keeps only
///    the simple name of each parameter type.
///
/// Never fails; malformed input yields a best-effort result.
///
/// # Examples
///
/// ```
/// use refbench_domain::signature::normalize;
///
/// assert_eq!(normalize("a.B#m(java.lang.String)"), "a.B.m(String)");
/// assert_eq!(normalize("Map<String, List<Foo>>.bar()"), "Map.bar()");
/// ```
pub fn normalize(raw: &str) -> String {
    let unified: String = strip_type_arguments(raw)
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '#' { '.' } else { c })
        .collect();
    simplify_parameter_types(&unified)
}

/// Remove everything between matching `<` and `>`
///
/// An unmatched `>` is dropped; an unmatched `<` drops the rest of the input.
pub fn strip_type_arguments(raw: &str) -> String {
    let mut depth = 0usize;
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Remove every parenthesised parameter list, e.g. `a.B.m(int)` becomes `a.B.m`
pub fn strip_parameters(entity: &str) -> String {
    let mut depth = 0usize;
    let mut out = String::with_capacity(entity.len());
    for c in entity.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Container of an entity: the text before the last `.` outside the
/// parameter list
///
/// `a.B.m(x.Y)` has container `a.B`; `a.B` has container `a`; `B` has none.
pub fn parent_of(entity: &str) -> Option<&str> {
    let head = match entity.find('(') {
        Some(open) => &entity[..open],
        None => entity,
    };
    head.rfind('.').map(|dot| &entity[..dot])
}

fn simplify_parameter_types(signature: &str) -> String {
    let Some(open) = signature.find('(') else {
        return signature.to_string();
    };
    match signature.rfind('.') {
        Some(last_dot) if last_dot > open => {}
        _ => return signature.to_string(),
    }

    let close = signature.rfind(')').filter(|&close| close > open);
    let (params, suffix) = match close {
        Some(close) => (&signature[open + 1..close], &signature[close..]),
        None => (&signature[open + 1..], ""),
    };

    let simplified: Vec<String> = params.split(',').map(simple_type_name).collect();

    let mut out = String::with_capacity(signature.len());
    out.push_str(&signature[..=open]);
    out.push_str(&simplified.join(","));
    out.push_str(suffix);
    out
}

fn simple_type_name(param: &str) -> String {
    // varargs keep their ellipsis
    if let Some(base) = param.strip_suffix("...") {
        return format!("{}...", after_last_dot(base));
    }
    after_last_dot(param).to_string()
}

fn after_last_dot(s: &str) -> &str {
    match s.rfind('.') {
        Some(dot) => &s[dot + 1..],
        None => s,
    }
}
