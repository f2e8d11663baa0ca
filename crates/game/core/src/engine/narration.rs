//! Positional narration templates.

/// Replaces `%1`, `%2`, ... with the matching argument.
///
/// Placeholders without a matching argument are kept verbatim, as is a `%`
/// not followed by digits.
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let digits = after
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after.len());

        let arg = after[..digits]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| args.get(index));

        match arg {
            Some(arg) => out.push_str(arg),
            None => out.push_str(&rest[pos..pos + 1 + digits]),
        }
        rest = &after[digits..];
    }

    out.push_str(rest);
    out
}
