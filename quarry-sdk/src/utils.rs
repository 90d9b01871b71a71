use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use quarry_types::error::Error;

/// Characters escaped inside a single path segment, RFC 3986.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%');

/// Expands a path template like `/_security/user/{username}`, substituting
/// each `{name}` placeholder with its percent-encoded value from `vars`.
pub(crate) fn expand(template: &str, vars: &[(&str, &str)]) -> Result<String, Error> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| {
            Error::Encoding(format!("unbalanced '{{' in path template `{template}`"))
        })?;
        let name = &after[..end];
        let value = vars
            .iter()
            .find(|(var, _)| *var == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| Error::Encoding(format!("no value for path variable `{name}`")))?;
        out.extend(utf8_percent_encode(value, PATH_SEGMENT));
        rest = &after[end + 1..];
    }
    if rest.contains('}') {
        return Err(Error::Encoding(format!(
            "unbalanced '}}' in path template `{template}`"
        )));
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_placeholders() {
        let path = expand("/_security/user/{username}", &[("username", "alice")]);
        assert_eq!(path.ok(), Some("/_security/user/alice".to_string()));
    }

    #[test]
    fn escapes_reserved_characters_per_segment() {
        let path = expand("/_security/user/{username}", &[("username", "a/b c")]);
        assert_eq!(path.ok(), Some("/_security/user/a%2Fb%20c".to_string()));
    }

    #[test]
    fn rejects_unknown_placeholder() {
        let err = expand("/{nope}", &[("username", "alice")]).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn rejects_unbalanced_braces() {
        assert!(matches!(
            expand("/{username", &[("username", "a")]),
            Err(Error::Encoding(_))
        ));
        assert!(matches!(
            expand("/username}", &[("username", "a")]),
            Err(Error::Encoding(_))
        ));
    }
}
