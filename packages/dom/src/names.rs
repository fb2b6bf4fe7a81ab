//! XML name validation and qualified-name handling.

use crate::error::{DomError, DomResult};

pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";
pub const XMLNS_NS: &str = "http://www.w3.org/2000/xmlns/";

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}

/// Matches the XML 1.0 `Name` production.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start_char(first) => chars.all(is_name_char),
        _ => false,
    }
}

fn is_valid_ncname(name: &str) -> bool {
    !name.contains(':') && is_valid_name(name)
}

/// Matches the Namespaces in XML `QName` production.
pub fn is_valid_qualified_name(name: &str) -> bool {
    match name.split_once(':') {
        Some((prefix, local)) => is_valid_ncname(prefix) && is_valid_ncname(local),
        None => is_valid_ncname(name),
    }
}

pub fn validate_name(name: &str) -> DomResult<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(DomError::InvalidCharacter(name.to_string()))
    }
}

/// A validated `(namespace, prefix, local name)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub namespace_uri: Option<String>,
    pub prefix: Option<String>,
    pub local_name: String,
}

impl QualifiedName {
    pub fn qualified(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, self.local_name),
            None => self.local_name.clone(),
        }
    }
}

/// Validate a qualified name against a namespace the way
/// `setAttributeNS`/`createElementNS` do.
///
/// An empty namespace is treated as no namespace.
pub fn validate_and_extract(namespace: &str, qualified_name: &str) -> DomResult<QualifiedName> {
    if !is_valid_qualified_name(qualified_name) {
        return Err(DomError::InvalidCharacter(qualified_name.to_string()));
    }

    let namespace_uri = (!namespace.is_empty()).then(|| namespace.to_string());
    let (prefix, local_name) = match qualified_name.split_once(':') {
        Some((prefix, local)) => (Some(prefix.to_string()), local.to_string()),
        None => (None, qualified_name.to_string()),
    };

    if prefix.is_some() && namespace_uri.is_none() {
        return Err(DomError::namespace(format!(
            "prefixed name {qualified_name:?} requires a namespace"
        )));
    }

    if prefix.as_deref() == Some("xml") && namespace != XML_NS {
        return Err(DomError::namespace("the xml prefix is bound to the XML namespace"));
    }

    let is_xmlns = qualified_name == "xmlns" || prefix.as_deref() == Some("xmlns");
    if is_xmlns != (namespace == XMLNS_NS) {
        return Err(DomError::namespace(
            "xmlns names and the XMLNS namespace must be used together",
        ));
    }

    Ok(QualifiedName {
        namespace_uri,
        prefix,
        local_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("desc"));
        assert!(is_valid_name("_x.y-z1"));
        assert!(is_valid_name("a:b:c"));
        assert!(is_valid_name("Éléments"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("1abc"));
        assert!(!is_valid_name("a b"));
        assert!(!is_valid_name("-lead"));
        assert!(!is_valid_name("a<b"));
    }

    #[test]
    fn test_qualified_names() {
        assert!(is_valid_qualified_name("xlink:href"));
        assert!(!is_valid_qualified_name("a:b:c"));
        assert!(!is_valid_qualified_name(":a"));
        assert!(!is_valid_qualified_name("a:"));
        assert!(!is_valid_qualified_name("a:1b"));
    }

    #[test]
    fn test_extract_prefixed_name() {
        let name = validate_and_extract("http://www.w3.org/1999/xlink", "xlink:href").unwrap();
        assert_eq!(name.prefix.as_deref(), Some("xlink"));
        assert_eq!(name.local_name, "href");
        assert_eq!(name.qualified(), "xlink:href");
        assert_eq!(name.namespace_uri.as_deref(), Some("http://www.w3.org/1999/xlink"));
    }

    #[test]
    fn test_namespace_rules() {
        assert!(matches!(validate_and_extract("", "p:a"), Err(DomError::Namespace(_))));
        assert!(matches!(
            validate_and_extract("urn:other", "xml:lang"),
            Err(DomError::Namespace(_))
        ));
        assert!(validate_and_extract(XML_NS, "xml:lang").is_ok());
        assert!(matches!(
            validate_and_extract("urn:other", "xmlns:p"),
            Err(DomError::Namespace(_))
        ));
        assert!(validate_and_extract(XMLNS_NS, "xmlns:p").is_ok());
        assert!(matches!(
            validate_and_extract(XMLNS_NS, "plain"),
            Err(DomError::Namespace(_))
        ));
    }

    #[test]
    fn test_extract_rejects_bad_characters() {
        assert!(matches!(
            validate_and_extract("urn:x", "bad name"),
            Err(DomError::InvalidCharacter(_))
        ));
    }
}
