use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEADER_NAME_REGEX: Regex = Regex::new(r"^[!#$%&'*+.^_`|~0-9A-Za-z-]+$").unwrap();
    static ref ID_REGEX: Regex = Regex::new(r"^[0-9a-f]{40}$").unwrap();
}

/// `Name: value`. The value may be empty.
pub fn validate_header(header: &str) -> Result<(String, String), String> {
    let (name, value) = header
        .split_once(':')
        .ok_or_else(|| "Header must be in format 'Name: value'".to_string())?;

    let name = name.trim();
    if !HEADER_NAME_REGEX.is_match(name) {
        return Err(format!("Invalid header name: '{name}'"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// `name=value`, split on the first `=`.
pub fn validate_field(field: &str) -> Result<(String, String), String> {
    let (name, value) = field
        .split_once('=')
        .ok_or_else(|| "Field must be in format NAME=VALUE".to_string())?;

    if name.is_empty() {
        return Err("Field name must not be empty".to_string());
    }
    Ok((name.to_string(), value.to_string()))
}

pub fn validate_id(id: &str) -> Result<String, String> {
    let id = id.trim().to_ascii_lowercase();
    if !ID_REGEX.is_match(&id) {
        return Err("Id must be 40 hexadecimal characters".to_string());
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_header() {
        assert_eq!(
            validate_header("Accept: text/html").unwrap(),
            ("Accept".to_string(), "text/html".to_string())
        );
        assert_eq!(
            validate_header("X-Time: 12:30").unwrap(),
            ("X-Time".to_string(), "12:30".to_string())
        );
        assert_eq!(
            validate_header("X-Empty:").unwrap(),
            ("X-Empty".to_string(), String::new())
        );

        assert!(validate_header("no colon").is_err());
        assert!(validate_header("Bad Name: x").is_err());
        assert!(validate_header(": x").is_err());
    }

    #[test]
    fn test_validate_field() {
        assert_eq!(
            validate_field("q=a=b").unwrap(),
            ("q".to_string(), "a=b".to_string())
        );
        assert_eq!(
            validate_field("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );

        assert!(validate_field("novalue").is_err());
        assert!(validate_field("=value").is_err());
    }

    #[test]
    fn test_validate_id() {
        let id = "bf21a9e8fbc5a3846fb05b4fa0859e0917b2202f";
        assert_eq!(validate_id(id).unwrap(), id);
        assert_eq!(validate_id(&id.to_uppercase()).unwrap(), id);

        assert!(validate_id("bf21a9e8").is_err());
        assert!(validate_id("../../etc/passwd").is_err());
        assert!(validate_id(&"g".repeat(40)).is_err());
    }
}
