/// Extract a clean message from database error strings.
///
/// sqlx wraps server-side errors as
/// "error returned from database: value too long for type character varying(100)";
/// only the part after the prefix is worth showing to a chat user.
pub fn extract_clean_error(error_msg: &str) -> String {
    match error_msg.split_once("error returned from database: ") {
        Some((_, detail)) => detail.trim().to_string(),
        None => error_msg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_database_prefix() {
        let raw = "error returned from database: value too long for type character varying(100)";
        assert_eq!(
            extract_clean_error(raw),
            "value too long for type character varying(100)"
        );
    }

    #[test]
    fn passes_through_other_errors() {
        assert_eq!(extract_clean_error("pool timed out"), "pool timed out");
    }
}
