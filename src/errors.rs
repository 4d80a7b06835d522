use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    CorruptData(String),
    NotFound(String),
    Validation(String),
    Csv(csv::Error),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        // A contacts file that exists but does not parse is corruption,
        // not an I/O problem. Never reset it behind the user's back.
        AppError::CorruptData(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::CorruptData(msg) => {
                write!(f, "Contacts file is not valid data: {}", msg)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
            AppError::Csv(e) => {
                write!(f, "CSV error: {}", e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_validation_error_message() {
        let err = AppError::Validation("Name is required".to_string());

        assert_eq!(
            format!("{}", err),
            "Validation failed: Name is required".to_string()
        );
    }

    #[test]
    fn json_error_becomes_corrupt_data() {
        let parse_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err = AppError::from(parse_err);

        assert!(matches!(err, AppError::CorruptData(_)));
        assert!(format!("{}", err).contains("Contacts file is not valid data"));
    }
}
