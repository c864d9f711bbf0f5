use crate::error::SemvError;

pub fn get_exit_code(error: &SemvError) -> i32 {
    match error {
        SemvError::MalformedVersion(_) | SemvError::InvalidVersionNumber { .. } => 2,

        SemvError::ConfigError(_) => 3,

        _ => 1,
    }
}
