use std::borrow::Cow;
use validator::ValidationError;

/// PostgreSQL text columns cannot hold a NUL byte.
pub fn reject_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        let mut err = ValidationError::new("nul_byte");
        err.message = Some(Cow::from("must not contain NUL characters"));
        return Err(err);
    }
    Ok(())
}
