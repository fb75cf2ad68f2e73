use serde_json::Value;

use crate::core::models::DepositRequest;
use crate::errors::ValidationError;

pub const ADDRESS_PREFIX: &str = "0x";
pub const ADDRESS_LENGTH: usize = 42;

/// Parses a raw request body into a JSON object.
pub fn parse_body(body: &[u8]) -> Result<Value, ValidationError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ValidationError::MalformedBody(e.to_string()))?;

    if !value.is_object() {
        return Err(ValidationError::MalformedBody(
            "expected a JSON object".to_string(),
        ));
    }

    Ok(value)
}

pub fn validate_offchain_id(value: Option<&Value>) -> Result<String, ValidationError> {
    match value.and_then(Value::as_str) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(ValidationError::OffchainId),
    }
}

/// Prefix and length only. Hex digits and checksums are not checked. Length
/// is counted in UTF-16 code units.
pub fn validate_user_address(value: Option<&Value>) -> Result<String, ValidationError> {
    match value.and_then(Value::as_str) {
        Some(addr) if addr.starts_with(ADDRESS_PREFIX) && addr.encode_utf16().count() == ADDRESS_LENGTH => {
            Ok(addr.to_string())
        }
        _ => Err(ValidationError::UserAddress),
    }
}

/// Validates `offchainId` first, then `userAddress`.
pub fn validate_deposit(body: &Value) -> Result<DepositRequest, ValidationError> {
    let offchain_id = validate_offchain_id(body.get("offchainId"))?;
    let user_address = validate_user_address(body.get("userAddress"))?;

    Ok(DepositRequest {
        offchain_id,
        user_address,
    })
}
