use deposit_relay::api::deposit::{
    DEPOSIT_FEE_WEI, build_deposit_call, build_write_body, extract_queue_id,
};
use deposit_relay::api::validation::{parse_body, validate_deposit};
use deposit_relay::core::models::DepositRequest;
use deposit_relay::errors::{RelayError, ValidationError};
use serde_json::json;

const ADDRESS: &str = "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd";

#[test]
fn test_valid_request_passes() {
    let body = json!({ "offchainId": "order-1", "userAddress": ADDRESS });

    let request = validate_deposit(&body).expect("request should validate");
    assert_eq!(request.offchain_id, "order-1");
    assert_eq!(request.user_address, ADDRESS);
}

#[test]
fn test_offchain_id_must_be_a_non_empty_string() {
    for body in [
        json!({ "userAddress": ADDRESS }),
        json!({ "offchainId": 42, "userAddress": ADDRESS }),
        json!({ "offchainId": null, "userAddress": ADDRESS }),
        json!({ "offchainId": "", "userAddress": ADDRESS }),
    ] {
        assert_eq!(validate_deposit(&body), Err(ValidationError::OffchainId));
    }
}

#[test]
fn test_offchain_id_checked_before_address() {
    let body = json!({ "offchainId": 1, "userAddress": "nope" });
    assert_eq!(validate_deposit(&body), Err(ValidationError::OffchainId));
}

#[test]
fn test_user_address_prefix_and_length() {
    for address in [
        json!(null),
        json!(123),
        json!("abcdefabcdefabcdefabcdefabcdefabcdefabcdef"),
        json!("0xabc"),
        json!("0xabcdefabcdefabcdefabcdefabcdefabcdefabcdef"),
    ] {
        let body = json!({ "offchainId": "order-1", "userAddress": address });
        assert_eq!(validate_deposit(&body), Err(ValidationError::UserAddress));
    }

    let body = json!({ "offchainId": "order-1" });
    assert_eq!(validate_deposit(&body), Err(ValidationError::UserAddress));
}

#[test]
fn test_user_address_hex_digits_not_checked() {
    // Only the prefix and the length are enforced
    let address = "0xZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZ";
    assert_eq!(address.len(), 42);

    let body = json!({ "offchainId": "order-1", "userAddress": address });
    assert!(validate_deposit(&body).is_ok());
}

#[test]
fn test_user_address_length_counts_utf16_units() {
    // U+1F600 is one char but two UTF-16 units: 2 + 38 + 2 = 42 units
    let address = format!("0x{}\u{1F600}", "a".repeat(38));
    assert_eq!(address.chars().count(), 41);

    let body = json!({ "offchainId": "order-1", "userAddress": address });
    assert!(validate_deposit(&body).is_ok());

    let address = format!("0x{}\u{1F600}", "a".repeat(39));
    let body = json!({ "offchainId": "order-1", "userAddress": address });
    assert_eq!(validate_deposit(&body), Err(ValidationError::UserAddress));
}

#[test]
fn test_parse_body_rejects_non_objects() {
    assert!(matches!(
        parse_body(b"not json"),
        Err(ValidationError::MalformedBody(_))
    ));
    assert!(matches!(
        parse_body(b"[1, 2]"),
        Err(ValidationError::MalformedBody(_))
    ));
    assert!(parse_body(br#"{"offchainId":"a"}"#).is_ok());
}

#[test]
fn test_write_body_uses_fixed_fee() {
    let request = DepositRequest {
        offchain_id: "order-7".to_string(),
        user_address: ADDRESS.to_string(),
    };

    let body = serde_json::to_value(build_write_body(&request)).expect("serializable");
    assert_eq!(
        body,
        json!({
            "functionName": "deposit",
            "args": ["order-7"],
            "txOverrides": { "value": "1000000000000000" }
        })
    );
    assert_eq!(DEPOSIT_FEE_WEI, "1000000000000000");
}

#[test]
fn test_deposit_call_carries_account_header() {
    let request = DepositRequest {
        offchain_id: "order-7".to_string(),
        user_address: ADDRESS.to_string(),
    };

    let options = build_deposit_call(&request).expect("call should build");
    assert_eq!(options.method, reqwest::Method::POST);
    assert!(
        options
            .headers
            .iter()
            .any(|(name, value)| name == "x-account-address" && value == ADDRESS)
    );
    assert_eq!(options.body.as_ref().map(|b| &b["args"][0]), Some(&json!("order-7")));
}

#[test]
fn test_extract_queue_id() {
    assert_eq!(
        extract_queue_id(&json!({ "queueId": "abc123" })).expect("queue id"),
        "abc123"
    );
    assert!(matches!(
        extract_queue_id(&json!({})),
        Err(RelayError::MissingQueueId)
    ));
    assert!(matches!(
        extract_queue_id(&json!(null)),
        Err(RelayError::MissingQueueId)
    ));
}
