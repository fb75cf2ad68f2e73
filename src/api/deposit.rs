//! Handler for `POST /deposit`.
//!
//! Validates the caller's fields, queues a `deposit` contract write on the
//! Engine with a fixed fee, and returns the Engine's queue id.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use reqwest::Method;
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::AppState;
use super::helpers::ok_json;
use super::validation::{parse_body, validate_deposit};
use crate::core::models::{ContractWriteBody, DepositRequest, DepositResponse, TxOverrides};
use crate::engine::EngineCallOptions;
use crate::engine::client::ACCOUNT_ADDRESS_HEADER;
use crate::errors::RelayError;

pub const DEPOSIT_FUNCTION: &str = "deposit";

/// 0.001 of the native unit, in wei. Not read from the contract.
pub const DEPOSIT_FEE_WEI: &str = "1000000000000000";

pub const DEPOSIT_QUEUED_MESSAGE: &str = "Deposit transaction queued successfully!";

#[must_use]
pub fn build_write_body(request: &DepositRequest) -> ContractWriteBody {
    ContractWriteBody {
        function_name: DEPOSIT_FUNCTION.to_string(),
        args: vec![request.offchain_id.clone()],
        tx_overrides: TxOverrides {
            value: DEPOSIT_FEE_WEI.to_string(),
        },
    }
}

/// Builds the Engine call that queues the deposit for `request`.
pub fn build_deposit_call(request: &DepositRequest) -> Result<EngineCallOptions, RelayError> {
    let options = EngineCallOptions::new(Method::POST)
        .header(ACCOUNT_ADDRESS_HEADER, &request.user_address)
        .json(&build_write_body(request))?;
    Ok(options)
}

/// Pulls the `queueId` string out of a contract write result.
pub fn extract_queue_id(result: &Value) -> Result<String, RelayError> {
    result
        .get("queueId")
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or(RelayError::MissingQueueId)
}

async fn queue_deposit(state: &AppState, body: &[u8]) -> Result<DepositResponse, RelayError> {
    let payload = parse_body(body)?;
    let request = validate_deposit(&payload)?;

    let options = build_deposit_call(&request)?;
    let result = state
        .engine
        .call(&state.config.write_path(), options)
        .await?;

    let queue_id = extract_queue_id(&result)?;
    info!(
        offchain_id = %request.offchain_id,
        queue_id = %queue_id,
        "Deposit queued"
    );

    Ok(DepositResponse {
        message: DEPOSIT_QUEUED_MESSAGE.to_string(),
        queue_id,
    })
}

/// Every failure is turned into a `{ "error": ... }` response here.
#[tracing::instrument(level = "info", skip_all, fields(correlation_id = %Uuid::new_v4()))]
pub async fn handle_deposit(State(state): State<AppState>, body: Bytes) -> Response {
    match queue_deposit(&state, &body).await {
        Ok(response) => ok_json(&response),
        Err(RelayError::Validation(e)) => {
            info!("Rejected deposit request: {}", e);
            RelayError::Validation(e).into_response()
        }
        Err(e) => {
            error!("Deposit failed: {}", e);
            e.into_response()
        }
    }
}
