use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validated deposit request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub offchain_id: String,
    pub user_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositResponse {
    pub message: String,
    pub queue_id: String,
}

/// Body of a `contract/.../write` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractWriteBody {
    pub function_name: String,
    pub args: Vec<String>,
    pub tx_overrides: TxOverrides,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxOverrides {
    pub value: String,
}

/// Every Engine response is wrapped in this envelope. `error` stays raw so a
/// field of an unexpected type cannot hide the rest of it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EngineResponseEnvelope {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<Value>,
}

impl EngineResponseEnvelope {
    #[must_use]
    pub fn error_body(&self) -> Option<EngineErrorBody> {
        self.error.as_ref().map(EngineErrorBody::from_value)
    }
}

/// The `error` object of an Engine response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineErrorBody {
    pub message: Option<String>,
    pub status_code: Option<u16>,
    pub code: Option<Value>,
}

impl EngineErrorBody {
    /// Reads each field independently. `statusCode` may be a number or a
    /// numeric string; anything else is ignored.
    #[must_use]
    pub fn from_value(error: &Value) -> Self {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .map(ToString::to_string)
            .or_else(|| error.as_str().map(ToString::to_string));

        let status_code = error.get("statusCode").and_then(|v| match v {
            Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
            Value::String(s) => s.trim().parse::<u16>().ok(),
            _ => None,
        });

        Self {
            message,
            status_code,
            code: error.get("code").cloned(),
        }
    }
}
