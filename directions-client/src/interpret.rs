//! Response interpretation.
//!
//! Turns the transport outcome into a typed response or a classified
//! error, in a fixed decision sequence:
//!
//! 1. transport failure → [`DirectionsError::Transport`]
//! 2. JSON `null` body → empty response, no error
//! 3. body not a JSON object → [`DirectionsError::MalformedBody`]
//! 4. object does not fit the schema → [`DirectionsError::Mapping`]
//! 5. no recognized `status` value → [`DirectionsError::StatusMissing`]
//! 6. status `OK` → the response
//! 7. any other recognized status → [`DirectionsError::Api`], carrying
//!    the mapped response so partial data stays inspectable

use serde_json::Value;

use crate::error::DirectionsError;
use crate::response::DirectionsResponse;
use crate::status::ApiStatus;
use crate::transport::TransportError;

/// Interpret a transport outcome as a directions result.
pub fn interpret(
    outcome: Result<Value, TransportError>,
) -> Result<DirectionsResponse, DirectionsError> {
    let body = outcome?;

    // The API's explicit no-content value: a valid, empty response.
    if body.is_null() {
        return Ok(DirectionsResponse::default());
    }

    if !body.is_object() {
        return Err(DirectionsError::MalformedBody {
            got: json_kind(&body),
        });
    }

    let response: DirectionsResponse =
        serde_json::from_value(body).map_err(|e| DirectionsError::Mapping {
            message: e.to_string(),
        })?;

    let status = response.status.ok_or(DirectionsError::StatusMissing)?;

    if status == ApiStatus::Ok {
        return Ok(response);
    }

    let message = match response.error_message.as_deref() {
        Some(server) => format!("{} ({server})", status.description()),
        None => status.description().to_string(),
    };

    Err(DirectionsError::Api {
        status,
        message,
        response: Box::new(response),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
