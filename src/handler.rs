use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Logged once at the start of every invocation.
pub const EXECUTED: &str = "Lambda One executed";
/// The `message` field of every response body.
pub const COMPLETED: &str = "Lambda One completed";

/// What the function hands back to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON text of `{"message": .., "input": ..}`
    pub body: String,
}

#[derive(Serialize)]
struct Completion<'a, T> {
    message: &'static str,
    input: &'a T,
}

/// Builds the success response for `event` without logging anything.
pub fn respond<T: Serialize>(event: &T) -> Result<Response, serde_json::Error> {
    let body = serde_json::to_string(&Completion {
        message: COMPLETED,
        input: event,
    })?;

    Ok(Response {
        status_code: 200,
        body,
    })
}

pub async fn handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    log::info!("{}", EXECUTED);
    Ok(respond(&event.payload)?)
}
