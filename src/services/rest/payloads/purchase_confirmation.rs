use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseConfirmationResponsePayload {
    pub message: String,
}
