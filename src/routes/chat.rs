use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::error::AppError;
use crate::message::{ChatRequest, ChatResponse};
use crate::services::advisor;
use crate::state::SharedState;

/// `POST /send_message`
///
/// The `chat_type` field selects the response strategy. Only `"ai"` is
/// wired to the generation service; every other value echoes the message
/// back so the widget still gets a reply.
pub async fn send_message_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Parse(rejection.body_text()))?;

    let response = match request.chat_type.as_str() {
        "ai" => {
            advisor::advise(
                state.generator.as_ref(),
                &state.cleaner,
                &request.message,
            )
            .await?
        }
        _ => format!("You said: {}", request.message),
    };

    Ok(Json(ChatResponse { response }))
}
