//! Authentication endpoints.
//!
//! ```text
//! POST /api/v1/auth/login {"username":"admin","password":"password"}
//! ```
//!
//! The handler decodes the body straight into the operation's input shape,
//! runs it through the pipeline, and relays the returned envelope verbatim
//! as the response body. The transport status mirrors the envelope's own
//! status family, so HTTP-level observers and the JSON body agree.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, post, web};

use crate::domain::login::LoginOperation;
use crate::domain::{LoginInput, LoginOutput};
use crate::pipeline::{Envelope, EnvelopeStatus, Invocation, Pipeline};

use super::state::AppState;

/// Authenticate an account with username and password.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginInput,
    responses(
        (status = 200, description = "Đăng nhập thành công", body = Envelope<LoginOutput>),
        (status = 400, description = "Dữ liệu không hợp lệ hoặc sai tài khoản/mật khẩu", body = Envelope<LoginOutput>),
        (status = 500, description = "Lỗi không mong muốn", body = Envelope<LoginOutput>)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(state: web::Data<AppState>, payload: web::Json<LoginInput>) -> HttpResponse {
    let operation = LoginOperation::new(
        state.accounts.clone(),
        state.hasher.clone(),
        state.lifecycle.clone(),
    );
    let pipeline = Pipeline::new(state.lifecycle.clone());
    let input = payload.into_inner();

    let envelope = pipeline
        .dispatch(Invocation::exec_only(
            async move { operation.execute(input).await },
        ))
        .await;
    envelope_response(&envelope)
}

/// Render an envelope with a matching transport status.
fn envelope_response(envelope: &Envelope<LoginOutput>) -> HttpResponse {
    HttpResponse::build(transport_status(envelope.status())).json(envelope)
}

const fn transport_status(status: EnvelopeStatus) -> StatusCode {
    match status {
        EnvelopeStatus::Success => StatusCode::OK,
        EnvelopeStatus::Rejected => StatusCode::BAD_REQUEST,
        EnvelopeStatus::Faulted => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
