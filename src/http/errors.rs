use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::user_actor::UserError;

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn user_error_to_response(err: UserError) -> Response {
    let message = err.to_string();
    match err {
        UserError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "user_not_found", message),
        UserError::AlreadyExists(_) => json_error(StatusCode::CONFLICT, "already_exists", message),
        UserError::ValidationError(_) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", message)
        }
        UserError::ActorCommunicationError(_) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
        }
    }
}

pub fn product_error_to_response(err: ProductError) -> Response {
    let message = err.to_string();
    match err {
        ProductError::NotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "product_not_found", message)
        }
        ProductError::InsufficientStock { .. } => {
            json_error(StatusCode::BAD_REQUEST, "insufficient_stock", message)
        }
        ProductError::StockOverflow { .. } => {
            json_error(StatusCode::BAD_REQUEST, "stock_overflow", message)
        }
        ProductError::ValidationError(_) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", message)
        }
        ProductError::ActorCommunicationError(_) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
        }
    }
}

pub fn order_error_to_response(err: OrderError) -> Response {
    let message = err.to_string();
    match err {
        OrderError::UserNotFound(_) => json_error(StatusCode::NOT_FOUND, "user_not_found", message),
        OrderError::ProductNotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "product_not_found", message)
        }
        OrderError::OrderNotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "order_not_found", message)
        }
        OrderError::InsufficientStock { .. } => {
            json_error(StatusCode::BAD_REQUEST, "insufficient_stock", message)
        }
        OrderError::InvalidStatus { .. } => {
            json_error(StatusCode::BAD_REQUEST, "invalid_status", message)
        }
        OrderError::CannotCancelShipped(_) => {
            json_error(StatusCode::BAD_REQUEST, "cannot_cancel_shipped", message)
        }
        OrderError::InvalidQuantity(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_quantity", message)
        }
        OrderError::ActorCommunicationError(_) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
        }
    }
}

pub fn rejection_to_response(rejection: JsonRejection) -> Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}

/// Parses a numeric path id.
pub fn parse_id(raw: &str) -> Result<u32, Response> {
    raw.parse().map_err(|_| {
        json_error(
            StatusCode::BAD_REQUEST,
            "invalid_id",
            format!("invalid id: {raw:?}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, OrderStatus, ProductId, UserId};

    #[test]
    fn order_errors_map_to_status_codes() {
        let cases = [
            (OrderError::UserNotFound(UserId(1)), StatusCode::NOT_FOUND),
            (OrderError::ProductNotFound(ProductId(1)), StatusCode::NOT_FOUND),
            (OrderError::OrderNotFound(OrderId(1)), StatusCode::NOT_FOUND),
            (
                OrderError::InsufficientStock {
                    product_id: ProductId(1),
                    requested: 2,
                    available: 1,
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                OrderError::InvalidStatus {
                    from: OrderStatus::Cancelled,
                    to: OrderStatus::Shipped,
                },
                StatusCode::BAD_REQUEST,
            ),
            (OrderError::CannotCancelShipped(OrderId(1)), StatusCode::BAD_REQUEST),
            (OrderError::InvalidQuantity(ProductId(1)), StatusCode::BAD_REQUEST),
            (
                OrderError::ActorCommunicationError("closed".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(order_error_to_response(err).status(), status);
        }
    }

    #[test]
    fn duplicate_email_is_a_conflict() {
        let response = user_error_to_response(UserError::AlreadyExists("a@b.c".into()));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn bad_ids_are_rejected() {
        assert_eq!(parse_id("42").unwrap(), 42);
        for raw in ["abc", "-1", "", "4294967296"] {
            assert_eq!(parse_id(raw).unwrap_err().status(), StatusCode::BAD_REQUEST);
        }
    }
}
