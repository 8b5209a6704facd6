use crate::model::response::Response;
use crate::repository::database::RepositoryError;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use log::{error, warn};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    /// A body the JSON extractor refused for a reason other than its content,
    /// such as its size or media type.
    #[error("{1}")]
    Payload(StatusCode, String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ApiError {
    /// Text sent to the caller. Database detail stays in the log.
    fn public_message(&self) -> String {
        let message = match self {
            ApiError::Validation(message) | ApiError::Payload(_, message) => {
                return message.clone()
            }
            ApiError::Repository(err) => match err {
                RepositoryError::PoolSetup(_)
                | RepositoryError::Unavailable(_)
                | RepositoryError::ConnectionLost(_) => {
                    "The database is temporarily unavailable, please retry"
                }
                RepositoryError::ForeignKeyViolation(_) => "A referenced record does not exist",
                RepositoryError::UniqueViolation(_) => "The record conflicts with an existing one",
                RepositoryError::ConstraintViolation(_) => "The record violates a data constraint",
                RepositoryError::Query(_) => "An internal error occurred",
            },
        };
        message.to_string()
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Payload(status, _) => *status,
            ApiError::Repository(err) => match err {
                RepositoryError::PoolSetup(_)
                | RepositoryError::Unavailable(_)
                | RepositoryError::ConnectionLost(_) => StatusCode::SERVICE_UNAVAILABLE,
                RepositoryError::ForeignKeyViolation(_)
                | RepositoryError::ConstraintViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                RepositoryError::UniqueViolation(_) => StatusCode::CONFLICT,
                RepositoryError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("request failed with {status}: {self}");
        } else {
            warn!("request rejected with {status}: {self}");
        }
        HttpResponse::build(status).json(Response::failed(&self.public_message()))
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid request body: {err}");
    match err.status_code() {
        StatusCode::BAD_REQUEST => ApiError::Validation(message).into(),
        status => ApiError::Payload(status, message).into(),
    }
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(format!("Invalid query string: {err}")).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use actix_web::test::TestRequest;

    fn body_of(err: &ApiError) -> serde_json::Value {
        let bytes = err
            .error_response()
            .into_body()
            .try_into_bytes()
            .unwrap_or_else(|_| panic!("error body should be buffered"));
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn maps_each_kind_to_a_distinct_status() {
        let cases = [
            (
                ApiError::Validation("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                RepositoryError::ForeignKeyViolation("fk".to_string()).into(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                RepositoryError::UniqueViolation("dup".to_string()).into(),
                StatusCode::CONFLICT,
            ),
            (
                RepositoryError::ConnectionLost("gone".to_string()).into(),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                RepositoryError::Query(diesel::result::Error::NotFound).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.status_code(), status, "{err}");
        }
    }

    #[test]
    fn database_detail_is_not_sent_to_the_caller() {
        let err: ApiError = RepositoryError::ForeignKeyViolation(
            "insert or update on table \"players\" violates foreign key constraint \"players_team_id_fkey\""
                .to_string(),
        )
        .into();

        let body = body_of(&err);

        assert_eq!(body["status"], "failed");
        assert_eq!(body["message"], "A referenced record does not exist");
    }

    #[test]
    fn validation_messages_are_passed_through() {
        let body = body_of(&ApiError::Validation("city: must not be empty".to_string()));
        assert_eq!(body["message"], "city: must not be empty");
    }

    #[test]
    fn json_extractor_keeps_size_and_media_type_statuses() {
        let req = TestRequest::default().to_http_request();
        let cases = [
            (
                JsonPayloadError::OverflowKnownLength {
                    length: 1 << 20,
                    limit: 1 << 15,
                },
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (JsonPayloadError::ContentType, StatusCode::UNSUPPORTED_MEDIA_TYPE),
            (
                JsonPayloadError::Deserialize(
                    serde_json::from_str::<i32>("seven").unwrap_err(),
                ),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, status) in cases {
            let err = json_error_handler(err, &req);
            assert_eq!(err.as_response_error().status_code(), status);
        }
    }
}
