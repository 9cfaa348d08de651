use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use stockdesk_agent::AgentError;
use stockdesk_market_data::MarketDataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MarketData(#[from] MarketDataError),
    #[error("{0}")]
    Agent(#[from] AgentError),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MarketData(e) => match e {
                MarketDataError::InvalidTicker(_) => StatusCode::BAD_REQUEST,
                MarketDataError::TickerNotFound(_) => StatusCode::NOT_FOUND,
                MarketDataError::UpstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
            },
            ApiError::Agent(e) => match e {
                AgentError::Provider(_) => StatusCode::BAD_GATEWAY,
                AgentError::MissingApiKey(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: impl Into<ApiError>) -> StatusCode {
        err.into().into_response().status()
    }

    #[test]
    fn test_market_data_status_mapping() {
        assert_eq!(
            status_of(MarketDataError::InvalidTicker(String::new())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(MarketDataError::TickerNotFound("ZZZZ".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(MarketDataError::upstream("ALPHA_VANTAGE", "HTTP 503")),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_agent_status_mapping() {
        assert_eq!(status_of(AgentError::provider("quota")), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status_of(AgentError::MissingApiKey("gemini".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
