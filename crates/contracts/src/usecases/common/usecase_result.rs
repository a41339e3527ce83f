use thiserror::Error;

use crate::shared::config::PanelConfig;
use crate::shared::validation::ValidationError;

use super::service::ServiceFailure;

/// Result of a panel use case
pub type UseCaseResult<T> = Result<T, PanelError>;

/// Why an action did not produce a result
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PanelError {
    /// Bad user input, detected before any request
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service could not be reached or gave no usable error
    #[error("{0}")]
    ServiceUnavailable(String),

    /// The service refused the request with its own message
    #[error("{message}")]
    ServiceError { status: u16, message: String },

    /// Another action is still in flight
    #[error("另一个任务正在进行中，请稍候。")]
    Busy,

    /// 2xx reply that does not have the expected shape
    #[error("服务返回了无法识别的数据：{0}")]
    UnexpectedResponse(String),
}

impl PanelError {
    pub fn code(&self) -> &'static str {
        match self {
            PanelError::Validation(_) => "VALIDATION_ERROR",
            PanelError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            PanelError::ServiceError { .. } => "SERVICE_ERROR",
            PanelError::Busy => "BUSY",
            PanelError::UnexpectedResponse(_) => "UNEXPECTED_RESPONSE",
        }
    }

    /// Map a transport failure into what the user sees
    pub fn from_failure(failure: ServiceFailure, config: &PanelConfig) -> Self {
        match failure {
            ServiceFailure::Unreachable(_) => PanelError::ServiceUnavailable(format!(
                "无法连接本地服务，请先运行：{}",
                config.service_command
            )),
            ServiceFailure::Rejected {
                status,
                error: Some(message),
            } => PanelError::ServiceError { status, message },
            ServiceFailure::Rejected {
                status,
                error: None,
            } => PanelError::ServiceUnavailable(format!(
                "请求失败（HTTP {}），请确认已运行：{}",
                status, config.service_command
            )),
            ServiceFailure::Malformed(details) => PanelError::UnexpectedResponse(details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_error_is_shown_verbatim() {
        let err = PanelError::from_failure(
            ServiceFailure::Rejected {
                status: 404,
                error: Some("找不到输入文件：data_PE".to_string()),
            },
            &PanelConfig::default(),
        );
        assert_eq!(err.code(), "SERVICE_ERROR");
        assert_eq!(err.to_string(), "找不到输入文件：data_PE");
    }

    #[test]
    fn test_unreachable_names_start_command() {
        let err = PanelError::from_failure(
            ServiceFailure::Unreachable("Failed to fetch".to_string()),
            &PanelConfig::default(),
        );
        assert_eq!(err.code(), "SERVICE_UNAVAILABLE");
        assert_eq!(err.to_string(), "无法连接本地服务，请先运行：python src/app.py");
    }

    #[test]
    fn test_rejection_without_message() {
        let err = PanelError::from_failure(
            ServiceFailure::Rejected {
                status: 502,
                error: None,
            },
            &PanelConfig::default(),
        );
        assert!(matches!(err, PanelError::ServiceUnavailable(_)));
        assert!(err.to_string().contains("HTTP 502"));
    }

    #[test]
    fn test_validation_passthrough() {
        let err: PanelError = ValidationError::new("n", "n 超出范围（1-4000）。").into();
        assert_eq!(err.to_string(), "n 超出范围（1-4000）。");
    }
}
