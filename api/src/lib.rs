pub mod client;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod services;

pub use client::{ApiClient, RequestClient};
pub use config::{ApiConfig, EndpointTable, Environment, LOCAL_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use interceptor::{
    failure_status, is_normalized_status, normalize_error, NormalizeServerErrors, Passthrough,
    ResponseInterceptor, NORMALIZED_STATUSES, NO_RESPONSE_STATUS,
};
pub use services::Services;

pub mod prelude {
    pub use crate::client::*;
    pub use crate::config::*;
    pub use crate::error::*;
    pub use crate::interceptor::*;
    pub use crate::services::*;
}
