//! REST API Wrappers
//!
//! Frontend bindings to the CookUs backend, organized by domain.

mod client;
mod session;

pub mod auth;
pub mod faq;
pub mod fridge;
pub mod recipe;
pub mod stats;

use std::future::Future;
use std::rc::Rc;

use futures::future::{abortable, AbortHandle};

pub use client::{ApiClient, ApiRequest, HttpTransport, RawResponse, Transport};
pub use session::Session;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

thread_local! {
    static CLIENT: Rc<ApiClient> = Rc::new(ApiClient::new(ApiConfig::from_env()));
}

/// The shared client for this browser tab
pub fn client() -> Rc<ApiClient> {
    CLIENT.with(Rc::clone)
}

/// Wrap an API call so it can be cancelled.
///
/// Aborting drops the inner future, which also aborts the underlying fetch;
/// the wrapper then resolves to `ApiError::Aborted`.
pub fn cancellable<T, F>(call: F) -> (impl Future<Output = ApiResult<T>>, AbortHandle)
where
    F: Future<Output = ApiResult<T>>,
{
    let (call, handle) = abortable(call);
    (async move { call.await.unwrap_or(Err(ApiError::Aborted)) }, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_cancellable_completes() {
        let (call, _handle) = cancellable(async { Ok::<_, ApiError>(3) });
        assert_eq!(block_on(call).unwrap(), 3);
    }

    #[test]
    fn test_cancellable_aborted() {
        let (call, handle) = cancellable(futures::future::pending::<ApiResult<u32>>());
        handle.abort();
        assert!(matches!(block_on(call), Err(ApiError::Aborted)));
    }
}
