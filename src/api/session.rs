//! Access Token Session
//!
//! Holds the bearer token in memory and serializes refreshes: only one
//! refresh request is in flight at a time, later callers queue and get the
//! leader's outcome.

use std::cell::RefCell;
use std::future::Future;

use futures::channel::oneshot;

use crate::error::{ApiError, ApiResult};

#[derive(Default)]
struct Gate {
    refreshing: bool,
    waiters: Vec<oneshot::Sender<bool>>,
}

#[derive(Default)]
pub struct Session {
    token: RefCell<Option<String>>,
    gate: RefCell<Gate>,
}

impl Session {
    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn has_token(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.borrow_mut() = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.borrow_mut() = None;
    }

    pub fn is_refreshing(&self) -> bool {
        self.gate.borrow().refreshing
    }

    /// Run `refresh` unless a refresh is already in flight, in which case
    /// wait for that one instead.
    ///
    /// On success the new token is stored; on failure the token is cleared.
    /// Waiters only learn whether the refresh worked and report
    /// `SessionExpired` when it did not.
    pub async fn refresh_with<F, Fut>(&self, refresh: F) -> ApiResult<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<String>>,
    {
        let waiter = {
            let mut gate = self.gate.borrow_mut();
            if gate.refreshing {
                let (tx, rx) = oneshot::channel();
                gate.waiters.push(tx);
                Some(rx)
            } else {
                gate.refreshing = true;
                None
            }
        };

        if let Some(rx) = waiter {
            return match rx.await {
                Ok(true) => Ok(()),
                _ => Err(ApiError::SessionExpired),
            };
        }

        let in_flight = InFlight { session: self, succeeded: false };
        match refresh().await {
            Ok(token) => {
                self.set_token(token);
                in_flight.finish(true);
                Ok(())
            }
            Err(e) => {
                log::warn!("session refresh failed: {}", e);
                self.clear();
                in_flight.finish(false);
                Err(e)
            }
        }
    }
}

/// Releases the gate and wakes waiters, also when the leader is dropped mid-refresh
struct InFlight<'a> {
    session: &'a Session,
    succeeded: bool,
}

impl InFlight<'_> {
    fn finish(mut self, succeeded: bool) {
        self.succeeded = succeeded;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let waiters = {
            let mut gate = self.session.gate.borrow_mut();
            gate.refreshing = false;
            std::mem::take(&mut gate.waiters)
        };
        if !waiters.is_empty() {
            log::debug!("waking {} queued request(s), refreshed={}", waiters.len(), self.succeeded);
        }
        for waiter in waiters {
            let _ = waiter.send(self.succeeded);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_refresh_stores_token() {
        let session = Session::default();
        let result = block_on(session.refresh_with(|| async { Ok("fresh".to_string()) }));
        assert!(result.is_ok());
        assert_eq!(session.token().as_deref(), Some("fresh"));
        assert!(!session.is_refreshing());
    }

    #[test]
    fn test_failed_refresh_clears_token() {
        let session = Session::default();
        session.set_token("stale");
        let result = block_on(session.refresh_with(|| async { Err::<String, _>(ApiError::MissingToken) }));
        assert!(matches!(result, Err(ApiError::MissingToken)));
        assert!(!session.has_token());
        assert!(!session.is_refreshing());
    }

    #[test]
    fn test_concurrent_callers_share_one_refresh() {
        let session = Session::default();
        let calls = Cell::new(0);
        let (tx, rx) = oneshot::channel::<ApiResult<String>>();

        let leader = session.refresh_with(|| {
            calls.set(calls.get() + 1);
            async move { rx.await.unwrap_or(Err(ApiError::Aborted)) }
        });
        let waiter = session.refresh_with(|| {
            calls.set(calls.get() + 1);
            async { Ok("second".to_string()) }
        });
        let release = async move {
            let _ = tx.send(Ok("fresh".to_string()));
        };

        let (a, b, ()) = block_on(async { futures::join!(leader, waiter, release) });
        assert!(a.is_ok());
        assert!(b.is_ok());
        assert_eq!(calls.get(), 1);
        assert_eq!(session.token().as_deref(), Some("fresh"));
    }

    #[test]
    fn test_waiters_see_failure() {
        let session = Session::default();
        let (tx, rx) = oneshot::channel::<ApiResult<String>>();

        let leader = session.refresh_with(|| async move { rx.await.unwrap_or(Err(ApiError::Aborted)) });
        let waiter = session.refresh_with(|| async { Ok("unused".to_string()) });
        let release = async move {
            let _ = tx.send(Err(ApiError::Status { status: 401, detail: None }));
        };

        let (a, b, ()) = block_on(async { futures::join!(leader, waiter, release) });
        assert_eq!(a.unwrap_err().status(), Some(401));
        assert!(matches!(b, Err(ApiError::SessionExpired)));
        assert!(!session.has_token());
    }

    #[test]
    fn test_dropped_leader_releases_waiters() {
        let session = Session::default();
        block_on(async {
            let mut leader = Box::pin(session.refresh_with(futures::future::pending::<ApiResult<String>>));
            assert!(futures::poll!(leader.as_mut()).is_pending());
            assert!(session.is_refreshing());

            let mut waiter = Box::pin(session.refresh_with(|| async { Ok("unused".to_string()) }));
            assert!(futures::poll!(waiter.as_mut()).is_pending());

            drop(leader);
            assert!(!session.is_refreshing());
            assert!(matches!(waiter.await, Err(ApiError::SessionExpired)));
        });
    }
}
