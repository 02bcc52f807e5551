//! Storefront Errors

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("local storage: {0}")]
    Storage(String),

    #[error("invalid url: {0}")]
    Url(String),
}

impl StoreError {
    /// Message shown to shoppers
    pub fn user_message(&self) -> &'static str {
        match self {
            StoreError::Http(_) | StoreError::Url(_) => "상품 데이터를 불러오지 못했습니다",
            StoreError::Storage(_) => "장바구니를 저장하지 못했습니다",
        }
    }
}
