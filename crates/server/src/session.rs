//! Per-request unit of work.
//!
//! `Session` begins a transaction before the handler body runs. Handlers that
//! write call [`Session::commit`]; on every other exit path the transaction is
//! dropped, which rolls it back and hands the connection back to the pool.

use std::ops::Deref;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use sea_orm::{DatabaseTransaction, TransactionTrait};

use crate::errors::ApiError;
use crate::state::AppState;

pub struct Session(DatabaseTransaction);

impl Session {
    pub async fn commit(self) -> Result<(), ApiError> {
        self.0.commit().await.map_err(ApiError::internal)
    }
}

impl Deref for Session {
    type Target = DatabaseTransaction;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let txn = state.db.begin().await.map_err(ApiError::internal)?;
        Ok(Session(txn))
    }
}
