//! Flat-file account store.
//!
//! The whole account collection is the unit of persistence: every
//! mutation loads the full collection, applies one change, and rewrites
//! the file. `mutate` holds an async mutex across that cycle, so two
//! concurrent requests can never interleave their read-modify-write and
//! lose an update. Writes go to a temp file in the same directory and
//! are renamed into place.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::Account;
use crate::error::AppError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("account file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("account file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub struct AccountStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl AccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        AccountStore {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Seeds the backing file with an empty collection if it does not
    /// exist yet.
    pub async fn init(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        match fs::metadata(&self.path).await {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => self.save_unlocked(&[]).await,
            Err(err) => Err(err.into()),
        }
    }

    /// Returns the full account collection in stored order.
    pub async fn read(&self) -> Result<Vec<Account>, StoreError> {
        let _guard = self.lock.lock().await;
        self.load_unlocked().await
    }

    /// Loads the collection, applies `f`, and persists the result.
    /// If `f` fails nothing is written, so the stored state is exactly
    /// what it was before the call.
    pub async fn mutate<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Vec<Account>) -> Result<T, AppError>,
    {
        let _guard = self.lock.lock().await;
        let mut accounts = self.load_unlocked().await.map_err(AppError::Storage)?;
        let out = f(&mut accounts)?;
        self.save_unlocked(&accounts)
            .await
            .map_err(AppError::Storage)?;
        Ok(out)
    }

    async fn load_unlocked(&self) -> Result<Vec<Account>, StoreError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    async fn save_unlocked(&self, accounts: &[Account]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(accounts)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> AccountStore {
        AccountStore::new(dir.path().join("users.json"))
    }

    #[tokio::test]
    async fn init_seeds_an_empty_collection() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.init().await.unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw.trim(), "[]");
        assert!(store.read().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn init_leaves_an_existing_file_alone() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store
            .mutate(|accounts| {
                accounts.push(Account::new("Ada Obi".into(), "0800".into(), "1234".into()));
                Ok(())
            })
            .await
            .unwrap();

        store.init().await.unwrap();

        assert_eq!(store.read().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn mutate_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");

        let store = AccountStore::new(&path);
        store
            .mutate(|accounts| {
                accounts.push(Account::new("Ada Obi".into(), "0800".into(), "1234".into()));
                Ok(())
            })
            .await
            .unwrap();
        drop(store);

        let reopened = AccountStore::new(&path);
        let accounts = reopened.read().await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].phone, "0800");
        assert_eq!(accounts[0].balance, Decimal::from(90_000));
    }

    #[tokio::test]
    async fn failing_mutation_does_not_touch_the_file() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store
            .mutate(|accounts| {
                accounts.push(Account::new("Ada Obi".into(), "0800".into(), "1234".into()));
                Ok(())
            })
            .await
            .unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();

        let result: Result<(), AppError> = store
            .mutate(|accounts| {
                accounts.clear();
                Err(AppError::InvalidAmount)
            })
            .await;

        assert!(result.is_err());
        let after = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn corrupt_file_surfaces_a_store_error() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "not json").unwrap();

        assert!(matches!(
            store.read().await,
            Err(StoreError::Corrupt(_))
        ));
    }
}
