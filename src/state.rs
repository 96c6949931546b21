use crate::store::StoreData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared application state: the data-file path plus the in-memory store
/// behind one mutex. Every read-modify-write sequence (counter updates,
/// token get-or-create, composite verification) runs under this lock, so
/// concurrent requests cannot lose updates.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub store: Arc<Mutex<StoreData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: StoreData) -> Self {
        Self {
            data_path,
            store: Arc::new(Mutex::new(data)),
        }
    }
}
