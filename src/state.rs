use crate::config::Config;
use crate::notifications::NotificationCenter;
use crate::storage::LocalStore;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub coach_delay: Duration,
    pub store: Arc<Mutex<LocalStore>>,
    pub notifications: Arc<Mutex<NotificationCenter>>,
}

impl AppState {
    pub fn new(config: &Config, store: LocalStore) -> Self {
        Self {
            data_path: config.data_path.clone(),
            coach_delay: config.coach_delay,
            store: Arc::new(Mutex::new(store)),
            notifications: Arc::new(Mutex::new(NotificationCenter::default())),
        }
    }
}
