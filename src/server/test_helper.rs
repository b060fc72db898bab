use std::path::PathBuf;
use std::sync::Arc;

use crate::persistence::MemoryCollapseStore;
use crate::server::app_data::DifflyAppData;
use crate::vcs::VcsInfo;
use crate::vcs::traits::testing::FakeBackend;

pub const TEST_LOG_LIMIT: usize = 2;

pub fn fake_backend() -> FakeBackend {
    FakeBackend {
        info: Some(VcsInfo {
            root_path: PathBuf::from("/tmp/test-repo"),
            head_commit: "HEAD".to_string(),
            branch_name: Some("main".to_string()),
        }),
        ..FakeBackend::default()
    }
}

pub fn app_data_with(backend: FakeBackend) -> DifflyAppData {
    app_data_with_store(backend, Arc::new(MemoryCollapseStore::new()))
}

pub fn app_data_with_store(backend: FakeBackend, store: Arc<MemoryCollapseStore>) -> DifflyAppData {
    DifflyAppData::new(Box::new(backend), store, TEST_LOG_LIMIT)
}

/// Session id a served page embeds for its script.
pub fn session_id(page: &[u8]) -> String {
    let html = std::str::from_utf8(page).expect("page should be UTF-8");
    let start = html.find("data-session=\"").expect("page should carry a session id") + 14;
    let len = html[start..].find('"').expect("session attribute should be closed");
    html[start..start + len].to_string()
}
