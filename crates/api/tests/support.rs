use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use inficard_api::context::AppContext;
use inficard_api::routes::router;
use inficard_core::card::ports::{CardRecordStore, ProfileStore, QrImageStore, QrRenderer};
use inficard_core::CardService;
use inficard_domain::{
    BusinessCardRecord, Config, InficardError, Profile, ProfileSubmission, Result,
};

pub const TEST_ORIGIN: &str = "http://cards.test";

/// In-memory profile relation with a call counter so tests can assert the
/// store was never reached on invalid input. `fail_lookups` makes every
/// `find_by_id` answer like an unreachable backend.
#[derive(Default)]
pub struct InMemoryProfileStore {
    pub rows: Mutex<Vec<Profile>>,
    pub upsert_calls: AtomicUsize,
    pub fail_lookups: AtomicBool,
}

impl InMemoryProfileStore {
    /// Pre-populate a row for viewer tests.
    pub fn seed(&self, profile: Profile) {
        self.rows.lock().unwrap().push(profile);
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn upsert(&self, submission: &ProfileSubmission) -> Result<Profile> {
        let n = self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        let profile = Profile {
            id: format!("profile-{n}"),
            full_name: submission.full_name.clone(),
            designation: submission.designation.clone(),
            email: submission.email.clone(),
            department: submission.department.clone(),
            linkedin_url: opt(&submission.linkedin_url),
            phone: opt(&submission.phone),
            avatar_url: None,
        };
        self.rows.lock().unwrap().push(profile.clone());
        Ok(profile)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Profile>> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(InficardError::Store("profile backend unreachable".into()));
        }
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryQrImageStore {
    pub uploads: Mutex<Vec<String>>,
}

#[async_trait]
impl QrImageStore for InMemoryQrImageStore {
    async fn upload(&self, key: &str, _bytes: Vec<u8>, _content_type: &str) -> Result<()> {
        self.uploads.lock().unwrap().push(key.to_string());
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{TEST_ORIGIN}/objects/{key}")
    }
}

/// In-memory linking relation; `fail_inserts` simulates a rejected insert
/// on the best-effort publication path.
#[derive(Default)]
pub struct InMemoryCardRecordStore {
    pub records: Mutex<Vec<BusinessCardRecord>>,
    pub fail_inserts: AtomicBool,
}

#[async_trait]
impl CardRecordStore for InMemoryCardRecordStore {
    async fn insert(&self, record: &BusinessCardRecord) -> Result<()> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(InficardError::Store("card record insert rejected".into()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Stub renderer; `fail` turns every render into a render error.
#[derive(Default)]
pub struct StubQrRenderer {
    pub fail: AtomicBool,
}

#[async_trait]
impl QrRenderer for StubQrRenderer {
    async fn render_png(&self, _contents: &str) -> Result<Vec<u8>> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(InficardError::Render("symbol capacity exceeded".into()));
        }
        // A recognizable PNG signature is enough for the HTTP-level tests.
        Ok(vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'])
    }
}

/// Handles into the fakes behind a test router.
pub struct TestApp {
    pub router: Router,
    pub profiles: Arc<InMemoryProfileStore>,
    pub qr_images: Arc<InMemoryQrImageStore>,
    pub card_records: Arc<InMemoryCardRecordStore>,
    pub qr_renderer: Arc<StubQrRenderer>,
}

/// Build a router over in-memory adapters.
pub fn test_app() -> TestApp {
    let profiles = Arc::new(InMemoryProfileStore::default());
    let qr_images = Arc::new(InMemoryQrImageStore::default());
    let card_records = Arc::new(InMemoryCardRecordStore::default());
    let qr_renderer = Arc::new(StubQrRenderer::default());

    let cards = Arc::new(CardService::new(
        profiles.clone() as Arc<dyn ProfileStore>,
        qr_images.clone() as Arc<dyn QrImageStore>,
        card_records.clone() as Arc<dyn CardRecordStore>,
        qr_renderer.clone() as Arc<dyn QrRenderer>,
        TEST_ORIGIN.to_string(),
    ));

    let mut config = Config::default();
    config.server.public_origin = TEST_ORIGIN.to_string();
    let ctx = Arc::new(AppContext::with_service(cards, config));

    TestApp { router: router(ctx), profiles, qr_images, card_records, qr_renderer }
}

/// A complete, valid profile for seeding the viewer.
pub fn jane_doe(id: &str) -> Profile {
    Profile {
        id: id.to_string(),
        full_name: "Jane Doe".to_string(),
        designation: "Staff Engineer".to_string(),
        email: "jane.doe@infimatrix.com".to_string(),
        department: "Engineering".to_string(),
        linkedin_url: None,
        phone: None,
        avatar_url: None,
    }
}
