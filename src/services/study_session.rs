use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use chrono::{NaiveDate, Utc};
use rand::Rng;
use tokio::sync::Mutex;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::StudyModule, dto::request::GenerationRequest},
    repositories::module_store::{ModuleStore, LAST_MODULE_KEY, SAVED_MODULES_KEY},
    services::{
        export::{self, ExportedModule},
        module_assembler::ModuleAssembler,
        render::render_text,
        seed::{format_date, offset_date, seed},
        status_log::{LogEntry, StatusLog},
    },
};

pub const HISTORY_LIMIT: usize = 50;

/// Range of days a regeneration jumps ahead.
const REGENERATE_MIN_OFFSET: i64 = 1;
const REGENERATE_MAX_OFFSET: i64 = 7;

/// The state behind the study UI: the latest module slot, saved history,
/// the status log and the single-generation guard.
pub struct StudySession {
    assembler: Arc<ModuleAssembler>,
    store: Arc<dyn ModuleStore>,
    log: StatusLog,
    in_flight: AtomicBool,
    /// Serializes the read-modify-write of `saved_modules`.
    history_lock: Mutex<()>,
}

/// Clears the in-flight flag when dropped, so every exit path re-enables
/// generation.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl StudySession {
    pub fn new(assembler: Arc<ModuleAssembler>, store: Arc<dyn ModuleStore>) -> Self {
        Self {
            assembler,
            store,
            log: StatusLog::new(),
            in_flight: AtomicBool::new(false),
            history_lock: Mutex::new(()),
        }
    }

    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn try_begin(&self) -> AppResult<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlightGuard(&self.in_flight))
            .map_err(|_| AppError::Busy)
    }

    pub async fn generate(&self, request: &GenerationRequest) -> AppResult<StudyModule> {
        self.generate_for(request, Self::today()).await
    }

    /// Generates a module for `date` and stores it as the latest module.
    pub async fn generate_for(
        &self,
        request: &GenerationRequest,
        date: NaiveDate,
    ) -> AppResult<StudyModule> {
        let _guard = match self.try_begin() {
            Ok(guard) => guard,
            Err(e) => {
                self.log
                    .push("Generation request ignored: a generation is already running.")
                    .await;
                return Err(e);
            }
        };

        self.log
            .push(format!(
                "Generating {} essay(s) on '{}' ({:?} mode) for {}",
                request.essay_count,
                request.topic,
                request.mode,
                format_date(date)
            ))
            .await;

        let module = self.assembler.assemble(request, date).await;

        if let Err(e) = self.store_latest(&module).await {
            self.log.push(format!("Generation failed: {}", e)).await;
            return Err(e);
        }

        self.log
            .push("Module generated and saved to last_module.")
            .await;
        Ok(module)
    }

    /// Regenerates with a random future date, so the seed shown to the user
    /// is the seed that selects the content.
    pub async fn regenerate(&self, request: &GenerationRequest) -> AppResult<StudyModule> {
        let offset = rand::thread_rng().gen_range(REGENERATE_MIN_OFFSET..=REGENERATE_MAX_OFFSET);
        self.regenerate_with_offset(request, offset).await
    }

    pub async fn regenerate_with_offset(
        &self,
        request: &GenerationRequest,
        offset_days: i64,
    ) -> AppResult<StudyModule> {
        self.regenerate_for(request, Self::today(), offset_days).await
    }

    /// Generates for `base_date` shifted by `offset_days`, logging the seed
    /// that selects the content.
    pub async fn regenerate_for(
        &self,
        request: &GenerationRequest,
        base_date: NaiveDate,
        offset_days: i64,
    ) -> AppResult<StudyModule> {
        let date = offset_date(base_date, offset_days);
        let date_str = format_date(date);
        self.log
            .push(format!(
                "Regenerate: using seed {} from {} ({} day(s) ahead)",
                seed(&date_str),
                date_str,
                offset_days
            ))
            .await;
        self.generate_for(request, date).await
    }

    async fn store_latest(&self, module: &StudyModule) -> AppResult<()> {
        let json = serde_json::to_string(module)?;
        self.store.set(LAST_MODULE_KEY, json).await
    }

    /// The most recently generated module. Missing, unreadable or corrupt
    /// state all count as "nothing generated yet".
    pub async fn latest(&self) -> Option<StudyModule> {
        let raw = match self.store.get(LAST_MODULE_KEY).await {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("Could not read {}: {}", LAST_MODULE_KEY, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(module) => Some(module),
            Err(e) => {
                log::warn!("Ignoring corrupt {}: {}", LAST_MODULE_KEY, e);
                None
            }
        }
    }

    /// Saved modules, newest first. Corrupt history reads as empty.
    pub async fn history(&self) -> Vec<StudyModule> {
        let raw = match self.store.get(SAVED_MODULES_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Could not read {}: {}", SAVED_MODULES_KEY, e);
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Ignoring corrupt {}: {}", SAVED_MODULES_KEY, e);
            Vec::new()
        })
    }

    /// Pushes the latest module onto the front of the history, evicting the
    /// oldest entries beyond [`HISTORY_LIMIT`]. Returns the new history length.
    pub async fn save_latest(&self) -> AppResult<usize> {
        let module = self
            .latest()
            .await
            .ok_or_else(|| AppError::NotFound("No module to save. Generate one first.".into()))?;

        let _history = self.history_lock.lock().await;
        let mut saved = self.history().await;
        saved.insert(0, module);
        saved.truncate(HISTORY_LIMIT);

        let json = serde_json::to_string(&saved)?;
        self.store.set(SAVED_MODULES_KEY, json).await?;

        self.log
            .push("Saved module to history (saved_modules).")
            .await;
        Ok(saved.len())
    }

    pub async fn export_latest(&self) -> AppResult<ExportedModule> {
        let module = self.latest().await.ok_or_else(|| {
            AppError::NotFound("No module to download. Generate one first.".into())
        })?;

        let exported = export::export(&module)?;
        self.log.push("Downloaded module JSON.").await;
        Ok(exported)
    }

    pub async fn render_latest(&self) -> Option<String> {
        self.latest().await.map(|module| render_text(&module))
    }

    pub async fn log_entries(&self) -> Vec<LogEntry> {
        self.log.entries().await
    }
}
