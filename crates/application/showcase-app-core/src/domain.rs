use std::collections::BTreeMap;

use showcase_core::catalog::LogoChoice;
use showcase_core::tour::TourCursor;

pub type AppId = String;

/// Identity of one simulated operation. Events from superseded runs are
/// dropped on arrival.
pub type SimRunId = uuid::Uuid;

/// The logical slot a simulated operation occupies. At most one run is
/// active across all slots at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimSlot {
    Download(AppId),
    VersionUpdate,
    RoiStages,
}

/// Progress of one simulated operation, as shown to the visitor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlotProgress {
    pub percent: f32,
    pub running: bool,
    pub complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandingPhase {
    Logo,
    Color,
}

/// Cross-step shared state threaded through the walkthrough.
#[derive(Debug, Clone)]
pub struct TourState {
    pub cursor: TourCursor,
    pub company_name: String,
    pub brand_color: String,
    pub selected_app: Option<AppId>,
    pub selected_apps: Vec<AppId>,
    pub logo_choice: Option<LogoChoice>,
    pub branding_phase: BrandingPhase,
    pub custom_app_name: String,
    pub custom_app_blurb: String,
    pub custom_app_created: bool,
}

impl Default for TourState {
    fn default() -> Self {
        Self {
            cursor: TourCursor::new(),
            company_name: String::new(),
            brand_color: showcase_config::DEFAULT_BRAND_COLOR.to_string(),
            selected_app: None,
            selected_apps: Vec::new(),
            logo_choice: None,
            branding_phase: BrandingPhase::Logo,
            custom_app_name: String::new(),
            custom_app_blurb: String::new(),
            custom_app_created: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DownloadState {
    pub progress: BTreeMap<AppId, SlotProgress>,
    pub active: Option<AppId>,
}

impl DownloadState {
    pub fn is_installed(&self, id: &str) -> bool {
        self.progress.get(id).is_some_and(|p| p.complete)
    }

    pub fn installed_count(&self) -> usize {
        self.progress.values().filter(|p| p.complete).count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateState {
    pub chosen_version: Option<String>,
    pub progress: SlotProgress,
}

#[derive(Debug, Clone, Default)]
pub struct RoiState {
    pub revenue_input: String,
    pub base_revenue: Option<f64>,
    pub stage_index: usize,
    pub is_animating: bool,
    pub started: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Tour,
    Growth,
}

#[derive(Debug, Clone)]
pub struct DemoState {
    pub route: Route,

    pub tour: TourState,
    pub downloads: DownloadState,
    pub update: UpdateState,
    pub roi: RoiState,

    pub active_run: Option<(SimRunId, SimSlot)>,
    pub last_error: Option<String>,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            route: Route::Tour,
            tour: TourState::default(),
            downloads: DownloadState::default(),
            update: UpdateState::default(),
            roi: RoiState::default(),
            active_run: None,
            last_error: None,
        }
    }
}

impl DemoState {
    pub fn is_simulating(&self) -> bool {
        self.active_run.is_some()
    }
}
