use crate::domain::{DemoState, SlotProgress};
use showcase_core::catalog::{self, ReleaseChannel};
use showcase_core::roi::{self, Projection, Stage, StageBucket};
use showcase_core::tour::StepId;

/// Formats a dollar amount with thousands separators, no cents.
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let whole = amount.abs().round() as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn format_multiplier(level: f64) -> String {
    format!("{level:.1}x")
}

// --- Walkthrough guide ---

#[derive(Debug, Clone)]
pub struct GuideStepVm {
    pub index: usize,
    pub title: &'static str,
    pub is_current: bool,
    pub is_done: bool,
    /// Done steps can be revisited; future steps cannot.
    pub can_jump: bool,
}

#[derive(Debug, Clone)]
pub struct GuideVm {
    pub steps: Vec<GuideStepVm>,
    pub current_index: usize,
    pub current_title: &'static str,
    pub current_description: &'static str,
    pub company_label: String,
}

pub fn guide_vm(state: &DemoState) -> GuideVm {
    let current = state.tour.cursor.index();
    let steps = StepId::ALL
        .iter()
        .enumerate()
        .map(|(index, step)| GuideStepVm {
            index,
            title: step.title(),
            is_current: index == current,
            is_done: index < current,
            can_jump: index < current,
        })
        .collect();

    let step = state.tour.cursor.current();
    GuideVm {
        steps,
        current_index: current,
        current_title: step.title(),
        current_description: step.description(),
        company_label: if state.tour.company_name.trim().is_empty() {
            "Your Marketplace".into()
        } else {
            state.tour.company_name.trim().to_string()
        },
    }
}

// --- Download step ---

#[derive(Debug, Clone)]
pub struct FeaturedAppVm {
    pub id: &'static str,
    pub name: &'static str,
    pub blurb: &'static str,
    pub version: &'static str,
    pub progress: Option<SlotProgress>,
    pub is_installed: bool,
    pub can_start: bool,
}

#[derive(Debug, Clone)]
pub struct DownloadVm {
    pub apps: Vec<FeaturedAppVm>,
    pub installed_count: usize,
}

pub fn download_vm(state: &DemoState) -> DownloadVm {
    let busy = state.is_simulating();
    let apps = catalog::FEATURED_APPS
        .iter()
        .map(|app| {
            let installed = state.downloads.is_installed(app.id);
            FeaturedAppVm {
                id: app.id,
                name: app.name,
                blurb: app.blurb,
                version: app.current_version,
                progress: state.downloads.progress.get(app.id).copied(),
                is_installed: installed,
                can_start: !busy && !installed,
            }
        })
        .collect();

    DownloadVm {
        apps,
        installed_count: state.downloads.installed_count(),
    }
}

// --- Versions step ---

#[derive(Debug, Clone)]
pub struct VersionOptionVm {
    pub version: &'static str,
    pub channel_label: &'static str,
    pub channel: ReleaseChannel,
    pub is_chosen: bool,
    pub is_current: bool,
}

#[derive(Debug, Clone)]
pub enum VersionsVm {
    /// No app has been downloaded yet; the step has nothing to show.
    NothingSelected,
    /// The selected app id no longer resolves in the catalog.
    UnknownApp(String),
    Ready {
        app_name: &'static str,
        current_version: &'static str,
        options: Vec<VersionOptionVm>,
        progress: SlotProgress,
        can_start: bool,
        can_choose: bool,
    },
}

pub fn versions_vm(state: &DemoState) -> VersionsVm {
    let Some(id) = &state.tour.selected_app else {
        return VersionsVm::NothingSelected;
    };
    let Some(app) = catalog::find_app(id) else {
        return VersionsVm::UnknownApp(id.clone());
    };

    let progress = state.update.progress;
    let options = app
        .versions
        .iter()
        .map(|v| VersionOptionVm {
            version: v.version,
            channel_label: v.channel.label(),
            channel: v.channel,
            is_chosen: state.update.chosen_version.as_deref() == Some(v.version),
            is_current: v.version == app.current_version,
        })
        .collect();

    VersionsVm::Ready {
        app_name: app.name,
        current_version: app.current_version,
        options,
        progress,
        can_start: state.update.chosen_version.is_some()
            && !progress.complete
            && !state.is_simulating(),
        can_choose: !progress.running && !progress.complete,
    }
}

fn app_display_name(id: &str) -> String {
    catalog::find_app(id)
        .map(|a| a.name.to_string())
        .or_else(|| {
            catalog::STARTER_PACK
                .iter()
                .find(|s| s.id == id)
                .map(|s| s.name.to_string())
        })
        .unwrap_or_else(|| id.to_string())
}

// --- Store preview ---

#[derive(Debug, Clone)]
pub struct StorePreviewVm {
    pub company_label: String,
    pub brand_color: String,
    pub logo_glyph: Option<&'static str>,
    pub listings: Vec<String>,
    /// The store step only completes once a company name has been typed.
    pub can_continue: bool,
}

pub fn store_preview_vm(state: &DemoState) -> StorePreviewVm {
    let mut listings: Vec<String> = state
        .tour
        .selected_app
        .iter()
        .map(|id| app_display_name(id))
        .collect();
    listings.extend(state.tour.selected_apps.iter().map(|id| app_display_name(id)));
    if state.tour.custom_app_created {
        listings.push(state.tour.custom_app_name.trim().to_string());
    }

    let name = state.tour.company_name.trim();
    StorePreviewVm {
        company_label: if name.is_empty() {
            "Your Marketplace".into()
        } else {
            name.to_string()
        },
        brand_color: state.tour.brand_color.clone(),
        logo_glyph: state.tour.logo_choice.map(|l| l.glyph()),
        listings,
        can_continue: !name.is_empty(),
    }
}

// --- Growth calculator ---

#[derive(Debug, Clone)]
pub struct StageVm {
    pub multiplier_label: String,
    pub title: String,
    pub description: String,
    pub features: Vec<&'static str>,
    pub bucket_label: &'static str,
    pub bucket_features: Vec<&'static str>,
    /// 0.0..=1.0 across the whole table.
    pub fraction: f32,
}

#[derive(Debug, Clone)]
pub struct ProjectionVm {
    pub base: String,
    pub additional: String,
    pub cost: String,
    pub projected: String,
    pub roi_percent: String,
}

#[derive(Debug, Clone)]
pub struct GrowthVm {
    pub started: bool,
    pub is_animating: bool,
    pub can_start: bool,
    pub stage: Option<StageVm>,
    pub projection: Option<ProjectionVm>,
    pub error: Option<String>,
}

fn stage_vm(stage: &Stage, bucket: &StageBucket, index: usize) -> StageVm {
    StageVm {
        multiplier_label: format_multiplier(stage.level),
        title: stage.title.clone(),
        description: stage.description.clone(),
        features: stage.features.to_vec(),
        bucket_label: bucket.label,
        bucket_features: bucket.features.to_vec(),
        fraction: (index + 1) as f32 / roi::STAGE_COUNT as f32,
    }
}

fn projection_vm(p: &Projection) -> ProjectionVm {
    ProjectionVm {
        base: format_usd(p.base_revenue),
        additional: format_usd(p.additional_revenue),
        cost: format_usd(p.implementation_cost),
        projected: format_usd(p.projected_revenue),
        roi_percent: format!("{:.0}%", p.roi_percent),
    }
}

pub fn growth_vm(state: &DemoState) -> GrowthVm {
    let roi_state = &state.roi;
    let table = roi::stage_table();

    let stage = roi_state.started.then(|| {
        let index = roi_state.stage_index.min(roi::STAGE_COUNT - 1);
        let stage = &table[index];
        stage_vm(stage, roi::bucket_for(stage.level), index)
    });

    let projection = match (roi_state.started, roi_state.base_revenue) {
        (true, Some(base)) => {
            let index = roi_state.stage_index.min(roi::STAGE_COUNT - 1);
            Projection::compute(base, table[index].level).map(|p| projection_vm(&p))
        }
        _ => None,
    };

    GrowthVm {
        started: roi_state.started,
        is_animating: roi_state.is_animating,
        can_start: !state.is_simulating(),
        stage,
        projection,
        error: state.last_error.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_formatting_inserts_separators() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(950.0), "$950");
        assert_eq!(format_usd(10_000.0), "$10,000");
        assert_eq!(format_usd(1_234_567.0), "$1,234,567");
        assert_eq!(format_usd(-1500.0), "-$1,500");
    }

    #[test]
    fn guide_marks_past_steps_jumpable() {
        let mut state = DemoState::default();
        state.tour.cursor.advance();
        state.tour.cursor.advance();
        let vm = guide_vm(&state);
        assert_eq!(vm.current_index, 2);
        assert!(vm.steps[0].can_jump && vm.steps[1].can_jump);
        assert!(!vm.steps[2].can_jump && !vm.steps[3].can_jump);
    }

    #[test]
    fn store_step_requires_a_company_name() {
        let mut state = DemoState::default();
        assert!(!store_preview_vm(&state).can_continue);

        state.tour.company_name = "   ".into();
        assert!(!store_preview_vm(&state).can_continue);

        state.tour.company_name = "Acme Industrial".into();
        let vm = store_preview_vm(&state);
        assert!(vm.can_continue);
        assert_eq!(vm.company_label, "Acme Industrial");
    }

    #[test]
    fn versions_vm_reports_missing_selection() {
        let state = DemoState::default();
        assert!(matches!(versions_vm(&state), VersionsVm::NothingSelected));

        let mut state = DemoState::default();
        state.tour.selected_app = Some("no-such-app".into());
        assert!(matches!(versions_vm(&state), VersionsVm::UnknownApp(_)));
    }
}
