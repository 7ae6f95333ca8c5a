//! Revenue-multiplier stage table and projection math behind the growth
//! calculator. The table is fixed: 40 stages from 1.0x to 4.9x in 0.1 steps,
//! split into four eras of ten.

use std::sync::OnceLock;

use showcase_config::IMPLEMENTATION_COST_RATE;

pub const STAGE_COUNT: usize = 40;

#[derive(Debug, Clone)]
pub struct Stage {
    pub level: f64,
    pub title: String,
    pub description: String,
    pub features: &'static [&'static str],
}

struct Era {
    name: &'static str,
    verb: &'static str,
    unlock: &'static str,
    features: &'static [&'static str],
}

const ERAS: [Era; 4] = [
    Era {
        name: "Hardware",
        verb: "Enhancing hardware capabilities",
        unlock: "Basic software features unlocked!",
        features: &[
            "Remote Monitoring",
            "Basic Analytics",
            "Simple Dashboards",
            "Data Collection",
        ],
    },
    Era {
        name: "Software",
        verb: "Building software capabilities",
        unlock: "Advanced features unlocked!",
        features: &[
            "Predictive Maintenance",
            "Custom Workflows",
            "Data Integration",
            "API Access",
        ],
    },
    Era {
        name: "Advanced",
        verb: "Advancing capabilities",
        unlock: "Premium features unlocked!",
        features: &[
            "AI Optimization",
            "Digital Twin",
            "Advanced Analytics",
            "Custom Plugins",
        ],
    },
    Era {
        name: "Premium",
        verb: "Maximizing potential",
        unlock: "Full platform achieved!",
        features: &[
            "Full Automation",
            "Industry Integration",
            "Marketplace",
            "Developer SDK",
        ],
    },
];

fn build_stage_table() -> Vec<Stage> {
    let mut stages = Vec::with_capacity(STAGE_COUNT);
    for (era_ix, era) in ERAS.iter().enumerate() {
        for step in 0..10 {
            // Integer arithmetic first so levels come out as exact tenths.
            let tenths = 10 + era_ix * 10 + step;
            let level = tenths as f64 / 10.0;
            let description = if step == 9 {
                era.unlock.to_string()
            } else {
                format!("{} - {}% progress", era.verb, (step + 1) * 10)
            };
            stages.push(Stage {
                level,
                title: format!("{} {:.1}x", era.name, level),
                description,
                features: era.features,
            });
        }
    }
    stages
}

/// The fixed 40-entry stage table the calculator animates through.
pub fn stage_table() -> &'static [Stage] {
    static TABLE: OnceLock<Vec<Stage>> = OnceLock::new();
    TABLE.get_or_init(build_stage_table)
}

/// Coarse product-category buckets the multiplier maps onto.
#[derive(Debug, Clone, Copy)]
pub struct StageBucket {
    pub label: &'static str,
    pub description: &'static str,
    pub range: (f64, f64),
    pub features: &'static [&'static str],
}

pub const STAGE_BUCKETS: [StageBucket; 4] = [
    StageBucket {
        label: "Hardware Product",
        description: "Traditional hardware with basic capabilities",
        range: (1.0, 2.0),
        features: &["Physical Product", "Manual Operation", "Basic Functions"],
    },
    StageBucket {
        label: "Connected Product",
        description: "Hardware enhanced with software features",
        range: (2.0, 3.0),
        features: &["Remote Monitoring", "Basic Analytics", "Mobile App"],
    },
    StageBucket {
        label: "Intelligent Product",
        description: "AI-powered smart product",
        range: (3.0, 4.0),
        features: &["AI Optimization", "Predictive Analytics", "Digital Twin"],
    },
    StageBucket {
        label: "Software Platform",
        description: "Complete software-defined ecosystem",
        range: (4.0, 5.0),
        features: &["Full Automation", "App Marketplace", "Developer SDK"],
    },
];

/// Maps a multiplier level to its category bucket. The last bucket's upper
/// bound is inclusive since the table tops out at 4.9.
pub fn bucket_for(level: f64) -> &'static StageBucket {
    STAGE_BUCKETS
        .iter()
        .find(|b| level >= b.range.0 && level < b.range.1)
        .unwrap_or(&STAGE_BUCKETS[3])
}

/// Linear revenue projection for a base revenue at a multiplier level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub base_revenue: f64,
    pub projected_revenue: f64,
    pub additional_revenue: f64,
    pub implementation_cost: f64,
    pub roi_percent: f64,
}

impl Projection {
    /// Pure function of the inputs. Returns `None` for a non-positive base
    /// revenue, which also keeps the ROI division well-defined.
    pub fn compute(base_revenue: f64, level: f64) -> Option<Projection> {
        if !base_revenue.is_finite() || base_revenue <= 0.0 {
            return None;
        }
        let additional_revenue = base_revenue * (level - 1.0);
        let implementation_cost = base_revenue * IMPLEMENTATION_COST_RATE;
        Some(Projection {
            base_revenue,
            projected_revenue: base_revenue * level,
            additional_revenue,
            implementation_cost,
            roi_percent: (additional_revenue - implementation_cost) / implementation_cost * 100.0,
        })
    }
}
