//! Static catalog data the demo screens draw from. Nothing here is fetched;
//! the walkthrough only pretends to install and update these apps.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseChannel {
    Stable,
    Current,
    Beta,
}

impl ReleaseChannel {
    pub fn label(self) -> &'static str {
        match self {
            ReleaseChannel::Stable => "Stable",
            ReleaseChannel::Current => "Current",
            ReleaseChannel::Beta => "Beta",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AppVersion {
    pub version: &'static str,
    pub channel: ReleaseChannel,
}

/// A featured app the download and version-management steps operate on.
#[derive(Debug, Clone, Copy)]
pub struct DemoApp {
    pub id: &'static str,
    pub name: &'static str,
    pub blurb: &'static str,
    pub current_version: &'static str,
    pub versions: &'static [AppVersion],
}

pub const FEATURED_APPS: [DemoApp; 2] = [
    DemoApp {
        id: "grafana",
        name: "Grafana",
        blurb: "Operational dashboards and data visualization platform",
        current_version: "10.0.0",
        versions: &[
            AppVersion {
                version: "9.5.2",
                channel: ReleaseChannel::Stable,
            },
            AppVersion {
                version: "10.0.0",
                channel: ReleaseChannel::Current,
            },
            AppVersion {
                version: "10.1.0",
                channel: ReleaseChannel::Beta,
            },
        ],
    },
    DemoApp {
        id: "nodered",
        name: "Node-RED",
        blurb: "Flow-based programming for the Internet of Things",
        current_version: "3.0.2",
        versions: &[
            AppVersion {
                version: "2.2.2",
                channel: ReleaseChannel::Stable,
            },
            AppVersion {
                version: "3.0.2",
                channel: ReleaseChannel::Current,
            },
            AppVersion {
                version: "3.1.0",
                channel: ReleaseChannel::Beta,
            },
        ],
    },
];

pub fn find_app(id: &str) -> Option<&'static DemoApp> {
    FEATURED_APPS.iter().find(|a| a.id.eq_ignore_ascii_case(id))
}

/// Apps offered on the select-apps step.
#[derive(Debug, Clone, Copy)]
pub struct StarterApp {
    pub id: &'static str,
    pub name: &'static str,
    pub blurb: &'static str,
}

pub const STARTER_PACK: [StarterApp; 3] = [
    StarterApp {
        id: "app1",
        name: "Sample App 1",
        blurb: "Description for app 1",
    },
    StarterApp {
        id: "app2",
        name: "Sample App 2",
        blurb: "Description for app 2",
    },
    StarterApp {
        id: "app3",
        name: "Sample App 3",
        blurb: "Description for app 3",
    },
];

/// Logo presets offered on the branding step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoChoice {
    Rocket,
    Company,
    Machine,
}

impl LogoChoice {
    pub const ALL: [LogoChoice; 3] = [LogoChoice::Rocket, LogoChoice::Company, LogoChoice::Machine];

    pub fn label(self) -> &'static str {
        match self {
            LogoChoice::Rocket => "Rocket",
            LogoChoice::Company => "Company",
            LogoChoice::Machine => "Machine",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            LogoChoice::Rocket => "🚀",
            LogoChoice::Company => "🏢",
            LogoChoice::Machine => "⚙",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PresetColor {
    pub name: &'static str,
    pub value: &'static str,
    pub meaning: &'static str,
}

pub const PRESET_COLORS: [PresetColor; 5] = [
    PresetColor {
        name: "Ocean Blue",
        value: "#0091FF",
        meaning: "Trust & Reliability",
    },
    PresetColor {
        name: "Forest Green",
        value: "#10B981",
        meaning: "Growth & Stability",
    },
    PresetColor {
        name: "Royal Purple",
        value: "#8B5CF6",
        meaning: "Innovation & Creativity",
    },
    PresetColor {
        name: "Sunset Orange",
        value: "#F97316",
        meaning: "Energy & Enthusiasm",
    },
    PresetColor {
        name: "Ruby Red",
        value: "#EF4444",
        meaning: "Power & Passion",
    },
];
