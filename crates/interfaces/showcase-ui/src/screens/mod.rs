pub mod branding;
pub mod custom_app;
pub mod download;
pub mod growth;
pub mod revenue;
pub mod select_apps;
pub mod store;
pub mod versions;
