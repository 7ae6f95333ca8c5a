#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = showcase_ui::run() {
        eprintln!("Showcase failed: {err}");
        std::process::exit(1);
    }
}
