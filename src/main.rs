mod backend;
mod frontend;

use crate::frontend::app::App;
use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use env_logger::Env;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // Initialize runtime once
    let _rt = RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create runtime")
    });

    let size = LogicalSize::new(1180.0, 760.0);

    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("Tally")
                .with_inner_size(size)
                .with_min_inner_size(size)
                .with_resizable(false)
                .with_decorations(false),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(App);
}
