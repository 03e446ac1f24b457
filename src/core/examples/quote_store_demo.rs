use env_logger::Env;
use log::{info, warn};
use quotegen::configuration::{Config, SessionScope};
use quotegen::controller::{Controller, QuoteView};
use quotegen::storage::{FileStorage, Storage};
use quotegen::sync::MockServer;
use std::env;
use std::fs;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    // Initialize logger (RUST_LOG can override; default to info)
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();

    // Choose an output directory (does not affect QUOTEGEN_STORAGE_DIR)
    let out_dir: PathBuf = env::var("QUOTE_DEMO_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            env::current_dir()
                .expect("cwd")
                .join("target")
                .join("quote_demo")
        });
    fs::create_dir_all(&out_dir).expect("create output dir");

    let config = Config {
        storage_path: out_dir.join("store"),
        session_scope: SessionScope::Process,
        ..Config::default()
    };
    let mut controller = Controller::new(config).expect("create controller");
    info!("Loaded {} quote(s)", controller.store().len());

    // Add a couple of quotes, one of them invalid
    controller
        .add_quote("Simplicity is prerequisite for reliability.", "Engineering", Some("Edsger Dijkstra"))
        .expect("add quote");
    if let Err(e) = controller.add_quote("   ", "Engineering", None) {
        warn!("Rejected as expected: {}", e);
    }

    // Pick from a category, then from one that has nothing
    controller.set_filter("engineering").expect("set filter");
    if let QuoteView::Quote(quote) = controller.show_quote().expect("show quote") {
        info!("Engineering pick: {}", quote);
    }
    controller.set_filter("Poetry").expect("set filter");
    info!("Poetry pick: {:?}", controller.show_quote().expect("show quote"));
    controller.set_filter("all").expect("clear filter");

    // Pull the mock server posts
    let added = controller.sync(&MockServer::new()).await.expect("sync");
    info!("Sync added {} quote(s)", added);

    // Export, then import the same file again to show de-duplication
    let export_path = out_dir.join("quotes_export.json");
    controller.export(&export_path).await.expect("export");
    let report = controller.import(&export_path).await.expect("import");
    info!(
        "Re-import: {} imported, {} duplicate(s), {} malformed",
        report.imported, report.duplicates, report.malformed
    );

    // Peek at the raw slots
    let slots = FileStorage::new(out_dir.join("store")).expect("open slots");
    for key in slots.keys().expect("list slots") {
        let size = slots.get_item(&key).expect("read slot").map_or(0, |v| v.len());
        info!("Slot {} holds {} byte(s)", key, size);
    }

    let stats = controller.stats();
    info!(
        "Demo complete: {} quote(s) in {} categories. Inspect files under: {}",
        stats.total_quotes,
        stats.total_categories,
        out_dir.display()
    );
}
