//! Minimal bootstrap: wire configuration, views, and a navigator, then
//! walk through the application's routes.
//!
//! Run with `cargo run --example bootstrap`. Set `APP_BASE_PATH` to see
//! hrefs rooted under a sub-path.

use std::sync::Arc;

use hash_router::view::{LazyView, View, ViewHandle};
use hash_router::{bootstrap, AppViews};

struct Page(&'static str);

impl View for Page {
    fn render(&self) -> String {
        format!("<{}/>", self.0)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = hash_router::config::from_env()?;
    hash_router::observability::init_logging(&config.observability);

    let views = AppViews {
        home: Arc::new(Page("HomeView")) as ViewHandle,
        todo: LazyView::from_fn(|| async { Ok(Arc::new(Page("TodoView")) as ViewHandle) }),
        wether: LazyView::from_fn(|| async { Ok(Arc::new(Page("WetherView")) as ViewHandle) }),
    };

    let navigator = bootstrap(&config, views)
        .map_err(|defects| format!("route table defects: {:?}", defects))?;

    for target in ["/", "/todo", "/wether", "/todo"] {
        let active = navigator.navigate_to_path(target).await?;
        tracing::info!(
            href = %navigator.current_href().unwrap_or_default(),
            name = %active.name,
            rendered = %active.view.render(),
            "Active route"
        );
    }

    while navigator.back().await?.is_some() {}
    tracing::info!(
        href = %navigator.current_href().unwrap_or_default(),
        "Walked back to the start"
    );

    Ok(())
}
