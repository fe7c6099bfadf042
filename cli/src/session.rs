//! Router wiring for CLI sessions

use pagestack_core::{KeyValueStore, PageRegistry, Router, RouterConfig, SimulatedHost};

/// Router driven by the CLI: a simulated page stack over any store
pub type CliRouter = Router<SimulatedHost, Box<dyn KeyValueStore>>;

/// Build a router whose host knows every declared page and tab
pub fn build_router(config: &RouterConfig, storage: Box<dyn KeyValueStore>) -> CliRouter {
    let registry = PageRegistry::normalize(config.pages.as_deref());
    let host = SimulatedHost::for_registry(&registry, &config.tab_bar, config.max_stack_depth);
    Router::new(config, host, storage)
}

/// One-line rendering of the simulated page stack
pub fn describe_stack(router: &CliRouter) -> String {
    let stack = router.host().stack();
    if stack.is_empty() {
        "(empty)".to_string()
    } else {
        stack.join(" > ")
    }
}

/// One-line rendering of the router state
pub fn describe_state(router: &CliRouter) -> String {
    let page = router
        .current_page()
        .map(|page| page.to_string())
        .unwrap_or_else(|| "-".to_string());
    let params = router
        .params()
        .map(|params| params.to_string())
        .unwrap_or_else(|| "null".to_string());
    format!("current page: {}  params: {}", page, params)
}
