//! In-process model of a mini-program page stack
//!
//! Calls are queued when dispatched and only applied when the owner runs the
//! event loop with [`SimulatedHost::run_pending`], which is when the real host
//! would answer as well.

use super::NavigationHost;
use crate::page::PageRegistry;
use crate::router::{HostCall, NavCallbacks, NavResponse};
use std::collections::{BTreeSet, VecDeque};
use tracing::{debug, warn};

/// Default page stack depth limit
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Page-stack host that runs entirely in memory.
#[derive(Debug)]
pub struct SimulatedHost {
    /// Open pages, bottom to top
    stack: Vec<String>,
    /// Urls of tab-root pages
    tab_urls: BTreeSet<String>,
    /// Every url the host can open, when known
    known_urls: Option<BTreeSet<String>>,
    max_depth: usize,
    pending: VecDeque<(HostCall, NavCallbacks)>,
    dispatched: Vec<HostCall>,
}

impl SimulatedHost {
    /// Create a host with an empty stack and no page restrictions
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            tab_urls: BTreeSet::new(),
            known_urls: None,
            max_depth: DEFAULT_MAX_DEPTH,
            pending: VecDeque::new(),
            dispatched: Vec::new(),
        }
    }

    /// Build a host that knows every registered page.
    ///
    /// The app launches on the first tab page, or on the first registered
    /// page when there are no tabs. Tab names that are not registered are
    /// ignored.
    pub fn for_registry(registry: &PageRegistry, tab_bar: &[String], max_depth: usize) -> Self {
        let mut host = Self::new()
            .with_known_pages(registry.iter().map(|page| page.url.clone()))
            .with_max_depth(max_depth);

        for name in tab_bar {
            if let Some(page) = registry.find(name) {
                host.tab_urls.insert(page.url.clone());
            } else {
                warn!(page = %name, "Tab page is not registered, ignoring");
            }
        }

        let entry = tab_bar
            .iter()
            .find_map(|name| registry.find(name))
            .or_else(|| registry.iter().next());
        if let Some(page) = entry {
            host.stack.push(page.url.clone());
        }
        host
    }

    /// Start with `url` as the only open page
    pub fn with_entry(mut self, url: impl Into<String>) -> Self {
        self.stack = vec![url.into()];
        self
    }

    pub fn with_tab_page(mut self, url: impl Into<String>) -> Self {
        self.tab_urls.insert(url.into());
        self
    }

    /// Restrict the host to the given urls
    pub fn with_known_pages<I>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.known_urls = Some(urls.into_iter().collect());
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// Open pages, bottom to top
    pub fn stack(&self) -> &[String] {
        &self.stack
    }

    pub fn current_url(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_tab_page(&self, url: &str) -> bool {
        self.tab_urls.contains(url)
    }

    /// Number of calls waiting for the event loop
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Every call received so far, in dispatch order
    pub fn dispatched(&self) -> &[HostCall] {
        &self.dispatched
    }

    /// Apply every queued call in order and settle its hooks.
    ///
    /// Returns how many calls were answered.
    pub fn run_pending(&mut self) -> usize {
        let mut answered = 0;
        while let Some((call, callbacks)) = self.pending.pop_front() {
            let outcome = self.apply(&call);
            let (Ok(response) | Err(response)) = &outcome;
            debug!(call = %call, response = %response, depth = self.stack.len(), "Host answered");
            callbacks.settle(outcome);
            answered += 1;
        }
        answered
    }

    fn enqueue(&mut self, call: HostCall, callbacks: NavCallbacks) {
        debug!(call = %call, "Host call queued");
        self.dispatched.push(call.clone());
        self.pending.push_back((call, callbacks));
    }

    fn apply(&mut self, call: &HostCall) -> Result<NavResponse, NavResponse> {
        let api = call.api_name();

        if let (Some(url), Some(known)) = (call.url(), &self.known_urls) {
            if !known.contains(url) {
                return Err(NavResponse::fail(
                    api,
                    format!("page \"{}\" is not found", url.trim_start_matches('/')),
                ));
            }
        }

        match call {
            HostCall::NavigateTo { url } => {
                if self.is_tab_page(url) {
                    return Err(NavResponse::fail(api, "can not navigateTo a tabbar page"));
                }
                if self.stack.len() >= self.max_depth {
                    return Err(NavResponse::fail(api, "webview count limit exceed"));
                }
                self.stack.push(url.clone());
            }
            HostCall::RedirectTo { url } => {
                if self.is_tab_page(url) {
                    return Err(NavResponse::fail(api, "can not redirectTo a tabbar page"));
                }
                self.stack.pop();
                self.stack.push(url.clone());
            }
            HostCall::ReLaunch { url } => {
                self.stack.clear();
                self.stack.push(url.clone());
            }
            HostCall::SwitchTab { url } => {
                if !self.is_tab_page(url) {
                    return Err(NavResponse::fail(api, "can not switch to no-tabBar page"));
                }
                self.stack = vec![url.clone()];
            }
            HostCall::NavigateBack { delta } => {
                if self.stack.len() <= 1 {
                    return Err(NavResponse::fail(
                        api,
                        "cannot navigate back at first page.",
                    ));
                }
                let poppable = self.stack.len() - 1;
                let pop = usize::try_from(*delta).unwrap_or(usize::MAX).min(poppable);
                self.stack.truncate(self.stack.len() - pop);
            }
        }

        Ok(NavResponse::ok(api))
    }
}

impl Default for SimulatedHost {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationHost for SimulatedHost {
    fn navigate_to(&mut self, url: &str, callbacks: NavCallbacks) {
        self.enqueue(
            HostCall::NavigateTo {
                url: url.to_string(),
            },
            callbacks,
        );
    }

    fn re_launch(&mut self, url: &str, callbacks: NavCallbacks) {
        self.enqueue(
            HostCall::ReLaunch {
                url: url.to_string(),
            },
            callbacks,
        );
    }

    fn redirect_to(&mut self, url: &str, callbacks: NavCallbacks) {
        self.enqueue(
            HostCall::RedirectTo {
                url: url.to_string(),
            },
            callbacks,
        );
    }

    fn switch_tab(&mut self, url: &str, callbacks: NavCallbacks) {
        self.enqueue(
            HostCall::SwitchTab {
                url: url.to_string(),
            },
            callbacks,
        );
    }

    fn navigate_back(&mut self, delta: u64, callbacks: NavCallbacks) {
        self.enqueue(HostCall::NavigateBack { delta }, callbacks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::RawPage;
    use std::sync::{Arc, Mutex};

    fn registry() -> PageRegistry {
        PageRegistry::normalize(Some(&[
            RawPage::new("index", "pages/index/index"),
            RawPage::new("mine", "pages/mine/mine"),
            RawPage::new("login", "pages/login/login"),
            RawPage::new("detail", "pages/detail/detail"),
        ]))
    }

    fn host() -> SimulatedHost {
        SimulatedHost::for_registry(
            &registry(),
            &["index".to_string(), "mine".to_string()],
            DEFAULT_MAX_DEPTH,
        )
    }

    fn capture() -> (Arc<Mutex<Vec<String>>>, NavCallbacks) {
        let responses = Arc::new(Mutex::new(Vec::new()));
        let callbacks = NavCallbacks::new()
            .on_success({
                let responses = Arc::clone(&responses);
                move |res| responses.lock().unwrap().push(res.err_msg)
            })
            .on_fail({
                let responses = Arc::clone(&responses);
                move |res| responses.lock().unwrap().push(res.err_msg)
            });
        (responses, callbacks)
    }

    #[test]
    fn test_launches_on_first_tab() {
        let host = host();
        assert_eq!(host.current_url(), Some("/pages/index/index"));
        assert!(host.is_tab_page("/pages/mine/mine"));
        assert!(!host.is_tab_page("/pages/login/login"));
    }

    #[test]
    fn test_calls_settle_only_when_the_loop_runs() {
        let mut host = host();
        let (responses, callbacks) = capture();

        host.navigate_to("/pages/login/login", callbacks);
        assert_eq!(host.pending_count(), 1);
        assert_eq!(host.depth(), 1);
        assert!(responses.lock().unwrap().is_empty());

        assert_eq!(host.run_pending(), 1);
        assert_eq!(host.depth(), 2);
        assert_eq!(*responses.lock().unwrap(), vec!["navigateTo:ok"]);
    }

    #[test]
    fn test_navigate_to_rejects_tab_pages_and_full_stacks() {
        let mut host = host().with_max_depth(2);
        let (responses, callbacks) = capture();
        host.navigate_to("/pages/mine/mine", callbacks);
        host.run_pending();
        assert_eq!(
            *responses.lock().unwrap(),
            vec!["navigateTo:fail can not navigateTo a tabbar page"]
        );

        host.navigate_to("/pages/login/login", NavCallbacks::new());
        let (responses, callbacks) = capture();
        host.navigate_to("/pages/detail/detail", callbacks);
        host.run_pending();
        assert_eq!(host.depth(), 2);
        assert_eq!(
            *responses.lock().unwrap(),
            vec!["navigateTo:fail webview count limit exceed"]
        );
    }

    #[test]
    fn test_unknown_url_is_not_found() {
        let mut host = host();
        let (responses, callbacks) = capture();
        host.re_launch("/pages/ghost/ghost", callbacks);
        host.run_pending();
        assert_eq!(
            *responses.lock().unwrap(),
            vec!["reLaunch:fail page \"pages/ghost/ghost\" is not found"]
        );
    }

    #[test]
    fn test_redirect_relaunch_and_switch_tab() {
        let mut host = host();
        host.navigate_to("/pages/login/login", NavCallbacks::new());
        host.redirect_to("/pages/detail/detail", NavCallbacks::new());
        host.run_pending();
        assert_eq!(
            host.stack(),
            ["/pages/index/index", "/pages/detail/detail"]
        );

        host.switch_tab("/pages/mine/mine", NavCallbacks::new());
        host.run_pending();
        assert_eq!(host.stack(), ["/pages/mine/mine"]);

        let (responses, callbacks) = capture();
        host.switch_tab("/pages/login/login", callbacks);
        host.re_launch("/pages/login/login", NavCallbacks::new());
        host.run_pending();
        assert_eq!(
            *responses.lock().unwrap(),
            vec!["switchTab:fail can not switch to no-tabBar page"]
        );
        assert_eq!(host.stack(), ["/pages/login/login"]);
    }

    #[test]
    fn test_back_clamps_to_root_and_fails_on_first_page() {
        let mut host = host();
        host.navigate_to("/pages/login/login", NavCallbacks::new());
        host.navigate_to("/pages/detail/detail", NavCallbacks::new());
        host.navigate_back(u64::MAX, NavCallbacks::new());
        host.run_pending();
        assert_eq!(host.stack(), ["/pages/index/index"]);

        let (responses, callbacks) = capture();
        host.navigate_back(1, callbacks);
        host.run_pending();
        assert_eq!(
            *responses.lock().unwrap(),
            vec!["navigateBack:fail cannot navigate back at first page."]
        );
        assert_eq!(host.dispatched().len(), 4);
    }

    #[test]
    fn test_hand_built_host_accepts_any_url() {
        let mut host = SimulatedHost::new()
            .with_entry("/pages/home/home")
            .with_tab_page("/pages/home/home");
        assert!(host.is_tab_page("/pages/home/home"));

        host.navigate_to("/pages/anything/anything", NavCallbacks::new());
        host.navigate_to("/pages/home/home", NavCallbacks::new());
        host.run_pending();
        assert_eq!(
            host.stack(),
            ["/pages/home/home", "/pages/anything/anything"]
        );
    }
}
