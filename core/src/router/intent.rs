//! Navigation intents and their mapping onto host primitives

use super::callbacks::NavCallbacks;
use crate::error::{RouterError, RouterResult};
use crate::host::NavigationHost;
use crate::page::{PageDescriptor, PageName, PageRegistry};
use std::fmt;

/// Pop depth used by `back_home`: the largest integer the host runtime
/// represents exactly, so the host clamps it to the whole stack.
pub const BACK_HOME_DELTA: u64 = 9_007_199_254_740_991;

/// What a navigation call asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Keep the current page and open `page` on top of it
    Push(PageName),
    /// Close every page and open `page`
    ReLaunch(PageName),
    /// Replace the current page with `page`
    Redirect(PageName),
    /// Switch to the tab-root page `page`
    SwitchTab(PageName),
    /// Pop `delta` pages off the stack
    Back { delta: u64 },
}

impl NavigationIntent {
    pub fn name(&self) -> &'static str {
        match self {
            NavigationIntent::Push(_) => "push",
            NavigationIntent::ReLaunch(_) => "reLaunch",
            NavigationIntent::Redirect(_) => "redirect",
            NavigationIntent::SwitchTab(_) => "switchTab",
            NavigationIntent::Back { .. } => "back",
        }
    }

    /// Target page of a forward intent
    pub fn target(&self) -> Option<&PageName> {
        match self {
            NavigationIntent::Push(page)
            | NavigationIntent::ReLaunch(page)
            | NavigationIntent::Redirect(page)
            | NavigationIntent::SwitchTab(page) => Some(page),
            NavigationIntent::Back { .. } => None,
        }
    }

    pub fn accepts_params(&self) -> bool {
        !matches!(self, NavigationIntent::SwitchTab(_))
    }

    /// Resolve the target page and pick the host primitive.
    ///
    /// Forward intents fail with [`RouterError::UnknownPage`] when the target
    /// is not registered; `Back` never fails here.
    pub fn resolve(
        &self,
        registry: &PageRegistry,
    ) -> RouterResult<(Option<PageDescriptor>, HostCall)> {
        let page = match self.target() {
            Some(target) => Some(registry.find(target.as_str()).cloned().ok_or_else(|| {
                RouterError::UnknownPage {
                    name: target.to_string(),
                }
            })?),
            None => None,
        };

        let url = page.as_ref().map(|page| page.url.clone()).unwrap_or_default();
        let call = match self {
            NavigationIntent::Push(_) => HostCall::NavigateTo { url },
            NavigationIntent::ReLaunch(_) => HostCall::ReLaunch { url },
            NavigationIntent::Redirect(_) => HostCall::RedirectTo { url },
            NavigationIntent::SwitchTab(_) => HostCall::SwitchTab { url },
            NavigationIntent::Back { delta } => HostCall::NavigateBack { delta: *delta },
        };
        Ok((page, call))
    }
}

impl fmt::Display for NavigationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationIntent::Back { delta } => write!(f, "back({})", delta),
            intent => match intent.target() {
                Some(page) => write!(f, "{}({})", intent.name(), page),
                None => f.write_str(intent.name()),
            },
        }
    }
}

/// A host primitive together with its resolved argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    NavigateTo { url: String },
    ReLaunch { url: String },
    RedirectTo { url: String },
    SwitchTab { url: String },
    NavigateBack { delta: u64 },
}

impl HostCall {
    /// Host api name, used as the prefix of host status lines
    pub fn api_name(&self) -> &'static str {
        match self {
            HostCall::NavigateTo { .. } => "navigateTo",
            HostCall::ReLaunch { .. } => "reLaunch",
            HostCall::RedirectTo { .. } => "redirectTo",
            HostCall::SwitchTab { .. } => "switchTab",
            HostCall::NavigateBack { .. } => "navigateBack",
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            HostCall::NavigateTo { url }
            | HostCall::ReLaunch { url }
            | HostCall::RedirectTo { url }
            | HostCall::SwitchTab { url } => Some(url),
            HostCall::NavigateBack { .. } => None,
        }
    }

    /// Hand the call to the matching host primitive
    pub fn invoke<H: NavigationHost + ?Sized>(self, host: &mut H, callbacks: NavCallbacks) {
        match self {
            HostCall::NavigateTo { url } => host.navigate_to(&url, callbacks),
            HostCall::ReLaunch { url } => host.re_launch(&url, callbacks),
            HostCall::RedirectTo { url } => host.redirect_to(&url, callbacks),
            HostCall::SwitchTab { url } => host.switch_tab(&url, callbacks),
            HostCall::NavigateBack { delta } => host.navigate_back(delta, callbacks),
        }
    }
}

impl fmt::Display for HostCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostCall::NavigateBack { delta } => write!(f, "{}({})", self.api_name(), delta),
            call => write!(f, "{}({})", call.api_name(), call.url().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::RawPage;

    fn registry() -> PageRegistry {
        PageRegistry::normalize(Some(&[
            RawPage::new("index", "pages/index/index"),
            RawPage::new("login", "login"),
        ]))
    }

    #[test]
    fn test_each_intent_maps_to_its_primitive() {
        let registry = registry();
        let cases = vec![
            (
                NavigationIntent::Push("login".into()),
                HostCall::NavigateTo {
                    url: "/login".into(),
                },
            ),
            (
                NavigationIntent::ReLaunch("login".into()),
                HostCall::ReLaunch {
                    url: "/login".into(),
                },
            ),
            (
                NavigationIntent::Redirect("login".into()),
                HostCall::RedirectTo {
                    url: "/login".into(),
                },
            ),
            (
                NavigationIntent::SwitchTab("index".into()),
                HostCall::SwitchTab {
                    url: "/pages/index/index".into(),
                },
            ),
            (
                NavigationIntent::Back { delta: 2 },
                HostCall::NavigateBack { delta: 2 },
            ),
        ];

        for (intent, expected) in cases {
            let (_, call) = intent.resolve(&registry).unwrap();
            assert_eq!(call, expected, "intent {}", intent);
        }
    }

    #[test]
    fn test_unknown_page_is_rejected() {
        let error = NavigationIntent::Push("nowhere".into())
            .resolve(&registry())
            .unwrap_err();
        assert!(matches!(error, RouterError::UnknownPage { name } if name == "nowhere"));
    }

    #[test]
    fn test_only_switch_tab_refuses_params() {
        assert!(NavigationIntent::Push("a".into()).accepts_params());
        assert!(NavigationIntent::Back { delta: 1 }.accepts_params());
        assert!(!NavigationIntent::SwitchTab("a".into()).accepts_params());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            NavigationIntent::Redirect("login".into()).to_string(),
            "redirect(login)"
        );
        assert_eq!(
            HostCall::NavigateBack { delta: 3 }.to_string(),
            "navigateBack(3)"
        );
    }
}
