//! Host navigation primitives
//!
//! The router never moves pages itself. It resolves an intent and hands the
//! resulting call to a [`NavigationHost`], which answers later through the
//! call's [`NavCallbacks`].

pub mod simulated;

pub use simulated::SimulatedHost;

use crate::router::NavCallbacks;

/// Page-stack primitives exposed by the host platform.
///
/// Every primitive is fire-and-forget: it returns immediately and settles
/// `callbacks` at a point of the host's choosing.
pub trait NavigationHost {
    /// Open `url` on top of the current page
    fn navigate_to(&mut self, url: &str, callbacks: NavCallbacks);

    /// Close every page and open `url`
    fn re_launch(&mut self, url: &str, callbacks: NavCallbacks);

    /// Replace the current page with `url`
    fn redirect_to(&mut self, url: &str, callbacks: NavCallbacks);

    /// Switch to the tab-root page `url`
    fn switch_tab(&mut self, url: &str, callbacks: NavCallbacks);

    /// Pop `delta` pages
    fn navigate_back(&mut self, delta: u64, callbacks: NavCallbacks);
}

impl<H: NavigationHost + ?Sized> NavigationHost for Box<H> {
    fn navigate_to(&mut self, url: &str, callbacks: NavCallbacks) {
        (**self).navigate_to(url, callbacks)
    }

    fn re_launch(&mut self, url: &str, callbacks: NavCallbacks) {
        (**self).re_launch(url, callbacks)
    }

    fn redirect_to(&mut self, url: &str, callbacks: NavCallbacks) {
        (**self).redirect_to(url, callbacks)
    }

    fn switch_tab(&mut self, url: &str, callbacks: NavCallbacks) {
        (**self).switch_tab(url, callbacks)
    }

    fn navigate_back(&mut self, delta: u64, callbacks: NavCallbacks) {
        (**self).navigate_back(delta, callbacks)
    }
}
