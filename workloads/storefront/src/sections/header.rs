//! Site header: utility bar, sticky navigation, notification banner and the
//! auth modals.

use leveling_deferred::Component;

use crate::data::ORDERS_NOTICE;
use crate::sections::{render_logo, render_nav_menu, AuthModals, SearchBar};

/// Site header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    mobile_menu_open: bool,
    search: SearchBar,
    modals: AuthModals,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// "Log In" in the utility bar.
    pub fn open_login(&mut self) {
        self.modals.open_login();
    }

    /// "Sign Up" in the utility bar.
    pub fn open_signup(&mut self) {
        self.modals.open_signup();
    }

    pub fn modals(&self) -> &AuthModals {
        &self.modals
    }

    pub fn modals_mut(&mut self) -> &mut AuthModals {
        &mut self.modals
    }

    pub fn search_mut(&mut self) -> &mut SearchBar {
        &mut self.search
    }

    fn render_utility_bar(&self) -> String {
        r#"<div class="bg-gray-100"><div class="max-w-screen-2xl mx-auto px-8 flex justify-end items-center h-9 text-xs"><div class="flex items-center gap-2 text-gray-800"><a href="/help" class="hover:text-black transition cursor-pointer">Help</a><span class="text-gray-400">|</span><button data-action="open-signup" class="hover:text-black transition cursor-pointer bg-transparent border-none p-0">Sign Up</button><span class="text-gray-400">|</span><button data-action="open-login" class="hover:text-black transition cursor-pointer bg-transparent border-none p-0">Log In</button></div></div></div>"#
            .to_string()
    }

    fn render_nav(&self) -> String {
        let mobile = if self.mobile_menu_open {
            format!(
                r#"<div class="lg:hidden p-4 bg-white" data-mobile-menu>{}</div>"#,
                render_nav_menu(true)
            )
        } else {
            String::new()
        };

        format!(
            r#"<header class="sticky top-0 z-50 w-full bg-white"><nav><div class="max-w-screen-2xl mx-auto px-8 flex items-center justify-between h-14 md:h-16"><a href="/" class="flex-shrink-0 cursor-pointer">{logo}</a><div class="hidden lg:flex absolute left-1/2 transform -translate-x-1/2">{menu}</div><div class="flex items-center gap-3 md:gap-4 ml-auto">{search}<button data-action="toggle-menu" class="lg:hidden flex flex-col gap-1.5 p-2 cursor-pointer"><span class="w-6 h-0.5 bg-black"></span><span class="w-6 h-0.5 bg-black"></span><span class="w-6 h-0.5 bg-black"></span></button></div></div>{mobile}</nav></header>"#,
            logo = render_logo(),
            menu = render_nav_menu(false),
            search = self.search.render(),
            mobile = mobile
        )
    }
}

impl Component for Header {
    fn render(&self) -> String {
        let mut html = self.render_utility_bar();
        html.push_str(&self.render_nav());
        html.push_str(&format!(
            r#"<div class="bg-gray-100 py-2"><div class="max-w-screen-2xl mx-auto px-8"><p class="text-xs md:text-sm text-center text-gray-800">{} <a href="/orders" class="underline hover:text-black font-medium cursor-pointer">here</a></p></div></div>"#,
            ORDERS_NOTICE
        ));
        html.push_str(&self.modals.render());
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_utility_bar_and_banner() {
        let html = Header::new().render();

        assert!(html.contains(">Help</a>"));
        assert!(html.contains(">Log In</button>"));
        assert!(html.contains("30 January 2026"));
        assert!(!html.contains("data-modal"));
    }

    #[test]
    fn test_mobile_menu_toggles() {
        let mut header = Header::new();
        header.toggle_mobile_menu();
        assert!(header.render().contains("data-mobile-menu"));

        header.toggle_mobile_menu();
        assert!(!header.is_mobile_menu_open());
        assert!(!header.render().contains("data-mobile-menu"));
    }

    #[test]
    fn test_log_in_opens_modal() {
        let mut header = Header::new();
        header.open_login();

        assert!(header.modals().is_login_open());
        assert!(header.render().contains(r#"data-modal="login""#));
    }
}
