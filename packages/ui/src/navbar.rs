//! Header navigation: which screen is active and whether the mobile menu is open.

use dioxus::prelude::*;
use store::SessionHandle;

use crate::auth::LogoutButton;
use crate::icons::{FaBars, FaCalendar, FaHeart, FaHouse, FaUser, FaXmark};
use crate::Icon;

/// Screens reachable from the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Dashboard,
    Booking,
    Profile,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Booking, Page::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Booking => "Book Service",
            Self::Profile => "Profile",
        }
    }
}

/// Presentational navigation state. Not persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub page: Page,
    pub menu_open: bool,
}

impl NavState {
    /// Switch screens. Also closes the mobile menu.
    pub fn select(&mut self, page: Page) {
        self.page = page;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

#[component]
fn PageIcon(page: Page) -> Element {
    match page {
        Page::Dashboard => rsx! { Icon { icon: FaHouse, width: 18, height: 18 } },
        Page::Booking => rsx! { Icon { icon: FaCalendar, width: 18, height: 18 } },
        Page::Profile => rsx! { Icon { icon: FaUser, width: 18, height: 18 } },
    }
}

#[component]
pub fn Navbar(nav_state: Signal<NavState>, session: SessionHandle, children: Element) -> Element {
    let mut nav_state = nav_state;
    let state = nav_state();

    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-inner",
                div {
                    class: "navbar-brand",
                    Icon { icon: FaHeart, width: 28, height: 28, class: "brand-icon" }
                    h1 { "MAX@Home" }
                }

                nav {
                    class: "navbar-links",
                    for page in Page::ALL {
                        button {
                            key: "{page.label()}",
                            class: if state.page == page { "nav-link active" } else { "nav-link" },
                            onclick: move |_| nav_state.write().select(page),
                            PageIcon { page }
                            span { "{page.label()}" }
                        }
                    }
                }

                {children}

                LogoutButton { session: session.clone(), class: "nav-logout desktop-only" }

                button {
                    class: "menu-toggle",
                    title: if state.menu_open { "Close menu" } else { "Open menu" },
                    onclick: move |_| nav_state.write().toggle_menu(),
                    if state.menu_open {
                        Icon { icon: FaXmark, width: 22, height: 22 }
                    } else {
                        Icon { icon: FaBars, width: 22, height: 22 }
                    }
                }
            }

            if state.menu_open {
                div {
                    class: "mobile-menu",
                    for page in Page::ALL {
                        button {
                            key: "{page.label()}",
                            class: "mobile-menu-item",
                            onclick: move |_| nav_state.write().select(page),
                            PageIcon { page }
                            span { "{page.label()}" }
                        }
                    }
                    LogoutButton { session: session.clone(), class: "mobile-menu-item danger" }
                }
            }
        }
    }
}
