mod auth_form;
pub mod driver;
pub mod index;
pub mod login;
pub mod not_found;
pub mod register;
pub mod rider;
pub mod staff;

use crate::auth::use_auth;
use crate::BRAND;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCar, LdClock, LdCreditCard, LdDollarSign, LdLayoutDashboard, LdLogOut, LdMapPin,
    LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use gate::AccessDecision;
use shared_types::UserRole;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Button, ButtonSize, ButtonVariant, Sidebar,
    SidebarContent, SidebarFooter, SidebarHeader, SidebarInset, SidebarLayout,
    SidebarMenuButton, SidebarTrigger, ToastOptions, use_toast,
};

use driver::{DriverDashboard, Earnings, ManageRides};
use index::Index;
use login::Login;
use not_found::NotFound;
use register::Register;
use rider::{BookRide, Payment, RideHistory, RiderDashboard};
use staff::{Analytics, RideManagement, StaffDashboard, UserManagement};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Index {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},

    #[nest("/rider")]
        #[layout(RiderShell)]
            #[route("/")]
            RiderDashboard {},
            #[route("/book")]
            BookRide {},
            #[route("/history")]
            RideHistory {},
            #[route("/payment")]
            Payment {},
        #[end_layout]
    #[end_nest]

    #[nest("/driver")]
        #[layout(DriverShell)]
            #[route("/")]
            DriverDashboard {},
            #[route("/rides")]
            ManageRides {},
            #[route("/earnings")]
            Earnings {},
        #[end_layout]
    #[end_nest]

    #[nest("/staff")]
        #[layout(StaffShell)]
            #[route("/")]
            StaffDashboard {},
            #[route("/users")]
            UserManagement {},
            #[route("/rides")]
            RideManagement {},
            #[route("/analytics")]
            Analytics {},
        #[end_layout]
    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Dashboard a role lands on after signing in.
pub fn home_route(role: UserRole) -> Route {
    match role {
        UserRole::Rider => Route::RiderDashboard {},
        UserRole::Driver => Route::DriverDashboard {},
        UserRole::Staff => Route::StaffDashboard {},
    }
}

/// Icon shown next to a sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq)]
enum NavIcon {
    Dashboard,
    Car,
    History,
    Wallet,
    Earnings,
    Users,
    Map,
    Analytics,
}

#[derive(Debug, Clone, PartialEq)]
struct NavItem {
    label: &'static str,
    route: Route,
    icon: NavIcon,
}

fn nav_items(role: UserRole) -> Vec<NavItem> {
    let item = |label, route, icon| NavItem { label, route, icon };
    match role {
        UserRole::Rider => vec![
            item("Dashboard", Route::RiderDashboard {}, NavIcon::Dashboard),
            item("Book a Ride", Route::BookRide {}, NavIcon::Car),
            item("Ride History", Route::RideHistory {}, NavIcon::History),
            item("Payment", Route::Payment {}, NavIcon::Wallet),
        ],
        UserRole::Driver => vec![
            item("Dashboard", Route::DriverDashboard {}, NavIcon::Dashboard),
            item("Manage Rides", Route::ManageRides {}, NavIcon::Car),
            item("Earnings", Route::Earnings {}, NavIcon::Earnings),
        ],
        UserRole::Staff => vec![
            item("Dashboard", Route::StaffDashboard {}, NavIcon::Dashboard),
            item("User Management", Route::UserManagement {}, NavIcon::Users),
            item("Ride Management", Route::RideManagement {}, NavIcon::Map),
            item("Analytics", Route::Analytics {}, NavIcon::Analytics),
        ],
    }
}

/// Header title for the page currently under a role layout.
fn page_title(route: &Route) -> &'static str {
    match route {
        Route::RiderDashboard {} => "Rider Dashboard",
        Route::BookRide {} => "Book a Ride",
        Route::RideHistory {} => "Ride History",
        Route::Payment {} => "Payment",
        Route::DriverDashboard {} => "Driver Dashboard",
        Route::ManageRides {} => "Manage Rides",
        Route::Earnings {} => "Earnings",
        Route::StaffDashboard {} => "Staff Dashboard",
        Route::UserManagement {} => "User Management",
        Route::RideManagement {} => "Ride Management",
        Route::Analytics {} => "Analytics",
        Route::Index {} | Route::Login {} | Route::Register {} | Route::NotFound { .. } => BRAND,
    }
}

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Car => rsx! { Icon::<LdCar> { icon: LdCar, width: 18, height: 18 } },
        NavIcon::History => rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
        NavIcon::Wallet => rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: 18, height: 18 } },
        NavIcon::Earnings => rsx! { Icon::<LdDollarSign> { icon: LdDollarSign, width: 18, height: 18 } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::Map => rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 18, height: 18 } },
        NavIcon::Analytics => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 } },
    }
}

#[component]
fn RiderShell() -> Element {
    rsx! { RoleGuard { role: UserRole::Rider } }
}

#[component]
fn DriverShell() -> Element {
    rsx! { RoleGuard { role: UserRole::Driver } }
}

#[component]
fn StaffShell() -> Element {
    rsx! { RoleGuard { role: UserRole::Staff } }
}

/// Admits only sessions of `role`. Anonymous visitors go to the login
/// page; signed-in users of another role go back to their own dashboard.
#[component]
fn RoleGuard(role: UserRole) -> Element {
    let auth = use_auth();
    let decision = auth.authorize(role);

    match decision {
        AccessDecision::Granted => rsx! { DashboardLayout { role } },
        AccessDecision::Pending => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
        AccessDecision::RedirectToLogin => {
            tracing::debug!(%role, "No session, redirecting to login");
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        AccessDecision::RedirectToHome(actual) => {
            tracing::debug!(required = %role, %actual, "Wrong role, redirecting home");
            navigator().replace(home_route(actual));
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

const SIGNED_OUT_MESSAGE: &str = "Logged out successfully";

/// Sidebar frame shared by the three dashboards.
#[component]
fn DashboardLayout(role: UserRole) -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let toast = use_toast();
    let user = auth.current_user();
    let title = page_title(&route);

    let handle_logout = move |_: MouseEvent| {
        navigator().push(Route::Index {});
        auth.end_session();
        toast.info(SIGNED_OUT_MESSAGE.to_string(), ToastOptions::new());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarLayout {
            Sidebar {
                SidebarHeader {
                    Link { class: "brand", to: Route::Index {}, "{BRAND}" }
                    span { class: "brand-role", "{role.display_name()}" }
                }
                SidebarContent {
                    for item in nav_items(role) {
                        SidebarMenuButton {
                            key: "{item.label}",
                            active: item.route == route,
                            onclick: {
                                let target = item.route.clone();
                                move |_: MouseEvent| {
                                    navigator().push(target.clone());
                                }
                            },
                            NavGlyph { icon: item.icon }
                            span { "{item.label}" }
                        }
                    }
                }
                SidebarFooter {
                    if let Some(user) = user {
                        div { class: "sidebar-user",
                            Avatar {
                                if let Some(src) = user.profile_image.clone() {
                                    AvatarImage { src }
                                }
                                AvatarFallback { "{user.initials()}" }
                            }
                            div { class: "sidebar-user-text",
                                span { class: "sidebar-user-name", "{user.name}" }
                                span { class: "sidebar-user-email", "{user.email}" }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: handle_logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Logout"
                    }
                }
            }
            SidebarInset {
                header { class: "dashboard-header",
                    SidebarTrigger {}
                    h1 { class: "dashboard-title", "{title}" }
                }
                div { class: "dashboard-body",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_role_home_is_its_first_nav_entry() {
        for &role in shared_types::ALL_ROLES {
            let items = nav_items(role);
            assert_eq!(items[0].route, home_route(role));
            assert_eq!(items[0].label, "Dashboard");
        }
    }

    #[test]
    fn nav_titles_cover_every_dashboard_page() {
        for &role in shared_types::ALL_ROLES {
            for item in nav_items(role) {
                assert_ne!(page_title(&item.route), BRAND, "{}", item.label);
            }
        }
    }

    #[test]
    fn sign_out_notice_text() {
        assert_eq!(SIGNED_OUT_MESSAGE, "Logged out successfully");
    }

    #[test]
    fn driver_nav_matches_product_layout() {
        let labels: Vec<_> = nav_items(UserRole::Driver).iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Manage Rides", "Earnings"]);
    }
}
