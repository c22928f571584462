use crate::components::{notify, AccountStatusBadge};
use crate::format_helpers::{format_date_human, format_rating};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEllipsis, LdUserPlus};
use dioxus_free_icons::Icon;
use shared_types::fixtures::{
    search_users, ManagedUser, UserAction, MANAGED_DRIVERS, MANAGED_RIDERS, MANAGED_STAFF,
    USER_ADDED_MESSAGE,
};
use shared_types::ALL_ROLES;
use shared_ui::{
    use_toast, Button, Card, CardContent, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, DialogContent,
    DialogDescription, DialogFooter, DialogRoot, DialogTitle, DropdownMenu, DropdownMenuContent,
    DropdownMenuItem, DropdownMenuSeparator, DropdownMenuTrigger, FormSelect, Input, Label,
    PersonAvatar, SearchBar, Segment, SegmentedControl, ToastOptions,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum UserTab {
    Riders,
    Drivers,
    Staff,
}

impl UserTab {
    fn key(&self) -> &'static str {
        match self {
            UserTab::Riders => "riders",
            UserTab::Drivers => "drivers",
            UserTab::Staff => "staff",
        }
    }

    fn from_key(key: &str) -> Self {
        match key {
            "drivers" => UserTab::Drivers,
            "staff" => UserTab::Staff,
            _ => UserTab::Riders,
        }
    }

    /// Noun used in action toasts ("Suspended driver with ID: d2").
    fn kind(&self) -> &'static str {
        match self {
            UserTab::Riders => "rider",
            UserTab::Drivers => "driver",
            UserTab::Staff => "staff",
        }
    }

    fn users(&self) -> &'static [ManagedUser] {
        match self {
            UserTab::Riders => MANAGED_RIDERS,
            UserTab::Drivers => MANAGED_DRIVERS,
            UserTab::Staff => MANAGED_STAFF,
        }
    }

    fn empty_message(&self) -> &'static str {
        match self {
            UserTab::Riders => "No riders found matching your search.",
            UserTab::Drivers => "No drivers found matching your search.",
            UserTab::Staff => "No staff members found matching your search.",
        }
    }

    fn columns(&self) -> u32 {
        match self {
            UserTab::Drivers => 6,
            _ => 5,
        }
    }
}

/// Rider, driver and staff accounts with search and per-row actions.
#[component]
pub fn UserManagement() -> Element {
    let toast = use_toast();
    let mut tab = use_signal(|| UserTab::Riders);
    let mut query = use_signal(String::new);
    let mut adding = use_signal(|| false);
    let mut new_name = use_signal(String::new);
    let mut new_email = use_signal(String::new);
    let mut new_kind = use_signal(|| "rider".to_string());

    let current = tab();
    let users = search_users(current.users(), &query());

    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        tracing::info!(email = %new_email(), kind = %new_kind(), "Staff added user");
        toast.success(USER_ADDED_MESSAGE.to_string(), ToastOptions::new());
        new_name.set(String::new());
        new_email.set(String::new());
        adding.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./staff.css") }

        SearchBar {
            value: query(),
            on_input: move |q: String| query.set(q),
            placeholder: "Search users...",
            Button {
                onclick: move |_: MouseEvent| adding.set(true),
                Icon::<LdUserPlus> { icon: LdUserPlus, width: 16, height: 16 }
                "Add User"
            }
        }

        SegmentedControl {
            segments: vec![
                Segment::new("riders", "Riders"),
                Segment::new("drivers", "Drivers"),
                Segment::new("staff", "Staff"),
            ],
            selected: current.key().to_string(),
            on_select: move |key: String| tab.set(UserTab::from_key(&key)),
        }

        Card { class: "staff-table-card",
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "User" }
                        DataTableColumn { "Joined" }
                        if current == UserTab::Staff {
                            DataTableColumn { "Role" }
                        } else {
                            DataTableColumn { "Rides" }
                        }
                        if current == UserTab::Drivers {
                            DataTableColumn { "Rating" }
                        }
                        DataTableColumn { "Status" }
                        DataTableColumn { align_right: true, "Actions" }
                    }
                    DataTableBody {
                        if users.is_empty() {
                            DataTableEmpty {
                                columns: current.columns(),
                                message: current.empty_message().to_string(),
                            }
                        }
                        for user in users {
                            DataTableRow { key: "{user.id}",
                                DataTableCell {
                                    div { class: "person-cell",
                                        PersonAvatar { name: user.name.to_string(), image: user.image.to_string() }
                                        div {
                                            div { class: "person-cell-name", "{user.name}" }
                                            div { class: "muted", "{user.email}" }
                                        }
                                    }
                                }
                                DataTableCell { "{format_date_human(user.joined)}" }
                                if current == UserTab::Staff {
                                    DataTableCell { {user.title.unwrap_or("-")} }
                                } else {
                                    DataTableCell { "{user.rides.unwrap_or(0)}" }
                                }
                                if current == UserTab::Drivers {
                                    DataTableCell {
                                        "★ "
                                        {user.rating.map(format_rating).unwrap_or_default()}
                                    }
                                }
                                DataTableCell {
                                    AccountStatusBadge { status: user.status }
                                }
                                DataTableCell { align_right: true,
                                    DropdownMenu {
                                        DropdownMenuTrigger {
                                            div { class: "row-menu-trigger",
                                                Icon::<LdEllipsis> { icon: LdEllipsis, width: 18, height: 18 }
                                            }
                                        }
                                        DropdownMenuContent {
                                            for (index, action) in UserAction::menu(user.status, current == UserTab::Drivers).into_iter().enumerate() {
                                                if action == UserAction::Delete {
                                                    DropdownMenuSeparator {}
                                                }
                                                DropdownMenuItem::<String> {
                                                    key: "{action.label()}",
                                                    value: action.label().to_string(),
                                                    index,
                                                    on_select: move |_: String| {
                                                        tracing::debug!(user = user.id, ?action, "User action");
                                                        if let Some(message) = action.message(current.kind(), user.id) {
                                                            notify(toast, action.tone(), message);
                                                        }
                                                    },
                                                    span {
                                                        class: if action == UserAction::Delete { "row-menu-destructive" } else { "" },
                                                        "{action.label()}"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        DialogRoot {
            open: adding(),
            on_open_change: move |open: bool| adding.set(open),
            DialogContent {
                DialogTitle { "Add New User" }
                DialogDescription {
                    "Create a new user account. The user will receive an email to set their password."
                }
                form { onsubmit: handle_add,
                    div { class: "dialog-field",
                        Label { html_for: "new-user-name", "Name" }
                        Input {
                            id: "new-user-name",
                            required: true,
                            value: new_name(),
                            on_input: move |e: FormEvent| new_name.set(e.value()),
                        }
                    }
                    div { class: "dialog-field",
                        Label { html_for: "new-user-email", "Email" }
                        Input {
                            id: "new-user-email",
                            input_type: "email",
                            required: true,
                            value: new_email(),
                            on_input: move |e: FormEvent| new_email.set(e.value()),
                        }
                    }
                    div { class: "dialog-field",
                        FormSelect {
                            id: "new-user-kind",
                            label: "User Type",
                            value: new_kind(),
                            onchange: move |e: FormEvent| new_kind.set(e.value()),
                            for &role in ALL_ROLES.iter() {
                                option { value: role.as_str(), "{role.display_name()}" }
                            }
                        }
                    }
                    DialogFooter {
                        Button { button_type: "submit", "Add User" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_keys_round_trip() {
        for tab in [UserTab::Riders, UserTab::Drivers, UserTab::Staff] {
            assert_eq!(UserTab::from_key(tab.key()), tab);
        }
    }

    #[test]
    fn drivers_tab_has_rating_column() {
        assert_eq!(UserTab::Drivers.columns(), 6);
        assert_eq!(UserTab::Staff.columns(), 5);
        assert_eq!(UserTab::Drivers.kind(), "driver");
    }
}
