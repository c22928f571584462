use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCreditCard, LdPlus, LdTrash2, LdWallet};
use dioxus_free_icons::Icon;
use shared_types::fixtures::{
    initial_payment_methods, parse_top_up, remove_method, set_default_method, top_up_message,
    NewCard, TOP_UP_PRESETS, TRANSACTIONS, WALLET,
};
use shared_ui::{
    use_toast, Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardFooter, CardHeader, CardTitle, DialogContent, DialogDescription, DialogFooter, DialogRoot,
    DialogTitle, Input, Label, ToastOptions,
};

/// Saved cards, wallet top-up and transaction history. Card changes live in
/// page state only.
#[component]
pub fn Payment() -> Element {
    let toast = use_toast();
    let mut methods = use_signal(initial_payment_methods);
    let mut top_up = use_signal(String::new);
    let mut adding_card = use_signal(|| false);
    let mut new_card = use_signal(NewCard::default);

    let handle_top_up = move |_: MouseEvent| {
        let input = top_up();
        match parse_top_up(&input) {
            Ok(_) => {
                toast.success(top_up_message(&input), ToastOptions::new());
                top_up.set(String::new());
            }
            Err(message) => {
                toast.error(message.to_string(), ToastOptions::new());
            }
        }
    };

    let handle_add_card = move |_: MouseEvent| {
        let card = new_card();
        let result = card.into_payment_method(&methods.read());
        match result {
            Ok(method) => {
                methods.write().push(method);
                new_card.set(NewCard::default());
                adding_card.set(false);
                toast.success("Payment method added successfully".to_string(), ToastOptions::new());
            }
            Err(message) => {
                toast.error(message.to_string(), ToastOptions::new());
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./rider.css") }

        div { class: "payment-grid",
            Card {
                CardHeader {
                    CardTitle { "Your Payment Methods" }
                    CardDescription { "Manage your cards and payment options" }
                }
                CardContent {
                    div { class: "payment-methods",
                        for method in methods() {
                            div {
                                key: "{method.id}",
                                class: "payment-method",
                                "data-default": method.is_default,
                                div { class: "payment-method-info",
                                    Icon::<LdCreditCard> { icon: LdCreditCard, width: 20, height: 20 }
                                    div {
                                        div { class: "payment-method-title",
                                            "{method.brand.label()} •••• {method.last4}"
                                        }
                                        div { class: "muted", "Expires {method.expiry}" }
                                        div { class: "muted", "{method.name}" }
                                    }
                                }
                                div { class: "payment-method-actions",
                                    if method.is_default {
                                        Badge { "Default" }
                                    } else {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            size: ButtonSize::Small,
                                            onclick: {
                                                let id = method.id.clone();
                                                move |_: MouseEvent| {
                                                    set_default_method(&mut methods.write(), &id);
                                                    toast.success("Default payment method updated".to_string(), ToastOptions::new());
                                                }
                                            },
                                            "Set as Default"
                                        }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        size: ButtonSize::Small,
                                        onclick: {
                                            let id = method.id.clone();
                                            move |_: MouseEvent| {
                                                let removed = remove_method(&mut methods.write(), &id);
                                                match removed {
                                                    Ok(()) => toast.success("Payment method removed".to_string(), ToastOptions::new()),
                                                    Err(message) => toast.error(message.to_string(), ToastOptions::new()),
                                                }
                                            }
                                        },
                                        Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
                                    }
                                }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_: MouseEvent| adding_card.set(true),
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Add Payment Method"
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Transaction History" }
                    CardDescription { "Your recent payment activities" }
                }
                CardContent {
                    ul { class: "ride-list",
                        for tx in TRANSACTIONS.iter() {
                            li { key: "{tx.id}", class: "ride-list-item",
                                div {
                                    div { class: "ride-list-route", "{tx.description}" }
                                    div { class: "muted", "{tx.date}" }
                                }
                                div {
                                    class: if tx.is_credit() { "tx-amount tx-credit" } else { "tx-amount" },
                                    "{tx.amount}"
                                }
                            }
                        }
                    }
                }
                CardFooter {
                    Button { variant: ButtonVariant::Outline, "View All Transactions" }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "RideX Wallet" }
                    CardDescription { "Manage your RideX balance" }
                }
                CardContent {
                    div { class: "wallet-hero",
                        Icon::<LdWallet> { icon: LdWallet, width: 32, height: 32 }
                        div { class: "muted", "Available Balance" }
                        div { class: "wallet-balance", "{WALLET.balance}" }
                    }
                    div { class: "muted", "Top up your wallet" }
                    div { class: "top-up-presets",
                        for preset in TOP_UP_PRESETS.iter() {
                            Button {
                                key: "{preset}",
                                variant: ButtonVariant::Outline,
                                onclick: move |_: MouseEvent| top_up.set(preset.to_string()),
                                "${preset}"
                            }
                        }
                    }
                    Input {
                        placeholder: "Enter amount",
                        value: top_up(),
                        on_input: move |e: FormEvent| top_up.set(e.value()),
                    }
                    Button { onclick: handle_top_up, "Add Funds" }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Payment Settings" }
                    CardDescription { "Configure your payment preferences" }
                }
                CardContent {
                    div { class: "settings-list",
                        div { class: "settings-row",
                            div {
                                div { class: "settings-title", "Auto Top-up" }
                                div { class: "muted", "Automatically add funds when balance is low" }
                            }
                            Button { variant: ButtonVariant::Outline, "Configure" }
                        }
                        div { class: "settings-row",
                            div {
                                div { class: "settings-title", "Payment Receipts" }
                                div { class: "muted", "Manage email receipt settings" }
                            }
                            Button { variant: ButtonVariant::Outline, "Configure" }
                        }
                        div { class: "settings-row",
                            div {
                                div { class: "settings-title", "Expense Reports" }
                                div { class: "muted", "Export your ride history for expense tracking" }
                            }
                            Button { variant: ButtonVariant::Outline, "Export" }
                        }
                    }
                }
            }
        }

        DialogRoot {
            open: adding_card(),
            on_open_change: move |open: bool| adding_card.set(open),
            DialogContent {
                DialogTitle { "Add Payment Method" }
                DialogDescription { "Add a new credit or debit card to your account" }
                div { class: "book-field",
                    Label { html_for: "card-number", "Card Number" }
                    Input {
                        id: "card-number",
                        placeholder: "1234 5678 9012 3456",
                        value: new_card().number,
                        on_input: move |e: FormEvent| new_card.write().number = e.value(),
                    }
                }
                div { class: "card-form-row",
                    div { class: "book-field",
                        Label { html_for: "expiry", "Expiry Date" }
                        Input {
                            id: "expiry",
                            placeholder: "MM/YY",
                            value: new_card().expiry,
                            on_input: move |e: FormEvent| new_card.write().expiry = e.value(),
                        }
                    }
                    div { class: "book-field",
                        Label { html_for: "cvc", "CVC" }
                        Input {
                            id: "cvc",
                            placeholder: "123",
                            value: new_card().cvc,
                            on_input: move |e: FormEvent| new_card.write().cvc = e.value(),
                        }
                    }
                }
                div { class: "book-field",
                    Label { html_for: "card-name", "Cardholder Name" }
                    Input {
                        id: "card-name",
                        placeholder: "John Doe",
                        value: new_card().name,
                        on_input: move |e: FormEvent| new_card.write().name = e.value(),
                    }
                }
                DialogFooter {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_: MouseEvent| adding_card.set(false),
                        "Cancel"
                    }
                    Button { onclick: handle_add_card, "Add Card" }
                }
            }
        }
    }
}
