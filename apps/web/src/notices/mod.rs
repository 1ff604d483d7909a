//! Flash messages and toasts, both fading out on their own.

use std::time::Duration;

use dioxus::prelude::*;
use gztechiz_core::notice::{Notice, NoticeBoard};
use gztechiz_core::types::NoticeKind;

use crate::state::*;
use crate::timer::sleep;

/// Fade `id` out, then remove it once the transition is over.
fn dismiss(board: &'static GlobalSignal<NoticeBoard>, id: u64) {
    if board.write().begin_dismiss(id) {
        let fade = site_config().notice_fade();
        spawn(async move {
            sleep(fade).await;
            board.write().remove(id);
        });
    }
}

fn dismiss_after(board: &'static GlobalSignal<NoticeBoard>, id: u64, delay: Duration) {
    spawn(async move {
        sleep(delay).await;
        dismiss(board, id);
    });
}

/// Queue a toast; it leaves after the notice timeout.
pub fn show_toast(kind: NoticeKind, message: String) {
    let id = TOASTS.write().push(kind, message);
    dismiss_after(&TOASTS, id, site_config().notice_timeout());
}

/// Server flash messages from the boot payload.
#[component]
pub fn FlashStack() -> Element {
    use_hook(|| {
        let timeout = site_config().notice_timeout();
        let ids: Vec<u64> = FLASHES.peek().iter().map(|n| n.id).collect();
        for id in ids {
            dismiss_after(&FLASHES, id, timeout);
        }
    });

    let flashes = FLASHES.read();
    if flashes.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "flash-messages",
            for notice in flashes.iter() {
                Flash { key: "{notice.id}", notice: notice.clone() }
            }
        }
    }
}

#[component]
fn Flash(notice: Notice) -> Element {
    let id = notice.id;
    rsx! {
        div {
            class: format!("flash flash-{}", notice.kind.as_str()),
            style: notice.style(),
            i { class: notice.kind.icon_class() }
            span { "{notice.message}" }
            button {
                class: "flash-close",
                onclick: move |_| dismiss(&FLASHES, id),
                i { class: "fas fa-times" }
            }
        }
    }
}

/// Toasts raised by page scripts and the clipboard helper.
#[component]
pub fn ToastHost() -> Element {
    let toasts = TOASTS.read();

    rsx! {
        div {
            class: "toast-container",
            for toast in toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: format!("toast toast-{}", toast.kind.as_str()),
                    style: toast.style(),
                    i { class: toast.kind.icon_class() }
                    span { "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: {
                            let id = toast.id;
                            move |_| {
                                TOASTS.write().remove(id);
                            }
                        },
                        i { class: "fas fa-times" }
                    }
                }
            }
        }
    }
}
