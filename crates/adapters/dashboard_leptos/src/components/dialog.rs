//! Dialogs for relay announcements and errors.
//!
//! Announcements close themselves after their timeout; error dialogs stay
//! until the user confirms them. Only the newest error dialog is kept open.

use leptos::prelude::*;
use leptos::task::spawn_local;
use relaypanel_domain::notification::{Notification, NotificationLevel};

/// A dialog currently on screen.
#[derive(Debug, Clone)]
pub struct DialogMessage {
    /// Unique id for keyed rendering.
    pub id: u32,
    pub notification: Notification,
}

/// Reactive context providing dialog mutation methods.
#[derive(Clone, Copy)]
pub struct DialogProvider {
    set_dialogs: WriteSignal<Vec<DialogMessage>>,
    next_id: ReadSignal<u32>,
    set_next_id: WriteSignal<u32>,
}

impl DialogProvider {
    /// Open a dialog, scheduling its removal if it auto-dismisses.
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.set_next_id.set(id.wrapping_add(1));

        let auto_dismiss = notification.auto_dismiss;
        self.set_dialogs.update(|list| {
            open(list, DialogMessage { id, notification });
        });

        if let Some(timeout) = auto_dismiss {
            let provider = *self;
            let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(millis).await;
                provider.dismiss(id);
            });
        }
    }

    /// Close a dialog immediately by id.
    pub fn dismiss(&self, id: u32) {
        self.set_dialogs.update(|list| {
            list.retain(|d| d.id != id);
        });
    }
}

/// Add `message` to the open dialogs. A modal dialog replaces any modal
/// dialog still open.
fn open(list: &mut Vec<DialogMessage>, message: DialogMessage) {
    if message.notification.is_modal() {
        list.retain(|d| !d.notification.is_modal());
    }
    list.push(message);
}

/// Access the dialog provider from Leptos context.
///
/// Must be called within a component tree that has a [`DialogHost`] ancestor.
pub fn use_dialogs() -> DialogProvider {
    use_context::<DialogProvider>().expect("DialogProvider not found in context")
}

fn level_class(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Success => "dialog dialog-success",
        NotificationLevel::Info => "dialog dialog-info",
        NotificationLevel::Error => "dialog dialog-error",
    }
}

/// Container component that provides dialog context and renders open dialogs.
#[component]
pub fn DialogHost(children: Children) -> impl IntoView {
    let (dialogs, set_dialogs) = signal(Vec::<DialogMessage>::new());
    let (next_id, set_next_id) = signal(0_u32);

    let provider = DialogProvider {
        set_dialogs,
        next_id,
        set_next_id,
    };

    provide_context(provider);

    view! {
        {children()}
        <div class="dialog-container">
            {move || {
                dialogs
                    .get()
                    .into_iter()
                    .map(|dialog| {
                        let id = dialog.id;
                        let Notification { title, text, level, auto_dismiss } = dialog.notification;
                        view! {
                            <div class=level_class(level) role="dialog">
                                <h2 class="dialog-title">{title}</h2>
                                <p class="dialog-text">{text}</p>
                                {auto_dismiss
                                    .is_none()
                                    .then(|| {
                                        view! {
                                            <button
                                                class="dialog-confirm"
                                                on:click=move |_| provider.dismiss(id)
                                            >
                                                "OK"
                                            </button>
                                        }
                                    })}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
