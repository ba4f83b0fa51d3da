use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::{Notification, NotificationVariant, Notifier};
use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
}

impl From<NotificationVariant> for ToastType {
    fn from(variant: NotificationVariant) -> Self {
        match variant {
            NotificationVariant::Default => ToastType::Success,
            NotificationVariant::Destructive => ToastType::Error,
        }
    }
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-green-500 border-green-600",
            ToastType::Error => "bg-red-500 border-red-600",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: Option<String>,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for manual dismiss
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: None,
            message,
            toast_type,
            duration: Some(5000), // 5 seconds default
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

}

impl From<Notification> for Toast {
    fn from(notification: Notification) -> Self {
        let toast = Toast::new(notification.description, notification.variant.into())
            .with_title(notification.title);
        // Failures stay up longer so the user has time to read them
        match notification.variant {
            NotificationVariant::Destructive => toast.with_duration(8000),
            NotificationVariant::Default => toast,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

impl Notifier for ToastContext {
    fn notify(&self, notification: Notification) {
        self.add_toast.emit(notification.into());
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

/// Reducer state so timers and callbacks always act on the latest list
#[derive(Default, PartialEq)]
struct ToastStack {
    toasts: Vec<Toast>,
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastStack { toasts })
    }
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let stack = use_reducer(ToastStack::default);

    let add_toast = {
        let dispatcher = stack.dispatcher();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration = toast.duration;
            dispatcher.dispatch(ToastAction::Add(toast));

            // Auto-remove after duration if specified
            if let Some(duration_ms) = duration {
                let dispatcher = dispatcher.clone();
                let timeout = Timeout::new(duration_ms, move || {
                    dispatcher.dispatch(ToastAction::Remove(toast_id));
                });
                timeout.forget(); // Let it run in background
            }
        })
    };

    let remove_toast = {
        let dispatcher = stack.dispatcher();
        Callback::from(move |id: Uuid| dispatcher.dispatch(ToastAction::Remove(id)))
    };

    let context = ToastContext {
        toasts: stack.toasts.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            <div class="toast-container">
                {props.children.clone()}
                <ToastList />
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastList)]
fn toast_list() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {toast_context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let visible = use_state(|| false);

    // Animate in
    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let visible = visible.clone();
            let timeout = Timeout::new(10, move || {
                visible.set(true);
            });
            timeout.forget();
            || {}
        });
    }

    let on_close = {
        let toast_context = toast_context.clone();
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| {
            toast_context.remove_toast.emit(toast_id);
        })
    };

    let toast_type_classes = props.toast.toast_type.classes();
    let icon = props.toast.toast_type.icon();

    html! {
        <div class={classes!(
            "transform", "transition-all", "duration-300", "ease-in-out",
            if *visible { "translate-x-0 opacity-100" } else { "translate-x-full opacity-0" }
        )}>
            <div class={classes!(
                "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "text-white", "min-w-80", "max-w-md",
                toast_type_classes
            )}>
                <div class="flex-shrink-0 mr-3">
                    <span class="text-lg font-bold">{icon}</span>
                </div>
                <div class="flex-1">
                    if let Some(title) = &props.toast.title {
                        <p class="text-sm font-bold">{title}</p>
                    }
                    <p class="text-sm font-medium">{&props.toast.message}</p>
                </div>
                <div class="flex-shrink-0 ml-3">
                    <button
                        onclick={on_close}
                        class="text-white hover:text-gray-200 focus:outline-none focus:text-gray-200 transition-colors duration-200"
                    >
                        <span class="text-lg">{"×"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
