use crate::state::feedback::Feedback;
use leptos::*;

#[component]
pub fn FeedbackBanner(feedback: Signal<Option<Feedback>>, on_dismiss: Callback<()>) -> impl IntoView {
    move || {
        feedback.get().map(|feedback| {
            let class = if feedback.is_error() {
                "mb-4 flex items-center justify-between rounded-xl border border-status-error-border bg-status-error-bg px-4 py-2 text-sm text-status-error-text"
            } else {
                "mb-4 flex items-center justify-between rounded-xl border border-status-success-border bg-status-success-bg px-4 py-2 text-sm text-status-success-text"
            };
            view! {
                <div class=class role="status">
                    <p>{feedback.message}</p>
                    <button type="button" class="text-xs font-semibold" on:click=move |_| on_dismiss.call(())>
                        "Dismiss"
                    </button>
                </div>
            }
        })
    }
}
