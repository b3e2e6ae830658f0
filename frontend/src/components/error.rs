use crate::api::ApiError;
use leptos::*;

/// Full-page block shown instead of any partial UI when a page load fails.
#[component]
pub fn LoadErrorPanel(#[prop(into)] title: String, error: ApiError) -> impl IntoView {
    let code = (error.code != "UNKNOWN" && !error.code.is_empty()).then(|| error.code.clone());
    view! {
        <section class="rounded-3xl border border-status-error-border bg-surface-elevated p-6" role="alert">
            <h1 class="text-xl font-bold text-status-error-text">{title}</h1>
            <p class="mt-2 text-sm text-status-error-text">{error.error}</p>
            {code.map(|code| view! { <p class="mt-1 text-xs opacity-75">"Code: " {code}</p> })}
        </section>
    }
}
