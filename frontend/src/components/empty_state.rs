use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-dashed border-border-strong bg-surface-muted px-4 py-8 text-center">
            <svg class="mx-auto h-10 w-10 text-fg-muted" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 20h5v-2a4 4 0 00-5-3.87M9 20H4v-2a4 4 0 015-3.87m6-4.13a4 4 0 11-8 0 4 4 0 018 0z" />
            </svg>
            <p class="mt-2 text-sm font-semibold text-fg">{title}</p>
            {description.map(|desc| view! { <p class="mt-1 text-xs text-fg-muted">{desc}</p> })}
        </div>
    }
}
