use crate::state::directory::{DirectoryState, DirectoryTab};
use leptos::*;

#[component]
pub fn DirectoryToolbar(state: RwSignal<DirectoryState>) -> impl IntoView {
    view! {
        <div class="grid w-full gap-3 sm:grid-cols-2 md:w-auto">
            <input
                type="text"
                placeholder="Search employee"
                class="rounded-xl border border-border bg-surface px-4 py-2.5 text-sm"
                prop:value=move || state.with(|s| s.query.clone())
                on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
            />
            <input
                type="date"
                class="rounded-xl border border-border bg-surface px-4 py-2.5 text-sm"
                prop:value=move || state.with(|s| s.date.clone())
                on:change=move |ev| state.update(|s| s.set_date(event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn StatusTabs(state: RwSignal<DirectoryState>) -> impl IntoView {
    view! {
        <div class="mb-5 flex flex-wrap gap-2 md:mb-6">
            {DirectoryTab::ALL
                .into_iter()
                .map(|tab| {
                    let active = move || state.with(|s| s.tab == tab);
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if active() {
                                    "rounded-xl px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                                } else {
                                    "rounded-xl px-4 py-2 text-sm font-semibold bg-surface-muted text-fg-muted"
                                }
                            }
                            on:click=move |_| state.update(|s| s.set_tab(tab))
                        >
                            {tab.label()}
                            " ("
                            {move || state.with(|s| s.tab_badge(tab))}
                            ")"
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
