use crate::state::directory::DirectoryState;
use leptos::*;

#[component]
pub fn Pagination(state: RwSignal<DirectoryState>) -> impl IntoView {
    let current = Signal::derive(move || state.with(|s| s.current_page()));
    let pages = Signal::derive(move || state.with(|s| s.page_count()));

    view! {
        <div class="mt-4 flex items-center justify-between gap-3 text-sm text-fg-muted">
            <p>"Page " {move || current.get()} " of " {move || pages.get()}</p>
            <div class="flex gap-2">
                <button
                    type="button"
                    class="rounded-lg border border-border px-3 py-1.5 disabled:opacity-50"
                    disabled=move || current.get() <= 1
                    on:click=move |_| {
                        let target = current.get_untracked().saturating_sub(1);
                        state.update(|s| s.go_to_page(target));
                    }
                >
                    "Previous"
                </button>
                <button
                    type="button"
                    class="rounded-lg border border-border px-3 py-1.5 disabled:opacity-50"
                    disabled=move || current.get() >= pages.get()
                    on:click=move |_| {
                        let target = current.get_untracked() + 1;
                        state.update(|s| s.go_to_page(target));
                    }
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
