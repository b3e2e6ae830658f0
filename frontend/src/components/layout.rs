use leptos::*;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/attendance", "Attendance"),
    ("/employ", "Employ"),
    ("/all-employ", "All Employ"),
];

fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(path) = web_sys::window().and_then(|w| w.location().pathname().ok()) {
            return path;
        }
    }
    "/".to_string()
}

fn is_active(href: &str, path: &str) -> bool {
    path == href || (href == "/dashboard" && path == "/")
}

#[component]
pub fn NavSidebar(#[prop(optional, into)] active_path: Option<String>) -> impl IntoView {
    let path = active_path.unwrap_or_else(current_path);

    view! {
        <aside class="sticky top-0 h-screen w-full border-b border-border bg-surface-elevated px-4 py-4 md:w-64 md:border-r md:border-b-0 md:px-5 md:py-6">
            <div class="mb-4 flex items-center justify-between md:mb-8 md:block">
                <p class="font-mono text-sm uppercase tracking-[0.2em] text-fg">"HR Suite"</p>
                <p class="font-mono text-xs text-fg-muted">"People Ops"</p>
            </div>
            <nav class="flex gap-2 md:flex-col">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        let class = if is_active(href, &path) {
                            "rounded-xl px-3 py-2 text-sm font-semibold md:px-4 md:py-3 bg-action-primary-bg text-action-primary-text"
                        } else {
                            "rounded-xl px-3 py-2 text-sm font-semibold md:px-4 md:py-3 bg-surface-muted text-fg hover:bg-action-ghost-bg-hover"
                        };
                        view! { <a href={*href} class=class>{*label}</a> }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface md:flex">
            <NavSidebar />
            <main class="w-full p-4 md:p-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}
