use crate::utils::hr::{Availability, AvailabilityCounts};
use leptos::*;

const CARDS: [(Availability, &str, &str); 3] = [
    (Availability::Present, "People Present", "bg-status-success-bg text-status-success-text"),
    (Availability::Absent, "People Absent", "bg-status-warning-bg text-status-warning-text"),
    (Availability::Unknown, "Location Unknown", "bg-surface-muted text-fg-muted"),
];

#[component]
pub fn SummaryCards(counts: Signal<AvailabilityCounts>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
            {CARDS
                .into_iter()
                .map(|(availability, label, accent)| {
                    view! {
                        <Metric
                            label=label
                            accent=accent
                            value=Signal::derive(move || counts.with(|c| c.get(availability)))
                            total=Signal::derive(move || counts.with(AvailabilityCounts::total))
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Metric(
    label: &'static str,
    accent: &'static str,
    value: Signal<usize>,
    total: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="rounded-3xl border border-border bg-surface-elevated p-5 shadow-sm">
            <div class="flex items-center justify-between">
                <p class="text-sm font-semibold text-fg-muted">{label}</p>
                <span class=format!("rounded-full px-2 py-0.5 text-xs font-semibold {accent}")>"Today"</span>
            </div>
            <p class="mt-3 text-3xl font-extrabold text-fg">{move || value.get()}</p>
            <p class="text-xs text-fg-muted">"of " {move || total.get()} " employees"</p>
        </div>
    }
}
