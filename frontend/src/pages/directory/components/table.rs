use crate::{
    api::AttendanceStatus,
    components::empty_state::EmptyState,
    state::directory::{DirectoryRow, DirectoryState},
    utils::hr::{format_display_date, initials, Availability},
};
use leptos::*;

fn badge_class(availability: Availability) -> &'static str {
    match availability {
        Availability::Present => "rounded-full px-3 py-1 text-xs font-semibold bg-status-success-bg text-status-success-text",
        Availability::Absent => "rounded-full px-3 py-1 text-xs font-semibold bg-status-warning-bg text-status-warning-text",
        Availability::Unknown => "rounded-full px-3 py-1 text-xs font-semibold bg-surface-muted text-fg-muted",
    }
}

fn action_class(selected: bool) -> &'static str {
    if selected {
        "rounded-full px-3 py-1 text-xs font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
    } else {
        "rounded-full px-3 py-1 text-xs font-semibold bg-surface-muted text-fg-muted disabled:opacity-50"
    }
}

#[component]
pub fn DirectoryTable(
    state: RwSignal<DirectoryState>,
    enable_actions: bool,
    on_mark: Callback<(String, AttendanceStatus)>,
) -> impl IntoView {
    let rows = Signal::derive(move || state.with(|s| s.paged_rows()));

    view! {
        <div class="overflow-hidden rounded-2xl border border-border">
            <div class="overflow-x-auto">
                <table class="min-w-full text-left text-sm">
                    <thead class="bg-surface-muted text-fg-muted">
                        <tr>
                            <th class="px-4 py-3 font-semibold">"Name"</th>
                            <th class="px-4 py-3 font-semibold">"Date"</th>
                            <th class="px-4 py-3 font-semibold">"Department"</th>
                            <th class="px-4 py-3 font-semibold">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || rows.with(|rows| rows.is_empty())>
                            <tr>
                                <td colspan="4" class="px-4 py-6">
                                    <EmptyState title="No employees found for this filter." />
                                </td>
                            </tr>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|row| (row.employee.id.clone(), row.availability)
                            children=move |row| {
                                view! {
                                    <DirectoryRowView
                                        row=row
                                        state=state
                                        enable_actions=enable_actions
                                        on_mark=on_mark
                                    />
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn DirectoryRowView(
    row: DirectoryRow,
    state: RwSignal<DirectoryState>,
    enable_actions: bool,
    on_mark: Callback<(String, AttendanceStatus)>,
) -> impl IntoView {
    let employee = row.employee;
    let availability = row.availability;
    let busy = {
        let id = employee.id.clone();
        Signal::derive(move || state.with(|s| s.is_busy(&id)))
    };

    let status_cell = if enable_actions {
        let present_id = employee.id.clone();
        let absent_id = employee.id.clone();
        view! {
            <div class="flex items-center gap-2">
                <button
                    type="button"
                    class=action_class(availability == Availability::Present)
                    disabled=move || busy.get()
                    on:click=move |_| on_mark.call((present_id.clone(), AttendanceStatus::Present))
                >
                    "Present"
                </button>
                <button
                    type="button"
                    class=action_class(availability == Availability::Absent)
                    disabled=move || busy.get()
                    on:click=move |_| on_mark.call((absent_id.clone(), AttendanceStatus::Absent))
                >
                    "Absent"
                </button>
            </div>
        }
        .into_view()
    } else {
        view! { <span class=badge_class(availability)>{availability.label()}</span> }.into_view()
    };

    view! {
        <tr class="border-t border-border text-fg">
            <td class="px-4 py-3">
                <div class="flex items-center gap-3">
                    <div class="flex h-9 w-9 items-center justify-center rounded-full bg-surface-muted text-xs font-bold">
                        {initials(&employee.full_name)}
                    </div>
                    <div>
                        <p class="font-semibold">{employee.full_name.clone()}</p>
                        <p class="text-xs text-fg-muted">{employee.email.clone()}</p>
                    </div>
                </div>
            </td>
            <td class="px-4 py-3">{format_display_date(&employee.created_at)}</td>
            <td class="px-4 py-3">{employee.department.clone()}</td>
            <td class="px-4 py-3">{status_cell}</td>
        </tr>
    }
}
