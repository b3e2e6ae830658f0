use crate::api::Employee;
use crate::components::empty_state::EmptyState;
use crate::pages::employees::view_model::RosterViewModel;
use crate::state::roster::EmployeeField;
use crate::utils::hr::{format_display_date, initials};
use leptos::*;

const ROW_BUTTON: &str =
    "rounded-lg border border-border px-3 py-1.5 text-xs font-semibold disabled:opacity-50";

#[component]
pub fn RosterTable(vm: RosterViewModel) -> impl IntoView {
    let state = vm.state;
    let rows = Signal::derive(move || state.with(|s| s.filtered_rows()));

    view! {
        <div class="mb-4 flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
            <input
                type="text"
                placeholder="Search by ID, name, email, department..."
                class="w-full rounded-xl border border-border bg-surface px-4 py-2.5 text-sm md:w-96"
                prop:value=move || state.with(|s| s.query.clone())
                on:input=move |ev| state.update(|s| s.query = event_target_value(&ev))
            />
            <p class="text-sm text-fg-muted">{move || state.with(|s| s.count_label())}</p>
        </div>
        <div class="overflow-hidden rounded-2xl border border-border">
            <div class="overflow-x-auto">
                <table class="min-w-full text-left text-sm">
                    <thead class="bg-surface-muted text-fg-muted">
                        <tr>
                            <th class="px-4 py-3 font-semibold">"Employee"</th>
                            <th class="px-4 py-3 font-semibold">"Employee ID"</th>
                            <th class="px-4 py-3 font-semibold">"Department"</th>
                            <th class="px-4 py-3 font-semibold">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || rows.with(Vec::is_empty)>
                            <tr>
                                <td colspan="4" class="px-4 py-6">
                                    <EmptyState title="No employees found." />
                                </td>
                            </tr>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|employee| employee.clone()
                            children=move |employee| view! { <RosterRow vm=vm employee=employee /> }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn RosterRow(vm: RosterViewModel, employee: Employee) -> impl IntoView {
    let state = vm.state;
    let id = store_value(employee.id.clone());
    let editing = Signal::derive(move || state.with(|s| s.editing_id.as_deref() == Some(id.get_value().as_str())));
    let viewing = Signal::derive(move || state.with(|s| s.viewing_id.as_deref() == Some(id.get_value().as_str())));
    let saving = Signal::derive(move || state.with(|s| s.is_saving(&id.get_value())));
    let deleting = Signal::derive(move || state.with(|s| s.is_deleting(&id.get_value())));
    let row = store_value(employee);

    let summary = move || {
        let employee = row.get_value();
        view! {
            <td class="px-4 py-3">
                <div class="flex items-center gap-3">
                    <div class="flex h-9 w-9 items-center justify-center rounded-full bg-surface-muted text-xs font-bold">
                        {initials(&employee.full_name)}
                    </div>
                    <div>
                        <p class="font-semibold">{employee.full_name}</p>
                        <p class="text-xs text-fg-muted">{employee.email}</p>
                    </div>
                </div>
            </td>
            <td class="px-4 py-3 font-mono text-xs">{employee.employee_id}</td>
            <td class="px-4 py-3">{employee.department}</td>
        }
    };

    let edit_cells = move || {
        view! {
            <td colspan="3" class="px-4 py-3">
                <div class="grid gap-2 md:grid-cols-4">
                    {EmployeeField::ALL
                        .into_iter()
                        .map(|field| {
                            view! {
                                <input
                                    type="text"
                                    placeholder=field.placeholder()
                                    class="rounded-lg border border-border bg-surface px-3 py-1.5 text-sm"
                                    prop:value=move || {
                                        state.with(|s| s.form.as_ref().map(|form| field.read(form).to_string()).unwrap_or_default())
                                    }
                                    on:input=move |ev| state.update(|s| s.set_form_field(field, event_target_value(&ev)))
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </td>
        }
    };

    view! {
        <tr class="border-t border-border text-fg">
            <Show when=move || editing.get() fallback=summary>
                {edit_cells()}
            </Show>
            <td class="px-4 py-3">
                <div class="flex flex-wrap gap-2">
                    <Show
                        when=move || editing.get()
                        fallback=move || {
                            view! {
                                <button type="button" class=ROW_BUTTON on:click=move |_| state.update(|s| s.toggle_view(&id.get_value()))>
                                    {move || if viewing.get() { "Hide" } else { "View" }}
                                </button>
                                <button type="button" class=ROW_BUTTON on:click=move |_| state.update(|s| s.start_edit(&id.get_value()))>
                                    "Edit"
                                </button>
                            }
                        }
                    >
                        <button
                            type="button"
                            class=ROW_BUTTON
                            disabled=move || saving.get()
                            on:click=move |_| vm.save(id.get_value())
                        >
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                        <button type="button" class=ROW_BUTTON on:click=move |_| state.update(|s| s.cancel_edit())>
                            "Cancel"
                        </button>
                    </Show>
                    <button
                        type="button"
                        class=ROW_BUTTON
                        disabled=move || deleting.get()
                        on:click=move |_| vm.request_delete(row.get_value())
                    >
                        {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </td>
        </tr>
        <Show when=move || viewing.get()>
            <EmployeeDetails employee=row.get_value() />
        </Show>
    }
}

#[component]
fn EmployeeDetails(employee: Employee) -> impl IntoView {
    let kind = employee.employment_kind().unwrap_or("Not set").to_string();
    let details = [
        ("Employee ID", employee.employee_id),
        ("Email", employee.email),
        ("Department", employee.department),
        ("Employment type", kind),
        ("Role", employee.role.unwrap_or_else(|| "Not set".into())),
        ("Phone", employee.phone.unwrap_or_else(|| "Not set".into())),
        ("Joined", format_display_date(&employee.created_at)),
    ];

    view! {
        <tr class="bg-surface-muted">
            <td colspan="4" class="px-4 py-4">
                <dl class="grid gap-3 text-sm md:grid-cols-4">
                    {details
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div>
                                    <dt class="text-xs uppercase tracking-wide text-fg-muted">{label}</dt>
                                    <dd class="font-medium text-fg">{value}</dd>
                                </div>
                            }
                        })
                        .collect_view()}
                </dl>
            </td>
        </tr>
    }
}
