use crate::pages::employees::view_model::RosterViewModel;
use crate::state::roster::EmployeeField;
use leptos::*;

#[component]
pub fn CreateEmployeeForm(vm: RosterViewModel) -> impl IntoView {
    let state = vm.state;
    let creating = Signal::derive(move || state.with(|s| s.creating));

    view! {
        <form
            class="mb-6 space-y-4 rounded-2xl border border-border bg-surface p-4"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.create();
            }
        >
            <h2 class="text-lg font-semibold text-fg">"Add New Employee"</h2>
            <div class="grid gap-3 md:grid-cols-2">
                {EmployeeField::ALL
                    .into_iter()
                    .map(|field| {
                        view! {
                            <input
                                type="text"
                                placeholder=field.placeholder()
                                class="rounded-xl border border-border bg-surface-elevated px-4 py-2.5 text-sm"
                                prop:value=move || state.with(|s| field.read(&s.create_form).to_string())
                                on:input=move |ev| {
                                    state.update(|s| s.set_create_field(field, event_target_value(&ev)))
                                }
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="rounded-xl bg-surface-muted px-4 py-2 text-sm font-semibold text-fg"
                    on:click=move |_| state.update(|s| s.cancel_create())
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    class="rounded-xl bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text disabled:opacity-50"
                    disabled=move || creating.get()
                >
                    {move || if creating.get() { "Adding..." } else { "Create" }}
                </button>
            </div>
        </form>
    }
}
