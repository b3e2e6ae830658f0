use crate::components::{
    confirm_dialog::ConfirmDialog,
    error::LoadErrorPanel,
    feedback::FeedbackBanner,
    layout::{Layout, LoadingSpinner},
};
use crate::pages::employees::{
    components::{CreateEmployeeForm, RosterTable},
    view_model::{use_roster_view_model, RosterViewModel},
};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_roster_view_model();

    view! {
        <Layout>
            {move || match vm.load_resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => {
                    view! { <LoadErrorPanel title="Unable to load employee list" error=err /> }.into_view()
                }
                Some(Ok(_)) => view! { <RosterPanel vm=vm /> }.into_view(),
            }}
        </Layout>
    }
}

#[component]
pub fn RosterPanel(vm: RosterViewModel) -> impl IntoView {
    let state = vm.state;
    let show_create = Signal::derive(move || state.with(|s| s.show_create_form));
    let feedback = Signal::derive(move || state.with(|s| s.feedback.clone()));
    let confirm_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));
    let confirm_message = Signal::derive(move || {
        vm.pending_delete
            .with(|pending| {
                pending.as_ref().map(|employee| {
                    format!("Delete employee {}? This cannot be undone.", employee.full_name)
                })
            })
            .unwrap_or_default()
    });

    view! {
        <section class="rounded-3xl border border-border bg-surface-elevated p-4 shadow-sm md:p-6">
            <div class="mb-5 flex flex-col gap-4 md:mb-6 md:flex-row md:items-center md:justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"All Employ"</h1>
                    <p class="text-sm text-fg-muted">"Update employee profile details from one list"</p>
                </div>
                <div class="flex items-center gap-3">
                    <button
                        type="button"
                        class="rounded-xl border border-border px-4 py-2.5 text-sm font-semibold disabled:opacity-50"
                        disabled=move || vm.load_resource.loading().get()
                        on:click=move |_| vm.refresh()
                    >
                        "Refresh"
                    </button>
                    <button
                        type="button"
                        class="rounded-xl bg-action-primary-bg px-4 py-2.5 text-sm font-semibold text-action-primary-text"
                        on:click=move |_| state.update(|s| s.toggle_create_form())
                    >
                        {move || if show_create.get() { "Close" } else { "Add Employ" }}
                    </button>
                </div>
            </div>

            <FeedbackBanner feedback=feedback on_dismiss=Callback::new(move |_| state.update(|s| s.dismiss_feedback())) />

            <Show when=move || show_create.get()>
                <CreateEmployeeForm vm=vm />
            </Show>

            <RosterTable vm=vm />

            <ConfirmDialog
                is_open=confirm_open
                title="Delete employee"
                message=confirm_message
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
                confirm_label="Delete"
                destructive=true
            />
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::employee;
    use crate::test_support::ssr::{render_to_string, text_content};

    #[test]
    fn employees_page_waits_for_list() {
        let html = render_to_string(move || view! { <EmployeesPage /> });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("All Employ</h1>"));
    }

    #[test]
    fn roster_panel_toggles_create_form_and_confirm() {
        let html = render_to_string(move || {
            let vm = RosterViewModel::new();
            vm.state.update(|s| {
                s.replace_rows(vec![employee("1", "Ann Lee", "Engineering")]);
                s.toggle_create_form();
            });
            vm.request_delete(employee("1", "Ann Lee", "Engineering"));
            view! { <RosterPanel vm=vm /> }
        });
        let text = text_content(&html);
        assert!(text.contains("All Employ"));
        assert!(text.contains("Close"));
        assert!(text.contains("Add New Employee"));
        assert!(text.contains("Delete employee Ann Lee? This cannot be undone."));
    }

    #[test]
    fn roster_panel_shows_feedback() {
        let html = render_to_string(move || {
            let vm = RosterViewModel::new();
            vm.state.update(|s| {
                s.replace_rows(Vec::new());
                s.begin_create();
            });
            view! { <RosterPanel vm=vm /> }
        });
        let text = text_content(&html);
        assert!(text.contains("Add Employ"));
        assert!(text.contains("Please fill employee ID, name, email, and department."));
    }
}
