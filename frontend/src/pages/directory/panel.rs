use crate::{
    api::AttendanceStatus,
    components::{error::LoadErrorPanel, layout::LoadingSpinner},
    pages::directory::{
        components::{DirectoryTable, DirectoryToolbar, Pagination, StatusTabs},
        view_model::DirectoryViewModel,
    },
    state::directory::DEFAULT_PAGE_SIZE,
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryOptions {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub show_filters: bool,
    pub enable_attendance_actions: bool,
    pub page_size: usize,
}

impl DirectoryOptions {
    pub fn dashboard() -> Self {
        Self {
            title: "Employee Listing",
            subtitle: "Showing 10 employees per page",
            show_filters: false,
            enable_attendance_actions: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn people() -> Self {
        Self {
            title: "People",
            subtitle: "Manage and collaborate with your organization's teams",
            show_filters: true,
            enable_attendance_actions: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn attendance() -> Self {
        Self {
            title: "Attendance",
            subtitle: "Track daily employee availability and presence",
            show_filters: true,
            enable_attendance_actions: true,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Renders `children` once the collections are loaded, or a full-page error.
#[component]
pub fn DirectoryLoader(
    vm: DirectoryViewModel,
    error_title: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let children = store_value(children);
    move || match vm.load_resource.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => view! { <LoadErrorPanel title=error_title error=err /> }.into_view(),
        Some(Ok(_)) => children.with_value(|children| children()).into_view(),
    }
}

#[component]
pub fn EmployeeDirectory(vm: DirectoryViewModel, options: DirectoryOptions) -> impl IntoView {
    let state = vm.state;
    let show_filters = options.show_filters;
    let enable_actions = options.enable_attendance_actions;
    state.update_untracked(|s| {
        s.show_filters = options.show_filters;
        s.page_size = options.page_size.max(1);
    });
    let mutation_error = Signal::derive(move || state.with(|s| s.mutation_error.clone()));
    let on_mark = Callback::new(move |(employee_id, status): (String, AttendanceStatus)| {
        vm.mark_attendance(employee_id, status)
    });

    view! {
        <section class="rounded-3xl border border-border bg-surface-elevated p-4 shadow-sm md:p-6">
            <div class="mb-5 flex flex-col gap-4 md:mb-6 md:flex-row md:items-center md:justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-fg">{options.title}</h1>
                    <p class="text-sm text-fg-muted">{options.subtitle}</p>
                </div>
                <div class="flex items-center gap-3">
                    <DirectoryToolbar state=state />
                    <button
                        type="button"
                        class="rounded-xl border border-border px-4 py-2.5 text-sm font-semibold disabled:opacity-50"
                        disabled=move || vm.is_loading()
                        on:click=move |_| vm.refresh()
                    >
                        "Refresh"
                    </button>
                </div>
            </div>

            <Show when=move || show_filters>
                <StatusTabs state=state />
            </Show>

            <Show when=move || mutation_error.with(Option::is_some)>
                <div class="mb-4 flex items-center justify-between rounded-xl border border-status-error-border px-4 py-2 text-sm text-status-error-text">
                    <p>{move || mutation_error.get().unwrap_or_default()}</p>
                    <button
                        type="button"
                        class="text-xs font-semibold"
                        on:click=move |_| state.update(|s| s.dismiss_error())
                    >
                        "Dismiss"
                    </button>
                </div>
            </Show>

            <DirectoryTable
                state=state
                enable_actions=enable_actions
                on_mark=on_mark
            />
            <Pagination state=state />
        </section>
    }
}
