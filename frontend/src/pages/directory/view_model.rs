use crate::api::{ApiClient, ApiError, AttendanceStatus};
use crate::config::ClientConfig;
use crate::pages::directory::repository::{self, Collections};
use crate::state::directory::DirectoryState;
use leptos::*;

/// Owns the page-scoped cache of employees and attendance. The cache lives as
/// long as the page and is replaced wholesale by [`DirectoryViewModel::refresh`].
#[derive(Clone, Copy)]
pub struct DirectoryViewModel {
    pub state: RwSignal<DirectoryState>,
    pub load_resource: Resource<u32, Result<Collections, ApiError>>,
    reload_token: RwSignal<u32>,
    api: StoredValue<ApiClient>,
}

impl DirectoryViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>()
            .unwrap_or_else(|| ApiClient::new(ClientConfig::default()));
        let state = create_rw_signal(DirectoryState::default());
        let reload_token = create_rw_signal(0u32);

        let api_clone = api.clone();
        let load_resource = create_resource(
            move || reload_token.get(),
            move |_| {
                let api = api_clone.clone();
                async move { repository::fetch_collections(&api).await }
            },
        );

        create_effect(move |_| {
            if let Some(Ok(collections)) = load_resource.get() {
                state.update(|s| {
                    s.replace_collections(collections.employees, collections.attendance)
                });
            }
        });

        Self {
            state,
            load_resource,
            reload_token,
            api: store_value(api),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load_resource.loading().get()
    }

    pub fn refresh(&self) {
        self.reload_token.update(|token| *token = token.wrapping_add(1));
    }

    pub fn mark_attendance(&self, employee_id: String, status: AttendanceStatus) {
        let state = self.state;
        let Some(ticket) = state.try_update(|s| s.begin_attendance_update(&employee_id, status))
        else {
            return;
        };
        let api = self.api.get_value();
        spawn_local(async move {
            let result = repository::submit_attendance(&api, &ticket.mutation).await;
            if let Err(err) = &result {
                log::warn!("Attendance update for {} failed: {}", ticket.employee_id, err);
            }
            state.update(|s| {
                s.complete_attendance_update(&ticket, result);
            });
        });
    }
}

impl Default for DirectoryViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_directory_view_model() -> DirectoryViewModel {
    match use_context::<DirectoryViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DirectoryViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn refresh_bumps_reload_token() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = DirectoryViewModel::new();
            let before = vm.reload_token.get_untracked();
            vm.refresh();
            assert_eq!(vm.reload_token.get_untracked(), before.wrapping_add(1));
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn use_directory_view_model_shares_one_instance() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let first = use_directory_view_model();
            first.state.update(|s| s.set_query("ann"));
            let second = use_directory_view_model();
            assert_eq!(second.state.with_untracked(|s| s.query.clone()), "ann");
            leptos_reactive::suppress_resource_load(false);
        });
    }
}
