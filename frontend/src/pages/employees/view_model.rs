use crate::api::{ApiClient, ApiError, Employee};
use crate::config::ClientConfig;
use crate::pages::employees::repository;
use crate::state::roster::RosterState;
use leptos::*;

#[derive(Clone, Copy)]
pub struct RosterViewModel {
    pub state: RwSignal<RosterState>,
    pub load_resource: Resource<u32, Result<Vec<Employee>, ApiError>>,
    pub pending_delete: RwSignal<Option<Employee>>,
    reload_token: RwSignal<u32>,
    api: StoredValue<ApiClient>,
}

impl RosterViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>()
            .unwrap_or_else(|| ApiClient::new(ClientConfig::default()));
        let state = create_rw_signal(RosterState::default());
        let reload_token = create_rw_signal(0u32);

        let api_clone = api.clone();
        let load_resource = create_resource(
            move || reload_token.get(),
            move |_| {
                let api = api_clone.clone();
                async move { repository::fetch_employees(&api).await }
            },
        );

        create_effect(move |_| {
            if let Some(Ok(rows)) = load_resource.get() {
                state.update(|s| s.replace_rows(rows));
            }
        });

        Self {
            state,
            load_resource,
            pending_delete: create_rw_signal(None),
            reload_token,
            api: store_value(api),
        }
    }

    pub fn refresh(&self) {
        self.reload_token.update(|token| *token = token.wrapping_add(1));
    }

    pub fn save(&self, id: String) {
        let state = self.state;
        let Some(payload) = state.try_update(|s| s.begin_save(&id)).flatten() else {
            return;
        };
        let api = self.api.get_value();
        spawn_local(async move {
            let result = repository::save_employee(&api, &id, &payload).await;
            if let Err(err) = &result {
                log::warn!("Saving employee {} failed: {}", id, err);
            }
            state.update(|s| s.complete_save(&id, &payload, result));
        });
    }

    pub fn create(&self) {
        let state = self.state;
        let Some(payload) = state.try_update(|s| s.begin_create()).flatten() else {
            return;
        };
        let api = self.api.get_value();
        spawn_local(async move {
            let result = repository::add_employee(&api, &payload).await;
            if let Err(err) = &result {
                log::warn!("Adding employee {} failed: {}", payload.employee_id, err);
            }
            state.update(|s| s.complete_create(&payload, result));
        });
    }

    pub fn request_delete(&self, employee: Employee) {
        self.pending_delete.set(Some(employee));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        let Some(employee) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);
        let state = self.state;
        let id = employee.id;
        state.update(|s| s.begin_delete(&id));
        let api = self.api.get_value();
        spawn_local(async move {
            let result = repository::remove_employee(&api, &id).await;
            if let Err(err) = &result {
                log::warn!("Deleting employee {} failed: {}", id, err);
            }
            state.update(|s| s.complete_delete(&id, result));
        });
    }
}

impl Default for RosterViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_roster_view_model() -> RosterViewModel {
    match use_context::<RosterViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = RosterViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::helpers::employee;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn cancel_delete_clears_pending_confirmation() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = RosterViewModel::new();
            vm.request_delete(employee("1", "Ann", "Ops"));
            assert!(vm.pending_delete.with_untracked(Option::is_some));
            vm.cancel_delete();
            assert!(vm.pending_delete.with_untracked(Option::is_none));
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn invalid_create_never_leaves_creating_state() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = RosterViewModel::new();
            vm.create();
            vm.state.with_untracked(|s| {
                assert!(!s.creating);
                assert!(s.feedback.as_ref().is_some_and(|f| f.is_error()));
            });
            leptos_reactive::suppress_resource_load(false);
        });
    }
}
