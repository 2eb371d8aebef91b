use crate::config::AppConfig;
use crate::hooks::StoreContext;
use crate::storage::BrowserStorage;
use scavenger_hunt_core::{ContentStore, StoreCommand, StoreConfig, StoreEvent};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
    /// Overrides the build-time store config. Read once when the provider
    /// mounts; later changes are ignored.
    #[prop_or_default]
    pub config: Option<StoreConfig>,
    pub children: Children,
}

/// Owns the content store for the lifetime of the page and hands
/// snapshots plus a command callback to its children.
#[function_component(StoreProvider)]
pub fn store_provider(props: &StoreProviderProps) -> Html {
    let store = {
        let config = props.config.clone();
        use_mut_ref(move || {
            let config = config.unwrap_or_else(|| AppConfig::from_env().store);
            ContentStore::builder(BrowserStorage::detect())
                .config(config)
                .build()
        })
    };

    let snapshot = use_state(|| Rc::new(store.borrow().snapshot()));
    let last_event = use_state(|| None::<StoreEvent>);
    let persistent = store.borrow().storage().is_persistent();

    let send_command = {
        let store = store.clone();
        let snapshot = snapshot.clone();
        let last_event = last_event.clone();
        Rc::new(move |cmd: StoreCommand| {
            tracing::debug!("📤 Command: {:?}", cmd);
            let mut store = store.borrow_mut();
            let event = store.handle_command(cmd);

            if event.changed_state() {
                snapshot.set(Rc::new(store.snapshot()));
            } else {
                tracing::debug!("Command left the store unchanged: {:?}", event);
            }
            last_event.set(Some(event));
        }) as Rc<dyn Fn(StoreCommand)>
    };

    let context = StoreContext {
        snapshot: (*snapshot).clone(),
        last_event: (*last_event).clone(),
        persistent,
        send_command,
    };

    html! {
        <ContextProvider<StoreContext> {context}>
            {props.children.clone()}
        </ContextProvider<StoreContext>>
    }
}
