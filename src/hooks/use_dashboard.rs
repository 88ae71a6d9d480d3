use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::services::loader::{DashboardData, load_dashboard};
use crate::services::supabase::SupabaseClient;

/// Load gate for the dashboard snapshot.
///
/// Every load has a generation number. A result only resolves the gate if it
/// belongs to the generation currently loading, so each load moves
/// `Loading` to `Ready` at most once.
#[derive(Clone, PartialEq, Debug)]
pub enum DashboardState {
    Loading { generation: u32 },
    Ready { generation: u32, data: Rc<DashboardData> },
}

impl Default for DashboardState {
    fn default() -> Self {
        DashboardState::Loading { generation: 0 }
    }
}

impl DashboardState {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading { .. })
    }

    pub fn generation(&self) -> u32 {
        match self {
            DashboardState::Loading { generation } | DashboardState::Ready { generation, .. } => {
                *generation
            }
        }
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<DashboardData>> {
        match self {
            DashboardState::Ready { data, .. } => Some(data),
            DashboardState::Loading { .. } => None,
        }
    }
}

pub enum DashboardAction {
    /// Start a fresh load, abandoning any in flight
    Reload,
    /// A load finished
    Loaded { generation: u32, data: DashboardData },
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DashboardAction::Reload => Rc::new(DashboardState::Loading {
                generation: self.generation().wrapping_add(1),
            }),
            DashboardAction::Loaded { generation, data } => {
                let awaiting = matches!(
                    *self,
                    DashboardState::Loading { generation: current } if current == generation
                );

                if awaiting {
                    Rc::new(DashboardState::Ready {
                        generation,
                        data: Rc::new(data),
                    })
                } else {
                    self // Stale or duplicate result
                }
            }
        }
    }
}

/// Handle returned by `use_dashboard` hook
#[derive(Clone, PartialEq)]
pub struct DashboardHandle {
    pub state: DashboardState,
    pub reload: Callback<()>,
}

/// Loads the dashboard snapshot once per generation.
///
/// The fetch runs when the component mounts and again only when `reload` is
/// emitted. A result arriving after unmount is dropped.
#[hook]
pub fn use_dashboard() -> DashboardHandle {
    let state = use_reducer(DashboardState::default);

    {
        let dispatcher = state.dispatcher();

        use_effect_with(state.generation(), move |&generation| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let data = match SupabaseClient::new() {
                    Ok(client) => load_dashboard(&client, Config::PAGE_SIZE).await,
                    Err(e) => DashboardData::unavailable(&e),
                };

                for failure in &data.failures {
                    gloo::console::error!(format!(
                        "Error loading {}: {}",
                        failure.table, failure.message
                    ));
                }

                if aborted_check.get() {
                    return; // View went away, ignore result
                }
                dispatcher.dispatch(DashboardAction::Loaded { generation, data });
            });

            move || {
                aborted.set(true);
            }
        });
    }

    let reload = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(DashboardAction::Reload))
    };

    DashboardHandle {
        state: (*state).clone(),
        reload,
    }
}
