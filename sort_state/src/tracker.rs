//! Sort state resolution against the session
//!
//! Each request resolves its sort state once: request parameters win over the
//! state remembered in the session, which wins over the table default. The
//! result is always written back, so the session holds a complete state after
//! every successful update.

use crate::errors::SortError;
use crate::order::SortOrder;
use crate::request::RequestContext;
use crate::settings::SortSettings;
use crate::state::SortState;
use session_store::SessionStore;

/// Resolve the current sort state and persist it in the session.
pub async fn update_state<S>(
    store: &S,
    settings: &SortSettings,
    ctx: &RequestContext,
) -> Result<SortState, SortError>
where
    S: SessionStore + ?Sized,
{
    let state = if let Some(key) = ctx.sort_key() {
        SortState {
            key: key.to_string(),
            order: requested_order(ctx, settings),
        }
    } else if let Some(previous) = read_state(store, &settings.session_key).await? {
        previous
    } else {
        settings.default_state.clone()
    };

    tracing::debug!(
        session_key = %settings.session_key,
        key = %state.key,
        order = %state.order,
        "sort state updated"
    );

    store
        .set(&settings.session_key, serde_json::to_value(&state)?)
        .await?;
    Ok(state)
}

/// Read the state stored by a previous [`update_state`].
pub async fn load_state<S>(store: &S, settings: &SortSettings) -> Result<SortState, SortError>
where
    S: SessionStore + ?Sized,
{
    read_state(store, &settings.session_key)
        .await?
        .ok_or_else(|| SortError::NotInitialized(settings.session_key.clone()))
}

/// Order requested alongside `sort_key`; missing or unrecognized values fall
/// back to the table's default order.
fn requested_order(ctx: &RequestContext, settings: &SortSettings) -> SortOrder {
    match ctx.sort_order() {
        Some(raw) => match raw.parse() {
            Ok(order) => order,
            Err(err) => {
                tracing::warn!(
                    session_key = %settings.session_key,
                    "{}; using {}",
                    err,
                    settings.default_state.order
                );
                settings.default_state.order
            }
        },
        None => settings.default_state.order,
    }
}

/// Stored state, treating entries that do not decode as a state as absent.
async fn read_state<S>(store: &S, session_key: &str) -> Result<Option<SortState>, SortError>
where
    S: SessionStore + ?Sized,
{
    let Some(value) = store.get(session_key).await? else {
        return Ok(None);
    };

    match serde_json::from_value::<SortState>(value) {
        Ok(state) if !state.key.is_empty() => Ok(Some(state)),
        Ok(_) => {
            tracing::warn!(session_key, "ignoring stored sort state with an empty key");
            Ok(None)
        }
        Err(err) => {
            tracing::warn!(session_key, error = %err, "ignoring unreadable sort state");
            Ok(None)
        }
    }
}
