use thiserror::Error;
use ui::Session;

#[derive(Debug, Error)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("local storage access failed: {0}")]
    Access(String),
    #[error("stored session is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Helper to abstract WebSys LocalStorage interactions.
///
/// Every call returns a [`Result`] so callers can log why the browser store
/// failed instead of silently losing the session. Outside the browser there is
/// nothing to persist to: reads find no session and writes are dropped.
pub struct Storage;

impl Storage {
    pub fn get(_key: &str) -> Result<Option<Session>> {
        #[cfg(target_arch = "wasm32")]
        if let Some(json) = local_storage()?.get_item(_key).map_err(access_error)? {
            return decode(&json).map(Some);
        }
        Ok(None)
    }

    pub fn set(_key: &str, _session: &Session) -> Result<()> {
        #[cfg(target_arch = "wasm32")]
        local_storage()?
            .set_item(_key, &encode(_session)?)
            .map_err(access_error)?;
        Ok(())
    }

    pub fn remove(_key: &str) -> Result<()> {
        #[cfg(target_arch = "wasm32")]
        local_storage()?.remove_item(_key).map_err(access_error)?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(access_error)?
        .ok_or(StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn access_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Access(format!("{err:?}"))
}

#[cfg_attr(not(any(test, target_arch = "wasm32")), allow(dead_code))]
fn encode(session: &Session) -> Result<String> {
    Ok(serde_json::to_string(session)?)
}

#[cfg_attr(not(any(test, target_arch = "wasm32")), allow(dead_code))]
fn decode(json: &str) -> Result<Session> {
    Ok(serde_json::from_str(json)?)
}
