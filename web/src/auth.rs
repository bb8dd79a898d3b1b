use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;
use ui::{Auth, Session};

use crate::config::AppConfig;
use crate::storage::{self, Storage};

/// Set once the stored session has been read back, whatever the outcome.
#[derive(Clone, Copy)]
pub struct SessionResolved(Signal<bool>);

pub fn use_session_resolved() -> Signal<bool> {
    use_context::<SessionResolved>().0
}

/// Session to start from after reading storage. Failures leave the user signed out.
fn restored(result: storage::Result<Option<Session>>) -> Option<Session> {
    match result {
        Ok(Some(stored)) => {
            info!("Restored session for {}", stored.display_name);
            Some(stored)
        }
        Ok(None) => {
            debug!("No stored session");
            None
        }
        Err(e) => {
            warn!("Failed to restore session: {}", e);
            None
        }
    }
}

#[derive(Debug, PartialEq)]
enum SessionWrite<'a> {
    Skip,
    Store(&'a Session),
    Clear,
}

impl<'a> SessionWrite<'a> {
    /// Nothing is written until the stored session has been read, so the
    /// initial `None` never clobbers it.
    fn plan(resolved: bool, current: Option<&'a Session>) -> Self {
        match (resolved, current) {
            (false, _) => SessionWrite::Skip,
            (true, Some(s)) => SessionWrite::Store(s),
            (true, None) => SessionWrite::Clear,
        }
    }
}

/// Provides the [`Auth`] context and keeps it in sync with local storage.
///
/// Children render signed out until the stored session has been read back.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context::<AppConfig>();
    let mut session = use_signal(|| None::<Session>);
    let mut resolved = use_signal(|| false);

    let restore_key = config.session_key.clone();
    use_effect(move || {
        if let Some(stored) = restored(Storage::get(&restore_key)) {
            session.set(Some(stored));
        }
        resolved.set(true);
    });

    let persist_key = config.session_key;
    use_effect(move || {
        let current = session.read().clone();
        let result = match SessionWrite::plan(resolved(), current.as_ref()) {
            SessionWrite::Skip => return,
            SessionWrite::Store(s) => Storage::set(&persist_key, s),
            SessionWrite::Clear => Storage::remove(&persist_key),
        };
        match result {
            Ok(()) => debug!("Persisted session state (signed in: {})", current.is_some()),
            Err(e) => warn!("Failed to persist session: {}", e),
        }
    });

    use_context_provider(|| Auth::new(session));
    use_context_provider(|| SessionResolved(resolved));

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;
    use std::{cell::RefCell, rc::Rc, time::Duration};
    use ui::{use_auth, AuthStatus, Layout};

    type Renders = Rc<RefCell<Vec<(bool, AuthStatus)>>>;

    #[derive(Clone, Default)]
    struct Recorder(Renders);

    impl PartialEq for Recorder {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    fn app(recorder: Recorder) -> Element {
        use_context_provider(AppConfig::load);

        rsx! {
            AuthProvider {
                Layout { "Hello" }
                Watcher { recorder }
            }
        }
    }

    #[component]
    fn Watcher(recorder: Recorder) -> Element {
        let resolved = use_session_resolved();
        let auth = use_auth();
        recorder.0.borrow_mut().push((resolved(), auth.status()));
        rsx! {}
    }

    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..4 {
            let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
            dom.render_immediate_to_vec();
        }
    }

    #[tokio::test]
    async fn renders_signed_out_until_resolved() {
        let recorder = Recorder::default();
        let mut dom = VirtualDom::new_with_props(app, recorder.clone());
        dom.rebuild_in_place();

        let first = dioxus_ssr::render(&dom);
        assert!(first.contains("<footer"));
        assert!(!first.contains("<nav"));
        assert_eq!(
            recorder.0.borrow().first(),
            Some(&(false, AuthStatus::Unauthenticated))
        );

        settle(&mut dom).await;

        // Nothing is stored off the browser, so the user stays signed out.
        assert_eq!(
            recorder.0.borrow().last(),
            Some(&(true, AuthStatus::Unauthenticated))
        );
        assert!(dioxus_ssr::render(&dom).contains("<footer"));
    }

    #[test]
    fn failed_restore_stays_signed_out() {
        assert_eq!(restored(Err(StorageError::Unavailable)), None);
        assert_eq!(
            restored(Err(StorageError::Access("SecurityError".into()))),
            None
        );
        assert_eq!(restored(Ok(None)), None);

        let session = Session::new("u-1", "Ada");
        assert_eq!(restored(Ok(Some(session.clone()))), Some(session));
    }

    #[test]
    fn writes_wait_for_resolution() {
        let session = Session::new("u-1", "Ada");

        assert_eq!(SessionWrite::plan(false, None), SessionWrite::Skip);
        assert_eq!(SessionWrite::plan(false, Some(&session)), SessionWrite::Skip);
        assert_eq!(
            SessionWrite::plan(true, Some(&session)),
            SessionWrite::Store(&session)
        );
        assert_eq!(SessionWrite::plan(true, None), SessionWrite::Clear);
    }
}
