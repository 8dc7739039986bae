use futures::future::{FutureExt, LocalBoxFuture};
use leptos::*;
use std::future::Future;
use std::rc::Rc;

use super::state::{Completion, FetchController};
use crate::api::ApiError;
use crate::models::ValidationError;

type QueryBuilder<Q> = Rc<dyn Fn() -> Result<Q, ValidationError>>;
type Fetcher<Q, T> = Rc<dyn Fn(Q) -> LocalBoxFuture<'static, Result<T, ApiError>>>;

#[cfg(target_arch = "wasm32")]
type PollTimer = gloo_timers::callback::Interval;
#[cfg(not(target_arch = "wasm32"))]
type PollTimer = ();

/// Reactive handle to a page's fetch controller
///
/// Cheap to copy into event handlers; all state lives in the reactive owner of
/// the component that created it.
pub struct FetchHandle<Q: 'static, T: 'static> {
    state: RwSignal<FetchController<T>>,
    build_query: StoredValue<QueryBuilder<Q>>,
    fetch: StoredValue<Fetcher<Q, T>>,
    timer: StoredValue<Option<PollTimer>>,
    poll_interval_ms: u32,
}

impl<Q: 'static, T: 'static> Clone for FetchHandle<Q, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: 'static, T: 'static> Copy for FetchHandle<Q, T> {}

/// Create a fetch controller for the current component
///
/// `build_query` reads the page's form state and validates it; it runs on
/// every search and every poll tick, so ticks always use the current fields.
/// `fetch` performs the remote call for a valid query. Faults are reported to
/// the user as `fault_message`.
pub fn use_fetch_controller<Q, T, B, F, Fut>(
    build_query: B,
    fetch: F,
    fault_message: &'static str,
    poll_interval_ms: u32,
) -> FetchHandle<Q, T>
where
    Q: 'static,
    T: 'static,
    B: Fn() -> Result<Q, ValidationError> + 'static,
    F: Fn(Q) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let build_query: QueryBuilder<Q> = Rc::new(build_query);
    let fetch: Fetcher<Q, T> = Rc::new(move |query| fetch(query).boxed_local());

    let handle = FetchHandle {
        state: create_rw_signal(FetchController::new(fault_message)),
        build_query: store_value(build_query),
        fetch: store_value(fetch),
        timer: store_value(None),
        poll_interval_ms,
    };

    // Stop polling when the page goes away
    on_cleanup(move || {
        handle.timer.try_update_value(|timer| {
            timer.take();
        });
    });

    handle
}

impl<Q: 'static, T: 'static> FetchHandle<Q, T> {
    /// Validate the current form state and fetch if it is valid
    pub fn search(&self) {
        let build_query = self.build_query.get_value();
        self.dispatch(build_query());
    }

    fn dispatch(&self, query: Result<Q, ValidationError>) {
        let Some((ticket, query)) = self.state.try_update(|c| c.request(query)).flatten() else {
            return;
        };

        let request = (self.fetch.get_value())(query);
        let state = self.state;
        spawn_local(async move {
            let result = request.await;
            if state.try_update(|c| c.complete(ticket, result)) == Some(Completion::Stale) {
                log::debug!("Ignored a response superseded by a newer request");
            }
        });
    }

    /// Start or stop refreshing on a fixed interval
    ///
    /// Stopping only cancels future ticks; a request already in flight still
    /// completes and updates the page.
    pub fn toggle_polling(&self) {
        let Some(polling) = self.state.try_update(|c| c.toggle_polling()) else {
            return;
        };

        if polling {
            self.start_timer();
        } else {
            self.timer.update_value(|timer| {
                timer.take();
            });
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn start_timer(&self) {
        use gloo_timers::callback::Interval;

        let handle = *self;
        let interval = Interval::new(self.poll_interval_ms, move || handle.search());
        self.timer.update_value(|timer| *timer = Some(interval));
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn start_timer(&self) {
        log::debug!(
            "Interval timers need a browser; not polling every {}ms",
            self.poll_interval_ms
        );
        self.timer.update_value(|timer| *timer = Some(()));
    }

    pub fn is_polling(&self) -> bool {
        self.state.with(|c| c.is_polling())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|c| c.is_loading())
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.with(|c| c.error_message().map(str::to_string))
    }

    /// Current error message that only notifies when the text changes
    ///
    /// Views key the error banner on this, so unrelated state changes such as
    /// toggling polling do not bring back a banner the user dismissed.
    pub fn error_signal(&self) -> Memo<Option<String>> {
        let handle = *self;
        create_memo(move |_| handle.error_message())
    }

    /// Read the last successfully fetched data
    pub fn with_data<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        self.state.with(|c| f(c.data()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TableFilter;
    use std::cell::{Cell, RefCell};

    const FAULT: &str = "Failed to fetch data";

    fn echo(query: i32) -> impl Future<Output = Result<Vec<i32>, ApiError>> {
        async move { Ok(vec![query]) }
    }

    #[test]
    fn test_search_stores_data() {
        let runtime = create_runtime();
        let handle = use_fetch_controller(|| Ok(1), echo, FAULT, 5000);

        handle.search();

        assert_eq!(handle.with_data(|data| data.cloned()), Some(vec![1]));
        assert_eq!(handle.error_message(), None);
        assert!(!handle.is_loading());

        runtime.dispose();
    }

    #[test]
    fn test_fault_after_success_keeps_data() {
        let runtime = create_runtime();
        let fail = Rc::new(Cell::new(false));
        let handle = use_fetch_controller(
            || Ok(1),
            {
                let fail = fail.clone();
                move |query: i32| {
                    let fail = fail.get();
                    async move {
                        if fail {
                            Err(ApiError::Network("connection refused".to_string()))
                        } else {
                            Ok(vec![query])
                        }
                    }
                }
            },
            FAULT,
            5000,
        );

        handle.search();
        fail.set(true);
        handle.search();

        assert_eq!(handle.with_data(|data| data.cloned()), Some(vec![1]));
        assert_eq!(handle.error_message().as_deref(), Some(FAULT));

        runtime.dispose();
    }

    #[test]
    fn test_invalid_form_skips_fetch() {
        let runtime = create_runtime();
        let calls = Rc::new(Cell::new(0));
        let handle = use_fetch_controller(
            || Err(ValidationError::GraphFieldsMissing),
            {
                let calls = calls.clone();
                move |query: i32| {
                    calls.set(calls.get() + 1);
                    echo(query)
                }
            },
            FAULT,
            5000,
        );

        handle.search();

        assert_eq!(calls.get(), 0);
        assert_eq!(
            handle.error_message().as_deref(),
            Some("Please provide start date, end date, and location.")
        );

        runtime.dispose();
    }

    #[test]
    fn test_toggle_polling_holds_and_drops_timer() {
        let runtime = create_runtime();
        let handle = use_fetch_controller(|| Ok(1), echo, FAULT, 5000);

        handle.toggle_polling();
        assert!(handle.is_polling());
        assert!(handle.timer.with_value(Option::is_some));

        handle.toggle_polling();
        assert!(!handle.is_polling());
        assert!(handle.timer.with_value(Option::is_none));

        runtime.dispose();
    }

    #[test]
    fn test_poll_tick_reads_current_filter() {
        let runtime = create_runtime();
        let filter = create_rw_signal(TableFilter::default());
        let sent = Rc::new(RefCell::new(Vec::new()));
        let handle = use_fetch_controller(
            move || Ok(filter.with_untracked(TableFilter::query)),
            {
                let sent = sent.clone();
                move |query: crate::models::TableQuery| {
                    sent.borrow_mut().push(query.params());
                    async { Ok::<_, ApiError>(Vec::<i32>::new()) }
                }
            },
            FAULT,
            5000,
        );
        handle.toggle_polling();

        // Each interval tick runs a plain search
        for location in ["Lake A", "Lake B"] {
            filter.update(|f| f.location = location.to_string());
            handle.search();
        }

        assert_eq!(
            *sent.borrow(),
            vec![
                vec![("location", "Lake A".to_string())],
                vec![("location", "Lake B".to_string())],
            ]
        );

        runtime.dispose();
    }

    #[test]
    fn test_error_signal_ignores_unrelated_changes() {
        let runtime = create_runtime();
        let handle = use_fetch_controller(
            || Ok(1),
            |_: i32| async { Err::<Vec<i32>, _>(ApiError::Network("timeout".to_string())) },
            FAULT,
            5000,
        );
        let error = handle.error_signal();
        let renders = Rc::new(Cell::new(0));
        let banner = create_memo({
            let renders = renders.clone();
            move |_| {
                renders.set(renders.get() + 1);
                error.get()
            }
        });

        handle.search();
        assert_eq!(banner.get().as_deref(), Some(FAULT));
        let after_fault = renders.get();

        handle.toggle_polling();
        handle.toggle_polling();

        assert_eq!(banner.get().as_deref(), Some(FAULT));
        assert_eq!(renders.get(), after_fault);

        runtime.dispose();
    }

    #[test]
    fn test_disposing_owner_releases_timer() {
        let runtime = create_runtime();
        let mount = as_child_of_current_owner(|_: ()| {
            let handle = use_fetch_controller(|| Ok(1), echo, FAULT, 5000);
            handle.toggle_polling();
            handle
        });
        let (handle, disposer) = mount(());
        assert!(handle.timer.with_value(Option::is_some));

        drop(disposer);

        assert_eq!(handle.timer.try_with_value(Option::is_some), None);
        assert_eq!(handle.state.try_with(|c| c.is_polling()), None);

        runtime.dispose();
    }
}
