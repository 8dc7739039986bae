//! Fetch lifecycle state machine shared by every page
//!
//! `idle -> loading -> success | error`, re-entering `loading` on every
//! trigger. Requests are numbered; only the most recently issued one may
//! change the state when it completes. A fault keeps the previously fetched
//! data so the page can show it under the error banner.

use crate::api::ApiError;
use crate::models::ValidationError;

/// Observable fetch status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success,
    Error(String),
}

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Outcome of handing a response back to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The response belonged to the latest request and was applied
    Applied,
    /// A newer request was issued in the meantime; the response was dropped
    Stale,
}

#[derive(Debug, Clone)]
pub struct FetchController<T> {
    status: FetchStatus,
    data: Option<T>,
    latest: u64,
    polling: bool,
    fault_message: &'static str,
}

impl<T> FetchController<T> {
    /// `fault_message` is shown for every failed remote call
    pub fn new(fault_message: &'static str) -> Self {
        Self {
            status: FetchStatus::Idle,
            data: None,
            latest: 0,
            polling: false,
            fault_message,
        }
    }

    /// Data from the last successful fetch, kept across later faults
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_polling(&self) -> bool {
        self.polling
    }

    /// Validate a query and, if valid, start a request for it
    ///
    /// Returns the ticket and query to send, or `None` when validation failed
    /// and no remote call must be made.
    pub fn request<Q>(
        &mut self,
        query: Result<Q, ValidationError>,
    ) -> Option<(RequestTicket, Q)> {
        match query {
            Ok(query) => Some((self.begin(), query)),
            Err(err) => {
                self.reject(err);
                None
            }
        }
    }

    /// Enter `loading` and issue a new ticket
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.status = FetchStatus::Loading;
        RequestTicket(self.latest)
    }

    /// Show a validation failure; any request still in flight is superseded
    pub fn reject(&mut self, err: ValidationError) {
        self.latest += 1;
        self.status = FetchStatus::Error(err.to_string());
    }

    /// Apply a finished request if it is still the latest one
    pub fn complete(&mut self, ticket: RequestTicket, result: Result<T, ApiError>) -> Completion {
        if ticket.0 != self.latest {
            log::debug!(
                "Discarding stale response for request {} (latest is {})",
                ticket.0,
                self.latest
            );
            return Completion::Stale;
        }

        match result {
            Ok(data) => {
                self.data = Some(data);
                self.status = FetchStatus::Success;
            }
            Err(err) => {
                log::error!("{}: {}", self.fault_message, err);
                self.status = FetchStatus::Error(self.fault_message.to_string());
            }
        }
        Completion::Applied
    }

    /// Flip polling on or off and return the new setting
    pub fn toggle_polling(&mut self) -> bool {
        self.polling = !self.polling;
        log::debug!("Polling {}", if self.polling { "started" } else { "stopped" });
        self.polling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::future::Future;

    const FAULT: &str = "Failed to fetch data";

    fn network_error() -> ApiError {
        ApiError::Network("connection refused".to_string())
    }

    /// Run one search the way the page hook does: validate, send, complete
    fn search<Q, T, F, Fut>(
        controller: &mut FetchController<T>,
        query: Result<Q, ValidationError>,
        fetch: F,
    ) -> Option<Completion>
    where
        F: FnOnce(Q) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let (ticket, query) = controller.request(query)?;
        let result = block_on(fetch(query));
        Some(controller.complete(ticket, result))
    }

    #[test]
    fn test_starts_idle() {
        let controller = FetchController::<Vec<i32>>::new(FAULT);

        assert_eq!(controller.status, FetchStatus::Idle);
        assert!(controller.data().is_none());
        assert!(!controller.is_polling());
    }

    #[test]
    fn test_begin_enters_loading() {
        let mut controller = FetchController::<Vec<i32>>::new(FAULT);
        controller.begin();

        assert!(controller.is_loading());
    }

    #[test]
    fn test_success_replaces_data() {
        let mut controller = FetchController::new(FAULT);

        let first = controller.begin();
        controller.complete(first, Ok(vec![1, 2]));
        let second = controller.begin();
        controller.complete(second, Ok(vec![3]));

        assert_eq!(controller.status, FetchStatus::Success);
        assert_eq!(controller.data(), Some(&vec![3]));
    }

    #[test]
    fn test_fault_keeps_previous_data() {
        let mut controller = FetchController::new(FAULT);

        let first = controller.begin();
        controller.complete(first, Ok(vec![1]));
        let second = controller.begin();
        controller.complete(second, Err(network_error()));

        assert_eq!(controller.error_message(), Some(FAULT));
        assert_eq!(controller.data(), Some(&vec![1]));
    }

    #[test]
    fn test_success_after_error_clears_banner() {
        let mut controller = FetchController::new(FAULT);

        let first = controller.begin();
        controller.complete(first, Err(network_error()));
        assert!(controller.error_message().is_some());

        let second = controller.begin();
        controller.complete(second, Ok(vec![7]));

        assert_eq!(controller.error_message(), None);
        assert_eq!(controller.data(), Some(&vec![7]));
    }

    #[test]
    fn test_http_failures_share_one_message() {
        for err in [
            network_error(),
            ApiError::Http {
                status: 500,
                message: "Internal Server Error".to_string(),
            },
            ApiError::Http {
                status: 404,
                message: "No data found".to_string(),
            },
            ApiError::Deserialization("expected value".to_string()),
        ] {
            let mut controller = FetchController::<Vec<i32>>::new(FAULT);
            let ticket = controller.begin();
            controller.complete(ticket, Err(err));

            assert_eq!(controller.status, FetchStatus::Error(FAULT.to_string()));
        }
    }

    #[test]
    fn test_validation_error_makes_no_request() {
        let mut controller = FetchController::<Vec<i32>>::new(FAULT);
        let calls = RefCell::new(0);

        let outcome = search(
            &mut controller,
            Err::<(), _>(ValidationError::GraphFieldsMissing),
            |_| {
                *calls.borrow_mut() += 1;
                async { Ok::<_, ApiError>(vec![1]) }
            },
        );

        assert_eq!(outcome, None);
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(
            controller.error_message(),
            Some("Please provide start date, end date, and location.")
        );
    }

    #[test]
    fn test_validation_error_keeps_previous_data() {
        let mut controller = FetchController::new(FAULT);
        let ticket = controller.begin();
        controller.complete(ticket, Ok(vec![1]));

        controller.reject(ValidationError::CompareFieldsMissing);

        assert_eq!(controller.data(), Some(&vec![1]));
        assert!(controller.error_message().is_some());
    }

    #[test]
    fn test_search_sends_query_once() {
        let mut controller = FetchController::new(FAULT);
        let sent = RefCell::new(Vec::new());

        let outcome = search(&mut controller, Ok("date=2024-01-01"), |query| {
            sent.borrow_mut().push(query);
            async { Ok::<_, ApiError>(vec![1]) }
        });

        assert_eq!(outcome, Some(Completion::Applied));
        assert_eq!(*sent.borrow(), vec!["date=2024-01-01"]);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut controller = FetchController::new(FAULT);

        let older = controller.begin();
        let newer = controller.begin();

        // Newer request resolves first, then the older one arrives late
        assert_eq!(controller.complete(newer, Ok(vec![2])), Completion::Applied);
        assert_eq!(controller.complete(older, Ok(vec![1])), Completion::Stale);

        assert_eq!(controller.data(), Some(&vec![2]));
        assert_eq!(controller.status, FetchStatus::Success);
    }

    #[test]
    fn test_stale_fault_does_not_raise_banner() {
        let mut controller = FetchController::new(FAULT);

        let older = controller.begin();
        let newer = controller.begin();
        controller.complete(newer, Ok(vec![2]));
        controller.complete(older, Err(network_error()));

        assert_eq!(controller.error_message(), None);
    }

    #[test]
    fn test_loading_until_latest_resolves() {
        let mut controller = FetchController::new(FAULT);

        let older = controller.begin();
        let _newer = controller.begin();
        controller.complete(older, Ok(vec![1]));

        assert!(controller.is_loading());
        assert!(controller.data().is_none());
    }

    #[test]
    fn test_validation_error_supersedes_in_flight_request() {
        let mut controller = FetchController::new(FAULT);

        let in_flight = controller.begin();
        controller.reject(ValidationError::GraphFieldsMissing);

        assert_eq!(controller.complete(in_flight, Ok(vec![1])), Completion::Stale);
        assert!(controller.error_message().is_some());
    }

    #[test]
    fn test_toggle_polling() {
        let mut controller = FetchController::<Vec<i32>>::new(FAULT);

        assert!(controller.toggle_polling());
        assert!(controller.is_polling());
        assert!(!controller.toggle_polling());
        assert!(!controller.is_polling());
    }

    #[test]
    fn test_in_flight_request_resolves_after_polling_stops() {
        let mut controller = FetchController::new(FAULT);
        controller.toggle_polling();

        let tick = controller.begin();
        controller.toggle_polling();

        assert_eq!(controller.complete(tick, Ok(vec![5])), Completion::Applied);
        assert_eq!(controller.data(), Some(&vec![5]));
        assert!(!controller.is_polling());
    }

    #[test]
    fn test_poll_ticks_use_current_filter() {
        use crate::models::TableFilter;

        let mut controller = FetchController::new(FAULT);
        let mut filter = TableFilter::default();
        let sent = RefCell::new(Vec::new());
        controller.toggle_polling();

        // Each tick builds its query from the filter as it is at that moment
        for location in ["Lake A", "Lake B"] {
            filter.location = location.to_string();
            search(&mut controller, Ok(filter.query()), |query| {
                sent.borrow_mut().push(query.params());
                async { Ok::<_, ApiError>(vec![1]) }
            });
        }

        let sent = sent.into_inner();
        assert_eq!(sent[0], vec![("location", "Lake A".to_string())]);
        assert_eq!(sent[1], vec![("location", "Lake B".to_string())]);
    }

    #[test]
    fn test_reset_issues_unfiltered_query() {
        use crate::models::TableFilter;

        let mut controller = FetchController::new(FAULT);
        let mut filter = TableFilter {
            date: "2024-01-01".to_string(),
            location: "Lake A".to_string(),
        };
        let sent = RefCell::new(Vec::new());

        filter.clear();
        search(&mut controller, Ok(filter.query()), |query| {
            sent.borrow_mut().push(query.params());
            async { Ok::<_, ApiError>(vec![1]) }
        });

        assert_eq!(filter, TableFilter::default());
        assert_eq!(sent.into_inner(), vec![Vec::new()]);
    }
}
