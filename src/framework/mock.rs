//! # Mock Framework
//!
//! Utilities for testing client and entity logic without spawning the real actor.
//!
//! | | `MockClient` | Real actor |
//! |---|---|---|
//! | State | scripted replies | real store |
//! | Error injection | `return_err` | needs a specific state |
//! | Use case | logic *around* a client (e.g. product validation against categories) | the actor itself, full system |
//!
//! Two styles are available:
//!
//! * [`MockClient`]: queue expectations up front, run the code, then [`MockClient::verify`].
//! * [`create_mock_client`] with [`expect_create`], [`expect_get`], [`expect_list`],
//!   [`expect_action`]: drive the receiver by hand and inspect the payloads.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply for one expected request, in arrival order.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests that don't match the next expectation (wrong kind or wrong id) are
/// answered by dropping the reply channel, so the caller sees
/// [`FrameworkError::ActorDropped`], and are reported by [`verify`](Self::verify).
///
/// ```ignore
/// let mut mock = MockClient::<Category>::new();
/// mock.expect_list().return_ok(vec![beverages]);
///
/// let client = CategoryClient::new(mock.client());
/// // exercise code that lists categories...
/// mock.verify();
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

fn lock<V>(m: &Mutex<V>) -> std::sync::MutexGuard<'_, V> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let seen = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();

                let record = |mismatch: String| lock(&seen).push(mismatch);

                // Mismatches are recorded before the reply channel is dropped, so a
                // caller that sees `ActorDropped` can rely on `verify` failing.
                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
                        reply_if(id == want, respond_to, response, || record(format!("get({id}) but expected get({want})")))
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Update { id, respond_to, .. }, Some(Expectation::Update { id: want, response })) => {
                        reply_if(id == want, respond_to, response, || record(format!("update({id}) but expected update({want})")))
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: want, response })) => {
                        reply_if(id == want, respond_to, response, || record(format!("delete({id}) but expected delete({want})")))
                    }
                    (ResourceRequest::Action { id, respond_to, .. }, Some(Expectation::Action { id: want, response })) => {
                        reply_if(id == want, respond_to, response, || record(format!("action({id}) but expected action({want})")))
                    }
                    (request, None) => record(format!("unexpected {}", describe(&request))),
                    (request, Some(_)) => record(format!("{} did not match the next expectation", describe(&request))),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Get { id, response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List { response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create { response })
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Delete { id, response })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Action { id, response })
    }

    /// Panics unless every expectation was consumed and nothing unexpected arrived.
    pub fn verify(&self) {
        let mismatches = lock(&self.mismatches);
        if !mismatches.is_empty() {
            panic!("Unexpected requests: {:?}", *mismatches);
        }
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn reply_if<R>(
    matches: bool,
    respond_to: oneshot::Sender<Result<R, FrameworkError>>,
    response: Result<R, FrameworkError>,
    on_mismatch: impl FnOnce(),
) {
    if matches {
        let _ = respond_to.send(response);
    } else {
        on_mismatch();
        drop(respond_to);
    }
}

fn describe<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("create({params:?})"),
        ResourceRequest::Get { id, .. } => format!("get({id})"),
        ResourceRequest::List { .. } => "list()".to_string(),
        ResourceRequest::Update { id, .. } => format!("update({id})"),
        ResourceRequest::Delete { id, .. } => format!("delete({id})"),
        ResourceRequest::Action { id, action, .. } => format!("action({id}, {action:?})"),
    }
}

/// Builder that records the reply for one expectation.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        lock(&self.expectations).push_back((self.make)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back((self.make)(Err(error)));
    }
}

// =============================================================================
// RECEIVER-DRIVEN HELPERS
// =============================================================================

/// Creates a client whose requests arrive on the returned receiver.
///
/// Use this when the test needs to look at the request payload itself, then answer
/// through the `respond_to` sender returned by the `expect_*` helpers below.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
