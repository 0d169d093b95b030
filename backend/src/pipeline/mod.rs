//! Request-processing pipeline.
//!
//! Uniform envelope-and-gating wrapper around server-side operations: an
//! optional authentication unit gates one mandatory execution unit, each
//! phase emits structured lifecycle events, and any error escaping a unit
//! is normalised into a fault [`Envelope`]. The caller always receives a
//! well-formed envelope, never an error.
//!
//! Phases run strictly in sequence. The authentication context fully
//! completes — including its finish event, emitted by a drop guard on every
//! exit path — before the execution context starts; the two contexts never
//! interleave. Nothing is retried.

pub mod envelope;
pub mod log;

pub use envelope::{Envelope, EnvelopeStatus, EnvelopeValidationError};
pub use log::{LifecycleLog, TracingLifecycleLog};

use std::future::Future;

use serde::Serialize;
use thiserror::Error;

/// Logging context for the authentication phase.
pub const AUTH_CONTEXT: &str = "auth-processing";
/// Logging context for the execution phase.
pub const EXEC_CONTEXT: &str = "func-processing";

/// Fallback message when an authentication unit fails without detail.
const AUTH_FAULT_MESSAGE: &str = "Có lỗi xảy ra trong quá trình xác thực";
/// Fallback message when an execution unit fails without detail.
const EXEC_FAULT_MESSAGE: &str = "Có lỗi xảy ra trong quá trình thực thi";

const EVENT_START: &str = "START";
const EVENT_FINISH: &str = "FINISH";

/// Error escaping a unit of work.
///
/// Operations classify their own failures into envelopes before returning;
/// this error is the escape hatch for faults they could not, and the
/// pipeline's catch arm is the last-resort net that turns it into a 500
/// envelope with `data: null`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationFault {
    /// A failure the operation could not classify.
    #[error("{message}")]
    Unexpected {
        /// Human-readable diagnostic carried into the fault envelope.
        message: String,
    },
}

impl OperationFault {
    /// Helper for unclassified failures.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }
}

/// Outcome of one unit of work handed to the pipeline.
pub type OperationResult<T> = Result<Envelope<T>, OperationFault>;

/// Per-request unit bundle consumed exactly once by [`Pipeline::dispatch`].
///
/// The optional authentication gate is a variant, not a nullable field:
/// the shape of the invocation is decided once, when it is built.
pub enum Invocation<A, E> {
    /// One mandatory unit of work.
    ExecOnly {
        /// The execution unit.
        exec: E,
    },
    /// An authentication gate followed by the unit of work.
    AuthThenExec {
        /// The gating authentication unit, run first.
        auth: A,
        /// The execution unit, run only when the gate succeeds.
        exec: E,
    },
}

impl<E> Invocation<E, E> {
    /// Invocation without an authentication gate.
    pub fn exec_only(exec: E) -> Self {
        Self::ExecOnly { exec }
    }
}

impl<A, E> Invocation<A, E> {
    /// Invocation whose execution unit is gated by `auth`.
    pub fn auth_then_exec(auth: A, exec: E) -> Self {
        Self::AuthThenExec { auth, exec }
    }
}

/// Orchestration wrapper sequencing an invocation's phases.
///
/// Holds only the injected lifecycle log; each instance is cheap and a new
/// one is typically built per request at the inbound adapter.
///
/// # Examples
/// ```
/// use backend::pipeline::{Envelope, Invocation, Pipeline};
///
/// # actix_web::rt::System::new().block_on(async {
/// let pipeline = Pipeline::default();
/// let envelope = pipeline
///     .dispatch(Invocation::exec_only(async { Ok(Envelope::success("ok", 1u32)) }))
///     .await;
/// assert!(envelope.is_success());
/// # });
/// ```
pub struct Pipeline<L = TracingLifecycleLog> {
    log: L,
}

impl Default for Pipeline<TracingLifecycleLog> {
    fn default() -> Self {
        Self::new(TracingLifecycleLog)
    }
}

impl<L: LifecycleLog> Pipeline<L> {
    /// Build a pipeline around the supplied lifecycle log.
    pub fn new(log: L) -> Self {
        Self { log }
    }

    /// Run an invocation to completion and return its final envelope.
    ///
    /// With an authentication gate present the gate's envelope is returned
    /// unchanged whenever its status is not success, and the execution unit
    /// is never awaited. Faults from either unit become 500 envelopes with
    /// `data: null`.
    pub async fn dispatch<T, A, E>(&self, invocation: Invocation<A, E>) -> Envelope<T>
    where
        T: Serialize,
        A: Future<Output = OperationResult<T>>,
        E: Future<Output = OperationResult<T>>,
    {
        match invocation {
            Invocation::ExecOnly { exec } => {
                self.run_phase(EXEC_CONTEXT, EXEC_FAULT_MESSAGE, exec).await
            }
            Invocation::AuthThenExec { auth, exec } => {
                let gate = self.run_phase(AUTH_CONTEXT, AUTH_FAULT_MESSAGE, auth).await;
                if !gate.is_success() {
                    return gate;
                }
                self.run_phase(EXEC_CONTEXT, EXEC_FAULT_MESSAGE, exec).await
            }
        }
    }

    /// Run one phase: start event, the unit itself, a success or error
    /// event, and a finish event guaranteed on every exit path.
    async fn run_phase<T: Serialize>(
        &self,
        context: &str,
        fallback: &str,
        unit: impl Future<Output = OperationResult<T>>,
    ) -> Envelope<T> {
        self.log.info(context, EVENT_START);
        let _finish = FinishGuard {
            log: &self.log,
            context,
        };
        match unit.await {
            Ok(result) => {
                self.log.info(context, &success_line(&result));
                result
            }
            Err(fault) => {
                self.log.error(context, &error_line(&fault));
                Envelope::fault(fault_message(&fault, fallback))
            }
        }
    }
}

/// Emits the finish event when the phase scope unwinds, so the event fires
/// on success, on fault, and on any early return added later.
struct FinishGuard<'a, L: LifecycleLog> {
    log: &'a L,
    context: &'a str,
}

impl<L: LifecycleLog> Drop for FinishGuard<'_, L> {
    fn drop(&mut self) {
        self.log.info(self.context, EVENT_FINISH);
    }
}

fn success_line<T: Serialize>(envelope: &Envelope<T>) -> String {
    let data = serde_json::to_string(&envelope.data()).unwrap_or_else(|_| "null".to_owned());
    format!("SUCCESS | {} | data: {data}", envelope.message())
}

fn error_line(fault: &OperationFault) -> String {
    format!("ERROR | {fault}")
}

fn fault_message(fault: &OperationFault, fallback: &str) -> String {
    let detail = fault.to_string();
    if detail.trim().is_empty() {
        fallback.to_owned()
    } else {
        detail
    }
}
