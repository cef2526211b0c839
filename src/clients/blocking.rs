//! Blocking execution of async SDK calls.
//!
//! Every `*_blocking` method in the SDK funnels through [`execute_sync`],
//! which drives the async counterpart to completion on the calling thread.

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

static FALLBACK_RUNTIME: OnceLock<Result<Runtime, String>> = OnceLock::new();

/// Runs a future to completion, blocking the current thread.
///
/// - Inside a multi-thread Tokio runtime the worker is handed over with
///   [`tokio::task::block_in_place`] and the future runs on the current handle.
/// - Inside a current-thread runtime the future runs on the fallback runtime
///   from a scoped helper thread, which the caller joins.
/// - Outside any runtime the future runs on the fallback runtime directly.
///
/// The fallback runtime is process-wide, built on first use and never dropped.
///
/// # Panics
///
/// Panics if the fallback runtime cannot be built. A panic inside the future
/// is propagated to the caller.
pub fn execute_sync<F>(future: F) -> F::Output
where
    F: Future + Send,
    F::Output: Send,
{
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(|| handle.block_on(future))
        }
        Ok(_) => std::thread::scope(|scope| {
            let worker = scope.spawn(|| block_on_fallback(future));
            match worker.join() {
                Ok(output) => output,
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }),
        Err(_) => block_on_fallback(future),
    }
}

fn block_on_fallback<F: Future>(future: F) -> F::Output {
    match fallback_runtime() {
        Ok(runtime) => runtime.block_on(future),
        Err(message) => panic!("failed to start the blocking runtime: {message}"),
    }
}

fn fallback_runtime() -> &'static Result<Runtime, String> {
    FALLBACK_RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("partner-center-blocking")
            .enable_all()
            .build()
            .map_err(|e| e.to_string())
    })
}
