//! Tests for the builder API and its futures

use kdfkit_pbkdf2::{
    derive, AsyncDerivedKey, DerivedKey, HashError, HmacSha256, Pbkdf2, Pbkdf2Error, Pbkdf2Params,
    Prf,
};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};

struct TestWaker;

impl std::task::Wake for TestWaker {
    fn wake(self: Arc<Self>) {}
}

fn create_test_waker() -> Waker {
    Arc::new(TestWaker).into()
}

/// One-byte rotate-and-xor PRF; every output length spans several blocks
#[derive(Clone, Copy)]
struct RotatePrf;

impl Prf for RotatePrf {
    const OUTPUT_LEN: usize = 1;

    fn compute_into(&self, key: &[u8], message: &[u8], out: &mut [u8]) -> Result<(), HashError> {
        let mut acc = 0x5au8;
        for b in key.iter().chain(message) {
            acc = acc.rotate_left(3) ^ b;
        }
        out[0] = acc;
        Ok(())
    }
}

#[tokio::test]
async fn test_async_derive_matches_reference() {
    let key = Pbkdf2::hmac_sha256()
        .with_salt(b"salt".to_vec())
        .with_iterations(4096)
        .with_output_len(20)
        .derive(b"password".to_vec())
        .await
        .expect("valid parameters");
    assert_eq!(key.to_hex(), "c5e478d59288c841aa530db6845c4c8d962893a0");
}

#[tokio::test]
async fn test_async_and_blocking_agree() {
    let builder = || {
        Pbkdf2::hmac_sha256()
            .with_salt("NaCl")
            .with_params(Pbkdf2Params::new(3, 48))
    };
    let blocking = builder().derive_blocking("pleaseletmein").expect("valid parameters");
    let asynchronous = builder().derive("pleaseletmein").await.expect("valid parameters");
    assert_eq!(blocking, asynchronous);

    let direct = derive(b"pleaseletmein", b"NaCl", &HmacSha256, 3, 48).expect("valid parameters");
    assert_eq!(direct, blocking);
}

#[tokio::test]
async fn test_custom_prf_through_builder() {
    let builder = || {
        Pbkdf2::with_prf(RotatePrf)
            .with_salt("s")
            .with_iterations(3)
            .with_output_len(5)
    };
    let blocking = builder().derive_blocking("p").expect("valid parameters");
    let asynchronous = builder().derive("p").await.expect("valid parameters");
    let direct = derive(b"p", b"s", &RotatePrf, 3, 5).expect("valid parameters");

    assert_eq!(blocking, direct);
    assert_eq!(asynchronous, direct);
    assert_eq!(direct.to_hex(), "7271707776");
}

#[tokio::test]
async fn test_invalid_iterations_surface_through_async_path() {
    let result = Pbkdf2::hmac_sha256()
        .with_iterations(0)
        .with_output_len(20)
        .derive(b"password".to_vec())
        .await;
    assert!(matches!(result, Err(Pbkdf2Error::InvalidParameter(_))));
}

#[test]
fn test_invalid_iterations_surface_through_blocking_path() {
    let result = Pbkdf2::hmac_sha256()
        .with_iterations(0)
        .derive_blocking(b"password");
    assert!(result.unwrap_err().is_invalid_parameter());
}

#[tokio::test]
async fn test_on_result_handler() {
    let summary = Pbkdf2::hmac_sha256()
        .with_salt(b"salt".to_vec())
        .with_iterations(1)
        .with_output_len(20)
        .derive(b"password".to_vec())
        .on_result(|result| match result {
            Ok(key) => key.to_prefixed_hex(),
            Err(e) => format!("error: {e}"),
        })
        .await;
    assert_eq!(summary, "0x120fb6cffcf8b32c43e7225256c4f837a86548c9");
}

#[tokio::test]
async fn test_on_error_handler_rewrites_errors() {
    let result = Pbkdf2::hmac_sha256()
        .with_iterations(0)
        .derive(b"password".to_vec())
        .on_error(|e| Pbkdf2Error::internal(format!("wrapped: {e}")))
        .await;
    match result {
        Err(Pbkdf2Error::Internal(msg)) => {
            assert_eq!(msg, "wrapped: Invalid parameter: PBKDF2 iterations must be at least 1");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_on_error_passes_success_through() {
    let key = Pbkdf2::hmac_sha256()
        .with_salt(b"salt".to_vec())
        .with_iterations(1)
        .with_output_len(4)
        .derive(b"password".to_vec())
        .on_error(|_| Pbkdf2Error::internal("should not run"))
        .await
        .expect("valid parameters");
    assert_eq!(key.to_hex(), "120fb6cf");
}

#[tokio::test]
async fn test_with_handler_multiple_polls_after_completion() {
    let ready = AsyncDerivedKey::ready(Ok(DerivedKey::from_slice(&[1, 2, 3, 4])));

    let handler = |result: Result<DerivedKey, Pbkdf2Error>| match result {
        Ok(key) => format!("success: {} bytes", key.len()),
        Err(e) => format!("error: {e}"),
    };

    let mut future = ready.on_result(handler);
    let waker = create_test_waker();
    let mut cx = Context::from_waker(&waker);

    // First poll completes
    let result = Pin::new(&mut future).poll(&mut cx);
    assert_eq!(result, Poll::Ready("success: 4 bytes".to_string()));

    // Later polls stay pending rather than panicking
    assert!(Pin::new(&mut future).poll(&mut cx).is_pending());
    assert!(Pin::new(&mut future).poll(&mut cx).is_pending());
}

#[tokio::test]
async fn test_error_constructor_resolves_immediately() {
    let err = AsyncDerivedKey::error(Pbkdf2Error::invalid_parameter("bad"))
        .await
        .unwrap_err();
    assert_eq!(err, Pbkdf2Error::InvalidParameter("bad".to_string()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_async_derivations() {
    let tasks: Vec<_> = (1..=4u32)
        .map(|iterations| {
            Pbkdf2::hmac_sha256()
                .with_salt(b"salt".to_vec())
                .with_iterations(iterations)
                .with_output_len(32)
                .derive(b"password".to_vec())
        })
        .collect();

    for (iterations, task) in (1..=4u32).zip(tasks) {
        let key = task.await.expect("valid parameters");
        let expected =
            derive(b"password", b"salt", &HmacSha256, iterations, 32).expect("valid parameters");
        assert_eq!(key, expected);
    }
}
