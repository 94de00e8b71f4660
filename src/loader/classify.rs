//! Mapping transport outcomes onto the load result taxonomy

use crate::decoder::PostsDecoder;
use crate::error::LoadError;
use crate::types::{FetchOutcome, LoadResult};

/// The only status code whose body is considered usable
pub(crate) const OK_STATUS: u16 = 200;

/// Classify a transport outcome into exactly one load result
///
/// - transport error → [`LoadError::Connectivity`]
/// - any status other than 200 → [`LoadError::InvalidData`], body ignored
/// - 200 with an undecodable body → [`LoadError::InvalidData`]
/// - 200 with a decodable body → the decoded posts
pub(crate) fn classify(outcome: FetchOutcome, decoder: &dyn PostsDecoder) -> LoadResult {
    let response = outcome.map_err(|_| LoadError::Connectivity)?;

    if response.status != OK_STATUS {
        return Err(LoadError::InvalidData);
    }

    decoder
        .decode(&response.body)
        .map_err(|_| LoadError::InvalidData)
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::JsonPostsDecoder;
    use crate::error::{DecodeError, TransportError};
    use crate::types::{HttpResponse, Post};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const VALID_EMPTY: &[u8] = br#"{"items": []}"#;

    /// Decoder that counts calls and always succeeds with no posts
    #[derive(Default)]
    struct CountingDecoder {
        calls: AtomicUsize,
    }

    impl PostsDecoder for CountingDecoder {
        fn decode(&self, _body: &[u8]) -> Result<Vec<Post>, DecodeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    #[test]
    fn transport_error_is_connectivity() {
        let outcome = Err(TransportError::new("dns lookup failed"));
        assert_eq!(
            classify(outcome, &JsonPostsDecoder),
            Err(LoadError::Connectivity)
        );
    }

    #[test]
    fn non_200_with_valid_body_is_invalid_data() {
        for status in [199, 201, 204, 300, 304, 400, 404, 500, 503] {
            let outcome = Ok(HttpResponse::new(status, VALID_EMPTY));
            assert_eq!(
                classify(outcome, &JsonPostsDecoder),
                Err(LoadError::InvalidData),
                "status {status} should be invalid data"
            );
        }
    }

    #[test]
    fn non_200_never_reaches_decoder() {
        let decoder = CountingDecoder::default();
        let _ = classify(Ok(HttpResponse::new(500, VALID_EMPTY)), &decoder);
        assert_eq!(decoder.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn status_200_with_bad_body_is_invalid_data() {
        let bodies: [&[u8]; 3] = [b"", b"invalid json", br#"{"items": [{"title": 1}]}"#];
        for body in bodies {
            let outcome = Ok(HttpResponse::new(200, body));
            assert_eq!(
                classify(outcome, &JsonPostsDecoder),
                Err(LoadError::InvalidData)
            );
        }
    }

    #[test]
    fn status_200_with_valid_body_is_decoded_once() {
        let decoder = CountingDecoder::default();
        let result = classify(Ok(HttpResponse::new(200, VALID_EMPTY)), &decoder);

        assert_eq!(result, Ok(Vec::new()));
        assert_eq!(decoder.calls.load(Ordering::SeqCst), 1);
    }
}
