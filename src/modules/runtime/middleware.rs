//! Request logging middleware

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::debug;

/// Log `[METHOD] URL` for every inbound request, then pass control onward
/// unconditionally.
pub async fn log_request(request: Request, next: Next) -> Response {
    debug!("[{}] {}", request.method(), request.uri());
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use crate::server::build_router;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use orbit_http_core::EngineOptions;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;
    use tracing::instrument::WithSubscriber;
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    /// Writer that collects formatted log output for assertions
    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl CaptureWriter {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl std::io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CaptureWriter {
        type Writer = CaptureWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn test_one_log_line_per_request_in_order() {
        let writer = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(writer.clone())
            .finish();

        let (engine, _handle) = orbit_http_engine::start(&EngineOptions::default())
            .await
            .unwrap();
        let app = build_router(AppState::new(engine));

        let uris = ["/", "/create/eventlog/logged", "/"];
        async {
            for uri in uris {
                let response = app
                    .clone()
                    .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                    .await
                    .unwrap();
                assert_eq!(response.status(), StatusCode::OK);
            }
        }
        .with_subscriber(subscriber)
        .await;

        let output = writer.contents();
        let request_lines: Vec<&str> = output
            .lines()
            .filter(|line| line.contains("[GET] "))
            .collect();

        // Exactly one line per request, in request order.
        assert_eq!(request_lines.len(), uris.len());
        for (line, uri) in request_lines.iter().zip(uris) {
            assert!(
                line.ends_with(&format!("[GET] {}", uri)),
                "expected {:?} to log {}",
                line,
                uri
            );
        }
    }
}

