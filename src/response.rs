use std::convert::Infallible;
use std::net::IpAddr;

use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{self, HeaderValue};
use hyper::{Method, Request, Response, StatusCode};

use crate::access_log;

const HELLO_BODY: &str = "Hello from backend server!\n";

pub async fn handle<B>(
    req: Request<B>,
    peer: IpAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let request_line = access_log::request_line(&req);
    let response = respond(req.method());
    access_log::request_received(peer, &request_line, response.status());
    Ok(response)
}

fn respond(method: &Method) -> Response<Full<Bytes>> {
    match *method {
        Method::GET => hello(),
        _ => unsupported(method),
    }
}

fn hello() -> Response<Full<Bytes>> {
    plaintext(StatusCode::OK, Full::new(Bytes::from_static(HELLO_BODY.as_bytes())))
}

// Methods without a handler get the stock 501, like the real backend would.
fn unsupported(method: &Method) -> Response<Full<Bytes>> {
    let body = format!("Unsupported method ({method})\n");
    plaintext(StatusCode::NOT_IMPLEMENTED, Full::new(Bytes::from(body)))
}

fn plaintext(status: StatusCode, body: Full<Bytes>) -> Response<Full<Bytes>> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn get_gets_the_hello_body() {
        let response = respond(&Method::GET);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, Bytes::from_static(b"Hello from backend server!\n"));
    }

    #[tokio::test]
    async fn other_methods_get_the_stock_501() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::HEAD] {
            let response = respond(&method);
            assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
            assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
            let expected = format!("Unsupported method ({method})\n");
            let body = response.into_body().collect().await.unwrap().to_bytes();
            assert_eq!(body, Bytes::from(expected));
        }
    }

    #[tokio::test]
    async fn handle_only_looks_at_the_method() {
        let req = Request::builder()
            .method(Method::GET)
            .uri("/anything/else?q=1")
            .body(())
            .unwrap();
        let response = handle(req, "127.0.0.1".parse().unwrap()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, Bytes::from_static(b"Hello from backend server!\n"));
    }
}
