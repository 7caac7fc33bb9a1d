use super::*;
use crate::config::ShopSettings;
use std::io::Read;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// What the fake shop saw.
#[derive(Debug)]
struct Seen {
    method: String,
    url: String,
    content_type: Option<String>,
    body: String,
}

/// Serve exactly one request with `status` and `body`, reporting what arrived.
fn fake_shop(status: u16, body: &'static str) -> (String, mpsc::Receiver<Seen>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut request = server.recv().unwrap();
        let content_type = request
            .headers()
            .iter()
            .find(|h| h.field.equiv("Content-Type"))
            .map(|h| h.value.to_string());
        let mut req_body = String::new();
        request.as_reader().read_to_string(&mut req_body).unwrap();
        let seen = Seen {
            method: request.method().to_string(),
            url: request.url().to_string(),
            content_type,
            body: req_body,
        };

        let header =
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
        let response = tiny_http::Response::from_string(body)
            .with_status_code(status)
            .with_header(header);
        request.respond(response).unwrap();
        let _ = tx.send(seen);
    });

    (format!("http://{addr}"), rx)
}

fn client_for(base_url: &str) -> ShopClient {
    ShopClient::new(&ShopSettings {
        base_url: base_url.to_string(),
        timeout_ms: 2000,
        load_catalog: false,
    })
    .unwrap()
}

#[derive(Default)]
struct FakePage {
    alerts: Vec<String>,
    counter: Option<String>,
}

impl Notifier for FakePage {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

impl CartCounter for FakePage {
    fn set_cart_count(&mut self, count: u32) {
        if let Some(c) = self.counter.as_mut() {
            *c = count.to_string();
        }
    }
}

#[test]
fn add_to_cart_posts_without_body_and_updates_alert_and_counter() {
    let (base, seen) = fake_shop(200, r#"{"message":"Added","cart_total":3}"#);
    let client = client_for(&base);

    let result = client.add_to_cart("42");
    let seen = seen.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(seen.method, "POST");
    assert_eq!(seen.url, "/add-to-cart/42");
    assert_eq!(
        seen.content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert!(seen.body.is_empty());

    let mut page = FakePage {
        counter: Some("0".into()),
        ..FakePage::default()
    };
    apply_cart_outcome(result, &mut page);
    assert_eq!(page.alerts, vec!["Added".to_string()]);
    assert_eq!(page.counter.as_deref(), Some("3"));
}

/// Serve `requests` add-to-cart calls, counting items per `session` cookie the
/// way the shop does. A request without the cookie starts a new session.
fn session_shop(requests: usize) -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();

    thread::spawn(move || {
        let mut carts: Vec<u32> = Vec::new();
        for _ in 0..requests {
            let Ok(request) = server.recv() else {
                return;
            };
            let session = request
                .headers()
                .iter()
                .filter(|h| h.field.equiv("Cookie"))
                .flat_map(|h| h.value.as_str().split(';'))
                .find_map(|c| c.trim().strip_prefix("session=")?.parse::<usize>().ok())
                .filter(|&id| id < carts.len());

            let mut response_headers = vec![
                tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    .unwrap(),
            ];
            let id = match session {
                Some(id) => id,
                None => {
                    carts.push(0);
                    let id = carts.len() - 1;
                    let cookie = format!("session={id}; Path=/; HttpOnly");
                    response_headers.push(
                        tiny_http::Header::from_bytes(&b"Set-Cookie"[..], cookie.as_bytes())
                            .unwrap(),
                    );
                    id
                }
            };
            carts[id] += 1;

            let body = format!(
                r#"{{"message":"Product added to cart","cart_total":{}}}"#,
                carts[id]
            );
            let mut response = tiny_http::Response::from_string(body);
            for h in response_headers {
                response = response.with_header(h);
            }
            let _ = request.respond(response);
        }
    });

    format!("http://{addr}")
}

#[test]
fn cart_total_grows_across_requests_in_one_session() {
    let base = session_shop(3);
    let client = client_for(&base);

    let first = client.add_to_cart("1").unwrap();
    let second = client.add_to_cart("2").unwrap();
    assert_eq!(first.cart_total, 1);
    assert_eq!(second.cart_total, 2);

    // A fresh client is a fresh session.
    let other = client_for(&base).add_to_cart("1").unwrap();
    assert_eq!(other.cart_total, 1);
}

#[test]
fn non_success_status_is_a_status_error() {
    let (base, _seen) = fake_shop(404, "<html>not found</html>");
    let err = client_for(&base).add_to_cart("999").unwrap_err();
    assert!(matches!(err, ShopError::Status(404)));
}

#[test]
fn malformed_json_surfaces_the_generic_alert() {
    let (base, _seen) = fake_shop(200, r#"{"msg":"nope"}"#);
    let result = client_for(&base).add_to_cart("1");
    assert!(matches!(result, Err(ShopError::Decode(_))));

    let mut page = FakePage {
        counter: Some("5".into()),
        ..FakePage::default()
    };
    apply_cart_outcome(result, &mut page);
    assert_eq!(page.alerts, vec![CART_ERROR_MESSAGE.to_string()]);
    assert_eq!(page.counter.as_deref(), Some("5"));
}

#[test]
fn network_failure_is_a_network_error() {
    // Bind then drop a listener so the port is almost certainly closed.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let err = client_for(&format!("http://127.0.0.1:{port}"))
        .add_to_cart("1")
        .unwrap_err();
    assert!(matches!(err, ShopError::Network(_)));
}

#[test]
fn missing_counter_still_alerts() {
    let mut page = FakePage::default();
    apply_cart_outcome(
        Ok(CartUpdate {
            message: "Product added to cart".into(),
            cart_total: 1,
        }),
        &mut page,
    );
    assert_eq!(page.alerts.len(), 1);
    assert_eq!(page.counter, None);
}

#[test]
fn listing_endpoints_decode_products_and_playlist() {
    let (base, seen) = fake_shop(
        200,
        r#"[{"id":1,"name":"Delus Trucker Hat","price":49.99,"image":"images/collection/item1.jpg"}]"#,
    );
    let products = client_for(&base).products().unwrap();
    assert_eq!(seen.recv().unwrap().url, "/api/products");
    assert_eq!(products[0].name, "Delus Trucker Hat");

    let (base, seen) = fake_shop(
        200,
        r#"[{"id":2,"title":"Maybe","artist":"Da Brøski","cover":"featured-track.jpg","url":null}]"#,
    );
    let playlist = client_for(&base).playlist().unwrap();
    assert_eq!(seen.recv().unwrap().url, "/api/playlist");
    assert_eq!(playlist[0].artist, "Da Brøski");
    assert_eq!(playlist[0].url, None);
}

#[test]
fn trailing_slash_in_base_url_is_dropped() {
    let client = client_for("http://127.0.0.1:5000/");
    assert_eq!(client.base_url(), "http://127.0.0.1:5000");
}

#[test]
fn worker_reports_outcomes_back_to_the_caller() {
    let (base, _seen) = fake_shop(200, r#"{"message":"Product added to cart","cart_total":2}"#);
    let worker = CartWorker::spawn(client_for(&base));
    worker.add_to_cart("7");

    let deadline = Instant::now() + Duration::from_secs(5);
    let outcome = loop {
        if let Some(o) = worker.try_recv() {
            break o;
        }
        assert!(Instant::now() < deadline, "no outcome from cart worker");
        thread::sleep(Duration::from_millis(10));
    };
    worker.quit();

    assert_eq!(outcome.product_id, "7");
    assert_eq!(outcome.result.unwrap().cart_total, 2);
}
