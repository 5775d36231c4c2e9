use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::test::{self as actix_test, TestRequest};
use actix_web::{App, web};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::{FlashMessagesFramework, Level};
use async_trait::async_trait;
use tera::Tera;

use jencrm_web::api::{ApiError, ApiResult, CrmApi, HealthReport};
use jencrm_web::domain::client::{Client, NewClient};
use jencrm_web::domain::deal::{Deal, DealStatus, NewDeal};
use jencrm_web::domain::types::{ClientId, DealId};
use jencrm_web::models::config::ServerConfig;
use jencrm_web::routes::{alert_level_to_str, configure};
use jencrm_web::state::AppState;

#[test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

/// In-memory backend recording created records.
#[derive(Default)]
struct StubApi {
    clients: Mutex<Vec<Client>>,
    deals: Mutex<Vec<Deal>>,
    fail_deals: bool,
}

impl StubApi {
    fn with_client() -> Self {
        let stub = Self::default();
        stub.clients.lock().unwrap().push(client(1, "Ivan", "Petrov"));
        stub
    }
}

fn client(id: i32, first_name: &str, last_name: &str) -> Client {
    Client {
        id: ClientId::new(id).unwrap(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: None,
        phone: None,
        passport_data: None,
        created_at: None,
        updated_at: None,
    }
}

#[async_trait]
impl CrmApi for StubApi {
    async fn list_clients(&self) -> ApiResult<Vec<Client>> {
        Ok(self.clients.lock().unwrap().clone())
    }

    async fn get_client(&self, id: ClientId) -> ApiResult<Client> {
        self.clients
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(ApiError::Status(404))
    }

    async fn create_client(&self, new_client: &NewClient) -> ApiResult<Client> {
        let mut clients = self.clients.lock().unwrap();
        let mut created = client(
            clients.len() as i32 + 1,
            new_client.first_name.as_str(),
            new_client.last_name.as_str(),
        );
        created.email = new_client.email.clone();
        created.phone = new_client.phone.clone();
        clients.push(created.clone());
        Ok(created)
    }

    async fn list_deals(&self) -> ApiResult<Vec<Deal>> {
        if self.fail_deals {
            return Err(ApiError::Status(500));
        }
        Ok(self.deals.lock().unwrap().clone())
    }

    async fn get_deal(&self, id: DealId) -> ApiResult<Deal> {
        self.deals
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(ApiError::Status(404))
    }

    async fn create_deal(&self, new_deal: &NewDeal) -> ApiResult<Deal> {
        let mut deals = self.deals.lock().unwrap();
        let created = Deal {
            id: DealId::new(deals.len() as i32 + 1).unwrap(),
            client_id: new_deal.client_id,
            deal_amount: new_deal.deal_amount,
            commission_percent: new_deal.commission_percent,
            commission_amount: new_deal.deal_amount * new_deal.commission_percent / 100.0,
            tour_operator: new_deal.tour_operator.to_string(),
            deal_date: new_deal.deal_date,
            payment_due_date: new_deal.payment_due_date,
            status: DealStatus::Draft,
            description: new_deal.description.clone(),
            created_at: None,
            updated_at: None,
        };
        deals.push(created.clone());
        Ok(created)
    }

    async fn health(&self) -> ApiResult<HealthReport> {
        Err(ApiError::Transport("connection refused".to_string()))
    }
}

fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        api_base_url: "http://localhost:3000/api".to_string(),
        templates_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*.html").to_string(),
        secret: String::new(),
        currency_symbol: "₽".to_string(),
        request_timeout_secs: 1,
        visitor_ttl_secs: 3600,
    }
}

macro_rules! init_app {
    ($api:expr) => {{
        let config = server_config();
        let tera = Tera::new(&config.templates_dir).unwrap();
        let key = Key::generate();
        let store = CookieMessageStore::builder(key.clone()).build();
        actix_test::init_service(
            App::new()
                .wrap(FlashMessagesFramework::builder(store).build())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), key)
                        .cookie_secure(false)
                        .build(),
                )
                .configure(configure)
                .app_data(web::Data::new(tera))
                .app_data(web::Data::new(AppState::new(Arc::new($api))))
                .app_data(web::Data::new(config)),
        )
        .await
    }};
}

/// Cookie jar of one simulated browser.
#[derive(Default)]
struct Browser {
    cookies: HashMap<String, Cookie<'static>>,
}

impl Browser {
    fn with_cookies(&self, req: TestRequest) -> TestRequest {
        self.cookies
            .values()
            .fold(req, |req, cookie| req.cookie(cookie.clone()))
    }

    fn remember<B>(&mut self, resp: &ServiceResponse<B>) {
        for cookie in resp.response().cookies() {
            if cookie.value().is_empty() {
                self.cookies.remove(cookie.name());
            } else {
                self.cookies.insert(cookie.name().to_string(), cookie.into_owned());
            }
        }
    }
}

/// Sends `$req` with the browser's cookies and stores the cookies it gets back.
macro_rules! send {
    ($app:expr, $browser:expr, $req:expr) => {{
        let req = $browser.with_cookies($req).to_request();
        let resp = actix_test::call_service(&$app, req).await;
        $browser.remember(&resp);
        resp
    }};
}

/// POSTs to `$uri` and checks the redirect back to the page.
macro_rules! post {
    ($app:expr, $browser:expr, $uri:expr) => {
        post!($app, $browser, $uri, Vec::<(&str, &str)>::new())
    };
    ($app:expr, $browser:expr, $uri:expr, $form:expr) => {{
        let resp = send!($app, $browser, TestRequest::post().uri($uri).set_form($form));
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    }};
}

/// Renders `$uri` as seen by the browser.
macro_rules! html {
    ($app:expr, $browser:expr) => {
        html!($app, $browser, "/")
    };
    ($app:expr, $browser:expr, $uri:expr) => {{
        let resp = send!($app, $browser, TestRequest::get().uri($uri));
        assert_eq!(resp.status(), StatusCode::OK);
        String::from_utf8(actix_test::read_body(resp).await.to_vec()).unwrap()
    }};
}

fn deal_form<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("client_id", "1"),
        ("deal_amount", "150000"),
        ("commission_percent", "10"),
        ("tour_operator", "Anex"),
        ("deal_date", "2024-06-01"),
        ("payment_due_date", "2024-06-15"),
        ("description", "Turkey, 7 nights"),
    ]
}

#[actix_web::test]
async fn first_visit_loads_clients() {
    let app = init_app!(StubApi::with_client());
    let mut browser = Browser::default();

    let body = html!(app, browser);

    assert!(body.contains("👥 Clients"));
    assert!(body.contains("Ivan Petrov"));
    assert_eq!(body.matches("class=\"item\"").count(), 1);
    assert!(browser.cookies.contains_key("id"));
}

#[actix_web::test]
async fn create_client_reloads_list_and_flashes_success() {
    let app = init_app!(StubApi::default());
    let mut browser = Browser::default();

    post!(app, browser, "/clients/form/show");
    post!(
        app,
        browser,
        "/clients",
        [
            ("first_name", "Anna"),
            ("last_name", "Smirnova"),
            ("email", "anna@example.com"),
            ("phone", ""),
        ]
    );
    let body = html!(app, browser);

    assert!(body.contains("Client created!"));
    assert!(body.contains("alert-success"));
    assert!(body.contains("Anna Smirnova"));
    assert!(!body.contains("id=\"client-form\""));
}

#[actix_web::test]
async fn blank_client_name_keeps_form_input() {
    let app = init_app!(StubApi::default());
    let mut browser = Browser::default();

    post!(app, browser, "/clients/form/show");
    post!(
        app,
        browser,
        "/clients",
        [("first_name", "  "), ("last_name", "Smirnova")]
    );
    let body = html!(app, browser);

    assert!(body.contains("alert-warning"));
    assert!(body.contains("First and last name are required!"));
    assert!(body.contains("id=\"client-form\""));
    assert!(body.contains("value=\"Smirnova\""));
    assert!(body.contains("No clients yet"));
}

#[actix_web::test]
async fn visitors_do_not_share_page_state() {
    let app = init_app!(StubApi::default());
    let mut first = Browser::default();
    let mut second = Browser::default();

    post!(app, first, "/clients/form/show");
    post!(
        app,
        first,
        "/clients",
        [
            ("first_name", ""),
            ("last_name", "SecretSurname"),
            ("email", "private@example.com"),
        ]
    );

    let body = html!(app, second);
    assert!(!body.contains("id=\"client-form\""));
    assert!(!body.contains("SecretSurname"));
    assert!(!body.contains("private@example.com"));

    post!(app, second, "/clients/form/hide");
    post!(app, second, "/tabs/deals");

    let body = html!(app, first);
    assert!(body.contains("id=\"clients\""));
    assert!(body.contains("value=\"SecretSurname\""));
    assert!(body.contains("value=\"private@example.com\""));

    let body = html!(app, second);
    assert!(body.contains("id=\"deals\""));
}

#[actix_web::test]
async fn switching_tab_loads_deals() {
    let app = init_app!(StubApi::default());
    let mut browser = Browser::default();

    post!(app, browser, "/tabs/deals");
    let body = html!(app, browser);

    assert!(body.contains("id=\"deals\""));
    assert!(!body.contains("id=\"clients\""));
    assert!(body.contains("No deals yet"));
}

#[actix_web::test]
async fn unknown_tab_changes_nothing() {
    let app = init_app!(StubApi::default());
    let mut browser = Browser::default();

    post!(app, browser, "/tabs/reports");
    let body = html!(app, browser);

    assert!(body.contains("id=\"clients\""));
    assert!(body.contains("alert-danger"));
    assert!(body.contains("Unknown tab: reports"));
}

#[actix_web::test]
async fn failed_deal_reload_marks_list_failed() {
    let app = init_app!(StubApi {
        fail_deals: true,
        ..StubApi::default()
    });
    let mut browser = Browser::default();

    post!(app, browser, "/tabs/deals");
    post!(app, browser, "/deals/reload");
    let body = html!(app, browser);

    assert!(body.contains("Failed to load deals"));
    assert!(!body.contains("Loading deals..."));
    assert!(body.contains("Error: HTTP error! status: 500"));
}

#[actix_web::test]
async fn deal_form_flow_creates_deal() {
    let app = init_app!(StubApi::with_client());
    let mut browser = Browser::default();

    post!(app, browser, "/tabs/deals");
    post!(app, browser, "/deals/form/show");
    let body = html!(app, browser);
    assert!(body.contains("id=\"deal-form\""));
    assert!(body.contains("Select a client"));
    assert!(body.contains("Ivan Petrov (ID: 1)"));

    post!(app, browser, "/deals", deal_form());
    let body = html!(app, browser);

    assert!(body.contains("Deal created!"));
    assert!(!body.contains("id=\"deal-form\""));
    assert_eq!(body.matches("class=\"item\"").count(), 1);
    assert!(body.contains("150\u{a0}000 ₽"));
    assert!(body.contains("15\u{a0}000 ₽ (10%)"));
}

#[actix_web::test]
async fn deal_page_shows_deal_with_client() {
    let app = init_app!(StubApi::with_client());
    let mut browser = Browser::default();

    post!(app, browser, "/deals", deal_form());
    let body = html!(app, browser, "/deals/1");

    assert!(body.contains("Deal #1: 150\u{a0}000 ₽"));
    assert!(body.contains("Turkey, 7 nights"));
    assert!(body.contains("Ivan Petrov"));
    assert!(!body.contains("could not be loaded"));
}

#[actix_web::test]
async fn missing_deal_redirects_with_error() {
    let app = init_app!(StubApi::default());
    let mut browser = Browser::default();

    let resp = send!(app, browser, TestRequest::get().uri("/deals/42"));
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let body = html!(app, browser);
    assert!(body.contains("Error: HTTP error! status: 404"));
}

#[actix_web::test]
async fn health_reports_unreachable_backend() {
    let app = init_app!(StubApi::default());

    let req = TestRequest::get().uri("/health").to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["frontend"], "ok");
    assert_eq!(body["backend_error"], "Network error: connection refused");
}
