//! In-process stand-in for the Stellar Burgers API.
//!
//! Mirrors the status codes and messages the public service returns for the
//! account, ingredient and order endpoints, keeping accounts and orders in
//! memory for the lifetime of one [`FakeStellarBurgers`].

use std::sync::{Arc, Mutex};

use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

const BUN_ID: &str = "643d69a5c3f7b9001cfa093c";

const INTERNAL_ERROR_PAGE: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Error</title>\n</head>\n<body>\n<pre>Internal Server Error</pre>\n</body>\n</html>\n";

struct Session {
    access_token: String,
    refresh_token: String,
}

struct Account {
    email: String,
    password: String,
    name: String,
    sessions: Vec<Session>,
    orders: Vec<Value>,
}

impl Account {
    fn profile(&self) -> Value {
        json!({"email": self.email, "name": self.name})
    }
}

#[derive(Default)]
struct ServiceState {
    accounts: Vec<Account>,
    next_token: u64,
    next_order_number: i64,
    total_orders: i64,
}

impl ServiceState {
    fn open_session(&mut self, account: usize) -> Value {
        self.next_token += 1;
        let session = Session {
            access_token: format!("Bearer fake-access-{}", self.next_token),
            refresh_token: format!("fake-refresh-{}", self.next_token),
        };
        let body = json!({
            "success": true,
            "user": self.accounts[account].profile(),
            "accessToken": session.access_token,
            "refreshToken": session.refresh_token,
        });
        self.accounts[account].sessions.push(session);
        body
    }

    fn account_by_email(&self, email: &str) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.email.eq_ignore_ascii_case(email))
    }

    fn account_by_access_token(&self, token: &str) -> Option<usize> {
        if token.is_empty() {
            return None;
        }
        self.accounts
            .iter()
            .position(|account| account.sessions.iter().any(|s| s.access_token == token))
    }
}

#[derive(Clone, Copy)]
enum Route {
    Register,
    Login,
    Logout,
    DeleteUser,
    UpdateUser,
    Ingredients,
    CreateOrder,
    GetOrders,
}

struct Handler {
    state: Arc<Mutex<ServiceState>>,
    route: Route,
}

impl Respond for Handler {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        let authorization = request
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        match self.route {
            Route::Register => register(&mut state, &body),
            Route::Login => login(&mut state, &body),
            Route::Logout => logout(&mut state, &body),
            Route::DeleteUser => delete_user(&mut state, &authorization),
            Route::UpdateUser => update_user(&mut state, &authorization, &body),
            Route::Ingredients => ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": catalogue(),
            })),
            Route::CreateOrder => create_order(&mut state, &authorization, &body),
            Route::GetOrders => get_orders(&state, &authorization),
        }
    }
}

fn failure(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({"success": false, "message": message}))
}

fn not_authorised() -> ResponseTemplate {
    failure(401, "You should be authorised")
}

fn text_field<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field).and_then(Value::as_str).filter(|value| !value.is_empty())
}

fn register(state: &mut ServiceState, body: &Value) -> ResponseTemplate {
    let (Some(email), Some(password), Some(name)) = (
        text_field(body, "email"),
        text_field(body, "password"),
        text_field(body, "name"),
    ) else {
        return failure(403, "Email, password and name are required fields");
    };

    if state.account_by_email(email).is_some() {
        return failure(403, "User already exists");
    }

    state.accounts.push(Account {
        email: email.to_lowercase(),
        password: password.to_string(),
        name: name.to_string(),
        sessions: Vec::new(),
        orders: Vec::new(),
    });
    let index = state.accounts.len() - 1;
    ResponseTemplate::new(200).set_body_json(state.open_session(index))
}

fn login(state: &mut ServiceState, body: &Value) -> ResponseTemplate {
    let matched = match (text_field(body, "email"), text_field(body, "password")) {
        (Some(email), Some(password)) => state
            .account_by_email(email)
            .filter(|&index| state.accounts[index].password == password),
        _ => None,
    };

    match matched {
        Some(index) => ResponseTemplate::new(200).set_body_json(state.open_session(index)),
        None => failure(401, "email or password are incorrect"),
    }
}

fn logout(state: &mut ServiceState, body: &Value) -> ResponseTemplate {
    let Some(token) = text_field(body, "token") else {
        return failure(404, "Token required");
    };

    for account in &mut state.accounts {
        if let Some(position) = account.sessions.iter().position(|s| s.refresh_token == token) {
            account.sessions.remove(position);
            return ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "message": "Successful logout"}));
        }
    }
    failure(404, "Token required")
}

fn delete_user(state: &mut ServiceState, authorization: &str) -> ResponseTemplate {
    match state.account_by_access_token(authorization) {
        Some(index) => {
            state.accounts.remove(index);
            ResponseTemplate::new(202)
                .set_body_json(json!({"success": true, "message": "User successfully removed"}))
        }
        None => not_authorised(),
    }
}

fn update_user(state: &mut ServiceState, authorization: &str, body: &Value) -> ResponseTemplate {
    let Some(index) = state.account_by_access_token(authorization) else {
        return not_authorised();
    };

    if let Some(email) = text_field(body, "email") {
        if state.account_by_email(email).is_some_and(|other| other != index) {
            return failure(403, "User with such email already exists");
        }
        state.accounts[index].email = email.to_lowercase();
    }
    if let Some(name) = text_field(body, "name") {
        state.accounts[index].name = name.to_string();
    }

    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "user": state.accounts[index].profile(),
    }))
}

fn create_order(state: &mut ServiceState, authorization: &str, body: &Value) -> ResponseTemplate {
    let ids: Vec<String> = body
        .get("ingredients")
        .and_then(Value::as_array)
        .map(|ids| ids.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default();

    if ids.is_empty() {
        return failure(400, "Ingredient ids must be provided");
    }

    let catalogue = catalogue();
    let mut chosen = Vec::with_capacity(ids.len());
    for id in &ids {
        match catalogue.iter().find(|item| item["_id"] == id.as_str()) {
            Some(item) => chosen.push(item.clone()),
            None => return ResponseTemplate::new(500).set_body_raw(INTERNAL_ERROR_PAGE, "text/html"),
        }
    }

    state.next_order_number += 1;
    state.total_orders += 1;
    let number = 10_000 + state.next_order_number;
    let name = format!("{} burger", chosen.len());
    let price: f64 = chosen.iter().filter_map(|item| item["price"].as_f64()).sum();
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    let Some(index) = state.account_by_access_token(authorization) else {
        return ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "name": name,
            "order": {"number": number},
        }));
    };

    let id = format!("fake-order-{}", number);
    state.accounts[index].orders.push(json!({
        "_id": id,
        "ingredients": ids,
        "status": "done",
        "name": name,
        "createdAt": now,
        "updatedAt": now,
        "number": number,
    }));

    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "name": name,
        "order": {
            "_id": id,
            "ingredients": chosen,
            "owner": state.accounts[index].profile(),
            "status": "done",
            "name": name,
            "createdAt": now,
            "updatedAt": now,
            "number": number,
            "price": price,
        },
    }))
}

fn get_orders(state: &ServiceState, authorization: &str) -> ResponseTemplate {
    match state.account_by_access_token(authorization) {
        Some(index) => ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "orders": state.accounts[index].orders,
            "total": state.total_orders,
            "totalToday": state.total_orders,
        })),
        None => not_authorised(),
    }
}

fn catalogue() -> Vec<Value> {
    vec![
        ingredient(BUN_ID, "Craters bun N-200i", "bun", [80.0, 24.0, 53.0, 420.0], 1255.0, "bun-02"),
        ingredient("643d69a5c3f7b9001cfa093d", "Fluorescent bun R2-D3", "bun", [44.0, 26.0, 85.0, 643.0], 988.0, "bun-01"),
        ingredient("643d69a5c3f7b9001cfa093e", "Luminescent tetraodontimform fillet", "main", [44.0, 26.0, 85.0, 643.0], 988.0, "meat-03"),
        ingredient("643d69a5c3f7b9001cfa0941", "Martian Magnolia bio-cutlet", "main", [420.0, 142.0, 242.0, 4242.0], 424.0, "meat-01"),
        ingredient("643d69a5c3f7b9001cfa0942", "Spicy-X sauce", "sauce", [30.0, 20.0, 40.0, 30.0], 90.0, "sauce-02"),
    ]
}

fn ingredient(id: &str, name: &str, kind: &str, nutrition: [f64; 4], price: f64, image: &str) -> Value {
    let [proteins, fat, carbohydrates, calories] = nutrition;
    json!({
        "_id": id,
        "name": name,
        "type": kind,
        "proteins": proteins,
        "fat": fat,
        "carbohydrates": carbohydrates,
        "calories": calories,
        "price": price,
        "image": format!("https://code.s3.yandex.net/react/code/{}.png", image),
        "image_mobile": format!("https://code.s3.yandex.net/react/code/{}-mobile.png", image),
        "image_large": format!("https://code.s3.yandex.net/react/code/{}-large.png", image),
        "__v": 0,
    })
}

/// A running fake service; dropping it shuts the server down.
pub struct FakeStellarBurgers {
    server: MockServer,
}

impl FakeStellarBurgers {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let state = Arc::new(Mutex::new(ServiceState::default()));

        let routes = [
            ("POST", "/api/auth/register", Route::Register),
            ("POST", "/api/auth/login", Route::Login),
            ("POST", "/api/auth/logout", Route::Logout),
            ("DELETE", "/api/auth/user", Route::DeleteUser),
            ("PATCH", "/api/auth/user", Route::UpdateUser),
            ("GET", "/api/ingredients", Route::Ingredients),
            ("POST", "/api/orders", Route::CreateOrder),
            ("GET", "/api/orders", Route::GetOrders),
        ];
        for (verb, route_path, route) in routes {
            Mock::given(method(verb))
                .and(path(route_path))
                .respond_with(Handler {
                    state: Arc::clone(&state),
                    route,
                })
                .mount(&server)
                .await;
        }

        Self { server }
    }

    pub fn base_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }
}
