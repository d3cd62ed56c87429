use std::net::SocketAddr;

use configs::DatabaseConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::{startup, state::AppState};

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }
}

/// Serve the real router over SeaORM on a private in-memory SQLite database.
async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = models::db::connect_with_config(&cfg).await?;
    models::db::migrate(&db).await?;

    let app = startup::app(AppState::seaorm(db));
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

async fn post_json(app: &TestApp, path: &str, body: Value) -> anyhow::Result<Value> {
    let res = client().post(app.url(path)).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    Ok(res.json::<Value>().await?)
}

fn bob(company_id: Option<i64>) -> Value {
    json!({"name": "Bob", "age": 22, "gender": "Male", "salary": 10000, "companyId": company_id})
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_create_company_assigns_id() -> anyhow::Result<()> {
    let app = start_server().await?;
    let created = post_json(&app, "/companies", json!({"name": "ABC"})).await?;
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "ABC");
    assert_eq!(created["employees"], json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_company_with_employees() -> anyhow::Result<()> {
    let app = start_server().await?;
    post_json(&app, "/companies", json!({"name": "ABC"})).await?;
    let employee = post_json(&app, "/employees", bob(Some(1))).await?;

    let res = client().get(app.url("/companies/1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let company = res.json::<Value>().await?;
    assert_eq!(company["name"], "ABC");
    assert_eq!(company["employees"].as_array().map(Vec::len), Some(1));
    assert_eq!(company["employees"][0]["id"], employee["id"]);
    assert_eq!(company["employees"][0]["salary"], 10000);

    let res = client().get(app.url("/companies/1/employees")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let employees = res.json::<Value>().await?;
    assert_eq!(employees, json!([employee]));
    Ok(())
}

#[tokio::test]
async fn e2e_companies_by_page() -> anyhow::Result<()> {
    let app = start_server().await?;
    for name in ["ABC", "DEF", "XYZ"] {
        post_json(&app, "/companies", json!({"name": name})).await?;
    }

    let first = client()
        .get(app.url("/companies"))
        .query(&[("pageNumber", "1"), ("pageSize", "2")])
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(first.as_array().map(Vec::len), Some(2));
    assert_eq!((first[0]["id"].clone(), first[0]["name"].clone()), (json!(1), json!("ABC")));
    assert_eq!((first[1]["id"].clone(), first[1]["name"].clone()), (json!(2), json!("DEF")));

    let second = client()
        .get(app.url("/companies?pageNumber=2&pageSize=2"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(second.as_array().map(Vec::len), Some(1));
    assert_eq!(second[0]["name"], "XYZ");

    let all = client().get(app.url("/companies")).send().await?.json::<Value>().await?;
    assert_eq!(all.as_array().map(Vec::len), Some(3));

    let res = client()
        .get(app.url(&format!("/companies?pageNumber={}&pageSize={}", u64::MAX, u64::MAX)))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([]));

    let res = client().get(app.url(&format!("/companies?pageNumber=1&pageSize={}", u64::MAX))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?.as_array().map(Vec::len), Some(3));
    Ok(())
}

#[tokio::test]
async fn e2e_create_ignores_body_id() -> anyhow::Result<()> {
    let app = start_server().await?;
    post_json(&app, "/companies", json!({"name": "ABC"})).await?;

    let created = post_json(&app, "/companies", json!({"id": 1, "name": "Hijacked"})).await?;
    assert_eq!(created["id"], 2);
    let first = client().get(app.url("/companies/1")).send().await?.json::<Value>().await?;
    assert_eq!(first["name"], "ABC");

    post_json(&app, "/employees", bob(None)).await?;
    let mut susan = bob(None);
    susan["id"] = json!(1);
    susan["name"] = json!("Susan");
    let created = post_json(&app, "/employees", susan).await?;
    assert_eq!(created["id"], 2);
    let first = client().get(app.url("/employees/1")).send().await?.json::<Value>().await?;
    assert_eq!(first["name"], "Bob");
    Ok(())
}

#[tokio::test]
async fn e2e_update_company_name() -> anyhow::Result<()> {
    let app = start_server().await?;
    let created = post_json(&app, "/companies", json!({"name": "abc"})).await?;

    let res = client()
        .put(app.url("/companies/1"))
        .json(&json!({"id": 1, "name": "xyz"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let company = client().get(app.url("/companies/1")).send().await?.json::<Value>().await?;
    assert_eq!(company["id"], created["id"]);
    assert_eq!(company["name"], "xyz");

    let res = client().put(app.url("/companies/999")).json(&json!({"name": "ghost"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let all = client().get(app.url("/companies")).send().await?.json::<Value>().await?;
    assert_eq!(all.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn e2e_delete_company() -> anyhow::Result<()> {
    let app = start_server().await?;
    post_json(&app, "/companies", json!({"name": "abc"})).await?;

    for _ in 0..2 {
        let res = client().delete(app.url("/companies/1")).send().await?;
        assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    }
    let res = client().get(app.url("/companies/1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_employee_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let created = post_json(&app, "/employees", bob(None)).await?;
    assert_eq!(created["id"], 1);
    assert_eq!(created["gender"], "Male");

    let res = client().get(app.url("/employees/1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);

    let res = client()
        .put(app.url("/employees/1"))
        .json(&json!({"id": 1, "name": "lisi", "age": 24, "gender": "Female", "salary": 2000}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let updated = client().get(app.url("/employees/1")).send().await?.json::<Value>().await?;
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["name"], "lisi");
    assert_eq!(updated["age"], 24);
    assert_eq!(updated["gender"], "Female");
    assert_eq!(updated["salary"], 2000);

    let res = client().delete(app.url("/employees/1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = client().get(app.url("/employees/1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_employees_by_gender_and_page() -> anyhow::Result<()> {
    let app = start_server().await?;
    post_json(&app, "/employees", bob(None)).await?;
    post_json(&app, "/employees", json!({"name": "Susan", "age": 23, "gender": "Female", "salary": 11000})).await?;
    post_json(&app, "/employees", json!({"name": "Lily", "age": 24, "gender": "Female", "salary": 12000})).await?;

    let males = client().get(app.url("/employees?gender=Male")).send().await?.json::<Value>().await?;
    assert_eq!(males.as_array().map(Vec::len), Some(1));
    assert_eq!(males[0]["name"], "Bob");

    let page = client()
        .get(app.url("/employees?pageNumber=1&pageSize=2"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let names: Vec<&str> = page.as_array().into_iter().flatten().filter_map(|e| e["name"].as_str()).collect();
    assert_eq!(names, ["Bob", "Susan"]);

    let res = client().get(app.url("/employees?pageNumber=1&pageSize=0")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}
