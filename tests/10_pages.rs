mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn landing_page_renders_for_anonymous_visitors() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = common::client();

    let res = client.get(format!("{}/", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.text().await?;
    assert!(body.contains("Ella Rises"));
    assert!(body.contains("/login"));
    Ok(())
}

#[tokio::test]
async fn login_page_shows_the_form() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = common::client();

    let res = client
        .get(format!("{}/login", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.text().await?;
    assert!(body.contains(r#"<form method="POST" action="/login">"#));
    assert!(!body.contains("Invalid login"));
    Ok(())
}

#[tokio::test]
async fn every_response_carries_security_headers() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = common::client();

    for path in ["/", "/login", "/teapot"] {
        let res = client
            .get(format!("{}{}", server.base_url, path))
            .send()
            .await?;
        let headers = res.headers();
        assert_eq!(
            headers.get("x-content-type-options").unwrap(),
            "nosniff",
            "missing nosniff on {}",
            path
        );
        assert_eq!(headers.get("x-frame-options").unwrap(), "SAMEORIGIN");
        assert_eq!(headers.get("referrer-policy").unwrap(), "no-referrer");
    }
    Ok(())
}

#[tokio::test]
async fn teapot_always_answers_418() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = common::client();

    let res = client
        .get(format!("{}/teapot", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::IM_A_TEAPOT);
    assert!(res.text().await?.contains("teapot"));
    Ok(())
}
