//! Static mounts and router precedence over the wire.

use axum::routing::get;
use axum::Router;
use devserve::{ServeConfig, StaticServer};

mod common;

#[tokio::test]
async fn router_takes_precedence_over_static_files() {
    let root = common::static_root(&[("api.txt", "from disk")]);
    let port = common::free_port().await;
    let config = ServeConfig {
        root: Some(root.path().to_path_buf()),
        port: Some(port),
        no_server_info: true,
        ..Default::default()
    };
    let custom = Router::new().route("/api.txt", get(|| async { "from router" }));

    let handle = StaticServer::new(config)
        .with_router(custom)
        .start()
        .await
        .unwrap();

    let body = common::client()
        .get(format!("http://127.0.0.1:{}/api.txt", handle.port()))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "from router");

    handle.shutdown();
}

#[tokio::test]
async fn project_root_backs_the_primary_root() {
    let root = common::static_root(&[("app.js", "bundled")]);
    let project = common::static_root(&[("src/app.ts", "original")]);
    let port = common::free_port().await;
    let config = ServeConfig {
        root: Some(root.path().to_path_buf()),
        project_root: Some(project.path().to_path_buf()),
        port: Some(port),
        no_server_info: true,
        ..Default::default()
    };

    let handle = StaticServer::new(config).start().await.unwrap();
    let base = format!("http://127.0.0.1:{}", handle.port());
    let client = common::client();

    let bundled = client
        .get(format!("{}/app.js", base))
        .send()
        .await
        .unwrap();
    assert_eq!(bundled.status(), 200);
    assert_eq!(bundled.text().await.unwrap(), "bundled");

    let original = client
        .get(format!("{}/src/app.ts", base))
        .send()
        .await
        .unwrap();
    assert_eq!(original.status(), 200);
    assert_eq!(original.text().await.unwrap(), "original");

    handle.shutdown();
}

#[tokio::test]
async fn primary_root_wins_on_shared_paths() {
    let root = common::static_root(&[("same.txt", "primary")]);
    let project = common::static_root(&[("same.txt", "secondary")]);
    let port = common::free_port().await;
    let config = ServeConfig {
        root: Some(root.path().to_path_buf()),
        project_root: Some(project.path().to_path_buf()),
        port: Some(port),
        no_server_info: true,
        ..Default::default()
    };

    let handle = StaticServer::new(config).start().await.unwrap();

    let body = common::client()
        .get(format!("http://127.0.0.1:{}/same.txt", handle.port()))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "primary");

    handle.shutdown();
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let root = common::static_root(&[("present.txt", "here")]);
    let port = common::free_port().await;
    let config = ServeConfig {
        root: Some(root.path().to_path_buf()),
        port: Some(port),
        no_server_info: true,
        ..Default::default()
    };

    let handle = StaticServer::new(config).start().await.unwrap();

    let response = common::client()
        .get(format!("http://127.0.0.1:{}/absent.txt", handle.port()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    handle.shutdown();
}
