// ABOUTME: Local HTTP stand-ins for the product databases and the AI service
// ABOUTME: Serves scripted axum routers or a listener that never answers, on an ephemeral port
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::Router;
use tokio::net::TcpListener;

/// Serve `router` on 127.0.0.1 and return its base URL
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Stub listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub server failed");
    });

    format!("http://{addr}")
}

/// Accept connections and hold them open without ever replying
pub async fn spawn_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind silent listener");
    let addr = listener.local_addr().expect("Silent listener has no address");

    tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });

    format!("http://{addr}")
}
