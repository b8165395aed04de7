// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use archivrs::config::settings::{SearchSettings, ServerSettings, Settings};
use archivrs::domain::corpus::store::CorpusStore;
use archivrs::infrastructure::sample_data;
use archivrs::presentation::routes;
use axum::Extension;
use axum_test::TestServer;
use std::sync::Arc;

pub fn test_settings() -> Arc<Settings> {
    Arc::new(Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        search: SearchSettings {
            default_limit: 10,
            max_limit: 100,
        },
    })
}

/// Builds a test server over an arbitrary fixture corpus.
pub fn create_test_app_with_store(store: CorpusStore) -> TestServer {
    let app = routes::routes()
        .layer(Extension(Arc::new(store)))
        .layer(Extension(test_settings()));
    TestServer::new(app).expect("test server should start")
}

/// Builds a test server over the seed corpus the binary loads at startup.
pub fn create_test_app() -> TestServer {
    create_test_app_with_store(sample_data::sample_corpus())
}
