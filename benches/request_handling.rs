use api_explorer::adapters::mock_backend::{dispatch, DispatchRequest, MockBackend};
use api_explorer::adapters::session_manager::SessionManager;
use api_explorer::config::Settings;
use api_explorer::domain::catalog::Catalog;
use api_explorer::domain::session::Action;
use api_explorer::domain::{HttpMethod, KeyValues, RequestDraft};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;
use tokio::sync::RwLock;

fn create_manager() -> SessionManager {
    let settings = Arc::new(RwLock::new(Settings::without_latency()));
    SessionManager::new(
        Arc::new(Catalog::seed()),
        Arc::new(MockBackend::new(settings)),
    )
}

fn benchmark_dispatch(c: &mut Criterion) {
    let mut query = KeyValues::new();
    query.insert("page".to_string(), "2".to_string());
    let create_user = RequestDraft {
        method: HttpMethod::Post,
        body: r#"{"name":"John Doe","email":"john@example.com"}"#.to_string(),
        ..RequestDraft::default()
    };
    let list_orders = RequestDraft {
        query_params: query,
        ..RequestDraft::default()
    };

    c.bench_function("dispatch_create_user", |b| {
        b.iter(|| dispatch(black_box(&DispatchRequest::new("/users", &create_user))))
    });
    c.bench_function("dispatch_orders", |b| {
        b.iter(|| dispatch(black_box(&DispatchRequest::new("/orders", &list_orders))))
    });
    c.bench_function("dispatch_not_found", |b| {
        b.iter(|| dispatch(black_box(&DispatchRequest::new("/unknown", &list_orders))))
    });
}

fn benchmark_session_send(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let manager = create_manager();
    rt.block_on(async {
        manager
            .apply(Action::SelectTestCase { id: "3".to_string() })
            .await
            .unwrap()
    });

    let mut group = c.benchmark_group("throughput");
    group.throughput(Throughput::Elements(1));
    group.bench_function("session_send", |b| {
        b.to_async(&rt).iter(|| async { manager.send().await })
    });
    group.finish();
}

criterion_group!(benches, benchmark_dispatch, benchmark_session_send);
criterion_main!(benches);
