//! The events emitted while statements are built.

use mapsql::{BuilderConfig, Flavor, QueryBuilder, build_select, build_update_one, raw, row};
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Debug, Clone)]
struct Captured {
    target: String,
    level: Level,
    fields: Vec<(String, String)>,
}

impl Captured {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn mentions(&self, needle: &str) -> bool {
        self.fields.iter().any(|(_, v)| v.contains(needle))
    }
}

#[derive(Default)]
struct Fields(Vec<(String, String)>);

impl Visit for Fields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<Captured>>>);

impl<S: Subscriber> Layer<S> for Capture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::default();
        event.record(&mut fields);
        self.0.lock().unwrap().push(Captured {
            target: event.metadata().target().to_string(),
            level: *event.metadata().level(),
            fields: fields.0,
        });
    }
}

/// Run `f` with a subscriber that records every event on this thread.
fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<Captured>) {
    let layer = Capture::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    let events = layer.0.lock().unwrap().clone();
    (out, events)
}

fn on_target<'a>(events: &'a [Captured], target: &str) -> Vec<&'a Captured> {
    events.iter().filter(|e| e.target == target).collect()
}

#[test]
fn one_event_per_built_statement() {
    let (stmt, events) =
        capture(|| build_select(&["id"], "users", &row! { "token" => "s3cr3t" }).unwrap());

    let built = on_target(&events, "mapsql.sql");
    assert_eq!(built.len(), 1);
    let event = built[0];
    assert_eq!(event.level, Level::DEBUG);
    assert_eq!(event.field("tag"), Some("build_select"));
    assert_eq!(event.field("kind"), Some("Select"));
    assert_eq!(event.field("flavor"), Some("mysql"));
    assert_eq!(event.field("param_count"), Some("1"));
    assert_eq!(event.field("sql"), Some(stmt.sql()));
}

#[test]
fn parameter_values_are_never_logged() {
    let (_, events) = capture(|| {
        let qb = QueryBuilder::new(BuilderConfig::for_flavor(Flavor::Postgres).no_truncate());
        qb.update_one(
            "accounts",
            &row! { "password" => "s3cr3t", "note" => "" },
            &row! { "id" => "s3cr3t-id" },
        )
        .unwrap();
        qb.select(&["id"], "accounts", &row! { "api_key" => raw("s3cr3t") })
            .unwrap_err();
    });

    assert_eq!(events.len(), 2);
    for event in &events {
        assert!(!event.mentions("s3cr3t"), "value leaked into {event:?}");
    }
    assert_eq!(
        on_target(&events, "mapsql.sql")[0].field("flavor"),
        Some("postgres")
    );
}

#[test]
fn rejected_calls_warn() {
    let (err, events) = capture(|| {
        build_update_one("users", &row! { "name" => "Ann" }, &row! {}).unwrap_err()
    });

    assert!(on_target(&events, "mapsql.sql").is_empty());
    let rejected = on_target(&events, "mapsql");
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].level, Level::WARN);
    assert_eq!(rejected[0].field("assembler"), Some("build_update_one"));
    assert_eq!(rejected[0].field("error"), Some(err.to_string().as_str()));
}

#[test]
fn disabled_logging_emits_nothing() {
    let (_, events) = capture(|| {
        QueryBuilder::new(BuilderConfig::new().no_logging())
            .select(&["id"], "t", &row! { "id" => 1 })
            .unwrap()
    });
    assert!(events.is_empty());
}

#[test]
fn configured_level_and_truncation() {
    let (_, events) = capture(|| {
        let config = BuilderConfig::new().log_level(Level::INFO).max_logged_sql(10);
        QueryBuilder::new(config)
            .select(&["id"], "t", &row! { "id" => 1 })
            .unwrap()
    });

    let built = on_target(&events, "mapsql.sql");
    assert_eq!(built.len(), 1);
    assert_eq!(built[0].level, Level::INFO);
    assert_eq!(built[0].field("sql"), Some("SELECT `id..."));
}
