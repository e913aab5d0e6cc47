//! Capture of spans and events emitted during a parse.
//!
//! Installs a thread-local subscriber (`set_default`) whose layer records span
//! names, levels, parents and fields (including fields recorded after creation)
//! plus the level and message of every event.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Clone)]
pub struct CapturedSpan {
    pub name: &'static str,
    pub level: Level,
    pub parent: Option<&'static str>,
    pub fields: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub message: String,
    pub fields: HashMap<String, String>,
}

#[derive(Debug, Default)]
struct Captured {
    spans: Vec<CapturedSpan>,
    events: Vec<CapturedEvent>,
}

/// Shared view of everything captured so far
#[derive(Debug, Clone, Default)]
pub struct TraceCapture(Arc<Mutex<Captured>>);

impl TraceCapture {
    pub fn span(&self, name: &str) -> Option<CapturedSpan> {
        self.0
            .lock()
            .unwrap()
            .spans
            .iter()
            .find(|s| s.name == name)
            .cloned()
    }

    pub fn span_names(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().spans.iter().map(|s| s.name).collect()
    }

    pub fn events_at(&self, level: Level) -> Vec<CapturedEvent> {
        self.0
            .lock()
            .unwrap()
            .events
            .iter()
            .filter(|e| e.level == level)
            .cloned()
            .collect()
    }
}

/// Position of a span in the capture, kept in the span's extensions
struct SpanSlot(usize);

struct CaptureLayer(TraceCapture);

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let mut fields = Fields::default();
        attrs.record(&mut fields);

        let parent = attrs
            .parent()
            .and_then(|pid| ctx.span(pid))
            .or_else(|| ctx.lookup_current())
            .map(|span| span.name());

        let span = ctx.span(id).expect("new span is registered");
        let slot = {
            let mut captured = (self.0).0.lock().unwrap();
            captured.spans.push(CapturedSpan {
                name: span.metadata().name(),
                level: *span.metadata().level(),
                parent,
                fields: fields.values,
            });
            captured.spans.len() - 1
        };
        span.extensions_mut().insert(SpanSlot(slot));
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else { return };
        let extensions = span.extensions();
        let Some(SpanSlot(slot)) = extensions.get::<SpanSlot>() else {
            return;
        };
        let mut fields = Fields::default();
        values.record(&mut fields);
        if let Some(captured) = (self.0).0.lock().unwrap().spans.get_mut(*slot) {
            captured.fields.extend(fields.values);
        }
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::default();
        event.record(&mut fields);
        let message = fields.values.remove("message").unwrap_or_default();
        (self.0).0.lock().unwrap().events.push(CapturedEvent {
            level: *event.metadata().level(),
            message,
            fields: fields.values,
        });
    }
}

#[derive(Default)]
struct Fields {
    values: HashMap<String, String>,
}

impl Visit for Fields {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.values
            .insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.values.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.values.insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.values.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.values.insert(field.name().to_string(), value.to_string());
    }
}

/// Capture all levels on the current thread until the guard is dropped
pub fn capture_traces() -> (TraceCapture, tracing::subscriber::DefaultGuard) {
    let capture = TraceCapture::default();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer(capture.clone()));
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}
