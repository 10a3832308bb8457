//! Recording fakes for the transport and handler tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use trainer_common::{Trainer, UpdateRequest};

use crate::config::ClientConfig;
use crate::handlers::FieldSource;
use crate::transport::{
    ApiRequest, HttpBackend, HttpResponse, Notifier, Operation, ResponseCallback, TrainerApi,
};

pub(crate) fn league() -> Vec<Trainer> {
    vec![
        Trainer::new("Ash", 20, "Pallet Town"),
        Trainer::new("Misty", 22, "Cerulean City"),
        Trainer::new("Brock", 35, "Pewter City"),
    ]
}

pub(crate) fn league_json() -> String {
    serde_json::to_string(&league()).unwrap()
}

/// Holds every request until the test answers it.
#[derive(Default)]
pub(crate) struct FakeBackend {
    sent: Mutex<Vec<ApiRequest>>,
    in_flight: Mutex<VecDeque<ResponseCallback>>,
}

impl HttpBackend for FakeBackend {
    fn send(&self, request: ApiRequest, on_done: ResponseCallback) {
        self.sent.lock().unwrap().push(request);
        self.in_flight.lock().unwrap().push_back(on_done);
    }
}

impl FakeBackend {
    pub(crate) fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn pending(&self) -> usize {
        self.in_flight.lock().unwrap().len()
    }

    /// Complete the oldest in-flight request.
    pub(crate) fn respond(&self, status: u16, body: &str) {
        let on_done = self
            .in_flight
            .lock()
            .unwrap()
            .pop_front()
            .expect("no request in flight");
        on_done(HttpResponse {
            status,
            body: body.to_string(),
        });
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
    diagnostics: Mutex<Vec<u16>>,
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn diagnostic(&self, status: u16) {
        self.diagnostics.lock().unwrap().push(status);
    }
}

impl RecordingNotifier {
    pub(crate) fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub(crate) fn diagnostics(&self) -> Vec<u16> {
        self.diagnostics.lock().unwrap().clone()
    }
}

pub(crate) struct Harness {
    pub api: TrainerApi,
    pub backend: Arc<FakeBackend>,
    pub notifier: Arc<RecordingNotifier>,
    listed: Arc<Mutex<Vec<Vec<Trainer>>>>,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Self::with_config(&ClientConfig::default())
    }

    pub(crate) fn with_config(config: &ClientConfig) -> Self {
        let backend = Arc::new(FakeBackend::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let listed = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let listed = listed.clone();
            Arc::new(move |trainers: Vec<Trainer>| listed.lock().unwrap().push(trainers))
        };
        let api = TrainerApi::new(config, backend.clone(), notifier.clone(), sink);
        Self {
            api,
            backend,
            notifier,
            listed,
        }
    }

    /// Every list the sink received.
    pub(crate) fn listed(&self) -> Vec<Vec<Trainer>> {
        self.listed.lock().unwrap().clone()
    }

    /// Issue `operation` with a throwaway record.
    pub(crate) fn run(&self, operation: Operation) {
        let ash = Trainer::new("Ash", 10, "Pallet Town");
        match operation {
            Operation::List => self.api.list(),
            Operation::Create => self.api.create(&ash).unwrap(),
            Operation::Update => self
                .api
                .update(&UpdateRequest {
                    original: ash.clone(),
                    replacement: Trainer::new("Ash", 11, "Pallet Town"),
                })
                .unwrap(),
            Operation::Delete => self.api.delete(&ash).unwrap(),
        }
    }
}

/// Input values keyed by element id.
#[derive(Default)]
pub(crate) struct MapFields(HashMap<String, String>);

impl MapFields {
    pub(crate) fn with_row(mut self, index: usize, name: &str, age: &str, city: &str) -> Self {
        self.0.insert(format!("name_{index}"), name.to_string());
        self.0.insert(format!("age_{index}"), age.to_string());
        self.0.insert(format!("city_{index}"), city.to_string());
        self
    }
}

impl FieldSource for MapFields {
    fn field_value(&self, id: &str) -> Option<String> {
        self.0.get(id).cloned()
    }
}
