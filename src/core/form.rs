use std::collections::HashMap;

use serde_json::{
    Map,
    Value,
};
use url::Url;

use super::{
    diseases::Disease,
    errors::PREDICTION_ERROR_MESSAGE,
    validation::{
        validate_fields,
        FieldError,
    },
    HealthError,
};

pub type RequestId = u64;

pub const SUBMIT_LABEL: &str = "Predict";
pub const SUBMITTING_LABEL: &str = "Predicting...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionResult {
    Prediction(String),
    Failed,
}

impl PredictionResult {
    pub fn text(&self) -> &str {
        match self {
            PredictionResult::Prediction(text) => text,
            PredictionResult::Failed => PREDICTION_ERROR_MESSAGE,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, PredictionResult::Failed)
    }
}

/// Everything a worker needs to perform one submission.
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    pub id: RequestId,
    pub disease: Disease,
    pub endpoint: Url,
    pub body: Map<String, Value>,
}

#[derive(Debug)]
pub enum SubmitError {
    InFlight,
    Invalid(Vec<FieldError>),
    Endpoint(HealthError),
}

/// State behind the prediction form.
///
/// Field values are keyed by field name and survive disease switches. Only the fields of
/// the active disease are validated and submitted.
#[derive(Debug, Default)]
pub struct FormController {
    selected: Disease,
    values: HashMap<String, String>,
    result: Option<PredictionResult>,
    pending: Option<RequestId>,
    next_request_id: RequestId,
    field_errors: HashMap<&'static str, FieldError>,
}

impl FormController {
    pub fn new(selected: Disease) -> Self {
        Self { selected, ..Default::default() }
    }

    pub fn selected(&self) -> Disease {
        self.selected
    }

    pub fn select_disease(&mut self, disease: Disease) {
        if self.selected != disease {
            log::debug!("Selected disease: {}", disease.key());
        }
        self.selected = disease;
        self.field_errors.clear();
    }

    pub fn fields(&self) -> &'static [&'static str] {
        self.selected.fields()
    }

    pub fn title(&self) -> &'static str {
        self.selected.config().title
    }

    pub fn update_field(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
        self.field_errors.remove(name);
    }

    pub fn field_value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    pub fn field_error(&self, name: &str) -> Option<&FieldError> {
        self.field_errors.get(name)
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Validates the active fields and moves to the submitting state.
    ///
    /// On success the loading flag is raised, the previous result is cleared and the
    /// returned request must be sent exactly once.
    pub fn begin_submit(
        &mut self,
        base_url: &Url,
        strict_numeric: bool,
    ) -> Result<PredictionRequest, SubmitError> {
        if self.pending.is_some() {
            return Err(SubmitError::InFlight);
        }

        let fields = self.fields();
        if let Err(errors) = validate_fields(fields, &self.values, strict_numeric) {
            self.field_errors = errors.iter().map(|e| (e.field, e.clone())).collect();
            return Err(SubmitError::Invalid(errors));
        }
        self.field_errors.clear();

        let endpoint = self.selected.config().endpoint(base_url).map_err(SubmitError::Endpoint)?;

        let body: Map<String, Value> = fields
            .iter()
            .map(|&field| (field.to_string(), Value::String(self.field_value(field).to_string())))
            .collect();

        self.next_request_id += 1;
        let id = self.next_request_id;
        self.pending = Some(id);
        self.result = None;

        Ok(PredictionRequest { id, disease: self.selected, endpoint, body })
    }

    /// Records the outcome of request `id`. Returns `false` when the result is stale and
    /// was dropped.
    pub fn complete(&mut self, id: RequestId, outcome: Result<String, String>) -> bool {
        if self.pending != Some(id) {
            log::warn!("Dropping stale prediction result for request #{id}");
            return false;
        }

        self.result = Some(match outcome {
            Ok(prediction) => PredictionResult::Prediction(prediction),
            Err(e) => {
                log::warn!("Prediction request #{id} failed: {e}");
                PredictionResult::Failed
            }
        });
        self.pending = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diseases::{
        parse_base_url,
        DEFAULT_SERVER_URL,
    };

    fn base() -> Url {
        parse_base_url(DEFAULT_SERVER_URL).unwrap()
    }

    fn fill_all(form: &mut FormController, value: &str) {
        for field in form.fields() {
            form.update_field(field, value);
        }
    }

    #[test]
    fn test_select_renders_configured_fields() {
        let mut form = FormController::default();
        assert_eq!(form.selected(), Disease::Diabetes);

        for disease in Disease::ALL {
            form.select_disease(disease);
            assert_eq!(form.fields(), disease.config().fields);
            assert_eq!(form.title(), disease.config().title);
        }
    }

    #[test]
    fn test_switching_keeps_input_state() {
        let mut form = FormController::default();
        form.update_field("Glucose", "120");
        form.update_field("BMI", "31.2");

        form.select_disease(Disease::Heart);
        form.update_field("chol", "240");
        form.select_disease(Disease::Diabetes);

        assert_eq!(form.field_value("Glucose"), "120");
        assert_eq!(form.field_value("BMI"), "31.2");
        assert_eq!(form.field_value("chol"), "240");
        assert_eq!(form.values().len(), 3);
    }

    #[test]
    fn test_submit_builds_body_for_active_fields_only() {
        let mut form = FormController::default();
        form.update_field("Glucose", "stale");
        form.select_disease(Disease::Heart);
        fill_all(&mut form, "1");

        let request = form.begin_submit(&base(), true).unwrap();

        assert_eq!(request.disease, Disease::Heart);
        assert_eq!(request.endpoint.as_str(), "http://localhost:8000/predict-heart-disease");
        let keys: Vec<&str> = request.body.keys().map(String::as_str).collect();
        assert_eq!(keys, Disease::Heart.fields());
        assert!(request.body.values().all(|v| v == &Value::String("1".to_string())));
        assert!(!request.body.contains_key("Glucose"));
    }

    #[test]
    fn test_values_sent_verbatim() {
        let mut form = FormController::default();
        fill_all(&mut form, "0");
        form.update_field("BMI", " 33.6");

        let request = form.begin_submit(&base(), true).unwrap();
        assert_eq!(request.body["BMI"], Value::String(" 33.6".to_string()));
    }

    #[test]
    fn test_loading_lifecycle() {
        let mut form = FormController::default();
        fill_all(&mut form, "2");
        assert_eq!(form.submit_label(), "Predict");

        let request = form.begin_submit(&base(), true).unwrap();
        assert!(form.is_loading());
        assert_eq!(form.submit_label(), "Predicting...");
        assert!(form.result().is_none());

        assert!(form.complete(request.id, Ok("Positive".to_string())));
        assert!(!form.is_loading());
        assert_eq!(form.submit_label(), "Predict");
        assert_eq!(form.result().map(|r| r.text()), Some("Positive"));
    }

    #[test]
    fn test_failure_collapses_to_fixed_message() {
        let mut form = FormController::default();
        fill_all(&mut form, "2");

        let request = form.begin_submit(&base(), true).unwrap();
        form.complete(request.id, Err("HTTP error 500".to_string()));

        let result = form.result().unwrap();
        assert!(result.is_failure());
        assert_eq!(result.text(), "Error in prediction.");
        assert!(!form.is_loading());
    }

    #[test]
    fn test_next_submit_clears_previous_result() {
        let mut form = FormController::default();
        fill_all(&mut form, "2");

        let first = form.begin_submit(&base(), true).unwrap();
        form.complete(first.id, Ok("The person is not diabetic".to_string()));

        let second = form.begin_submit(&base(), true).unwrap();
        assert!(second.id > first.id);
        assert!(form.result().is_none());
    }

    #[test]
    fn test_double_submit_and_stale_results() {
        let mut form = FormController::default();
        fill_all(&mut form, "2");

        let request = form.begin_submit(&base(), true).unwrap();
        assert!(matches!(form.begin_submit(&base(), true), Err(SubmitError::InFlight)));

        assert!(!form.complete(request.id + 7, Ok("ghost".to_string())));
        assert!(form.is_loading());
        assert!(form.result().is_none());

        assert!(form.complete(request.id, Ok("real".to_string())));
        assert!(!form.complete(request.id, Ok("duplicate".to_string())));
        assert_eq!(form.result().map(|r| r.text()), Some("real"));
    }

    #[test]
    fn test_invalid_input_does_not_submit() {
        let mut form = FormController::default();
        fill_all(&mut form, "5");
        form.update_field("Age", "");
        form.update_field("Insulin", "lots");

        match form.begin_submit(&base(), true) {
            Err(SubmitError::Invalid(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("Expected validation errors, got {:?}", other),
        }
        assert!(!form.is_loading());
        assert!(form.field_error("Age").is_some());
        assert!(form.field_error("Insulin").is_some());

        form.update_field("Insulin", "80");
        assert!(form.field_error("Insulin").is_none());
        assert!(form.field_error("Age").is_some());

        form.update_field("Age", "50");
        assert!(form.begin_submit(&base(), true).is_ok());
    }

    #[test]
    fn test_pass_through_mode_accepts_any_text() {
        let mut form = FormController::default();
        fill_all(&mut form, "n/a");

        let request = form.begin_submit(&base(), false).unwrap();
        assert_eq!(request.body["Glucose"], Value::String("n/a".to_string()));
    }
}
