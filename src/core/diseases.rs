use serde::{
    Deserialize,
    Serialize,
};
use url::Url;

use crate::core::HealthError;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Static description of one prediction task.
#[derive(Debug)]
pub struct DiseaseConfig {
    pub key: &'static str,
    pub title: &'static str,
    /// Endpoint path, resolved against the configured server base URL.
    pub path: &'static str,
    pub fields: &'static [&'static str],
}

impl DiseaseConfig {
    pub fn endpoint(&self, base: &Url) -> Result<Url, HealthError> {
        resolve_endpoint(base, self.path)
    }
}

static DIABETES: DiseaseConfig = DiseaseConfig {
    key: "diabetes",
    title: "Diabetes Prediction",
    path: "predict-diabetes",
    fields: &[
        "Pregnancies",
        "Glucose",
        "BloodPressure",
        "SkinThickness",
        "Insulin",
        "BMI",
        "DiabetesPedigreeFunction",
        "Age",
    ],
};

static HEART: DiseaseConfig = DiseaseConfig {
    key: "heart",
    title: "Heart Disease Prediction",
    path: "predict-heart-disease",
    fields: &[
        "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
        "slope", "ca", "thal",
    ],
};

static PARKINSONS: DiseaseConfig = DiseaseConfig {
    key: "parkinsons",
    title: "Parkinson's Prediction",
    path: "predict-parkinsons",
    fields: &[
        "fo",
        "fhi",
        "flo",
        "Jitter_percent",
        "Jitter_Abs",
        "RAP",
        "PPQ",
        "DDP",
        "Shimmer",
        "Shimmer_dB",
        "APQ3",
        "APQ5",
        "APQ",
        "DDA",
        "NHR",
        "HNR",
        "RPDE",
        "DFA",
        "spread1",
        "spread2",
        "D2",
        "PPE",
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disease {
    #[default]
    Diabetes,
    Heart,
    Parkinsons,
}

impl Disease {
    pub const ALL: [Disease; 3] = [Disease::Diabetes, Disease::Heart, Disease::Parkinsons];

    pub fn config(&self) -> &'static DiseaseConfig {
        match self {
            Disease::Diabetes => &DIABETES,
            Disease::Heart => &HEART,
            Disease::Parkinsons => &PARKINSONS,
        }
    }

    pub fn key(&self) -> &'static str {
        self.config().key
    }

    /// Label shown in the disease selector.
    pub fn label(&self) -> &'static str {
        match self {
            Disease::Diabetes => "Diabetes",
            Disease::Heart => "Heart Disease",
            Disease::Parkinsons => "Parkinson's",
        }
    }

    pub fn fields(&self) -> &'static [&'static str] {
        self.config().fields
    }
}

/// Joins `path` onto `base`, keeping any path prefix the base already has.
pub fn resolve_endpoint(base: &Url, path: &str) -> Result<Url, HealthError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    Ok(base.join(path.trim_start_matches('/'))?)
}

pub fn parse_base_url(raw: &str) -> Result<Url, HealthError> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(HealthError::Custom(format!("Unsupported URL scheme: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_endpoints() {
        let base = parse_base_url(DEFAULT_SERVER_URL).unwrap();

        let endpoints: Vec<String> = Disease::ALL
            .iter()
            .map(|d| d.config().endpoint(&base).unwrap().to_string())
            .collect();

        assert_eq!(
            endpoints,
            vec![
                "http://localhost:8000/predict-diabetes",
                "http://localhost:8000/predict-heart-disease",
                "http://localhost:8000/predict-parkinsons",
            ]
        );
    }

    #[test]
    fn test_endpoint_keeps_base_prefix() {
        let base = parse_base_url("https://example.org/api").unwrap();
        let url = Disease::Heart.config().endpoint(&base).unwrap();
        assert_eq!(url.as_str(), "https://example.org/api/predict-heart-disease");

        let base = parse_base_url("https://example.org/api/").unwrap();
        let url = Disease::Heart.config().endpoint(&base).unwrap();
        assert_eq!(url.as_str(), "https://example.org/api/predict-heart-disease");
    }

    #[test]
    fn test_parse_base_url_rejects_bad_input() {
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("ftp://localhost:8000").is_err());
        assert!(parse_base_url("  http://127.0.0.1:9000  ").is_ok());
    }

    #[test]
    fn test_field_tables() {
        assert_eq!(Disease::Diabetes.fields().len(), 8);
        assert_eq!(Disease::Heart.fields().len(), 13);
        assert_eq!(Disease::Parkinsons.fields().len(), 22);

        assert_eq!(Disease::Diabetes.fields()[0], "Pregnancies");
        assert_eq!(Disease::Diabetes.fields()[7], "Age");
        assert_eq!(Disease::Heart.fields()[12], "thal");
        assert_eq!(Disease::Parkinsons.fields()[3], "Jitter_percent");
        assert_eq!(Disease::Parkinsons.fields()[21], "PPE");

        for disease in Disease::ALL {
            let unique: HashSet<_> = disease.fields().iter().collect();
            assert_eq!(unique.len(), disease.fields().len(), "duplicate field in {:?}", disease);
        }
    }

    #[test]
    fn test_keys_and_titles() {
        assert_eq!(Disease::Diabetes.key(), "diabetes");
        assert_eq!(Disease::Heart.key(), "heart");
        assert_eq!(Disease::Parkinsons.key(), "parkinsons");
        assert_eq!(Disease::Parkinsons.config().title, "Parkinson's Prediction");
        assert_eq!(Disease::default(), Disease::Diabetes);

        let json = serde_json::to_string(&Disease::Parkinsons).unwrap();
        assert_eq!(json, "\"parkinsons\"");
    }
}
