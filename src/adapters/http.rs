use crate::domain::model::{Pet, PetStatus};
use crate::domain::ports::{ConfigProvider, PetStore};
use crate::utils::error::{PetConsoleError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, Response};
use std::time::Duration;

/// `PetStore` backed by the service's REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpPetStore {
    client: Client,
    base_url: String,
}

impl HttpPetStore {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in config.headers() {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                PetConsoleError::InvalidConfigValue {
                    field: "api.headers".to_string(),
                    value: name.clone(),
                    reason: format!("Invalid header name: {}", e),
                }
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                PetConsoleError::InvalidConfigValue {
                    field: format!("api.headers.{}", name),
                    value: value.clone(),
                    reason: format!("Invalid header value: {}", e),
                }
            })?;
            headers.insert(header_name, header_value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(seconds) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turns a non-success response into `RejectedStatus`, keeping the
    /// service's own `message` when the body carries one.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        tracing::debug!("Pet service response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Network response was not ok")
                    .to_string()
            });

        Err(PetConsoleError::rejected(status, message))
    }

    async fn read_json(response: Response) -> Result<serde_json::Value> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl PetStore for HttpPetStore {
    async fn find_by_status(&self, status: PetStatus) -> Result<Vec<Pet>> {
        let url = self.url("/pet/findByStatus");
        tracing::debug!("GET {}?status={}", url, status);

        let response = self
            .client
            .get(&url)
            .query(&[("status", status.as_str())])
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let records: Vec<serde_json::Value> =
            serde_json::from_value(Self::read_json(response).await?)?;
        let total = records.len();
        let pets: Vec<Pet> = records
            .iter()
            .filter_map(|record| {
                let pet = Pet::from_json(record);
                if pet.is_none() {
                    tracing::warn!("Skipping {} pet record without a usable id: {}", status, record);
                }
                pet
            })
            .collect();
        tracing::debug!("Received {} of {} {} pets", pets.len(), total, status);
        Ok(pets)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Pet>> {
        let url = self.url(&format!("/pet/{}", id));
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        let body = Self::read_json(response).await?;
        if body.get("id").map_or(true, |v| v.is_null()) {
            tracing::debug!("Response for pet {} has no id", id);
            return Ok(None);
        }
        match Pet::from_json(&body) {
            Some(pet) => Ok(Some(pet)),
            None => Err(<serde_json::Error as serde::de::Error>::custom(format!(
                "pet id {} is not an integer id",
                body["id"]
            ))
            .into()),
        }
    }

    async fn create(&self, pet: &Pet) -> Result<serde_json::Value> {
        let url = self.url("/pet");
        tracing::debug!("POST {} (id {})", url, pet.id);

        let response = self.client.post(&url).json(pet).send().await?;
        let response = Self::check_status(response).await?;
        Self::read_json(response).await
    }

    async fn update(&self, pet: &Pet) -> Result<serde_json::Value> {
        let url = self.url("/pet");
        tracing::debug!("PUT {} (id {})", url, pet.id);

        let response = self.client.put(&url).json(pet).send().await?;
        let response = Self::check_status(response).await?;
        Self::read_json(response).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let url = self.url(&format!("/pet/{}", id));
        tracing::debug!("DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    struct TestConfig {
        base_url: String,
        headers: Vec<(String, String)>,
    }

    impl ConfigProvider for TestConfig {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn timeout_seconds(&self) -> Option<u64> {
            Some(5)
        }

        fn headers(&self) -> &[(String, String)] {
            &self.headers
        }

        fn default_status(&self) -> &str {
            "available"
        }
    }

    fn store_for(server: &MockServer) -> HttpPetStore {
        HttpPetStore::new(&TestConfig {
            base_url: format!("{}/", server.base_url()),
            headers: vec![("api_key".to_string(), "special-key".to_string())],
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_find_by_status_sends_query_and_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/pet/findByStatus")
                .query_param("status", "sold")
                .header("api_key", "special-key")
                .header("accept", "application/json");
            then.status(200)
                .json_body(json!([{"id": 1, "name": "Rex", "status": "sold"}]));
        });

        let pets = store_for(&server)
            .find_by_status(PetStatus::Sold)
            .await
            .unwrap();

        mock.assert();
        assert_eq!(pets, vec![Pet::new(1, "Rex", "sold")]);
    }

    #[tokio::test]
    async fn test_rejected_status_uses_service_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pet/404");
            then.status(404)
                .json_body(json!({"code": 1, "type": "error", "message": "Pet not found"}));
        });

        let err = store_for(&server).get_by_id(404).await.unwrap_err();
        match err {
            PetConsoleError::RejectedStatus { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Pet not found");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejected_status_without_body_uses_reason() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/pet/3");
            then.status(500);
        });

        let err = store_for(&server).delete(3).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Request rejected with status 500: Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_get_by_id_without_id_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pet/8");
            then.status(200).json_body(json!({"name": "ghost"}));
        });

        assert_eq!(store_for(&server).get_by_id(8).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_by_status_keeps_readable_records() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/pet/findByStatus")
                .query_param("status", "available");
            then.status(200).json_body(json!([
                {"id": 1, "name": "Rex", "status": "available"},
                {"name": "noid", "status": "available"},
                {"id": 9223372036854775808u64, "name": "huge"},
                {"id": 2, "name": 42, "status": "available"}
            ]));
        });

        let pets = store_for(&server)
            .find_by_status(PetStatus::Available)
            .await
            .unwrap();

        assert_eq!(
            pets,
            vec![
                Pet::new(1, "Rex", "available"),
                Pet::new(2, "42", "available"),
            ]
        );
    }

    #[tokio::test]
    async fn test_find_by_status_non_array_is_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pet/findByStatus");
            then.status(200).json_body(json!({"id": 1}));
        });

        let err = store_for(&server)
            .find_by_status(PetStatus::Sold)
            .await
            .unwrap_err();
        assert!(matches!(err, PetConsoleError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_get_by_id_odd_field_types() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pet/6");
            then.status(200)
                .json_body(json!({"id": 6, "name": {"first": "Bo"}, "status": 1}));
        });

        let pet = store_for(&server).get_by_id(6).await.unwrap().unwrap();
        assert_eq!(pet.id, 6);
        assert_eq!(pet.name_or_blank(), r#"{"first":"Bo"}"#);
        assert_eq!(pet.status_or_blank(), "1");
    }

    #[tokio::test]
    async fn test_get_by_id_oversized_id_is_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pet/9");
            then.status(200)
                .json_body(json!({"id": 9223372036854775808u64, "name": "huge"}));
        });

        let err = store_for(&server).get_by_id(9).await.unwrap_err();
        assert!(matches!(err, PetConsoleError::Serialization(_)));
        assert!(err.to_string().contains("9223372036854775808"));
    }

    #[tokio::test]
    async fn test_delete_ignores_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(DELETE).path("/pet/11");
            then.status(200).body("");
        });

        store_for(&server).delete(11).await.unwrap();
        mock.assert();
    }

    #[test]
    fn test_invalid_header_name_is_config_error() {
        let err = HttpPetStore::new(&TestConfig {
            base_url: "http://localhost".to_string(),
            headers: vec![("bad header".to_string(), "x".to_string())],
        })
        .unwrap_err();

        assert!(matches!(err, PetConsoleError::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let store = HttpPetStore::new(&TestConfig {
            base_url: "https://petstore.swagger.io/v2/".to_string(),
            headers: vec![],
        })
        .unwrap();

        assert_eq!(store.base_url(), "https://petstore.swagger.io/v2");
        assert_eq!(store.url("/pet"), "https://petstore.swagger.io/v2/pet");
    }
}
