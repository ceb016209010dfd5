use gloo::net::http::Request;
use shared::{Expense, ExpenseDraft};

/// Client for the remote expense service.
///
/// Every operation treats any 2xx response as success and anything else as a
/// failure with a descriptive message, including delete.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the full expense collection, in the order the service returns it.
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, String> {
        let url = format!("{}/api/items", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Vec<Expense>>().await {
                        Ok(expenses) => Ok(expenses),
                        Err(e) => Err(format!("Failed to parse expenses: {}", e)),
                    }
                } else {
                    Err(format!(
                        "Unexpected response status {} while fetching expenses",
                        response.status()
                    ))
                }
            }
            Err(e) => Err(format!("Failed to fetch expenses: {}", e)),
        }
    }

    /// Create a new expense. The service assigns the id; the response body
    /// (a 201 with the stored record, or a bare 204) is not needed.
    pub async fn create_expense(&self, draft: &ExpenseDraft) -> Result<(), String> {
        let url = format!("{}/api/items", self.base_url);

        match Request::post(&url)
            .json(draft)
            .map_err(|e| format!("Failed to serialize expense: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(error_text(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Replace all four fields of the expense identified by `id`.
    pub async fn update_expense(&self, id: &str, draft: &ExpenseDraft) -> Result<(), String> {
        let url = format!("{}/api/items/{}", self.base_url, id);

        match Request::put(&url)
            .json(draft)
            .map_err(|e| format!("Failed to serialize expense: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(error_text(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Delete the expense identified by `id`.
    pub async fn delete_expense(&self, id: &str) -> Result<(), String> {
        let url = format!("{}/api/items/{}", self.base_url, id);

        match Request::delete(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(format!(
                        "Unexpected response status {} while deleting expense",
                        response.status()
                    ))
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn error_text(response: gloo::net::http::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string())
}
