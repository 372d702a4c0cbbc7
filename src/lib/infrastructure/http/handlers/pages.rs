//! Marketing page handlers

use askama::Template;
use chrono::{Datelike, Utc};

/// The home page
#[derive(Debug, Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    /// The current year, shown in the footer
    pub year: i32,
}

/// The quote request page
#[derive(Debug, Template)]
#[template(path = "pages/quote.html")]
pub struct QuoteTemplate {
    /// The current year, shown in the footer
    pub year: i32,
}

/// Render the home page
pub async fn home() -> HomeTemplate {
    HomeTemplate {
        year: Utc::now().year(),
    }
}

/// Render the quote request page
pub async fn quote() -> QuoteTemplate {
    QuoteTemplate {
        year: Utc::now().year(),
    }
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::infrastructure::http::{router, state::test_state};

    #[tokio::test]
    async fn test_home_page_renders() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?.get("/").await;

        response.assert_status_ok();

        let html = response.text();

        assert!(html.contains("SLK Auto Repair"));
        assert!(html.contains("mobile auto repair"));

        Ok(())
    }

    #[tokio::test]
    async fn test_quote_page_renders_the_full_form() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?.get("/quote").await;

        response.assert_status_ok();

        let html = response.text();

        assert!(html.contains("Request a mobile repair quote"));

        for field in [
            "name",
            "email",
            "phone",
            "vin",
            "year",
            "make",
            "model",
            "engine",
            "serviceType",
            "description",
            "location",
        ] {
            assert!(
                html.contains(&format!("name=\"{field}\"")),
                "quote form should have a {field} field"
            );
        }

        assert!(html.contains("/api/quote"));

        Ok(())
    }
}
