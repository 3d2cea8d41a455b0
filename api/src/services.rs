use tracing::debug;

/// Services exposed to the dashboard, each built on top of the shared request client.
#[derive(Debug, Clone)]
pub struct Services<A> {
    pub auth: A,
}

impl<A> Services<A> {
    /// Hands `client` to the authentication service factory.
    pub fn new<C, F>(client: C, auth_factory: F) -> Self
    where
        F: FnOnce(C) -> A,
    {
        debug!("Building dashboard services");
        Self {
            auth: auth_factory(client),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ApiClient, RequestClient};
    use crate::config::LOCAL_BASE_URL;
    use crate::error::ApiResult;

    struct StubAuthService<C> {
        client: C,
    }

    impl<C: RequestClient> StubAuthService<C> {
        async fn login(&self, email: &str, password: &str) -> ApiResult<u16> {
            let body = serde_json::json!({"email": email, "password": password});
            let response = self.client.post("/auth/login", &body).await?;
            Ok(response.status().as_u16())
        }
    }

    #[test]
    fn test_auth_factory_receives_configured_client() {
        let client = ApiClient::with_default_config().unwrap();
        let services = Services::new(client, |client| StubAuthService { client });
        assert_eq!(services.auth.client.base_url(), LOCAL_BASE_URL);
    }

    #[tokio::test]
    async fn test_auth_service_issues_requests_through_client() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/auth/login")
            .with_status(200)
            .create_async()
            .await;

        let config = crate::config::ApiConfig::default().with_local_url(server.url());
        let client = ApiClient::new(config).unwrap();
        let services = Services::new(client, |client| StubAuthService { client });

        let status = services
            .auth
            .login("user@example.com", "secret")
            .await
            .unwrap();
        assert_eq!(status, 200);
    }
}
