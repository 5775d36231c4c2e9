//! Mock API implementation for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::api::{ApiResult, CrmApi, HealthReport};
use crate::domain::client::{Client, NewClient};
use crate::domain::deal::{Deal, NewDeal};
use crate::domain::types::{ClientId, DealId};

mock! {
    pub Api {}

    #[async_trait]
    impl CrmApi for Api {
        async fn list_clients(&self) -> ApiResult<Vec<Client>>;
        async fn get_client(&self, id: ClientId) -> ApiResult<Client>;
        async fn create_client(&self, new_client: &NewClient) -> ApiResult<Client>;
        async fn list_deals(&self) -> ApiResult<Vec<Deal>>;
        async fn get_deal(&self, id: DealId) -> ApiResult<Deal>;
        async fn create_deal(&self, new_deal: &NewDeal) -> ApiResult<Deal>;
        async fn health(&self) -> ApiResult<HealthReport>;
    }
}
