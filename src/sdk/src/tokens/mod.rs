pub mod types;

use std::sync::Arc;

use crate::ids::TokenId;
use crate::resource::ResourceClient;
use crate::transport::Transport;
use crate::Result;
pub use types::TokenAttributes;
pub use types::TokenCreateParameters;
pub use types::TokenOwnerType;
pub use types::TokenResponse;
pub use types::TokensResponse;

pub const BASE_PATH: &str = "v1/tokens";

pub struct Tokens {
    resource: ResourceClient,
}

impl Tokens {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            resource: ResourceClient::new(transport, BASE_PATH),
        }
    }

    /// Creates a token; the secret is available once via [`TokenResponse::jwt`].
    pub async fn create(&self, params: &TokenCreateParameters) -> Result<TokenResponse> {
        self.resource.create(params).await
    }

    pub async fn get(&self, id: TokenId) -> Result<TokenResponse> {
        self.resource.get(id).await
    }

    pub async fn delete(&self, id: TokenId) -> Result<()> {
        self.resource.delete(id).await
    }
}
