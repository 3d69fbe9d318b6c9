use std::sync::Arc;

use common::config::Config;

use crate::organizations::Organizations;
use crate::robots::Robots;
use crate::teams::Teams;
use crate::tokens::Tokens;
use crate::transport::HttpTransport;
use crate::transport::Transport;
use crate::Result;

/// Every resource family client, sharing one transport.
pub struct SdkProvider {
    pub organizations: Arc<Organizations>,
    pub robots: Arc<Robots>,
    pub teams: Arc<Teams>,
    pub tokens: Arc<Tokens>,
}

impl SdkProvider {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            organizations: Arc::new(Organizations::new(transport.clone())),
            robots: Arc::new(Robots::new(transport.clone())),
            teams: Arc::new(Teams::new(transport.clone())),
            tokens: Arc::new(Tokens::new(transport)),
        }
    }

    pub fn try_from_config(cfg: &Config) -> Result<Self> {
        let transport = Arc::new(HttpTransport::try_new(&cfg.api)?);

        Ok(Self::new(transport))
    }
}
